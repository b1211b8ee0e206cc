//! Super-property providers.

use eventics_models::{EventContext, PropertyMap};

use crate::error::BoxError;

/// Supplies global properties attached to every event.
///
/// A provider is queried once per log call, after validation and before the
/// event-specific properties are merged in. It should be side-effect-light;
/// recomputing time-varying values (a timestamp, a session age) on every
/// call is expected. No caching is mandated or forbidden.
///
/// Well-behaved providers do not fail. If one does, the manager absorbs the
/// error during property construction and the event is not dispatched.
///
/// # Example
///
/// ```
/// use eventics_core::SuperPropertiesProvider;
/// use eventics_core::BoxError;
/// use eventics_models::{EventContext, PropertyMap, put};
///
/// struct AppProperties;
///
/// impl SuperPropertiesProvider for AppProperties {
///     fn super_properties(&self, context: &EventContext) -> Result<PropertyMap, BoxError> {
///         let mut props = PropertyMap::new();
///         put(&mut props, "AppName", context.app_name.clone());
///         Ok(props)
///     }
/// }
/// ```
pub trait SuperPropertiesProvider: Send + Sync {
    /// Returns the global properties for the given context.
    fn super_properties(&self, context: &EventContext) -> Result<PropertyMap, BoxError>;
}
