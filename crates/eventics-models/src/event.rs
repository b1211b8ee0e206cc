//! Event descriptors.
//!
//! An event is a named occurrence with an associated property set. The
//! [`Eventic`] trait is the capability any loggable type implements;
//! [`EventDescriptor`] is the plain data form for callers that do not want
//! a dedicated type per event.

use crate::builders::EventDescriptorBuilder;
use crate::value::{PropertyMap, PropertyValue};

/// Capability implemented by any loggable event type.
///
/// Implementors define the event name and the properties attached to it,
/// giving a uniform structure across different kinds of events.
///
/// # Example
///
/// ```
/// use eventics_models::{Eventic, PropertyMap, put};
///
/// struct UserSignedIn {
///     user_id: i64,
///     login_method: String,
/// }
///
/// impl Eventic for UserSignedIn {
///     fn event_name(&self) -> &str {
///         "USER_SIGNED_IN"
///     }
///
///     fn properties(&self) -> PropertyMap {
///         let mut props = PropertyMap::new();
///         put(&mut props, "user_id", self.user_id);
///         put(&mut props, "login_method", self.login_method.clone());
///         props
///     }
/// }
/// ```
pub trait Eventic {
    /// The name of the event. Should be a stable identifier such as
    /// `"USER_SIGNED_IN"` or `"PURCHASE_COMPLETED"`.
    fn event_name(&self) -> &str;

    /// The properties attached to the event. Defaults to an empty map for
    /// zero-property events.
    fn properties(&self) -> PropertyMap {
        PropertyMap::new()
    }
}

/// A plain event descriptor: name plus property map.
///
/// Constructed by the caller, consumed once by the manager, then discarded;
/// it is never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDescriptor {
    /// Event name. Must be non-empty to pass validation at dispatch time.
    pub name: String,

    /// Event-specific properties.
    pub properties: PropertyMap,
}

impl EventDescriptor {
    /// Creates a descriptor with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Creates a descriptor with the given properties.
    pub fn with_properties(name: impl Into<String>, properties: PropertyMap) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Creates a builder for a descriptor with a fluent API.
    pub fn builder(name: impl Into<String>) -> EventDescriptorBuilder {
        EventDescriptorBuilder::new(name)
    }
}

impl Eventic for EventDescriptor {
    fn event_name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> PropertyMap {
        self.properties.clone()
    }
}

/// Inserts a key-value pair into a property map, converting the value into
/// a [`PropertyValue`].
///
/// This is the free-function form of the classification entry point: any
/// type with a `From` conversion into `PropertyValue` can be inserted
/// without spelling the variant.
pub fn put(properties: &mut PropertyMap, key: impl Into<String>, value: impl Into<PropertyValue>) {
    properties.insert(key.into(), value.into());
}
