//! The event manager: validation, enrichment, dispatch, error isolation.

use std::sync::Arc;

use eventics_models::{EventContext, Eventic, PropertyMap};

use crate::debug;
use crate::error::EventicsError;
use crate::properties::NormalizedProperties;
use crate::provider::SuperPropertiesProvider;
use crate::sink::{ErrorHandler, EventSink, TracingErrorHandler};

/// Logs named, typed events to a backend sink, enriching each one with
/// super-properties.
///
/// Every `log*` call is synchronous and self-contained: validate the name,
/// merge super-properties with event-specific properties, normalize, hand
/// the result to the sink, mirror to the debug channel. Failures at any
/// stage are absorbed and routed to the error handler; nothing ever
/// propagates to the caller. The manager holds no queue or buffered state.
///
/// A manager without a bound context drops every event silently; enrichment
/// and dispatch require a context.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use eventics_core::{EventSink, EventicsManager, NormalizedProperties, BoxError};
/// use eventics_models::EventContext;
///
/// struct NullSink;
///
/// impl EventSink for NullSink {
///     fn dispatch(
///         &self,
///         _context: &EventContext,
///         _event_name: &str,
///         _properties: &NormalizedProperties,
///     ) -> Result<(), BoxError> {
///         Ok(())
///     }
/// }
///
/// let manager = EventicsManager::new(Arc::new(NullSink))
///     .with_context(EventContext::new("Demo"));
///
/// manager.log("USER_SIGNED_UP");
/// manager.log_with("USER_SIGNED_UP", |props| {
///     eventics_models::put(props, "source", "email");
///     eventics_models::put(props, "successful", true);
/// });
/// ```
pub struct EventicsManager {
    /// Context events are enriched and dispatched under. None disables the
    /// manager.
    context: Option<EventContext>,
    /// Optional provider of global properties. None means no enrichment.
    super_properties: Option<Arc<dyn SuperPropertiesProvider>>,
    /// Destination for normalized events.
    sink: Arc<dyn EventSink>,
    /// Receives every absorbed failure.
    error_handler: Arc<dyn ErrorHandler>,
}

impl EventicsManager {
    /// Creates a manager bound to the given sink, with no context, no
    /// super-properties, and the default tracing error handler.
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            context: None,
            super_properties: None,
            sink,
            error_handler: Arc::new(TracingErrorHandler),
        }
    }

    /// Binds the context. Without one, every log call is a silent no-op.
    pub fn with_context(mut self, context: EventContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Binds a super-properties provider, queried once per log call.
    pub fn with_super_properties(mut self, provider: Arc<dyn SuperPropertiesProvider>) -> Self {
        self.super_properties = Some(provider);
        self
    }

    /// Replaces the error handler.
    pub fn with_error_handler(mut self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handler = handler;
        self
    }

    /// Logs an event with the specified name and no additional properties.
    pub fn log(&self, event_name: &str) {
        self.log_inner(event_name, PropertyMap::new());
    }

    /// Logs any type implementing the [`Eventic`] capability.
    pub fn log_event(&self, event: &dyn Eventic) {
        self.log_inner(event.event_name(), event.properties());
    }

    /// Logs an event whose properties are populated by a closure.
    ///
    /// The closure receives a mutable property map and runs eagerly, before
    /// this call returns.
    pub fn log_with(&self, event_name: &str, build: impl FnOnce(&mut PropertyMap)) {
        let mut properties = PropertyMap::new();
        build(&mut properties);
        self.log_inner(event_name, properties);
    }

    /// Logs an event with a name and a predefined property map.
    pub fn log_properties(&self, event_name: &str, properties: PropertyMap) {
        self.log_inner(event_name, properties);
    }

    /// Logs an event constructed lazily. The closure is invoked
    /// immediately; equivalent to `log_event(&build())`.
    pub fn log_from<E: Eventic>(&self, build: impl FnOnce() -> E) {
        let event = build();
        self.log_event(&event);
    }

    /// The converging primitive every public entry point funnels into.
    fn log_inner(&self, event_name: &str, properties: PropertyMap) {
        if !validate_event(event_name) {
            self.error_handler
                .on_logging_error(&EventicsError::InvalidEvent {
                    event_name: event_name.to_string(),
                });
            return;
        }

        let Some(context) = &self.context else {
            return;
        };

        let normalized = match self.build_properties(context, event_name, properties) {
            Ok(normalized) => normalized,
            Err(error) => {
                self.error_handler.on_logging_error(&error);
                return;
            }
        };

        match self.sink.dispatch(context, event_name, &normalized) {
            Ok(()) => debug::mirror_event(event_name, &normalized),
            Err(source) => self
                .error_handler
                .on_logging_error(&EventicsError::Dispatch {
                    event_name: event_name.to_string(),
                    source,
                }),
        }
    }

    /// Builds the normalized set: super-properties first, event properties
    /// overlaid key-by-key. All-or-nothing; a provider failure aborts the
    /// whole construction.
    fn build_properties(
        &self,
        context: &EventContext,
        event_name: &str,
        properties: PropertyMap,
    ) -> Result<NormalizedProperties, EventicsError> {
        let mut normalized = NormalizedProperties::new();

        if let Some(provider) = &self.super_properties {
            let supers = provider.super_properties(context).map_err(|source| {
                EventicsError::PropertyBuild {
                    event_name: event_name.to_string(),
                    source,
                }
            })?;
            normalized.extend(supers);
        }
        normalized.extend(properties);

        Ok(normalized)
    }
}

fn validate_event(event_name: &str) -> bool {
    !event_name.is_empty()
}
