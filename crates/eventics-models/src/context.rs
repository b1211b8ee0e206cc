//! Event context.

use serde::{Deserialize, Serialize};

use crate::value::{PropertyMap, PropertyValue};

/// The context events are enriched and dispatched under.
///
/// A manager without a bound context silently drops every log call, since
/// enrichment and dispatch are meaningless without one. Super-property
/// providers receive the context on every query and typically read the app
/// identity or ambient attributes from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    /// Name of the application emitting events.
    pub app_name: String,

    /// Free-form ambient attributes (installation id, build flavor, ...).
    #[serde(default)]
    pub attributes: PropertyMap,
}

impl EventContext {
    /// Creates a context for the given application.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            attributes: PropertyMap::new(),
        }
    }

    /// Adds an ambient attribute.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Looks up an ambient attribute.
    pub fn attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes.get(key)
    }
}
