//! Builder patterns for event descriptors.

use crate::event::EventDescriptor;
use crate::value::{PropertyMap, PropertyValue};

/// Builder for creating [`EventDescriptor`] instances with a fluent API.
///
/// # Example
///
/// ```
/// use eventics_models::EventDescriptor;
///
/// let event = EventDescriptor::builder("PURCHASE_COMPLETED")
///     .property("sku", "W-100")
///     .property("amount", 29.99)
///     .build();
///
/// assert_eq!(event.name, "PURCHASE_COMPLETED");
/// assert_eq!(event.properties.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EventDescriptorBuilder {
    name: String,
    properties: PropertyMap,
}

impl EventDescriptorBuilder {
    /// Creates a new builder for the named event.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Adds a property, converting the value into a [`PropertyValue`].
    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Merges a whole property map in. Same-key entries overwrite.
    pub fn properties(mut self, properties: PropertyMap) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> EventDescriptor {
        EventDescriptor {
            name: self.name,
            properties: self.properties,
        }
    }
}
