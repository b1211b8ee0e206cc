//! Sink registry for discovering backends by id.

use std::collections::HashMap;
use std::sync::Arc;

use eventics_core::EventSink;

use crate::tracing_sink::TracingSink;

/// Registry of named backend sinks.
///
/// Sinks are stored as `Arc<dyn EventSink>` so one instance can be shared
/// between the registry, managers, and tests.
///
/// # Example
///
/// ```
/// use eventics_adapters::SinkRegistry;
///
/// let registry = SinkRegistry::new();
/// for id in registry.list() {
///     println!("available backend: {}", id);
/// }
/// let sink = registry.get("tracing").unwrap();
/// ```
pub struct SinkRegistry {
    sinks: HashMap<String, Arc<dyn EventSink>>,
}

impl SinkRegistry {
    /// Creates a registry with the built-in `tracing` sink registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("tracing", Arc::new(TracingSink::new()));
        registry
    }

    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            sinks: HashMap::new(),
        }
    }

    /// Registers a sink under an id. A same-id registration replaces the
    /// previous sink.
    pub fn register(&mut self, id: impl Into<String>, sink: Arc<dyn EventSink>) {
        self.sinks.insert(id.into(), sink);
    }

    /// Gets a sink by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn EventSink>> {
        self.sinks.get(id).cloned()
    }

    /// Lists all registered sink ids.
    pub fn list(&self) -> Vec<&str> {
        self.sinks.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns true if no sinks are registered.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Gets the default sink (`tracing`).
    pub fn default_sink(&self) -> Option<Arc<dyn EventSink>> {
        self.get("tracing")
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
