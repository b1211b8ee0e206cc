//! Multi-backend fan-out sink.

use std::sync::Arc;

use eventics_core::{BoxError, EventSink, NormalizedProperties};
use eventics_models::EventContext;

/// Forwards each event to an ordered list of sinks.
///
/// Dispatch stops at the first sink that fails and surfaces its error; the
/// manager wraps it and routes it to the error handler like any other
/// dispatch failure. Sinks earlier in the list have already received the
/// event at that point; delivery across backends is not transactional.
#[derive(Clone, Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutSink {
    /// Creates a fan-out with no backends. Dispatch succeeds trivially
    /// until sinks are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a backend. Order of addition is dispatch order.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Number of backends.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns true if no backends are attached.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for FanoutSink {
    fn dispatch(
        &self,
        context: &EventContext,
        event_name: &str,
        properties: &NormalizedProperties,
    ) -> Result<(), BoxError> {
        for sink in &self.sinks {
            sink.dispatch(context, event_name, properties)?;
        }
        Ok(())
    }
}
