//! Sink that records events through `tracing`.

use tracing::info;

use eventics_core::{BoxError, EventSink, NormalizedProperties};
use eventics_models::EventContext;

/// Backend sink that emits each event as a structured `tracing::info!`
/// record under the `eventics` target.
///
/// Useful as the local-logging backend during development, or alongside a
/// real analytics backend inside a [`FanoutSink`](crate::FanoutSink).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn dispatch(
        &self,
        context: &EventContext,
        event_name: &str,
        properties: &NormalizedProperties,
    ) -> Result<(), BoxError> {
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        info!(
            target: "eventics",
            app = %context.app_name,
            event = %event_name,
            properties = %rendered.join(" "),
            "event dispatched"
        );
        Ok(())
    }
}
