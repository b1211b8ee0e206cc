//! Backend sink and error handler contracts.
//!
//! These are the seams concrete analytics adapters plug into. The core
//! defines only the contracts; transmission, persistence, and transport are
//! entirely the sink's responsibility.

use eventics_models::EventContext;
use tracing::error;

use crate::error::{BoxError, EventicsError};
use crate::properties::NormalizedProperties;

/// A destination for normalized events.
///
/// Implementations perform the actual transmission or recording. A sink may
/// block; the manager calls it synchronously and any blocking is visible to
/// the caller. Any error a sink returns is caught by the manager, wrapped,
/// and routed to the [`ErrorHandler`]; it never reaches the code that
/// logged the event.
pub trait EventSink: Send + Sync {
    /// Delivers one event.
    fn dispatch(
        &self,
        context: &EventContext,
        event_name: &str,
        properties: &NormalizedProperties,
    ) -> Result<(), BoxError>;
}

/// Receives every logging failure the manager absorbs.
///
/// Implementations typically log locally or forward to a crash-reporting
/// system. A handler must not fail; there is nothing left to catch it.
pub trait ErrorHandler: Send + Sync {
    /// Called once per absorbed failure.
    fn on_logging_error(&self, error: &EventicsError);
}

/// Default handler: reports failures through `tracing::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorHandler;

impl ErrorHandler for TracingErrorHandler {
    fn on_logging_error(&self, error: &EventicsError) {
        error!(
            target: "eventics",
            event = %error.event_name(),
            error = %error,
            "failed to log event"
        );
    }
}
