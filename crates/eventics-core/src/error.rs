//! Error types for event logging.
//!
//! No error here ever crosses the public `log` surface. Every failure is
//! routed to the manager's [`ErrorHandler`](crate::sink::ErrorHandler) so a
//! caller can surface, swallow, or report it uniformly.

use thiserror::Error;

/// Boxed error type sinks and providers use for their causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while logging an event.
///
/// Each variant carries the name of the event it is attributed to, so a
/// failure can be traced back without aborting the caller.
#[derive(Error, Debug)]
pub enum EventicsError {
    /// The event name failed validation (empty).
    #[error("Invalid event: {event_name}")]
    InvalidEvent {
        /// Name the caller passed in.
        event_name: String,
    },

    /// Building the normalized property set failed (super-property
    /// provider raised). Dispatch was skipped entirely.
    #[error("Failed to log event: {event_name}")]
    PropertyBuild {
        /// Name of the event being logged.
        event_name: String,
        /// Underlying failure.
        #[source]
        source: BoxError,
    },

    /// The backend sink raised during dispatch. The debug mirror was
    /// skipped for this call.
    #[error("Failed to log event: {event_name}")]
    Dispatch {
        /// Name of the event being logged.
        event_name: String,
        /// Underlying failure.
        #[source]
        source: BoxError,
    },
}

impl EventicsError {
    /// The name of the event this error is attributed to.
    pub fn event_name(&self) -> &str {
        match self {
            EventicsError::InvalidEvent { event_name } => event_name,
            EventicsError::PropertyBuild { event_name, .. } => event_name,
            EventicsError::Dispatch { event_name, .. } => event_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_event_display() {
        let error = EventicsError::InvalidEvent {
            event_name: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid event: ");
        assert_eq!(error.event_name(), "");
    }

    #[test]
    fn test_dispatch_display_and_cause() {
        let cause: BoxError = "backend unavailable".into();
        let error = EventicsError::Dispatch {
            event_name: "PRODUCT_CLICK".to_string(),
            source: cause,
        };

        assert_eq!(error.to_string(), "Failed to log event: PRODUCT_CLICK");
        assert_eq!(error.event_name(), "PRODUCT_CLICK");
        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some("backend unavailable".to_string())
        );
    }

    #[test]
    fn test_property_build_display() {
        let error = EventicsError::PropertyBuild {
            event_name: "HOME_EVENT".to_string(),
            source: "clock read failed".into(),
        };
        assert_eq!(error.to_string(), "Failed to log event: HOME_EVENT");
    }
}
