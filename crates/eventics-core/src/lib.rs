//! Event manager, property normalization, and sink contracts for Eventics.
//!
//! This crate is the orchestrating core of the façade:
//! - [`EventicsManager`] validates event names, merges super-properties
//!   with event-specific properties, normalizes the result, and hands it to
//!   a backend sink, absorbing every failure along the way.
//! - [`NormalizedProperties`] is the backend-transportable container with
//!   the documented lossy coercion rules.
//! - [`EventSink`], [`SuperPropertiesProvider`], and [`ErrorHandler`] are
//!   the seams concrete integrations plug into.
//! - [`enable_debug_mode`] toggles the process-wide diagnostic mirror.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use eventics_core::{BoxError, EventSink, EventicsManager, NormalizedProperties};
//! use eventics_models::{put, EventContext};
//!
//! struct PrintlnSink;
//!
//! impl EventSink for PrintlnSink {
//!     fn dispatch(
//!         &self,
//!         _context: &EventContext,
//!         event_name: &str,
//!         properties: &NormalizedProperties,
//!     ) -> Result<(), BoxError> {
//!         println!("{event_name}: {} properties", properties.len());
//!         Ok(())
//!     }
//! }
//!
//! let manager = EventicsManager::new(Arc::new(PrintlnSink))
//!     .with_context(EventContext::new("Demo"));
//!
//! manager.log_with("PRODUCT_CLICK", |props| {
//!     put(props, "ProductName", "Widget");
//!     put(props, "BasePrice", 10.0);
//! });
//! ```

pub mod debug;
pub mod error;
pub mod manager;
pub mod properties;
pub mod provider;
pub mod sink;

pub use debug::{enable_debug_mode, DebugMode, DEBUG_ENV};
pub use error::{BoxError, EventicsError};
pub use manager::EventicsManager;
pub use properties::NormalizedProperties;
pub use provider::SuperPropertiesProvider;
pub use sink::{ErrorHandler, EventSink, TracingErrorHandler};
