//! Reference backend sinks for Eventics.
//!
//! The core defines only the [`EventSink`](eventics_core::EventSink)
//! contract; this crate provides the adapters a host application wires in:
//!
//! - **TracingSink**: records events through structured `tracing` output
//! - **MemorySink**: collects events in memory for tests and diagnostics
//! - **FanoutSink**: forwards one event to several backends in order
//! - **SinkRegistry**: discovers sinks by id
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use eventics_adapters::{MemorySink, SinkRegistry};
//! use eventics_core::EventicsManager;
//! use eventics_models::EventContext;
//!
//! let memory = Arc::new(MemorySink::new());
//! let mut registry = SinkRegistry::new();
//! registry.register("memory", memory.clone());
//!
//! let manager = EventicsManager::new(registry.get("memory").unwrap())
//!     .with_context(EventContext::new("Demo"));
//! manager.log("APP_OPENED");
//!
//! assert_eq!(memory.len(), 1);
//! ```

pub mod fanout;
pub mod memory;
pub mod registry;
pub mod tracing_sink;

pub use fanout::FanoutSink;
pub use memory::{MemorySink, RecordedEvent};
pub use registry::SinkRegistry;
pub use tracing_sink::TracingSink;
