//! In-memory recording sink.

use std::sync::{Arc, Mutex};

use eventics_core::{BoxError, EventSink, NormalizedProperties};
use eventics_models::EventContext;

/// One event as a [`MemorySink`] received it.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    /// Name of the application the event was dispatched under.
    pub app_name: String,
    /// Event name.
    pub event_name: String,
    /// The normalized property set that was delivered.
    pub properties: NormalizedProperties,
}

/// Backend sink that appends every dispatched event to an in-memory list.
///
/// Intended for tests and diagnostics. Clones share the same underlying
/// list, so one clone can be handed to a manager while another inspects
/// what arrived.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far, in dispatch order.
    pub fn records(&self) -> Vec<RecordedEvent> {
        self.records.lock().unwrap().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the recorded events.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl EventSink for MemorySink {
    fn dispatch(
        &self,
        context: &EventContext,
        event_name: &str,
        properties: &NormalizedProperties,
    ) -> Result<(), BoxError> {
        self.records.lock().unwrap().push(RecordedEvent {
            app_name: context.app_name.clone(),
            event_name: event_name.to_string(),
            properties: properties.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventics_models::PropertyValue;

    fn make_properties() -> NormalizedProperties {
        let mut props = NormalizedProperties::new();
        props.insert("k", PropertyValue::Int(1));
        props
    }

    #[test]
    fn test_records_in_dispatch_order() {
        let sink = MemorySink::new();
        let context = EventContext::new("Demo");

        sink.dispatch(&context, "FIRST", &make_properties()).unwrap();
        sink.dispatch(&context, "SECOND", &make_properties()).unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event_name, "FIRST");
        assert_eq!(records[1].event_name, "SECOND");
        assert_eq!(records[0].app_name, "Demo");
    }

    #[test]
    fn test_clones_share_records() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        let context = EventContext::new("Demo");

        sink.dispatch(&context, "EVENT", &make_properties()).unwrap();

        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn test_clear() {
        let sink = MemorySink::new();
        let context = EventContext::new("Demo");
        sink.dispatch(&context, "EVENT", &make_properties()).unwrap();

        sink.clear();

        assert!(sink.is_empty());
    }
}
