//! Mock publish sink for testing

use crate::platform::error::TransportError;
use heapless::{Deque, String, Vec};
use skiff_core::record::SampleRecord;

use super::Publisher;

/// One captured publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishEvent {
    /// Topic the record went to.
    pub topic: String<32>,
    /// Slot values visible to the transport (bounded at capacity).
    pub values: Vec<f32, 4>,
    /// Pending counter at publish time, before the per-cycle reset.
    pub pending: usize,
    /// Cycle stamp carried in the record's offset field.
    pub offset: u32,
}

/// Mock publish sink
///
/// Captures every publish for test verification and serves scripted
/// failures in order. Capture capacity is bounded; the publish counter
/// keeps counting past it.
pub struct MockPublisher {
    events: Vec<PublishEvent, 128>,
    failures: Deque<TransportError, 8>,
    publish_count: u32,
}

impl MockPublisher {
    /// Create a sink that accepts every publish.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            failures: Deque::new(),
            publish_count: 0,
        }
    }

    /// Script a failure for an upcoming publish, served in order with
    /// successful ones.
    pub fn queue_failure(&mut self, error: TransportError) {
        let _ = self.failures.push_back(error);
    }

    /// Captured publishes, oldest first.
    pub fn events(&self) -> &[PublishEvent] {
        &self.events
    }

    /// Most recent captured publish.
    pub fn last_event(&self) -> Option<&PublishEvent> {
        self.events.last()
    }

    /// Total publish attempts, including failed and uncaptured ones.
    pub fn publish_count(&self) -> u32 {
        self.publish_count
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for MockPublisher {
    fn publish(&mut self, topic: &str, record: &SampleRecord<2>) -> Result<(), TransportError> {
        self.publish_count += 1;

        if let Some(error) = self.failures.pop_front() {
            return Err(error);
        }

        let mut event = PublishEvent {
            topic: String::new(),
            values: Vec::new(),
            pending: record.pending(),
            offset: record.offset(),
        };
        let _ = event.topic.push_str(topic);
        let _ = event.values.extend_from_slice(record.values());
        let _ = self.events.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_topic_values_and_pending() {
        let mut sink = MockPublisher::new();
        let mut record = SampleRecord::<2>::new();
        record.write(0, 1.0);
        record.write(1, 2.0);
        record.stamp_offset(9);

        sink.publish("direction/wind", &record).unwrap();

        let event = sink.last_event().unwrap();
        assert_eq!(event.topic.as_str(), "direction/wind");
        assert_eq!(event.values.as_slice(), &[1.0, 2.0]);
        assert_eq!(event.pending, 2);
        assert_eq!(event.offset, 9);
    }

    #[test]
    fn scripted_failure_is_served_once() {
        let mut sink = MockPublisher::new();
        sink.queue_failure(TransportError::PublishFailed);
        let record = SampleRecord::<2>::new();

        assert_eq!(
            sink.publish("direction/wind", &record),
            Err(TransportError::PublishFailed)
        );
        assert!(sink.publish("direction/wind", &record).is_ok());
        assert_eq!(sink.publish_count(), 2);
    }
}
