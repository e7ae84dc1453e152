//! Publish sink trait

use crate::platform::error::TransportError;
use skiff_core::record::SampleRecord;

/// Publish sink for sampling loops.
///
/// One record goes out per sampling cycle. The sink sees the record
/// before its pending counter is reset, so transports that care about the
/// logical size (and not just the slot values) can read it.
///
/// Failure policy belongs to the calling loop: the wind path treats a
/// failed publish as fatal, the GNSS path logs it and carries on.
pub trait Publisher {
    /// Publish a record to `topic`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when the transport rejects or loses the
    /// record.
    fn publish(&mut self, topic: &str, record: &SampleRecord<2>) -> Result<(), TransportError>;
}
