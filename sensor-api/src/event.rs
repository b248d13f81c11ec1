//! Raw events as delivered by the sensor platform

use serde::{Deserialize, Serialize};

use crate::source::SourceType;

/// An unprocessed sensor event from the platform
///
/// The accuracy is kept as the platform's raw ordinal; interpreting it is the
/// mapper's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Name of the sensor that produced the event
    pub source_name: String,
    /// Class of the producing sensor
    pub source_type: SourceType,
    /// Measured values, in platform order
    pub values: Vec<f32>,
    /// Platform accuracy ordinal
    pub accuracy: i32,
    /// Monotonic timestamp in nanoseconds
    pub timestamp: u64,
}

impl RawEvent {
    /// Create a new RawEvent
    pub fn new(
        source_name: impl Into<String>,
        source_type: SourceType,
        values: Vec<f32>,
        accuracy: i32,
        timestamp: u64,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            source_type,
            values,
            accuracy,
            timestamp,
        }
    }
}
