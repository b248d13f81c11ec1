//! Typed sensor observations

use serde::Serialize;

use sensor_api::{Accuracy, SourceType};

/// An immutable, mapped sensor observation
///
/// Readings are only produced by [`crate::map`]; there is no public
/// constructor and no way to mutate one after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    source_name: String,
    source_type: SourceType,
    values: Vec<f32>,
    accuracy: Accuracy,
    timestamp: u64,
    unit: &'static str,
}

impl Reading {
    pub(crate) fn new(
        source_name: String,
        source_type: SourceType,
        values: Vec<f32>,
        accuracy: Accuracy,
        timestamp: u64,
        unit: &'static str,
    ) -> Self {
        Self {
            source_name,
            source_type,
            values,
            accuracy,
            timestamp,
            unit,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    /// Monotonic timestamp in nanoseconds
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Values joined with ", " at two decimals, or "No data" when empty
    pub fn formatted_values(&self) -> String {
        if self.values.is_empty() {
            return "No data".to_string();
        }
        crate::describe::join_values(&self.values)
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.source_name,
            self.formatted_values(),
            self.unit,
            self.accuracy
        )
    }
}
