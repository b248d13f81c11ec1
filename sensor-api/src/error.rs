use thiserror::Error;

use crate::source::SourceType;

/// Errors reported by a sensor platform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform has no sensor of this class
    #[error("Sensor type {0} is not available on this device")]
    Unavailable(SourceType),

    /// The platform refused to activate the sensor
    #[error("Activation of {source_type} rejected: {reason}")]
    ActivationRejected {
        source_type: SourceType,
        reason: String,
    },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
