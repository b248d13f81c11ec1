use sensor_api::{PlatformError, SourceType};
use thiserror::Error;

/// Errors that can occur in the Sensor Event Manager
#[derive(Error, Debug)]
pub enum ManagerError {
    /// Requested sensor class is not present on the platform
    #[error("Sensor type {} ({}) is not available on this device", .source_type, .source_type.code())]
    SourceUnavailable { source_type: SourceType },

    /// The platform refused to activate the sensor
    #[error("Failed to activate sensor {source_type}: {source}")]
    Activation {
        source_type: SourceType,
        #[source]
        source: PlatformError,
    },
}

/// Result type for Event Manager operations
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Failure raised by a subscriber callback
///
/// The manager never propagates these; they are logged and counted per
/// dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// The subscriber's downstream consumer has gone away
    #[error("Subscriber disconnected")]
    Disconnected,

    /// The callback reported a failure
    #[error("Subscriber callback failed: {0}")]
    Failed(String),

    /// The callback panicked
    #[error("Subscriber callback panicked: {0}")]
    Panicked(String),
}

impl CallbackError {
    /// Convenience constructor for [`CallbackError::Failed`]
    pub fn failed(message: impl Into<String>) -> Self {
        CallbackError::Failed(message.into())
    }
}

/// Result type returned by subscriber callbacks
pub type CallbackResult = std::result::Result<(), CallbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        let err = ManagerError::SourceUnavailable {
            source_type: SourceType::RelativeHumidity,
        };
        assert_eq!(
            err.to_string(),
            "Sensor type RelativeHumidity (12) is not available on this device"
        );
    }

    #[test]
    fn test_activation_source() {
        use std::error::Error as _;

        let err = ManagerError::Activation {
            source_type: SourceType::Light,
            source: PlatformError::ActivationRejected {
                source_type: SourceType::Light,
                reason: "busy".to_string(),
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("busy"));
    }
}
