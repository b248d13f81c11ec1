//! Sampling-rate hints passed to the platform on activation

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Requested delivery rate for a sensor
///
/// This is a hint. The platform may deliver faster or slower than asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SamplingRate {
    /// As fast as the hardware allows
    Fastest,
    /// Suitable for games (~20ms)
    Game,
    /// Suitable for UI updates (~60ms)
    Ui,
    /// Suitable for screen orientation changes (~200ms)
    #[default]
    Normal,
    /// An explicit delivery interval
    Custom(Duration),
}

impl SamplingRate {
    /// Approximate interval between events for this rate
    pub fn interval(&self) -> Duration {
        match self {
            SamplingRate::Fastest => Duration::ZERO,
            SamplingRate::Game => Duration::from_millis(20),
            SamplingRate::Ui => Duration::from_millis(60),
            SamplingRate::Normal => Duration::from_millis(200),
            SamplingRate::Custom(interval) => *interval,
        }
    }
}
