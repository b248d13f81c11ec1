//! The narrow interface between the multiplexer and the sensor platform
//!
//! A platform discovers sensors, activates them at a sampling rate, and
//! releases them again. Event delivery flows the other way: the platform calls
//! back into whoever owns it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sampling::SamplingRate;
use crate::source::SourceType;

/// Opaque token for one active platform-level sensor activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceHandle(u64);

impl SourceHandle {
    /// Create a new SourceHandle with the given value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw handle value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "src-{}", self.0)
    }
}

/// Metadata the platform reports about one sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorInfo {
    pub name: String,
    pub vendor: String,
    pub source_type: SourceType,
    pub version: i32,
    /// Maximum range in the sensor's unit
    pub maximum_range: f32,
    /// Resolution in the sensor's unit
    pub resolution: f32,
    /// Power draw in mA while active
    pub power: f32,
    /// Minimum delay between events in microseconds (0 for on-change sensors)
    pub min_delay_us: i32,
    /// Maximum delay between events in microseconds
    pub max_delay_us: i32,
}

impl SensorInfo {
    /// Create metadata with only a name, vendor and class; numeric fields zeroed
    pub fn new(name: impl Into<String>, vendor: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            name: name.into(),
            vendor: vendor.into(),
            source_type,
            version: 1,
            maximum_range: 0.0,
            resolution: 0.0,
            power: 0.0,
            min_delay_us: 0,
            max_delay_us: 0,
        }
    }
}

/// A physical sensor platform
///
/// Activation and deactivation are expected to be synchronous and fast; the
/// multiplexer calls them while holding its subscription lock.
pub trait PlatformSource: Send + Sync {
    /// Whether the platform has a sensor of this class
    fn is_available(&self, source_type: SourceType) -> bool;

    /// Start delivering events for `source_type` at roughly `rate`
    fn activate(&self, source_type: SourceType, rate: SamplingRate) -> Result<SourceHandle>;

    /// Stop the activation identified by `handle`
    fn deactivate(&self, handle: SourceHandle);

    /// Every sensor the platform exposes
    fn sensors(&self) -> Vec<SensorInfo>;

    /// The default sensor for a class, if any
    fn sensor(&self, source_type: SourceType) -> Option<SensorInfo> {
        self.sensors()
            .into_iter()
            .find(|info| info.source_type == source_type)
    }
}
