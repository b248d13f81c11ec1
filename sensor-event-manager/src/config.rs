//! Configuration for the SensorEventManager

use sensor_api::{SamplingRate, SourceType};

/// Configuration for the SensorEventManager
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Sampling rate used by `subscribe_default` and `monitor_common`
    /// Default: `SamplingRate::Normal`
    pub default_sampling_rate: SamplingRate,

    /// Sensor classes `monitor_common` subscribes to
    /// Default: `SourceType::COMMON`
    pub monitored_types: Vec<SourceType>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            default_sampling_rate: SamplingRate::default(),
            monitored_types: SourceType::COMMON.to_vec(),
        }
    }
}

impl ManagerConfig {
    pub fn with_default_sampling_rate(mut self, rate: SamplingRate) -> Self {
        self.default_sampling_rate = rate;
        self
    }

    pub fn with_monitored_types(mut self, types: impl IntoIterator<Item = SourceType>) -> Self {
        self.monitored_types = types.into_iter().collect();
        self
    }
}
