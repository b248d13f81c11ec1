//! Simulated sensor platform for tests and demos
//!
//! `SimulatedPlatform` records every activation and deactivation so tests can
//! assert on exactly how often the physical layer was touched. It can also be
//! told to reject activations to exercise error paths.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{PlatformError, Result};
use crate::event::RawEvent;
use crate::platform::{PlatformSource, SensorInfo, SourceHandle};
use crate::sampling::SamplingRate;
use crate::source::SourceType;

/// A recorded call to `activate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub handle: SourceHandle,
    pub source_type: SourceType,
    pub rate: SamplingRate,
}

/// In-memory platform with a fixed sensor list
pub struct SimulatedPlatform {
    sensors: Vec<SensorInfo>,
    next_handle: AtomicU64,
    active: Mutex<HashMap<SourceHandle, Activation>>,
    activations: Mutex<Vec<Activation>>,
    deactivations: Mutex<Vec<SourceHandle>>,
    rejected: Mutex<HashSet<SourceType>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SimulatedPlatform {
    /// Create a platform exposing the given sensors
    pub fn new(sensors: Vec<SensorInfo>) -> Self {
        Self {
            sensors,
            next_handle: AtomicU64::new(1),
            active: Mutex::new(HashMap::new()),
            activations: Mutex::new(Vec::new()),
            deactivations: Mutex::new(Vec::new()),
            rejected: Mutex::new(HashSet::new()),
        }
    }

    /// Create a platform with one generic sensor per listed class
    pub fn with_types(types: &[SourceType]) -> Self {
        let sensors = types
            .iter()
            .map(|ty| SensorInfo::new(format!("Simulated {}", ty), "sensor-sdk", *ty))
            .collect();
        Self::new(sensors)
    }

    /// Create a platform exposing every commonly monitored class
    pub fn with_common_sensors() -> Self {
        Self::with_types(&SourceType::COMMON)
    }

    /// Make future activations of `source_type` fail (or succeed again)
    pub fn reject_activation(&self, source_type: SourceType, reject: bool) {
        let mut rejected = lock(&self.rejected);
        if reject {
            rejected.insert(source_type);
        } else {
            rejected.remove(&source_type);
        }
    }

    /// Every successful activation so far, in call order
    pub fn activations(&self) -> Vec<Activation> {
        lock(&self.activations).clone()
    }

    /// Number of successful activations for one class
    pub fn activation_count(&self, source_type: SourceType) -> usize {
        lock(&self.activations)
            .iter()
            .filter(|a| a.source_type == source_type)
            .count()
    }

    /// Every handle passed to `deactivate`, in call order
    pub fn deactivations(&self) -> Vec<SourceHandle> {
        lock(&self.deactivations).clone()
    }

    /// Number of deactivations for one class
    pub fn deactivation_count(&self, source_type: SourceType) -> usize {
        let activations = lock(&self.activations);
        lock(&self.deactivations)
            .iter()
            .filter(|handle| {
                activations
                    .iter()
                    .any(|a| a.handle == **handle && a.source_type == source_type)
            })
            .count()
    }

    /// Whether the class currently has an outstanding activation
    pub fn is_active(&self, source_type: SourceType) -> bool {
        lock(&self.active)
            .values()
            .any(|a| a.source_type == source_type)
    }

    /// Number of outstanding activations for one class
    pub fn active_count(&self, source_type: SourceType) -> usize {
        lock(&self.active)
            .values()
            .filter(|a| a.source_type == source_type)
            .count()
    }

    /// Sampling rate the class is currently active at
    pub fn active_rate(&self, source_type: SourceType) -> Option<SamplingRate> {
        lock(&self.active)
            .values()
            .find(|a| a.source_type == source_type)
            .map(|a| a.rate)
    }

    /// Build a raw event as the platform would deliver it
    pub fn event(&self, source_type: SourceType, values: Vec<f32>, timestamp: u64) -> RawEvent {
        let name = self
            .sensor(source_type)
            .map(|info| info.name)
            .unwrap_or_else(|| format!("Simulated {}", source_type));
        RawEvent::new(name, source_type, values, 3, timestamp)
    }
}

impl PlatformSource for SimulatedPlatform {
    fn is_available(&self, source_type: SourceType) -> bool {
        self.sensors.iter().any(|info| info.source_type == source_type)
    }

    fn activate(&self, source_type: SourceType, rate: SamplingRate) -> Result<SourceHandle> {
        if !self.is_available(source_type) {
            return Err(PlatformError::Unavailable(source_type));
        }
        if lock(&self.rejected).contains(&source_type) {
            return Err(PlatformError::ActivationRejected {
                source_type,
                reason: "rejected by simulation".to_string(),
            });
        }

        let handle = SourceHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let activation = Activation {
            handle,
            source_type,
            rate,
        };
        lock(&self.active).insert(handle, activation);
        lock(&self.activations).push(activation);

        tracing::trace!(%handle, %source_type, ?rate, "simulated sensor activated");
        Ok(handle)
    }

    fn deactivate(&self, handle: SourceHandle) {
        if lock(&self.active).remove(&handle).is_none() {
            tracing::warn!(%handle, "deactivate called for unknown handle");
        }
        lock(&self.deactivations).push(handle);
    }

    fn sensors(&self) -> Vec<SensorInfo> {
        self.sensors.clone()
    }
}
