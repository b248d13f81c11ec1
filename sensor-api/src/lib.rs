//! # Sensor API
//!
//! Shared data model for sensor-sdk and the narrow interface every sensor
//! platform implements.
//!
//! - [`SourceType`]: a class of physical sensor (accelerometer, light, ...)
//! - [`RawEvent`]: an event exactly as the platform delivers it
//! - [`PlatformSource`]: availability, activation and release of sensors
//! - [`SamplingRate`]: the delivery-rate hint passed on activation
//!
//! With the `test-support` feature, [`sim::SimulatedPlatform`] provides an
//! in-memory platform that records every activation.
//!
//! ```rust
//! use sensor_api::{Accuracy, SourceType};
//!
//! assert_eq!(SourceType::from_code(5), SourceType::Light);
//! assert_eq!(Accuracy::from_ordinal(3), Accuracy::VeryHigh);
//! ```

pub mod error;
pub mod event;
pub mod platform;
pub mod sampling;
pub mod source;

#[cfg(any(test, feature = "test-support"))]
pub mod sim;

pub use error::{PlatformError, Result};
pub use event::RawEvent;
pub use platform::{PlatformSource, SensorInfo, SourceHandle};
pub use sampling::SamplingRate;
pub use source::{Accuracy, SourceType, UnknownCode};
