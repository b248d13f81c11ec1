//! # sensor-mapper
//!
//! Pure mapping from raw platform events to typed [`Reading`]s.
//!
//! The mapper has no state and no failure mode: every [`SourceType`], known or
//! not, resolves to a unit, so [`map`] is total.
//!
//! ```rust
//! use sensor_api::{RawEvent, SourceType};
//!
//! let raw = RawEvent::new("Ambient Light", SourceType::Light, vec![42.0], 3, 1);
//! let reading = sensor_mapper::map(&raw);
//! assert_eq!(reading.unit(), "lx");
//! ```
//!
//! [`SourceType`]: sensor_api::SourceType

pub mod describe;
pub mod mapper;
pub mod reading;

pub use describe::{describe, type_name};
pub use mapper::{map, unit_for, GENERIC_UNIT};
pub use reading::Reading;
