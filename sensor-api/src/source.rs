//! Sensor classes and accuracy levels
//!
//! `SourceType` names a class of physical sensor. The numeric codes follow the
//! platform's own numbering so raw events can be tagged without a lookup.

use serde::{Deserialize, Serialize};

/// A class of physical sensor
///
/// Every platform code has exactly one `SourceType`: codes in the known table
/// resolve to their named variant and only the rest become `Other`. Both
/// [`SourceType::from_code`] and deserialization go through that resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "SourceTypeRepr")]
pub enum SourceType {
    Accelerometer,
    MagneticField,
    Gyroscope,
    Light,
    Pressure,
    Temperature,
    Proximity,
    Gravity,
    LinearAcceleration,
    RotationVector,
    RelativeHumidity,
    AmbientTemperature,
    StepDetector,
    StepCounter,
    /// Any platform code outside the known table
    Other(UnknownCode),
}

/// A platform sensor code with no named [`SourceType`]
///
/// Only built by [`SourceType::from_code`], so it never holds a known code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UnknownCode(i32);

impl UnknownCode {
    pub fn get(self) -> i32 {
        self.0
    }
}

/// Wire shape of `SourceType`, resolved through `from_code` on the way in
#[derive(Deserialize)]
enum SourceTypeRepr {
    Accelerometer,
    MagneticField,
    Gyroscope,
    Light,
    Pressure,
    Temperature,
    Proximity,
    Gravity,
    LinearAcceleration,
    RotationVector,
    RelativeHumidity,
    AmbientTemperature,
    StepDetector,
    StepCounter,
    Other(i32),
}

impl From<SourceTypeRepr> for SourceType {
    fn from(repr: SourceTypeRepr) -> Self {
        match repr {
            SourceTypeRepr::Accelerometer => SourceType::Accelerometer,
            SourceTypeRepr::MagneticField => SourceType::MagneticField,
            SourceTypeRepr::Gyroscope => SourceType::Gyroscope,
            SourceTypeRepr::Light => SourceType::Light,
            SourceTypeRepr::Pressure => SourceType::Pressure,
            SourceTypeRepr::Temperature => SourceType::Temperature,
            SourceTypeRepr::Proximity => SourceType::Proximity,
            SourceTypeRepr::Gravity => SourceType::Gravity,
            SourceTypeRepr::LinearAcceleration => SourceType::LinearAcceleration,
            SourceTypeRepr::RotationVector => SourceType::RotationVector,
            SourceTypeRepr::RelativeHumidity => SourceType::RelativeHumidity,
            SourceTypeRepr::AmbientTemperature => SourceType::AmbientTemperature,
            SourceTypeRepr::StepDetector => SourceType::StepDetector,
            SourceTypeRepr::StepCounter => SourceType::StepCounter,
            SourceTypeRepr::Other(code) => SourceType::from_code(code),
        }
    }
}

impl SourceType {
    /// Sensor classes monitored by default
    pub const COMMON: [SourceType; 13] = [
        SourceType::Accelerometer,
        SourceType::MagneticField,
        SourceType::Gyroscope,
        SourceType::Light,
        SourceType::Pressure,
        SourceType::AmbientTemperature,
        SourceType::RelativeHumidity,
        SourceType::Proximity,
        SourceType::Gravity,
        SourceType::LinearAcceleration,
        SourceType::RotationVector,
        SourceType::StepCounter,
        SourceType::StepDetector,
    ];

    /// Resolve a platform sensor code
    ///
    /// Unknown codes are kept as `Other(code)` rather than rejected.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => SourceType::Accelerometer,
            2 => SourceType::MagneticField,
            4 => SourceType::Gyroscope,
            5 => SourceType::Light,
            6 => SourceType::Pressure,
            7 => SourceType::Temperature,
            8 => SourceType::Proximity,
            9 => SourceType::Gravity,
            10 => SourceType::LinearAcceleration,
            11 => SourceType::RotationVector,
            12 => SourceType::RelativeHumidity,
            13 => SourceType::AmbientTemperature,
            18 => SourceType::StepDetector,
            19 => SourceType::StepCounter,
            other => SourceType::Other(UnknownCode(other)),
        }
    }

    /// The platform sensor code for this class
    pub fn code(&self) -> i32 {
        match self {
            SourceType::Accelerometer => 1,
            SourceType::MagneticField => 2,
            SourceType::Gyroscope => 4,
            SourceType::Light => 5,
            SourceType::Pressure => 6,
            SourceType::Temperature => 7,
            SourceType::Proximity => 8,
            SourceType::Gravity => 9,
            SourceType::LinearAcceleration => 10,
            SourceType::RotationVector => 11,
            SourceType::RelativeHumidity => 12,
            SourceType::AmbientTemperature => 13,
            SourceType::StepDetector => 18,
            SourceType::StepCounter => 19,
            SourceType::Other(code) => code.get(),
        }
    }
}

impl From<i32> for SourceType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Other(code) => write!(f, "Other({})", code.get()),
            known => write!(f, "{:?}", known),
        }
    }
}

/// Reported accuracy of a sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accuracy {
    Low,
    Medium,
    High,
    VeryHigh,
    Unknown,
}

impl Accuracy {
    /// Map a platform accuracy ordinal; anything outside 0..=3 is `Unknown`
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Accuracy::Low,
            1 => Accuracy::Medium,
            2 => Accuracy::High,
            3 => Accuracy::VeryHigh,
            _ => Accuracy::Unknown,
        }
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Accuracy::Low => "Low",
            Accuracy::Medium => "Medium",
            Accuracy::High => "High",
            Accuracy::VeryHigh => "Very High",
            Accuracy::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}
