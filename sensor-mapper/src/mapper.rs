//! Raw platform event to [`Reading`] mapping
//!
//! Mapping is total: every source type, including codes the table has never
//! heard of, resolves to a non-empty unit.

use sensor_api::{Accuracy, RawEvent, SourceType};

use crate::reading::Reading;

/// Unit used for source types outside the table
pub const GENERIC_UNIT: &str = "unit";

/// Map a raw platform event to a typed reading
pub fn map(event: &RawEvent) -> Reading {
    Reading::new(
        event.source_name.clone(),
        event.source_type,
        event.values.clone(),
        Accuracy::from_ordinal(event.accuracy),
        event.timestamp,
        unit_for(event.source_type),
    )
}

/// Measurement unit for a source type
pub fn unit_for(source_type: SourceType) -> &'static str {
    match source_type {
        SourceType::Accelerometer | SourceType::LinearAcceleration | SourceType::Gravity => "m/s²",
        SourceType::MagneticField => "µT",
        SourceType::Gyroscope => "rad/s",
        SourceType::Light => "lx",
        SourceType::Pressure => "hPa",
        SourceType::Temperature | SourceType::AmbientTemperature => "°C",
        SourceType::RelativeHumidity => "%",
        SourceType::Proximity => "cm",
        SourceType::StepCounter => "steps",
        SourceType::StepDetector => "event",
        SourceType::RotationVector | SourceType::Other(_) => GENERIC_UNIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(SourceType::Accelerometer, "m/s²")]
    #[case(SourceType::LinearAcceleration, "m/s²")]
    #[case(SourceType::Gravity, "m/s²")]
    #[case(SourceType::MagneticField, "µT")]
    #[case(SourceType::Gyroscope, "rad/s")]
    #[case(SourceType::Light, "lx")]
    #[case(SourceType::Pressure, "hPa")]
    #[case(SourceType::Temperature, "°C")]
    #[case(SourceType::AmbientTemperature, "°C")]
    #[case(SourceType::RelativeHumidity, "%")]
    #[case(SourceType::Proximity, "cm")]
    #[case(SourceType::StepCounter, "steps")]
    #[case(SourceType::StepDetector, "event")]
    #[case(SourceType::RotationVector, "unit")]
    #[case(SourceType::from_code(999), "unit")]
    fn test_unit_table(#[case] source_type: SourceType, #[case] expected: &str) {
        assert_eq!(unit_for(source_type), expected);
    }

    #[test]
    fn test_map_light() {
        let raw = RawEvent::new("TMD4906 Light", SourceType::Light, vec![42.0], 2, 123_456);
        let reading = map(&raw);

        assert_eq!(reading.unit(), "lx");
        assert_eq!(reading.source_name(), "TMD4906 Light");
        assert_eq!(reading.source_type(), SourceType::Light);
        assert_eq!(reading.values(), &[42.0]);
        assert_eq!(reading.accuracy(), Accuracy::High);
        assert_eq!(reading.timestamp(), 123_456);
    }

    #[test]
    fn test_map_does_not_alias_input() {
        let mut raw = RawEvent::new("Accel", SourceType::Accelerometer, vec![0.1, 0.2, 9.8], 3, 1);
        let reading = map(&raw);
        raw.values[2] = 0.0;
        assert_eq!(reading.values(), &[0.1, 0.2, 9.8]);
    }

    proptest! {
        #[test]
        fn prop_map_is_total(
            code in any::<i32>(),
            values in proptest::collection::vec(any::<f32>(), 0..8),
            accuracy in any::<i32>(),
            timestamp in any::<u64>(),
        ) {
            let raw = RawEvent::new("prop", SourceType::from_code(code), values.clone(), accuracy, timestamp);
            let reading = map(&raw);

            prop_assert!(!reading.unit().is_empty());
            prop_assert_eq!(reading.source_type().code(), code);
            prop_assert_eq!(reading.values().len(), values.len());
            prop_assert_eq!(reading.timestamp(), timestamp);
        }

        #[test]
        fn prop_map_is_deterministic(code in any::<i32>(), accuracy in any::<i32>()) {
            let raw = RawEvent::new("prop", SourceType::from_code(code), vec![1.0, 2.0], accuracy, 7);
            prop_assert_eq!(map(&raw), map(&raw));
        }
    }
}
