//! Mapping events produced by a platform into readings

use sensor_api::sim::SimulatedPlatform;
use sensor_api::{Accuracy, PlatformSource, RawEvent, SourceType};
use sensor_mapper::{describe, map, type_name, GENERIC_UNIT};

#[test]
fn every_common_sensor_maps_to_a_specific_unit() {
    let platform = SimulatedPlatform::with_common_sensors();

    for info in platform.sensors() {
        let event = platform.event(info.source_type, vec![1.0, 2.0, 3.0], 99);
        let reading = map(&event);

        assert_eq!(reading.source_name(), info.name);
        assert_eq!(reading.source_type(), info.source_type);
        assert_ne!(type_name(reading.source_type()), "Unknown Sensor");
        if info.source_type != SourceType::RotationVector {
            assert_ne!(reading.unit(), GENERIC_UNIT, "{} has no unit", info.source_type);
        }
    }
}

#[test]
fn light_event_scenario() {
    let raw = RawEvent::new("Ambient Light", SourceType::Light, vec![42.0], 1, 5);
    let reading = map(&raw);

    assert_eq!(reading.unit(), "lx");
    assert_eq!(reading.accuracy(), Accuracy::Medium);
    assert_eq!(describe(reading.source_type(), reading.values()), "Light: 42.00 lx");
}

#[test]
fn unknown_platform_code_still_maps() {
    let raw = RawEvent::new("Vendor Sensor", SourceType::from_code(65_537), vec![], 42, 0);
    let reading = map(&raw);

    assert_eq!(reading.unit(), GENERIC_UNIT);
    assert_eq!(reading.accuracy(), Accuracy::Unknown);
    assert_eq!(reading.formatted_values(), "No data");
    assert_eq!(type_name(reading.source_type()), "Unknown Sensor");
}

#[test]
fn known_code_maps_like_its_named_class() {
    let raw = RawEvent::new("Ambient Light", SourceType::from_code(5), vec![42.0], 2, 0);
    let reading = map(&raw);

    assert_eq!(reading.source_type(), SourceType::Light);
    assert_eq!(reading.unit(), "lx");
}
