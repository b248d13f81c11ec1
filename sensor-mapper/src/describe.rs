//! Human-readable names and descriptions for sensor data
//!
//! These are pure helpers for presentation layers. Nothing in the
//! multiplexer depends on them.

use sensor_api::SourceType;

/// Display name for a source type
pub fn type_name(source_type: SourceType) -> &'static str {
    match source_type {
        SourceType::Accelerometer => "Accelerometer",
        SourceType::MagneticField => "Magnetometer",
        SourceType::Gyroscope => "Gyroscope",
        SourceType::Light => "Light Sensor",
        SourceType::Pressure => "Barometer",
        SourceType::Temperature => "Temperature",
        SourceType::RelativeHumidity => "Humidity",
        SourceType::AmbientTemperature => "Ambient Temperature",
        SourceType::StepCounter => "Step Counter",
        SourceType::StepDetector => "Step Detector",
        SourceType::Proximity => "Proximity Sensor",
        SourceType::Gravity => "Gravity",
        SourceType::LinearAcceleration => "Linear Acceleration",
        SourceType::RotationVector => "Rotation Vector",
        SourceType::Other(_) => "Unknown Sensor",
    }
}

/// Describe a set of values the way a sensor list would show them
///
/// Three-axis sensors with fewer than three values fall back to the generic
/// comma-separated rendering.
pub fn describe(source_type: SourceType, values: &[f32]) -> String {
    let Some(&first) = values.first() else {
        return "No data available".to_string();
    };

    match (source_type, values) {
        (SourceType::Accelerometer, [x, y, z, ..]) => axes(*x, *y, *z, "m/s²"),
        (SourceType::MagneticField, [x, y, z, ..]) => axes(*x, *y, *z, "µT"),
        (SourceType::Gyroscope, [x, y, z, ..]) => axes(*x, *y, *z, "rad/s"),
        (SourceType::Light, _) => format!("Light: {:.2} lx", first),
        (SourceType::Pressure, _) => format!("Pressure: {:.2} hPa", first),
        (SourceType::Temperature, _) => format!("Temperature: {:.2} °C", first),
        (SourceType::RelativeHumidity, _) => format!("Humidity: {:.2} %", first),
        (SourceType::AmbientTemperature, _) => format!("Ambient Temp: {:.2} °C", first),
        (SourceType::StepCounter, _) => format!("Steps: {:.0}", first),
        (SourceType::Proximity, _) => format!("Distance: {:.2} cm", first),
        _ => join_values(values),
    }
}

fn axes(x: f32, y: f32, z: f32, unit: &str) -> String {
    format!("X: {:.2}, Y: {:.2}, Z: {:.2} {}", x, y, z, unit)
}

pub(crate) fn join_values(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{:.2}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
