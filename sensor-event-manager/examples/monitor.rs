//! Sensor monitor demo
//!
//! Monitors the common sensors of a simulated platform with two subscribers:
//! one channel-backed, one printing directly. A background thread plays the
//! role of the platform and pushes events through `dispatch`.
//!
//! Run with `SENSOR_LOG_MODE=development cargo run --example monitor` to see
//! activation and release logs.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sensor_api::sim::SimulatedPlatform;
use sensor_event_manager::logging;
use sensor_event_manager::prelude::*;
use sensor_mapper::{describe, type_name};

struct Printer;

impl Subscriber for Printer {
    fn on_reading(&self, reading: &Reading) -> CallbackResult {
        println!(
            "[printer] {:<20} {}",
            type_name(reading.source_type()),
            describe(reading.source_type(), reading.values())
        );
        Ok(())
    }

    fn on_error(&self, message: &str) -> CallbackResult {
        eprintln!("[printer] error: {}", message);
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    logging::init_logging_from_env()?;

    let platform = Arc::new(SimulatedPlatform::with_types(&[
        SourceType::Accelerometer,
        SourceType::Light,
        SourceType::Pressure,
        SourceType::StepCounter,
    ]));
    let manager = Arc::new(SensorEventManager::new(platform.clone()));

    println!("Available sensors:");
    for info in manager.available_sensors() {
        println!("  - {} ({})", info.name, info.vendor);
    }

    let (channel, events) = ChannelSubscriber::new();
    let printer: SubscriberRef = Arc::new(Printer);

    let monitored = manager.monitor_common(channel.clone());
    println!("Monitoring {} sensor(s)", monitored);

    manager.subscribe(SourceType::Light, printer.clone(), SamplingRate::Ui)?;
    // Not on this platform: the printer is told through on_error
    manager.subscribe(SourceType::RelativeHumidity, printer.clone(), SamplingRate::Ui)?;

    let producer = {
        let manager = Arc::clone(&manager);
        let platform = Arc::clone(&platform);
        thread::spawn(move || {
            for tick in 0..5u64 {
                let t = tick as f32;
                let samples = [
                    (SourceType::Accelerometer, vec![0.1 * t, 0.0, 9.81]),
                    (SourceType::Light, vec![300.0 + 10.0 * t]),
                    (SourceType::Pressure, vec![1013.25 - t]),
                    (SourceType::StepCounter, vec![100.0 + t]),
                ];
                for (source_type, values) in samples {
                    let event = platform.event(source_type, values, tick * 1_000_000);
                    manager.dispatch(source_type, &event);
                }
                if tick == 2 {
                    manager.dispatch_accuracy(SourceType::Pressure, Accuracy::Medium);
                }
                thread::sleep(Duration::from_millis(50));
            }
        })
    };

    for event in events.timeout_iter(Duration::from_millis(500)) {
        match event {
            SensorEvent::Reading(reading) => println!("[channel] {}", reading),
            SensorEvent::AccuracyChanged {
                source_type,
                accuracy,
            } => println!("[channel] {} accuracy now {}", type_name(source_type), accuracy),
            SensorEvent::Error(message) => println!("[channel] error: {}", message),
        }
    }

    producer
        .join()
        .map_err(|_| "platform thread panicked")?;

    println!("Active sensors before teardown: {:?}", manager.active_types());
    manager.unsubscribe_all();
    println!(
        "Activations: {}, deactivations: {}",
        platform.activations().len(),
        platform.deactivations().len()
    );

    Ok(())
}
