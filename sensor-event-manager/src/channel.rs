//! Channel-backed subscriber for consumers that prefer pulling events
//!
//! `ChannelSubscriber` forwards every callback into a channel so a
//! control thread can read readings with a blocking iterator instead of
//! implementing [`Subscriber`] itself.

use std::sync::Arc;

use crossbeam::channel::{unbounded, Sender};
use sensor_api::{Accuracy, SourceType};
use sensor_mapper::Reading;

use crate::error::{CallbackError, CallbackResult};
use crate::iter::SensorEventIterator;
use crate::subscriber::Subscriber;

/// Everything a subscriber can be told, as a value
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    Reading(Reading),
    AccuracyChanged {
        source_type: SourceType,
        accuracy: Accuracy,
    },
    Error(String),
}

impl SensorEvent {
    /// The reading carried by this event, if any
    pub fn reading(&self) -> Option<&Reading> {
        match self {
            SensorEvent::Reading(reading) => Some(reading),
            _ => None,
        }
    }
}

/// Subscriber that forwards callbacks into a channel
pub struct ChannelSubscriber {
    tx: Sender<SensorEvent>,
}

impl ChannelSubscriber {
    /// Create a subscriber and the iterator that drains it
    pub fn new() -> (Arc<Self>, SensorEventIterator) {
        let (tx, rx) = unbounded();
        let subscriber = Arc::new(Self { tx });
        let events = SensorEventIterator::new(rx);
        (subscriber, events)
    }

    fn send(&self, event: SensorEvent) -> CallbackResult {
        self.tx.send(event).map_err(|_| CallbackError::Disconnected)
    }
}

impl Subscriber for ChannelSubscriber {
    fn on_reading(&self, reading: &Reading) -> CallbackResult {
        self.send(SensorEvent::Reading(reading.clone()))
    }

    fn on_accuracy_changed(&self, source_type: SourceType, accuracy: Accuracy) -> CallbackResult {
        self.send(SensorEvent::AccuracyChanged {
            source_type,
            accuracy,
        })
    }

    fn on_error(&self, message: &str) -> CallbackResult {
        self.send(SensorEvent::Error(message.to_string()))
    }
}
