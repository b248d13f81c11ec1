//! # Sensor Event Manager
//!
//! Lets many independent listeners observe the same physical sensors without
//! each of them activating the hardware separately.
//!
//! ## Key Features
//!
//! - **One activation per sensor class**: the platform sensor is activated when
//!   the first subscriber arrives and released when the last one leaves
//! - **Set semantics**: subscribing the same subscriber twice changes nothing
//! - **Isolated delivery**: a failing or panicking subscriber never stops
//!   delivery to the others
//! - **Re-entrant callbacks**: callbacks run outside the lock and may
//!   subscribe or unsubscribe
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sensor_event_manager::prelude::*;
//!
//! let manager = SensorEventManager::new(platform);
//! let (subscriber, events) = ChannelSubscriber::new();
//!
//! manager.subscribe(SourceType::Accelerometer, subscriber.clone(), SamplingRate::Game)?;
//!
//! // Platform callback thread
//! manager.dispatch(SourceType::Accelerometer, &raw_event);
//!
//! // Consumer thread
//! for event in events.try_iter() {
//!     println!("{:?}", event);
//! }
//!
//! manager.unsubscribe_all();
//! ```
//!
//! ## Architecture
//!
//! ```text
//! SensorEventManager
//!     │
//!     ├── platform: Arc<dyn PlatformSource>
//!     │
//!     └── subscriptions: Mutex<HashMap<SourceType, Subscription>>
//!             │
//!             └── Subscription { handle, rate, subscribers: Vec<Arc<dyn Subscriber>> }
//! ```
//!
//! The first sampling rate requested for a class stays in effect while the
//! class is active; rates passed by later subscribers are not applied.

pub mod channel;
pub mod config;
pub mod error;
pub mod iter;
pub mod logging;
pub mod manager;
pub mod subscriber;

// Re-export main types for convenience
pub use channel::{ChannelSubscriber, SensorEvent};
pub use config::ManagerConfig;
pub use error::{CallbackError, CallbackResult, ManagerError, Result};
pub use iter::SensorEventIterator;
pub use manager::{DispatchSummary, SensorEventManager, SubscribeOutcome};
pub use subscriber::{Subscriber, SubscriberRef};

// Re-export commonly used types from dependencies
pub use sensor_api::{Accuracy, PlatformSource, RawEvent, SamplingRate, SensorInfo, SourceType};
pub use sensor_mapper::Reading;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Accuracy, CallbackError, CallbackResult, ChannelSubscriber, DispatchSummary,
        ManagerConfig, ManagerError, PlatformSource, RawEvent, Reading, Result, SamplingRate,
        SensorEvent, SensorEventIterator, SensorEventManager, SourceType, SubscribeOutcome,
        Subscriber, SubscriberRef,
    };
}
