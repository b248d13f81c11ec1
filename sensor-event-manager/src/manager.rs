//! Reference-counted sensor subscription multiplexing
//!
//! Each sensor class has at most one platform activation, shared by every
//! subscriber registered for it. The activation is acquired when the first
//! subscriber arrives and released the moment the last one leaves.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use sensor_api::{
    Accuracy, PlatformSource, RawEvent, SamplingRate, SensorInfo, SourceHandle, SourceType,
};

use crate::config::ManagerConfig;
use crate::error::{CallbackError, CallbackResult, ManagerError, Result};
use crate::subscriber::{same_subscriber, Subscriber, SubscriberRef};

/// What a call to `subscribe` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// First subscriber for the class; the platform sensor was activated
    Activated,
    /// Added to an already active class; no new activation
    Joined,
    /// This subscriber was already registered for the class
    AlreadySubscribed,
    /// The class is not available; the subscriber was told via `on_error`
    Unavailable,
}

impl SubscribeOutcome {
    /// Whether the subscriber is registered after the call
    pub fn is_registered(&self) -> bool {
        !matches!(self, SubscribeOutcome::Unavailable)
    }
}

/// Delivery counts for one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Subscribers whose callback returned successfully
    pub delivered: usize,
    /// Subscribers whose callback failed or panicked
    pub failed: usize,
}

impl DispatchSummary {
    /// Total number of subscribers the event was offered to
    pub fn total(&self) -> usize {
        self.delivered + self.failed
    }
}

/// Subscription state for one active sensor class
struct Subscription {
    handle: SourceHandle,
    rate: SamplingRate,
    subscribers: Vec<SubscriberRef>,
}

/// Multiplexes one platform activation per sensor class across many subscribers
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use sensor_event_manager::{ChannelSubscriber, SensorEventManager};
/// use sensor_api::{SamplingRate, SourceType};
///
/// let manager = SensorEventManager::new(platform);
/// let (subscriber, events) = ChannelSubscriber::new();
///
/// manager.subscribe(SourceType::Light, subscriber.clone(), SamplingRate::Ui)?;
///
/// // The platform delivers events through `dispatch`
/// for event in events.try_iter() {
///     println!("{:?}", event);
/// }
///
/// manager.unsubscribe(SourceType::Light, subscriber.as_ref());
/// ```
pub struct SensorEventManager {
    platform: Arc<dyn PlatformSource>,
    config: ManagerConfig,
    subscriptions: Mutex<HashMap<SourceType, Subscription>>,
}

impl SensorEventManager {
    /// Create a manager over `platform` with default configuration
    pub fn new(platform: Arc<dyn PlatformSource>) -> Self {
        Self::with_config(platform, ManagerConfig::default())
    }

    /// Create a manager over `platform` with custom configuration
    pub fn with_config(platform: Arc<dyn PlatformSource>, config: ManagerConfig) -> Self {
        Self {
            platform,
            config,
            subscriptions: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Register `subscriber` for events from `source_type`
    ///
    /// The first subscriber for a class activates the platform sensor at
    /// `rate`. Later subscribers share that activation and their rate is not
    /// applied: the first subscriber's rate stays in effect until the class
    /// goes inactive again.
    ///
    /// An unavailable class is reported to the subscriber through `on_error`
    /// and returns `Ok(SubscribeOutcome::Unavailable)`. A platform that refuses
    /// activation is reported the same way and returns an error.
    pub fn subscribe(
        &self,
        source_type: SourceType,
        subscriber: SubscriberRef,
        rate: SamplingRate,
    ) -> Result<SubscribeOutcome> {
        if !self.platform.is_available(source_type) {
            let err = ManagerError::SourceUnavailable { source_type };
            tracing::warn!(%source_type, "{}", err);
            self.report_error(subscriber.as_ref(), &err);
            return Ok(SubscribeOutcome::Unavailable);
        }

        let activation = {
            let mut subscriptions = self.subscriptions.lock();

            match subscriptions.entry(source_type) {
                MapEntry::Occupied(mut occupied) => {
                    let subscription = occupied.get_mut();
                    if subscription
                        .subscribers
                        .iter()
                        .any(|s| same_subscriber(s, subscriber.as_ref()))
                    {
                        tracing::debug!(%source_type, "subscriber already registered");
                        Ok(SubscribeOutcome::AlreadySubscribed)
                    } else {
                        if subscription.rate != rate {
                            tracing::debug!(
                                %source_type,
                                active = ?subscription.rate,
                                requested = ?rate,
                                "sensor already active, keeping first sampling rate"
                            );
                        }
                        subscription.subscribers.push(subscriber.clone());
                        tracing::debug!(
                            %source_type,
                            subscribers = subscription.subscribers.len(),
                            "subscriber joined active sensor"
                        );
                        Ok(SubscribeOutcome::Joined)
                    }
                }
                MapEntry::Vacant(vacant) => match self.platform.activate(source_type, rate) {
                    Ok(handle) => {
                        vacant.insert(Subscription {
                            handle,
                            rate,
                            subscribers: vec![subscriber.clone()],
                        });
                        tracing::info!(%source_type, %handle, ?rate, "sensor activated");
                        Ok(SubscribeOutcome::Activated)
                    }
                    Err(source) => Err(source),
                },
            }
        };

        activation.or_else(|source| {
            let err = ManagerError::Activation {
                source_type,
                source,
            };
            tracing::warn!(%source_type, "{}", err);
            self.report_error(subscriber.as_ref(), &err);
            Err(err)
        })
    }

    /// Register `subscriber` at the configured default sampling rate
    pub fn subscribe_default(
        &self,
        source_type: SourceType,
        subscriber: SubscriberRef,
    ) -> Result<SubscribeOutcome> {
        self.subscribe(source_type, subscriber, self.config.default_sampling_rate)
    }

    /// Remove `subscriber` from `source_type`
    ///
    /// Releases the platform sensor when the last subscriber leaves. Removing
    /// a subscriber that is not registered is a no-op. Returns whether a
    /// subscriber was removed.
    pub fn unsubscribe(&self, source_type: SourceType, subscriber: &dyn Subscriber) -> bool {
        let mut subscriptions = self.subscriptions.lock();

        let Some(subscription) = subscriptions.get_mut(&source_type) else {
            tracing::debug!(%source_type, "unsubscribe for inactive sensor ignored");
            return false;
        };

        let before = subscription.subscribers.len();
        subscription
            .subscribers
            .retain(|s| !same_subscriber(s, subscriber));

        if subscription.subscribers.len() == before {
            tracing::debug!(%source_type, "unsubscribe for unknown subscriber ignored");
            return false;
        }

        tracing::debug!(
            %source_type,
            subscribers = subscription.subscribers.len(),
            "subscriber removed"
        );

        if subscription.subscribers.is_empty() {
            if let Some(subscription) = subscriptions.remove(&source_type) {
                self.release(source_type, subscription.handle);
            }
        }

        true
    }

    /// Remove every subscriber of one class and release its sensor
    ///
    /// Returns how many subscribers were dropped.
    pub fn unsubscribe_type(&self, source_type: SourceType) -> usize {
        let mut subscriptions = self.subscriptions.lock();

        match subscriptions.remove(&source_type) {
            Some(subscription) => {
                self.release(source_type, subscription.handle);
                subscription.subscribers.len()
            }
            None => 0,
        }
    }

    /// Release every active sensor and forget every subscriber
    pub fn unsubscribe_all(&self) {
        let mut subscriptions = self.subscriptions.lock();

        if subscriptions.is_empty() {
            return;
        }

        tracing::info!(active = subscriptions.len(), "releasing all sensors");
        for (source_type, subscription) in subscriptions.drain() {
            self.release(source_type, subscription.handle);
        }
    }

    /// Subscribe to every available class in `types`
    ///
    /// Unavailable classes are skipped without notifying the subscriber, and
    /// a class the platform refuses to activate is logged and skipped. Returns
    /// how many distinct classes the subscriber is registered for afterwards.
    pub fn monitor(
        &self,
        types: impl IntoIterator<Item = SourceType>,
        subscriber: SubscriberRef,
        rate: SamplingRate,
    ) -> usize {
        let mut seen = HashSet::new();
        let mut registered = 0;

        for source_type in types {
            if !seen.insert(source_type) {
                continue;
            }
            if !self.platform.is_available(source_type) {
                tracing::debug!(%source_type, "skipping unavailable sensor");
                continue;
            }

            match self.subscribe(source_type, subscriber.clone(), rate) {
                Ok(outcome) if outcome.is_registered() => registered += 1,
                Ok(_) => {}
                Err(e) => tracing::warn!(%source_type, "skipping sensor: {}", e),
            }
        }

        tracing::info!(registered, "monitoring sensors");
        registered
    }

    /// Subscribe to the configured monitored classes at the default rate
    pub fn monitor_common(&self, subscriber: SubscriberRef) -> usize {
        self.monitor(
            self.config.monitored_types.clone(),
            subscriber,
            self.config.default_sampling_rate,
        )
    }

    /// Deliver a platform event to every subscriber of `source_type`
    ///
    /// The event is mapped once and offered to a snapshot of the subscriber
    /// set taken under the lock. A subscriber whose callback fails does not
    /// affect delivery to the others.
    pub fn dispatch(&self, source_type: SourceType, event: &RawEvent) -> DispatchSummary {
        let subscribers = self.snapshot(source_type);
        if subscribers.is_empty() {
            tracing::trace!(%source_type, "dropping event for inactive sensor");
            return DispatchSummary::default();
        }

        let reading = sensor_mapper::map(event);
        self.deliver(source_type, &subscribers, "on_reading", |s| {
            s.on_reading(&reading)
        })
    }

    /// Deliver an accuracy change to every subscriber of `source_type`
    pub fn dispatch_accuracy(&self, source_type: SourceType, accuracy: Accuracy) -> DispatchSummary {
        let subscribers = self.snapshot(source_type);
        self.deliver(source_type, &subscribers, "on_accuracy_changed", |s| {
            s.on_accuracy_changed(source_type, accuracy)
        })
    }

    /// Whether the platform has a sensor of this class
    pub fn is_available(&self, source_type: SourceType) -> bool {
        self.platform.is_available(source_type)
    }

    /// Every sensor the platform exposes
    pub fn available_sensors(&self) -> Vec<SensorInfo> {
        self.platform.sensors()
    }

    /// Platform metadata for the default sensor of a class
    pub fn sensor_info(&self, source_type: SourceType) -> Option<SensorInfo> {
        self.platform.sensor(source_type)
    }

    /// Whether the class currently holds a platform activation
    pub fn is_active(&self, source_type: SourceType) -> bool {
        self.subscriptions.lock().contains_key(&source_type)
    }

    /// The platform handle held for a class, if active
    pub fn handle_for(&self, source_type: SourceType) -> Option<SourceHandle> {
        self.subscriptions
            .lock()
            .get(&source_type)
            .map(|s| s.handle)
    }

    /// Number of subscribers registered for a class
    pub fn subscriber_count(&self, source_type: SourceType) -> usize {
        self.subscriptions
            .lock()
            .get(&source_type)
            .map_or(0, |s| s.subscribers.len())
    }

    /// Every class that currently holds a platform activation
    pub fn active_types(&self) -> Vec<SourceType> {
        let mut types: Vec<_> = self.subscriptions.lock().keys().copied().collect();
        types.sort();
        types
    }

    /// Subscriber counts for every active class
    pub fn subscription_stats(&self) -> HashMap<SourceType, usize> {
        self.subscriptions
            .lock()
            .iter()
            .map(|(ty, s)| (*ty, s.subscribers.len()))
            .collect()
    }

    fn snapshot(&self, source_type: SourceType) -> Vec<SubscriberRef> {
        self.subscriptions
            .lock()
            .get(&source_type)
            .map(|s| s.subscribers.clone())
            .unwrap_or_default()
    }

    fn release(&self, source_type: SourceType, handle: SourceHandle) {
        self.platform.deactivate(handle);
        tracing::info!(%source_type, %handle, "sensor released");
    }

    fn deliver<F>(
        &self,
        source_type: SourceType,
        subscribers: &[SubscriberRef],
        callback: &'static str,
        f: F,
    ) -> DispatchSummary
    where
        F: Fn(&dyn Subscriber) -> CallbackResult,
    {
        let mut summary = DispatchSummary::default();

        for subscriber in subscribers {
            match self.invoke(|| f(subscriber.as_ref())) {
                Ok(()) => summary.delivered += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(%source_type, callback, "{}", e);
                }
            }
        }

        tracing::trace!(
            %source_type,
            callback,
            delivered = summary.delivered,
            failed = summary.failed,
            "dispatch complete"
        );
        summary
    }

    fn report_error(&self, subscriber: &dyn Subscriber, err: &ManagerError) {
        let message = err.to_string();
        if let Err(e) = self.invoke(|| subscriber.on_error(&message)) {
            tracing::warn!(callback = "on_error", "{}", e);
        }
    }

    fn invoke(&self, f: impl FnOnce() -> CallbackResult) -> CallbackResult {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(result) => result,
            Err(payload) => Err(CallbackError::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

impl Drop for SensorEventManager {
    fn drop(&mut self) {
        tracing::debug!(
            "SensorEventManager dropping, {} active sensors",
            self.subscriptions.lock().len()
        );
        self.unsubscribe_all();
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
