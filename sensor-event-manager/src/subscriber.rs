//! The capability a listener hands to the manager

use std::sync::Arc;

use sensor_api::{Accuracy, SourceType};
use sensor_mapper::Reading;

use crate::error::CallbackResult;

/// A logical listener for sensor events
///
/// Identity is the allocation behind the `Arc` the subscriber was registered
/// with: subscribing the same `Arc` twice is a no-op, and unsubscribing takes
/// a reference to that same value.
///
/// Callbacks run on whichever thread delivers the event and never while the
/// manager holds its lock, so they may call back into the manager.
pub trait Subscriber: Send + Sync {
    /// A new reading for a sensor class this subscriber is registered for
    fn on_reading(&self, reading: &Reading) -> CallbackResult;

    /// The platform reported a change in accuracy
    fn on_accuracy_changed(&self, source_type: SourceType, accuracy: Accuracy) -> CallbackResult {
        let _ = (source_type, accuracy);
        Ok(())
    }

    /// A subscription request for this subscriber could not be honoured
    fn on_error(&self, message: &str) -> CallbackResult {
        let _ = message;
        Ok(())
    }
}

/// Shared handle to a subscriber, as stored by the manager
pub type SubscriberRef = Arc<dyn Subscriber>;

pub(crate) fn same_subscriber(registered: &SubscriberRef, candidate: &dyn Subscriber) -> bool {
    std::ptr::eq(
        Arc::as_ptr(registered) as *const (),
        candidate as *const dyn Subscriber as *const (),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quiet;

    impl Subscriber for Quiet {
        fn on_reading(&self, _reading: &Reading) -> CallbackResult {
            Ok(())
        }
    }

    #[test]
    fn test_identity_is_per_allocation() {
        let a: SubscriberRef = Arc::new(Quiet);
        let b: SubscriberRef = Arc::new(Quiet);
        let a_again = Arc::clone(&a);

        assert!(same_subscriber(&a, a_again.as_ref()));
        assert!(!same_subscriber(&a, b.as_ref()));
    }

    #[test]
    fn test_default_callbacks_succeed() {
        let quiet = Quiet;
        assert!(quiet
            .on_accuracy_changed(SourceType::Light, Accuracy::Low)
            .is_ok());
        assert!(quiet.on_error("nope").is_ok());
    }
}
