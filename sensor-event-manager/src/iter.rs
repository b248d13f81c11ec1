//! Sync iterator for consuming events from a ChannelSubscriber
//!
//! Provides a blocking iterator interface for processing sensor events
//! without implementing a subscriber.

use std::time::Duration;

use crossbeam::channel::Receiver;

use crate::channel::SensorEvent;

/// Blocking iterator over sensor events
///
/// This iterator blocks on `next()` until an event is available or the
/// subscriber is dropped. Use `try_recv()` for non-blocking access.
///
/// Clones share one queue and each event goes to exactly one of them. A clone
/// blocked in `recv()` never holds up the others.
#[derive(Clone)]
pub struct SensorEventIterator {
    rx: Receiver<SensorEvent>,
}

impl SensorEventIterator {
    pub(crate) fn new(rx: Receiver<SensorEvent>) -> Self {
        Self { rx }
    }

    /// Block until an event is available
    ///
    /// Returns `None` once the subscriber has been dropped and the channel drained.
    pub fn recv(&self) -> Option<SensorEvent> {
        self.rx.recv().ok()
    }

    /// Try to receive an event without blocking
    pub fn try_recv(&self) -> Option<SensorEvent> {
        self.rx.try_recv().ok()
    }

    /// Block until an event is available or timeout expires
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SensorEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Non-blocking iterator over currently available events
    pub fn try_iter(&self) -> TryIterator<'_> {
        TryIterator { inner: self }
    }

    /// Blocking iterator that waits up to `timeout` on each `next()`
    pub fn timeout_iter(&self, timeout: Duration) -> TimeoutIterator<'_> {
        TimeoutIterator {
            inner: self,
            timeout,
        }
    }
}

impl Iterator for SensorEventIterator {
    type Item = SensorEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

/// Non-blocking iterator over currently available events
pub struct TryIterator<'a> {
    inner: &'a SensorEventIterator,
}

impl<'a> Iterator for TryIterator<'a> {
    type Item = SensorEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.try_recv()
    }
}

/// Blocking iterator with timeout
pub struct TimeoutIterator<'a> {
    inner: &'a SensorEventIterator,
    timeout: Duration,
}

impl<'a> Iterator for TimeoutIterator<'a> {
    type Item = SensorEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.recv_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_try_recv_empty() {
        let (tx, rx) = unbounded::<SensorEvent>();
        let iter = SensorEventIterator::new(rx);

        assert!(iter.try_recv().is_none());

        drop(tx);
    }

    #[test]
    fn test_recv_timeout_empty() {
        let (tx, rx) = unbounded::<SensorEvent>();
        let iter = SensorEventIterator::new(rx);

        let start = Instant::now();
        let result = iter.recv_timeout(Duration::from_millis(50));
        assert!(result.is_none());
        assert!(start.elapsed() >= Duration::from_millis(45));

        drop(tx);
    }

    #[test]
    fn test_try_iter_drains_available() {
        let (tx, rx) = unbounded::<SensorEvent>();
        let iter = SensorEventIterator::new(rx);

        tx.send(SensorEvent::Error("one".to_string())).unwrap();
        tx.send(SensorEvent::Error("two".to_string())).unwrap();

        let events: Vec<_> = iter.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(iter.try_iter().next().is_none());
    }

    #[test]
    fn test_recv_ends_when_sender_dropped() {
        let (tx, rx) = unbounded::<SensorEvent>();
        let mut iter = SensorEventIterator::new(rx);

        drop(tx);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_clone_shares_receiver() {
        let (tx, rx) = unbounded::<SensorEvent>();
        let iter1 = SensorEventIterator::new(rx);
        let iter2 = iter1.clone();

        tx.send(SensorEvent::Error("shared".to_string())).unwrap();
        assert!(iter2.try_recv().is_some());
        assert!(iter1.try_recv().is_none());
    }

    #[test]
    fn test_blocked_clone_does_not_stall_others() {
        let (tx, rx) = unbounded::<SensorEvent>();
        let events = SensorEventIterator::new(rx);
        let blocked = events.clone();

        let waiter = thread::spawn(move || blocked.recv());
        thread::sleep(Duration::from_millis(50));

        let start = Instant::now();
        assert!(events.try_recv().is_none());
        assert!(events.recv_timeout(Duration::from_millis(20)).is_none());
        assert!(events.try_iter().next().is_none());
        assert!(start.elapsed() < Duration::from_secs(1));

        tx.send(SensorEvent::Error("wake".to_string())).unwrap();
        assert_eq!(waiter.join().unwrap(), Some(SensorEvent::Error("wake".to_string())));
    }
}
