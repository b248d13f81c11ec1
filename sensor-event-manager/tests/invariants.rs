//! Property-based checks of the activation invariants
//!
//! After any sequence of operations, a sensor class holds a platform
//! activation if and only if it has at least one subscriber, and never more
//! than one activation at a time.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use proptest::prelude::*;
use sensor_api::sim::SimulatedPlatform;
use sensor_event_manager::prelude::*;

const TYPES: [SourceType; 4] = [
    SourceType::Accelerometer,
    SourceType::Light,
    SourceType::Pressure,
    // Not present on the simulated platform
    SourceType::RelativeHumidity,
];
const SUBSCRIBERS: usize = 3;

struct Quiet;

impl Subscriber for Quiet {
    fn on_reading(&self, _reading: &Reading) -> CallbackResult {
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Op {
    Subscribe(usize, usize),
    Unsubscribe(usize, usize),
    UnsubscribeType(usize),
    UnsubscribeAll,
    Dispatch(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..TYPES.len(), 0..SUBSCRIBERS).prop_map(|(t, s)| Op::Subscribe(t, s)),
        3 => (0..TYPES.len(), 0..SUBSCRIBERS).prop_map(|(t, s)| Op::Unsubscribe(t, s)),
        1 => (0..TYPES.len()).prop_map(Op::UnsubscribeType),
        1 => Just(Op::UnsubscribeAll),
        2 => (0..TYPES.len()).prop_map(Op::Dispatch),
    ]
}

fn fixture() -> (Arc<SimulatedPlatform>, SensorEventManager, Vec<SubscriberRef>) {
    let platform = Arc::new(SimulatedPlatform::with_types(&TYPES[..3]));
    let manager = SensorEventManager::new(platform.clone());
    let subscribers = (0..SUBSCRIBERS)
        .map(|_| Arc::new(Quiet) as SubscriberRef)
        .collect();
    (platform, manager, subscribers)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_handle_held_iff_subscribers_present(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let (platform, manager, subscribers) = fixture();
        let mut model: HashMap<SourceType, HashSet<usize>> = HashMap::new();

        for op in ops {
            match op {
                Op::Subscribe(t, s) => {
                    let outcome = manager
                        .subscribe(TYPES[t], subscribers[s].clone(), SamplingRate::Normal)
                        .unwrap();
                    if outcome.is_registered() {
                        model.entry(TYPES[t]).or_default().insert(s);
                    }
                }
                Op::Unsubscribe(t, s) => {
                    manager.unsubscribe(TYPES[t], subscribers[s].as_ref());
                    if let Some(set) = model.get_mut(&TYPES[t]) {
                        set.remove(&s);
                        if set.is_empty() {
                            model.remove(&TYPES[t]);
                        }
                    }
                }
                Op::UnsubscribeType(t) => {
                    manager.unsubscribe_type(TYPES[t]);
                    model.remove(&TYPES[t]);
                }
                Op::UnsubscribeAll => {
                    manager.unsubscribe_all();
                    model.clear();
                }
                Op::Dispatch(t) => {
                    let event = platform.event(TYPES[t], vec![1.0], 0);
                    let summary = manager.dispatch(TYPES[t], &event);
                    let expected = model.get(&TYPES[t]).map_or(0, |set| set.len());
                    prop_assert_eq!(summary.delivered, expected);
                }
            }

            for ty in TYPES {
                let expected = model.get(&ty).map_or(0, |set| set.len());
                prop_assert_eq!(manager.subscriber_count(ty), expected);
                prop_assert_eq!(manager.is_active(ty), expected > 0);
                prop_assert_eq!(platform.active_count(ty), usize::from(expected > 0));
                prop_assert_eq!(
                    platform.activation_count(ty) - platform.deactivation_count(ty),
                    usize::from(expected > 0)
                );
            }
        }

        prop_assert!(!platform.is_active(SourceType::RelativeHumidity));
    }

    #[test]
    fn prop_teardown_order_does_not_matter(
        pairs in proptest::collection::hash_set((0..3usize, 0..SUBSCRIBERS), 1..6)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    ) {
        let (platform, manager, subscribers) = fixture();
        let (platform_all, manager_all, subscribers_all) = fixture();

        for &(t, s) in &pairs {
            manager.subscribe(TYPES[t], subscribers[s].clone(), SamplingRate::Normal).unwrap();
            manager_all.subscribe(TYPES[t], subscribers_all[s].clone(), SamplingRate::Normal).unwrap();
        }

        for &(t, s) in pairs.iter().rev() {
            manager.unsubscribe(TYPES[t], subscribers[s].as_ref());
        }
        manager_all.unsubscribe_all();

        prop_assert!(manager.active_types().is_empty());
        prop_assert!(manager_all.active_types().is_empty());
        for ty in TYPES {
            prop_assert!(!platform.is_active(ty));
            prop_assert!(!platform_all.is_active(ty));
            prop_assert_eq!(platform.activation_count(ty), platform.deactivation_count(ty));
            prop_assert_eq!(platform.activation_count(ty), platform_all.activation_count(ty));
            prop_assert_eq!(platform.deactivation_count(ty), platform_all.deactivation_count(ty));
        }
    }
}
