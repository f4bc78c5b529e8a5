use capsule_bundle::{Capabilities, CapabilityBundle, Slot, bundle, capability};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

trait Act1 {
    fn act1(&self) -> String;
}

trait Act2 {
    fn act2(&self) -> String;
}

trait Act3 {
    fn act3(&self) -> String {
        "Act3!".to_string()
    }
}

capability!(Act1);
capability!(Act2);
capability!(Act3);

struct Handler1;

impl Act1 for Handler1 {
    fn act1(&self) -> String {
        "Act1!".to_string()
    }
}

// Has the right method but does not implement `Act2`.
struct Legacy2;

impl Legacy2 {
    fn act2(&self) -> String {
        "Act2!".to_string()
    }
}

struct Legacy2Adapter(Legacy2);

impl Act2 for Legacy2Adapter {
    fn act2(&self) -> String {
        self.0.act2()
    }
}

struct DefaultAct3;

impl Act3 for DefaultAct3 {}

struct Handler3;

impl Act3 for Handler3 {
    fn act3(&self) -> String {
        "Act3_2!".to_string()
    }
}

type Act13 = Capabilities![dyn Act1, dyn Act3];

#[test]
fn each_capability_resolves_to_its_own_implementation() {
    let caps: CapabilityBundle<Act13> = bundle![Handler1, Handler3];
    assert_eq!(caps.get::<dyn Act1, _>().act1(), "Act1!");
    assert_eq!(caps.get::<dyn Act3, _>().act3(), "Act3_2!");
}

#[test]
fn adapter_supplies_capability_for_nonconforming_type() {
    let caps: CapabilityBundle<Capabilities![dyn Act1, dyn Act2]> =
        bundle![Handler1, Legacy2Adapter(Legacy2)];
    assert_eq!(caps.get::<dyn Act2, _>().act2(), "Act2!");
    assert_eq!(caps.capability_names().as_slice(), &["Act1", "Act2"]);
}

#[test]
fn slots_accept_boxes_and_factories() {
    let chosen: Box<dyn Act3> = Box::new(DefaultAct3);
    let caps: CapabilityBundle<Capabilities![dyn Act2, dyn Act3]> = bundle![
        Slot::<dyn Act2>::from_factory(|| Legacy2Adapter(Legacy2)),
        chosen,
    ];
    assert_eq!(caps.get::<dyn Act3, _>().act3(), "Act3!");

    let caps: CapabilityBundle<Act13> = bundle![
        Slot::<dyn Act1>::new(Handler1),
        Slot::<dyn Act3>::new(DefaultAct3),
    ];
    assert_eq!(caps.get::<dyn Act3, _>().act3(), "Act3!");
}

#[test]
fn factory_runs_exactly_once() {
    let runs = AtomicUsize::new(0);
    let caps: CapabilityBundle<Act13> = bundle![
        Handler1,
        Slot::<dyn Act3>::from_factory(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            Handler3
        }),
    ];
    caps.get::<dyn Act3, _>().act3();
    caps.get::<dyn Act3, _>().act3();
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

// Consumers hold the bundle instead of reaching for global state.
struct Caller {
    caps: CapabilityBundle<Act13>,
}

impl Caller {
    fn new(use_default: bool) -> Self {
        let act3: Box<dyn Act3> = if use_default {
            Box::new(DefaultAct3)
        } else {
            Box::new(Handler3)
        };
        Self {
            caps: bundle![Handler1, act3],
        }
    }

    fn call(&self) -> String {
        format!(
            "{} {}",
            self.caps.get::<dyn Act1, _>().act1(),
            self.caps.get::<dyn Act3, _>().act3()
        )
    }
}

#[test]
fn consumers_pick_implementations_at_construction() {
    assert_eq!(Caller::new(true).call(), "Act1! Act3!");
    assert_eq!(Caller::new(false).call(), "Act1! Act3_2!");
}

// Two capabilities with an identically named operation stay independent.
trait CheckInt {
    fn check(&self, value: i32) -> i32;
}

trait CheckFloat {
    fn check(&self, value: f64) -> i32;
}

capability!(CheckInt);
capability!(CheckFloat);

struct IntOnly;

impl CheckInt for IntOnly {
    fn check(&self, _value: i32) -> i32 {
        1
    }
}

struct FloatOnly;

impl CheckFloat for FloatOnly {
    fn check(&self, _value: f64) -> i32 {
        3
    }
}

#[test]
fn same_named_operations_do_not_hide_each_other() {
    let caps: CapabilityBundle<Capabilities![dyn CheckInt, dyn CheckFloat]> =
        bundle![IntOnly, FloatOnly];
    assert_eq!(caps.get::<dyn CheckFloat, _>().check(1.0), 3);
    assert_eq!(caps.get::<dyn CheckInt, _>().check(1), 1);
}

trait Tally {
    fn add(&self, n: usize);
    fn total(&self) -> usize;
}

capability!(Tally: Send + Sync);

#[derive(Default)]
struct AtomicTally(AtomicUsize);

impl Tally for AtomicTally {
    fn add(&self, n: usize) {
        self.0.fetch_add(n, Ordering::SeqCst);
    }

    fn total(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[test]
fn shared_bundle_is_readable_from_many_threads() {
    let caps: Arc<CapabilityBundle<Capabilities![dyn Tally + Send + Sync]>> =
        Arc::new(bundle![AtomicTally::default()]);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let caps = Arc::clone(&caps);
            scope.spawn(move || {
                for _ in 0..100 {
                    caps.get::<dyn Tally + Send + Sync, _>().add(1);
                }
            });
        }
    });
    assert_eq!(caps.get::<dyn Tally + Send + Sync, _>().total(), 400);
    assert_eq!(caps.capability_names().as_slice(), &["Tally + Send + Sync"]);
}

#[test]
fn slots_can_be_released() {
    let caps: CapabilityBundle<Act13> = bundle![Handler1, Handler3];
    let (act1, rest) = caps.into_slots().into_parts();
    let (act3, _) = rest.into_parts();
    assert_eq!(act1.into_inner().act1(), "Act1!");
    assert_eq!(act3.get().act3(), "Act3_2!");
}

trait Label {
    fn label(&self) -> &'static str;
}

capability!(Label: Send);

struct Fixed;

impl Label for Fixed {
    fn label(&self) -> &'static str {
        "fixed"
    }
}

fn assert_send<T: Send>(_: &T) {}

#[test]
fn single_bound_capability_moves_across_threads() {
    let caps: CapabilityBundle<Capabilities![dyn Label + Send, dyn Act1]> =
        bundle![Fixed, Handler1];
    let slot = Slot::<dyn Label + Send>::new(Fixed);
    assert_send(&slot);
    let label = std::thread::spawn(move || slot.get().label()).join().unwrap();
    assert_eq!(label, "fixed");
    assert_eq!(caps.capability_names().as_slice(), &["Label + Send", "Act1"]);
}
