use super::ClickCounterModel;
use crate::{ModelError, Observer};

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Observer for Recorder {
    fn update(&self) {
        self.log.borrow_mut().push(self.name);
    }
}

fn recorder(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Rc<Recorder> {
    Rc::new(Recorder {
        name,
        log: Rc::clone(log),
    })
}

#[test]
fn starts_at_zero_without_observers() {
    let model = ClickCounterModel::new();
    assert_eq!(model.get_count(), 0);
    assert_eq!(model.observer_count(), 0);
}

#[test]
fn count_tracks_increments_since_last_reset() {
    let model = ClickCounterModel::new();
    let mut expected = 0u64;

    for step in [true, true, false, true, false, false, true, true, true] {
        if step {
            model.increment();
            expected += 1;
        } else {
            model.reset();
            expected = 0;
        }
        assert_eq!(model.get_count(), expected);
    }
}

#[test]
fn reset_at_zero_still_runs_one_notification_cycle() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let observer = recorder("only", &log);
    let model = ClickCounterModel::new();
    model.subscribe(&observer).expect("subscribe");

    model.reset();

    assert_eq!(model.get_count(), 0);
    assert_eq!(*log.borrow(), vec!["only"]);
}

#[test]
fn notifies_every_observer_once_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = recorder("first", &log);
    let second = recorder("second", &log);
    let third = recorder("third", &log);
    let model = ClickCounterModel::new();
    model.subscribe(&first).expect("first");
    model.subscribe(&second).expect("second");
    model.subscribe(&third).expect("third");

    model.increment();

    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn removed_observer_is_never_notified_again() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let kept = recorder("kept", &log);
    let removed = recorder("removed", &log);
    let model = ClickCounterModel::new();
    model.subscribe(&kept).expect("kept");
    model.subscribe(&removed).expect("removed");

    let removed_handle = Rc::downgrade(&removed) as Weak<dyn Observer>;
    model.remove_observer(&removed_handle);
    model.increment();
    model.reset();

    assert_eq!(model.observer_count(), 1);
    assert_eq!(*log.borrow(), vec!["kept", "kept"]);
}

#[test]
fn removing_unknown_observer_is_a_no_op() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let registered = recorder("registered", &log);
    let stranger = recorder("stranger", &log);
    let model = ClickCounterModel::new();
    model.subscribe(&registered).expect("subscribe");

    let stranger_handle = Rc::downgrade(&stranger) as Weak<dyn Observer>;
    model.remove_observer(&stranger_handle);

    assert_eq!(model.observer_count(), 1);
}

#[test]
fn remove_only_drops_the_first_matching_registration() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let twice = recorder("twice", &log);
    let model = ClickCounterModel::new();
    model.subscribe(&twice).expect("first registration");
    model.subscribe(&twice).expect("second registration");

    let handle = Rc::downgrade(&twice) as Weak<dyn Observer>;
    model.remove_observer(&handle);
    model.increment();

    assert_eq!(model.observer_count(), 1);
    assert_eq!(*log.borrow(), vec!["twice"]);
}

#[test]
fn rejects_handle_without_live_observer() {
    let model = ClickCounterModel::new();
    let dangling: Weak<dyn Observer> = Weak::<Recorder>::new();

    let err = model.add_observer(dangling).expect_err("dangling handle");

    assert!(matches!(err, ModelError::TypeMismatch { .. }));
    assert_eq!(model.observer_count(), 0);
}

#[test]
fn dropped_observer_is_skipped_and_pruned() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let survivor = recorder("survivor", &log);
    let model = ClickCounterModel::new();
    {
        let short_lived = recorder("short_lived", &log);
        model.subscribe(&short_lived).expect("short lived");
    }
    model.subscribe(&survivor).expect("survivor");

    model.increment();

    assert_eq!(*log.borrow(), vec!["survivor"]);
    assert_eq!(model.observer_count(), 1);
}

struct CountReader {
    model: Rc<ClickCounterModel>,
    seen: RefCell<Vec<u64>>,
}

impl Observer for CountReader {
    fn update(&self) {
        self.seen.borrow_mut().push(self.model.get_count());
    }
}

#[test]
fn observers_read_the_mutated_value_before_mutator_returns() {
    let model = Rc::new(ClickCounterModel::new());
    let reader = Rc::new(CountReader {
        model: Rc::clone(&model),
        seen: RefCell::new(Vec::new()),
    });
    model.subscribe(&reader).expect("subscribe");

    model.increment();
    model.increment();
    model.reset();

    assert_eq!(*reader.seen.borrow(), vec![1, 2, 0]);
}

#[test]
fn subscribed_concrete_observer_can_be_removed_through_trait_handle() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let concrete = recorder("concrete", &log);
    let model = ClickCounterModel::new();
    model.subscribe(&concrete).expect("subscribe");
    model.increment();

    let handle = Rc::downgrade(&concrete);
    let handle: Weak<dyn Observer> = handle;
    model.remove_observer(&handle);
    model.increment();

    assert_eq!(model.observer_count(), 0);
    assert_eq!(*log.borrow(), vec!["concrete"]);
}
