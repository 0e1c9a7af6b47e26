use std::sync::Arc;

use livecell_core::{Cell, CellError};
use livecell_ops::buffer::BufferExt;
use livecell_ops::creating::{from_fn, just, range_of, ToCellExt};
use livecell_ops::map::MapExt;
use livecell_ops::nulls::NullExt;
use livecell_ops::replay::ReplayExt;
use livecell_ops::scan::ScanExt;
use livecell_ops::tap::TapExt;
use livecell_test_utils::helpers::{expect_no_emission, expect_values};
use livecell_test_utils::test_value::{alice, bob};
use livecell_test_utils::Recorder;
use parking_lot::Mutex;

#[test]
fn test_map_transforms_every_emission() {
    // Arrange
    let numbers = Cell::new();
    let squares = numbers.map(|n: &i32| n * n);
    let recorder = Recorder::attach(&squares);

    // Act
    numbers.set(2);
    numbers.set(3);

    // Assert
    expect_values(&recorder, &[4, 9]);
}

#[test]
fn test_map_applies_to_pre_existing_value() {
    // Arrange
    let source = Cell::with_value(alice());

    // Act
    let names = source.map(|value| format!("{value:?}"));

    // Assert
    assert!(names.has_value());
}

#[test]
fn test_switch_map_follows_the_latest_inner_cell() {
    // Arrange
    let selector = Cell::new();
    let first_inner: Cell<i32> = Cell::new();
    let second_inner: Cell<i32> = Cell::new();
    let inners = [first_inner.clone(), second_inner.clone()];
    let switched = selector.switch_map(move |index: &usize| inners[*index].clone());
    let recorder = Recorder::attach(&switched);

    // Act
    selector.set(0);
    first_inner.set(1);
    selector.set(1);
    second_inner.set(2);

    // Assert
    expect_values(&recorder, &[1, 2]);
}

#[test]
fn test_switch_map_detaches_from_the_previous_inner_cell() {
    // Arrange
    let selector = Cell::new();
    let first_inner: Cell<i32> = Cell::new();
    let second_inner: Cell<i32> = Cell::new();
    let inners = [first_inner.clone(), second_inner.clone()];
    let switched = selector.switch_map(move |index: &usize| inners[*index].clone());
    let recorder = Recorder::attach(&switched);

    // Act
    selector.set(0);
    selector.set(1);
    first_inner.set(99);

    // Assert: the abandoned inner cell is silent.
    expect_no_emission(&recorder);
    assert_eq!(first_inner.observer_count(), 0);
}

#[test]
fn test_switch_map_picks_up_inner_current_value() {
    // Arrange
    let selector = Cell::new();
    let inner = Cell::with_value(5);
    let cloned = inner.clone();
    let switched = selector.switch_map(move |_: &()| cloned.clone());

    // Act
    selector.set(());

    // Assert
    assert_eq!(switched.value(), Some(5));
}

#[test]
fn test_buffer_publishes_full_batches_only() {
    // Arrange
    let source = Cell::new();
    let batches = source.buffer(3).unwrap();
    let recorder = Recorder::attach(&batches);

    // Act
    for value in 1..=7 {
        source.set(value);
    }

    // Assert: the seventh value sits in a partial buffer.
    expect_values(&recorder, &[vec![1, 2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_buffer_of_zero_is_rejected() {
    // Arrange
    let source: Cell<i32> = Cell::new();

    // Act
    let result = source.buffer(0);

    // Assert
    assert!(matches!(result, Err(CellError::InvalidArgument { .. })));
}

#[test]
fn test_scan_swallows_the_first_emission() {
    // Arrange
    let source = Cell::new();
    let totals = source.scan(|acc: &i32, value: &i32| acc + value);
    let recorder = Recorder::attach(&totals);

    // Act
    source.set(1);

    // Assert
    expect_no_emission(&recorder);

    // Act
    source.set(2);
    source.set(3);

    // Assert
    expect_values(&recorder, &[3, 6]);
}

#[test]
fn test_scan_seeded_publishes_seed_then_every_total() {
    // Arrange
    let source = Cell::new();
    let totals = source.scan_seeded(0, |acc: &i32, value: &i32| acc + value);
    let recorder = Recorder::attach(&totals);

    // Act
    source.set(1);
    source.set(2);

    // Assert
    expect_values(&recorder, &[0, 1, 3]);
}

#[test]
fn test_do_before_next_runs_before_forwarding() {
    // Arrange
    let source = Cell::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let action_log = Arc::clone(&order);
    let tapped = source.do_before_next(move |_: &i32| action_log.lock().push("action"));
    let observer_log = Arc::clone(&order);
    let _subscription = tapped.observe(move |_| observer_log.lock().push("observer"));

    // Act
    source.set(1);

    // Assert
    assert_eq!(*order.lock(), vec!["action", "observer"]);
}

#[test]
fn test_do_after_next_runs_after_forwarding() {
    // Arrange
    let source = Cell::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let action_log = Arc::clone(&order);
    let tapped = source.do_after_next(move |_: &i32| action_log.lock().push("action"));
    let observer_log = Arc::clone(&order);
    let _subscription = tapped.observe(move |_| observer_log.lock().push("observer"));

    // Act
    source.set(1);

    // Assert
    assert_eq!(*order.lock(), vec!["observer", "action"]);
}

#[test]
fn test_tap_forwards_values_unchanged() {
    // Arrange
    let source = Cell::new();
    let tapped = source.do_before_next(|_| {});
    let recorder = Recorder::attach(&tapped);

    // Act
    source.set(alice());
    source.set(bob());

    // Assert
    expect_values(&recorder, &[alice(), bob()]);
}

#[test]
fn test_replay_republishes_the_full_history() {
    // Arrange
    let source = Cell::new();
    let history = source.replay();
    let recorder = Recorder::attach(&history);

    // Act
    source.set(1);
    source.set(2);
    source.set(3);

    // Assert
    expect_values(
        &recorder,
        &[vec![1], vec![1, 2], vec![1, 2, 3]],
    );
}

#[test]
fn test_non_null_strips_nulls_and_unwraps() {
    // Arrange
    let source: Cell<Option<i32>> = Cell::new();
    let values = source.non_null();
    let recorder = Recorder::attach(&values);

    // Act
    source.set(Some(1));
    source.set(None);
    source.set(Some(2));

    // Assert
    expect_values(&recorder, &[1, 2]);
}

#[test]
fn test_default_if_null_replaces_nulls() {
    // Arrange
    let source: Cell<Option<i32>> = Cell::new();
    let values = source.default_if_null(0);
    let recorder = Recorder::attach(&values);

    // Act
    source.set(Some(1));
    source.set(None);
    source.set(Some(2));

    // Assert
    expect_values(&recorder, &[1, 0, 2]);
}

#[test]
fn test_just_holds_its_value_immediately() {
    // Act
    let cell = just(alice());

    // Assert
    assert_eq!(cell.value(), Some(alice()));
}

#[test]
fn test_from_fn_evaluates_the_producer_once() {
    // Act
    let cell = from_fn(|| 6 * 7);

    // Assert
    assert_eq!(cell.value(), Some(42));
}

#[test]
fn test_range_of_ends_on_the_last_value() {
    // Act
    let cell = range_of(1, 5);

    // Assert
    assert_eq!(cell.value(), Some(5));
}

#[test]
fn test_to_cell_snapshots_without_following() {
    // Arrange
    let source = Cell::with_value(1);

    // Act
    let snapshot = source.to_cell();
    source.set(2);

    // Assert
    assert_eq!(snapshot.value(), Some(1));
    assert_eq!(source.value(), Some(2));
}

#[test]
fn test_to_cell_of_unset_source_is_unset() {
    // Arrange
    let source: Cell<i32> = Cell::new();

    // Act
    let snapshot = source.to_cell();

    // Assert
    assert!(!snapshot.has_value());
}
