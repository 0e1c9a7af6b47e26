use livecell_core::Cell;
use livecell_ops::sample_with::SampleWithExt;
use livecell_test_utils::helpers::{expect_no_emission, expect_values};
use livecell_test_utils::Recorder;

#[test]
fn test_sample_with_emits_latest_value_on_trigger() {
    // Arrange
    let values: Cell<i32> = Cell::new();
    let tick: Cell<()> = Cell::new();
    let sampled = values.sample_with(&tick);
    let recorder = Recorder::attach(&sampled);

    // Act
    values.set(1);
    values.set(2);
    tick.set(());

    // Assert: only the latest value at trigger time.
    expect_values(&recorder, &[2]);
}

#[test]
fn test_sample_with_trigger_without_pending_value_emits_nothing() {
    // Arrange
    let values: Cell<i32> = Cell::new();
    let tick: Cell<()> = Cell::new();
    let sampled = values.sample_with(&tick);
    let recorder = Recorder::attach(&sampled);

    // Act
    tick.set(());

    // Assert
    expect_no_emission(&recorder);
}

#[test]
fn test_sample_with_never_duplicates_a_value() {
    // Arrange: a second trigger with nothing new pending is silent.
    let values: Cell<i32> = Cell::new();
    let tick: Cell<()> = Cell::new();
    let sampled = values.sample_with(&tick);
    let recorder = Recorder::attach(&sampled);

    // Act
    values.set(1);
    tick.set(());
    tick.set(());
    values.set(2);
    tick.set(());

    // Assert
    expect_values(&recorder, &[1, 2]);
}

#[test]
fn test_sample_with_picks_up_pre_existing_value() {
    // Arrange: attachment-time delivery parks the current value as pending.
    let values = Cell::with_value(9);
    let tick: Cell<()> = Cell::new();
    let sampled = values.sample_with(&tick);

    // Act
    tick.set(());

    // Assert
    assert_eq!(sampled.value(), Some(9));
}
