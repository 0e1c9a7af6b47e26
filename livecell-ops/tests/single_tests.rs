use livecell_core::Cell;
use livecell_ops::single::{FirstExt, FirstOrDefaultExt};
use livecell_test_utils::helpers::expect_values;
use livecell_test_utils::test_value::{alice, bob};
use livecell_test_utils::Recorder;

#[test]
fn test_first_delivers_only_the_first_emission() {
    // Arrange
    let source = Cell::new();
    let single = source.first();
    let recorder = Recorder::attach(single.cell());

    // Act
    source.set(alice());
    source.set(bob());

    // Assert
    expect_values(&recorder, &[alice()]);
    assert_eq!(single.value(), Some(alice()));
}

#[test]
fn test_first_adopts_pre_existing_value_without_subscribing() {
    // Arrange
    let source = Cell::with_value(alice());

    // Act
    let single = source.first();

    // Assert
    assert_eq!(single.value(), Some(alice()));
    assert_eq!(source.observer_count(), 0);
}

#[test]
fn test_first_detaches_after_delivery() {
    // Arrange
    let source: Cell<i32> = Cell::new();
    let single = source.first();

    // Act
    source.set(1);

    // Assert
    assert_eq!(source.observer_count(), 0);
    assert_eq!(single.value(), Some(1));
}

#[test]
fn test_to_single_is_an_alias_for_first() {
    // Arrange
    let source = Cell::new();
    let single = source.to_single();

    // Act
    source.set(7);
    source.set(8);

    // Assert
    assert_eq!(single.value(), Some(7));
}

#[test]
fn test_first_or_default_passes_through_a_non_null_first_value() {
    // Arrange
    let source: Cell<Option<i32>> = Cell::new();
    let single = source.first_or_default(0);

    // Act
    source.set(Some(5));
    source.set(Some(6));

    // Assert
    assert_eq!(single.value(), Some(5));
}

#[test]
fn test_first_or_default_replaces_a_null_first_value() {
    // Arrange
    let source: Cell<Option<i32>> = Cell::new();
    let single = source.first_or_default(42);

    // Act
    source.set(None);
    source.set(Some(5));

    // Assert
    assert_eq!(single.value(), Some(42));
}

#[test]
fn test_single_cell_observes_like_a_cell() {
    // Arrange: SingleCell derefs to Cell, so observation works unchanged.
    let source: Cell<i32> = Cell::new();
    let single = source.first();
    let recorder = Recorder::attach(&single);

    // Act
    source.set(3);

    // Assert
    expect_values(&recorder, &[3]);
}
