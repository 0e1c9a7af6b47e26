use livecell_core::{Cell, CellError};
use livecell_ops::amb::{amb, amb_nullable, AmbNulls};
use livecell_test_utils::helpers::{expect_no_emission, expect_values};
use livecell_test_utils::test_value::{alice, bob, cat, dog};
use livecell_test_utils::Recorder;

#[test]
fn test_amb_forwards_only_the_first_source_to_emit() {
    // Arrange
    let persons = Cell::new();
    let animals = Cell::new();
    let out = amb(&[persons.clone(), animals.clone()]).unwrap();
    let recorder = Recorder::attach(&out);

    // Act
    animals.set(dog());
    persons.set(alice());
    animals.set(cat());

    // Assert: animals won the race; persons is never heard from.
    expect_values(&recorder, &[dog(), cat()]);
}

#[test]
fn test_amb_detaches_losing_sources() {
    // Arrange
    let winner = Cell::new();
    let loser = Cell::new();
    let out = amb(&[winner.clone(), loser.clone()]).unwrap();

    // Act
    winner.set(1);

    // Assert
    assert_eq!(out.source_count(), 1);
    assert_eq!(loser.observer_count(), 0);
}

#[test]
fn test_amb_seeds_from_pre_existing_value_without_resolving() {
    // Arrange: a pre-existing value seeds the output, but the race is only
    // decided by an emission after wiring.
    let seeded = Cell::with_value(1);
    let other = Cell::new();
    let out = amb(&[seeded, other.clone()]).unwrap();
    assert_eq!(out.value(), Some(1));
    let recorder = Recorder::attach(&out);

    // Act
    other.set(2);

    // Assert: the other source can still win.
    expect_values(&recorder, &[1, 2]);
}

#[test]
fn test_amb_with_no_sources_is_rejected() {
    // Act
    let result = amb::<i32>(&[]);

    // Assert
    assert!(matches!(result, Err(CellError::EmptySources)));
}

#[test]
fn test_amb_nullable_considers_null_a_real_emission() {
    // Arrange
    let first: Cell<Option<i32>> = Cell::new();
    let second: Cell<Option<i32>> = Cell::new();
    let out = amb_nullable(&[first.clone(), second.clone()], AmbNulls::Consider).unwrap();
    let recorder = Recorder::attach(&out);

    // Act
    second.set(None);
    first.set(Some(1));

    // Assert: second won with a null.
    expect_values(&recorder, &[None]);
}

#[test]
fn test_amb_nullable_ignoring_nulls_lets_a_later_value_win() {
    // Arrange
    let first: Cell<Option<i32>> = Cell::new();
    let second: Cell<Option<i32>> = Cell::new();
    let out = amb_nullable(
        &[first.clone(), second.clone()],
        AmbNulls::Ignore {
            initial_null_seeds: false,
        },
    )
    .unwrap();
    let recorder = Recorder::attach(&out);

    // Act
    second.set(None);

    // Assert: a null does not resolve the race.
    expect_no_emission(&recorder);

    // Act
    first.set(Some(1));
    second.set(Some(2));

    // Assert: first won; second's later value is dropped.
    expect_values(&recorder, &[Some(1)]);
}

#[test]
fn test_amb_nullable_seed_policy_controls_null_seeding() {
    // Arrange
    let seeded_null: Cell<Option<i32>> = Cell::with_value(None);
    let other: Cell<Option<i32>> = Cell::new();

    // Act
    let seeding = amb_nullable(
        &[seeded_null.clone(), other.clone()],
        AmbNulls::Ignore {
            initial_null_seeds: true,
        },
    )
    .unwrap();
    let non_seeding = amb_nullable(
        &[seeded_null, other],
        AmbNulls::Ignore {
            initial_null_seeds: false,
        },
    )
    .unwrap();

    // Assert
    assert_eq!(seeding.value(), Some(None));
    assert_eq!(non_seeding.value(), None);
}

#[test]
fn test_amb_keeps_forwarding_the_winner() {
    // Arrange
    let winner = Cell::new();
    let loser = Cell::new();
    let out = amb(&[winner.clone(), loser.clone()]).unwrap();
    let recorder = Recorder::attach(&out);

    // Act
    winner.set(alice());
    loser.set(dog());
    winner.set(bob());

    // Assert
    expect_values(&recorder, &[alice(), bob()]);
}
