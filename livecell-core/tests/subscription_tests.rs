use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use livecell_core::{Cell, Subscription};
use parking_lot::Mutex;

#[test]
fn test_dispose_is_idempotent_via_drop() {
    // Arrange
    let cell: Cell<i32> = Cell::new();
    let subscription = cell.observe(|_| {});

    // Act
    subscription.dispose();

    // Assert: dropping after explicit dispose must not double-detach.
    assert_eq!(cell.observer_count(), 0);
}

#[test]
fn test_is_disposed_tracks_state() {
    // Arrange
    let cell: Cell<i32> = Cell::new();
    let subscription = cell.observe(|_| {});

    // Assert
    assert!(!subscription.is_disposed());
    subscription.dispose();
}

#[test]
fn test_dispose_during_broadcast_cancels_pending_delivery() {
    // Arrange: the first observer disposes the second mid-broadcast, so the
    // second must never see the value even though it was snapshotted.
    let cell: Cell<i32> = Cell::new();
    let second_slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let slot = Arc::clone(&second_slot);
    let _first = cell.observe(move |_: &i32| {
        if let Some(second) = slot.lock().take() {
            second.dispose();
        }
    });

    let delivered = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&delivered);
    let second = cell.observe(move |_: &i32| {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    *second_slot.lock() = Some(second);

    // Act
    cell.set(1);

    // Assert
    assert_eq!(delivered.load(Ordering::SeqCst), 0);
    assert_eq!(cell.observer_count(), 1);
}

#[test]
fn test_observer_attached_during_broadcast_skips_replayed_value() {
    // Arrange: an observer that attaches a second observer while handling an
    // emission. Attachment-time delivery hands the new observer the current
    // value once; the outer broadcast must not deliver it a second time.
    let cell: Cell<i32> = Cell::new();
    let late_values = Arc::new(Mutex::new(Vec::new()));
    let keep: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

    let inner_cell = cell.clone();
    let sink = Arc::clone(&late_values);
    let holder = Arc::clone(&keep);
    let attached = Arc::new(AtomicUsize::new(0));
    let once = Arc::clone(&attached);
    let _first = cell.observe(move |_: &i32| {
        if once.fetch_add(1, Ordering::SeqCst) == 0 {
            let sink = Arc::clone(&sink);
            let subscription = inner_cell.observe(move |value: &i32| sink.lock().push(*value));
            holder.lock().push(subscription);
        }
    });

    // Act
    cell.set(5);
    cell.set(6);

    // Assert
    assert_eq!(*late_values.lock(), vec![5, 6]);
}
