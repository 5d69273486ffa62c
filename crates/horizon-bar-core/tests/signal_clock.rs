//! Integration tests for signals driven by a frame clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use horizon_bar_core::{FrameClock, ManualClock, Signal};
use parking_lot::Mutex;

#[test]
fn signal_delivers_frame_times_in_order() {
    let clock = Arc::new(ManualClock::new());
    let frame = Signal::<Duration>::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = seen.clone();
    frame.connect(move |elapsed| seen_clone.lock().push(*elapsed));

    for _ in 0..3 {
        clock.advance(Duration::from_millis(16));
        frame.emit(clock.elapsed());
    }

    assert_eq!(
        *seen.lock(),
        vec![
            Duration::from_millis(16),
            Duration::from_millis(32),
            Duration::from_millis(48),
        ]
    );
}

#[test]
fn scoped_connection_stops_after_drop() {
    let signal = Signal::<f32>::new();
    let count = Arc::new(AtomicUsize::new(0));

    {
        let count_clone = count.clone();
        let _guard = signal.connect_scoped(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        signal.emit(1.0);
        assert_eq!(signal.connection_count(), 1);
    }

    signal.emit(2.0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(signal.connection_count(), 0);
}

#[test]
fn blocked_signal_skips_slots() {
    let signal = Signal::<()>::new();
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    signal.set_blocked(true);
    signal.emit(());
    signal.set_blocked(false);
    signal.emit(());

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn slot_may_connect_during_emit() {
    let signal = Arc::new(Signal::<u32>::new());
    let count = Arc::new(AtomicUsize::new(0));

    let signal_clone = signal.clone();
    let count_clone = count.clone();
    signal.connect(move |_| {
        let count_inner = count_clone.clone();
        signal_clone.connect(move |_| {
            count_inner.fetch_add(1, Ordering::SeqCst);
        });
    });

    // The slot added during the first emit only runs on the next one.
    signal.emit(1);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    signal.emit(2);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn clock_is_shared_across_threads() {
    let clock = Arc::new(ManualClock::new());
    let start = clock.now();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let clock = clock.clone();
            thread::spawn(move || clock.advance(Duration::from_millis(10)))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(clock.now() - start, Duration::from_millis(40));
}

#[test]
fn trait_object_clock() {
    let manual = Arc::new(ManualClock::new());
    let clock: Arc<dyn FrameClock> = manual.clone();
    let before = clock.now();

    manual.advance_secs(0.5);
    assert_eq!(clock.now() - before, Duration::from_millis(500));

    manual.advance_secs(-1.0);
    manual.advance_secs(f64::NAN);
    assert_eq!(manual.elapsed(), Duration::from_millis(500));
}
