//! End-to-end callback flow through the public surface: the host installs
//! handlers, the native side fires the exported trigger symbols.
//!
//! Kept as a single scenario because the registry is process-wide state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use macos_sensing::callbacks::{
    macos_sensing_trigger_cancel_timer, macos_sensing_trigger_end_timer,
    macos_sensing_trigger_focus_app,
};
use macos_sensing::{
    clear_callbacks, set_focus_app_callback, set_timer_cancel_callback, set_timer_end_callback,
};

#[test]
fn island_callback_round_trip() {
    // Nothing registered yet: triggers are silent no-ops.
    macos_sensing_trigger_end_timer();
    macos_sensing_trigger_cancel_timer();
    macos_sensing_trigger_focus_app();

    let ended = Arc::new(AtomicUsize::new(0));
    let cancelled = Arc::new(AtomicUsize::new(0));
    let focused = Arc::new(AtomicUsize::new(0));

    let ended_in_handler = ended.clone();
    set_timer_end_callback(move || {
        ended_in_handler.fetch_add(1, Ordering::SeqCst);
    });
    let cancelled_in_handler = cancelled.clone();
    set_timer_cancel_callback(move || {
        cancelled_in_handler.fetch_add(1, Ordering::SeqCst);
    });
    let focused_in_handler = focused.clone();
    set_focus_app_callback(move || {
        focused_in_handler.fetch_add(1, Ordering::SeqCst);
    });

    // The user taps "end" three times over the session's life.
    macos_sensing_trigger_end_timer();
    macos_sensing_trigger_end_timer();
    macos_sensing_trigger_end_timer();
    assert_eq!(ended.load(Ordering::SeqCst), 3);
    assert_eq!(cancelled.load(Ordering::SeqCst), 0);
    assert_eq!(focused.load(Ordering::SeqCst), 0);

    macos_sensing_trigger_cancel_timer();
    macos_sensing_trigger_focus_app();
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    assert_eq!(focused.load(Ordering::SeqCst), 1);

    // A replacement handler takes over; the first one is never called again.
    let replacement = Arc::new(AtomicUsize::new(0));
    let replacement_in_handler = replacement.clone();
    set_timer_end_callback(move || {
        replacement_in_handler.fetch_add(1, Ordering::SeqCst);
    });
    macos_sensing_trigger_end_timer();
    assert_eq!(ended.load(Ordering::SeqCst), 3);
    assert_eq!(replacement.load(Ordering::SeqCst), 1);

    // After teardown the triggers fall back to no-ops.
    clear_callbacks();
    macos_sensing_trigger_end_timer();
    macos_sensing_trigger_cancel_timer();
    macos_sensing_trigger_focus_app();
    assert_eq!(ended.load(Ordering::SeqCst), 3);
    assert_eq!(replacement.load(Ordering::SeqCst), 1);
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    assert_eq!(focused.load(Ordering::SeqCst), 1);
}
