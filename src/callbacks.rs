//! Callback slots the native side fires back into.
//!
//! Three independent single-handler slots: timer ended, timer cancelled,
//! focus requested. The host installs a handler with `set_*_callback`;
//! the Swift side invokes it by calling the exported
//! `macos_sensing_trigger_*` symbols. An empty slot makes the trigger a
//! silent no-op, never an error. Registration is last-writer-wins, with
//! no chaining.
//!
//! The original C bridge kept these as bare global function pointers with
//! no synchronization; here each slot sits behind a mutex, so a trigger
//! racing a registration sees either the old handler or the new one,
//! never a torn pointer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Handler = Arc<dyn Fn() + Send + Sync + 'static>;

struct CallbackRegistry {
    timer_end: Mutex<Option<Handler>>,
    timer_cancel: Mutex<Option<Handler>>,
    focus_app: Mutex<Option<Handler>>,
}

static REGISTRY: CallbackRegistry = CallbackRegistry {
    timer_end: Mutex::new(None),
    timer_cancel: Mutex::new(None),
    focus_app: Mutex::new(None),
};

// Triggers must never fail, so a slot poisoned by a panicking handler
// stays usable.
fn slot(slot: &Mutex<Option<Handler>>) -> MutexGuard<'_, Option<Handler>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn fire(mutex: &Mutex<Option<Handler>>) {
    // Clone the handler out of the lock before invoking, so a handler may
    // re-register itself without deadlocking.
    let handler = slot(mutex).clone();
    if let Some(handler) = handler {
        handler();
    }
}

/// Installs the handler invoked when the user ends the timer from the
/// island overlay. Replaces any previous handler.
pub fn set_timer_end_callback(f: impl Fn() + Send + Sync + 'static) {
    *slot(&REGISTRY.timer_end) = Some(Arc::new(f));
}

/// Installs the handler invoked when the user cancels the timer from the
/// island overlay. Replaces any previous handler.
pub fn set_timer_cancel_callback(f: impl Fn() + Send + Sync + 'static) {
    *slot(&REGISTRY.timer_cancel) = Some(Arc::new(f));
}

/// Installs the handler invoked when the island overlay asks the host to
/// bring its window to the front. Replaces any previous handler.
pub fn set_focus_app_callback(f: impl Fn() + Send + Sync + 'static) {
    *slot(&REGISTRY.focus_app) = Some(Arc::new(f));
}

/// Empties all three slots. Call during host teardown so no handler
/// outlives the state it captures.
pub fn clear_callbacks() {
    *slot(&REGISTRY.timer_end) = None;
    *slot(&REGISTRY.timer_cancel) = None;
    *slot(&REGISTRY.focus_app) = None;
}

#[no_mangle]
pub extern "C" fn macos_sensing_trigger_end_timer() {
    fire(&REGISTRY.timer_end);
}

#[no_mangle]
pub extern "C" fn macos_sensing_trigger_cancel_timer() {
    fire(&REGISTRY.timer_cancel);
}

#[no_mangle]
pub extern "C" fn macos_sensing_trigger_focus_app() {
    fire(&REGISTRY.focus_app);
}
