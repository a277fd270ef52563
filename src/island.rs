//! Island overlay controls.
//!
//! Every call is fire-and-forget: the overlay's state machine lives on the
//! native side and nothing is reported back. String arguments that carry
//! an interior null byte cannot cross the boundary; those calls are
//! skipped with a warning instead of aborting.

use std::ffi::CString;

use crate::ffi::native;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

pub fn init() {
    unsafe { native::macos_sensing_swift_island_init() }
}

/// Starts the overlay countdown. `start_uptime_ms` anchors the timer to
/// the machine's uptime clock (see [`current_uptime_ms`]) so the overlay
/// keeps counting correctly across host restarts.
pub fn start(start_uptime_ms: i64, target_ms: i64, mode: &str) {
    let c_mode = match CString::new(mode) {
        Ok(s) => s,
        Err(_) => {
            log_warn!("island start: mode string contains null byte; skipping");
            return;
        }
    };
    unsafe { native::macos_sensing_swift_island_start(start_uptime_ms, target_ms, c_mode.as_ptr()) }
}

/// Re-aligns the overlay's displayed value with the host's timer.
pub fn sync(value_ms: i64) {
    unsafe { native::macos_sensing_swift_island_sync(value_ms) }
}

pub fn pause() {
    unsafe { native::macos_sensing_swift_island_pause() }
}

pub fn resume() {
    unsafe { native::macos_sensing_swift_island_resume() }
}

pub fn reset() {
    unsafe { native::macos_sensing_swift_island_reset() }
}

pub fn cleanup() {
    unsafe { native::macos_sensing_swift_island_cleanup() }
}

pub fn update_chime_preferences(enabled: bool, sound_id: &str) {
    match CString::new(sound_id) {
        Ok(c_sound_id) => unsafe {
            native::macos_sensing_swift_island_update_chime_preferences(
                enabled,
                c_sound_id.as_ptr(),
            )
        },
        Err(_) => {
            log_warn!("update_chime_preferences: sound_id contains null byte; skipping update");
        }
    }
}

pub fn preview_chime(sound_id: &str) {
    match CString::new(sound_id) {
        Ok(c_sound_id) => unsafe {
            native::macos_sensing_swift_island_preview_chime(c_sound_id.as_ptr())
        },
        Err(_) => {
            log_warn!("preview_chime: sound_id contains null byte; skipping preview");
        }
    }
}

pub fn set_visible(visible: bool) {
    unsafe { native::macos_sensing_swift_island_set_visible(visible) }
}

/// Milliseconds since boot on the overlay's clock. Hosts pass this as
/// `start_uptime_ms` when starting the overlay.
#[cfg(target_os = "macos")]
pub fn current_uptime_ms() -> i64 {
    use mach::mach_time::{mach_absolute_time, mach_timebase_info, mach_timebase_info_data_t};
    use std::mem::MaybeUninit;

    unsafe {
        let now = mach_absolute_time();
        let mut info = MaybeUninit::<mach_timebase_info_data_t>::uninit();
        mach_timebase_info(info.as_mut_ptr());
        let info = info.assume_init();
        ((now as u128 * info.numer as u128) / info.denom as u128 / 1_000_000) as i64
    }
}

/// Monotonic fallback for platforms without the mach uptime clock; only
/// differences between readings are meaningful.
#[cfg(not(target_os = "macos"))]
pub fn current_uptime_ms() -> i64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_readings_never_go_backwards() {
        let first = current_uptime_ms();
        let second = current_uptime_ms();
        assert!(first >= 0);
        assert!(second >= first);
    }
}
