//! Audio transport controls, forwarded verbatim to the system's now-playing
//! session. All fire-and-forget.

use crate::ffi::native;

pub fn start_monitoring() {
    unsafe { native::macos_sensing_swift_audio_start_monitoring() }
}

pub fn toggle_playback() {
    unsafe { native::macos_sensing_swift_audio_toggle_playback() }
}

pub fn next_track() {
    unsafe { native::macos_sensing_swift_audio_next_track() }
}

pub fn previous_track() {
    unsafe { native::macos_sensing_swift_audio_previous_track() }
}
