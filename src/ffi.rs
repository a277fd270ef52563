//! Raw boundary types and the native sensing entry points.
//!
//! Every `macos_sensing_swift_*` symbol is implemented by the Swift
//! framework when the `swift-framework` feature is enabled; otherwise the
//! in-process [`stub`] backend stands in with programmable sentinel values
//! so the rest of the crate behaves identically on any platform.

use std::os::raw::c_char;

/// Window record as laid out by the Swift side. Strings are heap-allocated
/// over there and must go back through `macos_sensing_swift_free_window_metadata`.
#[repr(C)]
pub(crate) struct WindowMetadataFfi {
    pub window_id: u32,
    pub bundle_id_ptr: *mut c_char,
    pub title_ptr: *mut c_char,
    pub owner_name_ptr: *mut c_char,
    pub bounds_x: f64,
    pub bounds_y: f64,
    pub bounds_width: f64,
    pub bounds_height: f64,
}

#[repr(C)]
pub(crate) struct OcrResultFfi {
    pub text_ptr: *mut c_char,
    pub confidence: f64,
    pub word_count: u64,
}

#[cfg(feature = "swift-framework")]
mod swift {
    use super::{OcrResultFfi, WindowMetadataFfi};
    use std::os::raw::c_char;

    extern "C" {
        pub fn macos_sensing_swift_get_window() -> *mut WindowMetadataFfi;
        pub fn macos_sensing_swift_capture_screenshot(
            window_id: u32,
            out_len: *mut usize,
        ) -> *mut u8;
        pub fn macos_sensing_swift_run_ocr(
            image_data: *const u8,
            image_len: usize,
        ) -> *mut OcrResultFfi;
        pub fn macos_sensing_swift_clear_cache();

        pub fn macos_sensing_swift_free_window_metadata(ptr: *mut WindowMetadataFfi);
        pub fn macos_sensing_swift_free_screenshot_buffer(ptr: *mut u8);
        pub fn macos_sensing_swift_free_ocr_result(ptr: *mut OcrResultFfi);
        pub fn macos_sensing_swift_free_string(ptr: *mut c_char);

        pub fn macos_sensing_swift_get_app_icon_and_color(
            bundle_id: *const c_char,
        ) -> *mut c_char;

        pub fn macos_sensing_swift_island_init();
        pub fn macos_sensing_swift_island_start(
            start_uptime_ms: i64,
            target_ms: i64,
            mode: *const c_char,
        );
        pub fn macos_sensing_swift_island_sync(value_ms: i64);
        pub fn macos_sensing_swift_island_pause();
        pub fn macos_sensing_swift_island_resume();
        pub fn macos_sensing_swift_island_reset();
        pub fn macos_sensing_swift_island_cleanup();
        pub fn macos_sensing_swift_island_update_chime_preferences(
            enabled: bool,
            sound_id: *const c_char,
        );
        pub fn macos_sensing_swift_island_preview_chime(sound_id: *const c_char);
        pub fn macos_sensing_swift_island_set_visible(visible: bool);

        pub fn macos_sensing_swift_audio_start_monitoring();
        pub fn macos_sensing_swift_audio_toggle_playback();
        pub fn macos_sensing_swift_audio_next_track();
        pub fn macos_sensing_swift_audio_previous_track();

        pub fn macos_sensing_swift_check_screen_recording_permission() -> bool;
        pub fn macos_sensing_swift_request_screen_recording_permission() -> bool;
        pub fn macos_sensing_swift_check_accessibility_permission() -> bool;
        pub fn macos_sensing_swift_open_screen_recording_settings();
        pub fn macos_sensing_swift_open_accessibility_settings();
        pub fn macos_sensing_swift_check_media_automation_permission(
            bundle_id: *const c_char,
        ) -> bool;
        pub fn macos_sensing_swift_request_media_automation_permission(
            bundle_id: *const c_char,
        ) -> i32;
        pub fn macos_sensing_swift_open_automation_settings();
    }
}

#[cfg(not(feature = "swift-framework"))]
pub mod stub;

#[cfg(feature = "swift-framework")]
pub(crate) use swift as native;

#[cfg(not(feature = "swift-framework"))]
pub(crate) use stub as native;
