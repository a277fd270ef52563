//! OS permission checks and the settings deep links.
//!
//! Boolean returns are the native side's only failure signal; `false`
//! covers both "denied" and "could not determine". The media-automation
//! request is the one call that reports a status code, surfaced as
//! [`AutomationStatus`].

use std::ffi::CString;

use crate::ffi::native;
use crate::log_warn;
use crate::types::AutomationStatus;

const ENABLE_LOGS: bool = true;

pub fn check_screen_recording() -> bool {
    unsafe { native::macos_sensing_swift_check_screen_recording_permission() }
}

/// Prompts the user if the permission is undetermined; returns the
/// post-prompt state.
pub fn request_screen_recording() -> bool {
    unsafe { native::macos_sensing_swift_request_screen_recording_permission() }
}

pub fn check_accessibility() -> bool {
    unsafe { native::macos_sensing_swift_check_accessibility_permission() }
}

pub fn open_screen_recording_settings() {
    unsafe { native::macos_sensing_swift_open_screen_recording_settings() }
}

pub fn open_accessibility_settings() {
    unsafe { native::macos_sensing_swift_open_accessibility_settings() }
}

pub fn open_automation_settings() {
    unsafe { native::macos_sensing_swift_open_automation_settings() }
}

/// Whether the host may send automation events to the app identified by
/// `bundle_id`.
pub fn check_media_automation(bundle_id: &str) -> bool {
    let c_bundle_id = match CString::new(bundle_id) {
        Ok(s) => s,
        Err(_) => {
            log_warn!("check_media_automation: bundle id contains null byte; treating as denied");
            return false;
        }
    };
    unsafe { native::macos_sensing_swift_check_media_automation_permission(c_bundle_id.as_ptr()) }
}

/// Requests automation access for `bundle_id`, prompting the user when the
/// permission is undetermined.
pub fn request_media_automation(bundle_id: &str) -> AutomationStatus {
    let c_bundle_id = match CString::new(bundle_id) {
        Ok(s) => s,
        Err(_) => {
            log_warn!(
                "request_media_automation: bundle id contains null byte; request not sent"
            );
            return AutomationStatus::NotDetermined;
        }
    };
    let raw = unsafe {
        native::macos_sensing_swift_request_media_automation_permission(c_bundle_id.as_ptr())
    };
    AutomationStatus::from_raw(raw)
}
