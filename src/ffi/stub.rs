//! In-process stand-in for the Swift sensing framework.
//!
//! Implements every native entry point with programmable sentinel values
//! and a call log, so the safe layer can be exercised without linking the
//! real framework. Allocation-returning entry points track live
//! allocations, which lets tests assert that every handle releases its
//! pointer exactly once.

use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::{OcrResultFfi, WindowMetadataFfi};
use crate::types::{OcrResult, WindowMetadata};

#[derive(Default)]
struct StubState {
    window: Option<WindowMetadata>,
    screenshots: HashMap<u32, Vec<u8>>,
    ocr: Option<OcrResult>,
    icon_payload: Option<String>,
    screen_recording_granted: bool,
    accessibility_granted: bool,
    media_automation_granted: bool,
    automation_request_status: i32,
    calls: Vec<String>,
    live_allocations: usize,
    // Screenshot buffers stay owned here, keyed by the address handed out,
    // so the matching free call can reclaim them without a length.
    buffers: HashMap<usize, Box<[u8]>>,
}

static SERIAL: Mutex<()> = Mutex::new(());
static STATE: OnceLock<Mutex<StubState>> = OnceLock::new();

fn state() -> MutexGuard<'static, StubState> {
    STATE
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Serializes tests that program the stub and resets all sentinel state.
/// Hold the returned handle for the duration of the test.
pub fn lock() -> StubHandle {
    let serial = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    *state() = StubState::default();
    StubHandle { _serial: serial }
}

pub struct StubHandle {
    _serial: MutexGuard<'static, ()>,
}

impl StubHandle {
    pub fn set_window(&self, window: Option<WindowMetadata>) {
        state().window = window;
    }

    pub fn set_screenshot(&self, window_id: u32, bytes: Vec<u8>) {
        state().screenshots.insert(window_id, bytes);
    }

    pub fn set_ocr(&self, result: Option<OcrResult>) {
        state().ocr = result;
    }

    /// JSON payload returned by the icon/color entry point, or `None` for
    /// a null return.
    pub fn set_icon_payload(&self, payload: Option<String>) {
        state().icon_payload = payload;
    }

    pub fn set_screen_recording_granted(&self, granted: bool) {
        state().screen_recording_granted = granted;
    }

    pub fn set_accessibility_granted(&self, granted: bool) {
        state().accessibility_granted = granted;
    }

    pub fn set_media_automation_granted(&self, granted: bool) {
        state().media_automation_granted = granted;
    }

    /// Raw status code the next automation permission request reports.
    pub fn set_automation_request_status(&self, status: i32) {
        state().automation_request_status = status;
    }

    /// Every native call recorded so far, with forwarded arguments.
    pub fn calls(&self) -> Vec<String> {
        state().calls.clone()
    }

    /// Allocations handed out and not yet released.
    pub fn live_allocations(&self) -> usize {
        state().live_allocations
    }
}

fn record(call: String) {
    state().calls.push(call);
}

fn alloc_c_string(s: &str) -> *mut c_char {
    CString::new(s)
        .expect("stub sentinel contains interior null byte")
        .into_raw()
}

unsafe fn cstr_arg(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

pub(crate) unsafe fn macos_sensing_swift_get_window() -> *mut WindowMetadataFfi {
    let window = {
        let mut st = state();
        st.calls.push("get_window".to_string());
        match st.window.clone() {
            Some(w) => {
                st.live_allocations += 1;
                w
            }
            None => return ptr::null_mut(),
        }
    };
    Box::into_raw(Box::new(WindowMetadataFfi {
        window_id: window.window_id,
        bundle_id_ptr: alloc_c_string(&window.bundle_id),
        title_ptr: alloc_c_string(&window.title),
        owner_name_ptr: alloc_c_string(&window.owner_name),
        bounds_x: window.bounds.x,
        bounds_y: window.bounds.y,
        bounds_width: window.bounds.width,
        bounds_height: window.bounds.height,
    }))
}

pub(crate) unsafe fn macos_sensing_swift_capture_screenshot(
    window_id: u32,
    out_len: *mut usize,
) -> *mut u8 {
    let mut st = state();
    st.calls.push(format!("capture_screenshot({window_id})"));
    let bytes = match st.screenshots.get(&window_id) {
        Some(b) if !b.is_empty() => b.clone(),
        _ => {
            *out_len = 0;
            return ptr::null_mut();
        }
    };
    *out_len = bytes.len();
    let mut boxed = bytes.into_boxed_slice();
    let raw = boxed.as_mut_ptr();
    st.buffers.insert(raw as usize, boxed);
    st.live_allocations += 1;
    raw
}

pub(crate) unsafe fn macos_sensing_swift_run_ocr(
    _image_data: *const u8,
    image_len: usize,
) -> *mut OcrResultFfi {
    let result = {
        let mut st = state();
        st.calls.push(format!("run_ocr({image_len} bytes)"));
        match st.ocr.clone() {
            Some(r) => {
                st.live_allocations += 1;
                r
            }
            None => return ptr::null_mut(),
        }
    };
    Box::into_raw(Box::new(OcrResultFfi {
        text_ptr: alloc_c_string(&result.text),
        confidence: result.confidence,
        word_count: result.word_count,
    }))
}

pub(crate) unsafe fn macos_sensing_swift_clear_cache() {
    record("clear_cache".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_free_window_metadata(ptr: *mut WindowMetadataFfi) {
    if ptr.is_null() {
        return;
    }
    let boxed = Box::from_raw(ptr);
    drop(CString::from_raw(boxed.bundle_id_ptr));
    drop(CString::from_raw(boxed.title_ptr));
    drop(CString::from_raw(boxed.owner_name_ptr));
    state().live_allocations -= 1;
}

pub(crate) unsafe fn macos_sensing_swift_free_screenshot_buffer(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }
    let mut st = state();
    if st.buffers.remove(&(ptr as usize)).is_some() {
        st.live_allocations -= 1;
    }
}

pub(crate) unsafe fn macos_sensing_swift_free_ocr_result(ptr: *mut OcrResultFfi) {
    if ptr.is_null() {
        return;
    }
    let boxed = Box::from_raw(ptr);
    drop(CString::from_raw(boxed.text_ptr));
    state().live_allocations -= 1;
}

pub(crate) unsafe fn macos_sensing_swift_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
    state().live_allocations -= 1;
}

pub(crate) unsafe fn macos_sensing_swift_get_app_icon_and_color(
    bundle_id: *const c_char,
) -> *mut c_char {
    let bundle_id = cstr_arg(bundle_id);
    let mut st = state();
    st.calls.push(format!("get_app_icon_and_color({bundle_id:?})"));
    match st.icon_payload.clone() {
        Some(payload) => {
            st.live_allocations += 1;
            drop(st);
            alloc_c_string(&payload)
        }
        None => ptr::null_mut(),
    }
}

pub(crate) unsafe fn macos_sensing_swift_island_init() {
    record("island_init".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_island_start(
    start_uptime_ms: i64,
    target_ms: i64,
    mode: *const c_char,
) {
    let mode = cstr_arg(mode);
    record(format!("island_start({start_uptime_ms}, {target_ms}, {mode:?})"));
}

pub(crate) unsafe fn macos_sensing_swift_island_sync(value_ms: i64) {
    record(format!("island_sync({value_ms})"));
}

pub(crate) unsafe fn macos_sensing_swift_island_pause() {
    record("island_pause".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_island_resume() {
    record("island_resume".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_island_reset() {
    record("island_reset".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_island_cleanup() {
    record("island_cleanup".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_island_update_chime_preferences(
    enabled: bool,
    sound_id: *const c_char,
) {
    let sound_id = cstr_arg(sound_id);
    record(format!("island_update_chime_preferences({enabled}, {sound_id:?})"));
}

pub(crate) unsafe fn macos_sensing_swift_island_preview_chime(sound_id: *const c_char) {
    let sound_id = cstr_arg(sound_id);
    record(format!("island_preview_chime({sound_id:?})"));
}

pub(crate) unsafe fn macos_sensing_swift_island_set_visible(visible: bool) {
    record(format!("island_set_visible({visible})"));
}

pub(crate) unsafe fn macos_sensing_swift_audio_start_monitoring() {
    record("audio_start_monitoring".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_audio_toggle_playback() {
    record("audio_toggle_playback".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_audio_next_track() {
    record("audio_next_track".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_audio_previous_track() {
    record("audio_previous_track".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_check_screen_recording_permission() -> bool {
    let mut st = state();
    st.calls.push("check_screen_recording_permission".to_string());
    st.screen_recording_granted
}

pub(crate) unsafe fn macos_sensing_swift_request_screen_recording_permission() -> bool {
    let mut st = state();
    st.calls
        .push("request_screen_recording_permission".to_string());
    st.screen_recording_granted
}

pub(crate) unsafe fn macos_sensing_swift_check_accessibility_permission() -> bool {
    let mut st = state();
    st.calls.push("check_accessibility_permission".to_string());
    st.accessibility_granted
}

pub(crate) unsafe fn macos_sensing_swift_open_screen_recording_settings() {
    record("open_screen_recording_settings".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_open_accessibility_settings() {
    record("open_accessibility_settings".to_string());
}

pub(crate) unsafe fn macos_sensing_swift_check_media_automation_permission(
    bundle_id: *const c_char,
) -> bool {
    let bundle_id = cstr_arg(bundle_id);
    let mut st = state();
    st.calls
        .push(format!("check_media_automation_permission({bundle_id:?})"));
    st.media_automation_granted
}

pub(crate) unsafe fn macos_sensing_swift_request_media_automation_permission(
    bundle_id: *const c_char,
) -> i32 {
    let bundle_id = cstr_arg(bundle_id);
    let mut st = state();
    st.calls
        .push(format!("request_media_automation_permission({bundle_id:?})"));
    st.automation_request_status
}

pub(crate) unsafe fn macos_sensing_swift_open_automation_settings() {
    record("open_automation_settings".to_string());
}
