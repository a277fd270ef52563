//! Sensing queries: active window metadata, screenshot capture, OCR, and
//! the framework-side cache.
//!
//! Failure from the native side is a null pointer and nothing else; the
//! safe layer maps it to `None`. Errors only arise here when a returned
//! string fails UTF-8 decoding.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ffi::native;
use crate::handles::{c_ptr_to_string, NativeString, OcrResultGuard, WindowMetadataGuard};
use crate::types::{OcrResult, WindowBounds, WindowMetadata};

pub use crate::handles::ScreenshotBuffer;

const ENABLE_LOGS: bool = true;
use crate::log_warn;

/// Metadata for the currently active window, or `None` when the framework
/// has nothing to report (no frontmost window, missing permission).
pub fn active_window_metadata() -> Result<Option<WindowMetadata>> {
    let guard = match WindowMetadataGuard::from_raw(unsafe { native::macos_sensing_swift_get_window() }) {
        Some(guard) => guard,
        None => return Ok(None),
    };

    let raw = guard.raw();
    let metadata = WindowMetadata {
        window_id: raw.window_id,
        bundle_id: unsafe { c_ptr_to_string(raw.bundle_id_ptr) }
            .context("failed to decode bundle id")?,
        title: unsafe { c_ptr_to_string(raw.title_ptr) }.context("failed to decode window title")?,
        owner_name: unsafe { c_ptr_to_string(raw.owner_name_ptr) }
            .context("failed to decode owner name")?,
        bounds: WindowBounds {
            x: raw.bounds_x,
            y: raw.bounds_y,
            width: raw.bounds_width,
            height: raw.bounds_height,
        },
    };

    Ok(Some(metadata))
}

/// Captures the given window. `None` means the framework produced no image
/// (unknown window id, permission missing); no release is owed in that
/// case.
pub fn capture_screenshot(window_id: u32) -> Option<ScreenshotBuffer> {
    let mut len: usize = 0;
    let ptr = unsafe { native::macos_sensing_swift_capture_screenshot(window_id, &mut len) };
    ScreenshotBuffer::from_raw(ptr, len)
}

/// Runs the framework's OCR over an encoded image. `None` when recognition
/// produced nothing.
pub fn run_ocr(image: &[u8]) -> Result<Option<OcrResult>> {
    let guard = match OcrResultGuard::from_raw(unsafe {
        native::macos_sensing_swift_run_ocr(image.as_ptr(), image.len())
    }) {
        Some(guard) => guard,
        None => return Ok(None),
    };

    let raw = guard.raw();
    let result = OcrResult {
        text: unsafe { c_ptr_to_string(raw.text_ptr) }.context("failed to decode OCR text")?,
        confidence: raw.confidence,
        word_count: raw.word_count,
    };

    Ok(Some(result))
}

/// Drops the framework's internal window/screenshot cache, so stale window
/// references from an interrupted session cannot leak into the next one.
pub fn clear_cache() {
    unsafe { native::macos_sensing_swift_clear_cache() }
}

#[derive(Deserialize)]
struct IconAndColor {
    icon: String,
    color: String,
}

/// App icon as a data URL plus its dominant color. The native side packs
/// both into one JSON string; `None` when the app is unknown or the
/// payload does not parse.
pub fn app_icon_and_color(bundle_id: &str) -> Option<(String, String)> {
    let c_bundle_id = match std::ffi::CString::new(bundle_id) {
        Ok(s) => s,
        Err(_) => {
            log_warn!("app_icon_and_color: bundle id contains null byte; skipping lookup");
            return None;
        }
    };

    let payload = NativeString::from_raw(unsafe {
        native::macos_sensing_swift_get_app_icon_and_color(c_bundle_id.as_ptr())
    })?;

    let parsed: IconAndColor = serde_json::from_str(payload.as_str().ok()?).ok()?;
    Some((parsed.icon, parsed.color))
}
