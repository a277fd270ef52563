//! Boundary layer between a host application and the macOS sensing
//! framework.
//!
//! The crate owns the seam itself: it declares the
//! Swift-implemented entry points, exposes a safe Rust surface over them,
//! and exports the `macos_sensing_trigger_*` symbols the Swift side calls
//! when the user interacts with the island overlay.
//!
//! Four groups of operations:
//! - [`sensing`] - active window metadata, screenshot capture, OCR, cache.
//! - [`island`] - overlay lifecycle and chime preferences.
//! - [`audio`] - now-playing transport controls.
//! - [`permissions`] - screen recording, accessibility, and automation
//!   permission checks plus settings deep links.
//!
//! Allocations made by the native side come back as owning handles
//! ([`ScreenshotBuffer`]) or are copied into owned records before the
//! native memory is released; callers never see a raw pointer. Failure is
//! whatever the framework reports: a null return becomes `None`, a `false`
//! stays `false`, and no richer error taxonomy is invented on top.
//!
//! Builds without the `swift-framework` feature route every native call to
//! [`stub`], a programmable in-process backend used by the test suite.

mod ffi;
mod handles;
mod types;
mod utils;

pub mod audio;
pub mod callbacks;
pub mod island;
pub mod permissions;
pub mod sensing;

pub use callbacks::{
    clear_callbacks, set_focus_app_callback, set_timer_cancel_callback, set_timer_end_callback,
};
pub use handles::ScreenshotBuffer;
pub use island::current_uptime_ms;
pub use types::{AutomationStatus, OcrResult, WindowBounds, WindowMetadata};

#[cfg(not(feature = "swift-framework"))]
pub use ffi::stub;
