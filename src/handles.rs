//! Scoped owners for pointers allocated on the native side.
//!
//! Each guard pairs one allocating entry point with its release call and
//! performs the release on `Drop`, so every exit path frees exactly once.
//! Null pointers are never wrapped; callers map them to `None` before a
//! guard exists.

use std::ffi::CStr;
use std::ops::Deref;
use std::os::raw::c_char;
use std::ptr::NonNull;

use anyhow::{anyhow, Result};

use crate::ffi::{native, OcrResultFfi, WindowMetadataFfi};

pub(crate) struct WindowMetadataGuard {
    ptr: NonNull<WindowMetadataFfi>,
}

impl WindowMetadataGuard {
    pub(crate) fn from_raw(ptr: *mut WindowMetadataFfi) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub(crate) fn raw(&self) -> &WindowMetadataFfi {
        unsafe { self.ptr.as_ref() }
    }
}

impl Drop for WindowMetadataGuard {
    fn drop(&mut self) {
        unsafe { native::macos_sensing_swift_free_window_metadata(self.ptr.as_ptr()) }
    }
}

pub(crate) struct OcrResultGuard {
    ptr: NonNull<OcrResultFfi>,
}

impl OcrResultGuard {
    pub(crate) fn from_raw(ptr: *mut OcrResultFfi) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub(crate) fn raw(&self) -> &OcrResultFfi {
        unsafe { self.ptr.as_ref() }
    }
}

impl Drop for OcrResultGuard {
    fn drop(&mut self) {
        unsafe { native::macos_sensing_swift_free_ocr_result(self.ptr.as_ptr()) }
    }
}

/// Owned string allocated by the native side, released on drop.
pub(crate) struct NativeString {
    ptr: NonNull<c_char>,
}

impl NativeString {
    pub(crate) fn from_raw(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub(crate) fn as_str(&self) -> Result<&str> {
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
            .to_str()
            .map_err(|e| anyhow!(e))
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        unsafe { native::macos_sensing_swift_free_string(self.ptr.as_ptr()) }
    }
}

/// Screenshot bytes owned by the native side. Derefs to `&[u8]`; the
/// backing buffer is released when the value goes out of scope.
pub struct ScreenshotBuffer {
    ptr: NonNull<u8>,
    len: usize,
}

// The buffer is exclusively owned and the native deallocator may run on
// any thread.
unsafe impl Send for ScreenshotBuffer {}
unsafe impl Sync for ScreenshotBuffer {}

impl ScreenshotBuffer {
    /// Wraps a native screenshot allocation. Null or zero-length buffers
    /// yield `None`; a non-null zero-length pointer is still released.
    pub(crate) fn from_raw(ptr: *mut u8, len: usize) -> Option<Self> {
        let ptr = NonNull::new(ptr)?;
        if len == 0 {
            unsafe { native::macos_sensing_swift_free_screenshot_buffer(ptr.as_ptr()) }
            return None;
        }
        Some(Self { ptr, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_ref().to_vec()
    }
}

impl Deref for ScreenshotBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl AsRef<[u8]> for ScreenshotBuffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Drop for ScreenshotBuffer {
    fn drop(&mut self) {
        unsafe { native::macos_sensing_swift_free_screenshot_buffer(self.ptr.as_ptr()) }
    }
}

impl std::fmt::Debug for ScreenshotBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenshotBuffer")
            .field("len", &self.len)
            .finish()
    }
}

/// Copies a borrowed native string. Null decodes to an empty string, which
/// is how the original bridge treated absent fields.
pub(crate) unsafe fn c_ptr_to_string(ptr: *const c_char) -> Result<String> {
    if ptr.is_null() {
        return Ok(String::new());
    }
    let c_str = CStr::from_ptr(ptr);
    c_str.to_str().map(|s| s.to_owned()).map_err(|e| anyhow!(e))
}
