//! Owned records for the data that crosses the sensing boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Metadata for the frontmost window, as reported by the sensing framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowMetadata {
    pub window_id: u32,
    pub bundle_id: String,
    pub title: String,
    pub owner_name: String,
    pub bounds: WindowBounds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    pub text: String,
    pub confidence: f64,
    pub word_count: u64,
}

/// Outcome of a media-automation permission request.
///
/// The native side reports an AppleEvents `OSStatus`; everything outside
/// the three codes we know collapses to `Denied` so callers never see a
/// raw integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomationStatus {
    Granted,
    Denied,
    NotDetermined,
}

const STATUS_GRANTED: i32 = 0;
// errAEEventNotPermitted
const STATUS_NOT_PERMITTED: i32 = -1743;
// errAEEventWouldRequireUserConsent
const STATUS_WOULD_REQUIRE_CONSENT: i32 = -1744;

impl AutomationStatus {
    pub fn from_raw(status: i32) -> Self {
        match status {
            STATUS_GRANTED => AutomationStatus::Granted,
            STATUS_NOT_PERMITTED => AutomationStatus::Denied,
            STATUS_WOULD_REQUIRE_CONSENT => AutomationStatus::NotDetermined,
            _ => AutomationStatus::Denied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes_map_to_their_variants() {
        assert_eq!(AutomationStatus::from_raw(0), AutomationStatus::Granted);
        assert_eq!(AutomationStatus::from_raw(-1743), AutomationStatus::Denied);
        assert_eq!(
            AutomationStatus::from_raw(-1744),
            AutomationStatus::NotDetermined
        );
    }

    #[test]
    fn unknown_status_codes_collapse_to_denied() {
        assert_eq!(AutomationStatus::from_raw(42), AutomationStatus::Denied);
        assert_eq!(AutomationStatus::from_raw(-600), AutomationStatus::Denied);
        assert_eq!(
            AutomationStatus::from_raw(i32::MIN),
            AutomationStatus::Denied
        );
    }
}
