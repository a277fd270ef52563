//! Boundary behavior against the stub backend: sentinel values come back
//! verbatim, fire-and-forget calls forward their arguments unchanged, and
//! every native allocation is released exactly once.

use macos_sensing::{
    audio, island, permissions, sensing, stub, AutomationStatus, OcrResult, WindowBounds,
    WindowMetadata,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sentinel_window() -> WindowMetadata {
    WindowMetadata {
        window_id: 4242,
        bundle_id: "com.example.editor".to_string(),
        title: "draft.md - editor".to_string(),
        owner_name: "Editor".to_string(),
        bounds: WindowBounds {
            x: 10.0,
            y: 20.0,
            width: 1280.0,
            height: 800.0,
        },
    }
}

#[test]
fn active_window_returns_the_native_record() {
    init_logs();
    let stub = stub::lock();
    stub.set_window(Some(sentinel_window()));

    let metadata = sensing::active_window_metadata()
        .expect("decode failed")
        .expect("expected a window record");

    assert_eq!(metadata.window_id, 4242);
    assert_eq!(metadata.bundle_id, "com.example.editor");
    assert_eq!(metadata.title, "draft.md - editor");
    assert_eq!(metadata.owner_name, "Editor");
    assert_eq!(metadata.bounds.width, 1280.0);
    assert_eq!(metadata.bounds.height, 800.0);

    // The record was copied out and the native allocation released.
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn active_window_is_none_when_native_returns_null() {
    init_logs();
    let stub = stub::lock();

    let metadata = sensing::active_window_metadata().expect("decode failed");
    assert!(metadata.is_none());
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn screenshot_buffer_releases_on_drop() {
    init_logs();
    let stub = stub::lock();
    stub.set_screenshot(7, vec![0x89, 0x50, 0x4e, 0x47]);

    let buffer = sensing::capture_screenshot(7).expect("expected screenshot bytes");
    assert_eq!(buffer.len(), 4);
    assert_eq!(&buffer[..], &[0x89, 0x50, 0x4e, 0x47]);
    assert_eq!(stub.live_allocations(), 1);

    drop(buffer);
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn screenshot_of_unknown_window_is_none_and_owes_no_release() {
    init_logs();
    let stub = stub::lock();
    stub.set_screenshot(7, vec![1, 2, 3]);

    assert!(sensing::capture_screenshot(99).is_none());
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn ocr_returns_the_native_result_and_forwards_the_image_length() {
    init_logs();
    let stub = stub::lock();
    stub.set_ocr(Some(OcrResult {
        text: "hello world".to_string(),
        confidence: 0.93,
        word_count: 2,
    }));

    let image = [0u8; 16];
    let result = sensing::run_ocr(&image)
        .expect("decode failed")
        .expect("expected an OCR result");

    assert_eq!(result.text, "hello world");
    assert_eq!(result.confidence, 0.93);
    assert_eq!(result.word_count, 2);
    assert_eq!(stub.live_allocations(), 0);
    assert!(stub.calls().contains(&"run_ocr(16 bytes)".to_string()));
}

#[test]
fn ocr_is_none_when_recognition_produces_nothing() {
    init_logs();
    let stub = stub::lock();

    let result = sensing::run_ocr(&[1, 2, 3]).expect("decode failed");
    assert!(result.is_none());
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn icon_payload_parses_and_releases_the_native_string() {
    init_logs();
    let stub = stub::lock();
    stub.set_icon_payload(Some(
        r##"{"icon":"data:image/png;base64,aWNvbg==","color":"#aabbcc"}"##.to_string(),
    ));

    let (icon, color) =
        sensing::app_icon_and_color("com.example.editor").expect("expected icon payload");
    assert_eq!(icon, "data:image/png;base64,aWNvbg==");
    assert_eq!(color, "#aabbcc");
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn malformed_icon_payload_is_none_but_still_released() {
    init_logs();
    let stub = stub::lock();
    stub.set_icon_payload(Some("not json".to_string()));

    assert!(sensing::app_icon_and_color("com.example.editor").is_none());
    assert_eq!(stub.live_allocations(), 0);
}

#[test]
fn island_and_audio_calls_forward_arguments_verbatim() {
    init_logs();
    let stub = stub::lock();

    island::init();
    island::start(1000, 1500000, "focus");
    island::sync(2500);
    island::pause();
    island::resume();
    island::update_chime_preferences(true, "glass");
    island::preview_chime("glass");
    island::set_visible(false);
    island::reset();
    island::cleanup();
    audio::start_monitoring();
    audio::toggle_playback();
    audio::next_track();
    audio::previous_track();
    sensing::clear_cache();

    assert_eq!(
        stub.calls(),
        vec![
            "island_init",
            "island_start(1000, 1500000, \"focus\")",
            "island_sync(2500)",
            "island_pause",
            "island_resume",
            "island_update_chime_preferences(true, \"glass\")",
            "island_preview_chime(\"glass\")",
            "island_set_visible(false)",
            "island_reset",
            "island_cleanup",
            "audio_start_monitoring",
            "audio_toggle_playback",
            "audio_next_track",
            "audio_previous_track",
            "clear_cache",
        ]
    );
}

#[test]
fn strings_with_interior_null_bytes_never_reach_the_native_side() {
    init_logs();
    let stub = stub::lock();

    island::start(0, 0, "bad\0mode");
    island::update_chime_preferences(true, "bad\0sound");
    island::preview_chime("bad\0sound");
    assert!(sensing::app_icon_and_color("bad\0bundle").is_none());
    assert!(!permissions::check_media_automation("bad\0bundle"));
    assert_eq!(
        permissions::request_media_automation("bad\0bundle"),
        AutomationStatus::NotDetermined
    );

    assert!(stub.calls().is_empty());
}

#[test]
fn permission_checks_report_the_native_booleans() {
    init_logs();
    let stub = stub::lock();
    stub.set_screen_recording_granted(true);
    stub.set_accessibility_granted(false);
    stub.set_media_automation_granted(true);

    assert!(permissions::check_screen_recording());
    assert!(permissions::request_screen_recording());
    assert!(!permissions::check_accessibility());
    assert!(permissions::check_media_automation("com.apple.Music"));
    assert!(stub
        .calls()
        .contains(&"check_media_automation_permission(\"com.apple.Music\")".to_string()));
}

#[test]
fn settings_deep_links_forward() {
    init_logs();
    let stub = stub::lock();

    permissions::open_screen_recording_settings();
    permissions::open_accessibility_settings();
    permissions::open_automation_settings();

    assert_eq!(
        stub.calls(),
        vec![
            "open_screen_recording_settings",
            "open_accessibility_settings",
            "open_automation_settings",
        ]
    );
}

#[test]
fn automation_request_maps_every_status_into_the_closed_set() {
    init_logs();
    let stub = stub::lock();

    stub.set_automation_request_status(0);
    assert_eq!(
        permissions::request_media_automation("com.apple.Music"),
        AutomationStatus::Granted
    );

    stub.set_automation_request_status(-1744);
    assert_eq!(
        permissions::request_media_automation("com.apple.Music"),
        AutomationStatus::NotDetermined
    );

    stub.set_automation_request_status(-1743);
    assert_eq!(
        permissions::request_media_automation("com.apple.Music"),
        AutomationStatus::Denied
    );

    // Unknown codes never leak through as raw integers.
    stub.set_automation_request_status(-600);
    assert_eq!(
        permissions::request_media_automation("com.apple.Music"),
        AutomationStatus::Denied
    );
}
