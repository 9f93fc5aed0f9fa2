use super::*;

// =============================================================
// Cost formatting
// =============================================================

#[test]
fn format_cost_renders_six_decimals() {
    assert_eq!(format_cost("0.000412"), "$0.000412");
    assert_eq!(format_cost("0"), "$0.000000");
}

#[test]
fn format_cost_falls_back_on_garbage() {
    assert_eq!(format_cost("not-a-number"), "—");
    assert_eq!(format_cost(""), "—");
}

#[test]
fn format_cost_value_matches_string_path() {
    assert_eq!(format_cost_value(0.000412), "$0.000412");
}

// =============================================================
// File sizes
// =============================================================

#[test]
fn format_file_size_picks_unit() {
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
}

// =============================================================
// Timestamps
// =============================================================

#[test]
fn format_timestamp_renders_iso_input() {
    assert_eq!(format_timestamp("2026-08-01T10:05:00Z"), "Aug 01, 2026 10:05");
    assert_eq!(format_timestamp("2026-01-15T09:00:00+00:00"), "Jan 15, 2026 09:00");
}

#[test]
fn format_timestamp_flags_invalid_input() {
    assert_eq!(format_timestamp("yesterday"), "Invalid date");
    assert_eq!(format_timestamp("2026-13-01T10:05:00"), "Invalid date");
    assert_eq!(format_timestamp("2026-08-01T25:05:00"), "Invalid date");
}

#[test]
fn format_hour_renders_bucket_label() {
    assert_eq!(format_hour("2026-08-01T10:00:00"), "10:00");
    assert_eq!(format_hour("nope"), "—");
}

// =============================================================
// Snippet previews
// =============================================================

#[test]
fn snippet_preview_keeps_short_text() {
    assert_eq!(snippet_preview("short", 200), "short");
}

#[test]
fn snippet_preview_truncates_with_ellipsis() {
    assert_eq!(snippet_preview("abcdef", 3), "abc...");
}

#[test]
fn snippet_preview_respects_char_boundaries() {
    // Multi-byte input must not split inside a character.
    assert_eq!(snippet_preview("ééééé", 2), "éé...");
}
