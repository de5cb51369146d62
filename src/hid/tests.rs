//! Unit tests for keyboard report serialization and text typing.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of the USB keyboard side.

use super::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, MOD_LEFT_SHIFT};
use super::typing::{key_for_char, reports_for};

fn collect(text: &str) -> heapless::Vec<KeyboardReport, 64> {
    let mut out = heapless::Vec::new();
    for report in reports_for(text) {
        out.push(report).unwrap();
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [0; 6]);
}

#[test]
fn keyboard_report_single_key() {
    let report = KeyboardReport::single(MOD_LEFT_SHIFT, 0x04);
    assert!(!report.is_empty());
    assert_eq!(report.keycodes, [0x04, 0, 0, 0, 0, 0]);
}

#[test]
fn keyboard_report_serialize_layout() {
    let report = KeyboardReport::single(MOD_LEFT_SHIFT, 0x1F);
    let mut buf = [0xAAu8; 8];
    let written = report.serialize(&mut buf);

    assert_eq!(written, 8);
    assert_eq!(buf, [0x02, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut small_buf = [0u8; 4];
    let written = report.serialize(&mut small_buf);
    assert_eq!(written, 0); // Should fail gracefully
}

#[test]
fn keyboard_descriptor_is_closed_collection() {
    assert_eq!(KEYBOARD_REPORT_DESCRIPTOR[..6], [0x05, 0x01, 0x09, 0x06, 0xA1, 0x01]);
    assert_eq!(KEYBOARD_REPORT_DESCRIPTOR.last(), Some(&0xC0));
}

// ═══════════════════════════════════════════════════════════════════════════
// Character Mapping Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn letters_map_with_and_without_shift() {
    assert_eq!(key_for_char('a'), Some((0, 0x04)));
    assert_eq!(key_for_char('z'), Some((0, 0x1D)));
    assert_eq!(key_for_char('A'), Some((MOD_LEFT_SHIFT, 0x04)));
    assert_eq!(key_for_char('Z'), Some((MOD_LEFT_SHIFT, 0x1D)));
}

#[test]
fn digits_follow_number_row() {
    assert_eq!(key_for_char('1'), Some((0, 0x1E)));
    assert_eq!(key_for_char('9'), Some((0, 0x26)));
    assert_eq!(key_for_char('0'), Some((0, 0x27)));
}

#[test]
fn shifted_symbols_share_unshifted_keys() {
    for (plain, shifted) in [('1', '!'), ('2', '@'), ('-', '_'), ('/', '?'), (';', ':'), ('\'', '"')] {
        let (_, plain_usage) = key_for_char(plain).unwrap();
        assert_eq!(key_for_char(shifted), Some((MOD_LEFT_SHIFT, plain_usage)));
    }
}

#[test]
fn every_printable_ascii_character_is_typeable() {
    for byte in b' '..=b'~' {
        assert!(key_for_char(byte as char).is_some(), "{:?}", byte as char);
    }
}

#[test]
fn non_ascii_has_no_key() {
    assert_eq!(key_for_char('é'), None);
    assert_eq!(key_for_char('\u{7F}'), None);
}

// ═══════════════════════════════════════════════════════════════════════════
// Typing Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn typing_alternates_press_and_release() {
    let reports = collect("aB");
    assert_eq!(
        reports.as_slice(),
        [
            KeyboardReport::single(0, 0x04),
            KeyboardReport::empty(),
            KeyboardReport::single(MOD_LEFT_SHIFT, 0x05),
            KeyboardReport::empty(),
        ]
    );
}

#[test]
fn typing_repeated_characters_releases_between() {
    let reports = collect("ss");
    assert_eq!(reports.len(), 4);
    assert!(reports[1].is_empty());
    assert_eq!(reports[0], reports[2]);
}

#[test]
fn typing_skips_unmapped_characters() {
    let reports = collect("aé1");
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[2], KeyboardReport::single(0, 0x1E));
}

#[test]
fn typing_empty_text_yields_nothing() {
    assert_eq!(reports_for("").count(), 0);
    assert_eq!(reports_for("ééé").count(), 0);
}
