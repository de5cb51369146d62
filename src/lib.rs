//! Host-testable library for slidekeys.
//!
//! Everything that decides *what happens* on a key press lives here: the
//! circular cursors, the slideshow and secret lists, the mode state
//! machine, the binding tables and the dispatcher, plus the pure halves of
//! the USB keyboard (report layout, text → report translation).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the hardware sinks (OLED, USB HID, buttons).

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod bindings;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod secrets;
pub mod sink;
pub mod slideshow;

// ═══════════════════════════════════════════════════════════════════════════
// HID (pure part; the USB transport lives in the firmware's hid/mod.rs)
// ═══════════════════════════════════════════════════════════════════════════

pub mod hid {
    pub mod keyboard;
    pub mod typing;

    #[cfg(test)]
    mod tests;

    pub use keyboard::KeyboardReport;
    pub use typing::reports_for;
}

pub use bindings::{Action, KeyLayout};
pub use controller::{Mode, ModeController};
pub use cursor::CircularCursor;
pub use dispatch::{KeyDispatcher, KeyEvent};
pub use error::Error;
pub use secrets::{SecretEntry, SecretStore};
pub use sink::{HidSink, RenderSink};
pub use slideshow::{ImageId, SlideshowTrack};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGES: [ImageId; 5] = [ImageId(10), ImageId(11), ImageId(12), ImageId(13), ImageId(14)];

    const SECRETS: [SecretEntry<'static>; 3] = [
        SecretEntry::new("a", "u1", "p1"),
        SecretEntry::new("b", "u2", "p2"),
        SecretEntry::new("c", "u3", "p3"),
    ];

    // ════════════════════════════════════════════════════════════════════════
    // CircularCursor Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn cursor_rejects_empty_sequence() {
        let empty: [u8; 0] = [];
        assert_eq!(CircularCursor::new(&empty).err(), Some(Error::EmptySequence));
    }

    #[test]
    fn cursor_starts_at_first_element() {
        let cursor = CircularCursor::new(&[7, 8, 9]).unwrap();
        assert_eq!(cursor.index(), 0);
        assert_eq!(*cursor.current(), 7);
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn cursor_advance_wraps_to_start() {
        let mut cursor = CircularCursor::new(&[7, 8, 9]).unwrap();
        assert_eq!(*cursor.advance(), 8);
        assert_eq!(*cursor.advance(), 9);
        assert_eq!(*cursor.advance(), 7);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_retreat_wraps_to_end() {
        let mut cursor = CircularCursor::new(&[7, 8, 9]).unwrap();
        assert_eq!(*cursor.retreat(), 9);
        assert_eq!(cursor.index(), 2);
        assert_eq!(*cursor.retreat(), 8);
    }

    #[test]
    fn cursor_single_element_cycles_in_place() {
        let mut cursor = CircularCursor::new(&["only"]).unwrap();
        assert_eq!(*cursor.advance(), "only");
        assert_eq!(*cursor.retreat(), "only");
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_full_cycle_returns_to_origin() {
        let items: [u32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
        for len in 1..=items.len() {
            for start in 0..len {
                let mut cursor = CircularCursor::new(&items[..len]).unwrap();
                for _ in 0..start {
                    cursor.advance();
                }
                let origin = *cursor.current();
                for _ in 0..len {
                    cursor.advance();
                }
                assert_eq!(*cursor.current(), origin, "len {len} start {start}");
                for _ in 0..len {
                    cursor.retreat();
                }
                assert_eq!(*cursor.current(), origin, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn cursor_retreat_inverts_advance() {
        let items = [1, 2, 3, 4];
        let mut cursor = CircularCursor::new(&items).unwrap();
        for _ in 0..10 {
            let before = cursor.index();
            cursor.advance();
            cursor.retreat();
            assert_eq!(cursor.index(), before);
            cursor.advance();
        }
    }

    #[test]
    fn cursor_index_stays_in_range() {
        // Deterministic pseudo-random walk.
        let items = [0u8; 5];
        let mut cursor = CircularCursor::new(&items).unwrap();
        let mut seed: u32 = 0x2545_F491;
        for _ in 0..1_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed & 1 == 0 {
                cursor.advance();
            } else {
                cursor.retreat();
            }
            assert!(cursor.index() < items.len());
        }
    }

    #[test]
    fn cursor_current_is_idempotent() {
        let mut cursor = CircularCursor::new(&[1, 2, 3]).unwrap();
        cursor.advance();
        let first = *cursor.current();
        for _ in 0..5 {
            assert_eq!(*cursor.current(), first);
        }
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn cursor_get_does_not_move() {
        let cursor = CircularCursor::new(&[1, 2, 3]).unwrap();
        assert_eq!(cursor.get(2), Some(&3));
        assert_eq!(cursor.get(3), None);
        assert_eq!(cursor.index(), 0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // SecretStore Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn secret_store_rejects_empty_list() {
        assert_eq!(SecretStore::new(&[]).err(), Some(Error::NoSecretsConfigured));
    }

    #[test]
    fn secret_store_navigates_circularly() {
        let mut store = SecretStore::new(&SECRETS).unwrap();
        assert_eq!(store.current().site, "a");
        assert_eq!(store.next().site, "b");
        assert_eq!(store.next().site, "c");
        assert_eq!(store.next().site, "a");
        assert_eq!(store.prev().site, "c");
        assert_eq!(store.index(), 2);
    }

    #[test]
    fn secret_store_indexed_lookup() {
        let store = SecretStore::new(&SECRETS).unwrap();
        assert_eq!(store.get(1).map(|e| e.username), Some("u2"));
        assert!(store.get(3).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn secret_entry_debug_hides_password() {
        let entry = SecretEntry::new("site", "user", "hunter2");
        let text = format!("{entry:?}");
        assert!(text.contains("user"));
        assert!(!text.contains("hunter2"));
    }

    // ════════════════════════════════════════════════════════════════════════
    // SlideshowTrack Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn track_rejects_empty_images() {
        assert_eq!(SlideshowTrack::new(&[], 0).err(), Some(Error::EmptyTrack));
    }

    #[test]
    fn track_rejects_unlock_index_out_of_range() {
        assert_eq!(
            SlideshowTrack::new(&IMAGES, 5).err(),
            Some(Error::InvalidUnlockIndex { index: 5, len: 5 })
        );
        assert!(SlideshowTrack::new(&IMAGES, 4).is_ok());
    }

    #[test]
    fn track_reports_unlock_position() {
        let mut track = SlideshowTrack::new(&IMAGES, 2).unwrap();
        assert!(!track.is_at_unlock_position());
        track.show_next();
        assert!(!track.is_at_unlock_position());
        assert_eq!(track.show_next(), ImageId(12));
        assert!(track.is_at_unlock_position());
        track.show_prev();
        assert!(!track.is_at_unlock_position());
    }

    #[test]
    fn track_wraps_both_ways() {
        let mut track = SlideshowTrack::new(&IMAGES, 0).unwrap();
        assert_eq!(track.show_prev(), ImageId(14));
        assert_eq!(track.show_next(), ImageId(10));
        assert_eq!(track.current(), ImageId(10));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Binding Table Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn every_table_binds_every_key() {
        for layout in [KeyLayout::Joystick, KeyLayout::Keypad] {
            for mode in [Mode::Slideshow, Mode::Keys] {
                assert_eq!(layout.table(mode).len(), layout.key_count());
            }
        }
    }

    #[test]
    fn joystick_slideshow_has_two_prev_two_next_one_select() {
        let table = KeyLayout::Joystick.table(Mode::Slideshow);
        let count = |a: Action| table.iter().filter(|&&b| b == a).count();
        assert_eq!(count(Action::PrevImage), 2);
        assert_eq!(count(Action::NextImage), 2);
        assert_eq!(count(Action::Select), 1);
    }

    #[test]
    fn keys_tables_never_bind_select() {
        assert!(!KeyLayout::Joystick.table(Mode::Keys).contains(&Action::Select));
        assert!(!KeyLayout::Keypad.table(Mode::Keys).contains(&Action::Select));
        assert!(!KeyLayout::Keypad.table(Mode::Slideshow).contains(&Action::Select));
    }

    #[test]
    fn retired_select_key_becomes_noop() {
        let slideshow = KeyLayout::Joystick.table(Mode::Slideshow);
        let keys = KeyLayout::Joystick.table(Mode::Keys);
        let select_key = slideshow.iter().position(|&a| a == Action::Select).unwrap();
        assert_eq!(keys[select_key], Action::Noop);
    }

    #[test]
    fn keypad_matches_joystick_keys_prefix() {
        let joystick = KeyLayout::Joystick.table(Mode::Keys);
        let keypad = KeyLayout::Keypad.table(Mode::Keys);
        assert_eq!(&joystick[..keypad.len()], keypad);
        assert!(KeyLayout::Joystick.has_select_key());
        assert!(!KeyLayout::Keypad.has_select_key());
    }

    // ════════════════════════════════════════════════════════════════════════
    // ModeController Construction Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn controller_starts_in_slideshow() {
        let controller = ModeController::new(&IMAGES, 2, &SECRETS).unwrap();
        assert_eq!(controller.mode(), Mode::Slideshow);
        assert_eq!(controller.layout(), KeyLayout::Joystick);
        assert_eq!(controller.track().map(|t| t.index()), Some(0));
        assert_eq!(controller.bindings(), KeyLayout::Joystick.table(Mode::Slideshow));
    }

    #[test]
    fn controller_propagates_construction_errors() {
        assert_eq!(
            ModeController::new(&IMAGES, 2, &[]).err(),
            Some(Error::NoSecretsConfigured)
        );
        assert_eq!(ModeController::new(&[], 0, &SECRETS).err(), Some(Error::EmptyTrack));
        assert_eq!(
            ModeController::new(&IMAGES, 9, &SECRETS).err(),
            Some(Error::InvalidUnlockIndex { index: 9, len: 5 })
        );
        assert_eq!(ModeController::keys_only(&[]).err(), Some(Error::NoSecretsConfigured));
    }

    #[test]
    fn keypad_controller_starts_in_keys_without_track() {
        let controller = ModeController::keys_only(&SECRETS).unwrap();
        assert_eq!(controller.mode(), Mode::Keys);
        assert!(controller.track().is_none());
        assert_eq!(controller.bindings().len(), 4);
    }

    #[test]
    fn for_layout_selects_constructor() {
        let joystick = ModeController::for_layout(KeyLayout::Joystick, &IMAGES, 1, &SECRETS).unwrap();
        assert_eq!(joystick.mode(), Mode::Slideshow);

        // The keypad ignores slideshow configuration entirely.
        let keypad = ModeController::for_layout(KeyLayout::Keypad, &[], 99, &SECRETS).unwrap();
        assert_eq!(keypad.mode(), Mode::Keys);
    }

    #[test]
    fn binding_out_of_range_is_error() {
        let controller = ModeController::new(&IMAGES, 2, &SECRETS).unwrap();
        assert_eq!(controller.binding(4), Ok(Action::Select));
        assert_eq!(
            controller.binding(5),
            Err(Error::InvalidKeyIndex { key: 5, key_count: 5 })
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn shipped_slideshow_configuration_is_valid() {
        assert!(SlideshowTrack::new(config::SLIDESHOW_IMAGES, config::UNLOCK_INDEX).is_ok());
    }

    #[test]
    fn unlock_position_is_not_the_first_image() {
        // Select on the image shown at power-up must not unlock.
        assert_ne!(config::UNLOCK_INDEX, 0);
    }

    #[test]
    fn error_display_names_the_problem() {
        let text = format!("{}", Error::InvalidKeyIndex { key: 7, key_count: 5 });
        assert!(text.contains('7'));
        assert!(text.contains('5'));
    }
}
