//! Physical key → action tables.
//!
//! Each (layout, mode) pair has one fixed table with exactly one action per
//! physical key. The controller swaps whole tables on a mode change; no
//! table is ever edited in place.
//!
//! Key order on both layouts:
//!
//! ```text
//! index  Joystick   Keypad
//!   0    A          User
//!   1    B          Password
//!   2    Up         Up
//!   3    Down       Down
//!   4    Enter      -
//! ```

use crate::controller::Mode;

/// Zero-argument operation a key can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    PrevImage,
    NextImage,
    /// Unlock gesture; only acts at the unlock position.
    Select,
    TypeUsername,
    TypePassword,
    PrevSecret,
    NextSecret,
    /// Bound but inert.
    Noop,
}

/// Button hardware variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyLayout {
    /// Two buttons plus joystick (up, down, push): slideshow-capable.
    Joystick,
    /// Four buttons, no select key: keys mode only.
    Keypad,
}

const JOYSTICK_SLIDESHOW: [Action; 5] = [
    Action::PrevImage,
    Action::NextImage,
    Action::PrevImage,
    Action::NextImage,
    Action::Select,
];

const JOYSTICK_KEYS: [Action; 5] = [
    Action::TypeUsername,
    Action::TypePassword,
    Action::PrevSecret,
    Action::NextSecret,
    Action::Noop,
];

const KEYPAD_KEYS: [Action; 4] = [
    Action::TypeUsername,
    Action::TypePassword,
    Action::PrevSecret,
    Action::NextSecret,
];

impl KeyLayout {
    /// Number of physical keys.
    pub const fn key_count(self) -> usize {
        match self {
            KeyLayout::Joystick => JOYSTICK_SLIDESHOW.len(),
            KeyLayout::Keypad => KEYPAD_KEYS.len(),
        }
    }

    /// Whether this hardware can run the slideshow.
    pub const fn has_select_key(self) -> bool {
        matches!(self, KeyLayout::Joystick)
    }

    /// Binding table for `mode`.
    ///
    /// A keypad never runs the slideshow; it gets its keys table in
    /// either mode.
    pub const fn table(self, mode: Mode) -> &'static [Action] {
        match (self, mode) {
            (KeyLayout::Joystick, Mode::Slideshow) => &JOYSTICK_SLIDESHOW,
            (KeyLayout::Joystick, Mode::Keys) => &JOYSTICK_KEYS,
            (KeyLayout::Keypad, _) => &KEYPAD_KEYS,
        }
    }
}
