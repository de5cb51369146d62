//! Boot-protocol keyboard report as sent to the host.
//!
//! Wire format, 8 bytes: modifier bits, a zero byte, then six usage slots.
//! Only one key is ever held at a time here, so slot 0 carries the usage
//! and the rest stay zero.

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Left Shift in the modifier byte. The other modifiers are never sent.
pub const MOD_LEFT_SHIFT: u8 = 1 << 1;

/// One key-down (or all-keys-up) state.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8,
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// Nothing pressed. Sent after every key-down.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            keycodes: [0; 6],
        }
    }

    /// `usage` held together with `modifier`.
    pub const fn single(modifier: u8, usage: u8) -> Self {
        let mut keycodes = [0; 6];
        keycodes[0] = usage;
        Self { modifier, keycodes }
    }

    /// Write the wire bytes into `buf`.
    ///
    /// Returns [`KEYBOARD_REPORT_SIZE`], or 0 without touching `buf` when it
    /// is too short.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        let Some(out) = buf.get_mut(..KEYBOARD_REPORT_SIZE) else {
            return 0;
        };
        out[0] = self.modifier;
        out[1] = 0;
        out[2..].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes == [0; 6]
    }
}

/// Input-only keyboard descriptor matching [`KeyboardReport`].
///
/// No LED output report is declared: the device never reads lock state.
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    0x05, 0x07, //   Usage Page (Key Codes)
    0x19, 0xE0, //   Usage Minimum (224)
    0x29, 0xE7, //   Usage Maximum (231)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute): modifier byte
    0x75, 0x08, //   Report Size (8)
    0x95, 0x01, //   Report Count (1)
    0x81, 0x03, //   Input (Constant): zero byte
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (101)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x06, //   Report Count (6)
    0x81, 0x00, //   Input (Data, Array): usage slots
    0xC0, // End Collection
];
