//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, slideshow contents
//! and protocol constants live here so they can be tuned in one place.
//! There is no runtime reconfiguration.

use crate::bindings::KeyLayout;
use crate::slideshow::ImageId;

// Keys

/// Button hardware fitted to this build.
pub const KEY_LAYOUT: KeyLayout = KeyLayout::Joystick;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Depth of the button → UI event queue.
pub const KEY_EVENT_QUEUE_DEPTH: usize = 8;

// Slideshow

/// Cover images, in display order.
pub const SLIDESHOW_IMAGES: &[ImageId] = &[
    ImageId(0),
    ImageId(1),
    ImageId(2),
    ImageId(3),
    ImageId(4),
    ImageId(5),
];

/// Position in `SLIDESHOW_IMAGES` at which Select unlocks keys mode.
pub const UNLOCK_INDEX: usize = 3;

// Secrets

/// Longest site / username / password accepted by `build.rs` (bytes).
pub const MAX_FIELD_LEN: usize = 64;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings. Nothing here may hint at the secret list.
pub const USB_MANUFACTURER: &str = "slidekeys";
pub const USB_PRODUCT: &str = "Pocket Slideshow";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

/// Gap between consecutive HID reports while typing (ms). Some hosts drop
/// keys when reports arrive faster than they poll.
pub const TYPING_REPORT_GAP_MS: u64 = 8;

/// Texts waiting to be typed.
pub const TYPE_QUEUE_DEPTH: usize = 2;

// Display

/// SSD1306 I²C address.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Key 0 (A / User)      → P0.11
//   Key 1 (B / Password)  → P0.12
//   Key 2 (Up)            → P0.24
//   Key 3 (Down)          → P0.25
//   Key 4 (Enter)         → P0.03   (joystick layout only)
//   I²C SDA               → P0.26
//   I²C SCL               → P0.27
