//! USB device subsystem: a plain boot keyboard.
//!
//! The nRF52840's full-speed controller is driven by `embassy-usb` with a
//! single HID interface. The typing task reads queued texts from the HID
//! channel and writes the resulting key reports to its endpoint.

pub mod hid_device;
