//! User interface subsystem - OLED display + physical buttons.
//!
//! Button tasks push debounced [`KeyEvent`]s into one channel; the UI loop
//! in `main.rs` is its only consumer and feeds them to the dispatcher.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, the `RenderSink`
//! - **Buttons**: 4 or 5 tactile switches with debouncing

pub mod buttons;
pub mod display;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use slidekeys::config::KEY_EVENT_QUEUE_DEPTH;
use slidekeys::KeyEvent;

static KEY_EVENTS: Channel<CriticalSectionRawMutex, KeyEvent, KEY_EVENT_QUEUE_DEPTH> =
    Channel::new();

pub type KeySender = Sender<'static, CriticalSectionRawMutex, KeyEvent, KEY_EVENT_QUEUE_DEPTH>;
pub type KeyReceiver = Receiver<'static, CriticalSectionRawMutex, KeyEvent, KEY_EVENT_QUEUE_DEPTH>;

pub fn key_sender() -> KeySender {
    KEY_EVENTS.sender()
}

pub fn key_receiver() -> KeyReceiver {
    KEY_EVENTS.receiver()
}
