//! HID sink for the firmware: queues texts for the USB typing task.
//!
//! The report layout and the text → report translation are the pure
//! `slidekeys::hid` modules; this file only bridges the synchronous
//! controller to the async USB writer.

use defmt::warn;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use heapless::String;
use slidekeys::config::{MAX_FIELD_LEN, TYPE_QUEUE_DEPTH};
use slidekeys::HidSink;

/// One credential field waiting to be typed.
pub type TypedText = String<MAX_FIELD_LEN>;

static TYPE_CHANNEL: Channel<CriticalSectionRawMutex, TypedText, TYPE_QUEUE_DEPTH> =
    Channel::new();

pub type TypeReceiver = Receiver<'static, CriticalSectionRawMutex, TypedText, TYPE_QUEUE_DEPTH>;

pub fn type_receiver() -> TypeReceiver {
    TYPE_CHANNEL.receiver()
}

/// `HidSink` that hands texts to `usb::hid_device::hid_writer_task`.
///
/// Never blocks the UI: when the queue is full the request is dropped,
/// and the user simply presses the key again.
pub struct ChannelHid;

impl HidSink for ChannelHid {
    fn type_text(&mut self, text: &str) {
        let mut queued = TypedText::new();
        if queued.push_str(text).is_err() {
            warn!("HID: text longer than {} bytes, not typed", MAX_FIELD_LEN);
            return;
        }
        if TYPE_CHANNEL.try_send(queued).is_err() {
            warn!("HID: typing queue full, request dropped");
        }
    }
}
