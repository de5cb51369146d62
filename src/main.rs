//! slidekeys - pocket slideshow that types passwords over USB.
//!
//! Runs on an nRF52840 with an SSD1306 OLED and a handful of buttons.
//! To an onlooker the device is a picture viewer; selecting the right
//! slide switches it into keys mode, where the buttons type the stored
//! username and password as a USB keyboard.
//!
//! ## Task layout
//!
//! - `usb_task`: USB device stack (enumeration, suspend/resume)
//! - `hid_task`: turns queued texts into keyboard reports
//! - `button` (one per key): debounced press / release events
//! - `main`: owns the dispatcher; the only writer of mode state

#![no_std]
#![no_main]

mod hid;
mod ui;
mod usb;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_usb::UsbDevice;
use slidekeys::config;
use slidekeys::secrets::PROVISIONED;
use slidekeys::{KeyDispatcher, ModeController};
use {defmt_rtt as _, panic_probe as _};

use crate::hid::{ChannelHid, TypeReceiver};
use crate::ui::display::OledRenderer;
use crate::ui::KeySender;
use crate::usb::hid_device::{KeyboardWriter, UsbDriver};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) {
    usb::hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_task(keyboard: KeyboardWriter, text_rx: TypeReceiver) {
    usb::hid_device::hid_writer_task(keyboard, text_rx).await
}

#[embassy_executor::task(pool_size = 5)]
async fn button(pin: AnyPin, key: usize, tx: KeySender) {
    ui::buttons::button_task(pin, key, tx).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("slidekeys starting");

    // Refuse to come up half-configured: no secrets or a bad track is fatal
    // before anything is shown.
    let controller = match ModeController::for_layout(
        config::KEY_LAYOUT,
        config::SLIDESHOW_IMAGES,
        config::UNLOCK_INDEX,
        PROVISIONED,
    ) {
        Ok(controller) => controller,
        Err(e) => defmt::panic!("configuration rejected: {}", e),
    };
    let layout = controller.layout();

    let p = embassy_nrf::init(Default::default());

    // Display
    let i2c: Twim<'static, TWISPI0> =
        Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let renderer = OledRenderer::new(ui::display::init(i2c));

    // USB keyboard
    let usb = usb::hid_device::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(usb.device)));
    unwrap!(spawner.spawn(hid_task(usb.keyboard_writer, hid::type_receiver())));

    // Buttons, in binding-table order
    let pins: [AnyPin; 5] = [
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
        p.P0_25.degrade(),
        p.P0_03.degrade(),
    ];
    for (key, pin) in pins.into_iter().enumerate().take(layout.key_count()) {
        unwrap!(spawner.spawn(button(pin, key, ui::key_sender())));
    }
    info!("{} buttons armed", layout.key_count());

    let mut dispatcher = KeyDispatcher::new(controller, renderer, ChannelHid);
    dispatcher.start();

    let events = ui::key_receiver();
    loop {
        let event = events.receive().await;
        if let Err(e) = dispatcher.dispatch(event) {
            defmt::panic!("key event rejected: {}", e);
        }
    }
}
