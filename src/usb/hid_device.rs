//! USB keyboard function: device setup and the typing writer.
//!
//! One HID interface, boot keyboard, input only. Typing requests that
//! arrive while the host has not configured the device are dropped rather
//! than replayed later into whatever window happens to have focus.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::hid::TypeReceiver;
use defmt::{debug, info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_time::{Duration, Timer};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, Handler, UsbDevice};
use slidekeys::config;
use slidekeys::hid::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
use slidekeys::hid::reports_for;
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;
pub type KeyboardWriter = HidWriter<'static, UsbDriver, KEYBOARD_REPORT_SIZE>;

/// Descriptor and control buffers handed to `embassy_usb::Builder`.
struct UsbBuffers {
    config: [u8; 256],
    bos: [u8; 256],
    msos: [u8; 256],
    control: [u8; 64],
}

static BUFFERS: StaticCell<UsbBuffers> = StaticCell::new();
static KEYBOARD_STATE: StaticCell<State> = StaticCell::new();
static HOST_WATCH: StaticCell<HostWatch> = StaticCell::new();

/// Set while the host has the device in the Configured state.
static HOST_READY: AtomicBool = AtomicBool::new(false);

struct HostWatch;

impl Handler for HostWatch {
    fn configured(&mut self, configured: bool) {
        HOST_READY.store(configured, Ordering::Release);
        info!("USB host configured: {}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        if suspended {
            HOST_READY.store(false, Ordering::Release);
        }
    }
}

pub struct UsbKeyboard {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard_writer: KeyboardWriter,
}

/// Build the USB device. Call once; the static buffers are claimed here.
pub fn init(usbd: peripherals::USBD) -> UsbKeyboard {
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    let buffers = BUFFERS.init(UsbBuffers {
        config: [0; 256],
        bos: [0; 256],
        msos: [0; 256],
        control: [0; 64],
    });
    let mut builder = Builder::new(
        driver,
        usb_config,
        &mut buffers.config,
        &mut buffers.bos,
        &mut buffers.msos,
        &mut buffers.control,
    );
    builder.handler(HOST_WATCH.init(HostWatch));

    let keyboard_writer = HidWriter::new(
        &mut builder,
        KEYBOARD_STATE.init(State::new()),
        HidConfig {
            report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
            request_handler: None,
            poll_ms: config::USB_HID_POLL_MS,
            max_packet_size: KEYBOARD_REPORT_SIZE as u16,
        },
    );

    info!("USB keyboard ready, waiting for host");
    UsbKeyboard {
        device: builder.build(),
        keyboard_writer,
    }
}

/// Service the USB bus forever. Spawn as its own task.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    device.run().await
}

/// Type each queued text, one key-down / key-up pair per character.
pub async fn hid_writer_task(mut keyboard: KeyboardWriter, text_rx: TypeReceiver) -> ! {
    let gap = Duration::from_millis(config::TYPING_REPORT_GAP_MS);
    let mut buf = [0u8; KEYBOARD_REPORT_SIZE];

    loop {
        let text = text_rx.receive().await;
        if !HOST_READY.load(Ordering::Acquire) {
            warn!("HID: no USB host, text dropped");
            continue;
        }
        debug!("HID: typing {} chars", text.chars().count());

        for report in reports_for(&text) {
            let n = report.serialize(&mut buf);
            if keyboard.write(&buf[..n]).await.is_err() {
                warn!("HID: endpoint write failed, rest of text dropped");
                break;
            }
            Timer::after(gap).await;
        }

        // Never leave a key held down after an aborted text.
        let n = KeyboardReport::empty().serialize(&mut buf);
        let _ = keyboard.write(&buf[..n]).await;
    }
}
