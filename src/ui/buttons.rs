//! GPIO button input with async debouncing.
//!
//! Physical buttons are active-low with internal pull-up. Each one is
//! handled by an async task that waits for a GPIO edge, debounces it, and
//! sends a press `KeyEvent` followed later by the matching release.
//!
//! The key index a pin reports is its position in the binding tables
//! (see `slidekeys::bindings`).

use crate::ui::KeySender;
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Timer};
use slidekeys::config::BUTTON_DEBOUNCE_MS;
use slidekeys::KeyEvent;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the press,
/// then waits for release, debounces and sends the release.
pub async fn button_task(pin: AnyPin, key: usize, tx: KeySender) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let debounce = Duration::from_millis(BUTTON_DEBOUNCE_MS);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(debounce).await;
        if !btn.is_low() {
            continue;
        }

        debug!("Button {} down", key);
        tx.send(KeyEvent::press(key)).await;

        // Wait for release to avoid repeat triggers.
        btn.wait_for_high().await;
        Timer::after(debounce).await;
        tx.send(KeyEvent::release(key)).await;
    }
}
