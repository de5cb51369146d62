//! Key event dispatch.
//!
//! The dispatcher owns the [`ModeController`] and both sinks; it is the only
//! holder of a mutable handle to the controller. Events are handled one at
//! a time, each action running to completion before the next event is
//! read.

use crate::bindings::Action;
use crate::controller::ModeController;
use crate::error::Error;
use crate::sink::{HidSink, RenderSink};

/// A debounced edge on one physical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Physical key index, `0..key_count`.
    pub key: usize,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(key: usize) -> Self {
        Self { key, pressed: true }
    }

    pub const fn release(key: usize) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Routes key presses to the actions bound by the controller.
pub struct KeyDispatcher<'a, R, H> {
    controller: ModeController<'a>,
    render: R,
    hid: H,
}

impl<'a, R, H> KeyDispatcher<'a, R, H>
where
    R: RenderSink,
    H: HidSink,
{
    pub fn new(controller: ModeController<'a>, render: R, hid: H) -> Self {
        Self {
            controller,
            render,
            hid,
        }
    }

    /// Draw the initial view. Call once before the first event.
    pub fn start(&mut self) {
        self.controller.render_current(&mut self.render);
    }

    /// Handle one event.
    ///
    /// Returns the action that ran, or `None` for a release. A key index
    /// outside the layout is an error for presses and releases alike.
    pub fn dispatch(&mut self, event: KeyEvent) -> Result<Option<Action>, Error> {
        let action = self.controller.binding(event.key)?;
        if !event.pressed {
            return Ok(None);
        }

        debug!("key {} -> {}", event.key, action);
        self.controller
            .perform(action, &mut self.render, &mut self.hid);
        Ok(Some(action))
    }

    /// Dispatch every event of `events` in order.
    ///
    /// Returns when the source is exhausted or on the first error.
    pub fn run<I>(&mut self, events: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        for event in events {
            self.dispatch(event)?;
        }
        Ok(())
    }

    pub fn controller(&self) -> &ModeController<'a> {
        &self.controller
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn hid(&self) -> &H {
        &self.hid
    }

    pub fn into_parts(self) -> (ModeController<'a>, R, H) {
        (self.controller, self.render, self.hid)
    }
}
