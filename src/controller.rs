//! Mode state machine.
//!
//! ```text
//!              Select at unlock position
//!  Slideshow ─────────────────────────────▶ Keys
//!      │ Select anywhere else                 │ (no way back until reset)
//!      └──▶ ignored                           └──▶ former Select key is Noop
//! ```
//!
//! While in `Slideshow` nothing on the screen or on USB hints at the
//! secret list. A Select at the wrong position is silently ignored, so
//! probing the buttons reveals nothing.
//!
//! The controller is only mutated through [`KeyDispatcher`], which owns it.
//!
//! [`KeyDispatcher`]: crate::dispatch::KeyDispatcher

use crate::bindings::{Action, KeyLayout};
use crate::error::Error;
use crate::secrets::{SecretEntry, SecretStore};
use crate::sink::{HidSink, RenderSink};
use crate::slideshow::{ImageId, SlideshowTrack};

/// Operating mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Public: cycles through cover images.
    Slideshow,
    /// Privileged: browses secrets and types them over USB.
    Keys,
}

/// Owns the slideshow, the secrets and the active binding table.
#[derive(Clone, Debug)]
pub struct ModeController<'a> {
    mode: Mode,
    layout: KeyLayout,
    bindings: &'static [Action],
    track: Option<SlideshowTrack<'a>>,
    store: SecretStore<'a>,
}

impl<'a> ModeController<'a> {
    /// Slideshow-capable controller (joystick layout), starting in
    /// `Slideshow` on the first image.
    pub fn new(
        images: &'a [ImageId],
        unlock_index: usize,
        secrets: &'a [SecretEntry<'a>],
    ) -> Result<Self, Error> {
        let store = SecretStore::new(secrets)?;
        let track = SlideshowTrack::new(images, unlock_index)?;
        Ok(Self::with_parts(KeyLayout::Joystick, Mode::Slideshow, Some(track), store))
    }

    /// Keypad controller: no slideshow, starts in `Keys` on the first
    /// secret.
    pub fn keys_only(secrets: &'a [SecretEntry<'a>]) -> Result<Self, Error> {
        let store = SecretStore::new(secrets)?;
        Ok(Self::with_parts(KeyLayout::Keypad, Mode::Keys, None, store))
    }

    /// Pick the constructor matching `layout`.
    pub fn for_layout(
        layout: KeyLayout,
        images: &'a [ImageId],
        unlock_index: usize,
        secrets: &'a [SecretEntry<'a>],
    ) -> Result<Self, Error> {
        match layout {
            KeyLayout::Joystick => Self::new(images, unlock_index, secrets),
            KeyLayout::Keypad => Self::keys_only(secrets),
        }
    }

    fn with_parts(
        layout: KeyLayout,
        mode: Mode,
        track: Option<SlideshowTrack<'a>>,
        store: SecretStore<'a>,
    ) -> Self {
        info!("controller: {} secrets, start in {}", store.len(), mode);
        Self {
            mode,
            layout,
            bindings: layout.table(mode),
            track,
            store,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn layout(&self) -> KeyLayout {
        self.layout
    }

    /// Active binding table, one action per physical key.
    pub fn bindings(&self) -> &'static [Action] {
        self.bindings
    }

    /// `None` on keypad hardware.
    pub fn track(&self) -> Option<&SlideshowTrack<'a>> {
        self.track.as_ref()
    }

    pub fn store(&self) -> &SecretStore<'a> {
        &self.store
    }

    /// Action bound to physical key `key` in the current mode.
    pub fn binding(&self, key: usize) -> Result<Action, Error> {
        self.bindings
            .get(key)
            .copied()
            .ok_or(Error::InvalidKeyIndex {
                key,
                key_count: self.bindings.len(),
            })
    }

    /// Draw the view for the current mode from scratch.
    pub fn render_current<R: RenderSink>(&self, render: &mut R) {
        match (self.mode, &self.track) {
            (Mode::Slideshow, Some(track)) => render.show_image(track.current()),
            _ => render.show_fields(self.store.current()),
        }
    }

    pub(crate) fn perform<R, H>(&mut self, action: Action, render: &mut R, hid: &mut H)
    where
        R: RenderSink,
        H: HidSink,
    {
        match action {
            Action::PrevImage | Action::NextImage => {
                if let Some(track) = self.track.as_mut() {
                    let image = if action == Action::NextImage {
                        track.show_next()
                    } else {
                        track.show_prev()
                    };
                    render.show_image(image);
                }
            }
            Action::Select => self.select(render),
            Action::TypeUsername => hid.type_text(self.store.current().username),
            Action::TypePassword => hid.type_text(self.store.current().password),
            Action::PrevSecret | Action::NextSecret => {
                let entry = if action == Action::NextSecret {
                    self.store.next()
                } else {
                    self.store.prev()
                };
                debug!("secret {}/{}", self.store.index() + 1, self.store.len());
                render.show_fields(entry);
            }
            Action::Noop => {}
        }
    }

    fn select<R: RenderSink>(&mut self, render: &mut R) {
        if self.mode != Mode::Slideshow {
            return;
        }
        let unlocked = self
            .track
            .as_ref()
            .is_some_and(SlideshowTrack::is_at_unlock_position);
        if !unlocked {
            return;
        }

        self.install(Mode::Keys);
        info!("unlock accepted, mode {}", self.mode);
        render.show_fields(self.store.current());
    }

    /// Switch mode and binding table together.
    fn install(&mut self, mode: Mode) {
        self.mode = mode;
        self.bindings = self.layout.table(mode);
    }
}
