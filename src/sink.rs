//! Output collaborators of the mode controller.
//!
//! Both sinks are fire-and-forget: the controller never waits for or
//! inspects a result.

use crate::secrets::SecretEntry;
use crate::slideshow::ImageId;

/// Display side.
pub trait RenderSink {
    /// Replace the screen with the given slide.
    fn show_image(&mut self, image: ImageId);

    /// Clear any image and show the three fields of `entry`.
    fn show_fields(&mut self, entry: &SecretEntry<'_>);
}

/// USB keyboard side.
pub trait HidSink {
    /// Type `text` into the host.
    fn type_text(&mut self, text: &str);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn show_image(&mut self, image: ImageId) {
        (**self).show_image(image)
    }

    fn show_fields(&mut self, entry: &SecretEntry<'_>) {
        (**self).show_fields(entry)
    }
}

impl<T: HidSink + ?Sized> HidSink for &mut T {
    fn type_text(&mut self, text: &str) {
        (**self).type_text(text)
    }
}
