//! The public face of the device: a looping list of cover images.

use crate::cursor::CircularCursor;
use crate::error::Error;

/// Opaque identifier of a slideshow image.
///
/// What the id maps to (a bitmap, a file) is the renderer's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageId(pub u16);

/// Image sequence with a cursor and the hidden unlock position.
#[derive(Clone, Debug)]
pub struct SlideshowTrack<'a> {
    cursor: CircularCursor<'a, ImageId>,
    unlock_index: usize,
}

impl<'a> SlideshowTrack<'a> {
    /// Create a track positioned on the first image.
    pub fn new(images: &'a [ImageId], unlock_index: usize) -> Result<Self, Error> {
        let cursor = CircularCursor::new(images).map_err(|_| Error::EmptyTrack)?;
        if unlock_index >= images.len() {
            return Err(Error::InvalidUnlockIndex {
                index: unlock_index,
                len: images.len(),
            });
        }
        Ok(Self {
            cursor,
            unlock_index,
        })
    }

    pub fn current(&self) -> ImageId {
        *self.cursor.current()
    }

    pub fn show_next(&mut self) -> ImageId {
        *self.cursor.advance()
    }

    pub fn show_prev(&mut self) -> ImageId {
        *self.cursor.retreat()
    }

    pub fn is_at_unlock_position(&self) -> bool {
        self.cursor.index() == self.unlock_index
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
