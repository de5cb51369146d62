//! Circular navigation over a fixed, non-empty sequence.

use crate::error::Error;

/// Cursor over a borrowed slice that wraps around at both ends.
///
/// The slice is never empty and the index always lies in `[0, len)`.
#[derive(Clone, Debug)]
pub struct CircularCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> CircularCursor<'a, T> {
    /// Create a cursor positioned on the first element.
    pub fn new(items: &'a [T]) -> Result<Self, Error> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Self { items, index: 0 })
    }

    /// Element under the cursor.
    pub fn current(&self) -> &'a T {
        &self.items[self.index]
    }

    /// Move one step forward, wrapping to the first element.
    pub fn advance(&mut self) -> &'a T {
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    /// Move one step back, wrapping to the last element.
    pub fn retreat(&mut self) -> &'a T {
        self.index = match self.index {
            0 => self.items.len() - 1,
            i => i - 1,
        };
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Random access without moving the cursor.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}
