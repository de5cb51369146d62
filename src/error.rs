//! Unified error type for slidekeys.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.
//!
//! Every variant is fatal: construction errors abort startup before the
//! event loop runs, and `InvalidKeyIndex` means the button wiring and the
//! binding table disagree.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Construction
    /// A circular cursor was built over an empty sequence.
    EmptySequence,

    /// The secret source supplied no entries.
    NoSecretsConfigured,

    /// The slideshow was configured without images.
    EmptyTrack,

    /// The unlock position lies outside the image sequence.
    InvalidUnlockIndex { index: usize, len: usize },

    // Dispatch
    /// A key event referenced a key the active layout does not have.
    InvalidKeyIndex { key: usize, key_count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySequence => f.write_str("cursor over an empty sequence"),
            Error::NoSecretsConfigured => f.write_str("no secrets configured"),
            Error::EmptyTrack => f.write_str("slideshow has no images"),
            Error::InvalidUnlockIndex { index, len } => {
                write!(f, "unlock index {index} outside slideshow of {len} images")
            }
            Error::InvalidKeyIndex { key, key_count } => {
                write!(f, "key {key} outside layout of {key_count} keys")
            }
        }
    }
}
