//! Read-only credential list with a circular cursor.
//!
//! The entries are injected at construction (on the device: the table that
//! `build.rs` generates from `secrets.toml`, see [`PROVISIONED`]) and never
//! change afterwards. Only the cursor moves.

use core::fmt;

use crate::cursor::CircularCursor;
use crate::error::Error;

/// Credential table compiled into the firmware image.
pub static PROVISIONED: &[SecretEntry<'static>] = include!(concat!(env!("OUT_DIR"), "/secrets.rs"));

/// One `(site, username, password)` triple.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecretEntry<'a> {
    pub site: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> SecretEntry<'a> {
    pub const fn new(site: &'a str, username: &'a str, password: &'a str) -> Self {
        Self {
            site,
            username,
            password,
        }
    }
}

// Passwords never reach a log line.
impl fmt::Debug for SecretEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretEntry")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Ordered, non-empty secret list.
#[derive(Clone, Debug)]
pub struct SecretStore<'a> {
    cursor: CircularCursor<'a, SecretEntry<'a>>,
}

impl<'a> SecretStore<'a> {
    pub fn new(entries: &'a [SecretEntry<'a>]) -> Result<Self, Error> {
        let cursor = CircularCursor::new(entries).map_err(|_| Error::NoSecretsConfigured)?;
        Ok(Self { cursor })
    }

    pub fn current(&self) -> &'a SecretEntry<'a> {
        self.cursor.current()
    }

    pub fn next(&mut self) -> &'a SecretEntry<'a> {
        self.cursor.advance()
    }

    pub fn prev(&mut self) -> &'a SecretEntry<'a> {
        self.cursor.retreat()
    }

    /// Entry by position, independent of the cursor.
    pub fn get(&self, index: usize) -> Option<&'a SecretEntry<'a>> {
        self.cursor.get(index)
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
