//! Text → keyboard reports, US layout.
//!
//! Every typed character becomes a press report followed by an all-keys-up
//! report, so repeated characters register as separate keystrokes.

use core::str::Chars;

use super::keyboard::{KeyboardReport, MOD_LEFT_SHIFT};

/// Usage codes of the number row, `1` to `0`.
const USAGE_1: u8 = 0x1E;
const USAGE_0: u8 = 0x27;
const USAGE_A: u8 = 0x04;

/// `(modifier, usage)` for `c`, or `None` if the layout has no key for it.
pub fn key_for_char(c: char) -> Option<(u8, u8)> {
    let plain = |usage: u8| Some((0u8, usage));
    let shifted = |usage: u8| Some((MOD_LEFT_SHIFT, usage));

    match c {
        'a'..='z' => plain(USAGE_A + (c as u8 - b'a')),
        'A'..='Z' => shifted(USAGE_A + (c as u8 - b'A')),
        '1'..='9' => plain(USAGE_1 + (c as u8 - b'1')),
        '0' => plain(USAGE_0),
        '\n' => plain(0x28),
        '\t' => plain(0x2B),
        ' ' => plain(0x2C),
        '-' => plain(0x2D),
        '=' => plain(0x2E),
        '[' => plain(0x2F),
        ']' => plain(0x30),
        '\\' => plain(0x31),
        ';' => plain(0x33),
        '\'' => plain(0x34),
        '`' => plain(0x35),
        ',' => plain(0x36),
        '.' => plain(0x37),
        '/' => plain(0x38),
        '!' => shifted(0x1E),
        '@' => shifted(0x1F),
        '#' => shifted(0x20),
        '$' => shifted(0x21),
        '%' => shifted(0x22),
        '^' => shifted(0x23),
        '&' => shifted(0x24),
        '*' => shifted(0x25),
        '(' => shifted(0x26),
        ')' => shifted(0x27),
        '_' => shifted(0x2D),
        '+' => shifted(0x2E),
        '{' => shifted(0x2F),
        '}' => shifted(0x30),
        '|' => shifted(0x31),
        ':' => shifted(0x33),
        '"' => shifted(0x34),
        '~' => shifted(0x35),
        '<' => shifted(0x36),
        '>' => shifted(0x37),
        '?' => shifted(0x38),
        _ => None,
    }
}

/// Iterator over the reports that type a text.
pub struct TypingReports<'a> {
    chars: Chars<'a>,
    release_pending: bool,
}

impl Iterator for TypingReports<'_> {
    type Item = KeyboardReport;

    fn next(&mut self) -> Option<KeyboardReport> {
        if self.release_pending {
            self.release_pending = false;
            return Some(KeyboardReport::empty());
        }

        for c in self.chars.by_ref() {
            match key_for_char(c) {
                Some((modifier, usage)) => {
                    self.release_pending = true;
                    return Some(KeyboardReport::single(modifier, usage));
                }
                None => warn!("typing: no key for {=u32:#x}, skipped", c as u32),
            }
        }
        None
    }
}

/// Reports that type `text`; characters without a key are skipped.
pub fn reports_for(text: &str) -> TypingReports<'_> {
    TypingReports {
        chars: text.chars(),
        release_pending: false,
    }
}
