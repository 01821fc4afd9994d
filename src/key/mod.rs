//! Key Module
//!
//! Four-character controller identifiers and their 32-bit wire form.
//!
//! ## Packing
//! ```text
//!   "TC0P"  ──►  0x54 0x43 0x30 0x50  ──►  0x5443_3050
//!    │             │                         │
//!    text          byte 0 = most significant  u32 on the wire
//! ```
//!
//! Keys and type tags share the same packing. Text shorter than four bytes
//! is zero-padded in the low bytes; longer text is truncated.

mod codec;

pub use codec::{decode_key, encode_key, KEY_SIZE};

use std::fmt;

/// A controller key, carried both as text and as its packed wire code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    text: String,
    code: u32,
}

impl Key {
    /// Build a key from text. Never fails: malformed text packs to a
    /// well-defined (if meaningless) code.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            code: encode_key(text),
        }
    }

    /// Build a key from a packed code
    pub fn from_code(code: u32) -> Self {
        Self {
            text: decode_key(code),
            code,
        }
    }

    /// The text the key was built from
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The big-endian packed wire code
    pub fn code(&self) -> u32 {
        self.code
    }

    /// True when the text is exactly four ASCII bytes, i.e. it packs
    /// without padding or truncation
    pub fn is_canonical(&self) -> bool {
        self.text.len() == KEY_SIZE && self.text.is_ascii()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::new(text)
    }
}
