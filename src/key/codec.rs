//! Key codec
//!
//! Packs four-byte text into a big-endian u32 and back.

/// Number of characters in a key or type tag
pub const KEY_SIZE: usize = 4;

/// Pack up to four bytes of `text` most-significant-byte first.
///
/// Missing bytes are zero; bytes past the fourth are ignored.
pub fn encode_key(text: &str) -> u32 {
    text.bytes()
        .take(KEY_SIZE)
        .enumerate()
        .fold(0u32, |total, (i, byte)| {
            total | (u32::from(byte) << ((KEY_SIZE - 1 - i) * 8))
        })
}

/// Unpack a code into four characters, most-significant byte first.
///
/// Each byte maps to one `char`, so the result always has four characters
/// even when the code contains zero or non-ASCII bytes.
pub fn decode_key(code: u32) -> String {
    code.to_be_bytes().iter().map(|&b| char::from(b)).collect()
}
