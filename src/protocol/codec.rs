//! Record codec
//!
//! Fixed-offset serialization of `SmcParam` to and from its 56-byte wire
//! form. Offsets follow the C layout documented in the module header.

use bytes::{Buf, BufMut};

use crate::error::{Result, SmcError};
use super::{KeyInfo, SmcParam, PAYLOAD_SIZE};

/// Full record size, padding included
pub const PARAM_SIZE: usize = 56;

/// Padding after `key_info.data_attributes`
const KEY_INFO_PAD: usize = 3;

/// Padding after `data8`
const DATA8_PAD: usize = 1;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record into its wire form
///
/// Padding bytes are always zero.
pub fn encode_param(param: &SmcParam) -> [u8; PARAM_SIZE] {
    let mut out = [0u8; PARAM_SIZE];
    {
        let mut buf = &mut out[..];

        buf.put_u32_ne(param.key);

        buf.put_u32_ne(param.key_info.data_size);
        buf.put_u32_ne(param.key_info.data_type);
        buf.put_u8(param.key_info.data_attributes);
        buf.put_bytes(0, KEY_INFO_PAD);

        buf.put_u8(param.result);
        buf.put_u8(param.status);
        buf.put_u8(param.data8);
        buf.put_bytes(0, DATA8_PAD);

        buf.put_u32_ne(param.data32);
        buf.put_slice(&param.bytes);

        debug_assert!(buf.is_empty());
    }
    out
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a record from its wire form
///
/// The buffer must be exactly `PARAM_SIZE` bytes. Padding is skipped
/// without inspection.
pub fn decode_param(bytes: &[u8]) -> Result<SmcParam> {
    if bytes.len() != PARAM_SIZE {
        return Err(SmcError::Protocol(format!(
            "Record size mismatch: expected {} bytes, got {}",
            PARAM_SIZE,
            bytes.len()
        )));
    }

    let mut buf = bytes;

    let key = buf.get_u32_ne();

    let data_size = buf.get_u32_ne();
    let data_type = buf.get_u32_ne();
    let data_attributes = buf.get_u8();
    buf.advance(KEY_INFO_PAD);

    let result = buf.get_u8();
    let status = buf.get_u8();
    let data8 = buf.get_u8();
    buf.advance(DATA8_PAD);

    let data32 = buf.get_u32_ne();

    let mut payload = [0u8; PAYLOAD_SIZE];
    buf.copy_to_slice(&mut payload);

    Ok(SmcParam {
        key,
        key_info: KeyInfo {
            data_size,
            data_type,
            data_attributes,
        },
        result,
        status,
        data8,
        data32,
        bytes: payload,
    })
}
