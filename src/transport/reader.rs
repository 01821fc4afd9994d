//! Key reader
//!
//! Issues the key-info / read-bytes pair for one key.

use std::fmt;

use crate::decode::{decode_value, DataType};
use crate::error::{Result, SmcError};
use crate::key::{decode_key, Key};
use crate::protocol::{
    decode_param, encode_param, Command, SmcParam, KERNEL_INDEX_SMC, PARAM_SIZE, PAYLOAD_SIZE,
    RESULT_SUCCESS,
};

use super::{Phase, StructuredCall};

/// Declared size and type of a key, as reported by the key-info phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValue {
    /// Declared payload size in bytes
    pub size: u32,

    /// Four-character type tag, e.g. `sp78` or `flt `
    pub data_type: String,
}

impl TypedValue {
    pub fn new(size: u32, data_type: impl Into<String>) -> Self {
        Self {
            size,
            data_type: data_type.into(),
        }
    }

    /// The decoding rule selected by the type tag
    pub fn kind(&self) -> DataType {
        DataType::from_tag(&self.data_type)
    }
}

/// Payload buffer copied whole from the read-bytes response
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawPayload {
    bytes: [u8; PAYLOAD_SIZE],
}

impl RawPayload {
    pub fn new(bytes: [u8; PAYLOAD_SIZE]) -> Self {
        Self { bytes }
    }

    /// Build a payload from a prefix; the rest is zero
    pub fn from_prefix(prefix: &[u8]) -> Self {
        let mut bytes = [0u8; PAYLOAD_SIZE];
        let len = prefix.len().min(PAYLOAD_SIZE);
        bytes[..len].copy_from_slice(&prefix[..len]);
        Self { bytes }
    }

    /// The whole 32-byte buffer
    pub fn as_bytes(&self) -> &[u8; PAYLOAD_SIZE] {
        &self.bytes
    }

    /// The first `size` bytes, clamped to the buffer
    pub fn declared(&self, size: u32) -> &[u8] {
        let len = (size as usize).min(PAYLOAD_SIZE);
        &self.bytes[..len]
    }
}

impl Default for RawPayload {
    fn default() -> Self {
        Self::new([0u8; PAYLOAD_SIZE])
    }
}

impl fmt::Debug for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawPayload(")?;
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

/// A completed two-phase read
#[derive(Debug, Clone, PartialEq)]
pub struct KeyReading {
    pub key: Key,
    pub info: TypedValue,
    pub payload: RawPayload,
}

impl KeyReading {
    /// Decode the payload per the declared type and size
    pub fn value(&self) -> f64 {
        decode_value(&self.info, &self.payload)
    }

    /// Payload bytes covered by the declared size
    pub fn declared_bytes(&self) -> &[u8] {
        self.payload.declared(self.info.size)
    }
}

/// Read one key over `conn`
///
/// 1. Key-info request: key + `ReadKeyInfo`, everything else zero.
/// 2. Read-bytes request: the same record with `ReadBytes` and the declared
///    size echoed into `key_info.data_size`.
///
/// A non-success status from either call ends the read with
/// `SmcError::Transport` carrying that status unchanged.
pub fn read_key<C: StructuredCall + ?Sized>(conn: &C, key: &str) -> Result<KeyReading> {
    let key = Key::new(key);

    // Phase 1: metadata
    let mut request = SmcParam::request(key.code(), Command::ReadKeyInfo);
    tracing::trace!("{}: issuing key-info request", key);
    let response = call(conn, &request, Phase::KeyInfo)?;

    if response.result != RESULT_SUCCESS {
        tracing::debug!(
            "{}: controller result 0x{:02x} on key-info",
            key,
            response.result
        );
    }

    let info = TypedValue::new(
        response.key_info.data_size,
        decode_key(response.key_info.data_type),
    );
    tracing::trace!("{}: declared size={} type={:?}", key, info.size, info.data_type);

    // Phase 2: payload
    request.key_info.data_size = info.size;
    request.data8 = Command::ReadBytes.as_u8();
    tracing::trace!("{}: issuing read-bytes request", key);
    let response = call(conn, &request, Phase::ReadBytes)?;

    Ok(KeyReading {
        key,
        info,
        payload: RawPayload::new(response.bytes),
    })
}

/// One structured call with full-record input and output buffers
fn call<C>(conn: &C, request: &SmcParam, phase: Phase) -> Result<SmcParam>
where
    C: StructuredCall + ?Sized,
{
    let input = encode_param(request);
    let mut output = [0u8; PARAM_SIZE];

    let status = conn.call_struct_method(KERNEL_INDEX_SMC, &input, &mut output);
    if !status.is_success() {
        return Err(SmcError::Transport { phase, status });
    }

    decode_param(&output)
}
