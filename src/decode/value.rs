//! Value decoding

use crate::transport::{RawPayload, TypedValue};

/// Decoding rule selected by a type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Sp78,
    Fpe2,
    Flt,
    Ui8,
    Ui16,
    Ui32,
    /// Any tag without a numeric rule
    Unknown(String),
}

impl DataType {
    /// Match a four-character tag exactly (trailing spaces included)
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "sp78" => DataType::Sp78,
            "fpe2" => DataType::Fpe2,
            "flt " => DataType::Flt,
            "ui8 " => DataType::Ui8,
            "ui16" => DataType::Ui16,
            "ui32" => DataType::Ui32,
            other => DataType::Unknown(other.to_string()),
        }
    }

    /// The size this rule requires, or `None` when any size is accepted
    pub fn required_size(&self) -> Option<u32> {
        match self {
            DataType::Sp78 | DataType::Fpe2 | DataType::Ui16 => Some(2),
            DataType::Flt | DataType::Ui32 => Some(4),
            DataType::Ui8 | DataType::Unknown(_) => None,
        }
    }
}

/// Decode a payload per its declared type and size
///
/// Never fails: combinations without a rule yield `0.0`.
pub fn decode_value(info: &TypedValue, payload: &RawPayload) -> f64 {
    if info.size == 0 {
        return 0.0;
    }

    let kind = info.kind();
    if kind.required_size().map_or(false, |size| size != info.size) {
        return 0.0;
    }

    let b = payload.as_bytes();
    let be16 = u16::from_be_bytes([b[0], b[1]]);
    let be32 = u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    match kind {
        DataType::Sp78 => f64::from(be16 as i16) / 256.0,
        DataType::Fpe2 => f64::from(be16) / 4.0,
        DataType::Flt => f64::from(f32::from_bits(be32)),
        DataType::Ui8 => f64::from(b[0]),
        DataType::Ui16 => f64::from(be16),
        DataType::Ui32 => f64::from(be32),
        DataType::Unknown(_) => 0.0,
    }
}
