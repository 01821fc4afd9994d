//! Value Decoder Tests
//!
//! These tests verify:
//! - Each supported (type, size) rule
//! - Zero-size and unknown-encoding fallbacks
//! - Size mismatches never read past the declared rule

use smcprobe::decode::{decode_value, DataType};
use smcprobe::transport::{RawPayload, TypedValue};

fn decode(tag: &str, size: u32, prefix: &[u8]) -> f64 {
    decode_value(&TypedValue::new(size, tag), &RawPayload::from_prefix(prefix))
}

// =============================================================================
// Fixed-Point Tests
// =============================================================================

#[test]
fn test_sp78_positive() {
    assert_eq!(decode("sp78", 2, &[0x01, 0x00]), 1.0);
    assert_eq!(decode("sp78", 2, &[0x2d, 0x80]), 45.5);
}

#[test]
fn test_sp78_negative_is_twos_complement() {
    assert_eq!(decode("sp78", 2, &[0xff, 0x00]), -1.0);
    assert_eq!(decode("sp78", 2, &[0x80, 0x00]), -128.0);
}

#[test]
fn test_fpe2() {
    assert_eq!(decode("fpe2", 2, &[0x00, 0x04]), 1.0);
    assert_eq!(decode("fpe2", 2, &[0x1f, 0x40]), 2000.0);
    assert_eq!(decode("fpe2", 2, &[0xff, 0xff]), 16383.75);
}

// =============================================================================
// Float Tests
// =============================================================================

#[test]
fn test_flt_reinterprets_bits() {
    assert_eq!(decode("flt ", 4, &[0x3f, 0x80, 0x00, 0x00]), 1.0);
    assert_eq!(decode("flt ", 4, &(-2.5f32).to_bits().to_be_bytes()), -2.5);
}

#[test]
fn test_flt_without_trailing_space_is_unknown() {
    assert_eq!(decode("flt", 4, &[0x3f, 0x80, 0x00, 0x00]), 0.0);
}

// =============================================================================
// Integer Tests
// =============================================================================

#[test]
fn test_ui8_ignores_trailing_bytes_and_size() {
    assert_eq!(decode("ui8 ", 1, &[0x2a, 0xff, 0xff]), 42.0);
    assert_eq!(decode("ui8 ", 4, &[0x2a, 0x01, 0x02, 0x03]), 42.0);
}

#[test]
fn test_ui16() {
    assert_eq!(decode("ui16", 2, &[0x01, 0x02]), 258.0);
}

#[test]
fn test_ui32() {
    assert_eq!(decode("ui32", 4, &[0x00, 0x00, 0x01, 0x00]), 256.0);
    assert_eq!(decode("ui32", 4, &[0xff, 0xff, 0xff, 0xff]), 4_294_967_295.0);
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_zero_size_is_zero_for_any_tag() {
    for tag in ["sp78", "fpe2", "flt ", "ui8 ", "ui16", "ui32", "xyz "] {
        assert_eq!(decode(tag, 0, &[0x2a, 0x2a, 0x2a, 0x2a]), 0.0, "tag {:?}", tag);
    }
}

#[test]
fn test_unknown_tag_is_zero() {
    assert_eq!(decode("xyz ", 2, &[0x01, 0x00]), 0.0);
    assert_eq!(decode("ch8*", 4, b"abcd"), 0.0);
}

#[test]
fn test_size_mismatch_is_zero() {
    assert_eq!(decode("sp78", 4, &[0x01, 0x00, 0x00, 0x00]), 0.0);
    assert_eq!(decode("flt ", 2, &[0x3f, 0x80]), 0.0);
    assert_eq!(decode("ui16", 1, &[0x01, 0x02]), 0.0);
    assert_eq!(decode("ui32", 40, &[0x00, 0x00, 0x01, 0x00]), 0.0);
}

// =============================================================================
// DataType Tests
// =============================================================================

#[test]
fn test_data_type_from_tag() {
    assert_eq!(DataType::from_tag("sp78"), DataType::Sp78);
    assert_eq!(DataType::from_tag("flt "), DataType::Flt);
    assert_eq!(DataType::from_tag("ui8 "), DataType::Ui8);
    assert_eq!(
        DataType::from_tag("si16"),
        DataType::Unknown("si16".to_string())
    );
}

#[test]
fn test_required_sizes() {
    assert_eq!(DataType::Sp78.required_size(), Some(2));
    assert_eq!(DataType::Flt.required_size(), Some(4));
    assert_eq!(DataType::Ui8.required_size(), None);
}

#[test]
fn test_required_size_governs_decoding() {
    let payload = [0x12, 0x34, 0x56, 0x78, 0x9a];

    for tag in ["sp78", "fpe2", "flt ", "ui16", "ui32"] {
        let required = DataType::from_tag(tag).required_size().unwrap();
        assert_ne!(decode(tag, required, &payload), 0.0, "tag {:?}", tag);

        for size in 1..=8 {
            if size != required {
                assert_eq!(decode(tag, size, &payload), 0.0, "tag {:?} size {}", tag, size);
            }
        }
    }

    for size in 1..=8 {
        assert_eq!(decode("ui8 ", size, &payload), 18.0);
    }
}
