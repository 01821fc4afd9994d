//! Decode Module
//!
//! Turns a declared type, declared size and raw payload into a number.
//!
//! ## Encodings
//! | Tag    | Size | Meaning                                   |
//! |--------|------|-------------------------------------------|
//! | `sp78` | 2    | signed 8.8 fixed point                    |
//! | `fpe2` | 2    | unsigned 14.2 fixed point                 |
//! | `flt ` | 4    | IEEE-754 single, big-endian bit pattern   |
//! | `ui8 ` | any  | first byte                                |
//! | `ui16` | 2    | unsigned 16-bit                           |
//! | `ui32` | 4    | unsigned 32-bit                           |
//!
//! All multi-byte values are big-endian. A declared size of zero, an
//! unknown tag, or a tag whose size does not match decodes to `0.0`.

mod value;

pub use value::{decode_value, DataType};
