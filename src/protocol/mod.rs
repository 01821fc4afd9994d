//! Protocol Module
//!
//! Defines the fixed-size parameter record exchanged with the controller.
//!
//! ## Record Layout (56 bytes, native byte order)
//! ```text
//! ┌─────────┬──────────────────────────────────┬─────┬─────┬─────┬───┬──────────┬──────────────┐
//! │ key (4) │ keyInfo: size(4) type(4) attr(1) │ res │ sts │ d8  │pad│ data32(4)│  bytes (32)  │
//! │         │                    + pad(3)      │ (1) │ (1) │ (1) │(1)│          │              │
//! └─────────┴──────────────────────────────────┴─────┴─────┴─────┴───┴──────────┴──────────────┘
//!  0         4                                  16    17    18    19  20         24            56
//! ```
//!
//! The kernel reads the record as an in-memory C structure, so padding is
//! part of the contract and integers use the host's byte order. The key and
//! type fields hold codes that were packed big-endian by `key::encode_key`.
//!
//! ### Commands (placed in `data8`)
//! - 5: READ_BYTES    - fetch the key's payload
//! - 9: READ_KEY_INFO - fetch the key's size and type

mod command;
mod param;
mod codec;

pub use command::{Command, KERNEL_INDEX_SMC, RESULT_KEY_NOT_FOUND, RESULT_SUCCESS};
pub use param::{KeyInfo, SmcParam, PAYLOAD_SIZE};
pub use codec::{decode_param, encode_param, PARAM_SIZE};
