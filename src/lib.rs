//! # smcprobe
//!
//! Reads sensor keys (temperatures, fan speeds, voltages, ...) from the
//! System Management Controller through its kernel user client:
//! - Four-character key packing
//! - Two-phase key-info / read-bytes protocol over a structured call
//! - Decoding of the controller's fixed-point, float and integer encodings
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Session                               │
//! │                 (open / read / close)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Transport (read_key)                         │
//! │          ReadKeyInfo ──► ReadBytes (same key)                │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  Key / Protocol │                │     Decode      │
//!   │ (u32 + 56-byte  │                │ (type, size) ──►│
//!   │     record)     │                │      f64        │
//!   └────────┬────────┘                └─────────────────┘
//!            │
//!            ▼
//!   ┌─────────────────┐
//!   │ StructuredCall  │  IOKit on macOS, simulated in tests
//!   └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod protocol;
pub mod decode;
pub mod transport;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SmcError};
pub use config::Config;
pub use decode::decode_value;
pub use key::Key;
pub use session::{Session, SharedSession};
pub use transport::{read_key, KernReturn, KeyReading, StructuredCall};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of smcprobe
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
