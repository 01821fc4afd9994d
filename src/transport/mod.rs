//! Transport Module
//!
//! Two-phase key reads against an open controller connection.
//!
//! ## Read Sequence
//! ```text
//!   caller            read_key                 StructuredCall
//!     │  key ─────────►  │                           │
//!     │                  │── ReadKeyInfo(key) ──────►│
//!     │                  │◄──── size, type ──────────│
//!     │                  │── ReadBytes(key, size) ──►│
//!     │                  │◄──── 32-byte payload ─────│
//!     │◄─ KeyReading ────│                           │
//! ```
//!
//! Either phase failing ends the read with that phase's status. Nothing is
//! retried and nothing is kept between reads.
//!
//! ## Concurrency
//! The two phases are not atomic from the controller's point of view.
//! Callers sharing one connection across threads must serialize reads;
//! `session::SharedSession` does that.

use std::fmt;

mod status;
mod reader;
pub mod simulated;

#[cfg(target_os = "macos")]
pub mod iokit;

#[cfg(not(target_os = "macos"))]
pub mod unsupported;

pub use status::KernReturn;
pub use reader::{read_key, KeyReading, RawPayload, TypedValue};

/// The platform's real controller connection
#[cfg(target_os = "macos")]
pub type SystemConnection = iokit::IoKitConnection;

/// The platform's real controller connection
#[cfg(not(target_os = "macos"))]
pub type SystemConnection = unsupported::UnsupportedConnection;

/// The blocking structured-call primitive of an open connection
///
/// Implementations send `input` to method `selector` of the connection and
/// fill `output`. Both buffers are one full parameter record.
pub trait StructuredCall {
    fn call_struct_method(&self, selector: u32, input: &[u8], output: &mut [u8]) -> KernReturn;

    /// Release controller-side resources held by the connection
    ///
    /// Takes `&self` so borrowed connections close the connection they
    /// point at. Calls after a successful close report `kIOReturnNotOpen`.
    fn close(&self) -> KernReturn {
        KernReturn::SUCCESS
    }
}

impl<T: StructuredCall + ?Sized> StructuredCall for &T {
    fn call_struct_method(&self, selector: u32, input: &[u8], output: &mut [u8]) -> KernReturn {
        (**self).call_struct_method(selector, input, output)
    }

    fn close(&self) -> KernReturn {
        (**self).close()
    }
}

/// Which half of a read failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    KeyInfo,
    ReadBytes,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::KeyInfo => f.write_str("key-info"),
            Phase::ReadBytes => f.write_str("read-bytes"),
        }
    }
}
