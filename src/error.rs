//! Error types for smcprobe
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::transport::{KernReturn, Phase};

/// Result type alias using SmcError
pub type Result<T> = std::result::Result<T, SmcError>;

/// Unified error type for smcprobe operations
#[derive(Debug, Error)]
pub enum SmcError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Controller service '{service}' unavailable: {status}")]
    ConnectionUnavailable { service: String, status: KernReturn },

    #[error("Failed to close controller connection: {0}")]
    Close(KernReturn),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Structured call failed during {phase} phase: {status}")]
    Transport { phase: Phase, status: KernReturn },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SmcError {
    /// The status code reported by the kernel, if this error carries one
    pub fn status(&self) -> Option<KernReturn> {
        match self {
            SmcError::ConnectionUnavailable { status, .. } => Some(*status),
            SmcError::Close(status) => Some(*status),
            SmcError::Transport { status, .. } => Some(*status),
            SmcError::Protocol(_) | SmcError::Config(_) => None,
        }
    }
}
