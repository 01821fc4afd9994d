//! Parameter record definitions
//!
//! The request/response record in field form.

use super::Command;

/// Size of the record's payload buffer
pub const PAYLOAD_SIZE: usize = 32;

/// Key metadata sub-record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyInfo {
    /// Declared payload size in bytes
    pub data_size: u32,

    /// Packed four-character type tag
    pub data_type: u32,

    /// Attribute flags
    pub data_attributes: u8,
}

/// One request or response record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmcParam {
    /// Packed key code
    pub key: u32,

    pub key_info: KeyInfo,

    /// Controller result byte (0 on success)
    pub result: u8,

    pub status: u8,

    /// Command selector on requests
    pub data8: u8,

    pub data32: u32,

    pub bytes: [u8; PAYLOAD_SIZE],
}

impl Default for SmcParam {
    fn default() -> Self {
        Self {
            key: 0,
            key_info: KeyInfo::default(),
            result: 0,
            status: 0,
            data8: 0,
            data32: 0,
            bytes: [0u8; PAYLOAD_SIZE],
        }
    }
}

impl SmcParam {
    /// A zeroed request for `key` carrying `command`
    pub fn request(key: u32, command: Command) -> Self {
        Self {
            key,
            data8: command.as_u8(),
            ..Self::default()
        }
    }

    /// The command selector, if `data8` holds a known one
    pub fn command(&self) -> Option<Command> {
        Command::from_u8(self.data8)
    }
}
