//! Command definitions
//!
//! Selectors the controller understands in the record's `data8` field.

/// Structured-call method index of the controller's user client
pub const KERNEL_INDEX_SMC: u32 = 2;

/// `result` byte of a record the controller handled normally
pub const RESULT_SUCCESS: u8 = 0x00;

/// `result` byte when the controller does not know the key
pub const RESULT_KEY_NOT_FOUND: u8 = 0x84;

/// Command selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Fetch the payload bytes of a key
    ReadBytes = 5,

    /// Fetch the declared size and type of a key
    ReadKeyInfo = 9,
}

impl Command {
    /// The selector byte written to the wire
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Map a selector byte back to a command
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            5 => Some(Command::ReadBytes),
            9 => Some(Command::ReadKeyInfo),
            _ => None,
        }
    }
}
