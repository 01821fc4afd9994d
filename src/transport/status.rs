//! Kernel status codes
//!
//! `kern_return_t` / `IOReturn` values reported by the structured call
//! primitive, kept verbatim for caller diagnostics.

use std::fmt;

/// A kernel return code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernReturn(pub i32);

impl KernReturn {
    pub const SUCCESS: KernReturn = KernReturn(0);
    pub const ERROR: KernReturn = KernReturn(0xe000_02bc_u32 as i32);
    pub const NO_DEVICE: KernReturn = KernReturn(0xe000_02c0_u32 as i32);
    pub const NOT_PRIVILEGED: KernReturn = KernReturn(0xe000_02c1_u32 as i32);
    pub const BAD_ARGUMENT: KernReturn = KernReturn(0xe000_02c2_u32 as i32);
    pub const EXCLUSIVE_ACCESS: KernReturn = KernReturn(0xe000_02c5_u32 as i32);
    pub const UNSUPPORTED: KernReturn = KernReturn(0xe000_02c7_u32 as i32);
    pub const NOT_OPEN: KernReturn = KernReturn(0xe000_02cd_u32 as i32);
    pub const TIMEOUT: KernReturn = KernReturn(0xe000_02d6_u32 as i32);
    pub const NOT_RESPONDING: KernReturn = KernReturn(0xe000_02ed_u32 as i32);
    pub const NOT_FOUND: KernReturn = KernReturn(0xe000_02f0_u32 as i32);

    /// True for `kIOReturnSuccess`
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Raw code as the unsigned value IOKit headers spell it
    pub fn code(self) -> u32 {
        self.0 as u32
    }

    /// Symbolic IOKit name for well-known codes
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::SUCCESS => "kIOReturnSuccess",
            Self::ERROR => "kIOReturnError",
            Self::NO_DEVICE => "kIOReturnNoDevice",
            Self::NOT_PRIVILEGED => "kIOReturnNotPrivileged",
            Self::BAD_ARGUMENT => "kIOReturnBadArgument",
            Self::EXCLUSIVE_ACCESS => "kIOReturnExclusiveAccess",
            Self::UNSUPPORTED => "kIOReturnUnsupported",
            Self::NOT_OPEN => "kIOReturnNotOpen",
            Self::TIMEOUT => "kIOReturnTimeout",
            Self::NOT_RESPONDING => "kIOReturnNotResponding",
            Self::NOT_FOUND => "kIOReturnNotFound",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for KernReturn {
    fn from(code: i32) -> Self {
        KernReturn(code)
    }
}

impl fmt::Display for KernReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:08x})", name, self.code()),
            None => write!(f, "0x{:08x}", self.code()),
        }
    }
}
