//! Controller connection on platforms without the controller service

use crate::error::{Result, SmcError};

use super::{KernReturn, StructuredCall};

/// Opening always fails off macOS; calls report `kIOReturnUnsupported`
#[derive(Debug)]
pub struct UnsupportedConnection {
    _private: (),
}

impl UnsupportedConnection {
    pub fn open(service_name: &str) -> Result<Self> {
        Err(SmcError::ConnectionUnavailable {
            service: service_name.to_string(),
            status: KernReturn::UNSUPPORTED,
        })
    }
}

impl StructuredCall for UnsupportedConnection {
    fn call_struct_method(&self, _selector: u32, _input: &[u8], _output: &mut [u8]) -> KernReturn {
        KernReturn::UNSUPPORTED
    }
}
