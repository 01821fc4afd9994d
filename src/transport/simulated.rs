//! Simulated controller
//!
//! An in-process `StructuredCall` that answers key-info and read-bytes
//! requests from a key table. Every request record it receives is kept, and
//! either phase can be made to fail with a chosen status.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::key::{encode_key, Key};
use crate::protocol::{
    decode_param, encode_param, Command, KeyInfo, SmcParam, KERNEL_INDEX_SMC, PARAM_SIZE,
    PAYLOAD_SIZE, RESULT_KEY_NOT_FOUND,
};

use super::{KernReturn, StructuredCall};

/// A key the simulated controller knows about
#[derive(Debug, Clone)]
struct SimulatedKey {
    data_type: u32,
    data_size: u32,
    bytes: [u8; PAYLOAD_SIZE],
}

/// In-memory stand-in for the controller's user client
#[derive(Debug, Default)]
pub struct SimulatedController {
    keys: HashMap<u32, SimulatedKey>,
    requests: Mutex<Vec<SmcParam>>,
    failures: Mutex<HashMap<Command, KernReturn>>,
    closed: AtomicBool,
}

impl SimulatedController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A controller preloaded with a few keys of every supported type
    pub fn demo() -> Self {
        Self::new()
            .with_key("TC0P", "sp78", &[0x2d, 0x80])
            .with_key("TG0P", "sp78", &[0x33, 0x40])
            .with_key("F0Ac", "fpe2", &[0x1f, 0x40])
            .with_key("FNum", "ui8 ", &[0x02])
            .with_key("VP0R", "flt ", &12.25f32.to_bits().to_be_bytes())
            .with_key("BNum", "ui16", &[0x00, 0x01])
            .with_key("#KEY", "ui32", &[0x00, 0x00, 0x04, 0xd2])
    }

    /// Register `key` with type tag `data_type`; the declared size is the
    /// length of `bytes` (at most 32)
    pub fn with_key(mut self, key: &str, data_type: &str, bytes: &[u8]) -> Self {
        self.insert_key(key, data_type, bytes);
        self
    }

    /// Register a key whose declared size differs from the stored bytes
    pub fn with_sized_key(
        mut self,
        key: &str,
        data_type: &str,
        data_size: u32,
        bytes: &[u8],
    ) -> Self {
        self.insert_key(key, data_type, bytes);
        if let Some(entry) = self.keys.get_mut(&encode_key(key)) {
            entry.data_size = data_size;
        }
        self
    }

    pub fn insert_key(&mut self, key: &str, data_type: &str, bytes: &[u8]) {
        let len = bytes.len().min(PAYLOAD_SIZE);
        let mut stored = [0u8; PAYLOAD_SIZE];
        stored[..len].copy_from_slice(&bytes[..len]);

        self.keys.insert(
            encode_key(key),
            SimulatedKey {
                data_type: encode_key(data_type),
                data_size: len as u32,
                bytes: stored,
            },
        );
    }

    /// Fail every request carrying `command` with `status`
    pub fn fail_on(self, command: Command, status: KernReturn) -> Self {
        self.set_failure(command, status);
        self
    }

    pub fn set_failure(&self, command: Command, status: KernReturn) {
        self.failures.lock().insert(command, status);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().clear();
    }

    /// Request records received so far, oldest first
    pub fn requests(&self) -> Vec<SmcParam> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Keys registered with the controller, in no particular order
    pub fn keys(&self) -> Vec<Key> {
        self.keys.keys().map(|&code| Key::from_code(code)).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn respond(&self, request: &SmcParam) -> SmcParam {
        let mut response = SmcParam {
            key: request.key,
            data8: request.data8,
            ..SmcParam::default()
        };

        let Some(entry) = self.keys.get(&request.key) else {
            response.result = RESULT_KEY_NOT_FOUND;
            return response;
        };

        match request.command() {
            Some(Command::ReadKeyInfo) => {
                response.key_info = KeyInfo {
                    data_size: entry.data_size,
                    data_type: entry.data_type,
                    data_attributes: 0,
                };
            }
            Some(Command::ReadBytes) => {
                // The controller only returns as many bytes as the caller echoes back.
                let len = (request.key_info.data_size as usize).min(PAYLOAD_SIZE);
                response.key_info.data_size = request.key_info.data_size;
                response.bytes[..len].copy_from_slice(&entry.bytes[..len]);
            }
            None => {}
        }
        response
    }
}

impl StructuredCall for SimulatedController {
    fn call_struct_method(&self, selector: u32, input: &[u8], output: &mut [u8]) -> KernReturn {
        if self.is_closed() {
            return KernReturn::NOT_OPEN;
        }
        if selector != KERNEL_INDEX_SMC || output.len() != PARAM_SIZE {
            return KernReturn::BAD_ARGUMENT;
        }
        let request = match decode_param(input) {
            Ok(request) => request,
            Err(_) => return KernReturn::BAD_ARGUMENT,
        };

        self.requests.lock().push(request);

        let Some(command) = request.command() else {
            return KernReturn::BAD_ARGUMENT;
        };
        if let Some(&status) = self.failures.lock().get(&command) {
            return status;
        }

        output.copy_from_slice(&encode_param(&self.respond(&request)));
        KernReturn::SUCCESS
    }

    fn close(&self) -> KernReturn {
        if self.closed.swap(true, Ordering::AcqRel) {
            return KernReturn::NOT_OPEN;
        }
        KernReturn::SUCCESS
    }
}
