//! IOKit bindings (macOS only)
//!
//! Opens the controller's user client and forwards structured calls to
//! `IOConnectCallStructMethod`. Declarations match
//! `IOKit/IOKitLib.h` and `mach/mach_init.h`.

use std::ffi::{c_char, c_void, CString};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SmcError};

use super::{KernReturn, StructuredCall};

type MachPort = u32;
type IoObject = MachPort;
type IoConnect = MachPort;

/// `kIOMainPortDefault`
const MAIN_PORT_DEFAULT: MachPort = 0;

#[link(name = "IOKit", kind = "framework")]
extern "C" {
    fn IOServiceMatching(name: *const c_char) -> *mut c_void;
    fn IOServiceGetMatchingService(main_port: MachPort, matching: *mut c_void) -> IoObject;
    fn IOServiceOpen(
        service: IoObject,
        owning_task: MachPort,
        kind: u32,
        connect: *mut IoConnect,
    ) -> i32;
    fn IOServiceClose(connect: IoConnect) -> i32;
    fn IOObjectRelease(object: IoObject) -> i32;
    fn IOConnectCallStructMethod(
        connection: IoConnect,
        selector: u32,
        input: *const c_void,
        input_size: usize,
        output: *mut c_void,
        output_size: *mut usize,
    ) -> i32;
}

extern "C" {
    static mach_task_self_: MachPort;
}

/// An open user-client connection to the controller service
#[derive(Debug)]
pub struct IoKitConnection {
    handle: IoConnect,
    closed: AtomicBool,
}

impl IoKitConnection {
    /// Match the first service of class `service_name` and open it
    ///
    /// No matching service reports `kIOReturnError`; a failed open reports
    /// the status `IOServiceOpen` returned. The service object is released
    /// whether or not the open succeeds.
    pub fn open(service_name: &str) -> Result<Self> {
        let name = CString::new(service_name).map_err(|_| {
            SmcError::Config(format!("service name {:?} contains a NUL byte", service_name))
        })?;

        // IOServiceGetMatchingService consumes the matching dictionary.
        let service = unsafe {
            let matching = IOServiceMatching(name.as_ptr());
            IOServiceGetMatchingService(MAIN_PORT_DEFAULT, matching)
        };
        if service == 0 {
            return Err(SmcError::ConnectionUnavailable {
                service: service_name.to_string(),
                status: KernReturn::ERROR,
            });
        }

        let mut handle: IoConnect = 0;
        let status = KernReturn(unsafe { IOServiceOpen(service, mach_task_self_, 0, &mut handle) });
        unsafe { IOObjectRelease(service) };

        if !status.is_success() {
            return Err(SmcError::ConnectionUnavailable {
                service: service_name.to_string(),
                status,
            });
        }

        tracing::debug!("Opened {} user client (port {})", service_name, handle);
        Ok(Self {
            handle,
            closed: AtomicBool::new(false),
        })
    }
}

impl StructuredCall for IoKitConnection {
    fn call_struct_method(&self, selector: u32, input: &[u8], output: &mut [u8]) -> KernReturn {
        if self.closed.load(Ordering::Acquire) {
            return KernReturn::NOT_OPEN;
        }

        let mut output_size = output.len();
        let status = unsafe {
            IOConnectCallStructMethod(
                self.handle,
                selector,
                input.as_ptr().cast(),
                input.len(),
                output.as_mut_ptr().cast(),
                &mut output_size,
            )
        };
        KernReturn(status)
    }

    fn close(&self) -> KernReturn {
        if self.closed.swap(true, Ordering::AcqRel) {
            return KernReturn::SUCCESS;
        }
        tracing::debug!("Closing user client (port {})", self.handle);
        KernReturn(unsafe { IOServiceClose(self.handle) })
    }
}

impl Drop for IoKitConnection {
    fn drop(&mut self) {
        let _ = StructuredCall::close(&*self);
    }
}
