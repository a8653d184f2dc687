//! Shared support for the SlopCRT demo programs.

#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

use core::panic::PanicInfo;

use slopcrt_abi::ExitStatus;
use slopcrt_lib::{klog_error, sys};

/// Body for each program's `#[panic_handler]`: log and exit with 101.
pub fn report_panic(info: &PanicInfo<'_>) -> ! {
    klog_error!("panic: {}", info);
    sys::exit(ExitStatus::PANIC)
}

/// Print `from` down to 0, one two-digit line each.
pub fn countdown(from: u8) {
    for x in (0..=from.min(99)).rev() {
        slopcrt_lib::print(x as i32);
    }
}
