//! SlopCRT runtime library
//!
//! Everything a freestanding x86_64 Linux program needs between the loader
//! and its own `main`:
//! - `_start` entry trampoline (see [`entry_point!`])
//! - exit and write syscall primitives behind a [`Platform`] seam
//! - two-digit and full-width decimal printers
//! - a small stderr logger used by the runtime itself

#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
compile_error!("slopcrt-lib only supports x86_64 Linux");

#[cfg(test)]
extern crate std;

pub mod arch;
pub mod config;
pub mod entry;
pub mod klog;
pub mod numfmt;
pub mod platform;
pub mod sys;

#[cfg(test)]
pub(crate) mod testing;

pub use arch::{Native, NATIVE};
pub use config::{config, ExitPolicy, RtConfig};
pub use klog::{klog_get_level, klog_init, klog_is_enabled, klog_set_level, KlogLevel};
pub use numfmt::{print, print_decimal_to, print_to};
pub use platform::Platform;
pub use slopcrt_abi::{Errno, ExitStatus, Fd, SysResult};
pub use sys::{exit, exit_code, write, write_all, write_checked};
