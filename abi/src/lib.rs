//! SlopCRT process ABI types
//!
//! Canonical definitions for everything that crosses the process/kernel
//! boundary: syscall numbers, file descriptors, exit statuses and the error
//! numbers a syscall can report. The runtime crate is the only consumer that
//! turns these into actual syscalls; nothing in here touches the machine.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod arch;
pub mod error;
pub mod fd;
pub mod status;

pub use error::*;
pub use fd::*;
pub use status::*;
