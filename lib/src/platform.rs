//! OS/architecture seam.
//!
//! Every primitive in this crate is written against [`Platform`] so the same
//! code runs on the real kernel ([`crate::arch::Native`]) and on recording
//! doubles in tests. One implementation exists per supported OS/arch pair.

use slopcrt_abi::{ExitStatus, Fd};

pub trait Platform {
    /// Ask the kernel to copy `len` bytes from `buf` to `fd`.
    ///
    /// Returns the transferred count (possibly short) or `-errno`.
    ///
    /// # Safety
    /// `buf` must be valid for reads of `len` bytes.
    unsafe fn write(&self, fd: Fd, buf: *const u8, len: usize) -> isize;

    /// Ask the kernel to terminate the process.
    ///
    /// Returns only if the kernel refused. Callers decide what happens next,
    /// see [`crate::sys::exit_on`].
    fn request_exit(&self, status: ExitStatus);

    /// Raise a fatal fault that cannot be ignored.
    fn trap(&self) -> !;
}
