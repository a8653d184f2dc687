//! Write and exit primitives.
//!
//! The raw forms keep the kernel's contract: a write returns the transferred
//! count or `-errno`, nothing is retried, and the caller decides whether to
//! look. The `_checked`/`_all` forms decode the result into [`SysResult`].

use slopcrt_abi::{Errno, ExitStatus, Fd, SysResult};

use crate::arch::NATIVE;
use crate::config::{self, ExitPolicy};
use crate::klog::{self, KlogLevel};
use crate::platform::Platform;

/// Write `buf` to `fd` with a single request.
///
/// Returns the number of bytes the kernel accepted, which may be less than
/// `buf.len()`, or `-errno`. Never transfers more than `buf.len()` bytes.
#[inline]
pub fn write(fd: Fd, buf: &[u8]) -> isize {
    write_on(&NATIVE, fd, buf)
}

/// Pointer form of [`write`].
///
/// # Safety
/// `buf` must be valid for reads of `len` bytes.
#[inline]
pub unsafe fn write_raw(fd: Fd, buf: *const u8, len: usize) -> isize {
    unsafe { NATIVE.write(fd, buf, len) }
}

#[inline]
pub fn write_on<P: Platform + ?Sized>(platform: &P, fd: Fd, buf: &[u8]) -> isize {
    unsafe { platform.write(fd, buf.as_ptr(), buf.len()) }
}

pub fn write_checked(fd: Fd, buf: &[u8]) -> SysResult<usize> {
    write_checked_on(&NATIVE, fd, buf)
}

pub fn write_checked_on<P: Platform + ?Sized>(platform: &P, fd: Fd, buf: &[u8]) -> SysResult<usize> {
    Errno::decode(write_on(platform, fd, buf))
}

/// Write the whole buffer, continuing after short writes and `EINTR`.
///
/// A request that accepts zero bytes of a non-empty buffer is reported as
/// `EIO` instead of looping forever.
pub fn write_all(fd: Fd, buf: &[u8]) -> SysResult<()> {
    write_all_on(&NATIVE, fd, buf)
}

pub fn write_all_on<P: Platform + ?Sized>(platform: &P, fd: Fd, mut buf: &[u8]) -> SysResult<()> {
    while !buf.is_empty() {
        match write_checked_on(platform, fd, buf) {
            Ok(0) => return Err(Errno::EIO),
            Ok(n) => buf = &buf[n.min(buf.len())..],
            Err(Errno::EINTR) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Terminate the process. Never returns.
///
/// If the kernel refuses the request, [`RtConfig::exit_policy`](crate::RtConfig)
/// decides between retrying forever and trapping.
pub fn exit(status: ExitStatus) -> ! {
    exit_on(&NATIVE, status, config::config().exit_policy)
}

pub fn exit_code(code: i32) -> ! {
    exit(ExitStatus::new(code))
}

pub fn exit_on<P: Platform + ?Sized>(platform: &P, status: ExitStatus, policy: ExitPolicy) -> ! {
    loop {
        platform.request_exit(status);
        if policy == ExitPolicy::Trap {
            klog::log_args_on(
                platform,
                KlogLevel::Error,
                format_args!("exit({}) returned, trapping", status.code()),
            );
            platform.trap();
        }
        core::hint::spin_loop();
    }
}
