//! Linux on x86_64: raw `syscall` instruction.

use core::arch::asm;

use slopcrt_abi::arch::{SYS_EXIT_GROUP, SYS_WRITE};
use slopcrt_abi::{ExitStatus, Fd};

use crate::platform::Platform;

#[inline(always)]
pub(crate) unsafe fn syscall1(num: u64, arg0: u64) -> u64 {
    let ret: u64;
    unsafe {
        asm!(
            "syscall",
            in("rax") num,
            in("rdi") arg0,
            lateout("rax") ret,
            out("rcx") _,
            out("r11") _,
            options(nostack),
        );
    }
    ret
}

#[inline(always)]
pub(crate) unsafe fn syscall3(num: u64, arg0: u64, arg1: u64, arg2: u64) -> u64 {
    let ret: u64;
    unsafe {
        asm!(
            "syscall",
            in("rax") num,
            in("rdi") arg0,
            in("rsi") arg1,
            in("rdx") arg2,
            lateout("rax") ret,
            out("rcx") _,
            out("r11") _,
            options(nostack),
        );
    }
    ret
}

/// The running Linux kernel.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxX86_64;

impl Platform for LinuxX86_64 {
    #[inline(always)]
    unsafe fn write(&self, fd: Fd, buf: *const u8, len: usize) -> isize {
        unsafe { syscall3(SYS_WRITE, fd.as_arg(), buf as u64, len as u64) as i64 as isize }
    }

    // exit_group rather than exit: a plain exit only ends the calling thread.
    #[inline(always)]
    fn request_exit(&self, status: ExitStatus) {
        unsafe {
            syscall1(SYS_EXIT_GROUP, status.as_arg());
        }
    }

    #[inline(always)]
    fn trap(&self) -> ! {
        unsafe { asm!("ud2", options(nomem, nostack, noreturn)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::os::fd::AsRawFd;
    use std::os::unix::net::UnixStream;

    #[test]
    fn write_reaches_the_descriptor() {
        let (tx, mut rx) = UnixStream::pair().unwrap();
        let fd = Fd::new(tx.as_raw_fd());
        let ret = unsafe { LinuxX86_64.write(fd, b"42\n".as_ptr(), 3) };
        assert_eq!(ret, 3);

        drop(tx);
        let mut got = std::vec::Vec::new();
        rx.read_to_end(&mut got).unwrap();
        assert_eq!(got, b"42\n");
    }

    #[test]
    fn write_never_exceeds_length() {
        let (tx, mut rx) = UnixStream::pair().unwrap();
        let fd = Fd::new(tx.as_raw_fd());
        let ret = unsafe { LinuxX86_64.write(fd, b"abcdef".as_ptr(), 2) };
        assert_eq!(ret, 2);

        drop(tx);
        let mut got = std::vec::Vec::new();
        rx.read_to_end(&mut got).unwrap();
        assert_eq!(got, b"ab");
    }

    #[test]
    fn write_to_closed_descriptor_is_ebadf() {
        let ret = unsafe { LinuxX86_64.write(Fd::new(-1), b"x".as_ptr(), 1) };
        assert_eq!(ret, -9);
    }
}
