//! Error numbers reported by the kernel.

use core::fmt;

use crate::arch::MAX_ERRNO;

/// Implement common methods for errno enums.
///
/// Generates `as_raw()`, `from_raw()` and `name()` for `#[repr(i32)]` enums
/// whose discriminants are the positive Linux error numbers.
macro_rules! impl_errno {
    ($ty:ty, fallback: $fallback:ident, variants: { $($val:literal => $variant:ident),* $(,)? }) => {
        impl $ty {
            /// Positive error number as the kernel defines it.
            #[inline]
            pub fn as_raw(self) -> i32 {
                match self {
                    $(Self::$variant => $val,)*
                    Self::$fallback => 0,
                }
            }

            /// Convert from a positive error number.
            #[inline]
            pub fn from_raw(val: i32) -> Self {
                match val {
                    $($val => Self::$variant,)*
                    _ => Self::$fallback,
                }
            }

            /// Symbolic name, e.g. `"EBADF"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                    Self::$fallback => stringify!($fallback),
                }
            }
        }
    };
}

/// Syscall result type.
pub type SysResult<T> = Result<T, Errno>;

/// Errors a byte-transfer request can report.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    /// Interrupted by a signal before any data was transferred
    EINTR,
    /// Low-level I/O error
    EIO,
    /// Descriptor is not open for writing
    EBADF,
    /// Non-blocking descriptor would block
    EAGAIN,
    /// Buffer lies outside the accessible address space
    EFAULT,
    /// Descriptor is unsuitable for writing
    EINVAL,
    /// No space left on the device
    ENOSPC,
    /// Reading end of a pipe or socket is closed
    EPIPE,
    /// Any other error number
    Unknown,
}

impl_errno!(Errno, fallback: Unknown, variants: {
    4 => EINTR,
    5 => EIO,
    9 => EBADF,
    11 => EAGAIN,
    14 => EFAULT,
    22 => EINVAL,
    28 => ENOSPC,
    32 => EPIPE,
});

impl Errno {
    /// Decode a raw syscall return value.
    ///
    /// Values in `-4095..=-1` are errors; anything else is the transferred
    /// count.
    #[inline]
    pub fn decode(ret: isize) -> SysResult<usize> {
        if Self::is_error_return(ret) {
            Err(Self::from_raw(-(ret as i64) as i32))
        } else {
            Ok(ret as usize)
        }
    }

    #[inline]
    pub fn is_error_return(ret: isize) -> bool {
        let ret = ret as i64;
        (-MAX_ERRNO..0).contains(&ret)
    }

    /// Syscall-shaped return (`-errno`).
    #[inline]
    pub fn as_return(self) -> isize {
        -(self.as_raw() as isize)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown error"),
            errno => write!(f, "{} ({})", errno.name(), errno.as_raw()),
        }
    }
}
