//! File descriptor handle.

use core::fmt;

/// File descriptor as the kernel sees it.
///
/// A thin newtype so descriptors cannot be confused with lengths or exit
/// statuses in syscall argument lists.
///
/// ```ignore
/// use slopcrt_abi::Fd;
///
/// let out = Fd::STDOUT;
/// assert_eq!(out.raw(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Fd(pub i32);

impl Fd {
    pub const STDIN: Self = Self(0);
    pub const STDOUT: Self = Self(1);
    pub const STDERR: Self = Self(2);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Register value for syscall argument passing (sign-extended).
    #[inline]
    pub const fn as_arg(self) -> u64 {
        self.0 as i64 as u64
    }
}

impl Default for Fd {
    fn default() -> Self {
        Self::STDOUT
    }
}

impl From<i32> for Fd {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::STDIN => f.write_str("stdin"),
            Self::STDOUT => f.write_str("stdout"),
            Self::STDERR => f.write_str("stderr"),
            Self(raw) => write!(f, "fd {}", raw),
        }
    }
}
