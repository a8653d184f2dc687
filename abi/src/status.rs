//! Process exit status.

/// Status handed to the termination syscall.
///
/// The kernel keeps the full value but `wait` only reports the low 8 bits,
/// so `ExitStatus(256)` looks like success to a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    pub const SUCCESS: Self = Self(0);
    pub const FAILURE: Self = Self(1);
    /// Status used when a userland program panics.
    pub const PANIC: Self = Self(101);

    #[inline]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn as_arg(self) -> u64 {
        self.0 as i64 as u64
    }

    /// Value a parent observes through `wait`.
    #[inline]
    pub const fn observed(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}
