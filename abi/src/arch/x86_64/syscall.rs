//! Linux x86_64 syscall numbers (`rax` on entry).

pub const SYS_WRITE: u64 = 1;
/// Ends only the calling thread.
pub const SYS_EXIT: u64 = 60;
/// Ends every thread of the process; the runtime's exit primitive uses this.
pub const SYS_EXIT_GROUP: u64 = 231;

/// Largest magnitude of an error return. Results in `-MAX_ERRNO..=-1` are
/// errors, everything else is a successful value.
pub const MAX_ERRNO: i64 = 4095;
