//! Platform implementations, one per OS/arch pair.

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub mod x86_64;

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub use x86_64::LinuxX86_64 as Native;

/// Platform instance for the compile target.
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub const NATIVE: Native = x86_64::LinuxX86_64;
