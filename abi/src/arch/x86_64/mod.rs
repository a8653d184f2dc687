//! x86_64 Linux definitions.
//!
//! Syscalls are issued with the `syscall` instruction: the number goes in
//! `rax`, arguments in `rdi`, `rsi`, `rdx`, `r10`, `r8`, `r9`, and the result
//! comes back in `rax`. The kernel clobbers `rcx` (return address) and `r11`
//! (saved RFLAGS).

pub mod syscall;

pub use syscall::*;

/// Stack alignment the System V calling convention requires at a `call`.
pub const STACK_ALIGN: usize = 16;
