//! Process entry.
//!
//! The loader jumps to `_start` with `rsp` pointing at `argc`. Nothing here
//! reads argc, argv or envp. The trampoline clears `rbp` so backtraces stop
//! here, forces 16-byte stack alignment, and calls [`start_main`], which runs
//! the program's `main` and exits with status 0 whatever `main` did.
//!
//! `_start` has to live in the final binary, so it is emitted by
//! [`entry_point!`](crate::entry_point) rather than compiled into this crate.

use slopcrt_abi::ExitStatus;

use crate::config::{self, RtConfig};
use crate::{klog, klog_debug, sys};

/// Signature of the program's `main`.
pub type MainFn = unsafe extern "C" fn();

/// Run `main` under `config` and terminate the process with status 0.
///
/// A status `main` would like to report is not propagated; `main` has to
/// call [`sys::exit`] itself for that.
///
/// # Safety
/// `main` must be sound to call once, with no arguments, on the current
/// stack.
pub unsafe fn start_main(main: MainFn, config: RtConfig) -> ! {
    config::install(config);
    klog::klog_init();
    klog_debug!("slopcrt: calling main");

    unsafe { main() };

    klog_debug!("slopcrt: main returned");
    sys::exit(ExitStatus::SUCCESS)
}

/// Emit the `_start` symbol for a `#![no_main]` binary.
///
/// The binary must define `#[unsafe(no_mangle)] extern "C" fn main()`;
/// without it linking fails.
///
/// ```ignore
/// #![no_std]
/// #![no_main]
///
/// slopcrt_lib::entry_point!();
///
/// #[unsafe(no_mangle)]
/// pub extern "C" fn main() {
///     slopcrt_lib::print(42);
/// }
/// ```
#[macro_export]
macro_rules! entry_point {
    () => {
        $crate::entry_point!(config = $crate::config::RtConfig::DEFAULT);
    };
    (config = $config:expr) => {
        const __SLOPCRT_CONFIG: $crate::config::RtConfig = $config;

        mod __slopcrt_entry {
            unsafe extern "C" {
                fn main();
            }

            extern "C" fn rust_start() -> ! {
                unsafe { $crate::entry::start_main(main, super::__SLOPCRT_CONFIG) }
            }

            #[unsafe(naked)]
            #[unsafe(no_mangle)]
            unsafe extern "C" fn _start() -> ! {
                ::core::arch::naked_asm!(
                    "xor ebp, ebp",
                    "and rsp, -16",
                    "call {entry}",
                    "ud2",
                    entry = sym rust_start,
                )
            }
        }
    };
}
