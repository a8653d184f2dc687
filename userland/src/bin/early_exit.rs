#![no_std]
#![no_main]

use slopcrt_lib::{entry_point, sys, ExitPolicy, Fd, RtConfig};

entry_point!(config = RtConfig::DEFAULT.with_exit_policy(ExitPolicy::Trap));

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    slopcrt_userland::report_panic(info)
}

// Exits with 42 itself, so the runtime's status 0 is never reached.
#[unsafe(no_mangle)]
pub extern "C" fn main() {
    slopcrt_lib::print_to(Fd::STDERR, 42);
    sys::exit_code(42);
}
