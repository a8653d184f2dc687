#![no_std]
#![no_main]

use slopcrt_lib::{entry_point, KlogLevel, RtConfig};

entry_point!(config = RtConfig::DEFAULT.with_log_level(KlogLevel::Info));

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    slopcrt_userland::report_panic(info)
}

#[unsafe(no_mangle)]
pub extern "C" fn main() {
    slopcrt_userland::countdown(10);
}
