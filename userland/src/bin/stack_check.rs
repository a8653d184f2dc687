#![no_std]
#![no_main]

use slopcrt_lib::{entry_point, sys, Fd};

entry_point!();

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    slopcrt_userland::report_panic(info)
}

// At a System V call site rsp is 16-byte aligned, so on entry rsp + 8 is.
// Tail-jump to the reporter so it returns straight into the runtime.
#[unsafe(naked)]
#[unsafe(no_mangle)]
pub extern "C" fn main() {
    core::arch::naked_asm!(
        "lea rdi, [rsp + 8]",
        "and edi, 15",
        "jmp {report}",
        report = sym report,
    )
}

extern "C" fn report(misalignment: u64) {
    if misalignment != 0 {
        slopcrt_lib::print_to(Fd::STDERR, misalignment as i32);
        sys::exit_code(3);
    }
    sys::write(Fd::STDOUT, b"aligned\n");
}
