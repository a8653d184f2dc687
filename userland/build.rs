use std::env;

fn main() {
    // The runtime provides `_start`; keep the toolchain's crt objects out.
    // libc is linked only for the mem* symbols core may call into.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux") {
        println!("cargo:rustc-link-arg-bins=-nostartfiles");
        println!("cargo:rustc-link-arg-bins=-lc");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
