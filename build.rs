use std::env;

fn main() {
    // Host builds (unit tests) link normally; only the firmware needs the esp linker scripts.
    if env::var("CARGO_CFG_TARGET_ARCH").as_deref() != Ok("riscv32") {
        return;
    }

    println!("cargo:rustc-link-arg=-Tlinkall.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg=-Tdefmt.x");
    }
    println!("cargo:rustc-link-arg-tests=-Tembedded-test.x");
}
