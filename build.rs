use std::{env, fs, path::PathBuf};

fn main() {
    // Publish the linker script only for binaries that take the runtime.
    if env::var_os("CARGO_FEATURE_RT").is_some() {
        let out = PathBuf::from(env::var("OUT_DIR").unwrap());
        fs::copy("link.x", out.join("link.x")).unwrap();
        println!("cargo:rustc-link-search={}", out.display());
    }

    println!("cargo:rerun-if-changed=link.x");
    println!("cargo:rerun-if-changed=build.rs");
}
