use std::{env, process::Command};

/// Bakes the compiler version into the binary as `RUSTC_VERSION`, e.g. `1.85.0`.
fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| stdout.split_whitespace().nth(1).map(str::to_owned))
        .unwrap_or_else(|| {
            println!("cargo:warning=unable to determine version of `{rustc}`");
            "unknown".into()
        });

    println!("cargo:rustc-env=RUSTC_VERSION={version}");
}
