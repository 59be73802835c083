use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs, path::Path};

fn main() {
    // The tool that stamps firmware build times gets its own build stamped too.
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    // A file in OUT_DIR so cargo sees the change; no rerun-if-changed, so
    // this runs on every build.
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(
        Path::new(&out_dir).join("build_epoch.txt"),
        epoch.to_string(),
    )
    .expect("failed to write build_epoch.txt");

    println!("cargo:rustc-env=BUILD_EPOCH={epoch}");
}
