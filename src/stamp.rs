use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Macro the firmware sources read at compile time.
pub const MACRO_NAME: &str = "BUILD_TIME_UNIX_S";

/// Generated header, relative to the project root.
pub const HEADER_DIR: &str = "include";
pub const HEADER_FILE: &str = "build_time.h";

/// Current wall-clock time as whole seconds since the Unix epoch.
pub fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// The single line the generated header consists of.
pub fn macro_line(epoch: u64) -> String {
    format!("#define {MACRO_NAME} {epoch}\n")
}

fn header_path(root: &Path) -> PathBuf {
    root.join(HEADER_DIR).join(HEADER_FILE)
}

/// Overwrite the header under `root` with the macro line for `epoch`.
///
/// `include/` must already exist; this tool never creates it, so a missing
/// directory fails the build step.
pub fn write_header(root: &Path, epoch: u64) -> Result<PathBuf> {
    let path = header_path(root);
    fs::write(&path, macro_line(epoch))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Stamp the current time into the header under the current working directory.
pub fn run() -> Result<()> {
    let epoch = unix_seconds();

    println!("Adding build time macro to {HEADER_FILE}");
    print!("{}", macro_line(epoch));

    let path = write_header(Path::new("."), epoch)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
