//! Directory permission probes.
//!
//! # Design Decisions
//! - Probes answer by attempting the operation rather than inspecting
//!   permission bits, so they agree with what the process can actually do
//! - Writability leaves no trace: the probe file is removed immediately

use std::fs;
use std::path::Path;
use std::process;

/// Whether the process can enumerate the directory.
pub fn dir_readable(path: &Path) -> bool {
    fs::read_dir(path).is_ok()
}

/// Whether the process can create a file in the directory.
pub fn dir_writable(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    let probe = path.join(format!(".hostconf-write-probe-{}", process::id()));
    match fs::write(&probe, b"") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
