//! Copying set-aside files out of the way

use crate::run_log::RunLog;
use crate::section::display_name;
use crate::types::SetAsideEntry;
use std::path::{Path, PathBuf};

/// Copy every set-aside entry into `dir`, listing each with its reason.
///
/// Copy failures are logged and skipped. Returns the number of files copied.
pub fn materialize(entries: &[SetAsideEntry], dir: &Path, log: &mut RunLog) -> usize {
    if entries.is_empty() {
        return 0;
    }

    log.heading("Files set aside:");

    let mut copied = 0;
    for entry in entries {
        let name = display_name(&entry.path);
        let dest = free_destination(dir, &entry.path);

        match std::fs::copy(&entry.path, &dest) {
            Ok(_) => {
                copied += 1;
                log.info(format!("  - {}: {}", name, entry.reason));
            }
            Err(e) => log.warn(format!("  - {}: Could not copy ({})", name, e)),
        }
    }
    copied
}

/// First of `name`, `stem_1.ext`, `stem_2.ext`, ... not yet present in `dir`
fn free_destination(dir: &Path, source: &Path) -> PathBuf {
    let name = source.file_name().unwrap_or(source.as_os_str());
    let first = dir.join(name);
    if !first.exists() {
        return first;
    }

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| dir.join(format!("{}_{}{}", stem, n, suffix)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}
