//! Category file enumeration

use crate::classify::{ClassifiedFile, Classifier, DocumentKind};
use crate::discover::is_same_dir;
use crate::run_log::RunLog;
use crate::sort_key::sort_naturally;
use crate::types::*;
use std::path::Path;
use walkdir::WalkDir;

/// Collect the processable files of a category in natural order.
///
/// Every regular file below the category root is visited once, nested
/// directories included. System and unsupported files are appended to
/// `set_aside`; the rest are returned sorted by file name, regardless of
/// the directory they were found in. Unreadable entries are logged and
/// skipped.
pub fn enumerate_category(
    category: &Category,
    classifier: &Classifier,
    exclude: Option<&Path>,
    set_aside: &mut Vec<SetAsideEntry>,
    log: &mut RunLog,
) -> Vec<ClassifiedFile> {
    let mut files = Vec::new();

    let walker = WalkDir::new(&category.path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && exclude.is_some_and(|excluded| is_same_dir(entry.path(), excluded)))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log.warn(format!("  WARNING cannot read entry: {}", e));
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(&category.path).unwrap_or(path);
        let file = classifier.classify_file(path, relative);

        match file.kind {
            DocumentKind::SystemFile => set_aside.push(SetAsideEntry {
                path: file.path,
                reason: SetAsideReason::SystemFile,
            }),
            DocumentKind::Unsupported => {
                let ext = path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default();
                set_aside.push(SetAsideEntry {
                    path: file.path,
                    reason: SetAsideReason::UnsupportedFormat(ext),
                });
            }
            _ => files.push(file),
        }
    }

    sort_naturally(&mut files, |file| {
        file.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    files
}
