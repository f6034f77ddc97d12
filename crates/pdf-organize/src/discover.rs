//! Category discovery

use crate::sort_key::sort_naturally;
use crate::types::*;
use std::path::Path;

/// List the categories of a source tree in natural order.
///
/// Visible immediate subdirectories are the categories. When there are
/// none, the root itself is the only category. `exclude` (typically an
/// output directory nested inside the source) is never a category.
pub fn discover_categories(source_root: &Path, exclude: Option<&Path>) -> Result<Vec<Category>> {
    let walk_error = |source: std::io::Error| OrganizeError::Walk {
        path: source_root.to_path_buf(),
        source,
    };

    let mut categories = Vec::new();
    for entry in std::fs::read_dir(source_root).map_err(walk_error)? {
        let entry = entry.map_err(walk_error)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') || !path.is_dir() {
            continue;
        }
        if exclude.is_some_and(|excluded| is_same_dir(&path, excluded)) {
            continue;
        }

        categories.push(Category { name, path });
    }

    if categories.is_empty() {
        let name = source_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_root.display().to_string());
        return Ok(vec![Category {
            name,
            path: source_root.to_path_buf(),
        }]);
    }

    sort_naturally(&mut categories, |category| category.name.clone());
    Ok(categories)
}

/// Compare directories by canonical path, falling back to the raw paths
pub(crate) fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
