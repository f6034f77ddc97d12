//! Per-category section PDFs

use crate::classify::{ClassifiedFile, DocumentKind};
use crate::pages::PageWriter;
use crate::renderer::{RenderSettings, Renderer, render_file};
use crate::run_log::RunLog;
use crate::types::*;
use std::path::Path;

/// Build and save the section PDF for `category` into `dir`.
///
/// Files are appended in the given order. A file that fails to render,
/// or renders to nothing, is logged and skipped. Returns `None` when no
/// file contributed a page; the title page alone never makes a section.
pub fn build_section<R: Renderer + ?Sized>(
    renderer: &R,
    settings: &RenderSettings,
    category: &Category,
    files: &[ClassifiedFile],
    index: usize,
    dir: &Path,
    log: &mut RunLog,
) -> Result<Option<SectionArtifact>> {
    log.blank();
    log.info(format!("Processing: {}", category.name));

    if files.is_empty() {
        log.info("  No supported files found");
        return Ok(None);
    }

    let mut writer = PageWriter::new();

    if settings.title_pages {
        let title = renderer.render_title_page(
            &category.name,
            &format!("Section {}", index),
            settings.page_size,
        )?;
        writer.append_document(&title)?;
    }

    let mut processed = 0;
    for file in files {
        if append_file(renderer, settings, &mut writer, file, log) {
            processed += 1;
        }
    }

    if processed == 0 {
        log.info("  No files successfully processed");
        return Ok(None);
    }

    let filename = section_file_name(index, &category.name);
    let path = dir.join(&filename);
    let page_count = writer.page_count();
    writer.save(&path)?;

    log.info(format!(
        "  Created: {} ({} pages, {} files)",
        filename, page_count, processed
    ));

    Ok(Some(SectionArtifact {
        index,
        category_name: category.name.clone(),
        path,
        page_count,
        files_processed: processed,
    }))
}

/// Render one file and append its pages; true when at least one page landed
fn append_file<R: Renderer + ?Sized>(
    renderer: &R,
    settings: &RenderSettings,
    writer: &mut PageWriter,
    file: &ClassifiedFile,
    log: &mut RunLog,
) -> bool {
    let name = display_name(&file.path);

    let doc = match render_file(renderer, file, settings) {
        Ok(doc) => doc,
        Err(e) => {
            log.warn(format!("  ERROR processing {}: {}", name, e));
            return false;
        }
    };

    match writer.append_document(&doc) {
        Ok(0) => {
            log.warn(format!("  ERROR processing {}: no pages produced", name));
            false
        }
        Ok(pages) => {
            log.info(added_line(file.kind, &name, pages));
            true
        }
        Err(e) => {
            log.warn(format!("  ERROR processing {}: {}", name, e));
            false
        }
    }
}

fn added_line(kind: DocumentKind, name: &str, pages: usize) -> String {
    match (kind, pages) {
        (DocumentKind::Image, 1) => format!("  Added {}: {}", kind.label(), name),
        (_, 1) => format!("  Added {}: {} (1 page)", kind.label(), name),
        _ => format!("  Added {}: {} ({} pages)", kind.label(), name, pages),
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Make a category name safe for a file name.
///
/// Keeps word characters, whitespace and hyphens, then collapses each
/// whitespace run to a single underscore. Empty results become "Untitled".
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace())
        .collect();

    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        "Untitled".to_string()
    } else {
        joined
    }
}

/// `<NN>_<SanitizedName>.pdf`
pub fn section_file_name(index: usize, category_name: &str) -> String {
    format!("{:02}_{}.pdf", index, sanitize_name(category_name))
}
