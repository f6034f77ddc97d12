//! Combined multi-section PDFs

use crate::pages::{PageWriter, load_pdf};
use crate::renderer::{RenderSettings, Renderer};
use crate::run_log::RunLog;
use crate::section::display_name;
use crate::types::*;
use std::ops::RangeInclusive;
use std::path::Path;

/// 1-based inclusive position ranges of consecutive windows over `count`
/// sections. Empty when `group_size` is zero.
pub fn window_ranges(count: usize, group_size: usize) -> Vec<RangeInclusive<usize>> {
    if group_size == 0 {
        return Vec::new();
    }

    (0..count)
        .step_by(group_size)
        .map(|start| (start + 1)..=(start + group_size).min(count))
        .collect()
}

/// `Combined_<first:02>-<last:02>.pdf`
pub fn combined_file_name(first: usize, last: usize) -> String {
    format!("Combined_{:02}-{:02}.pdf", first, last)
}

/// Concatenate built sections into windows of `group_size` and save each
/// window into `dir`.
///
/// Does nothing for a zero group size or fewer than two sections. Every
/// member is re-read from its saved file; a section that can no longer be
/// read aborts the run.
pub fn combine_sections<R: Renderer + ?Sized>(
    renderer: &R,
    settings: &RenderSettings,
    artifacts: &[SectionArtifact],
    group_size: usize,
    dir: &Path,
    log: &mut RunLog,
) -> Result<Vec<CombinedArtifact>> {
    if group_size == 0 || artifacts.len() < 2 {
        return Ok(Vec::new());
    }

    log.heading(format!(
        "Creating combined PDFs ({} sections per PDF)",
        group_size
    ));

    let mut combined = Vec::new();
    for range in window_ranges(artifacts.len(), group_size) {
        let (first, last) = (*range.start(), *range.end());
        let mut writer = PageWriter::new();

        if settings.title_pages {
            let title = renderer.render_title_page(
                &format!("Sections {}-{}", first, last),
                "Combined Document",
                settings.page_size,
            )?;
            writer.append_document(&title)?;
        }

        for artifact in &artifacts[first - 1..last] {
            let section = load_pdf(&artifact.path)?;
            writer.append_document(&section)?;
            log.info(format!("  Added: {}", display_name(&artifact.path)));
        }

        let filename = combined_file_name(first, last);
        let path = dir.join(&filename);
        let page_count = writer.page_count();
        writer.save(&path)?;
        log.info(format!("Created: {} ({} pages)", filename, page_count));

        combined.push(CombinedArtifact {
            start_index: first,
            end_index: last,
            path,
            page_count,
        });
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ranges() {
        assert_eq!(window_ranges(7, 3), vec![1..=3, 4..=6, 7..=7]);
        assert_eq!(window_ranges(6, 3), vec![1..=3, 4..=6]);
        assert_eq!(window_ranges(2, 5), vec![1..=2]);
        assert_eq!(window_ranges(4, 1).len(), 4);
    }

    #[test]
    fn test_window_ranges_degenerate() {
        assert!(window_ranges(7, 0).is_empty());
        assert!(window_ranges(0, 3).is_empty());
    }

    #[test]
    fn test_combined_file_name() {
        assert_eq!(combined_file_name(1, 3), "Combined_01-03.pdf");
        assert_eq!(combined_file_name(10, 12), "Combined_10-12.pdf");
    }
}
