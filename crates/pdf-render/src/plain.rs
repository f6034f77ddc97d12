//! Plain text and markdown files

use crate::text::{Block, render_blocks};
use crate::types::{PageSize, Result};
use std::path::Path;

/// Render a text or markdown file as flowed pages headed `File: <file name>`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn text_pages(path: &Path, page_size: PageSize) -> Result<lopdf::Document> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    render_blocks(&format!("File: {}", filename), &text_blocks(&text), page_size)
}

/// Split text into blocks: `#` headings become bold headings, blank lines
/// become spacing, every other line is its own wrapped paragraph.
pub fn text_blocks(text: &str) -> Vec<Block> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Block::Spacer
            } else if let Some(heading) = markdown_heading(trimmed) {
                Block::Heading(heading.to_string())
            } else {
                Block::Paragraph(trimmed.to_string())
            }
        })
        .collect()
}

fn markdown_heading(line: &str) -> Option<&str> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() || rest.starts_with(' ') {
        Some(rest.trim())
    } else {
        None
    }
}
