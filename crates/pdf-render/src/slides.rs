//! Slide decks (.pptx)
//!
//! A PPTX file is a zip archive with one XML part per slide under
//! `ppt/slides/`. Each slide's text runs (`<a:t>`) are rendered on a page
//! of their own, grouped per paragraph (`<a:p>`).

use crate::text::{Block, render_blocks};
use crate::types::{PageSize, RenderError, Result};
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

static SLIDE_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").expect("valid slide part regex"));

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a:p[ >].*?</a:p>").expect("valid paragraph regex"));

static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a:t(?: [^>]*)?>(.*?)</a:t>").expect("valid text run regex"));

/// Render a PPTX deck, one page per slide in slide-number order.
pub fn slide_deck_pages(path: &Path, page_size: PageSize) -> Result<lopdf::Document> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut slide_parts: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let captures = SLIDE_PART.captures(name)?;
            let number = captures[1].parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    slide_parts.sort();

    if slide_parts.is_empty() {
        return Err(RenderError::Empty("no slides found".to_string()));
    }

    let mut blocks = Vec::new();
    for (position, (_, part)) in slide_parts.iter().enumerate() {
        let mut xml = String::new();
        archive.by_name(part)?.read_to_string(&mut xml)?;

        // The first slide shares its page with the deck heading
        if position > 0 {
            blocks.push(Block::PageBreak);
        }
        blocks.push(Block::Heading(format!("Slide {}", position + 1)));
        blocks.extend(slide_paragraphs(&xml).into_iter().map(Block::Paragraph));
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    render_blocks(&format!("Presentation: {}", filename), &blocks, page_size)
}

/// Non-empty text paragraphs of one slide, in document order
pub fn slide_paragraphs(xml: &str) -> Vec<String> {
    PARAGRAPH
        .find_iter(xml)
        .map(|paragraph| {
            TEXT_RUN
                .captures_iter(paragraph.as_str())
                .map(|run| unescape_xml(&run[1]))
                .collect::<String>()
        })
        .filter(|text| !text.trim().is_empty())
        .collect()
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
