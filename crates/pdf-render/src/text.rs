//! Flowed text pages
//!
//! Text-like sources (plain text, markdown, DOCX, slide decks) are reduced
//! to a list of [`Block`]s, word-wrapped with approximate Helvetica metrics
//! and written with printpdf's builtin fonts.

use crate::constants::*;
use crate::types::{PageSize, Result};
use printpdf::*;

/// A unit of flowed content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Bold line, wrapped like a paragraph
    Heading(String),
    /// Body text, word-wrapped to the page width
    Paragraph(String),
    /// Single line truncated with "..." instead of wrapping (table rows)
    Row(String),
    /// Half a line of vertical space
    Spacer,
    /// Continue on a fresh page unless the current one is still empty
    PageBreak,
}

#[derive(Debug, Clone)]
struct PlacedLine {
    x: f32,
    y: f32,
    text: String,
    bold: bool,
    size: f32,
}

/// Lays out lines top to bottom, opening new pages as needed
struct Flow {
    page_height: f32,
    max_width: f32,
    y: f32,
    pages: Vec<Vec<PlacedLine>>,
}

impl Flow {
    fn new(page_size: PageSize) -> Self {
        let (width, height) = page_size.dimensions_pt();
        Self {
            page_height: height,
            max_width: width - 2.0 * TEXT_MARGIN,
            y: height - TEXT_MARGIN,
            pages: vec![Vec::new()],
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.y = self.page_height - TEXT_MARGIN;
    }

    fn current_is_empty(&self) -> bool {
        self.pages.last().is_none_or(|page| page.is_empty())
    }

    fn push_line(&mut self, text: String, bold: bool, size: f32) {
        if self.y < TEXT_MARGIN {
            self.new_page();
        }
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                x: TEXT_MARGIN,
                y: self.y,
                text,
                bold,
                size,
            });
        }
        self.y -= LINE_HEIGHT;
    }

    fn space(&mut self, amount: f32) {
        self.y -= amount;
    }

    fn push_block(&mut self, block: &Block) {
        match block {
            Block::Heading(text) => {
                for line in wrap_words(text, self.max_width, HEADING_FONT_SIZE, true) {
                    self.push_line(line, true, HEADING_FONT_SIZE);
                }
                self.space(LINE_HEIGHT / 2.0);
            }
            Block::Paragraph(text) => {
                let text = text.trim();
                if text.is_empty() {
                    self.space(LINE_HEIGHT / 2.0);
                    return;
                }
                for line in wrap_words(text, self.max_width, BODY_FONT_SIZE, false) {
                    self.push_line(line, false, BODY_FONT_SIZE);
                }
                self.space(LINE_HEIGHT / 2.0);
            }
            Block::Row(text) => {
                let line = truncate_to_width(text, self.max_width, BODY_FONT_SIZE);
                self.push_line(line, false, BODY_FONT_SIZE);
            }
            Block::Spacer => self.space(LINE_HEIGHT / 2.0),
            Block::PageBreak => {
                if !self.current_is_empty() {
                    self.new_page();
                }
            }
        }
    }
}

/// Approximate rendered width of `text` in points
pub fn text_width(text: &str, font_size: f32, bold: bool) -> f32 {
    let ratio = if bold {
        HELVETICA_BOLD_CHAR_WIDTH_RATIO
    } else {
        HELVETICA_CHAR_WIDTH_RATIO
    };
    text.chars().count() as f32 * font_size * ratio
}

/// Greedy word wrap. A single word wider than the line stays on its own line.
pub fn wrap_words(text: &str, max_width: f32, font_size: f32, bold: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate, font_size, bold) < max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shorten a line ten characters at a time until it fits, marking the cut with "..."
pub fn truncate_to_width(text: &str, max_width: f32, font_size: f32) -> String {
    let mut line = text.to_string();
    while text_width(&line, font_size, false) > max_width && line.chars().count() > 10 {
        let keep = line.chars().count() - 10;
        line = line.chars().take(keep).collect::<String>() + "...";
    }
    line
}

/// Render a titled sequence of blocks into a paged document.
///
/// The title is drawn bold at the top of the first page, followed by the
/// blocks in order. At least one page is always produced.
pub fn render_blocks(title: &str, blocks: &[Block], page_size: PageSize) -> Result<lopdf::Document> {
    let mut flow = Flow::new(page_size);

    flow.push_line(title.to_string(), true, HEADING_FONT_SIZE);
    flow.space(LINE_HEIGHT);

    for block in blocks {
        flow.push_block(block);
    }

    let pages = flow
        .pages
        .into_iter()
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>();

    write_pages(&pages, page_size)
}

fn write_pages(pages: &[Vec<PlacedLine>], page_size: PageSize) -> Result<lopdf::Document> {
    let (width_mm, height_mm) = page_size.dimensions_mm();
    let mut doc = PdfDocument::new("DocMerge");

    for lines in pages {
        let mut ops = Vec::new();
        for line in lines {
            let font = if line.bold {
                BuiltinFont::HelveticaBold
            } else {
                BuiltinFont::Helvetica
            };
            push_text_ops(&mut ops, font, line.size, line.x, line.y, &line.text);
        }
        doc.pages
            .push(PdfPage::new(Mm(width_mm), Mm(height_mm), ops));
    }

    save_to_document(doc)
}

/// Append the ops that draw one line of builtin-font text at (x, y) in points
pub(crate) fn push_text_ops(
    ops: &mut Vec<Op>,
    font: BuiltinFont,
    size: f32,
    x: f32,
    y: f32,
    text: &str,
) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: font.clone(),
        size: Pt(size),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font,
    });
    ops.push(Op::EndTextSection);
}

/// Serialize a printpdf document and parse it back as an lopdf document
pub(crate) fn save_to_document(doc: PdfDocument) -> Result<lopdf::Document> {
    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    Ok(lopdf::Document::load_mem(&bytes)?)
}
