//! Title pages for sections and combined documents

use crate::constants::*;
use crate::text::{push_text_ops, save_to_document, text_width};
use crate::types::{PageSize, Result};
use printpdf::*;

/// Create a single-page document with a centered title, optional subtitle
/// and the generator footer.
pub fn title_page(title: &str, subtitle: &str, page_size: PageSize) -> Result<lopdf::Document> {
    let (width_pt, height_pt) = page_size.dimensions_pt();
    let (width_mm, height_mm) = page_size.dimensions_mm();
    let mut ops = Vec::new();

    let centered =
        |text: &str, size: f32, bold: bool| width_pt / 2.0 - text_width(text, size, bold) / 2.0;

    push_text_ops(
        &mut ops,
        BuiltinFont::HelveticaBold,
        TITLE_FONT_SIZE,
        centered(title, TITLE_FONT_SIZE, true),
        height_pt - TITLE_OFFSET,
        title,
    );

    if !subtitle.is_empty() {
        push_text_ops(
            &mut ops,
            BuiltinFont::Helvetica,
            SUBTITLE_FONT_SIZE,
            centered(subtitle, SUBTITLE_FONT_SIZE, false),
            height_pt - SUBTITLE_OFFSET,
            subtitle,
        );
    }

    push_text_ops(
        &mut ops,
        BuiltinFont::Helvetica,
        FOOTER_FONT_SIZE,
        centered(FOOTER_TEXT, FOOTER_FONT_SIZE, false),
        height_pt - FOOTER_OFFSET,
        FOOTER_TEXT,
    );

    let mut doc = PdfDocument::new(title);
    doc.pages = vec![PdfPage::new(Mm(width_mm), Mm(height_mm), ops)];

    save_to_document(doc)
}
