//! Per-format page converters.
//!
//! Every converter turns one source file (or a title) into an in-memory
//! `lopdf::Document` whose pages can be appended to a larger document.

pub mod constants;
mod docx;
mod images;
mod plain;
mod slides;
pub mod text;
mod title;
mod types;

pub use docx::docx_pages;
pub use images::{ImagePlacement, escape_pdf_text, fit_image, image_page};
pub use plain::{text_blocks, text_pages};
pub use slides::{slide_deck_pages, slide_paragraphs};
pub use title::title_page;
pub use types::*;
