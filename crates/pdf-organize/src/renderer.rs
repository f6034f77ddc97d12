//! Rendering contract between the pipeline and the format converters

use crate::classify::{ClassifiedFile, DocumentKind};
use lopdf::Document;
use pdf_render::{PageSize, RenderError};
use std::path::Path;

pub type RenderResult = std::result::Result<Document, RenderError>;

/// Turns source files into page-addressable documents.
///
/// Every method reports per-file problems as a [`RenderError`], which the
/// section builder logs before moving on to the next file.
pub trait Renderer {
    fn read_pdf(&self, path: &Path) -> RenderResult;
    fn render_image(
        &self,
        path: &Path,
        label_with_filename: bool,
        page_size: PageSize,
    ) -> RenderResult;
    fn render_word_doc(&self, path: &Path, page_size: PageSize) -> RenderResult;
    fn render_slide_deck(&self, path: &Path, page_size: PageSize) -> RenderResult;
    fn render_text(&self, path: &Path, page_size: PageSize) -> RenderResult;
    fn render_title_page(&self, title: &str, subtitle: &str, page_size: PageSize) -> RenderResult;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn read_pdf(&self, path: &Path) -> RenderResult {
        (**self).read_pdf(path)
    }

    fn render_image(
        &self,
        path: &Path,
        label_with_filename: bool,
        page_size: PageSize,
    ) -> RenderResult {
        (**self).render_image(path, label_with_filename, page_size)
    }

    fn render_word_doc(&self, path: &Path, page_size: PageSize) -> RenderResult {
        (**self).render_word_doc(path, page_size)
    }

    fn render_slide_deck(&self, path: &Path, page_size: PageSize) -> RenderResult {
        (**self).render_slide_deck(path, page_size)
    }

    fn render_text(&self, path: &Path, page_size: PageSize) -> RenderResult {
        (**self).render_text(path, page_size)
    }

    fn render_title_page(&self, title: &str, subtitle: &str, page_size: PageSize) -> RenderResult {
        (**self).render_title_page(title, subtitle, page_size)
    }
}

/// Settings that shape the pages of sections and combined documents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub page_size: PageSize,
    pub title_pages: bool,
    pub source_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            title_pages: true,
            source_labels: true,
        }
    }
}

/// Dispatch a classified file to the capability for its kind
pub fn render_file<R: Renderer + ?Sized>(
    renderer: &R,
    file: &ClassifiedFile,
    settings: &RenderSettings,
) -> RenderResult {
    let path = file.path.as_path();
    match file.kind {
        DocumentKind::Pdf => renderer.read_pdf(path),
        DocumentKind::Image => {
            renderer.render_image(path, settings.source_labels, settings.page_size)
        }
        DocumentKind::WordDoc => renderer.render_word_doc(path, settings.page_size),
        DocumentKind::SlideDeck => renderer.render_slide_deck(path, settings.page_size),
        DocumentKind::MarkdownText => renderer.render_text(path, settings.page_size),
        DocumentKind::Unsupported | DocumentKind::SystemFile => Err(RenderError::Unsupported(
            format!("{} is not renderable", file.kind.label()),
        )),
    }
}

/// Renderer backed by the `pdf-render` converters
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl Renderer for StandardRenderer {
    fn read_pdf(&self, path: &Path) -> RenderResult {
        Ok(Document::load(path)?)
    }

    fn render_image(
        &self,
        path: &Path,
        label_with_filename: bool,
        page_size: PageSize,
    ) -> RenderResult {
        pdf_render::image_page(path, label_with_filename, page_size)
    }

    fn render_word_doc(&self, path: &Path, page_size: PageSize) -> RenderResult {
        pdf_render::docx_pages(path, page_size)
    }

    fn render_slide_deck(&self, path: &Path, page_size: PageSize) -> RenderResult {
        pdf_render::slide_deck_pages(path, page_size)
    }

    fn render_text(&self, path: &Path, page_size: PageSize) -> RenderResult {
        pdf_render::text_pages(path, page_size)
    }

    fn render_title_page(&self, title: &str, subtitle: &str, page_size: PageSize) -> RenderResult {
        pdf_render::title_page(title, subtitle, page_size)
    }
}
