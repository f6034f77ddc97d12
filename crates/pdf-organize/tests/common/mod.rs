#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, Stream};
use pdf_organize::*;
use std::cell::RefCell;
use std::path::Path;

pub fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    // Create pages array
    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // MediaBox lives on the tree root so copies have to inherit it
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

pub fn write_test_pdf(path: &Path, num_pages: usize) {
    let mut doc = create_test_pdf(num_pages);
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(path, writer).unwrap();
}

pub fn write_test_png(path: &Path) {
    let img = image::RgbImage::from_pixel(40, 20, image::Rgb([200, 30, 30]));
    img.save(path).unwrap();
}

pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// Renderer that never touches the disk.
///
/// PDFs render to two pages unless their file name is listed as failing;
/// every other capability renders one page.
#[derive(Default)]
pub struct MockRenderer {
    pub failing: Vec<String>,
}

impl MockRenderer {
    pub fn failing(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    fn check(&self, path: &Path) -> RenderResult {
        let name = path.file_name().unwrap().to_string_lossy();
        if self.failing.iter().any(|failing| failing.as_str() == name.as_ref()) {
            Err(RenderError::Failed("corrupt file".to_string()))
        } else {
            Ok(create_test_pdf(1))
        }
    }
}

impl Renderer for MockRenderer {
    fn read_pdf(&self, path: &Path) -> RenderResult {
        self.check(path).map(|_| create_test_pdf(2))
    }

    fn render_image(&self, path: &Path, _label: bool, _page_size: PageSize) -> RenderResult {
        self.check(path)
    }

    fn render_word_doc(&self, path: &Path, _page_size: PageSize) -> RenderResult {
        self.check(path)
    }

    fn render_slide_deck(&self, path: &Path, _page_size: PageSize) -> RenderResult {
        self.check(path)
    }

    fn render_text(&self, path: &Path, _page_size: PageSize) -> RenderResult {
        self.check(path)
    }

    fn render_title_page(&self, _title: &str, _subtitle: &str, _page_size: PageSize) -> RenderResult {
        Ok(create_test_pdf(1))
    }
}

/// Wraps [`MockRenderer`] and remembers every title page it was asked for
#[derive(Default)]
pub struct RecordingRenderer {
    pub inner: MockRenderer,
    titles: RefCell<Vec<(String, String)>>,
}

impl RecordingRenderer {
    pub fn failing(names: &[&str]) -> Self {
        Self {
            inner: MockRenderer::failing(names),
            titles: RefCell::new(Vec::new()),
        }
    }

    /// (title, subtitle) pairs in call order
    pub fn titles(&self) -> Vec<(String, String)> {
        self.titles.borrow().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn read_pdf(&self, path: &Path) -> RenderResult {
        self.inner.read_pdf(path)
    }

    fn render_image(&self, path: &Path, label: bool, page_size: PageSize) -> RenderResult {
        self.inner.render_image(path, label, page_size)
    }

    fn render_word_doc(&self, path: &Path, page_size: PageSize) -> RenderResult {
        self.inner.render_word_doc(path, page_size)
    }

    fn render_slide_deck(&self, path: &Path, page_size: PageSize) -> RenderResult {
        self.inner.render_slide_deck(path, page_size)
    }

    fn render_text(&self, path: &Path, page_size: PageSize) -> RenderResult {
        self.inner.render_text(path, page_size)
    }

    fn render_title_page(&self, title: &str, subtitle: &str, page_size: PageSize) -> RenderResult {
        self.titles
            .borrow_mut()
            .push((title.to_string(), subtitle.to_string()));
        self.inner.render_title_page(title, subtitle, page_size)
    }
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(title, subtitle)| (title.to_string(), subtitle.to_string()))
        .collect()
}
