use pdf_render::*;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_pptx(path: &Path, slides: &[&str]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();

    // Written out of order on purpose: slide10 must come after slide2
    for (i, text) in slides.iter().enumerate().rev() {
        let number = if i == slides.len() - 1 && slides.len() > 2 { 10 } else { i + 1 };
        writer
            .start_file(format!("ppt/slides/slide{}.xml", number), options)
            .unwrap();
        let xml = format!(
            "<p:sld><p:cSld><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:cSld></p:sld>",
            text
        );
        writer.write_all(xml.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_title_page_has_one_page() {
    let doc = title_page("Contracts", "Section 1", PageSize::A4).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_title_page_without_subtitle() {
    let doc = title_page("Sections 1-3", "", PageSize::Letter).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_text_pages_short_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "# Notes\n\nSome text here.\n").unwrap();

    let doc = text_pages(&path, PageSize::A4).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_text_pages_long_file_flows_onto_more_pages() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long.txt");
    let body = (0..200)
        .map(|i| format!("Line number {} of a long plain text file.", i))
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&path, body).unwrap();

    let doc = text_pages(&path, PageSize::Letter).unwrap();
    assert!(doc.get_pages().len() > 1);
}

#[test]
fn test_text_pages_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = text_pages(&dir.path().join("missing.txt"), PageSize::A4);
    assert!(matches!(result, Err(RenderError::Io(_))));
}

#[test]
fn test_image_page_from_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    image::RgbImage::from_pixel(40, 20, image::Rgb([200, 10, 10]))
        .save(&path)
        .unwrap();

    let doc = image_page(&path, true, PageSize::A4).unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    assert!(resources.get(b"XObject").is_ok());
    assert!(resources.get(b"Font").is_ok());
}

#[test]
fn test_image_page_without_label_has_no_font() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scan.png");
    image::RgbaImage::new(10, 30).save(&path).unwrap();

    let doc = image_page(&path, false, PageSize::Letter).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    assert!(resources.get(b"Font").is_err());
}

#[test]
fn test_image_page_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    assert!(image_page(&path, true, PageSize::A4).is_err());
}

#[test]
fn test_docx_pages() {
    use docx_rs::{Docx, Paragraph, Run};

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("letter.docx");
    let file = std::fs::File::create(&path).unwrap();
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Dear reader,")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Please find attached.")))
        .build()
        .pack(file)
        .unwrap();

    let doc = docx_pages(&path, PageSize::A4).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_docx_pages_rejects_non_docx() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fake.docx");
    std::fs::write(&path, b"plain bytes").unwrap();

    assert!(docx_pages(&path, PageSize::A4).is_err());
}

#[test]
fn test_slide_deck_one_page_per_slide() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.pptx");
    write_pptx(&path, &["Welcome", "Agenda", "Questions"]);

    let doc = slide_deck_pages(&path, PageSize::A4).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn test_single_slide_shares_page_with_deck_heading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.pptx");
    write_pptx(&path, &["Only slide"]);

    let doc = slide_deck_pages(&path, PageSize::Letter).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_slide_deck_without_slides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.pptx");
    write_pptx(&path, &[]);

    let result = slide_deck_pages(&path, PageSize::A4);
    assert!(matches!(result, Err(RenderError::Empty(_))));
}

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PageSize::Letter.dimensions_mm(), (215.9, 279.4));

    let (w, h) = PageSize::Letter.dimensions_pt();
    assert!((w - 612.0).abs() < 0.1);
    assert!((h - 792.0).abs() < 0.1);
}
