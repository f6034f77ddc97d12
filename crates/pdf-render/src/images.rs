//! Image pages
//!
//! Each image becomes one page: decoded with the `image` crate, turned
//! upright from its EXIF orientation, flattened onto white and embedded as
//! an RGB image XObject scaled to fit inside the page margins.

use crate::constants::*;
use crate::types::{PageSize, Result};
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use lopdf::{Dictionary, Document, Object, Stream};
use std::path::Path;

/// Render an image file as a single page.
///
/// With `add_source_label` the file name is printed in the bottom margin
/// and the image area shrinks to leave room for it.
pub fn image_page(path: &Path, add_source_label: bool, page_size: PageSize) -> Result<Document> {
    let image = load_upright(path)?;
    let rgb = flatten_onto_white(&image);

    let label = add_source_label.then(|| {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("Source: {}", filename)
    });

    Ok(build_image_document(rgb, label.as_deref(), page_size))
}

fn load_upright(path: &Path) -> Result<DynamicImage> {
    let mut decoder = ImageReader::open(path)?.with_guessed_format()?.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// Composite any alpha channel onto a white background
fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as u32;
        let blend = |channel: u8| ((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        rgb.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }
    rgb
}

/// Placement of the image on the page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Fit an image into the page margins, preserving aspect ratio, centered.
pub fn fit_image(
    image_width: u32,
    image_height: u32,
    page_width: f32,
    page_height: f32,
    reserve_label: bool,
) -> ImagePlacement {
    let label_band = if reserve_label { LABEL_BAND } else { 0.0 };
    let available_width = page_width - 2.0 * IMAGE_MARGIN;
    let available_height = page_height - 2.0 * IMAGE_MARGIN - label_band;

    let scale_w = available_width / image_width.max(1) as f32;
    let scale_h = available_height / image_height.max(1) as f32;
    let scale = scale_w.min(scale_h);

    let width = image_width as f32 * scale;
    let height = image_height as f32 * scale;

    let x = (page_width - width) / 2.0;
    let mut y = (page_height - height) / 2.0;
    if reserve_label {
        y += label_band / 2.0;
    }

    ImagePlacement {
        x,
        y,
        width,
        height,
    }
}

fn build_image_document(rgb: RgbImage, label: Option<&str>, page_size: PageSize) -> Document {
    let (page_width, page_height) = page_size.dimensions_pt();
    let placement = fit_image(rgb.width(), rgb.height(), page_width, page_height, label.is_some());

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let image_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(rgb.width() as i64)),
        ("Height", Object::Integer(rgb.height() as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
    ]);
    let image_id = doc.add_object(Stream::new(image_dict, rgb.into_raw()));

    let mut content = format!(
        "q {} 0 0 {} {} {} cm /Im1 Do Q\n",
        placement.width, placement.height, placement.x, placement.y
    );

    let mut resources = Dictionary::new();
    let mut xobjects = Dictionary::new();
    xobjects.set("Im1", Object::Reference(image_id));
    resources.set("XObject", Object::Dictionary(xobjects));

    if let Some(label) = label {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        let font_id = doc.add_object(font_dict);

        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        resources.set("Font", Object::Dictionary(fonts));

        content.push_str(&format!(
            "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            LABEL_FONT_SIZE,
            IMAGE_MARGIN,
            IMAGE_MARGIN,
            escape_pdf_text(label)
        ));
    }

    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page_width),
                Object::Real(page_height),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Escape text for a PDF literal string drawn in a standard Type1 font.
/// Characters outside printable ASCII become `?`.
pub fn escape_pdf_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ' '..='~' => escaped.push(ch),
            _ => escaped.push('?'),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_image_landscape_is_width_bound() {
        let (w, h) = PageSize::A4.dimensions_pt();
        let placement = fit_image(2000, 1000, w, h, false);
        assert!((placement.width - (w - 2.0 * IMAGE_MARGIN)).abs() < 0.01);
        assert!((placement.height - placement.width / 2.0).abs() < 0.01);
        assert!((placement.x - IMAGE_MARGIN).abs() < 0.01);
    }

    #[test]
    fn test_fit_image_reserves_label_band() {
        let (w, h) = PageSize::Letter.dimensions_pt();
        let plain = fit_image(100, 1000, w, h, false);
        let labeled = fit_image(100, 1000, w, h, true);
        assert!(labeled.height < plain.height);
        assert!(labeled.y >= IMAGE_MARGIN + LABEL_BAND - 0.01);
    }

    #[test]
    fn test_escape_pdf_text() {
        assert_eq!(escape_pdf_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(escape_pdf_text("café"), "caf?");
    }

    #[test]
    fn test_flatten_onto_white() {
        let mut rgba = image::RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image::Rgba([0, 0, 0, 0]));
        let rgb = flatten_onto_white(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    }
}
