//! File classification
//!
//! Decides from a path alone which renderer a file needs, or whether it is
//! set aside. System artifacts win over extensions.

use std::path::{Component, Path};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PDF_EXTENSIONS: &[&str] = &["pdf"];
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "jfif", "bmp", "tiff", "heic",
];
pub const WORD_DOC_EXTENSIONS: &[&str] = &["docx"];
pub const SLIDE_DECK_EXTENSIONS: &[&str] = &["pptx"];
pub const TEXT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// File names that are always OS or tooling metadata
const SYSTEM_FILE_NAMES: &[&str] = &[".ds_store", "desktop.ini", "thumbs.db", ".gitignore"];

/// Directory names whose contents are always metadata
const SYSTEM_DIR_NAMES: &[&str] = &[".git", "__pycache__"];

/// Byte-compiled caches
const SYSTEM_EXTENSIONS: &[&str] = &["pyc"];

/// What a file is, as far as the pipeline is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Image,
    WordDoc,
    SlideDeck,
    MarkdownText,
    Unsupported,
    SystemFile,
}

impl DocumentKind {
    /// Whether the kind has a renderer and goes into a section
    pub fn is_processable(self) -> bool {
        !matches!(self, DocumentKind::Unsupported | DocumentKind::SystemFile)
    }

    /// Short label used in log lines ("Added PDF: ...")
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Image => "image",
            DocumentKind::WordDoc => "DOCX",
            DocumentKind::SlideDeck => "slides",
            DocumentKind::MarkdownText => "text",
            DocumentKind::Unsupported => "unsupported",
            DocumentKind::SystemFile => "system file",
        }
    }
}

/// A path together with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: std::path::PathBuf,
    pub kind: DocumentKind,
}

/// Optional formats; a disabled format classifies as unsupported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatSupport {
    pub word_docs: bool,
    pub slide_decks: bool,
    pub text: bool,
}

impl Default for FormatSupport {
    fn default() -> Self {
        Self {
            word_docs: true,
            slide_decks: true,
            text: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    support: FormatSupport,
}

impl Classifier {
    pub fn new(support: FormatSupport) -> Self {
        Self { support }
    }

    /// Classify a path. Never fails: anything unrecognized is `Unsupported`.
    ///
    /// Pass a path relative to the scanned root so that directories above
    /// the root cannot mark files as system artifacts.
    pub fn classify(&self, path: &Path) -> DocumentKind {
        if is_system_file(path) {
            return DocumentKind::SystemFile;
        }

        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let ext = ext.as_str();

        if PDF_EXTENSIONS.contains(&ext) {
            DocumentKind::Pdf
        } else if IMAGE_EXTENSIONS.contains(&ext) {
            DocumentKind::Image
        } else if self.support.word_docs && WORD_DOC_EXTENSIONS.contains(&ext) {
            DocumentKind::WordDoc
        } else if self.support.slide_decks && SLIDE_DECK_EXTENSIONS.contains(&ext) {
            DocumentKind::SlideDeck
        } else if self.support.text && TEXT_EXTENSIONS.contains(&ext) {
            DocumentKind::MarkdownText
        } else {
            DocumentKind::Unsupported
        }
    }

    pub fn classify_file(&self, path: &Path, relative: &Path) -> ClassifiedFile {
        ClassifiedFile {
            path: path.to_path_buf(),
            kind: self.classify(relative),
        }
    }
}

/// Case-insensitive match against the fixed system artifact patterns.
///
/// Names match by suffix, so `old_Thumbs.db` counts as well.
pub fn is_system_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();

    if SYSTEM_FILE_NAMES.iter().any(|suffix| name.ends_with(suffix)) {
        return true;
    }

    if let Some((_, ext)) = name.rsplit_once('.') {
        if SYSTEM_EXTENSIONS.contains(&ext) {
            return true;
        }
    }

    path.parent().is_some_and(|parent| {
        parent.components().any(|component| match component {
            Component::Normal(dir) => {
                let dir = dir.to_string_lossy().to_lowercase();
                SYSTEM_DIR_NAMES.contains(&dir.as_str())
            }
            _ => false,
        })
    })
}
