use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Render error: {0}")]
    Render(#[from] pdf_render::RenderError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Cannot scan {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OrganizeError>;

/// One top-level grouping of the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
}

/// Why a file was kept out of the merged output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetAsideReason {
    /// OS or tooling metadata (.DS_Store, Thumbs.db, .git, ...)
    SystemFile,
    /// Extension with no renderer, stored with its leading dot
    UnsupportedFormat(String),
}

impl fmt::Display for SetAsideReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetAsideReason::SystemFile => write!(f, "System file"),
            SetAsideReason::UnsupportedFormat(ext) if ext.is_empty() => {
                write!(f, "Unsupported format: (none)")
            }
            SetAsideReason::UnsupportedFormat(ext) => write!(f, "Unsupported format: {}", ext),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAsideEntry {
    pub path: PathBuf,
    pub reason: SetAsideReason,
}

/// A persisted per-category PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionArtifact {
    /// 1-based, dense over produced sections
    pub index: usize,
    pub category_name: String,
    pub path: PathBuf,
    pub page_count: usize,
    pub files_processed: usize,
}

/// A persisted PDF spanning a window of sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedArtifact {
    pub start_index: usize,
    pub end_index: usize,
    pub path: PathBuf,
    pub page_count: usize,
}

/// Totals reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub individual_count: usize,
    pub combined_count: usize,
    pub set_aside_count: usize,
    pub output_dir: PathBuf,
}
