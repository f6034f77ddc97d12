use crate::classify::FormatSupport;
use crate::renderer::RenderSettings;
use crate::types::*;
use pdf_render::PageSize;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sections per combined PDF unless configured otherwise
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Everything one organization run needs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrganizeOptions {
    pub source_dir: PathBuf,

    /// `None` means `<parent>/<source name>_Organized`
    pub output_dir: Option<PathBuf>,

    /// Sections per combined PDF; 0 disables combining
    pub group_size: usize,

    pub page_size: PageSize,
    pub title_pages: bool,
    pub source_labels: bool,

    pub formats: FormatSupport,
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::new(),
            output_dir: None,
            group_size: DEFAULT_GROUP_SIZE,
            page_size: PageSize::A4,
            title_pages: true,
            source_labels: true,
            formats: FormatSupport::default(),
        }
    }
}

impl OrganizeOptions {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| OrganizeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| OrganizeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(OrganizeError::Config(
                "No source directory specified".to_string(),
            ));
        }
        if !self.source_dir.exists() {
            return Err(OrganizeError::Config(format!(
                "Source directory does not exist: {}",
                self.source_dir.display()
            )));
        }
        if !self.source_dir.is_dir() {
            return Err(OrganizeError::Config(format!(
                "Source path is not a directory: {}",
                self.source_dir.display()
            )));
        }

        let output = self.resolved_output_dir();
        if output.is_file() {
            return Err(OrganizeError::Config(format!(
                "Output path is a file: {}",
                output.display()
            )));
        }
        if crate::discover::is_same_dir(&output, &self.source_dir) {
            return Err(OrganizeError::Config(
                "Output directory must differ from the source directory".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured output directory, or the default beside the source
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&self.source_dir))
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            page_size: self.page_size,
            title_pages: self.title_pages,
            source_labels: self.source_labels,
        }
    }
}

/// `<parent>/<source name>_Organized`
pub fn default_output_dir(source_dir: &Path) -> PathBuf {
    let name = source_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Documents".to_string());
    let parent = source_dir.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}_Organized", name))
}

/// Directories and files one run writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub individual: PathBuf,
    pub combined: PathBuf,
    pub set_aside: PathBuf,
    pub log_path: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            individual: root.join("Individual"),
            combined: root.join("Combined"),
            set_aside: root.join("Set_Aside"),
            log_path: root.join("processing_log.txt"),
            root,
        }
    }

    /// Create every output directory; existing ones are reused
    pub fn create(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        for dir in [&self.individual, &self.combined, &self.set_aside] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}
