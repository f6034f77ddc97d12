pub mod classify;
pub mod combine;
pub mod discover;
pub mod enumerate;
mod options;
mod organizer;
pub mod pages;
mod renderer;
mod run_log;
pub mod section;
pub mod set_aside;
pub mod sort_key;
mod types;

pub use classify::{ClassifiedFile, Classifier, DocumentKind, FormatSupport, is_system_file};
pub use combine::{combine_sections, window_ranges};
pub use discover::discover_categories;
pub use enumerate::enumerate_category;
pub use options::*;
pub use organizer::{Organizer, TOOL_NAME, organize};
pub use pages::{PageWriter, load_pdf, save_pdf};
pub use renderer::{RenderResult, RenderSettings, Renderer, StandardRenderer, render_file};
pub use run_log::RunLog;
pub use section::{build_section, sanitize_name, section_file_name};
pub use set_aside::materialize;
pub use sort_key::{SortKey, UNNUMBERED, sort_key, sort_naturally};
pub use types::*;

pub use pdf_render::{PageSize, RenderError};
