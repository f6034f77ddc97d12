//! Run coordination
//!
//! One run walks the pipeline once, in order:
//! 1. Validate options and create the output layout
//! 2. Discover categories and enumerate each one
//! 3. Build one section PDF per category with processed files
//! 4. Combine sections into windows
//! 5. Copy set-aside files and persist the run log

use crate::classify::Classifier;
use crate::combine::combine_sections;
use crate::discover::discover_categories;
use crate::enumerate::enumerate_category;
use crate::options::{OrganizeOptions, OutputLayout};
use crate::renderer::{Renderer, StandardRenderer};
use crate::run_log::RunLog;
use crate::section::build_section;
use crate::set_aside::materialize;
use crate::types::*;

pub const TOOL_NAME: &str = "DocMerge - Document Organization Tool";

/// Owns the state of a single organization run
pub struct Organizer<R: Renderer> {
    options: OrganizeOptions,
    renderer: R,
    classifier: Classifier,
    layout: OutputLayout,
    set_aside: Vec<SetAsideEntry>,
    log: RunLog,
}

impl<R: Renderer> Organizer<R> {
    pub fn new(options: OrganizeOptions, renderer: R) -> Self {
        let classifier = Classifier::new(options.formats);
        let layout = OutputLayout::new(options.resolved_output_dir());
        Self {
            options,
            renderer,
            classifier,
            layout,
            set_aside: Vec::new(),
            log: RunLog::new(),
        }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn log(&self) -> &RunLog {
        &self.log
    }

    pub fn set_aside(&self) -> &[SetAsideEntry] {
        &self.set_aside
    }

    /// Run the whole pipeline and return the totals
    pub fn run(&mut self) -> Result<RunSummary> {
        self.options.validate()?;
        self.layout.create()?;

        self.log_banner();

        let sections = self.build_sections()?;

        let combined = if sections.len() > 1 {
            combine_sections(
                &self.renderer,
                &self.options.render_settings(),
                &sections,
                self.options.group_size,
                &self.layout.combined,
                &mut self.log,
            )?
        } else {
            Vec::new()
        };

        materialize(&self.set_aside, &self.layout.set_aside, &mut self.log);

        let summary = RunSummary {
            individual_count: sections.len(),
            combined_count: combined.len(),
            set_aside_count: self.set_aside.len(),
            output_dir: self.layout.root.clone(),
        };
        self.log_summary(&summary);
        self.log.save(&self.layout.log_path)?;

        Ok(summary)
    }

    fn log_banner(&mut self) {
        self.log.rule();
        self.log.info(TOOL_NAME);
        self.log.rule();
        self.log.info(format!(
            "Started: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        self.log
            .info(format!("Source: {}", self.options.source_dir.display()));
        self.log
            .info(format!("Output: {}", self.layout.root.display()));
    }

    fn build_sections(&mut self) -> Result<Vec<SectionArtifact>> {
        let categories =
            discover_categories(&self.options.source_dir, Some(&self.layout.root))?;
        self.log.blank();
        self.log.info(format!("Found {} categories", categories.len()));

        let settings = self.options.render_settings();
        let mut sections: Vec<SectionArtifact> = Vec::new();

        for category in &categories {
            let files = enumerate_category(
                category,
                &self.classifier,
                Some(&self.layout.root),
                &mut self.set_aside,
                &mut self.log,
            );

            let index = sections.len() + 1;
            if let Some(section) = build_section(
                &self.renderer,
                &settings,
                category,
                &files,
                index,
                &self.layout.individual,
                &mut self.log,
            )? {
                sections.push(section);
            }
        }

        Ok(sections)
    }

    fn log_summary(&mut self, summary: &RunSummary) {
        self.log.blank();
        self.log.rule();
        self.log.info("COMPLETE!");
        self.log
            .info(format!("Output directory: {}", summary.output_dir.display()));
        self.log
            .info(format!("Individual PDFs: {}", summary.individual_count));
        self.log
            .info(format!("Combined PDFs: {}", summary.combined_count));
        self.log
            .info(format!("Set aside files: {}", summary.set_aside_count));
        self.log.rule();
    }
}

/// Organize with the standard converters, off the async executor
pub async fn organize(options: OrganizeOptions) -> Result<RunSummary> {
    options.validate()?;

    tokio::task::spawn_blocking(move || Organizer::new(options, StandardRenderer).run()).await?
}
