//! Run log
//!
//! Every line is kept for `processing_log.txt` and forwarded to the `log`
//! facade, so console output is whatever logger the caller installs.

use crate::types::Result;
use std::path::Path;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Default, Clone)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.lines.push(message);
    }

    /// A recoverable failure; recorded like any other line
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.lines.push(message);
    }

    pub fn blank(&mut self) {
        self.info("");
    }

    pub fn rule(&mut self) {
        self.info("=".repeat(RULE_WIDTH));
    }

    /// Blank line, then the title between two rules
    pub fn heading(&mut self, title: impl Into<String>) {
        self.blank();
        self.rule();
        self.info(title);
        self.rule();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Write all lines, newline-joined, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.lines.join("\n"))?;
        Ok(())
    }
}
