//! Report generation for spot disabling runs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{SpotInfo, SpotOutcome};

pub mod generator;

pub use generator::ReportGenerator;

/// Report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub format: ReportFormat,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

impl ReportFormat {
    /// Picks the format from the report file extension; `.json` means JSON
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::PlainText,
        }
    }
}

/// Which operation produced the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    List,
    Disable,
    DryRun,
}

/// Complete report of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotReport {
    pub generation_time: String,
    pub tool_version: String,
    pub mode: RunMode,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub filters: Vec<String>,
    pub spots: Vec<SpotOutcome>,
    pub disabled_count: usize,
}

impl SpotReport {
    pub fn new(mode: RunMode, input: impl Into<PathBuf>) -> Self {
        Self {
            generation_time: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            mode,
            input: input.into(),
            output: None,
            filters: Vec::new(),
            spots: Vec::new(),
            disabled_count: 0,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_filters(mut self, filters: &[String]) -> Self {
        self.filters = filters.to_vec();
        self
    }

    /// Records the colorants of a listing run, none of them disabled
    pub fn with_listing(mut self, spots: Vec<SpotInfo>) -> Self {
        self.spots = spots
            .into_iter()
            .map(|spot| SpotOutcome {
                spot,
                disabled: false,
            })
            .collect();
        self.disabled_count = 0;
        self
    }

    pub fn with_outcomes(mut self, outcomes: Vec<SpotOutcome>) -> Self {
        self.disabled_count = outcomes.iter().filter(|o| o.disabled).count();
        self.spots = outcomes;
        self
    }
}
