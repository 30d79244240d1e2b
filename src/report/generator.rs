//! Report generator implementation

use std::fs;

use super::{ReportConfig, ReportFormat, RunMode, SpotReport};
use crate::error::Result;

/// Renders and writes run reports
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate(report: &SpotReport, config: &ReportConfig) -> Result<()> {
        let content = Self::render(report, config.format)?;
        fs::write(&config.output_path, content)?;
        Ok(())
    }

    pub fn render(report: &SpotReport, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::PlainText => Ok(Self::format_as_text(report)),
            ReportFormat::Json => Self::format_as_json(report),
        }
    }

    fn format_as_text(report: &SpotReport) -> String {
        let mut content = String::new();
        content.push_str("PDF Spot Color Report\n");
        content.push_str("=====================\n\n");

        content.push_str(&format!("Generated: {}\n", report.generation_time));
        content.push_str(&format!("Version: {}\n", report.tool_version));
        content.push_str(&format!("Input: {}\n", report.input.display()));
        if let Some(output) = &report.output {
            content.push_str(&format!("Output: {}\n", output.display()));
        }
        if report.mode != RunMode::List {
            if report.filters.is_empty() {
                content.push_str("Filters: (all colorants)\n");
            } else {
                content.push_str(&format!("Filters: {}\n", report.filters.join(", ")));
            }
        }
        content.push('\n');

        content.push_str("Spot colors:\n");
        content.push_str("------------\n");
        for outcome in &report.spots {
            let status = match (report.mode, outcome.disabled) {
                (RunMode::List, _) => "",
                (_, true) => " [disabled]",
                (_, false) => " [kept]",
            };
            content.push_str(&format!(
                "{} ({}){}\n",
                outcome.spot.display_name, outcome.spot.reference, status
            ));
        }

        if report.mode != RunMode::List {
            content.push_str(&format!("\nDisabled: {}\n", report.disabled_count));
        }
        content
    }

    fn format_as_json(report: &SpotReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
