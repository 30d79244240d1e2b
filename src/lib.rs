//! Main Library File for PDF spot color disabling
//! Finds Separation colorants in page resources, matches them against name
//! filters and rewrites matched colorants to the reserved `None` colorant.

// Configuration and core types
pub mod config;
pub mod error;
pub mod pdf_document;
pub mod types;

// Colorant discovery, matching and suppression
pub mod spot;

// Run reports
pub mod report;

// Re-exports for crate consumers
pub use config::SpotConfig;
pub use error::{Error, Result};
pub use pdf_document::PdfDocument;
pub use report::{ReportConfig, ReportFormat, ReportGenerator, RunMode, SpotReport};
pub use spot::{describe_spots, disable_all, disable_matching, list_spots, FilterSpec};
pub use types::{ColorantReference, ColorantSet, SpotInfo, SpotOutcome};
