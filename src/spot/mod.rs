//! Spot color discovery and suppression
//!
//! Finds Separation color spaces referenced from page resources, matches
//! their colorant names against user filters and rewrites matched names to
//! the reserved `None` colorant.

pub mod collector;
pub mod engine;
pub mod matcher;
pub mod names;
pub mod suppressor;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient access
pub use collector::{collect, page_resources};
pub use engine::{describe_spots, disable_all, disable_matching, disable_matching_report, list_spots};
pub use matcher::{must_disable, FilterSpec};
pub use names::{display_name, normalize};
pub use suppressor::{disable, disable_in_document, separation_name};
