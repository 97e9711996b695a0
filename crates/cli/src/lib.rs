//! Batch tooling for U-Stacking
//!
//! This crate provides:
//! - Catalog loading from CSV, TSV and JSON files
//! - Batch planning over whole catalogs with per-row error capture
//! - Result recording, console summaries and JSON/CSV export

mod catalog;
mod report;
mod runner;

pub use catalog::{CatalogError, CatalogLoader};
pub use report::{BatchReport, StackReport};
pub use runner::{BatchConfig, BatchRunner, LOW_HEIGHT_LIMIT, STANDARD_HEIGHT_LIMIT};
