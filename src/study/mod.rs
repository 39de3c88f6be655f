/// Batch studies of the percolation threshold across grid sizes
///
/// This module provides functionality to:
/// - Describe cases (grid size, trial count) in a TOML file
/// - Run them headlessly, optionally in parallel
/// - Export per-trial thresholds and a summary for analysis

pub mod config;
pub mod runner;
pub mod export;

#[cfg(test)]
mod tests;

pub use config::{StudyCase, StudyConfig};
pub use runner::{CaseResult, StudyRunner};
pub use export::{export_study_summary, export_trials_to_csv};
