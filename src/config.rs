// Centralized configuration for Monte Carlo parameters

// ====================
// Statistics
// ====================
/// z-score for a two-sided 95% confidence interval
pub const CONFIDENCE_95: f64 = 1.96;

// ====================
// Trials
// ====================
/// Seed used by generated studies when none is given
pub const DEFAULT_SEED: u64 = 0;
/// Sequential runs print progress every this many trials
pub const PROGRESS_EVERY_TRIALS: usize = 1000;

// ====================
// Threading
// ====================
pub const MIN_THREADS: usize = 3;
pub const THREADS_LEAVE_FREE: usize = 2;

// ====================
// Study files
// ====================
pub const DEFAULT_STUDY_FILE: &str = "percolation_study.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "study_results";
