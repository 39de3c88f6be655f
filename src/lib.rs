pub mod app;
pub mod config;
pub mod error;
pub mod percolation;
pub mod profiler;
pub mod sampler;
pub mod stats;
pub mod study;
pub mod union_find;

pub use error::InvalidArgument;
pub use percolation::Percolation;
pub use stats::PercolationStats;
pub use union_find::WeightedUnionFind;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
