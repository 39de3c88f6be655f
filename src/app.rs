// Command-line front end of the `percolation_sim` binary

use crate::config::{MIN_THREADS, THREADS_LEAVE_FREE};
use crate::sampler::RandomSource;
use crate::stats::{PercolationStats, TrialOptions};

pub const USAGE: &str = "Usage: percolation_sim <n> <trials> [seed] [Fastrand|StdRng]";

/// Arguments of a single threshold estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    pub rng: RandomSource,
}

/// Parse everything after the program name.
pub fn parse_args(args: &[String]) -> Result<RunArgs, String> {
    if args.len() < 2 || args.len() > 4 {
        return Err(format!("Expected 2 to 4 arguments, got {}", args.len()));
    }
    let grid_size = args[0]
        .parse::<usize>()
        .map_err(|e| format!("Invalid grid size '{}': {}", args[0], e))?;
    let trials = args[1]
        .parse::<usize>()
        .map_err(|e| format!("Invalid trial count '{}': {}", args[1], e))?;
    let seed = match args.get(2) {
        Some(s) => Some(
            s.parse::<u64>()
                .map_err(|e| format!("Invalid seed '{}': {}", s, e))?,
        ),
        None => None,
    };
    let rng = match args.get(3) {
        Some(name) => RandomSource::parse(name)?,
        None => RandomSource::default(),
    };
    Ok(RunArgs {
        grid_size,
        trials,
        seed,
        rng,
    })
}

/// Build the global rayon pool with threads = max(3, total cores) - 2
pub fn init_thread_pool() -> Result<usize, rayon::ThreadPoolBuildError> {
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(MIN_THREADS)
        .max(MIN_THREADS)
        - THREADS_LEAVE_FREE;
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    Ok(threads)
}

/// Estimate the threshold and print it in the classic three-line layout.
pub fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let run_args = parse_args(args)?;
    init_thread_pool()?;

    let options = TrialOptions {
        seed: run_args.seed,
        rng: run_args.rng,
        parallel: true,
        progress: false,
    };
    let stats = PercolationStats::with_options(run_args.grid_size, run_args.trials, &options)?;

    println!("{}", format_report(&stats));

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();

    Ok(())
}

pub fn format_report(stats: &PercolationStats) -> String {
    format!(
        "mean                    = {}\nstddev                  = {}\n95% confidence interval = [{}, {}]",
        stats.mean(),
        stats.stddev(),
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_size_and_trials() {
        let parsed = parse_args(&args(&["200", "100"])).unwrap();
        assert_eq!(
            parsed,
            RunArgs {
                grid_size: 200,
                trials: 100,
                seed: None,
                rng: RandomSource::Fastrand,
            }
        );
    }

    #[test]
    fn parses_seed_and_source() {
        let parsed = parse_args(&args(&["20", "50", "7", "StdRng"])).unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.rng, RandomSource::StdRng);
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_args(&args(&["20"])).is_err());
        assert!(parse_args(&args(&["-1", "10"])).is_err());
        assert!(parse_args(&args(&["20", "ten"])).is_err());
        assert!(parse_args(&args(&["20", "10", "seed"])).is_err());
        assert!(parse_args(&args(&["20", "10", "1", "xorshift"])).is_err());
    }

    #[test]
    fn zero_sizes_parse_but_fail_in_driver() {
        let parsed = parse_args(&args(&["0", "10"])).unwrap();
        assert!(PercolationStats::new(parsed.grid_size, parsed.trials).is_err());
    }

    #[test]
    fn report_has_three_lines() {
        let stats = PercolationStats::from_thresholds(3, vec![0.5, 0.7]).unwrap();
        let report = format_report(&stats);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("mean"));
        assert!(lines[1].starts_with("stddev"));
        assert!(lines[2].starts_with("95% confidence interval = ["));
    }
}
