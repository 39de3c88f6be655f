// stats.rs
// Monte Carlo estimate of the percolation threshold

use crate::config::{CONFIDENCE_95, PROGRESS_EVERY_TRIALS};
use crate::error::InvalidArgument;
use crate::percolation::Percolation;
use crate::profile_scope;
use crate::sampler::{RandomSource, SiteSampler};
use rayon::prelude::*;


/// How a batch of trials is executed.
#[derive(Debug, Clone, Default)]
pub struct TrialOptions {
    /// Base seed; trial `i` uses `seed + i`. Drawn from entropy when `None`.
    pub seed: Option<u64>,
    pub rng: RandomSource,
    /// Spread trials over the rayon pool
    pub parallel: bool,
    /// Print progress lines (sequential runs only)
    pub progress: bool,
}

/// Open random sites of a fresh `n`-by-`n` grid until it percolates and
/// return the fraction of sites open at that moment.
pub fn run_trial<S>(n: usize, sampler: &mut S) -> Result<f64, InvalidArgument>
where
    S: SiteSampler + ?Sized,
{
    profile_scope!("trial");
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = sampler.sample_site(n);
        let col = sampler.sample_site(n);
        grid.open(row, col)?;
    }
    Ok(grid.open_fraction())
}

/// Summary of independent percolation trials on one grid size.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Run `trials` independent experiments on an n-by-n grid.
    pub fn new(n: usize, trials: usize) -> Result<Self, InvalidArgument> {
        Self::with_options(n, trials, &TrialOptions::default())
    }

    pub fn with_options(
        n: usize,
        trials: usize,
        options: &TrialOptions,
    ) -> Result<Self, InvalidArgument> {
        if n < 1 {
            return Err(InvalidArgument::GridSize { n });
        }
        if trials < 1 {
            return Err(InvalidArgument::TrialCount { trials });
        }

        let base_seed = options.seed.unwrap_or_else(|| fastrand::u64(..));
        let rng = options.rng;
        let one_trial = |i: usize| -> Result<f64, InvalidArgument> {
            let mut sampler = rng.seeded(base_seed.wrapping_add(i as u64));
            let threshold = run_trial(n, &mut *sampler)?;
            #[cfg(feature = "trial_debug")]
            println!("  trial {:>6}: p* = {:.6}", i, threshold);
            Ok(threshold)
        };

        let thresholds = if options.parallel {
            (0..trials)
                .into_par_iter()
                .map(one_trial)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            let mut values = Vec::with_capacity(trials);
            for i in 0..trials {
                values.push(one_trial(i)?);
                if options.progress && (i + 1) % PROGRESS_EVERY_TRIALS == 0 {
                    let progress = (i + 1) * 100 / trials;
                    println!("  Progress: {}% ({} / {} trials)", progress, i + 1, trials);
                }
            }
            values
        };

        Self::from_thresholds(n, thresholds)
    }

    /// Aggregate thresholds collected elsewhere.
    pub fn from_thresholds(n: usize, thresholds: Vec<f64>) -> Result<Self, InvalidArgument> {
        if n < 1 {
            return Err(InvalidArgument::GridSize { n });
        }
        if thresholds.is_empty() {
            return Err(InvalidArgument::TrialCount { trials: 0 });
        }
        let mean = find_mean(&thresholds);
        let stddev = find_stddev(&thresholds, mean);
        Ok(Self {
            grid_size: n,
            thresholds,
            mean,
            stddev,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial threshold estimates in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the threshold, dividing by the trial count.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width()
    }
}

fn find_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn find_stddev(values: &[f64], mean: f64) -> f64 {
    let sum: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum / values.len() as f64).sqrt()
}
