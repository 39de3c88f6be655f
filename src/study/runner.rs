use super::config::{StudyCase, StudyConfig};
use super::export::{export_study_summary, export_trials_to_csv};
/// Study runner for executing cases headlessly
use crate::profile_scope;
use crate::stats::{PercolationStats, TrialOptions};
use serde::Serialize;

/// Aggregates of one executed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub case_id: String,
    pub grid_size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
    pub elapsed_secs: f64,
}

impl CaseResult {
    fn new(case: &StudyCase, stats: &PercolationStats, elapsed_secs: f64) -> Self {
        Self {
            case_id: case.case_id.clone(),
            grid_size: stats.grid_size(),
            trials: stats.trials(),
            mean: stats.mean(),
            stddev: stats.stddev(),
            confidence_lo: stats.confidence_lo(),
            confidence_hi: stats.confidence_hi(),
            elapsed_secs,
        }
    }
}

pub struct StudyRunner {
    config: StudyConfig,
    output_dir: String,
}

impl StudyRunner {
    pub fn new(config: StudyConfig, output_dir: String) -> Self {
        Self { config, output_dir }
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn options(&self) -> TrialOptions {
        TrialOptions {
            seed: self.config.seed,
            rng: self.config.rng,
            parallel: self.config.parallel,
            progress: !self.config.parallel,
        }
    }

    /// Run a specific case by ID
    pub fn run_case(&self, case_id: &str) -> Result<CaseResult, Box<dyn std::error::Error>> {
        let case = self
            .config
            .find_case(case_id)
            .ok_or_else(|| format!("Case ID '{}' not found", case_id))?;

        println!("\n╔══════════════════════════════════════════╗");
        println!("║  Running Study Case: {}  ", case_id);
        println!("╚══════════════════════════════════════════╝\n");

        self.execute_case(case)
    }

    /// Run all cases sequentially and export the summary
    pub fn run_all(&self) -> Result<Vec<CaseResult>, Box<dyn std::error::Error>> {
        let mut results = Vec::with_capacity(self.config.cases.len());

        for case in &self.config.cases {
            println!("\n╔══════════════════════════════════════════╗");
            println!("║  Running Study Case: {}  ", case.case_id);
            println!("╚══════════════════════════════════════════╝\n");

            results.push(self.execute_case(case)?);
        }

        export_study_summary(&results, &self.output_dir)?;

        println!(
            "\n✅ Study '{}' completed successfully!",
            self.config.study_name
        );
        println!("📊 Results saved to: {}", self.output_dir);

        Ok(results)
    }

    fn execute_case(&self, case: &StudyCase) -> Result<CaseResult, Box<dyn std::error::Error>> {
        profile_scope!("study_case");
        let options = self.options();

        println!("⚙️  Grid size: {}x{}", case.grid_size, case.grid_size);
        println!("⚙️  Trials: {}", case.trials);
        println!("⚙️  Random source: {:?}", options.rng);
        match options.seed {
            Some(seed) => println!("⚙️  Seed: {}", seed),
            None => println!("⚠️  No seed configured, results will not be reproducible"),
        }
        println!("⚙️  Parallel: {}\n", options.parallel);

        let start_time = std::time::Instant::now();
        let stats = PercolationStats::with_options(case.grid_size, case.trials, &options)?;
        let elapsed = start_time.elapsed();
        println!("✓ Trials completed in {:.2}s", elapsed.as_secs_f32());
        println!(
            "  mean = {:.6}, stddev = {:.6}, 95% CI = [{:.6}, {:.6}]",
            stats.mean(),
            stats.stddev(),
            stats.confidence_lo(),
            stats.confidence_hi()
        );

        export_trials_to_csv(case, &stats, &self.output_dir)?;

        Ok(CaseResult::new(case, &stats, elapsed.as_secs_f64()))
    }

    /// List all cases in the study
    pub fn list_cases(&self) {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║  Study: {}  ", self.config.study_name);
        println!("╚══════════════════════════════════════════╝\n");

        println!("Total cases: {}\n", self.config.cases.len());

        for (idx, case) in self.config.cases.iter().enumerate() {
            println!("  [{}] {}", idx + 1, case.case_id);
            println!("      Grid: {}x{}", case.grid_size, case.grid_size);
            println!("      Trials: {}", case.trials);
            println!();
        }
    }
}
