/// Export study results to CSV and JSON
use std::fs::File;
use std::io::Write;
use super::config::StudyCase;
use super::runner::CaseResult;
use crate::stats::PercolationStats;

/// Write one row per trial for a single case
pub fn export_trials_to_csv(
    case: &StudyCase,
    stats: &PercolationStats,
    output_dir: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!("{}/{}.csv", output_dir, case.case_id);
    let mut file = File::create(&filename)?;

    writeln!(file, "Trial,Grid_Size,Threshold")?;
    for (trial, threshold) in stats.thresholds().iter().enumerate() {
        writeln!(file, "{},{},{}", trial, stats.grid_size(), threshold)?;
    }

    println!("✓ Exported trials for case {} to {}", case.case_id, filename);
    Ok(filename)
}

/// Write summary statistics for all cases as CSV and JSON
pub fn export_study_summary(
    results: &[CaseResult],
    output_dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!("{}/Study_Summary.csv", output_dir);
    let mut file = File::create(&filename)?;

    writeln!(
        file,
        "Case_ID,Grid_Size,Trials,Mean,Stddev,Confidence_Lo,Confidence_Hi,Elapsed_s"
    )?;
    for r in results {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{}",
            r.case_id,
            r.grid_size,
            r.trials,
            r.mean,
            r.stddev,
            r.confidence_lo,
            r.confidence_hi,
            r.elapsed_secs
        )?;
    }

    let json_name = format!("{}/Study_Summary.json", output_dir);
    std::fs::write(&json_name, serde_json::to_string_pretty(results)?)?;

    println!("✓ Exported study summary to {} and {}", filename, json_name);
    Ok(())
}
