use super::*;
use crate::sampler::RandomSource;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "percolation_sim_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn small_study() -> StudyConfig {
    StudyConfig {
        study_name: "Small".to_string(),
        seed: Some(3),
        parallel: false,
        rng: RandomSource::Fastrand,
        cases: vec![StudyCase::new(4, 6), StudyCase::new(6, 4)],
    }
}

#[test]
fn size_sweep_names_cases() {
    let config = StudyConfig::generate_size_sweep("Sweep".to_string(), &[10, 20], 50, Some(1));
    let ids: Vec<_> = config.cases.iter().map(|c| c.case_id.as_str()).collect();
    assert_eq!(ids, ["N10_T50", "N20_T50"]);
    assert_eq!(config.find_case("N20_T50").map(|c| c.grid_size), Some(20));
    assert!(config.find_case("N30_T50").is_none());
}

#[test]
fn output_dir_name_stays_inside_results_dir() {
    let mut config = small_study();
    config.study_name = "../../etc/Threshold Sweep".to_string();
    let name = config.output_dir_name();
    assert_eq!(name, "______etc_Threshold_Sweep");
    assert!(!name.contains('/') && !name.contains('\\') && !name.contains(".."));

    config.study_name = "..".to_string();
    assert_eq!(config.output_dir_name(), "__");
    config.study_name = String::new();
    assert_eq!(config.output_dir_name(), "study");
}

#[test]
fn minimal_toml_uses_defaults() {
    let text = r#"
        study_name = "Minimal"

        [[cases]]
        case_id = "only"
        grid_size = 5
        trials = 2
    "#;
    let config: StudyConfig = toml::from_str(text).unwrap();
    assert_eq!(config.seed, None);
    assert!(!config.parallel);
    assert_eq!(config.rng, RandomSource::Fastrand);
    assert_eq!(config.cases[0].grid_size, 5);
}

#[test]
fn config_survives_file_round_trip() {
    let dir = scratch_dir("config");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("study.toml");
    let path = path.to_str().unwrap();

    let mut config = small_study();
    config.rng = RandomSource::StdRng;
    config.to_file(path).unwrap();
    let loaded = StudyConfig::from_file(path).unwrap();

    assert_eq!(loaded.study_name, "Small");
    assert_eq!(loaded.seed, Some(3));
    assert_eq!(loaded.rng, RandomSource::StdRng);
    assert_eq!(loaded.cases, config.cases);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn run_all_exports_trials_and_summary() {
    let dir = scratch_dir("run_all");
    let runner = StudyRunner::new(small_study(), dir.to_str().unwrap().to_string());

    let results = runner.run_all().unwrap();
    assert_eq!(results.len(), 2);
    for r in &results {
        assert!(r.confidence_lo <= r.mean && r.mean <= r.confidence_hi);
    }

    let trials_csv = std::fs::read_to_string(dir.join("N4_T6.csv")).unwrap();
    let mut lines = trials_csv.lines();
    assert_eq!(lines.next(), Some("Trial,Grid_Size,Threshold"));
    assert_eq!(lines.count(), 6);

    let summary = std::fs::read_to_string(dir.join("Study_Summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
    assert!(summary.lines().nth(2).unwrap().starts_with("N6_T4,6,4,"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("Study_Summary.json")).unwrap())
            .unwrap();
    assert_eq!(json[0]["case_id"], "N4_T6");
    assert_eq!(json[1]["trials"], 4);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn seeded_case_is_reproducible() {
    let dir = scratch_dir("repro");
    let runner = StudyRunner::new(small_study(), dir.to_str().unwrap().to_string());
    let a = runner.run_case("N6_T4").unwrap();
    let b = runner.run_case("N6_T4").unwrap();
    assert_eq!(a.mean, b.mean);
    assert_eq!(a.stddev, b.stddev);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_case_is_an_error() {
    let runner = StudyRunner::new(small_study(), scratch_dir("unknown").to_str().unwrap().to_string());
    let err = runner.run_case("N99_T1").unwrap_err();
    assert!(err.to_string().contains("N99_T1"));
}

#[test]
fn invalid_case_surfaces_argument_error() {
    let mut config = small_study();
    config.cases = vec![StudyCase::new(0, 5)];
    let runner = StudyRunner::new(config, scratch_dir("invalid").to_str().unwrap().to_string());
    let err = runner.run_case("N0_T5").unwrap_err();
    assert_eq!(err.to_string(), "Grid size 0 must be greater than zero");
}
