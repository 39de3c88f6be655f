/// CLI tool for running percolation threshold studies
use percolation_sim::app::init_thread_pool;
use percolation_sim::config::{DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_STUDY_FILE};
use percolation_sim::study::{StudyConfig, StudyRunner};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "generate" => generate_study_config(&args[2..]),
        "list" => list_cases(&args[2..]),
        "run" => run_case(&args[2..]),
        "run-all" => run_all_cases(&args[2..]),
        _ => {
            println!("Unknown command: {}", command);
            print_usage();
            false
        }
    };

    #[cfg(feature = "profiling")]
    percolation_sim::PROFILER.lock().print_and_clear();

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║  Percolation Study Runner - threshold sweeps             ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");
    println!("Usage: cargo run --release --bin study_runner <command> [options]\n");
    println!("Commands:");
    println!("  generate    Generate study configuration file");
    println!("  list        List all cases in a study configuration");
    println!("  run         Run a specific case");
    println!("  run-all     Run all cases sequentially\n");
    println!("Examples:");
    println!("  cargo run --release --bin study_runner generate {}", DEFAULT_STUDY_FILE);
    println!("  cargo run --release --bin study_runner list {}", DEFAULT_STUDY_FILE);
    println!("  cargo run --release --bin study_runner run {} N64_T1000", DEFAULT_STUDY_FILE);
    println!("  cargo run --release --bin study_runner run-all {}\n", DEFAULT_STUDY_FILE);
}

fn output_dir(config: &StudyConfig) -> String {
    format!("{}/{}", DEFAULT_OUTPUT_DIR, config.output_dir_name())
}

fn load(config_file: &str) -> Option<StudyConfig> {
    match StudyConfig::from_file(config_file) {
        Ok(config) => Some(config),
        Err(e) => {
            println!("❌ Error loading config: {}", e);
            None
        }
    }
}

fn start_pool() {
    match init_thread_pool() {
        Ok(threads) => println!("✓ Thread pool: {} threads", threads),
        Err(e) => println!("⚠️  Using default thread pool: {}", e),
    }
}

fn generate_study_config(args: &[String]) -> bool {
    let output_file = args.first().map(String::as_str).unwrap_or(DEFAULT_STUDY_FILE);

    println!("\n🔧 Generating study configuration...\n");

    let grid_sizes = [16, 32, 64, 128, 256];
    let config = StudyConfig::generate_size_sweep(
        "Threshold Size Sweep".to_string(),
        &grid_sizes,
        1000,
        Some(DEFAULT_SEED),
    );

    match config.to_file(output_file) {
        Ok(_) => {
            println!("✅ Study configuration generated: {}", output_file);
            println!("📊 Total cases: {}\n", config.cases.len());
            true
        }
        Err(e) => {
            println!("❌ Error generating config: {}", e);
            false
        }
    }
}

fn list_cases(args: &[String]) -> bool {
    let Some(config_file) = args.first() else {
        println!("❌ Error: Please specify study configuration file");
        println!("Usage: cargo run --bin study_runner list <config_file.toml>");
        return false;
    };

    match load(config_file) {
        Some(config) => {
            let dir = output_dir(&config);
            StudyRunner::new(config, dir).list_cases();
            true
        }
        None => false,
    }
}

fn run_case(args: &[String]) -> bool {
    if args.len() < 2 {
        println!("❌ Error: Please specify config file and case ID");
        println!("Usage: cargo run --bin study_runner run <config_file.toml> <case_id>");
        return false;
    }

    let config_file = &args[0];
    let case_id = &args[1];

    let Some(config) = load(config_file) else {
        return false;
    };
    start_pool();
    let dir = output_dir(&config);
    let runner = StudyRunner::new(config, dir);

    match runner.run_case(case_id) {
        Ok(_) => {
            println!("\n✅ Case '{}' completed successfully!\n", case_id);
            true
        }
        Err(e) => {
            println!("❌ Error running case: {}\n", e);
            false
        }
    }
}

fn run_all_cases(args: &[String]) -> bool {
    let Some(config_file) = args.first() else {
        println!("❌ Error: Please specify study configuration file");
        println!("Usage: cargo run --bin study_runner run-all <config_file.toml>");
        return false;
    };

    let Some(config) = load(config_file) else {
        return false;
    };
    start_pool();
    let dir = output_dir(&config);
    let runner = StudyRunner::new(config, dir);

    match runner.run_all() {
        Ok(_) => true,
        Err(e) => {
            println!("❌ Error running study: {}\n", e);
            false
        }
    }
}
