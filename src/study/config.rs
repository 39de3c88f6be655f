/// Study configuration structures
use crate::sampler::RandomSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Name of the study
    pub study_name: String,

    /// Base seed for every case; entropy-seeded when omitted
    #[serde(default)]
    pub seed: Option<u64>,

    /// Spread trials of each case over the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Generator used by every trial
    #[serde(default)]
    pub rng: RandomSource,

    /// Cases to execute
    pub cases: Vec<StudyCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyCase {
    /// Unique case ID
    pub case_id: String,

    /// Side length of the n-by-n grid
    pub grid_size: usize,

    /// Number of independent trials
    pub trials: usize,
}

impl StudyCase {
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            case_id: format!("N{}_T{}", grid_size, trials),
            grid_size,
            trials,
        }
    }
}

impl StudyConfig {
    /// Generate one case per grid size, all with the same trial count
    pub fn generate_size_sweep(
        study_name: String,
        grid_sizes: &[usize],
        trials: usize,
        seed: Option<u64>,
    ) -> Self {
        let cases = grid_sizes
            .iter()
            .map(|&n| StudyCase::new(n, trials))
            .collect();

        StudyConfig {
            study_name,
            seed,
            parallel: true,
            rng: RandomSource::default(),
            cases,
        }
    }

    /// Study name reduced to a single safe path component
    pub fn output_dir_name(&self) -> String {
        let name: String = self
            .study_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        if name.is_empty() {
            "study".to_string()
        } else {
            name
        }
    }

    pub fn find_case(&self, case_id: &str) -> Option<&StudyCase> {
        self.cases.iter().find(|c| c.case_id == case_id)
    }

    /// Load study configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save study configuration to TOML file
    pub fn to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
