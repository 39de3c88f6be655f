/// Contract violations raised by the grid, the union-find and the trial driver.
///
/// Every variant is a caller error: inputs are never clamped or ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Union-find universe must hold at least one element
    UniverseSize { n: usize },
    /// Grid side length must be at least 1
    GridSize { n: usize },
    /// Row or column outside `[1, n]`
    SiteOutOfRange { row: usize, col: usize, n: usize },
    /// Monte Carlo driver needs at least one trial
    TrialCount { trials: usize },
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniverseSize { n } => {
                write!(f, "Union-find size {} must be greater than zero", n)
            }
            Self::GridSize { n } => {
                write!(f, "Grid size {} must be greater than zero", n)
            }
            Self::SiteOutOfRange { row, col, n } => {
                write!(f, "Site ({}, {}) not between 1 and {}", row, col, n)
            }
            Self::TrialCount { trials } => {
                write!(f, "Trial count {} must be greater than zero", trials)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
