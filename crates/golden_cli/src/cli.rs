use clap::{ArgGroup, Parser};
use golden_core::Selection;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "golden-verify")]
#[command(
    version,
    about = "Verify results from \"The Golden Point in A5 Modular Flavor Symmetry\""
)]
#[command(group(
    ArgGroup::new("selection")
        .args(["theorem1", "matrix", "eigenvalues", "hierarchy", "all"])
        .multiple(false)
))]
pub struct Cli {
    /// Verify only Theorem 1 (Y ratios)
    #[arg(long)]
    pub theorem1: bool,

    /// Verify only the M₀ matrix construction
    #[arg(long)]
    pub matrix: bool,

    /// Verify only the eigenvalue analysis
    #[arg(long)]
    pub eigenvalues: bool,

    /// Verify only the hierarchical patterns
    #[arg(long)]
    pub hierarchy: bool,

    /// Run the complete verification suite (default)
    #[arg(long)]
    pub all: bool,

    /// Suppress detailed output
    #[arg(long, short)]
    pub quiet: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// JSON file overriding the default tolerances
    #[arg(long, env = "GOLDEN_VERIFY_SETTINGS")]
    pub settings: Option<PathBuf>,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        if self.theorem1 {
            Selection::Theorem1
        } else if self.matrix {
            Selection::Matrix
        } else if self.eigenvalues {
            Selection::Eigenvalues
        } else if self.hierarchy {
            Selection::Hierarchy
        } else {
            Selection::All
        }
    }
}
