//! Fixed dashboard settings.

use std::path::PathBuf;

pub const INPUT_PATH: &str = "group_project.csv";
pub const EXPORT_PATH: &str = "sampled_trade_data.csv";
pub const SAMPLE_SIZE: usize = 3001;
pub const SAMPLE_SEED: u64 = 55004;

/// Paths and sampling parameters for one dashboard session.
///
/// The application always runs with [`DashboardConfig::default`]; the struct
/// exists so the pipeline can be driven with other values under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub input_path: PathBuf,
    pub export_path: PathBuf,
    pub sample_size: usize,
    pub seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            export_path: PathBuf::from(EXPORT_PATH),
            sample_size: SAMPLE_SIZE,
            seed: SAMPLE_SEED,
        }
    }
}
