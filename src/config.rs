// src/config.rs

use std::path::PathBuf;

/// Monthly activity report of the Prague municipal police.
static DEFAULT_SOURCE_URL: &str = "https://mppraha.info/opendata/cinnost/2024OR.json";
static DEFAULT_OUTPUT_PATH: &str = "data/output/MP_Praha_2024.csv";
static DEFAULT_CHANGELOG_PATH: &str = "README.md";

/// Where to read from and where to write to. Passed explicitly to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source_url: String,
    pub output_path: PathBuf,
    pub changelog_path: PathBuf,
    /// Field separator of the output table.
    pub delimiter: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            changelog_path: PathBuf::from(DEFAULT_CHANGELOG_PATH),
            delimiter: b',',
        }
    }
}
