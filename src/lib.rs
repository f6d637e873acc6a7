//! Downloads the Prague municipal police activity report (nested JSON),
//! flattens and cleans it, and writes it out as a CSV table.

pub mod changelog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod flatten;
pub mod process;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::PipelineConfig;
pub use error::EtlError;
pub use types::{FlatRecord, Node, NormalizedRecord, RawDataset, Scalar};

use reqwest::blocking::Client;
use tracing::info;

/// Rows written by one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub flattened: usize,
    pub written: usize,
}

/// Download, convert and write the dataset described by `config`.
/// The changelog is not touched here.
pub fn run(client: &Client, config: &PipelineConfig) -> Result<RunSummary, EtlError> {
    info!(url = %config.source_url, "downloading data");
    let raw = fetch::fetch_dataset(client, &config.source_url)?;
    info!("data downloaded");

    info!("converting data");
    let flat = flatten::flatten(raw)?;
    let flattened = flat.len();
    let table = process::normalize(flat);

    write::write_table(&table, &config.output_path, config.delimiter)?;
    info!(
        path = %config.output_path.display(),
        rows = table.len(),
        "data converted and saved"
    );

    Ok(RunSummary {
        flattened,
        written: table.len(),
    })
}
