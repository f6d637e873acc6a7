// src/fetch.rs

use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::EtlError;
use crate::types::RawDataset;

fn get_text(client: &Client, url: &Url) -> Result<String, EtlError> {
    debug!("Fetching text from {}", url);
    let fetch_err = |source: reqwest::Error| EtlError::Fetch {
        url: url.to_string(),
        source,
    };
    client
        .get(url.clone())
        .send()
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?
        .text()
        .map_err(fetch_err)
}

/// Download the JSON document at `url` and convert it into a dataset tree.
#[instrument(level = "info", skip(client))]
pub fn fetch_dataset(client: &Client, url: &str) -> Result<RawDataset, EtlError> {
    let parsed = Url::parse(url).map_err(|source| EtlError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    let body = get_text(client, &parsed)?;
    debug!(bytes = body.len(), "downloaded body");
    RawDataset::from_json_str(url, &body)
}
