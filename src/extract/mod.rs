// src/extract/mod.rs

pub mod page;
pub mod table;

use anyhow::Result;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

pub use page::fetch_page;
pub use table::{bank_name_link, parse_bank_table, MISSING_PLACEHOLDER};

use crate::model::ExtractedBank;

/// Fetch the page at `url` and pull the bank rows out of its first table.
#[instrument(level = "info", skip_all, fields(url = %url))]
pub async fn extract(client: &Client, url: &Url) -> Result<Vec<ExtractedBank>> {
    let html = fetch_page(client, url).await?;
    let banks = parse_bank_table(&html)?;
    info!(rows = banks.len(), "extracted banks");
    Ok(banks)
}
