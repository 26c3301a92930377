use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// GET `url` and return the body as text. Non-2xx responses are errors.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    debug!("Fetching page from {}", url);
    let body = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))?;
    debug!(bytes = body.len(), "fetched page");
    Ok(body)
}
