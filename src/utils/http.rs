use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use tracing::warn;

pub fn create_client(user_agent: &str) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(6)
        .build()?;

    Ok(client)
}

/// Fetch one page and return its body. One shot, no retries: a failed
/// source simply yields no products for this run.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed for {}", url))?;

    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        warn!("Access denied (403) for {}. Website may have bot protection.", url);
    }
    if !status.is_success() {
        anyhow::bail!("HTTP error {} fetching {}", status, url);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}
