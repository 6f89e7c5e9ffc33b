use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{Config, SiteConfig};
use crate::models::{RawProduct, Site};
use crate::utils::http::fetch_page;

mod bowflex;
mod horizon;
pub mod listing;
mod schwinn;

pub use bowflex::BowflexScraper;
pub use horizon::HorizonScraper;
pub use schwinn::SchwinnScraper;

/// Raw extractions from one site/category page, in page order.
#[derive(Debug, Clone)]
pub struct SourceYield {
    pub site: Site,
    pub category_token: String,
    pub raws: Vec<RawProduct>,
}

#[async_trait]
pub trait ProductScraper: Send + Sync {
    async fn scrape(&self, client: &Client) -> Result<Vec<SourceYield>>;
    fn site_config(&self) -> &SiteConfig;
    fn site_key(&self) -> Site;
}

/// Static scraper registry, one entry per monitored site.
pub fn registry(config: &Arc<Config>) -> Vec<Box<dyn ProductScraper>> {
    vec![
        Box::new(BowflexScraper::new(config.clone())),
        Box::new(HorizonScraper::new(config.clone())),
        Box::new(SchwinnScraper::new(config.clone())),
    ]
}

/// Walk a site's configured category pages in order, extracting raw
/// products from each. A failed fetch yields an empty category, never an
/// aborted site.
pub(crate) async fn scrape_categories(
    site: Site,
    site_config: &SiteConfig,
    client: &Client,
    delay_secs: u64,
) -> Vec<SourceYield> {
    let mut yields = Vec::new();

    for category in &site_config.categories {
        let url = format!("{}{}", site_config.base_url, category.path);

        // Pause between requests to avoid rate limiting
        if delay_secs > 0 {
            tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        }

        let raws = match fetch_page(client, &url).await {
            Ok(html) => listing::extract_listing(&html, &site_config.brand_token, &category.token),
            Err(e) => {
                warn!("Skipping {} {}: {}", site_config.name, category.token, e);
                Vec::new()
            }
        };

        info!(
            "Found {} product blocks on {} ({})",
            raws.len(),
            site_config.name,
            category.token
        );

        yields.push(SourceYield {
            site,
            category_token: category.token.clone(),
            raws,
        });
    }

    yields
}
