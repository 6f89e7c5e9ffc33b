use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::models::Site;
use crate::scrapers::{scrape_categories, ProductScraper, SourceYield};

pub struct SchwinnScraper {
    config: Arc<Config>,
}

impl SchwinnScraper {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProductScraper for SchwinnScraper {
    async fn scrape(&self, client: &Client) -> Result<Vec<SourceYield>> {
        info!("Scraping SchwinnFitness.com...");
        let yields = scrape_categories(
            self.site_key(),
            self.site_config(),
            client,
            self.config.request_delay_secs,
        )
        .await;
        Ok(yields)
    }

    fn site_config(&self) -> &SiteConfig {
        &self.config.sites["schwinn"]
    }

    fn site_key(&self) -> Site {
        Site::Schwinn
    }
}
