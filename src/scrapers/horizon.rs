use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::models::Site;
use crate::scrapers::{scrape_categories, ProductScraper, SourceYield};

pub struct HorizonScraper {
    config: Arc<Config>,
}

impl HorizonScraper {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProductScraper for HorizonScraper {
    async fn scrape(&self, client: &Client) -> Result<Vec<SourceYield>> {
        info!("Scraping HorizonFitness.com...");
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
        &self.config.sites["horizon"]
    }

    fn site_key(&self) -> Site {
        Site::Horizon
    }
}
