use reqwest::Client;
use tracing::{error, info, warn};

use crate::models::{ProductRecord, Site};
use crate::parsers::{normalize, NormalizeError};
use crate::scrapers::{ProductScraper, SourceYield};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// The page yielded raw product blocks; `kept` of `extracted` survived
    /// normalization.
    Ok { extracted: usize, kept: usize },
    /// No raw products at all, typically a changed page structure or
    /// blocked access. Not an error; the caller decides about fallback.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub site: Site,
    pub category_token: String,
    pub status: SourceStatus,
    pub failures: Vec<NormalizeError>,
}

/// Everything one run produces: records in source order plus per-source
/// diagnostics, skipped-record reasons included.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<ProductRecord>,
    pub reports: Vec<SourceReport>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize every raw extraction, preserving source order (site, then
/// category, then page order). Pure apart from log output, so identical
/// input always yields an identical catalog.
pub fn aggregate(yields: Vec<SourceYield>) -> Catalog {
    let mut catalog = Catalog::default();

    for source in yields {
        if source.raws.is_empty() {
            catalog.reports.push(SourceReport {
                site: source.site,
                category_token: source.category_token,
                status: SourceStatus::Empty,
                failures: Vec::new(),
            });
            continue;
        }

        let extracted = source.raws.len();
        let mut kept = 0;
        let mut failures = Vec::new();

        for raw in source.raws {
            match normalize(raw) {
                Ok(record) => {
                    catalog.records.push(record);
                    kept += 1;
                }
                Err(e) => {
                    warn!(
                        "Skipping record from {} ({}): {}",
                        source.site.key(),
                        source.category_token,
                        e
                    );
                    failures.push(e);
                }
            }
        }

        catalog.reports.push(SourceReport {
            site: source.site,
            category_token: source.category_token,
            status: SourceStatus::Ok { extracted, kept },
            failures,
        });
    }

    catalog
}

/// Scrape the whole registry, one site at a time, and aggregate. A
/// scraper-level error marks all of that site's categories empty and the
/// run continues.
pub async fn collect(scrapers: &[Box<dyn ProductScraper>], client: &Client) -> Catalog {
    let mut yields = Vec::new();

    for scraper in scrapers {
        let site_config = scraper.site_config();
        info!("Processing site: {}", site_config.name);

        match scraper.scrape(client).await {
            Ok(mut site_yields) => yields.append(&mut site_yields),
            Err(e) => {
                error!("Scraper for {} failed: {}", site_config.name, e);
                for category in &site_config.categories {
                    yields.push(SourceYield {
                        site: scraper.site_key(),
                        category_token: category.token.clone(),
                        raws: Vec::new(),
                    });
                }
            }
        }
    }

    aggregate(yields)
}
