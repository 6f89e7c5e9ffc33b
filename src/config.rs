use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sites: HashMap<String, SiteConfig>,
    pub user_agent: String,
    pub request_delay_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    pub brand_token: String,
    pub categories: Vec<CategoryPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPage {
    pub token: String,
    pub path: String,
}

fn page(token: &str, path: &str) -> CategoryPage {
    CategoryPage {
        token: token.to_string(),
        path: path.to_string(),
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut sites = HashMap::new();

        sites.insert(
            "bowflex".to_string(),
            SiteConfig {
                name: "Bowflex.com".to_string(),
                base_url: "https://www.bowflex.com".to_string(),
                brand_token: "Bowflex".to_string(),
                categories: vec![
                    page("Treadmills", "/treadmills/"),
                    page("Indoor Cycling Bikes", "/bikes/"),
                    page("Home Gyms", "/strength/"),
                    page("Adjustable Dumbbells", "/selecttech/"),
                    page("Ellipticals and Max Trainer", "/max-trainer/"),
                ],
            },
        );

        sites.insert(
            "horizon".to_string(),
            SiteConfig {
                name: "HorizonFitness.com".to_string(),
                base_url: "https://www.horizonfitness.com".to_string(),
                brand_token: "Horizon Fitness".to_string(),
                categories: vec![
                    page("Treadmills", "/treadmills"),
                    page("Indoor Cycling Bikes", "/bikes"),
                    page("Ellipticals and Max Trainer", "/ellipticals"),
                ],
            },
        );

        sites.insert(
            "schwinn".to_string(),
            SiteConfig {
                name: "SchwinnFitness.com".to_string(),
                base_url: "https://www.schwinnfitness.com".to_string(),
                brand_token: "Schwinn".to_string(),
                categories: vec![
                    page("Treadmills", "/treadmills"),
                    page("Indoor Cycling Bikes", "/bikes"),
                    page("Ellipticals and Max Trainer", "/ellipticals"),
                ],
            },
        );

        Ok(Config {
            sites,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            request_delay_secs: 2,
        })
    }
}
