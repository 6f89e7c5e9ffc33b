use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known brands, one per monitored site. Never free text: an unrecognized
/// source token is a normalization failure, not a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Bowflex,
    #[serde(rename = "Horizon Fitness")]
    HorizonFitness,
    Schwinn,
}

impl Brand {
    pub fn label(&self) -> &'static str {
        match self {
            Brand::Bowflex => "Bowflex",
            Brand::HorizonFitness => "Horizon Fitness",
            Brand::Schwinn => "Schwinn",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "bowflex" => Some(Brand::Bowflex),
            "horizon fitness" | "horizon" => Some(Brand::HorizonFitness),
            "schwinn" | "schwinn fitness" => Some(Brand::Schwinn),
            _ => None,
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Monitored product categories. Labels match the source sites' own
/// category names, which are also the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Treadmills")]
    Treadmill,
    #[serde(rename = "Indoor Cycling Bikes")]
    IndoorCyclingBike,
    #[serde(rename = "Home Gyms")]
    HomeGym,
    #[serde(rename = "Ellipticals and Max Trainer")]
    EllipticalOrMaxTrainer,
    #[serde(rename = "Adjustable Dumbbells")]
    AdjustableDumbbell,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Treadmill => "Treadmills",
            Category::IndoorCyclingBike => "Indoor Cycling Bikes",
            Category::HomeGym => "Home Gyms",
            Category::EllipticalOrMaxTrainer => "Ellipticals and Max Trainer",
            Category::AdjustableDumbbell => "Adjustable Dumbbells",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "treadmills" | "treadmill" => Some(Category::Treadmill),
            "indoor cycling bikes" | "indoor cycling bike" => Some(Category::IndoorCyclingBike),
            "home gyms" | "home gym" => Some(Category::HomeGym),
            "ellipticals and max trainer" | "ellipticals" => Some(Category::EllipticalOrMaxTrainer),
            "adjustable dumbbells" | "adjustable dumbbell" => Some(Category::AdjustableDumbbell),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Unvalidated fields pulled from one product block on a listing page,
/// prior to normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProduct {
    pub name: String,
    pub brand_token: String,
    pub category_token: String,
    pub price_texts: Vec<String>,
}

/// Canonical product record. Immutable after construction; prices are
/// fixed-point decimals, absent when the source showed none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub brand: Brand,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msrp: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brand_token_matching_is_case_insensitive() {
        assert_eq!(Brand::from_token("BOWFLEX"), Some(Brand::Bowflex));
        assert_eq!(Brand::from_token("  horizon fitness "), Some(Brand::HorizonFitness));
        assert_eq!(Brand::from_token("AcmeCo"), None);
    }

    #[test]
    fn category_token_matching_accepts_source_labels() {
        assert_eq!(Category::from_token("Treadmills"), Some(Category::Treadmill));
        assert_eq!(
            Category::from_token("ellipticals and max trainer"),
            Some(Category::EllipticalOrMaxTrainer)
        );
        assert_eq!(Category::from_token("Rowing Machines"), None);
    }

    #[test]
    fn display_uses_the_source_labels() {
        assert_eq!(Brand::HorizonFitness.to_string(), "Horizon Fitness");
        assert_eq!(
            Category::EllipticalOrMaxTrainer.to_string(),
            "Ellipticals and Max Trainer"
        );
        assert_eq!(format!("{:<12}", Category::HomeGym), "Home Gyms   ");
    }

    #[test]
    fn absent_prices_are_omitted_from_json() {
        let record = ProductRecord {
            name: "Treadmill 10".to_string(),
            brand: Brand::HorizonFitness,
            category: Category::Treadmill,
            msrp: None,
            sale_price: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Treadmill 10",
                "brand": "Horizon Fitness",
                "category": "Treadmills"
            })
        );
    }
}
