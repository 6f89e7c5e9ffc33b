use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::models::{Brand, Category, ProductRecord, RawProduct};
use crate::parsers::parse_price;

/// Per-record failure. The record is skipped and the reason surfaced in
/// diagnostics; nothing here aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("product name empty after trimming")]
    EmptyName,
    #[error("unknown brand token {0:?}")]
    UnknownBrand(String),
    #[error("unknown category token {0:?}")]
    UnknownCategory(String),
}

/// Build a canonical product record from one raw extraction.
///
/// Price candidates that fail to parse are dropped with a warning;
/// candidates with no digits are dropped silently. A record with no
/// usable price at all is still valid, it just carries no pricing
/// information.
pub fn normalize(raw: RawProduct) -> Result<ProductRecord, NormalizeError> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(NormalizeError::EmptyName);
    }

    let brand = Brand::from_token(&raw.brand_token)
        .ok_or_else(|| NormalizeError::UnknownBrand(raw.brand_token.clone()))?;
    let category = Category::from_token(&raw.category_token)
        .ok_or_else(|| NormalizeError::UnknownCategory(raw.category_token.clone()))?;

    let mut amounts = Vec::new();
    for text in &raw.price_texts {
        match parse_price(text) {
            Ok(Some(amount)) => amounts.push(amount),
            Ok(None) => {}
            Err(e) => warn!("Dropping price candidate {:?} for {:?}: {}", text, name, e),
        }
    }

    let (msrp, sale_price) = select_prices(amounts);

    Ok(ProductRecord {
        name,
        brand,
        category,
        msrp,
        sale_price,
    })
}

/// Regular price is the highest listed amount; sale price is the lowest
/// of the rest. A lone amount is the MSRP with no sale price.
fn select_prices(amounts: Vec<Decimal>) -> (Option<Decimal>, Option<Decimal>) {
    match amounts.as_slice() {
        [] => (None, None),
        [only] => (Some(*only), None),
        _ => {
            let mut rest = amounts;
            let mut max_idx = 0;
            for (i, amount) in rest.iter().enumerate() {
                if *amount > rest[max_idx] {
                    max_idx = i;
                }
            }
            let msrp = rest.swap_remove(max_idx);
            let sale = rest.iter().min().copied();
            (Some(msrp), sale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn raw(name: &str, prices: &[&str]) -> RawProduct {
        RawProduct {
            name: name.to_string(),
            brand_token: "Bowflex".to_string(),
            category_token: "Treadmills".to_string(),
            price_texts: prices.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn max_is_msrp_and_min_of_rest_is_sale() {
        let record = normalize(raw("Treadmill 22", &["$999", "$799", "$849"])).unwrap();
        assert_eq!(record.msrp, Some(dec("999")));
        assert_eq!(record.sale_price, Some(dec("799")));
    }

    #[test]
    fn single_price_is_msrp_only() {
        let record = normalize(raw("Treadmill 10", &["$999"])).unwrap();
        assert_eq!(record.msrp, Some(dec("999")));
        assert_eq!(record.sale_price, None);
    }

    #[test]
    fn no_prices_is_still_a_valid_record() {
        let record = normalize(raw("Treadmill 7", &[])).unwrap();
        assert_eq!(record.msrp, None);
        assert_eq!(record.sale_price, None);
    }

    #[test]
    fn duplicate_maximum_sells_at_msrp() {
        let record = normalize(raw("SelectTech 552", &["$999.00", "$999.00"])).unwrap();
        assert_eq!(record.msrp, Some(dec("999.00")));
        assert_eq!(record.sale_price, Some(dec("999.00")));
    }

    #[test]
    fn unparseable_candidates_are_dropped_not_fatal() {
        let record = normalize(raw("Max Trainer M6", &["12.34.56", "Call for price", "$1,799"]))
            .unwrap();
        assert_eq!(record.msrp, Some(dec("1799")));
        assert_eq!(record.sale_price, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(normalize(raw("   ", &["$999"])), Err(NormalizeError::EmptyName));
    }

    #[test]
    fn unknown_brand_is_rejected_not_defaulted() {
        let mut r = raw("Treadmill 10", &["$999"]);
        r.brand_token = "AcmeCo".to_string();
        assert_eq!(
            normalize(r),
            Err(NormalizeError::UnknownBrand("AcmeCo".to_string()))
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut r = raw("Treadmill 10", &["$999"]);
        r.category_token = "Rowers".to_string();
        assert_eq!(
            normalize(r),
            Err(NormalizeError::UnknownCategory("Rowers".to_string()))
        );
    }

    #[test]
    fn brand_and_category_tokens_match_case_insensitively() {
        let mut r = raw("IC4 Bike", &["$899"]);
        r.brand_token = "schwinn".to_string();
        r.category_token = "indoor cycling bikes".to_string();
        let record = normalize(r).unwrap();
        assert_eq!(record.brand, Brand::Schwinn);
        assert_eq!(record.category, Category::IndoorCyclingBike);
    }
}
