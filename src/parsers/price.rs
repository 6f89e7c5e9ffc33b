use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

static AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d[\d,]*(?:\.\d*)?").expect("Invalid amount regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    /// More than one numeric token in the fragment. Callers must split
    /// multi-price fragments into separate candidates before parsing.
    #[error("ambiguous price text ({0} numeric tokens)")]
    Ambiguous(usize),
    #[error("malformed price amount {0:?}")]
    Malformed(String),
}

/// Extract a numeric price from a raw text fragment.
///
/// Currency symbols, thousands separators and surrounding words are
/// stripped. Text with no digit sequence at all ("Call for price", "")
/// is an absent price, not an error. Malformed or ambiguous numeric
/// text is an error, distinct from absence, so callers can log and
/// drop the candidate rather than treat it as zero.
pub fn parse_price(price_text: &str) -> Result<Option<Decimal>, PriceParseError> {
    let tokens: Vec<&str> = AMOUNT_REGEX
        .find_iter(price_text)
        .map(|m| m.as_str())
        .collect();

    match tokens.as_slice() {
        [] => Ok(None),
        [token] => {
            let cleaned = token.replace(',', "");
            // Decimal::from_str accepts a trailing decimal point, so an
            // empty fractional part has to be caught here.
            if cleaned.ends_with('.') {
                return Err(PriceParseError::Malformed(token.to_string()));
            }
            Decimal::from_str(&cleaned)
                .map(Some)
                .map_err(|_| PriceParseError::Malformed(token.to_string()))
        }
        _ => Err(PriceParseError::Ambiguous(tokens.len())),
    }
}
