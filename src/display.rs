use rust_decimal::Decimal;

use crate::aggregator::{Catalog, SourceStatus};
use crate::models::ProductRecord;

/// Format an optional price for display
pub fn format_price(price: Option<Decimal>) -> String {
    let Some(amount) = price else {
        return "N/A".to_string();
    };

    let fixed = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("${}.{}", grouped, frac_part)
}

fn truncate(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > width {
        let mut shortened: String = chars[..width - 2].iter().collect();
        shortened.push_str("..");
        shortened
    } else {
        text.to_string()
    }
}

fn print_row(record: &ProductRecord) {
    println!(
        "{:<40} {:<20} {:<25} {:<12} {:<12}",
        truncate(&record.name, 40),
        record.brand,
        truncate(&record.category.to_string(), 25),
        format_price(record.msrp),
        format_price(record.sale_price),
    );
}

/// Render the catalog as a fixed-width table with a count footer.
pub fn render_table(records: &[ProductRecord]) {
    if records.is_empty() {
        println!("\nNo products found.");
        return;
    }

    println!("\n{}", "=".repeat(100));
    println!(
        "{:<40} {:<20} {:<25} {:<12} {:<12}",
        "Product", "Brand", "Category", "MSRP", "Sale Price"
    );
    println!("{}", "=".repeat(100));

    for record in records {
        print_row(record);
    }

    println!("{}", "=".repeat(100));
    println!("\nTotal products found: {}", records.len());
}

/// Print per-source status lines after the table, skipped-record reasons
/// included.
pub fn render_diagnostics(catalog: &Catalog) {
    let all_clean = catalog.reports.iter().all(|r| {
        matches!(r.status, SourceStatus::Ok { extracted, kept } if extracted == kept)
    });
    if all_clean {
        return;
    }

    println!("\nSource diagnostics:");
    for report in &catalog.reports {
        let status = match report.status {
            SourceStatus::Ok { extracted, kept } => {
                format!("ok ({} extracted, {} kept)", extracted, kept)
            }
            SourceStatus::Empty => "empty".to_string(),
        };
        println!("  {} / {}: {}", report.site.key(), report.category_token, status);
        for failure in &report.failures {
            println!("    skipped: {}", failure);
        }
    }
}
