//! Report formatting
//!
//! Renders cost periods as display lines. Amounts are formatted en_US style
//! (comma digit grouping, two decimals) with the symbol for the configured
//! currency code; the trailing unit label is whatever the API reported.

use colored::Colorize;

use crate::error::{AwsCostsError, Result};
use crate::types::CostPeriod;

/// Render the full report as display lines.
///
/// Each period produces a blank separator line, a range line and a cost
/// line. Estimated periods are marked.
pub fn format_report(periods: &[CostPeriod], currency: &str) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(periods.len() * 3);

    for period in periods {
        let amount: f64 = period.amount.parse().map_err(|_| {
            AwsCostsError::Api(format!("unparseable amount in response: {}", period.amount))
        })?;

        let marker = if period.estimated { " (estimated)" } else { "" };

        lines.push(String::new());
        lines.push(format!(
            "{}",
            format!("Start: {} -> End: {}", period.start, period.end)
                .white()
                .bold()
        ));
        lines.push(format!(
            "Cost: {} {}{marker}",
            format_currency(amount, currency),
            period.unit
        ));
    }

    Ok(lines)
}

/// Format an amount en_US style for the given currency code
pub fn format_currency(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let grouped = group_thousands(cents / 100);
    let fraction = cents % 100;

    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}.{fraction:02}"),
        None => format!("{sign}{currency} {grouped}.{fraction:02}"),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        _ => None,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
