//! CLI interface for aws-costs
//!
//! Defines the command-line interface using clap. The tool is a single
//! command; dates default to the current month when omitted.
//!
//! # Example
//!
//! ```bash
//! # Costs for January 2023
//! aws-costs --start 2023-01-01 --end 2023-02-01
//!
//! # Current month to date, in eu-west-1, with debug logging
//! aws-costs -r eu-west-1 -vv
//! ```

use chrono::NaiveDate;
use clap::Parser;

/// Show blended cost for a given time frame, on a per-month basis.
///
/// Credentials are passed solely via the AWS_ACCESS_KEY_ID and
/// AWS_SECRET_ACCESS_KEY environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "aws-costs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Start date for report (YYYY-MM-DD) [default: first day of this month]
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// End date for report, exclusive (YYYY-MM-DD) [default: today]
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// AWS Region
    #[arg(long, short = 'r', default_value = "us-east-1")]
    pub region: String,

    /// Currency code used when formatting amounts
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Timeout in seconds for the Cost Explorer call
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Repeat for extra visibility (-v: info, -vv: debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Used as a clap value parser, so malformed dates are reported through
/// clap's usage-error path. The message is fixed.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    // %Y-%m-%d alone accepts unpadded fields like "2023-1-1"; require the
    // canonical zero-padded shape before handing off to chrono.
    let well_formed = raw.len() == 10
        && raw
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });

    if !well_formed {
        tracing::debug!("Entered date: {raw}");
        return Err("Date format must be YYYY-MM-DD".to_string());
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => {
            tracing::debug!("{date} is a valid YYYY-MM-DD string");
            Ok(date)
        }
        Err(_) => {
            tracing::debug!("Entered date: {raw}");
            Err("Date format must be YYYY-MM-DD".to_string())
        }
    }
}
