//! aws-costs - Show AWS blended cost for a given time frame
//!
//! This library backs the `aws-costs` binary. It provides:
//! - Strict `YYYY-MM-DD` date parsing and date-range validation, including
//!   the interactive first-of-month shift to last month's report
//! - Environment-sourced AWS credential loading with shape validation
//! - A SigV4-signed Cost Explorer client behind a mockable [`client::BillingApi`]
//!   trait, with `NextPageToken` pagination
//! - Localized currency formatting of the per-month breakdown
//!
//! # Examples
//!
//! ```no_run
//! use aws_costs::{
//!     client::CostExplorerClient,
//!     credentials::Credentials,
//!     report_fetcher::ReportFetcher,
//!     types::{DateRange, ReportRequest},
//! };
//! use chrono::NaiveDate;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> aws_costs::Result<()> {
//!     let credentials = Credentials::from_env()?;
//!     let client = CostExplorerClient::new(credentials, "us-east-1", Duration::from_secs(30))?;
//!     let fetcher = ReportFetcher::new(client);
//!
//!     let range = DateRange::new(
//!         NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
//!     );
//!     let periods = fetcher.fetch(&ReportRequest::monthly(range)).await?;
//!
//!     for line in aws_costs::output::format_report(&periods, "USD")? {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod credentials;
pub mod error;
pub mod exitcode;
pub mod output;
pub mod range;
pub mod report_fetcher;
pub mod sigv4;
pub mod types;

// Re-export commonly used types
pub use error::{AwsCostsError, Result};
pub use types::{CostPeriod, DateRange, Granularity, ReportRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
