//! Core domain types for aws-costs
//!
//! These types provide strong typing for the handful of concepts the tool
//! works with: a validated date range, the report request sent to Cost
//! Explorer, and the per-month cost records it returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, ordered date range.
///
/// Invariant: `start < end` once [`crate::range::validate_range`] has run.
/// The end date is exclusive when sent to the Cost Explorer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day covered by the report
    pub start: NaiveDate,
    /// Day after the last day covered by the report
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new DateRange. Callers are expected to have validated the
    /// ordering already; this is a plain constructor.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Time-bucket size for the Cost Explorer report.
///
/// Only monthly reporting is exposed today; the enum keeps the wire value in
/// one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Granularity {
    Monthly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "MONTHLY"),
        }
    }
}

/// Parameters for one report request
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Validated date range (end exclusive)
    pub range: DateRange,
    /// Bucket size for returned records
    pub granularity: Granularity,
}

impl ReportRequest {
    /// Monthly blended-cost report for the given range
    pub fn monthly(range: DateRange) -> Self {
        Self {
            range,
            granularity: Granularity::Monthly,
        }
    }
}

/// One reporting interval returned by the billing API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPeriod {
    /// First day of the period
    pub start: NaiveDate,
    /// Day after the last day of the period
    pub end: NaiveDate,
    /// Blended cost as the decimal string the API reports
    pub amount: String,
    /// Currency unit reported by the API, e.g. "USD"
    pub unit: String,
    /// Whether the API marked this period as an estimate
    pub estimated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_display() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 2, 1));
        assert_eq!(range.to_string(), "2023-01-01 -> 2023-02-01");
    }

    #[test]
    fn test_granularity_wire_value() {
        assert_eq!(Granularity::Monthly.to_string(), "MONTHLY");
        assert_eq!(
            serde_json::to_string(&Granularity::Monthly).unwrap(),
            "\"MONTHLY\""
        );
    }
}
