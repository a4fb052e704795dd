//! Report fetcher module
//!
//! Drives the GetCostAndUsage call for a validated range, following
//! `NextPageToken` pagination until the report is complete, and converts the
//! wire records into [`CostPeriod`]s.

use chrono::NaiveDate;
use tracing::debug;

use crate::client::{BillingApi, CostAndUsageRequest, ResultByTime, TimePeriod, BLENDED_COST};
use crate::error::{AwsCostsError, Result};
use crate::types::{CostPeriod, ReportRequest};

/// Fetches a complete cost report through a [`BillingApi`]
pub struct ReportFetcher<A: BillingApi> {
    api: A,
}

impl<A: BillingApi> ReportFetcher<A> {
    /// Create a new ReportFetcher
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch all cost periods for the request, across pages
    pub async fn fetch(&self, request: &ReportRequest) -> Result<Vec<CostPeriod>> {
        let mut periods = Vec::new();
        let mut next_page_token = None;

        loop {
            let wire = CostAndUsageRequest {
                time_period: TimePeriod {
                    start: request.range.start.to_string(),
                    end: request.range.end.to_string(),
                },
                granularity: request.granularity,
                metrics: vec![BLENDED_COST.to_string()],
                next_page_token,
            };

            let response = self.api.get_cost_and_usage(&wire).await?;
            debug!("received {} result(s)", response.results_by_time.len());

            for result in response.results_by_time {
                periods.push(convert_result(result)?);
            }

            match response.next_page_token {
                Some(token) => {
                    debug!("following NextPageToken");
                    next_page_token = Some(token);
                }
                None => break,
            }
        }

        Ok(periods)
    }
}

fn convert_result(result: ResultByTime) -> Result<CostPeriod> {
    let metric = result.total.get(BLENDED_COST).ok_or_else(|| {
        AwsCostsError::Api(format!(
            "response is missing the {BLENDED_COST} total for {} -> {}",
            result.time_period.start, result.time_period.end
        ))
    })?;

    Ok(CostPeriod {
        start: parse_response_date(&result.time_period.start)?,
        end: parse_response_date(&result.time_period.end)?,
        amount: metric.amount.clone(),
        unit: metric.unit.clone(),
        estimated: result.estimated,
    })
}

fn parse_response_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AwsCostsError::Api(format!("unexpected date '{raw}' in response")))
}
