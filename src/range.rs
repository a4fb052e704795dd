//! Date-range validation
//!
//! Enforces the business rules on a (start, end) pair before it is sent to
//! the Cost Explorer API:
//!
//! - start and end may not be the same day, with one exception: on the first
//!   of the month the tool offers to show last month's cost instead, since
//!   the default range (month start to today) would otherwise be empty
//! - start must come strictly before end
//!
//! The interactive prompt is injected via the [`Confirm`] trait so both
//! branches can be exercised in tests without a terminal.

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::error::{AwsCostsError, Result};
use crate::types::DateRange;

/// Capability for asking the user a yes/no question
pub trait Confirm {
    /// Ask the question; `Ok(true)` means the user accepted.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal-backed confirmation, defaulting to yes
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .show_default(true)
            .interact()
            .map_err(|e| match e {
                dialoguer::Error::IO(io) => AwsCostsError::Io(io),
            })
    }
}

/// First calendar day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

const SAME_DAY_PROMPT: &str =
    "Today is the first of the month. Would you like to see last month's cost, instead?";

/// Validate the range provided will not cause AWS to vomit.
///
/// `today` is the current wall-clock date in UTC, passed in by the caller so
/// the first-of-month branch is deterministic under test. Returns the
/// possibly start-adjusted range; after a successful return `start < end`
/// holds.
pub fn validate_range(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
    confirm: &dyn Confirm,
) -> Result<DateRange> {
    debug!("start_date: {start}");
    debug!("end_date: {end}");

    let mut start = start;

    if start == end {
        if start == month_start(today) && confirm.confirm(SAME_DAY_PROMPT)? {
            start = month_start(today)
                .checked_sub_months(Months::new(1))
                .expect("one month before a month start is representable");
            debug!("start_date modified, now {start}");
        } else {
            return Err(AwsCostsError::InvalidRange(
                "Start and end dates cannot be the same day.".to_string(),
            ));
        }
    }

    if start >= end {
        return Err(AwsCostsError::InvalidRange(
            "Start date must come before end date".to_string(),
        ));
    }

    Ok(DateRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-answer stub; panics if the prompt fires when `expected` is false
    struct StubConfirm {
        answer: bool,
        expected: bool,
    }

    impl StubConfirm {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                expected: true,
            }
        }

        fn never() -> Self {
            Self {
                answer: false,
                expected: false,
            }
        }
    }

    impl Confirm for StubConfirm {
        fn confirm(&self, prompt: &str) -> Result<bool> {
            assert!(self.expected, "unexpected prompt: {prompt}");
            Ok(self.answer)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_range_unchanged() {
        let range = validate_range(
            date(2023, 1, 1),
            date(2023, 2, 1),
            date(2023, 1, 15),
            &StubConfirm::never(),
        )
        .unwrap();
        assert_eq!(range.start, date(2023, 1, 1));
        assert_eq!(range.end, date(2023, 2, 1));
    }

    #[test]
    fn test_same_day_mid_month_fails_without_prompt() {
        let err = validate_range(
            date(2023, 1, 15),
            date(2023, 1, 15),
            date(2023, 1, 15),
            &StubConfirm::never(),
        )
        .unwrap_err();
        assert!(matches!(err, AwsCostsError::InvalidRange(_)));
        assert!(err.to_string().contains("cannot be the same day"));
    }

    #[test]
    fn test_first_of_month_accepted_shifts_back_one_month() {
        let range = validate_range(
            date(2023, 3, 1),
            date(2023, 3, 1),
            date(2023, 3, 1),
            &StubConfirm::answering(true),
        )
        .unwrap();
        assert_eq!(range.start, date(2023, 2, 1));
        assert_eq!(range.end, date(2023, 3, 1));
    }

    #[test]
    fn test_first_of_month_declined_fails() {
        let err = validate_range(
            date(2023, 3, 1),
            date(2023, 3, 1),
            date(2023, 3, 1),
            &StubConfirm::answering(false),
        )
        .unwrap_err();
        assert!(matches!(err, AwsCostsError::InvalidRange(_)));
    }

    #[test]
    fn test_first_of_month_only_applies_to_current_month() {
        // Same-day range on the first of a *different* month gets no prompt
        let err = validate_range(
            date(2023, 2, 1),
            date(2023, 2, 1),
            date(2023, 3, 15),
            &StubConfirm::never(),
        )
        .unwrap_err();
        assert!(matches!(err, AwsCostsError::InvalidRange(_)));
    }

    #[test]
    fn test_reversed_range_fails() {
        let err = validate_range(
            date(2023, 2, 1),
            date(2023, 1, 1),
            date(2023, 2, 15),
            &StubConfirm::never(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Start date must come before"));
    }

    #[test]
    fn test_january_shift_crosses_year_boundary() {
        let range = validate_range(
            date(2024, 1, 1),
            date(2024, 1, 1),
            date(2024, 1, 1),
            &StubConfirm::answering(true),
        )
        .unwrap();
        assert_eq!(range.start, date(2023, 12, 1));
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(date(2023, 7, 19)), date(2023, 7, 1));
        assert_eq!(month_start(date(2023, 7, 1)), date(2023, 7, 1));
    }
}
