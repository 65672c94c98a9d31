//! Day arithmetic

use chrono::{Local, NaiveDate};

use crate::config::{REFERENCE_DAY, REFERENCE_MONTH, REFERENCE_YEAR};

pub fn reference_date() -> NaiveDate {
	NaiveDate::from_ymd_opt(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY).unwrap_or(NaiveDate::MIN)
}

/// Whole days from `reference` to `today`; negative when `today` is earlier.
pub fn days_between(reference: NaiveDate, today: NaiveDate) -> i64 {
	today.signed_duration_since(reference).num_days()
}

/// Current local calendar date, time of day discarded
pub fn today() -> NaiveDate {
	Local::now().date_naive()
}
