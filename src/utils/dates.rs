use chrono::{Months, NaiveDate};

use crate::error::{ClimateError, Result};
use crate::models::DateRange;
use crate::utils::constants::{DATE_FORMAT, DERIVED_WINDOW_MONTHS};

/// Parse a `YYYY-MM-DD` date taken from a URL path segment.
///
/// The year must be exactly four digits with no sign, so the bound value
/// always compares correctly against the text `date` column.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if !has_date_shape(input) {
        return Err(ClimateError::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ClimateError::InvalidDate(input.to_string()))
}

/// `dddd-d[d]-d[d]`, ASCII digits only
fn has_date_shape(input: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = input.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

/// The window of `DERIVED_WINDOW_MONTHS` months ending on `last_date`.
pub fn trailing_year(last_date: NaiveDate) -> Result<DateRange> {
    let start = last_date
        .checked_sub_months(Months::new(DERIVED_WINDOW_MONTHS))
        .ok_or_else(|| ClimateError::InvalidDate(last_date.to_string()))?;

    DateRange::between(start, last_date)
}
