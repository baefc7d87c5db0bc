use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ClimateError, Result};

/// One row of the `measurement` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

/// Inclusive date filter. An absent `end` leaves the range open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ClimateError::InvalidRange { start, end });
        }

        Ok(Self {
            start,
            end: Some(end),
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} to {}", self.start, end),
            None => write!(f, "{} onwards", self.start),
        }
    }
}
