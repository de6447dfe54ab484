use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaveError {
    #[error("Please select from and to dates")]
    MissingDates,

    #[error("Invalid date")]
    InvalidDate,

    #[error("From date cannot be after to date")]
    ReversedRange,
}

fn default_leave_type() -> String {
    "casual".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveForm {
    #[serde(default)]
    pub from_date: String,
    #[serde(default)]
    pub to_date: String,
    #[serde(default = "default_leave_type")]
    pub leave_type: String,
    #[serde(default)]
    pub reason: String,
}

impl LeaveForm {
    /// Checks the fields the backend expects before the form is forwarded.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), LeaveError> {
        let from = self.from_date.trim();
        let to = self.to_date.trim();
        if from.is_empty() || to.is_empty() {
            return Err(LeaveError::MissingDates);
        }

        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if from > to {
            return Err(LeaveError::ReversedRange);
        }

        Ok((from, to))
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, LeaveError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| LeaveError::InvalidDate)
}
