use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("direction must be -1 or 1, got {0}")]
    InvalidDirection(i64),
}

/// Step applied to a calendar's period by a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl TryFrom<i64> for Direction {
    type Error = CalendarError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Back),
            1 => Ok(Direction::Forward),
            other => Err(CalendarError::InvalidDirection(other)),
        }
    }
}

/// The month a calendar widget currently shows.
///
/// Stored as the first day of that month so every period is a real
/// Gregorian month; `month()` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPeriod {
    first: NaiveDate,
}

impl DisplayPeriod {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    /// One-based month, as used by the attendance API path.
    pub fn api_month(&self) -> u32 {
        self.first.month()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month() as usize], self.year())
    }

    /// Weekday index of day 1, 0 = Sunday.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        self.days().count() as u32
    }

    /// Every date of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first
            .iter_days()
            .take_while(move |date| date.month() == month)
    }

    /// Period one month away, or `None` past the representable date range.
    pub fn shifted(&self, direction: Direction) -> Option<Self> {
        let first = match direction {
            Direction::Forward => self.first.checked_add_months(Months::new(1)),
            Direction::Back => self.first.checked_sub_months(Months::new(1)),
        }?;
        Some(Self { first })
    }
}
