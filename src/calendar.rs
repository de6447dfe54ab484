use crate::models::{AttendanceMap, AttendanceRecord, AttendanceStatus, Classification, DayCell, MonthGrid};
use crate::period::DisplayPeriod;
use chrono::{Datelike, NaiveDate, Weekday};

/// Which condition wins when a weekend day also carries a present record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationPriority {
    WeekendFirst,
    PresenceFirst,
}

pub const CLASSIFICATION_PRIORITY: ClassificationPriority = ClassificationPriority::WeekendFirst;

pub fn build_grid(
    calendar: &str,
    period: DisplayPeriod,
    attendance: &AttendanceMap,
    today: NaiveDate,
) -> MonthGrid {
    build_grid_with(calendar, period, attendance, today, CLASSIFICATION_PRIORITY)
}

pub fn build_grid_with(
    calendar: &str,
    period: DisplayPeriod,
    attendance: &AttendanceMap,
    today: NaiveDate,
    priority: ClassificationPriority,
) -> MonthGrid {
    let mut days = Vec::with_capacity(period.days_in_month() as usize);
    for date in period.days() {
        let key = date_key(date);
        let record = attendance
            .get(&key)
            .filter(|record| record.status == AttendanceStatus::Present);
        let classification = classify(date, record.is_some(), priority);

        days.push(DayCell {
            day: date.day(),
            tooltip: tooltip(classification, record),
            date: key,
            classification,
            is_today: date == today,
        });
    }

    MonthGrid {
        calendar: calendar.to_string(),
        month: period.month(),
        year: period.year(),
        title: period.title(),
        leading_blanks: period.leading_blanks(),
        days,
    }
}

fn classify(date: NaiveDate, present: bool, priority: ClassificationPriority) -> Classification {
    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    match (priority, weekend, present) {
        (ClassificationPriority::WeekendFirst, true, _) => Classification::Weekend,
        (ClassificationPriority::PresenceFirst, _, true) => Classification::Present,
        (_, true, false) => Classification::Weekend,
        (_, false, true) => Classification::Present,
        (_, false, false) => Classification::Absent,
    }
}

fn tooltip(classification: Classification, record: Option<&AttendanceRecord>) -> String {
    match classification {
        Classification::Weekend => "Weekend".to_string(),
        Classification::Absent => "Absent".to_string(),
        Classification::Present => {
            let mut text = String::from("Present");
            if let Some(login) = record.and_then(|r| r.login_time.as_deref()) {
                text.push_str(" - Login: ");
                text.push_str(login);
            }
            if let Some(logout) = record.and_then(|r| r.logout_time.as_deref()) {
                text.push_str(", Logout: ");
                text.push_str(logout);
            }
            text
        }
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
