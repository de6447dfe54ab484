use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    #[default]
    #[serde(other)]
    Absent,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub login_time: Option<String>,
    #[serde(default)]
    pub logout_time: Option<String>,
}

/// Attendance records for one month, keyed by `YYYY-MM-DD`.
pub type AttendanceMap = BTreeMap<String, AttendanceRecord>;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttendanceResponse {
    #[serde(default)]
    pub attendance: AttendanceMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Weekend,
    Present,
    Absent,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Weekend => "weekend",
            Classification::Present => "present",
            Classification::Absent => "absent",
        }
    }

    pub fn mark(&self) -> &'static str {
        match self {
            Classification::Weekend => "W",
            Classification::Present => "P",
            Classification::Absent => "A",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub classification: Classification,
    pub is_today: bool,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub calendar: String,
    pub month: u32,
    pub year: i32,
    pub title: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days.iter().find(|cell| cell.day == day)
    }
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: i64,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_reads_as_absent() {
        let body = r#"{"attendance":{
            "2024-03-04":{"status":"present","login_time":"09:00"},
            "2024-03-05":{"status":"late"},
            "2024-03-06":{}
        }}"#;
        let parsed: AttendanceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.attendance["2024-03-04"].status, AttendanceStatus::Present);
        assert_eq!(parsed.attendance["2024-03-05"].status, AttendanceStatus::Absent);
        assert_eq!(parsed.attendance["2024-03-06"].status, AttendanceStatus::Absent);
    }

    #[test]
    fn rejection_without_success_flag_keeps_error() {
        let toggle: ToggleResponse = serde_json::from_str(r#"{"error":"Not logged in"}"#).unwrap();
        assert!(!toggle.success);
        assert_eq!(toggle.error.as_deref(), Some("Not logged in"));

        let leave: LeaveResponse = serde_json::from_str(r#"{"error":"From and To dates required"}"#).unwrap();
        assert!(!leave.success);
        assert_eq!(leave.error.as_deref(), Some("From and To dates required"));
    }

    #[test]
    fn missing_attendance_key_is_empty() {
        let parsed: AttendanceResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.attendance.is_empty());
    }
}
