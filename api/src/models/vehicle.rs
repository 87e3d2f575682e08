use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fleet vehicle tracked by the back-office, with the four dated
/// obligations staff watch: maintenance, inspection, casco, insurance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub plate: String,
    pub make_model: String,
    #[serde(default)]
    pub mileage: Option<u32>,
    /// Route or depot assignment, free text.
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub maintenance_due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub inspection_due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub casco_due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub insurance_due: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleInput {
    pub plate: String,
    pub make_model: String,
    pub mileage: Option<u32>,
    pub route: Option<String>,
    pub note: Option<String>,
    pub maintenance_due: Option<DateTime<Utc>>,
    pub inspection_due: Option<DateTime<Utc>>,
    pub casco_due: Option<DateTime<Utc>>,
    pub insurance_due: Option<DateTime<Utc>>,
}

/// Deadlines closer than this many days are flagged as due soon.
pub const DUE_SOON_DAYS: i64 = 30;

/// Badge state for one due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Deadline passed `days` days ago.
    Overdue { days: i64 },
    /// Deadline is within [`DUE_SOON_DAYS`].
    DueSoon { days: i64 },
    Ok { days: i64 },
}

impl DueStatus {
    /// Classify a due date relative to `now`. Partial days round up, so a
    /// deadline later today counts as one day away.
    pub fn of(due: DateTime<Utc>, now: DateTime<Utc>) -> DueStatus {
        let seconds = (due - now).num_seconds();
        let days = if seconds >= 0 {
            (seconds + 86_399) / 86_400
        } else {
            seconds / 86_400
        };
        if days < 0 {
            DueStatus::Overdue { days: -days }
        } else if days <= DUE_SOON_DAYS {
            DueStatus::DueSoon { days }
        } else {
            DueStatus::Ok { days }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_past_date_is_overdue() {
        let status = DueStatus::of(now() - Duration::days(10), now());
        assert_eq!(status, DueStatus::Overdue { days: 10 });
    }

    #[test]
    fn test_near_date_is_due_soon() {
        let status = DueStatus::of(now() + Duration::days(14), now());
        assert_eq!(status, DueStatus::DueSoon { days: 14 });
    }

    #[test]
    fn test_same_day_deadline_counts_as_one_day() {
        let status = DueStatus::of(now() + Duration::hours(3), now());
        assert_eq!(status, DueStatus::DueSoon { days: 1 });
    }

    #[test]
    fn test_far_date_is_ok() {
        let status = DueStatus::of(now() + Duration::days(90), now());
        assert_eq!(status, DueStatus::Ok { days: 90 });
    }
}
