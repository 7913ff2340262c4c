use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::formats::{roster_datetime, yes_no};
use crate::catalog::{Role, WorkPattern};

// ---------------------------------------------------------------------------
// Shift: one row of the roster
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub employee_id: String,
    pub role: Role,
    #[serde(with = "roster_datetime")]
    pub start_time: NaiveDateTime,
    #[serde(with = "roster_datetime")]
    pub end_time: NaiveDateTime,
    /// Location the shift is worked at.
    pub area_department: String,
    pub pay_rate: f64,
    pub notes: String,
    #[serde(with = "yes_no")]
    pub published: bool,
    /// Minutes.
    pub break_duration: u32,
}

impl Shift {
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn hours(&self) -> f64 {
        (self.end_time - self.start_time).num_minutes() as f64 / 60.0
    }
}

// ---------------------------------------------------------------------------
// EmployeeRecord: employee master list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub role: Role,
    pub primary_location: String,
    pub pay_rate: f64,
    pub work_pattern: WorkPattern,
}
