use chrono::NaiveDate;
use serde::Serialize;

/// A company holiday calendar row.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyHoliday {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
}
