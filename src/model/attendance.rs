use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use super::employee::Employee;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    ToSchema,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,
    /// Internal id of the owning employee
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Attendance record with its employee embedded, as returned by the
/// filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AttendanceWithEmployee {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub employee: Employee,
}

// Flat shape of the attendance/employee join
#[derive(sqlx::FromRow)]
pub struct AttendanceEmployeeRow {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl From<AttendanceEmployeeRow> for AttendanceWithEmployee {
    fn from(row: AttendanceEmployeeRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            date: row.date,
            status: row.status,
            employee: Employee {
                id: row.employee_id,
                employee_id: row.employee_code,
                full_name: row.full_name,
                email: row.email,
                department: row.department,
            },
        }
    }
}
