use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::attendance::AttendanceStatus;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001", max_length = 50)]
    pub employee_id: String,
    #[schema(example = "John Doe", max_length = 100)]
    pub full_name: String,
    #[schema(example = "john@email.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering", max_length = 50)]
    pub department: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    /// Internal id of the employee
    #[schema(example = 1, minimum = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

/// Raw query string of the attendance listing. Kept as text so that the
/// empty values sent for cleared filters can be told apart from bad input.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Filter by internal employee id
    #[param(value_type = Option<i64>)]
    pub employee_id: Option<String>,
    /// Earliest date, inclusive (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<String>,
    /// Latest date, inclusive (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<String>,
}

/// Validated attendance listing filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
