use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DashboardSummary {
    #[schema(example = 12)]
    pub total_employees: i64,
    #[schema(example = 240)]
    pub total_attendance_records: i64,
    #[schema(example = 10)]
    pub present_today: i64,
    #[schema(example = 2)]
    pub absent_today: i64,
}
