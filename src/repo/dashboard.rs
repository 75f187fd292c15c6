use chrono::NaiveDate;
use sqlx::SqliteConnection;

use crate::model::attendance::AttendanceStatus;
use crate::model::dashboard::DashboardSummary;

/// All four counts come from one statement and therefore one snapshot.
pub async fn summary(
    conn: &mut SqliteConnection,
    today: NaiveDate,
) -> Result<DashboardSummary, sqlx::Error> {
    sqlx::query_as::<_, DashboardSummary>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM employees) AS total_employees,
            (SELECT COUNT(*) FROM attendance) AS total_attendance_records,
            (SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?) AS present_today,
            (SELECT COUNT(*) FROM attendance WHERE date = ? AND status = ?) AS absent_today
        "#,
    )
    .bind(today)
    .bind(AttendanceStatus::Present)
    .bind(today)
    .bind(AttendanceStatus::Absent)
    .fetch_one(conn)
    .await
}
