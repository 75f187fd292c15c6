use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ApiError;
use crate::model::dashboard::DashboardSummary;
use crate::repo;

pub async fn summary(pool: &SqlitePool, today: NaiveDate) -> Result<DashboardSummary, ApiError> {
    let mut conn = pool.acquire().await?;
    let summary = repo::dashboard::summary(&mut *conn, today).await?;

    debug!(?summary, %today, "Dashboard summary computed");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::model::attendance::AttendanceStatus;
    use crate::model::employee::NewEmployee;
    use crate::service;

    #[actix_web::test]
    async fn totals_agree_with_listings() {
        let pool = test_pool().await;
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        for n in 0..3 {
            let new = NewEmployee {
                employee_id: format!("E{n}"),
                full_name: "A B".to_string(),
                email: format!("e{n}@b.com"),
                department: "Eng".to_string(),
            };
            let id = service::employee::create(&pool, new).await.unwrap().id;
            let status = if n == 0 {
                AttendanceStatus::Absent
            } else {
                AttendanceStatus::Present
            };
            service::attendance::mark(&pool, id, today, status).await.unwrap();
        }

        let summary = summary(&pool, today).await.unwrap();
        let employees = service::employee::list(&pool).await.unwrap();

        assert_eq!(summary.total_employees, employees.len() as i64);
        assert_eq!(summary.total_attendance_records, 3);
        assert_eq!(summary.present_today, 2);
        assert_eq!(summary.absent_today, 1);

        let tomorrow = summary_for_next_day(&pool, today).await;
        assert_eq!(tomorrow.present_today, 0);
        assert_eq!(tomorrow.total_attendance_records, 3);
    }

    async fn summary_for_next_day(pool: &SqlitePool, today: NaiveDate) -> DashboardSummary {
        summary(pool, today.succ_opt().unwrap()).await.unwrap()
    }
}
