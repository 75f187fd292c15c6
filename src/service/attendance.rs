use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use super::{is_foreign_key_violation, is_unique_violation};
use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use crate::models::AttendanceFilter;
use crate::repo;

const ALREADY_MARKED: &str = "Attendance already marked for this employee on this date";

#[instrument(name = "attendance_mark", skip(pool))]
pub async fn mark(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<Attendance, ApiError> {
    let mut tx = pool.begin().await?;

    // Insert first so the write lock is taken before any read; the schema's
    // foreign key and UNIQUE(employee_id, date) reject the bad cases.
    let record = match repo::attendance::insert(&mut *tx, employee_id, date, status).await {
        Ok(record) => record,
        Err(e) if is_foreign_key_violation(&e) => {
            warn!("Employee not found");
            return Err(ApiError::employee_not_found());
        }
        Err(e) if is_unique_violation(&e) => {
            warn!("Attendance already marked");
            return Err(ApiError::Conflict(ALREADY_MARKED.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    tx.commit().await?;

    info!(id = record.id, "Attendance marked");
    Ok(record)
}

pub async fn list(
    pool: &SqlitePool,
    filter: &AttendanceFilter,
) -> Result<Vec<AttendanceWithEmployee>, ApiError> {
    let mut conn = pool.acquire().await?;
    Ok(repo::attendance::list_filtered(&mut *conn, filter).await?)
}

pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<Attendance>, ApiError> {
    let mut tx = pool.begin().await?;

    if !repo::employee::exists(&mut *tx, employee_id).await? {
        return Err(ApiError::employee_not_found());
    }

    let records = repo::attendance::list_for_employee(&mut *tx, employee_id).await?;
    tx.commit().await?;

    Ok(records)
}
