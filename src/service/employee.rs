use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use super::is_unique_violation;
use crate::error::ApiError;
use crate::model::employee::{Employee, NewEmployee};
use crate::repo;

const CODE_TAKEN: &str = "Employee ID already exists";
const EMAIL_TAKEN: &str = "Email already exists";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let mut conn = pool.acquire().await?;
    Ok(repo::employee::list_all(&mut *conn).await?)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Employee, ApiError> {
    let mut conn = pool.acquire().await?;
    repo::employee::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(ApiError::employee_not_found)
}

#[instrument(name = "employee_create", skip(pool, new), fields(employee_id = %new.employee_id))]
pub async fn create(pool: &SqlitePool, new: NewEmployee) -> Result<Employee, ApiError> {
    let mut tx = pool.begin().await?;

    // The insert is the first statement so the transaction holds the write
    // lock before it reads anything; the UNIQUE constraints do the checking.
    let employee = match repo::employee::insert(&mut *tx, &new).await {
        Ok(employee) => employee,
        Err(e) if is_unique_violation(&e) => {
            let message = if repo::employee::code_taken(&mut *tx, &new.employee_id).await? {
                CODE_TAKEN
            } else {
                EMAIL_TAKEN
            };
            warn!(error = %e, reason = message, "Duplicate employee rejected");
            return Err(ApiError::Conflict(message.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    tx.commit().await?;

    info!(id = employee.id, "Employee created");
    Ok(employee)
}

#[instrument(name = "employee_delete", skip(pool))]
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    let removed = repo::attendance::delete_for_employee(&mut *tx, id).await?;
    if repo::employee::delete(&mut *tx, id).await? == 0 {
        warn!("Employee not found");
        return Err(ApiError::employee_not_found());
    }

    tx.commit().await?;

    info!(attendance_removed = removed, "Employee deleted");
    Ok(())
}
