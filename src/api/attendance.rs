use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::{AttendanceQuery, MarkAttendance};
use crate::service;
use crate::validation::{parse_attendance_filter, validate_mark_attendance};

/// Mark attendance for one employee and day
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance marked", body = crate::model::attendance::Attendance),
        (status = 400, description = "Already marked for this date", body = Object, example = json!({
            "detail": "Attendance already marked for this employee on this date"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 422, description = "Validation error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    validate_mark_attendance(&payload)?;

    let record =
        service::attendance::mark(pool.get_ref(), payload.employee_id, payload.date, payload.status)
            .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// List attendance, newest first
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records with their employee", body = [crate::model::attendance::AttendanceWithEmployee]),
        (status = 422, description = "Unparsable filter value")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = parse_attendance_filter(&query)?;
    let records = service::attendance::list(pool.get_ref(), &filter).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Attendance history of one employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/attendance",
    params(
        ("employee_id" = i64, Path, description = "Internal employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records", body = [crate::model::attendance::Attendance]),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let records = service::attendance::list_for_employee(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}
