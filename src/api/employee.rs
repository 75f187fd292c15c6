use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::CreateEmployee;
use crate::service;
use crate::validation::validate_new_employee;

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [crate::model::employee::Employee])
    ),
    tag = "Employees"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = service::employee::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Internal employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee = service::employee::get(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = crate::model::employee::Employee),
        (status = 400, description = "Employee ID or email already exists", body = Object, example = json!({
            "detail": "Employee ID already exists"
        })),
        (status = 422, description = "Validation error", body = Object, example = json!({
            "detail": [{ "field": "email", "message": "value is not a valid email address" }]
        }))
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let new = validate_new_employee(&payload)?;
    let employee = service::employee::create(pool.get_ref(), new).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Internal employee ID")
    ),
    responses(
        (status = 200, description = "Employee and its attendance deleted", body = Object, example = json!({
            "detail": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    service::employee::delete(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "detail": "Employee deleted successfully"
    })))
}
