use actix_web::{HttpResponse, web};
use chrono::Local;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::service;

/// Today's snapshot
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Aggregate counts as of today", body = crate::model::dashboard::DashboardSummary)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_summary(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let today = Local::now().date_naive();
    let summary = service::dashboard::summary(pool.get_ref(), today).await?;
    Ok(HttpResponse::Ok().json(summary))
}
