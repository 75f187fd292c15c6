use chrono::NaiveDate;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::model::attendance::{
    Attendance, AttendanceEmployeeRow, AttendanceStatus, AttendanceWithEmployee,
};
use crate::models::AttendanceFilter;

// Helper enum for typed SQLx binding
enum FilterValue {
    Id(i64),
    Date(NaiveDate),
}

pub async fn insert(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<Attendance, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (employee_id, date, status)
        VALUES (?, ?, ?)
        RETURNING id, employee_id, date, status
        "#,
    )
    .bind(employee_id)
    .bind(date)
    .bind(status)
    .fetch_one(conn)
    .await
}

/// Attendance joined with its employee, newest date first.
pub async fn list_filtered(
    conn: &mut SqliteConnection,
    filter: &AttendanceFilter,
) -> Result<Vec<AttendanceWithEmployee>, sqlx::Error> {
    let mut conditions = Vec::new();
    let mut bindings = Vec::new();

    if let Some(employee_id) = filter.employee_id {
        conditions.push("a.employee_id = ?");
        bindings.push(FilterValue::Id(employee_id));
    }

    if let Some(start_date) = filter.start_date {
        conditions.push("a.date >= ?");
        bindings.push(FilterValue::Date(start_date));
    }

    if let Some(end_date) = filter.end_date {
        conditions.push("a.date <= ?");
        bindings.push(FilterValue::Date(end_date));
    }

    let where_clause = if conditions.is_empty() {
        "".to_string()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        r#"
        SELECT
            a.id,
            a.employee_id,
            a.date,
            a.status,
            e.employee_id AS employee_code,
            e.full_name,
            e.email,
            e.department
        FROM attendance a
        JOIN employees e ON e.id = a.employee_id
        {}
        ORDER BY a.date DESC, a.id DESC
        "#,
        where_clause
    );
    debug!(sql = %sql, filter = ?filter, "Fetching attendance");

    let mut query = sqlx::query_as::<_, AttendanceEmployeeRow>(&sql);
    for value in bindings {
        query = match value {
            FilterValue::Id(v) => query.bind(v),
            FilterValue::Date(v) => query.bind(v),
        };
    }

    let rows = query.fetch_all(conn).await?;
    Ok(rows.into_iter().map(AttendanceWithEmployee::from).collect())
}

pub async fn list_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status
        FROM attendance
        WHERE employee_id = ?
        ORDER BY date, id
        "#,
    )
    .bind(employee_id)
    .fetch_all(conn)
    .await
}

pub async fn delete_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
