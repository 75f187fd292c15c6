use sqlx::SqliteConnection;
use tracing::debug;

use crate::model::employee::{Employee, NewEmployee};

pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, employee_id, full_name, email, department
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, employee_id, full_name, email, department
        FROM employees
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

pub async fn exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ? LIMIT 1)")
        .bind(id)
        .fetch_one(conn)
        .await
}

pub async fn code_taken(conn: &mut SqliteConnection, code: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ? LIMIT 1)",
    )
    .bind(code)
    .fetch_one(conn)
    .await
}

pub async fn insert(
    conn: &mut SqliteConnection,
    new: &NewEmployee,
) -> Result<Employee, sqlx::Error> {
    debug!(employee_id = %new.employee_id, "Inserting employee");

    sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        RETURNING id, employee_id, full_name, email, department
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.department)
    .fetch_one(conn)
    .await
}

/// Returns the number of deleted rows (0 or 1).
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn new_employee(code: &str, email: &str) -> NewEmployee {
        NewEmployee {
            employee_id: code.to_string(),
            full_name: "Jane Roe".to_string(),
            email: email.to_string(),
            department: "Ops".to_string(),
        }
    }

    #[actix_web::test]
    async fn insert_assigns_id_and_reads_back() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = insert(&mut *conn, &new_employee("E1", "jane@corp.io")).await.unwrap();
        assert!(created.id > 0);

        let found = find_by_id(&mut *conn, created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert!(exists(&mut *conn, created.id).await.unwrap());
        assert!(code_taken(&mut *conn, "E1").await.unwrap());
        assert!(!code_taken(&mut *conn, "E2").await.unwrap());
    }

    #[actix_web::test]
    async fn schema_rejects_duplicate_code() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        insert(&mut *conn, &new_employee("E1", "a@corp.io")).await.unwrap();
        let err = insert(&mut *conn, &new_employee("E1", "b@corp.io")).await.unwrap_err();

        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[actix_web::test]
    async fn delete_reports_affected_rows() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = insert(&mut *conn, &new_employee("E1", "a@corp.io")).await.unwrap();
        assert_eq!(delete(&mut *conn, created.id).await.unwrap(), 1);
        assert_eq!(delete(&mut *conn, created.id).await.unwrap(), 0);
        assert!(list_all(&mut *conn).await.unwrap().is_empty());
    }
}
