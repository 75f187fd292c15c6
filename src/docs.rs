use crate::error::FieldError;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use crate::model::dashboard::DashboardSummary;
use crate::model::employee::Employee;
use crate::models::{CreateEmployee, MarkAttendance};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small **Human Resource Management** backend for a single organization.

### Key Features
- **Employees**: create, list, view and delete employee records
- **Attendance**: mark one Present/Absent record per employee and day, filter by employee and date range
- **Dashboard**: totals plus today's present/absent counts

### Errors
- `404` with `{"detail": "..."}` when a referenced employee does not exist
- `400` with `{"detail": "..."}` for duplicate employee IDs, emails or attendance days
- `422` with `{"detail": [{"field": "...", "message": "..."}]}` for invalid input

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::employee_attendance,

        crate::api::dashboard::dashboard_summary
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Attendance,
            AttendanceStatus,
            AttendanceWithEmployee,
            MarkAttendance,
            DashboardSummary,
            FieldError
        )
    ),
    tags(
        (name = "Employees", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Summary statistics"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/employees",
            "/api/employees/{id}",
            "/api/employees/{employee_id}/attendance",
            "/api/attendance",
            "/api/dashboard",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "{expected} missing");
        }
    }
}
