//! Input validation, run before any service call.
//!
//! Every function either returns the normalized value or an
//! [`ApiError::Validation`] carrying one entry per rejected field.

use chrono::NaiveDate;

use crate::error::{ApiError, FieldError};
use crate::model::employee::NewEmployee;
use crate::models::{AttendanceFilter, AttendanceQuery, CreateEmployee, MarkAttendance};

const EMPLOYEE_CODE_MAX: usize = 50;
const FULL_NAME_MAX: usize = 100;
const DEPARTMENT_MAX: usize = 50;
const EMAIL_MAX: usize = 254;
const EMAIL_LOCAL_MAX: usize = 64;
const DOMAIN_LABEL_MAX: usize = 63;

pub fn validate_new_employee(input: &CreateEmployee) -> Result<NewEmployee, ApiError> {
    let mut errors = Vec::new();

    let employee_id = required_text("employee_id", &input.employee_id, EMPLOYEE_CODE_MAX, &mut errors);
    let full_name = required_text("full_name", &input.full_name, FULL_NAME_MAX, &mut errors);
    let department = required_text("department", &input.department, DEPARTMENT_MAX, &mut errors);

    let email = input.email.trim().to_lowercase();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email cannot be empty"));
    } else if !is_valid_email(&email) {
        errors.push(FieldError::new("email", "value is not a valid email address"));
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(NewEmployee {
        employee_id,
        full_name,
        email,
        department,
    })
}

pub fn validate_mark_attendance(input: &MarkAttendance) -> Result<(), ApiError> {
    if input.employee_id <= 0 {
        return Err(ApiError::Validation(vec![FieldError::new(
            "employee_id",
            "must be greater than 0",
        )]));
    }
    Ok(())
}

pub fn parse_attendance_filter(query: &AttendanceQuery) -> Result<AttendanceFilter, ApiError> {
    let mut errors = Vec::new();

    let employee_id = match non_empty(&query.employee_id) {
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(FieldError::new("employee_id", "value is not a valid integer"));
                None
            }
        },
        None => None,
    };
    let start_date = optional_date("start_date", &query.start_date, &mut errors);
    let end_date = optional_date("end_date", &query.end_date, &mut errors);

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(AttendanceFilter {
        employee_id,
        start_date,
        end_date,
    })
}

/// Syntactic address check: `local@domain.tld`, no whitespace, dot-atom
/// local part, hostname labels in the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    const SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

    !local.is_empty()
        && local.len() <= EMAIL_LOCAL_MAX
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
}

fn valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= DOMAIN_LABEL_MAX
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    // all-numeric top level domains are not resolvable names
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.chars().any(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}

fn required_text(field: &str, value: &str, max: usize, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "Field cannot be empty or whitespace"));
    } else if trimmed.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("ensure this value has at most {max} characters"),
        ));
    }
    trimmed.to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn optional_date(
    field: &str,
    value: &Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let raw = non_empty(value)?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "invalid date format, expected YYYY-MM-DD"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus;

    fn employee(code: &str, name: &str, email: &str, dept: &str) -> CreateEmployee {
        CreateEmployee {
            employee_id: code.to_string(),
            full_name: name.to_string(),
            email: email.to_string(),
            department: dept.to_string(),
        }
    }

    fn fields(err: ApiError) -> Vec<String> {
        match err {
            ApiError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn trims_and_lowercases() {
        let new = validate_new_employee(&employee(" E1 ", " A B ", " A@B.Com ", " Eng "))
            .unwrap();
        assert_eq!(new.employee_id, "E1");
        assert_eq!(new.full_name, "A B");
        assert_eq!(new.email, "a@b.com");
        assert_eq!(new.department, "Eng");
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let err = validate_new_employee(&employee("  ", "", "a@b.com", "\t")).unwrap_err();
        assert_eq!(fields(err), vec!["employee_id", "full_name", "department"]);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(101);
        let err = validate_new_employee(&employee("E1", &name, "a@b.com", "Eng")).unwrap_err();
        assert_eq!(fields(err), vec!["full_name"]);
    }

    #[test]
    fn bad_email_is_rejected() {
        let err = validate_new_employee(&employee("E1", "A", "not-an-email", "Eng")).unwrap_err();
        assert_eq!(fields(err), vec!["email"]);
    }

    #[test]
    fn email_syntax() {
        for ok in ["a@b.com", "first.last+tag@mail.example.org", "x_y@sub-domain.io"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "",
            "plain",
            "@b.com",
            "a@",
            "a@b",
            "a@@b.com",
            "a b@c.com",
            ".a@b.com",
            "a..b@c.com",
            "a@-b.com",
            "a@b..com",
            "a@b.123",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn attendance_needs_positive_employee() {
        let input = MarkAttendance {
            employee_id: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: AttendanceStatus::Present,
        };
        assert_eq!(fields(validate_mark_attendance(&input).unwrap_err()), vec!["employee_id"]);
    }

    #[test]
    fn empty_query_values_mean_no_filter() {
        let query = AttendanceQuery {
            employee_id: Some(String::new()),
            start_date: Some(" ".to_string()),
            end_date: None,
        };
        assert_eq!(parse_attendance_filter(&query).unwrap(), AttendanceFilter::default());
    }

    #[test]
    fn query_values_are_parsed() {
        let query = AttendanceQuery {
            employee_id: Some("7".to_string()),
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
        };
        let filter = parse_attendance_filter(&query).unwrap();
        assert_eq!(filter.employee_id, Some(7));
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn bad_query_values_are_rejected() {
        let query = AttendanceQuery {
            employee_id: Some("abc".to_string()),
            start_date: Some("01/02/2024".to_string()),
            end_date: None,
        };
        let err = parse_attendance_filter(&query).unwrap_err();
        assert_eq!(fields(err), vec!["employee_id", "start_date"]);
    }
}
