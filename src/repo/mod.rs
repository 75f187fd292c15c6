//! Query functions over the `employees` and `attendance` tables.
//!
//! Every function takes the connection it runs on, so callers decide
//! whether it is a pooled connection or part of a transaction.

pub mod attendance;
pub mod dashboard;
pub mod employee;
