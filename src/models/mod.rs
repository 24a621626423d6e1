//! Core data models for the employee registry.
//!
//! This module contains the employee type, its stored record form, and the
//! payroll report.

mod employee;
mod record;
mod report;

pub use employee::{Employee, EmployeeKind, EmployeeType};
pub use record::{EmployeeRecord, RecordType, Reconstructed};
pub use report::{PayrollLine, PayrollReport};
