//! The on-disk representation of an employee.
//!
//! An [`EmployeeRecord`] is one entry of a company partition in the data
//! file. Field names follow the stored format (`Employee_id`, `Name`,
//! `Department`, `Type`, then the variant fields) so files written by
//! earlier versions of the tool load unchanged. Amounts are written as JSON
//! numbers with every digit of the decimal, so a reload reproduces them
//! exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

use super::employee::{Employee, EmployeeKind, EmployeeType};

/// The `Type` discriminator as read from disk.
///
/// Anything other than the three known labels, including a missing field,
/// reads as [`RecordType::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordType {
    /// `"Full Time"`
    #[serde(rename = "Full Time")]
    FullTime,
    /// `"Part Time"`
    #[serde(rename = "Part Time")]
    PartTime,
    /// `"Manager"`
    Manager,
    /// Any other label.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl From<EmployeeType> for RecordType {
    fn from(employee_type: EmployeeType) -> Self {
        match employee_type {
            EmployeeType::FullTime => RecordType::FullTime,
            EmployeeType::PartTime => RecordType::PartTime,
            EmployeeType::Manager => RecordType::Manager,
        }
    }
}

/// A serialized employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee id.
    #[serde(rename = "Employee_id")]
    pub employee_id: String,
    /// The employee name.
    #[serde(rename = "Name")]
    pub name: String,
    /// The employee department.
    #[serde(rename = "Department")]
    pub department: String,
    /// The variant discriminator.
    #[serde(rename = "Type", default)]
    pub record_type: RecordType,
    /// Present for full time employees and managers.
    #[serde(
        rename = "Monthly_salary",
        with = "rust_decimal::serde::arbitrary_precision_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_salary: Option<Decimal>,
    /// Present for part time employees.
    #[serde(
        rename = "Hourly_rate",
        with = "rust_decimal::serde::arbitrary_precision_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hourly_rate: Option<Decimal>,
    /// Present for part time employees.
    #[serde(
        rename = "Hours_worked_per_month",
        with = "rust_decimal::serde::arbitrary_precision_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hours_worked_per_month: Option<Decimal>,
    /// Present for managers.
    #[serde(
        rename = "Bonus",
        with = "rust_decimal::serde::arbitrary_precision_option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bonus: Option<Decimal>,
}

/// The outcome of rebuilding an employee from a record.
#[derive(Debug)]
pub enum Reconstructed {
    /// The record described a valid employee.
    Employee(Employee),
    /// The record's `Type` is not one this version understands.
    UnrecognizedType,
}

impl EmployeeRecord {
    /// Rebuilds the employee this record describes.
    ///
    /// Records with an unrecognized `Type` are reported as
    /// [`Reconstructed::UnrecognizedType`] rather than as an error. A known
    /// type with a missing variant field fails with `Serialization`, and a
    /// negative field fails with `InvalidValue`.
    pub fn into_employee(self) -> RegistryResult<Reconstructed> {
        let kind = match self.record_type {
            RecordType::FullTime => EmployeeKind::FullTime {
                monthly_salary: required("Monthly_salary", self.monthly_salary)?,
            },
            RecordType::PartTime => EmployeeKind::PartTime {
                hourly_rate: required("Hourly_rate", self.hourly_rate)?,
                hours_worked_per_month: required(
                    "Hours_worked_per_month",
                    self.hours_worked_per_month,
                )?,
            },
            RecordType::Manager => EmployeeKind::Manager {
                monthly_salary: required("Monthly_salary", self.monthly_salary)?,
                bonus: required("Bonus", self.bonus)?,
            },
            RecordType::Unrecognized => return Ok(Reconstructed::UnrecognizedType),
        };

        Employee::new(self.employee_id, self.name, self.department, kind)
            .map(Reconstructed::Employee)
    }
}

fn required(field: &str, value: Option<Decimal>) -> RegistryResult<Decimal> {
    value.ok_or_else(|| RegistryError::Serialization {
        message: format!("missing field `{}`", field),
    })
}

impl Employee {
    /// Serializes the employee into its on-disk record.
    pub fn to_record(&self) -> EmployeeRecord {
        let mut record = EmployeeRecord {
            employee_id: self.employee_id().to_string(),
            name: self.name().to_string(),
            department: self.department().to_string(),
            record_type: self.employee_type().into(),
            monthly_salary: None,
            hourly_rate: None,
            hours_worked_per_month: None,
            bonus: None,
        };

        match *self.kind() {
            EmployeeKind::FullTime { monthly_salary } => {
                record.monthly_salary = Some(monthly_salary);
            }
            EmployeeKind::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => {
                record.hourly_rate = Some(hourly_rate);
                record.hours_worked_per_month = Some(hours_worked_per_month);
            }
            EmployeeKind::Manager {
                monthly_salary,
                bonus,
            } => {
                record.monthly_salary = Some(monthly_salary);
                record.bonus = Some(bonus);
            }
        }

        record
    }
}
