//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, the closed [`EmployeeKind`]
//! enum carrying each variant's pay fields, and the [`EmployeeType`]
//! discriminator used on disk and in reports.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// The discriminator naming an employee variant.
///
/// Serializes to the labels stored in the data file's `Type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeType {
    /// Salaried employee paid a fixed monthly amount.
    #[serde(rename = "Full Time")]
    FullTime,
    /// Hourly employee paid for hours worked in the month.
    #[serde(rename = "Part Time")]
    PartTime,
    /// Salaried employee who also receives a bonus.
    Manager,
}

impl EmployeeType {
    /// Returns the label used for this type in records and reports.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeType::FullTime => "Full Time",
            EmployeeType::PartTime => "Part Time",
            EmployeeType::Manager => "Manager",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pay fields of each employee variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeKind {
    /// A salaried employee.
    FullTime {
        /// Fixed pay per month.
        monthly_salary: Decimal,
    },
    /// An hourly employee.
    PartTime {
        /// Pay per hour worked.
        hourly_rate: Decimal,
        /// Hours worked in the month.
        hours_worked_per_month: Decimal,
    },
    /// A salaried employee with a bonus on top of the salary.
    Manager {
        /// Fixed pay per month.
        monthly_salary: Decimal,
        /// Bonus paid on top of the monthly salary.
        bonus: Decimal,
    },
}

impl EmployeeKind {
    /// Returns the discriminator for this variant.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            EmployeeKind::FullTime { .. } => EmployeeType::FullTime,
            EmployeeKind::PartTime { .. } => EmployeeType::PartTime,
            EmployeeKind::Manager { .. } => EmployeeType::Manager,
        }
    }

    fn validate(&self, employee_id: &str) -> RegistryResult<()> {
        match *self {
            EmployeeKind::FullTime { monthly_salary } => {
                non_negative("monthly_salary", monthly_salary)?;
            }
            EmployeeKind::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => {
                non_negative("hourly_rate", hourly_rate)?;
                non_negative("hours_worked_per_month", hours_worked_per_month)?;
            }
            EmployeeKind::Manager {
                monthly_salary,
                bonus,
            } => {
                non_negative("monthly_salary", monthly_salary)?;
                non_negative("bonus", bonus)?;
            }
        }
        match self.checked_salary() {
            Some(_) => Ok(()),
            None => Err(RegistryError::SalaryOverflow {
                employee_id: employee_id.to_string(),
            }),
        }
    }

    /// The monthly salary, or `None` if it does not fit in a `Decimal`.
    pub fn checked_salary(&self) -> Option<Decimal> {
        match *self {
            EmployeeKind::FullTime { monthly_salary } => Some(monthly_salary),
            EmployeeKind::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => hourly_rate.checked_mul(hours_worked_per_month),
            EmployeeKind::Manager {
                monthly_salary,
                bonus,
            } => monthly_salary.checked_add(bonus),
        }
    }
}

fn non_negative(field: &str, value: Decimal) -> RegistryResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(RegistryError::InvalidValue {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// An employee of a company.
///
/// Identity fields are fixed at construction. Pay fields can be changed
/// through the validating setters; every numeric field is guaranteed to be
/// non-negative and the salary they produce is guaranteed to fit in a
/// `Decimal`.
///
/// # Examples
///
/// ```
/// use employee_registry::models::Employee;
/// use rust_decimal::Decimal;
///
/// let manager = Employee::manager("E3", "Cara", "Eng", Decimal::new(60000, 0), Decimal::new(5000, 0)).unwrap();
/// assert_eq!(manager.calculate_salary(), Decimal::new(65000, 0));
///
/// assert!(Employee::full_time("E1", "Alice", "Eng", Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    employee_id: String,
    name: String,
    department: String,
    kind: EmployeeKind,
}

impl Employee {
    /// Creates an employee, failing with `InvalidValue` if any pay field is
    /// negative and with `SalaryOverflow` if the salary cannot be represented.
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        kind: EmployeeKind,
    ) -> RegistryResult<Self> {
        let employee_id = employee_id.into();
        kind.validate(&employee_id)?;
        Ok(Self {
            employee_id,
            name: name.into(),
            department: department.into(),
            kind,
        })
    }

    /// Creates a salaried employee.
    pub fn full_time(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        monthly_salary: Decimal,
    ) -> RegistryResult<Self> {
        Self::new(
            employee_id,
            name,
            department,
            EmployeeKind::FullTime { monthly_salary },
        )
    }

    /// Creates an hourly employee.
    pub fn part_time(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked_per_month: Decimal,
    ) -> RegistryResult<Self> {
        Self::new(
            employee_id,
            name,
            department,
            EmployeeKind::PartTime {
                hourly_rate,
                hours_worked_per_month,
            },
        )
    }

    /// Creates a manager.
    pub fn manager(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        monthly_salary: Decimal,
        bonus: Decimal,
    ) -> RegistryResult<Self> {
        Self::new(
            employee_id,
            name,
            department,
            EmployeeKind::Manager {
                monthly_salary,
                bonus,
            },
        )
    }

    /// The employee's id, unique within a company.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The variant and its pay fields.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// The discriminator for this employee's variant.
    pub fn employee_type(&self) -> EmployeeType {
        self.kind.employee_type()
    }

    /// Calculates the monthly salary.
    ///
    /// Full time employees earn their monthly salary, part time employees
    /// earn rate times hours, and managers earn their salary plus bonus.
    pub fn calculate_salary(&self) -> Decimal {
        // Construction and the setters reject kinds whose salary overflows.
        self.kind.checked_salary().unwrap_or(Decimal::MAX)
    }

    /// Returns a one-line human-readable summary of the employee.
    pub fn display_details(&self) -> String {
        let base = format!(
            "ID: {}, Name: {}, Department: {}",
            self.employee_id, self.name, self.department
        );
        match self.kind {
            EmployeeKind::FullTime { monthly_salary } => {
                format!("{}, Monthly Salary: {}", base, monthly_salary)
            }
            EmployeeKind::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => format!(
                "{}, Hourly Rate: {}, Hours Worked per month: {}",
                base, hourly_rate, hours_worked_per_month
            ),
            EmployeeKind::Manager {
                monthly_salary,
                bonus,
            } => format!(
                "{}, Monthly Salary: {}, Bonus: {}",
                base, monthly_salary, bonus
            ),
        }
    }

    /// Sets the monthly salary of a full time employee or manager.
    pub fn set_monthly_salary(&mut self, value: Decimal) -> RegistryResult<()> {
        let mut kind = self.kind.clone();
        match &mut kind {
            EmployeeKind::FullTime { monthly_salary }
            | EmployeeKind::Manager { monthly_salary, .. } => {
                *monthly_salary = non_negative("monthly_salary", value)?;
            }
            EmployeeKind::PartTime { .. } => {
                return Err(not_applicable("monthly_salary", self.employee_type()));
            }
        }
        self.replace_kind(kind)
    }

    /// Sets the hourly rate of a part time employee.
    pub fn set_hourly_rate(&mut self, value: Decimal) -> RegistryResult<()> {
        let mut kind = self.kind.clone();
        match &mut kind {
            EmployeeKind::PartTime { hourly_rate, .. } => {
                *hourly_rate = non_negative("hourly_rate", value)?;
            }
            _ => return Err(not_applicable("hourly_rate", self.employee_type())),
        }
        self.replace_kind(kind)
    }

    /// Sets the monthly hours of a part time employee.
    pub fn set_hours_worked_per_month(&mut self, value: Decimal) -> RegistryResult<()> {
        let mut kind = self.kind.clone();
        match &mut kind {
            EmployeeKind::PartTime {
                hours_worked_per_month,
                ..
            } => {
                *hours_worked_per_month = non_negative("hours_worked_per_month", value)?;
            }
            _ => {
                return Err(not_applicable(
                    "hours_worked_per_month",
                    self.employee_type(),
                ));
            }
        }
        self.replace_kind(kind)
    }

    /// Sets the bonus of a manager.
    pub fn set_bonus(&mut self, value: Decimal) -> RegistryResult<()> {
        let mut kind = self.kind.clone();
        match &mut kind {
            EmployeeKind::Manager { bonus, .. } => {
                *bonus = non_negative("bonus", value)?;
            }
            _ => return Err(not_applicable("bonus", self.employee_type())),
        }
        self.replace_kind(kind)
    }

    /// Swaps in updated pay fields once their salary is known to fit.
    fn replace_kind(&mut self, kind: EmployeeKind) -> RegistryResult<()> {
        kind.validate(&self.employee_id)?;
        self.kind = kind;
        Ok(())
    }
}

fn not_applicable(field: &str, employee_type: EmployeeType) -> RegistryError {
    RegistryError::FieldNotApplicable {
        field: field.to_string(),
        employee_type: employee_type.label().to_string(),
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_details())
    }
}
