//! Payroll report models.
//!
//! A [`PayrollReport`] is a snapshot of one company's salaries at the time
//! it was generated. Its `Display` implementation renders the table shown
//! by the shell and the `report` command.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

use super::employee::{Employee, EmployeeType};

/// A single row of a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The employee id.
    pub employee_id: String,
    /// The employee name.
    pub name: String,
    /// The employee's variant.
    pub employee_type: EmployeeType,
    /// The calculated monthly salary.
    pub salary: Decimal,
}

impl From<&Employee> for PayrollLine {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id().to_string(),
            name: employee.name().to_string(),
            employee_type: employee.employee_type(),
            salary: employee.calculate_salary(),
        }
    }
}

/// Per-employee salaries and the company total.
///
/// # Example
///
/// ```
/// use employee_registry::models::{Employee, PayrollReport};
/// use rust_decimal::Decimal;
///
/// let staff = vec![
///     Employee::full_time("E1", "Alice", "Eng", Decimal::new(50000, 0)).unwrap(),
///     Employee::part_time("E2", "Bob", "Ops", Decimal::new(200, 0), Decimal::new(80, 0)).unwrap(),
/// ];
/// let report = PayrollReport::new("Acme", "Rs.", &staff)?;
/// assert_eq!(report.total, Decimal::new(66000, 0));
/// assert_eq!(report.lines.len(), 2);
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The company the report covers.
    pub company: String,
    /// Currency label printed before amounts.
    pub currency: String,
    /// One line per employee, in insertion order.
    pub lines: Vec<PayrollLine>,
    /// Sum of all salaries.
    pub total: Decimal,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl PayrollReport {
    /// Builds a report over the given employees.
    ///
    /// Fails with `PayrollOverflow` if the salaries do not sum to a
    /// representable `Decimal`.
    pub fn new<'a>(
        company: impl Into<String>,
        currency: impl Into<String>,
        employees: impl IntoIterator<Item = &'a Employee>,
    ) -> RegistryResult<Self> {
        let company = company.into();
        let lines: Vec<PayrollLine> = employees.into_iter().map(PayrollLine::from).collect();
        let total = lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.salary))
            .ok_or_else(|| RegistryError::PayrollOverflow {
                company: company.clone(),
            })?;

        Ok(Self {
            company,
            currency: currency.into(),
            lines,
            total,
            generated_at: Utc::now(),
        })
    }
}

impl fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id_width = column_width("ID", self.lines.iter().map(|l| l.employee_id.as_str()));
        let name_width = column_width("Name", self.lines.iter().map(|l| l.name.as_str()));
        let type_width = column_width("Type", self.lines.iter().map(|l| l.employee_type.label()));

        writeln!(
            f,
            "Payroll Report: {} ({})",
            self.company,
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(
            f,
            "{:<id_width$}  {:<name_width$}  {:<type_width$}  Salary",
            "ID", "Name", "Type"
        )?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<id_width$}  {:<name_width$}  {:<type_width$}  {}{}",
                line.employee_id,
                line.name,
                line.employee_type.label(),
                self.currency,
                line.salary
            )?;
        }
        write!(f, "\nTotal Payroll: {}{}", self.currency, self.total)
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
