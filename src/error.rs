//! Error types for the employee registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that is surfaced to a caller. Duplicate ids, missing
//! employees, a missing data file, and a corrupt data file are not errors:
//! they are reported through return values or logged and recovered from.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the employee registry.
///
/// # Example
///
/// ```
/// use employee_registry::error::RegistryError;
/// use rust_decimal::Decimal;
///
/// let error = RegistryError::InvalidValue {
///     field: "bonus".to_string(),
///     value: Decimal::new(-500, 0),
/// };
/// assert_eq!(error.to_string(), "Invalid value for 'bonus': -500 (must not be negative)");
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A numeric employee field failed its non-negativity check.
    #[error("Invalid value for '{field}': {value} (must not be negative)")]
    InvalidValue {
        /// The name of the offending field.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A field setter was called on a variant that does not carry the field.
    #[error("Field '{field}' does not apply to a {employee_type} employee")]
    FieldNotApplicable {
        /// The name of the field.
        field: String,
        /// The discriminator label of the employee's variant.
        employee_type: String,
    },

    /// An employee's pay fields produce a salary too large to represent.
    #[error("Salary of employee '{employee_id}' is too large to calculate")]
    SalaryOverflow {
        /// The id of the employee.
        employee_id: String,
    },

    /// The sum of a company's salaries is too large to represent.
    #[error("Total payroll of '{company}' is too large to calculate")]
    PayrollOverflow {
        /// The company whose payroll was summed.
        company: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The data file exists but could not be read or written.
    #[error("Data file '{path}' could not be accessed: {message}")]
    StoreIo {
        /// The path to the data file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An employee record could not be encoded as JSON.
    #[error("Serialization error: {message}")]
    Serialization {
        /// A description of the encoding failure.
        message: String,
    },
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;
