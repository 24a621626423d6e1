//! The company employee store.
//!
//! A [`Company`] owns the employees of one company partition and keeps them
//! synchronised with a [`PartitionStore`]: every successful add or remove
//! rewrites the partition immediately.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_CURRENCY, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Employee, EmployeeRecord, PayrollReport, Reconstructed};
use crate::store::{JsonFileStore, Partition, PartitionStore};

/// Normalises a company name the way it is keyed in the data file: trimmed,
/// with the first letter of every word upper case and the rest lower case.
///
/// # Example
///
/// ```
/// use employee_registry::company::normalize_company_name;
///
/// assert_eq!(normalize_company_name("  acme CORP "), "Acme Corp");
/// assert_eq!(normalize_company_name("o'neil-smith 3m"), "O'Neil-Smith 3M");
/// ```
pub fn normalize_company_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            normalized.push(c);
            in_word = false;
        }
    }
    normalized
}

/// The employees of one company, backed by a partition store.
///
/// # Example
///
/// ```
/// use employee_registry::company::Company;
/// use employee_registry::models::Employee;
/// use employee_registry::store::MemoryStore;
/// use rust_decimal::Decimal;
///
/// let mut company = Company::open("Acme", MemoryStore::new())?;
/// let alice = Employee::full_time("E1", "Alice", "Eng", Decimal::new(50000, 0))?;
///
/// assert!(company.add(alice.clone())?);
/// assert!(!company.add(alice)?);
/// assert_eq!(company.total_payroll()?, Decimal::new(50000, 0));
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug)]
pub struct Company<S: PartitionStore = JsonFileStore> {
    name: String,
    currency: String,
    employees: Vec<Employee>,
    store: S,
}

impl Company<JsonFileStore> {
    /// Opens `name` in the data file named by the configuration.
    pub fn from_config(config: &RegistryConfig, name: &str) -> RegistryResult<Self> {
        let store = JsonFileStore::new(&config.data_file);
        Ok(Self::open(name, store)?.with_currency(&config.currency))
    }
}

impl<S: PartitionStore> Company<S> {
    /// Opens the company `name`, loading its partition from `store`.
    pub fn open(name: impl Into<String>, store: S) -> RegistryResult<Self> {
        let mut company = Self {
            name: name.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            employees: Vec::new(),
            store,
        };
        company.load()?;
        Ok(company)
    }

    /// Sets the currency label used by [`Company::report`].
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Replaces the in-memory employees with the stored partition.
    ///
    /// Records with an unrecognised `Type` are skipped. Records that cannot
    /// be read as a valid employee, including amounts outside the range of
    /// `Decimal`, are skipped with a warning. Either kind of skipped record
    /// is left out of the partition written by the next add or remove.
    pub fn load(&mut self) -> RegistryResult<()> {
        let partition = self.store.load_partition(&self.name)?;
        self.employees.clear();

        for (key, value) in partition {
            let record: EmployeeRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    warn!(company = %self.name, record = %key, error = %e, "Skipping unreadable employee record; the next save drops it");
                    continue;
                }
            };

            match record.into_employee() {
                Ok(Reconstructed::Employee(employee)) => self.insert_loaded(employee),
                Ok(Reconstructed::UnrecognizedType) => {
                    debug!(company = %self.name, record = %key, "Skipping record with unrecognised type");
                }
                Err(e) => {
                    warn!(company = %self.name, record = %key, error = %e, "Skipping invalid employee record; the next save drops it");
                }
            }
        }

        debug!(company = %self.name, employees = self.employees.len(), "Loaded company");
        Ok(())
    }

    fn insert_loaded(&mut self, employee: Employee) {
        match self.position(employee.employee_id()) {
            Some(index) => self.employees[index] = employee,
            None => self.employees.push(employee),
        }
    }

    fn position(&self, employee_id: &str) -> Option<usize> {
        self.employees
            .iter()
            .position(|e| e.employee_id() == employee_id)
    }

    fn save(&mut self) -> RegistryResult<()> {
        let mut partition = Partition::new();
        for employee in &self.employees {
            let value = serde_json::to_value(employee.to_record()).map_err(|e| {
                RegistryError::Serialization {
                    message: e.to_string(),
                }
            })?;
            partition.insert(employee.employee_id().to_string(), value);
        }
        self.store.save_partition(&self.name, partition)
    }

    /// Adds an employee and persists the partition.
    ///
    /// Returns `Ok(false)` without writing if the id is already taken. If the
    /// write fails the employee is not kept.
    pub fn add(&mut self, employee: Employee) -> RegistryResult<bool> {
        if self.position(employee.employee_id()).is_some() {
            debug!(company = %self.name, employee_id = %employee.employee_id(), "Employee id already exists");
            return Ok(false);
        }

        let employee_id = employee.employee_id().to_string();
        self.employees.push(employee);
        if let Err(e) = self.save() {
            self.employees.pop();
            return Err(e);
        }

        info!(company = %self.name, employee_id = %employee_id, "Employee added");
        Ok(true)
    }

    /// Removes an employee and persists the partition.
    ///
    /// Returns `Ok(false)` without writing if no employee has the id. If the
    /// write fails the employee is restored.
    pub fn remove(&mut self, employee_id: &str) -> RegistryResult<bool> {
        let Some(index) = self.position(employee_id) else {
            return Ok(false);
        };

        let removed = self.employees.remove(index);
        if let Err(e) = self.save() {
            self.employees.insert(index, removed);
            return Err(e);
        }

        info!(company = %self.name, employee_id = %employee_id, "Employee removed");
        Ok(true)
    }

    /// Looks up an employee by id.
    pub fn find(&self, employee_id: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id() == employee_id)
    }

    /// Returns all employees in the order they were added.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the company has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency label printed before amounts.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sum of every employee's monthly salary; zero with no employees.
    ///
    /// Fails with `PayrollOverflow` if the sum does not fit in a `Decimal`.
    pub fn total_payroll(&self) -> RegistryResult<Decimal> {
        self.employees
            .iter()
            .try_fold(Decimal::ZERO, |total, employee| {
                total.checked_add(employee.calculate_salary())
            })
            .ok_or_else(|| RegistryError::PayrollOverflow {
                company: self.name.clone(),
            })
    }

    /// Builds a payroll report over the current employees.
    pub fn report(&self) -> RegistryResult<PayrollReport> {
        PayrollReport::new(&self.name, &self.currency, &self.employees)
    }
}
