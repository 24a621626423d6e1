//! The interactive menu.
//!
//! [`Shell`] drives a [`Company`] from line-oriented input. It is generic
//! over its input and output so it can run against a terminal or a test
//! buffer. Invalid input is reported and asked for again; the company and
//! model layers never retry.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::error;

use crate::company::{Company, normalize_company_name};
use crate::error::RegistryResult;
use crate::models::Employee;
use crate::store::PartitionStore;

const MENU: &str = "\n--- Employee Management System ---
1. Add Employee
2. Remove Employee
3. View All Employees
4. Calculate Total Payroll
5. Search Employee
6. Generate Payroll Report
7. Exit";

/// Parses an amount typed by a user.
///
/// Accepts plain decimals (`1250.50`) and scientific notation (`1.25e3`).
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use employee_registry::shell::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 1e5 ").unwrap(), Decimal::new(100000, 0));
/// assert_eq!(parse_amount("12.5").unwrap(), Decimal::new(125, 1));
/// assert!(parse_amount("lots").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal, rust_decimal::Error> {
    let input = input.trim();
    Decimal::from_str(input).or_else(|_| Decimal::from_scientific(input))
}

enum Flow {
    Continue,
    Exit,
}

/// A line-oriented interactive session.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the shell, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line, without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> RegistryResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks until a number is entered. Sign checks are left to the employee
    /// constructors.
    fn prompt_decimal(&mut self, prompt: &str) -> RegistryResult<Option<Decimal>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse_amount(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    /// Asks for a company name until a non-blank one is entered.
    ///
    /// The name is normalised with [`normalize_company_name`]. Returns
    /// `None` at end of input.
    pub fn prompt_company_name(&mut self) -> RegistryResult<Option<String>> {
        loop {
            let Some(line) = self.prompt("Enter Company Name: ")? else {
                return Ok(None);
            };
            let name = normalize_company_name(&line);
            if !name.is_empty() {
                return Ok(Some(name));
            }
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run<S: PartitionStore>(&mut self, company: &mut Company<S>) -> RegistryResult<()> {
        writeln!(self.output, "Company: {}", company.name())?;
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-7): ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_employee(company)?,
                "2" => self.remove_employee(company)?,
                "3" => self.list_employees(company)?,
                "4" => {
                    match company.total_payroll() {
                        Ok(total) => writeln!(
                            self.output,
                            "Total Payroll: {}{}",
                            company.currency(),
                            total
                        )?,
                        Err(e) => writeln!(self.output, "{}", e)?,
                    }
                    Flow::Continue
                }
                "5" => self.search_employee(company)?,
                "6" => {
                    match company.report() {
                        Ok(report) => writeln!(self.output, "{}", report)?,
                        Err(e) => writeln!(self.output, "{}", e)?,
                    }
                    Flow::Continue
                }
                "7" => {
                    writeln!(self.output, "Goodbye.")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        Ok(())
    }

    fn add_employee<S: PartitionStore>(&mut self, company: &mut Company<S>) -> RegistryResult<Flow> {
        writeln!(self.output, "\n1. Full-Time\n2. Part-Time\n3. Manager")?;
        let Some(kind) = self.prompt("Choose employee type: ")? else {
            return Ok(Flow::Exit);
        };
        let kind = kind.trim().to_string();
        if !matches!(kind.as_str(), "1" | "2" | "3") {
            writeln!(self.output, "Invalid employee type.")?;
            return Ok(Flow::Continue);
        }

        let Some(id) = self.prompt("Enter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(department) = self.prompt("Enter Department: ")? else {
            return Ok(Flow::Exit);
        };
        let (id, name, department) = (
            id.trim().to_string(),
            name.trim().to_string(),
            department.trim().to_string(),
        );

        let employee = match kind.as_str() {
            "1" => {
                let Some(salary) = self.prompt_decimal("Enter Monthly Salary: ")? else {
                    return Ok(Flow::Exit);
                };
                Employee::full_time(id, name, department, salary)
            }
            "2" => {
                let Some(rate) = self.prompt_decimal("Enter Hourly Rate: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(hours) = self.prompt_decimal("Enter Hours Worked: ")? else {
                    return Ok(Flow::Exit);
                };
                Employee::part_time(id, name, department, rate, hours)
            }
            _ => {
                let Some(salary) = self.prompt_decimal("Enter Monthly Salary: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(bonus) = self.prompt_decimal("Enter Bonus: ")? else {
                    return Ok(Flow::Exit);
                };
                Employee::manager(id, name, department, salary, bonus)
            }
        };

        let employee = match employee {
            Ok(employee) => employee,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match company.add(employee) {
            Ok(true) => writeln!(self.output, "Employee added successfully.")?,
            Ok(false) => writeln!(self.output, "Employee ID already exists.")?,
            Err(e) => self.report_store_error(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn remove_employee<S: PartitionStore>(
        &mut self,
        company: &mut Company<S>,
    ) -> RegistryResult<Flow> {
        let Some(id) = self.prompt("Enter employee ID to remove: ")? else {
            return Ok(Flow::Exit);
        };
        match company.remove(id.trim()) {
            Ok(true) => writeln!(self.output, "Employee removed.")?,
            Ok(false) => writeln!(self.output, "Employee not found.")?,
            Err(e) => self.report_store_error(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn list_employees<S: PartitionStore>(&mut self, company: &Company<S>) -> RegistryResult<Flow> {
        if company.is_empty() {
            writeln!(self.output, "No employees.")?;
        }
        for employee in company.employees() {
            writeln!(self.output, "{}", employee)?;
        }
        Ok(Flow::Continue)
    }

    fn search_employee<S: PartitionStore>(&mut self, company: &Company<S>) -> RegistryResult<Flow> {
        let Some(id) = self.prompt("Enter employee ID to search: ")? else {
            return Ok(Flow::Exit);
        };
        match company.find(id.trim()) {
            Some(employee) => writeln!(self.output, "Employee Found:\n{}", employee)?,
            None => writeln!(self.output, "Employee not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn report_store_error(&mut self, message: &str) -> RegistryResult<()> {
        error!(error = %message, "Data file update failed");
        writeln!(self.output, "Could not save changes: {}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::io::Cursor;

    fn run_session(company: &mut Company<MemoryStore>, input: &str) -> String {
        let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        shell.run(company).unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    fn empty_company() -> Company<MemoryStore> {
        Company::open("Acme", MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_add_each_variant_and_total() {
        let mut company = empty_company();
        let input = "1\n1\nE1\nAlice\nEng\n50000\n\
                     1\n2\nE2\nBob\nOps\n200\n80\n\
                     1\n3\nE3\nCara\nEng\n60000\n5000\n\
                     4\n7\n";

        let output = run_session(&mut company, input);

        assert_eq!(company.len(), 3);
        assert!(output.contains("Total Payroll: Rs.131000"));
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_invalid_number_is_asked_again() {
        let mut company = empty_company();
        let output = run_session(&mut company, "1\n1\nE1\nAlice\nEng\nlots\n50000\n7\n");

        assert!(output.contains("Please enter a number."));
        assert_eq!(
            company.find("E1").map(Employee::calculate_salary),
            Some(Decimal::new(50000, 0))
        );
    }

    #[test]
    fn test_scientific_notation_is_accepted() {
        let mut company = empty_company();
        run_session(&mut company, "1\n1\nE1\nAlice\nEng\n5e4\n7\n");

        assert_eq!(
            company.find("E1").map(Employee::calculate_salary),
            Some(Decimal::new(50000, 0))
        );
    }

    #[test]
    fn test_total_uses_company_currency() {
        let mut company = empty_company().with_currency("$");
        let output = run_session(&mut company, "1\n1\nE1\nAlice\nEng\n50000\n4\n7\n");

        assert!(output.contains("Total Payroll: $50000"));
    }

    #[test]
    fn test_salary_overflow_is_reported_and_not_added() {
        let mut company = empty_company();
        let input = format!("1\n3\nE3\nCara\nEng\n{}\n1\n7\n", Decimal::MAX);
        let output = run_session(&mut company, &input);

        assert!(output.contains("Salary of employee 'E3' is too large to calculate"));
        assert!(company.is_empty());
    }

    #[test]
    fn test_parse_amount_forms() {
        assert_eq!(parse_amount("50000").unwrap(), Decimal::new(50000, 0));
        assert_eq!(parse_amount(" 2.5E2 ").unwrap(), Decimal::new(250, 0));
        assert_eq!(
            parse_amount("1234567.123456789012345").unwrap().to_string(),
            "1234567.123456789012345"
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1e40").is_err());
    }

    #[test]
    fn test_negative_value_is_reported_and_not_added() {
        let mut company = empty_company();
        let output = run_session(&mut company, "1\n1\nE1\nAlice\nEng\n-5\n7\n");

        assert!(output.contains("must not be negative"));
        assert!(company.is_empty());
    }

    #[test]
    fn test_duplicate_id_is_reported() {
        let mut company = empty_company();
        let output = run_session(
            &mut company,
            "1\n1\nE1\nAlice\nEng\n1\n1\n1\nE1\nAnn\nEng\n2\n7\n",
        );

        assert!(output.contains("Employee ID already exists."));
        assert_eq!(company.find("E1").map(Employee::name), Some("Alice"));
    }

    #[test]
    fn test_search_and_remove() {
        let mut company = empty_company();
        let output = run_session(
            &mut company,
            "1\n1\nE1\nAlice\nEng\n100\n5\nE1\n2\nE1\n2\nE1\n5\nE1\n7\n",
        );

        assert!(output.contains("Employee Found:\nID: E1, Name: Alice"));
        assert!(output.contains("Employee removed."));
        assert!(output.contains("Employee not found."));
        assert!(company.is_empty());
    }

    #[test]
    fn test_invalid_choice_and_end_of_input() {
        let mut company = empty_company();
        let output = run_session(&mut company, "9\n");

        assert!(output.contains("Invalid choice. Try again."));
        assert!(!output.contains("Goodbye."));
    }

    #[test]
    fn test_report_lists_employees() {
        let mut company = empty_company();
        let output = run_session(&mut company, "1\n2\nE2\nBob\nOps\n200\n80\n3\n6\n7\n");

        assert!(output.contains("Hourly Rate: 200, Hours Worked per month: 80"));
        assert!(output.contains("Payroll Report: Acme"));
        assert!(output.contains("Total Payroll: Rs.16000"));
    }

    #[test]
    fn test_prompt_company_name_skips_blank_lines() {
        let mut shell = Shell::new(Cursor::new(b"  \nacme corp\n".to_vec()), Vec::new());
        assert_eq!(
            shell.prompt_company_name().unwrap(),
            Some("Acme Corp".to_string())
        );
    }
}
