//! Employee registry CLI
//!
//! Without a command, starts the interactive menu. With a command, runs a
//! single operation against the company's data and exits.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use employee_registry::company::Company;
use employee_registry::config::ConfigLoader;
use employee_registry::error::{RegistryError, RegistryResult};
use employee_registry::models::Employee;
use employee_registry::shell::{Shell, parse_amount};
use employee_registry::store::JsonFileStore;

#[derive(Debug, Parser)]
#[command(name = "employee-registry")]
#[command(about = "Employee records and payroll for small companies", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON data file shared by all companies
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    /// Company to operate on (asked for when not configured)
    #[arg(long, global = true)]
    company: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add an employee
    #[command(subcommand)]
    Add(AddCommand),
    /// Remove an employee by id
    Remove { id: String },
    /// List all employees
    List,
    /// Print the total monthly payroll
    Total,
    /// Show one employee by id
    Search { id: String },
    /// Print the payroll report
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
enum AddCommand {
    /// Salaried employee
    FullTime {
        id: String,
        name: String,
        department: String,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        monthly_salary: Decimal,
    },
    /// Hourly employee
    PartTime {
        id: String,
        name: String,
        department: String,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        hourly_rate: Decimal,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        hours_worked_per_month: Decimal,
    },
    /// Salaried employee with a bonus
    Manager {
        id: String,
        name: String,
        department: String,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        monthly_salary: Decimal,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        bonus: Decimal,
    },
}

impl AddCommand {
    fn into_employee(self) -> RegistryResult<Employee> {
        match self {
            AddCommand::FullTime {
                id,
                name,
                department,
                monthly_salary,
            } => Employee::full_time(id, name, department, monthly_salary),
            AddCommand::PartTime {
                id,
                name,
                department,
                hourly_rate,
                hours_worked_per_month,
            } => Employee::part_time(id, name, department, hourly_rate, hours_worked_per_month),
            AddCommand::Manager {
                id,
                name,
                department,
                monthly_salary,
                bonus,
            } => Employee::manager(id, name, department, monthly_salary, bonus),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn execute(
    command: Commands,
    company: &mut Company<JsonFileStore>,
    out: &mut impl Write,
) -> RegistryResult<()> {
    match command {
        Commands::Add(add) => {
            if company.add(add.into_employee()?)? {
                writeln!(out, "Employee added successfully.")?;
            } else {
                writeln!(out, "Employee ID already exists.")?;
            }
        }
        Commands::Remove { id } => {
            if company.remove(&id)? {
                writeln!(out, "Employee removed.")?;
            } else {
                writeln!(out, "Employee not found.")?;
            }
        }
        Commands::List => {
            for employee in company.employees() {
                writeln!(out, "{}", employee)?;
            }
        }
        Commands::Total => writeln!(out, "{}{}", company.currency(), company.total_payroll()?)?,
        Commands::Search { id } => match company.find(&id) {
            Some(employee) => writeln!(out, "{}", employee)?,
            None => writeln!(out, "Employee not found.")?,
        },
        Commands::Report { json } => {
            let report = company.report()?;
            if json {
                let rendered = serde_json::to_string_pretty(&report).map_err(|e| {
                    RegistryError::Serialization {
                        message: e.to_string(),
                    }
                })?;
                writeln!(out, "{}", rendered)?;
            } else {
                writeln!(out, "{}", report)?;
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> RegistryResult<()> {
    let config = ConfigLoader::load_optional(cli.config.as_deref())?
        .with_overrides(cli.data_file, cli.company)
        .into_config();

    let company_name = match config.company.clone() {
        Some(name) => name,
        None => {
            let mut shell = Shell::new(io::stdin().lock(), io::stdout());
            match shell.prompt_company_name()? {
                Some(name) => name,
                None => return Ok(()),
            }
        }
    };

    let mut company = Company::from_config(&config, &company_name)?;
    match cli.command {
        None => Shell::new(io::stdin().lock(), io::stdout()).run(&mut company),
        Some(command) => execute(command, &mut company, &mut io::stdout().lock()),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
