//! Benchmarks for payroll calculation and persistence.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tempfile::TempDir;

use employee_registry::company::Company;
use employee_registry::models::Employee;
use employee_registry::store::{JsonFileStore, MemoryStore};

/// Builds a company of `count` employees cycling through all three variants.
fn create_company(count: usize) -> Company<MemoryStore> {
    let mut company = Company::open("Bench", MemoryStore::new()).expect("Failed to open company");
    for i in 0..count {
        let id = format!("E{:05}", i);
        let employee = match i % 3 {
            0 => Employee::full_time(id, "Full", "Eng", Decimal::new(5_000_000, 2)),
            1 => Employee::part_time(id, "Part", "Ops", Decimal::new(2050, 2), Decimal::new(80, 0)),
            _ => Employee::manager(
                id,
                "Lead",
                "Eng",
                Decimal::new(6_000_000, 2),
                Decimal::new(500_000, 2),
            ),
        }
        .expect("Valid employee");
        company.add(employee).expect("Failed to add employee");
    }
    company
}

fn bench_total_payroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_payroll");
    for count in [10, 100, 1000] {
        let company = create_company(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &company, |b, company| {
            b.iter(|| black_box(company.total_payroll().unwrap()))
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let company = create_company(100);
    c.bench_function("report_100_employees", |b| {
        b.iter(|| black_box(company.report().unwrap().to_string()))
    });
}

fn bench_file_reload(c: &mut Criterion) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("employees.json");
    let source = create_company(100);
    let mut company =
        Company::open("Bench", JsonFileStore::new(&path)).expect("Failed to open company");
    for employee in source.employees() {
        company.add(employee.clone()).expect("Failed to add employee");
    }

    c.bench_function("reload_100_employees", |b| {
        b.iter(|| black_box(company.load().expect("Failed to reload")))
    });
}

criterion_group!(benches, bench_total_payroll, bench_report, bench_file_reload);
criterion_main!(benches);
