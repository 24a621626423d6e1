//! Employee registry
//!
//! This crate models employees of different compensation types, keeps each
//! company's employees in a shared JSON data file, and calculates payroll
//! totals and reports.

#![warn(missing_docs)]

pub mod company;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;
pub mod store;
