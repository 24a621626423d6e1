//! Configuration loading for the employee registry.
//!
//! Settings come from an optional YAML file and are then overridden by
//! command line flags. Every setting has a default, so running without a
//! configuration file is normal.
//!
//! # Example
//!
//! ```no_run
//! use employee_registry::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./registry.yaml").unwrap();
//! println!("Data file: {}", loader.config().data_file.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_CURRENCY, RegistryConfig};
