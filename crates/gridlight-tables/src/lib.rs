//! TOML snapshots of the constant tables and drift checks against the
//! compiled enumerations.
#![forbid(unsafe_code)]

pub mod drift;
pub mod error;
pub mod tables;

pub use drift::{Drift, DriftReport};
pub use error::TablesError;
pub use tables::{ConstantTables, Table};
