//! Schema migrations for the management API database.

pub mod migrations;
pub mod migrator;

pub use migrator::Migrator;
