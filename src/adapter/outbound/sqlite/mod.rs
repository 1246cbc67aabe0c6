//! SQLite persistence adapters.
//!
//! Renders the schema descriptor to DDL, provisions and seeds a database, and
//! writes normalized rows using Diesel ORM.

pub mod bootstrap;
pub mod database;
pub mod ddl;
pub mod writer;

pub use bootstrap::SqliteBootstrap;
