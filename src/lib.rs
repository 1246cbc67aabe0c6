//! userdb - schema definition and bootstrap for a user-management database.
//!
//! The crate declares a seven-table relational schema (users, roles, payment
//! tiers, contacts, locations, devices and US states), provisions it on
//! SQLite, and seeds the lookup tables with static reference data. Running
//! the bootstrap any number of times leaves the database in the same state.
//!
//! # Architecture
//!
//! - [`domain`] - Engine-independent schema model, canonical catalog, seed
//!   data and normalized records
//! - [`port`] - The [`port::SchemaBootstrap`] trait
//! - [`adapter`] - SQLite implementation (DDL rendering, bootstrap, writer)
//!   and the CLI
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use userdb::adapter::outbound::sqlite::database::connection::{create_pool, PoolOptions};
//! use userdb::adapter::outbound::sqlite::SqliteBootstrap;
//! use userdb::domain::define_schema;
//! use userdb::port::SchemaBootstrap;
//!
//! fn main() -> userdb::error::Result<()> {
//!     let schema = define_schema()?;
//!     let pool = create_pool("userdb.db", PoolOptions::default())?;
//!     let report = SqliteBootstrap::new(pool).bootstrap(&schema)?;
//!     println!("{} reference rows inserted", report.seed.inserted());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
