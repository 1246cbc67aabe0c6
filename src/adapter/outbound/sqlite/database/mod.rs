//! SQLite database modules.
//!
//! Provides connection management, the Diesel view of the schema and the
//! row model types.

pub mod connection;
pub mod model;
pub mod schema;
