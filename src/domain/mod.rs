//! Engine-independent domain logic: the schema model, the canonical catalog,
//! reference data and normalized records.

pub mod bootstrap;
pub mod catalog;
pub mod record;
pub mod schema;
pub mod seed;

pub use bootstrap::{BootstrapReport, BootstrapState, SchemaReport, SeedReport, StatusReport};
pub use catalog::define_schema;
pub use schema::SchemaDescriptor;
