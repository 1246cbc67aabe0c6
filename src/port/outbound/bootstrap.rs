//! Schema provisioning port.
//!
//! Defines the interface for applying a schema to a database and loading
//! its reference data.

use crate::domain::{BootstrapReport, SchemaDescriptor, SchemaReport, SeedReport, StatusReport};
use crate::error::Result;

/// Port for provisioning a database.
///
/// Every operation is idempotent and runs in its own transaction.
/// Implementations must leave no partial state behind on failure.
pub trait SchemaBootstrap {
    /// Create every table of `schema` that does not exist yet.
    fn ensure_schema(&self, schema: &SchemaDescriptor) -> Result<SchemaReport>;

    /// Upsert the canonical rows of the lookup tables.
    fn seed_reference_data(&self) -> Result<SeedReport>;

    /// Create the schema and seed it in a single transaction.
    fn bootstrap(&self, schema: &SchemaDescriptor) -> Result<BootstrapReport>;

    /// Report the current state without changing anything.
    fn inspect(&self, schema: &SchemaDescriptor) -> Result<StatusReport>;
}
