//! Bootstrap state and run reports.

use std::fmt;

use serde::Serialize;

/// Whether a database holds the full schema and reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapState {
    /// Schema absent or partial, or reference rows missing.
    Uninitialized,
    /// Every table exists and every canonical seed row is present unchanged.
    Ready,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Outcome of creating the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    /// Tables created by this run, in creation order.
    pub created: Vec<String>,
    /// Tables that already existed.
    pub existing: Vec<String>,
}

/// Seed outcome for one lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSeedReport {
    pub table: &'static str,
    pub inserted: usize,
    pub existing: usize,
}

/// Outcome of seeding the lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub tables: Vec<TableSeedReport>,
}

impl SeedReport {
    /// Rows inserted across every table.
    #[must_use]
    pub fn inserted(&self) -> usize {
        self.tables.iter().map(|t| t.inserted).sum()
    }

    /// Look up the report for one table.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSeedReport> {
        self.tables.iter().find(|t| t.table == name)
    }
}

/// Outcome of a full create-and-seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub schema: SchemaReport,
    pub seed: SeedReport,
}

/// Row count for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: i64,
}

/// Read-only inspection of a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub state: BootstrapState,
    pub missing_tables: Vec<String>,
    /// Canonical seed keys not found in their lookup table.
    pub missing_seed_rows: usize,
    /// Seed keys stored with a payload that differs from the canonical rows.
    pub conflicting_seed_rows: usize,
    /// Row counts for tables that exist.
    pub counts: Vec<TableCount>,
}
