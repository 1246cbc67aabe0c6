//! SQLite schema provisioning and reference-data seeding.
//!
//! [`ensure_schema`] and [`seed_reference_data`] each run in their own
//! transaction and nest as savepoints when called inside one. Both read
//! before they write, so a deferred transaction racing another writer fails
//! with `SQLITE_BUSY` without waiting on the busy timeout. [`bootstrap`] and
//! every [`SqliteBootstrap`] write take the write lock up front with
//! `BEGIN IMMEDIATE`; callers driving the free functions against a shared
//! file should do the same. Either way a failure rolls back everything the
//! call did.

use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use super::database::connection::DbPool;
use super::database::model::{
    NewPaymentTierTypeRow, NewRoleTypeRow, NewStateRow, RowCount, TableName,
};
use super::database::schema::{payment_tier_type, role_type, state};
use super::ddl;
use crate::domain::bootstrap::{TableCount, TableSeedReport};
use crate::domain::catalog::{DEFAULT_PAYMENT_TIER_ID, PAYMENT_TIER_TYPE, ROLE_TYPE, STATE};
use crate::domain::seed::{PAYMENT_TIERS, ROLES, STATES};
use crate::domain::{
    BootstrapReport, BootstrapState, SchemaDescriptor, SchemaReport, SeedReport, StatusReport,
};
use crate::error::{Error, Result, SeedError};
use crate::port::SchemaBootstrap;

fn existing_tables(conn: &mut SqliteConnection) -> Result<HashSet<String>> {
    let names = diesel::sql_query("SELECT name FROM sqlite_master WHERE type = 'table'")
        .load::<TableName>(conn)?;
    Ok(names.into_iter().map(|t| t.name).collect())
}

/// Create every missing table of `schema`.
///
/// Existing tables are left untouched; running this twice is a no-op the
/// second time.
///
/// # Errors
/// Returns an error if a statement fails; nothing is kept in that case.
pub fn ensure_schema(conn: &mut SqliteConnection, schema: &SchemaDescriptor) -> Result<SchemaReport> {
    conn.transaction(|conn| {
        let present = existing_tables(conn)?;
        let mut report = SchemaReport::default();

        for table in schema.creation_order() {
            let existed = present.contains(table.name);
            diesel::sql_query(ddl::create_table(table)).execute(conn)?;
            if existed {
                report.existing.push(table.name.to_string());
            } else {
                debug!(table = table.name, "Created table");
                report.created.push(table.name.to_string());
            }
        }

        info!(
            created = report.created.len(),
            existing = report.existing.len(),
            "Schema ensured"
        );
        Ok(report)
    })
}

/// Constraint violations while seeding mean the lookup table was edited by
/// hand or holds conflicting data.
fn seed_error(table: &'static str, key: &str, err: diesel::result::Error) -> Error {
    match Error::from(err) {
        Error::Constraint(violation) => SeedError::Conflict {
            table,
            key: key.to_string(),
            reason: violation.to_string(),
        }
        .into(),
        other => other,
    }
}

fn seed_states(conn: &mut SqliteConnection) -> Result<TableSeedReport> {
    let mut inserted = 0;
    for seed in STATES {
        let row = NewStateRow {
            name: seed.name,
            abbreviation: seed.abbreviation,
        };
        let affected = diesel::insert_into(state::table)
            .values(&row)
            .on_conflict(state::abbreviation)
            .do_nothing()
            .execute(conn)
            .map_err(|e| seed_error(STATE, seed.abbreviation, e))?;

        if affected == 0 {
            let stored: String = state::table
                .filter(state::abbreviation.eq(seed.abbreviation))
                .select(state::name)
                .first(conn)?;
            if stored != seed.name {
                return Err(SeedError::Conflict {
                    table: STATE,
                    key: seed.abbreviation.to_string(),
                    reason: format!("stored name '{stored}' differs from '{}'", seed.name),
                }
                .into());
            }
        }
        inserted += affected;
    }
    Ok(TableSeedReport {
        table: STATE,
        inserted,
        existing: STATES.len() - inserted,
    })
}

fn seed_roles(conn: &mut SqliteConnection) -> Result<TableSeedReport> {
    let mut inserted = 0;
    for seed in ROLES {
        let row = NewRoleTypeRow {
            name: seed.name,
            description: Some(seed.description),
        };
        let affected = diesel::insert_into(role_type::table)
            .values(&row)
            .on_conflict(role_type::name)
            .do_nothing()
            .execute(conn)
            .map_err(|e| seed_error(ROLE_TYPE, seed.name, e))?;

        if affected == 0 {
            let stored: Option<String> = role_type::table
                .filter(role_type::name.eq(seed.name))
                .select(role_type::description)
                .first(conn)?;
            if stored.as_deref() != Some(seed.description) {
                return Err(SeedError::Conflict {
                    table: ROLE_TYPE,
                    key: seed.name.to_string(),
                    reason: format!(
                        "stored description {stored:?} differs from '{}'",
                        seed.description
                    ),
                }
                .into());
            }
        }
        inserted += affected;
    }
    Ok(TableSeedReport {
        table: ROLE_TYPE,
        inserted,
        existing: ROLES.len() - inserted,
    })
}

fn seed_payment_tiers(conn: &mut SqliteConnection) -> Result<TableSeedReport> {
    let mut inserted = 0;
    for seed in PAYMENT_TIERS {
        inserted += diesel::insert_into(payment_tier_type::table)
            .values(&NewPaymentTierTypeRow { name: seed.name })
            .on_conflict(payment_tier_type::name)
            .do_nothing()
            .execute(conn)
            .map_err(|e| seed_error(PAYMENT_TIER_TYPE, seed.name, e))?;
    }
    Ok(TableSeedReport {
        table: PAYMENT_TIER_TYPE,
        inserted,
        existing: PAYMENT_TIERS.len() - inserted,
    })
}

/// Upsert the canonical rows of `state`, `roleType` and `paymentTierType`.
///
/// Rows already present with the same payload are skipped. A row with the
/// same natural key but a different payload fails the whole call with
/// [`SeedError::Conflict`].
///
/// # Errors
/// Returns [`SeedError::Conflict`] on conflicting data, or a database error.
pub fn seed_reference_data(conn: &mut SqliteConnection) -> Result<SeedReport> {
    conn.transaction(|conn| {
        let report = SeedReport {
            tables: vec![
                seed_states(conn)?,
                seed_roles(conn)?,
                seed_payment_tiers(conn)?,
            ],
        };
        for table in &report.tables {
            debug!(
                table = table.table,
                inserted = table.inserted,
                existing = table.existing,
                "Seeded table"
            );
        }
        info!(inserted = report.inserted(), "Reference data seeded");
        Ok(report)
    })
}

/// Create the schema and seed it in one immediate transaction.
///
/// Safe to run against an empty, partial or fully provisioned database;
/// always ends with the database [`BootstrapState::Ready`] or unchanged.
///
/// # Errors
/// Returns the first error; the transaction is rolled back.
pub fn bootstrap(conn: &mut SqliteConnection, schema: &SchemaDescriptor) -> Result<BootstrapReport> {
    conn.immediate_transaction(|conn| {
        let schema = ensure_schema(conn, schema)?;
        let seed = seed_reference_data(conn)?;
        Ok(BootstrapReport { schema, seed })
    })
}

fn missing_keys<'a>(stored: &[String], expected: impl Iterator<Item = &'a str>) -> usize {
    let stored: HashSet<&str> = stored.iter().map(String::as_str).collect();
    expected.filter(|key| !stored.contains(key)).count()
}

fn missing_seed_rows(conn: &mut SqliteConnection, present: &HashSet<String>) -> Result<usize> {
    let mut missing = 0;

    if present.contains(STATE) {
        let keys: Vec<String> = state::table.select(state::abbreviation).load(conn)?;
        missing += missing_keys(&keys, STATES.iter().map(|s| s.abbreviation));
    } else {
        missing += STATES.len();
    }

    if present.contains(ROLE_TYPE) {
        let keys: Vec<String> = role_type::table.select(role_type::name).load(conn)?;
        missing += missing_keys(&keys, ROLES.iter().map(|r| r.name));
    } else {
        missing += ROLES.len();
    }

    if present.contains(PAYMENT_TIER_TYPE) {
        let keys: Vec<String> = payment_tier_type::table
            .select(payment_tier_type::name)
            .load(conn)?;
        missing += missing_keys(&keys, PAYMENT_TIERS.iter().map(|t| t.name));
    } else {
        missing += PAYMENT_TIERS.len();
    }

    Ok(missing)
}

/// Count seed keys whose stored payload differs from the canonical one, plus
/// a first tier stored under any id other than the user default.
fn conflicting_seed_rows(conn: &mut SqliteConnection, present: &HashSet<String>) -> Result<usize> {
    let mut conflicts = 0;

    if present.contains(STATE) {
        let stored: HashMap<String, String> = state::table
            .select((state::abbreviation, state::name))
            .load::<(String, String)>(conn)?
            .into_iter()
            .collect();
        conflicts += STATES
            .iter()
            .filter(|s| stored.get(s.abbreviation).is_some_and(|name| name != s.name))
            .count();
    }

    if present.contains(ROLE_TYPE) {
        let stored: HashMap<String, Option<String>> = role_type::table
            .select((role_type::name, role_type::description))
            .load::<(String, Option<String>)>(conn)?
            .into_iter()
            .collect();
        conflicts += ROLES
            .iter()
            .filter(|r| {
                stored
                    .get(r.name)
                    .is_some_and(|description| description.as_deref() != Some(r.description))
            })
            .count();
    }

    if present.contains(PAYMENT_TIER_TYPE) {
        if let Some(default_tier) = PAYMENT_TIERS.first() {
            let id: Option<i32> = payment_tier_type::table
                .filter(payment_tier_type::name.eq(default_tier.name))
                .select(payment_tier_type::id)
                .first(conn)
                .optional()?;
            if id.is_some_and(|id| id != DEFAULT_PAYMENT_TIER_ID) {
                conflicts += 1;
            }
        }
    }

    Ok(conflicts)
}

/// Report whether `schema` is fully applied and seeded. Read-only.
///
/// A seed key stored with a different payload, or a first tier stored under
/// an id other than [`DEFAULT_PAYMENT_TIER_ID`], counts as a conflict and
/// keeps the database out of [`BootstrapState::Ready`].
///
/// # Errors
/// Returns a database error if the catalog cannot be read.
pub fn inspect(conn: &mut SqliteConnection, schema: &SchemaDescriptor) -> Result<StatusReport> {
    conn.transaction(|conn| {
        let present = existing_tables(conn)?;
        let mut missing_tables = Vec::new();
        let mut counts = Vec::new();

        for table in schema.tables() {
            if !present.contains(table.name) {
                missing_tables.push(table.name.to_string());
                continue;
            }
            let sql = format!("SELECT COUNT(*) AS count FROM {}", ddl::quote(table.name));
            let rows = diesel::sql_query(sql).get_result::<RowCount>(conn)?.count;
            counts.push(TableCount {
                table: table.name.to_string(),
                rows,
            });
        }

        let missing_seed_rows = missing_seed_rows(conn, &present)?;
        let conflicting_seed_rows = conflicting_seed_rows(conn, &present)?;
        let state = if missing_tables.is_empty()
            && missing_seed_rows == 0
            && conflicting_seed_rows == 0
        {
            BootstrapState::Ready
        } else {
            BootstrapState::Uninitialized
        };

        Ok(StatusReport {
            state,
            missing_tables,
            missing_seed_rows,
            conflicting_seed_rows,
            counts,
        })
    })
}

/// [`SchemaBootstrap`] backed by a SQLite connection pool.
pub struct SqliteBootstrap {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBootstrap {
    /// Create a new bootstrapper with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl SchemaBootstrap for SqliteBootstrap {
    fn ensure_schema(&self, schema: &SchemaDescriptor) -> Result<SchemaReport> {
        let mut conn = self.pool.get()?;
        conn.immediate_transaction(|conn| ensure_schema(conn, schema))
    }

    fn seed_reference_data(&self) -> Result<SeedReport> {
        let mut conn = self.pool.get()?;
        conn.immediate_transaction(seed_reference_data)
    }

    fn bootstrap(&self, schema: &SchemaDescriptor) -> Result<BootstrapReport> {
        let mut conn = self.pool.get()?;
        bootstrap(&mut conn, schema)
    }

    fn inspect(&self, schema: &SchemaDescriptor) -> Result<StatusReport> {
        let mut conn = self.pool.get()?;
        inspect(&mut conn, schema)
    }
}
