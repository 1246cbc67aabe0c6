//! Engine-independent schema descriptor.
//!
//! A [`SchemaDescriptor`] is a validated, immutable list of [`Table`]s. It is
//! built by a pure function (see [`crate::domain::catalog::define_schema`]),
//! passed by reference to whatever needs it, and never touches a database.
//! Rendering it into SQL is the job of an outbound adapter.

mod validate;

use std::fmt;

use serde::Serialize;

use crate::error::SchemaError;

/// Name of the creation timestamp column shared by every table.
pub const CREATE_DATE: &str = "CreateDateUTC";
/// Name of the last-update timestamp column shared by every table.
pub const UPDATE_DATE: &str = "UpdateDateUTC";
/// Name of the soft-delete timestamp column shared by every table.
pub const DELETE_DATE: &str = "DeleteDateUTC";
/// Name of the soft-delete flag shared by every table.
pub const DELETED: &str = "Deleted";
/// Name of the surrogate key shared by every table.
pub const ID: &str = "Id";

/// Length rule for a text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextLength {
    /// At most this many characters.
    Max(u16),
    /// Exactly this many characters.
    Exact(u16),
}

/// Semantic column type.
///
/// There is a single text type; width is a constraint, not a different type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    /// Small integer restricted to {0, 1}.
    Flag,
    Text(TextLength),
    Float,
    Timestamp,
}

impl ColumnType {
    /// Bounded text of at most `max` characters.
    #[must_use]
    pub const fn text(max: u16) -> Self {
        Self::Text(TextLength::Max(max))
    }

    /// Fixed-width text of exactly `len` characters.
    #[must_use]
    pub const fn fixed_text(len: u16) -> Self {
        Self::Text(TextLength::Exact(len))
    }

    /// True for types stored as integers.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self, Self::Integer | Self::Flag)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Flag => write!(f, "flag"),
            Self::Text(TextLength::Max(n)) => write!(f, "text(<={n})"),
            Self::Text(TextLength::Exact(n)) => write!(f, "text(={n})"),
            Self::Float => write!(f, "float"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Default value applied when an insert omits the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultRule {
    /// The engine's current UTC time, evaluated for each inserted row.
    CurrentTimestamp,
    /// A literal integer.
    Integer(i64),
}

/// Target of a foreign-key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

/// A single column declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<ForeignKey>,
}

impl Column {
    /// Nullable column with no constraints.
    #[must_use]
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: true,
            unique: false,
            primary_key: false,
            default: None,
            references: None,
        }
    }

    /// Autoincrementing integer surrogate key.
    #[must_use]
    pub const fn surrogate_key(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Integer,
            nullable: false,
            unique: false,
            primary_key: true,
            default: None,
            references: None,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub const fn default_to(mut self, rule: DefaultRule) -> Self {
        self.default = Some(rule);
        self
    }

    #[must_use]
    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some(ForeignKey { table, column });
        self
    }
}

/// Table-level constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckRule {
    /// When flag `set` is 1, flag `cleared` must be 0.
    Excludes {
        set: &'static str,
        cleared: &'static str,
    },
}

/// Named table-level check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCheck {
    pub name: &'static str,
    pub rule: CheckRule,
}

/// A table declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: &'static str,
    pub columns: Vec<Column>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<TableCheck>,
}

impl Table {
    /// Empty table with the given name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            columns: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Append a column.
    #[must_use]
    pub fn with(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a table-level check.
    #[must_use]
    pub fn check(mut self, check: TableCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Append the creation, update, soft-delete timestamps and deleted flag.
    #[must_use]
    pub fn with_audit_columns(self) -> Self {
        self.with(
            Column::new(CREATE_DATE, ColumnType::Timestamp)
                .required()
                .default_to(DefaultRule::CurrentTimestamp),
        )
        .with(Column::new(UPDATE_DATE, ColumnType::Timestamp))
        .with(Column::new(DELETE_DATE, ColumnType::Timestamp))
        .with(
            Column::new(DELETED, ColumnType::Flag)
                .required()
                .default_to(DefaultRule::Integer(0)),
        )
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns that reference another table.
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&Column, ForeignKey)> {
        self.columns
            .iter()
            .filter_map(|c| c.references.map(|fk| (c, fk)))
    }
}

/// A validated set of tables.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDescriptor {
    tables: Vec<Table>,
    #[serde(skip)]
    order: Vec<usize>,
}

impl SchemaDescriptor {
    /// Validate `tables` and build a descriptor.
    ///
    /// # Errors
    /// Returns the first [`SchemaError`] found, naming the offending table
    /// and column.
    pub fn new(tables: Vec<Table>) -> Result<Self, SchemaError> {
        let order = validate::validate(&tables)?;
        Ok(Self { tables, order })
    }

    /// Tables in declaration order.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Tables ordered so that every referenced table precedes its dependents.
    pub fn creation_order(&self) -> impl Iterator<Item = &Table> {
        self.order.iter().map(|&i| &self.tables[i])
    }
}
