use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Schema definition errors, raised before any connection is opened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("table '{table}' is declared more than once")]
    DuplicateTable { table: String },

    #[error("column '{table}.{column}' is declared more than once")]
    DuplicateColumn { table: String, column: String },

    #[error("table '{table}' must declare exactly one primary key column, found {found}")]
    PrimaryKey { table: String, found: usize },

    #[error("foreign key '{table}.{column}' references unknown table '{target}'")]
    UnknownTable {
        table: String,
        column: String,
        target: String,
    },

    #[error("foreign key '{table}.{column}' references unknown column '{target_table}.{target_column}'")]
    UnknownColumn {
        table: String,
        column: String,
        target_table: String,
        target_column: String,
    },

    #[error("foreign key '{table}.{column}' references '{target_table}.{target_column}', which is neither primary key nor unique")]
    NonUniqueTarget {
        table: String,
        column: String,
        target_table: String,
        target_column: String,
    },

    #[error("column '{table}.{column}' has type {found} but references a column of type {expected}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: String,
        found: String,
    },

    #[error("invalid default for '{table}.{column}': {reason}")]
    InvalidDefault {
        table: String,
        column: String,
        reason: String,
    },

    #[error("check '{check}' on table '{table}' is invalid: {reason}")]
    InvalidCheck {
        table: String,
        check: String,
        reason: String,
    },

    #[error("foreign keys form a cycle through tables: {}", tables.join(", "))]
    Cycle { tables: Vec<String> },
}

/// Reference-data seeding errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed data conflict in '{table}' for key '{key}': {reason}")]
    Conflict {
        table: &'static str,
        key: String,
        reason: String,
    },
}

/// Constraint violations reported by the database engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("referential integrity violated: {0}")]
    ForeignKey(String),

    #[error("unique constraint violated: {0}")]
    Unique(String),

    #[error("check constraint violated: {0}")]
    Check(String),

    #[error("not-null constraint violated: {0}")]
    NotNull(String),
}

/// Writer-side record validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be {expected} characters, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::ForeignKeyViolation => {
                        ConstraintError::ForeignKey(message).into()
                    }
                    DatabaseErrorKind::UniqueViolation => ConstraintError::Unique(message).into(),
                    DatabaseErrorKind::CheckViolation => ConstraintError::Check(message).into(),
                    DatabaseErrorKind::NotNullViolation => {
                        ConstraintError::NotNull(message).into()
                    }
                    DatabaseErrorKind::ClosedConnection => Error::Connection(message),
                    _ => Error::Database(message),
                }
            }
            other => Error::Database(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for Error {
    fn from(err: diesel::ConnectionError) -> Self {
        Error::Connection(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for Error {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Error::Connection(err.to_string())
    }
}
