//! SQLite DDL rendering for a [`SchemaDescriptor`].
//!
//! Only identifiers from the descriptor are interpolated, and every one of
//! them is quoted. No runtime value ever reaches these strings.

use crate::domain::schema::{
    CheckRule, Column, ColumnType, DefaultRule, SchemaDescriptor, Table, TableCheck, TextLength,
};

/// Current UTC time with millisecond precision, evaluated by the engine.
pub const CURRENT_TIMESTAMP_SQL: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

/// Quote an identifier for SQLite.
#[must_use]
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

const fn type_name(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Integer => "INTEGER",
        ColumnType::Flag => "SMALLINT",
        ColumnType::Text(_) => "TEXT",
        ColumnType::Float => "REAL",
        ColumnType::Timestamp => "TIMESTAMP",
    }
}

fn column_definition(column: &Column) -> String {
    let name = quote(column.name);
    let mut sql = format!("{name} {}", type_name(column.column_type));

    if !column.nullable {
        sql.push_str(" NOT NULL");
    }
    if column.primary_key {
        sql.push_str(" PRIMARY KEY");
        if column.column_type == ColumnType::Integer {
            sql.push_str(" AUTOINCREMENT");
        }
    }
    if column.unique {
        sql.push_str(" UNIQUE");
    }
    match column.default {
        Some(DefaultRule::CurrentTimestamp) => {
            sql.push_str(&format!(" DEFAULT ({CURRENT_TIMESTAMP_SQL})"));
        }
        Some(DefaultRule::Integer(value)) => sql.push_str(&format!(" DEFAULT {value}")),
        None => {}
    }
    match column.column_type {
        ColumnType::Flag => sql.push_str(&format!(" CHECK ({name} IN (0, 1))")),
        ColumnType::Text(TextLength::Max(n)) => {
            sql.push_str(&format!(" CHECK (length({name}) <= {n})"));
        }
        ColumnType::Text(TextLength::Exact(n)) => {
            sql.push_str(&format!(" CHECK (length({name}) = {n})"));
        }
        ColumnType::Integer | ColumnType::Float | ColumnType::Timestamp => {}
    }
    if let Some(fk) = column.references {
        sql.push_str(&format!(" REFERENCES {} ({})", quote(fk.table), quote(fk.column)));
    }
    sql
}

fn check_definition(check: &TableCheck) -> String {
    let CheckRule::Excludes { set, cleared } = check.rule;
    format!(
        "CONSTRAINT {} CHECK ({} = 0 OR {} = 0)",
        quote(check.name),
        quote(set),
        quote(cleared)
    )
}

/// `CREATE TABLE IF NOT EXISTS` statement for one table.
#[must_use]
pub fn create_table(table: &Table) -> String {
    let definitions: Vec<String> = table
        .columns
        .iter()
        .map(column_definition)
        .chain(table.checks.iter().map(check_definition))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        quote(table.name),
        definitions.join(",\n    ")
    )
}

/// Every statement needed to create `schema`, in creation order.
#[must_use]
pub fn create_statements(schema: &SchemaDescriptor) -> Vec<String> {
    schema.creation_order().map(create_table).collect()
}

/// The whole schema as a single script.
#[must_use]
pub fn render_script(schema: &SchemaDescriptor) -> String {
    let mut script = create_statements(schema).join(";\n\n");
    script.push_str(";\n");
    script
}
