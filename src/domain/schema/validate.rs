//! Definition-time consistency checks.

use std::collections::HashSet;

use super::{CheckRule, ColumnType, DefaultRule, Table};
use crate::error::SchemaError;

/// Validate `tables` and return their creation order as indexes.
pub(super) fn validate(tables: &[Table]) -> Result<Vec<usize>, SchemaError> {
    let mut seen = HashSet::new();
    for table in tables {
        if !seen.insert(table.name) {
            return Err(SchemaError::DuplicateTable {
                table: table.name.to_string(),
            });
        }
        validate_columns(table)?;
        validate_checks(table)?;
    }
    for table in tables {
        validate_references(table, tables)?;
    }
    creation_order(tables)
}

fn validate_columns(table: &Table) -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    for column in &table.columns {
        if !names.insert(column.name) {
            return Err(SchemaError::DuplicateColumn {
                table: table.name.to_string(),
                column: column.name.to_string(),
            });
        }

        let invalid = |reason: &str| SchemaError::InvalidDefault {
            table: table.name.to_string(),
            column: column.name.to_string(),
            reason: reason.to_string(),
        };
        match (column.default, column.column_type) {
            (None, _) => {}
            (Some(DefaultRule::CurrentTimestamp), ColumnType::Timestamp) => {}
            (Some(DefaultRule::CurrentTimestamp), _) => {
                return Err(invalid("current timestamp default on a non-timestamp column"));
            }
            (Some(DefaultRule::Integer(0 | 1)), ColumnType::Flag) => {}
            (Some(DefaultRule::Integer(_)), ColumnType::Flag) => {
                return Err(invalid("flag default must be 0 or 1"));
            }
            (Some(DefaultRule::Integer(_)), ColumnType::Integer) => {}
            (Some(DefaultRule::Integer(_)), _) => {
                return Err(invalid("integer default on a non-integer column"));
            }
        }
    }

    let keys = table.columns.iter().filter(|c| c.primary_key).count();
    if keys != 1 {
        return Err(SchemaError::PrimaryKey {
            table: table.name.to_string(),
            found: keys,
        });
    }
    Ok(())
}

fn validate_checks(table: &Table) -> Result<(), SchemaError> {
    for check in &table.checks {
        let CheckRule::Excludes { set, cleared } = check.rule;
        for flag in [set, cleared] {
            let reason = match table.column(flag) {
                None => format!("unknown column '{flag}'"),
                Some(c) if c.column_type != ColumnType::Flag => {
                    format!("column '{flag}' is not a flag")
                }
                Some(_) => continue,
            };
            return Err(SchemaError::InvalidCheck {
                table: table.name.to_string(),
                check: check.name.to_string(),
                reason,
            });
        }
    }
    Ok(())
}

fn validate_references(table: &Table, tables: &[Table]) -> Result<(), SchemaError> {
    for (column, fk) in table.foreign_keys() {
        let target = tables
            .iter()
            .find(|t| t.name == fk.table)
            .ok_or_else(|| SchemaError::UnknownTable {
                table: table.name.to_string(),
                column: column.name.to_string(),
                target: fk.table.to_string(),
            })?;
        let target_column = target
            .column(fk.column)
            .ok_or_else(|| SchemaError::UnknownColumn {
                table: table.name.to_string(),
                column: column.name.to_string(),
                target_table: fk.table.to_string(),
                target_column: fk.column.to_string(),
            })?;
        if !(target_column.primary_key || target_column.unique) {
            return Err(SchemaError::NonUniqueTarget {
                table: table.name.to_string(),
                column: column.name.to_string(),
                target_table: fk.table.to_string(),
                target_column: fk.column.to_string(),
            });
        }
        if target_column.column_type != column.column_type {
            return Err(SchemaError::TypeMismatch {
                table: table.name.to_string(),
                column: column.name.to_string(),
                expected: target_column.column_type.to_string(),
                found: column.column_type.to_string(),
            });
        }
    }
    Ok(())
}

/// Stable topological sort: among ready tables, declaration order wins.
fn creation_order(tables: &[Table]) -> Result<Vec<usize>, SchemaError> {
    let mut placed = vec![false; tables.len()];
    let mut order = Vec::with_capacity(tables.len());

    while order.len() < tables.len() {
        let ready = (0..tables.len()).find(|&i| {
            !placed[i]
                && tables[i].foreign_keys().all(|(_, fk)| {
                    fk.table == tables[i].name
                        || tables
                            .iter()
                            .position(|t| t.name == fk.table)
                            .is_some_and(|j| placed[j])
                })
        });
        match ready {
            Some(i) => {
                placed[i] = true;
                order.push(i);
            }
            None => {
                let tables = tables
                    .iter()
                    .zip(&placed)
                    .filter(|(_, &done)| !done)
                    .map(|(t, _)| t.name.to_string())
                    .collect();
                return Err(SchemaError::Cycle { tables });
            }
        }
    }
    Ok(order)
}
