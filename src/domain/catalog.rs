//! The canonical user-management schema.
//!
//! Leaf tables (`state`, `roleType`, `paymentTierType`, `deviceInfo`) carry no
//! foreign keys. `location` references `state`, `contact` references
//! `location`, and `user` references the role, tier, contact and device tables.

use super::schema::{
    CheckRule, Column, ColumnType, DefaultRule, SchemaDescriptor, Table, TableCheck, DELETED, ID,
};
use crate::error::SchemaError;

/// Width of every bounded text column.
pub const TEXT_MAX: u16 = 255;

/// Width of a state abbreviation.
pub const ABBREVIATION_LEN: u16 = 2;

/// Identifier of the first seeded payment tier, used as the user default.
///
/// Holds only when `paymentTierType` is empty before the first seed; a tier
/// inserted by hand beforehand shifts `Basic` to a later id. Inspection
/// reports that case as a seed conflict.
pub const DEFAULT_PAYMENT_TIER_ID: i32 = 1;

pub const STATE: &str = "state";
pub const LOCATION: &str = "location";
pub const CONTACT: &str = "contact";
pub const DEVICE_INFO: &str = "deviceInfo";
pub const ROLE_TYPE: &str = "roleType";
pub const PAYMENT_TIER_TYPE: &str = "paymentTierType";
pub const USER: &str = "user";

const fn text(name: &'static str) -> Column {
    Column::new(name, ColumnType::text(TEXT_MAX))
}

const fn reference(name: &'static str, table: &'static str) -> Column {
    Column::new(name, ColumnType::Integer).references(table, ID)
}

/// Build the canonical schema descriptor.
///
/// # Errors
/// Returns a [`SchemaError`] if the declarations are inconsistent.
pub fn define_schema() -> Result<SchemaDescriptor, SchemaError> {
    let state = Table::new(STATE)
        .with(Column::surrogate_key(ID))
        .with(text("Name").required())
        .with(
            Column::new("Abbreviation", ColumnType::fixed_text(ABBREVIATION_LEN))
                .required()
                .unique(),
        )
        .with_audit_columns();

    let role_type = Table::new(ROLE_TYPE)
        .with(Column::surrogate_key(ID))
        .with(text("Name").required().unique())
        .with(text("Description"))
        .with_audit_columns();

    let payment_tier_type = Table::new(PAYMENT_TIER_TYPE)
        .with(Column::surrogate_key(ID))
        .with(text("Name").required().unique())
        .with_audit_columns();

    let device_info = Table::new(DEVICE_INFO)
        .with(Column::surrogate_key(ID))
        .with(text("Name").required())
        .with(text("Type").required())
        .with(text("OS").required())
        .with(text("OSVersion").required())
        .with(text("Model").required())
        .with_audit_columns();

    let location = Table::new(LOCATION)
        .with(Column::surrogate_key(ID))
        .with(text("Address"))
        .with(text("StreetAddress"))
        .with(text("City"))
        .with(text("PostalCode"))
        .with(Column::new("Latitude", ColumnType::Float))
        .with(Column::new("Longitude", ColumnType::Float))
        .with(reference("StateId", STATE))
        .with_audit_columns();

    let contact = Table::new(CONTACT)
        .with(Column::surrogate_key(ID))
        .with(text("FullName").required())
        .with(text("FirstName").required())
        .with(text("LastName").required())
        .with(text("EmailAddress").required().unique())
        .with(text("PhoneNumber").required().unique())
        .with(reference("LocationId", LOCATION).unique())
        .with_audit_columns();

    let user = Table::new(USER)
        .with(Column::surrogate_key(ID))
        .with(text("Username").required().unique())
        .with(text("Email").required().unique())
        .with(reference("RoleTypeId", ROLE_TYPE).required())
        .with(
            Column::new("IsActive", ColumnType::Flag)
                .required()
                .default_to(DefaultRule::Integer(1)),
        )
        .with(
            reference("PaymentTierTypeId", PAYMENT_TIER_TYPE)
                .required()
                .default_to(DefaultRule::Integer(i64::from(DEFAULT_PAYMENT_TIER_ID))),
        )
        .with(reference("ContactId", CONTACT).unique())
        .with(reference("DeviceId", DEVICE_INFO).unique())
        .with(
            Column::new("LastLoginDateUTC", ColumnType::Timestamp)
                .required()
                .default_to(DefaultRule::CurrentTimestamp),
        )
        .with_audit_columns()
        .check(TableCheck {
            name: "user_deleted_is_inactive",
            rule: CheckRule::Excludes {
                set: DELETED,
                cleared: "IsActive",
            },
        });

    SchemaDescriptor::new(vec![
        state,
        role_type,
        payment_tier_type,
        device_info,
        location,
        contact,
        user,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{TextLength, CREATE_DATE};

    #[test]
    fn canonical_schema_is_valid() {
        let schema = define_schema().unwrap();
        assert_eq!(schema.tables().len(), 7);
    }

    #[test]
    fn dependents_are_created_after_their_targets() {
        let schema = define_schema().unwrap();
        let order: Vec<_> = schema.creation_order().map(|t| t.name).collect();
        let pos = |name| order.iter().position(|n| *n == name).unwrap();

        assert!(pos(STATE) < pos(LOCATION));
        assert!(pos(LOCATION) < pos(CONTACT));
        for target in [ROLE_TYPE, PAYMENT_TIER_TYPE, CONTACT, DEVICE_INFO] {
            assert!(pos(target) < pos(USER), "{target} must precede user");
        }
    }

    #[test]
    fn every_table_carries_audit_columns() {
        let schema = define_schema().unwrap();
        for table in schema.tables() {
            let created = table.column(CREATE_DATE).unwrap();
            assert_eq!(created.default, Some(DefaultRule::CurrentTimestamp));
            let deleted = table.column(DELETED).unwrap();
            assert_eq!(deleted.column_type, ColumnType::Flag);
            assert_eq!(deleted.default, Some(DefaultRule::Integer(0)));
        }
    }

    #[test]
    fn all_text_uses_one_representation() {
        let schema = define_schema().unwrap();
        for table in schema.tables() {
            for column in &table.columns {
                if let ColumnType::Text(len) = column.column_type {
                    let expected = if column.name == "Abbreviation" {
                        TextLength::Exact(ABBREVIATION_LEN)
                    } else {
                        TextLength::Max(TEXT_MAX)
                    };
                    assert_eq!(len, expected, "{}.{}", table.name, column.name);
                }
            }
        }
    }

    #[test]
    fn user_references_are_enforced_keys() {
        let schema = define_schema().unwrap();
        let user = schema.table(USER).unwrap();
        let targets: Vec<_> = user.foreign_keys().map(|(_, fk)| fk.table).collect();
        assert_eq!(targets, vec![ROLE_TYPE, PAYMENT_TIER_TYPE, CONTACT, DEVICE_INFO]);

        let tier = user.column("PaymentTierTypeId").unwrap();
        assert!(!tier.nullable);
        assert_eq!(
            tier.default,
            Some(DefaultRule::Integer(i64::from(DEFAULT_PAYMENT_TIER_ID)))
        );
        assert_eq!(user.checks.len(), 1);
    }
}
