//! Database model types for Diesel ORM.
//!
//! Insertable rows leave out `Id`, `CreateDateUTC` and every other column the
//! engine fills in by default.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{contact, device_info, location, payment_tier_type, role_type, state, users};

/// Database row for a state (queryable).
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = state)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StateRow {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub create_date_utc: NaiveDateTime,
    pub update_date_utc: Option<NaiveDateTime>,
    pub delete_date_utc: Option<NaiveDateTime>,
    pub deleted: i16,
}

/// Database row for a state (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = state)]
pub struct NewStateRow<'a> {
    pub name: &'a str,
    pub abbreviation: &'a str,
}

/// Database row for a role (queryable).
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = role_type)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RoleTypeRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub create_date_utc: NaiveDateTime,
    pub deleted: i16,
}

/// Database row for a role (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = role_type)]
pub struct NewRoleTypeRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

/// Database row for a payment tier (queryable).
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = payment_tier_type)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentTierTypeRow {
    pub id: i32,
    pub name: String,
    pub create_date_utc: NaiveDateTime,
    pub deleted: i16,
}

/// Database row for a payment tier (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = payment_tier_type)]
pub struct NewPaymentTierTypeRow<'a> {
    pub name: &'a str,
}

/// Database row for a device (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = device_info)]
pub struct NewDeviceInfoRow<'a> {
    pub name: &'a str,
    pub device_type: &'a str,
    pub os: &'a str,
    pub os_version: &'a str,
    pub model: &'a str,
}

/// Database row for a location (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = location)]
#[diesel(treat_none_as_null = true)]
pub struct NewLocationRow<'a> {
    pub address: Option<&'a str>,
    pub street_address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub state_id: Option<i32>,
}

/// Database row for a contact (queryable).
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = contact)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactRow {
    pub id: i32,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub location_id: Option<i32>,
    pub deleted: i16,
}

/// Database row for a contact (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contact)]
#[diesel(treat_none_as_null = true)]
pub struct NewContactRow<'a> {
    pub full_name: String,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email_address: &'a str,
    pub phone_number: &'a str,
    pub location_id: Option<i32>,
}

/// Database row for a user (queryable).
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role_type_id: i32,
    pub is_active: i16,
    pub payment_tier_type_id: i32,
    pub contact_id: Option<i32>,
    pub device_id: Option<i32>,
    pub last_login_date_utc: NaiveDateTime,
    pub create_date_utc: NaiveDateTime,
    pub update_date_utc: Option<NaiveDateTime>,
    pub delete_date_utc: Option<NaiveDateTime>,
    pub deleted: i16,
}

/// Database row for a user (insertable).
#[derive(Insertable, Debug, Clone, Copy)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub role_type_id: i32,
    pub is_active: i16,
    pub payment_tier_type_id: i32,
    pub contact_id: Option<i32>,
    pub device_id: Option<i32>,
    pub deleted: i16,
}

/// A name from `sqlite_master`.
#[derive(QueryableByName, Debug)]
pub struct TableName {
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
}

/// Result of a `COUNT(*) AS count` query.
#[derive(QueryableByName, Debug)]
pub struct RowCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub count: i64,
}

/// Result of `SELECT last_insert_rowid() AS id`.
#[derive(QueryableByName, Debug)]
pub struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub id: i32,
}
