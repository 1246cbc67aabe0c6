//! Normalized inserts for the operational tables.
//!
//! Each insert takes a record type from [`crate::domain::record`], so the
//! derived full name and the deleted-means-inactive rule are already applied
//! by the time a row reaches the engine. Every function returns the generated
//! `Id`.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Timestamp};
use diesel::SqliteConnection;
use tracing::debug;

use super::database::model::{
    LastInsertRowId, NewContactRow, NewDeviceInfoRow, NewLocationRow, NewStateRow, NewUserRow,
};
use super::database::schema::{contact, device_info, location, state, users};
use super::ddl::CURRENT_TIMESTAMP_SQL;
use crate::domain::record::{NewContact, NewDevice, NewLocation, NewState, NewUser};
use crate::error::Result;

fn last_insert_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("SELECT last_insert_rowid() AS id")
        .get_result::<LastInsertRowId>(conn)
        .map(|row| row.id)
}

fn now() -> diesel::expression::SqlLiteral<Nullable<Timestamp>> {
    sql::<Nullable<Timestamp>>(CURRENT_TIMESTAMP_SQL)
}

/// # Errors
/// Returns a constraint error on a duplicate abbreviation.
pub fn insert_state(conn: &mut SqliteConnection, record: &NewState) -> Result<i32> {
    let row = NewStateRow {
        name: record.name(),
        abbreviation: record.abbreviation(),
    };
    let id = conn.transaction(|conn| {
        diesel::insert_into(state::table).values(&row).execute(conn)?;
        last_insert_id(conn)
    })?;
    debug!(id, abbreviation = record.abbreviation(), "Inserted state");
    Ok(id)
}

/// # Errors
/// Returns a referential-integrity error if `state_id` names no state.
pub fn insert_location(conn: &mut SqliteConnection, record: &NewLocation) -> Result<i32> {
    let row = NewLocationRow {
        address: record.address.as_deref(),
        street_address: record.street_address.as_deref(),
        city: record.city.as_deref(),
        postal_code: record.postal_code.as_deref(),
        latitude: record.latitude,
        longitude: record.longitude,
        state_id: record.state_id,
    };
    let id = conn.transaction(|conn| {
        diesel::insert_into(location::table).values(&row).execute(conn)?;
        last_insert_id(conn)
    })?;
    debug!(id, "Inserted location");
    Ok(id)
}

/// Insert a contact with its derived full name.
///
/// # Errors
/// Returns a constraint error on a duplicate email, phone number or location,
/// or a missing location.
pub fn insert_contact(conn: &mut SqliteConnection, record: &NewContact) -> Result<i32> {
    let row = NewContactRow {
        full_name: record.full_name(),
        first_name: record.first_name(),
        last_name: record.last_name(),
        email_address: record.email_address(),
        phone_number: record.phone_number(),
        location_id: record.location_id(),
    };
    let id = conn.transaction(|conn| {
        diesel::insert_into(contact::table).values(&row).execute(conn)?;
        last_insert_id(conn)
    })?;
    debug!(id, "Inserted contact");
    Ok(id)
}

/// # Errors
/// Returns a database error if the insert fails.
pub fn insert_device(conn: &mut SqliteConnection, record: &NewDevice) -> Result<i32> {
    let row = NewDeviceInfoRow {
        name: record.name(),
        device_type: record.device_type(),
        os: record.os(),
        os_version: record.os_version(),
        model: record.model(),
    };
    let id = conn.transaction(|conn| {
        diesel::insert_into(device_info::table)
            .values(&row)
            .execute(conn)?;
        last_insert_id(conn)
    })?;
    debug!(id, "Inserted device");
    Ok(id)
}

/// Insert a user. A user inserted as deleted is stored inactive with its
/// `DeleteDateUTC` stamped.
///
/// # Errors
/// Returns a referential-integrity error if the role, tier, contact or device
/// does not exist, or a unique error on a taken username, email, contact or
/// device.
pub fn insert_user(conn: &mut SqliteConnection, record: &NewUser) -> Result<i32> {
    let row = NewUserRow {
        username: record.username(),
        email: record.email(),
        role_type_id: record.role_type_id(),
        is_active: i16::from(record.is_active()),
        payment_tier_type_id: record.payment_tier_type_id(),
        contact_id: record.contact_id(),
        device_id: record.device_id(),
        deleted: i16::from(record.is_deleted()),
    };
    let id = conn.transaction(|conn| {
        diesel::insert_into(users::table).values(&row).execute(conn)?;
        let id = last_insert_id(conn)?;
        if record.is_deleted() {
            diesel::update(users::table.find(id))
                .set(users::delete_date_utc.eq(now()))
                .execute(conn)?;
        }
        Ok::<i32, diesel::result::Error>(id)
    })?;
    debug!(id, username = record.username(), "Inserted user");
    Ok(id)
}

/// Soft-delete a live user: set `Deleted`, clear `IsActive` and stamp the
/// delete and update dates.
///
/// Returns `false` if no live user has this id.
///
/// # Errors
/// Returns a database error if the update fails.
pub fn soft_delete_user(conn: &mut SqliteConnection, id: i32) -> Result<bool> {
    let changed = diesel::update(users::table.find(id).filter(users::deleted.eq(0)))
        .set((
            users::deleted.eq(1),
            users::is_active.eq(0),
            users::delete_date_utc.eq(now()),
            users::update_date_utc.eq(now()),
        ))
        .execute(conn)?;
    debug!(id, changed, "Soft-deleted user");
    Ok(changed > 0)
}
