//! Writer integration tests: normalized inserts and storage-level invariants.

mod harness;

use std::thread;
use std::time::Duration;

use diesel::prelude::*;
use harness::temp_db::TempDb;
use rand::Rng;
use userdb::adapter::outbound::sqlite::bootstrap::{bootstrap, ensure_schema};
use userdb::adapter::outbound::sqlite::database::model::{ContactRow, StateRow, UserRow};
use userdb::adapter::outbound::sqlite::database::schema::{contact, state, users};
use userdb::adapter::outbound::sqlite::writer::{
    insert_contact, insert_state, insert_user, soft_delete_user,
};
use userdb::domain::define_schema;
use userdb::domain::record::{NewContact, NewState, NewUser};
use userdb::error::{ConstraintError, Error};

fn seeded(name: &str) -> (TempDb, SqliteConnection) {
    let db = TempDb::create(name);
    let mut conn = db.connect();
    bootstrap(&mut conn, &define_schema().unwrap()).unwrap();
    (db, conn)
}

fn padded(rng: &mut impl Rng, word: &str) -> String {
    let left = " ".repeat(rng.gen_range(0..3));
    let right = "\t".repeat(rng.gen_range(0..2));
    format!("{left}{word}{right}")
}

#[test]
fn state_round_trips_with_engine_timestamps() {
    let db = TempDb::create("state-round-trip");
    let mut conn = db.connect();
    ensure_schema(&mut conn, &define_schema().unwrap()).unwrap();

    let ca = insert_state(&mut conn, &NewState::new("CA", "California").unwrap()).unwrap();
    thread::sleep(Duration::from_millis(20));
    let nv = insert_state(&mut conn, &NewState::new("NV", "Nevada").unwrap()).unwrap();

    let first: StateRow = state::table
        .find(ca)
        .select(StateRow::as_select())
        .first(&mut conn)
        .unwrap();
    let second: StateRow = state::table
        .find(nv)
        .select(StateRow::as_select())
        .first(&mut conn)
        .unwrap();

    assert_eq!(first.abbreviation, "CA");
    assert_eq!(first.name, "California");
    assert_eq!(first.deleted, 0);
    assert!(first.update_date_utc.is_none());
    assert!(first.delete_date_utc.is_none());
    assert_ne!(first.create_date_utc, second.create_date_utc);
    assert!(first.create_date_utc < second.create_date_utc);
}

#[test]
fn duplicate_state_abbreviation_is_unique_violation() {
    let (_db, mut conn) = seeded("state-duplicate");
    let err = insert_state(&mut conn, &NewState::new("CA", "Cali").unwrap()).unwrap_err();
    assert!(matches!(err, Error::Constraint(ConstraintError::Unique(_))));
}

#[test]
fn user_with_unknown_role_is_referential_error() {
    let (_db, mut conn) = seeded("unknown-role");
    let err = insert_user(
        &mut conn,
        &NewUser::new("nobody", "nobody@example.com", 404).unwrap(),
    )
    .unwrap_err();
    assert!(
        matches!(err, Error::Constraint(ConstraintError::ForeignKey(_))),
        "unexpected error: {err}"
    );
    let users: i64 = users::table.count().get_result(&mut conn).unwrap();
    assert_eq!(users, 0);
}

#[test]
fn user_with_unknown_payment_tier_is_referential_error() {
    let (_db, mut conn) = seeded("unknown-tier");
    let record = NewUser::new("tiered", "tiered@example.com", 1)
        .unwrap()
        .with_payment_tier(99);
    let err = insert_user(&mut conn, &record).unwrap_err();
    assert!(matches!(err, Error::Constraint(ConstraintError::ForeignKey(_))));
}

#[test]
fn deleted_users_are_never_active() {
    let (_db, mut conn) = seeded("deleted-inactive");
    let mut rng = rand::thread_rng();

    for i in 0..64 {
        let record = NewUser::new(&format!("user{i}"), &format!("user{i}@example.com"), 1)
            .unwrap()
            .with_payment_tier(rng.gen_range(1..=3))
            .active(rng.gen())
            .deleted(rng.gen());
        let id = insert_user(&mut conn, &record).unwrap();
        if rng.gen_bool(0.25) {
            soft_delete_user(&mut conn, id).unwrap();
        }
    }

    let rows: Vec<UserRow> = users::table
        .select(UserRow::as_select())
        .load(&mut conn)
        .unwrap();
    assert_eq!(rows.len(), 64);
    for row in rows {
        if row.deleted == 1 {
            assert_eq!(row.is_active, 0, "user {} is deleted but active", row.username);
            assert!(row.delete_date_utc.is_some());
        }
    }
}

#[test]
fn raw_deleted_and_active_row_is_rejected() {
    let (_db, mut conn) = seeded("raw-check");
    let err: Error = diesel::sql_query(
        "INSERT INTO \"user\" (\"Username\", \"Email\", \"RoleTypeId\", \"IsActive\", \"Deleted\") \
         VALUES ('raw', 'raw@example.com', 1, 1, 1)",
    )
    .execute(&mut conn)
    .unwrap_err()
    .into();
    assert!(matches!(err, Error::Constraint(ConstraintError::Check(_))));
}

#[test]
fn raw_flag_outside_range_is_rejected() {
    let (_db, mut conn) = seeded("raw-flag");
    let err: Error = diesel::sql_query(
        "INSERT INTO \"user\" (\"Username\", \"Email\", \"RoleTypeId\", \"IsActive\") \
         VALUES ('flag', 'flag@example.com', 1, 2)",
    )
    .execute(&mut conn)
    .unwrap_err()
    .into();
    assert!(matches!(err, Error::Constraint(ConstraintError::Check(_))));
}

#[test]
fn contact_full_name_is_trimmed_concatenation() {
    let (_db, mut conn) = seeded("contact-names");
    let mut rng = rand::thread_rng();
    let firsts = ["Ada", "Grace", "Alan", "Edsger", "Barbara"];
    let lasts = ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov"];

    for i in 0..25 {
        let first = firsts[rng.gen_range(0..firsts.len())];
        let last = lasts[rng.gen_range(0..lasts.len())];
        let first = padded(&mut rng, first);
        let last = padded(&mut rng, last);
        let record = NewContact::new(
            &first,
            &last,
            &format!("contact{i}@example.com"),
            &format!("555-01{i:02}"),
            None,
        )
        .unwrap();
        insert_contact(&mut conn, &record).unwrap();
    }

    let rows: Vec<ContactRow> = contact::table
        .select(ContactRow::as_select())
        .load(&mut conn)
        .unwrap();
    assert_eq!(rows.len(), 25);
    for row in rows {
        assert_eq!(
            row.full_name,
            format!("{} {}", row.first_name.trim(), row.last_name.trim())
        );
        assert_eq!(row.first_name, row.first_name.trim());
    }
}

#[test]
fn contact_links_to_at_most_one_user() {
    let (_db, mut conn) = seeded("contact-unique");
    let contact_id = insert_contact(
        &mut conn,
        &NewContact::new("Ada", "Lovelace", "ada@example.com", "555-0100", None).unwrap(),
    )
    .unwrap();

    insert_user(
        &mut conn,
        &NewUser::new("ada", "ada@example.com", 1)
            .unwrap()
            .with_contact(contact_id),
    )
    .unwrap();
    let err = insert_user(
        &mut conn,
        &NewUser::new("ada2", "ada2@example.com", 1)
            .unwrap()
            .with_contact(contact_id),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Constraint(ConstraintError::Unique(_))));
}
