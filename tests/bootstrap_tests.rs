//! Bootstrap integration tests against on-disk SQLite databases.

mod harness;

use std::sync::{Arc, Barrier};
use std::thread;

use diesel::prelude::*;
use harness::temp_db::TempDb;
use userdb::adapter::outbound::sqlite::bootstrap::{ensure_schema, seed_reference_data};
use userdb::adapter::outbound::sqlite::database::model::{RoleTypeRow, RowCount};
use userdb::adapter::outbound::sqlite::database::schema::role_type;
use userdb::adapter::outbound::sqlite::SqliteBootstrap;
use userdb::domain::define_schema;
use userdb::domain::BootstrapState;
use userdb::error::{Error, SeedError};
use userdb::port::SchemaBootstrap;

#[derive(QueryableByName, Debug, PartialEq)]
struct MasterEntry {
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    sql: Option<String>,
}

fn catalog(conn: &mut SqliteConnection) -> Vec<MasterEntry> {
    diesel::sql_query("SELECT name, sql FROM sqlite_master ORDER BY name")
        .load(conn)
        .expect("read sqlite_master")
}

fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    diesel::sql_query(format!("SELECT COUNT(*) AS count FROM \"{table}\""))
        .get_result::<RowCount>(conn)
        .expect("count rows")
        .count
}

#[test]
fn ensure_schema_twice_leaves_identical_catalog() {
    let db = TempDb::create("ensure-twice");
    let schema = define_schema().unwrap();
    let mut conn = db.connect();

    ensure_schema(&mut conn, &schema).unwrap();
    let first = catalog(&mut conn);

    let report = ensure_schema(&mut conn, &schema).unwrap();
    assert!(report.created.is_empty());
    assert_eq!(catalog(&mut conn), first);
}

#[test]
fn seeding_many_times_keeps_canonical_counts() {
    let db = TempDb::create("seed-many");
    let schema = define_schema().unwrap();
    let mut conn = db.connect();
    ensure_schema(&mut conn, &schema).unwrap();

    for _ in 0..5 {
        seed_reference_data(&mut conn).unwrap();
    }

    assert_eq!(count(&mut conn, "state"), 50);
    assert_eq!(count(&mut conn, "roleType"), 3);
    assert_eq!(count(&mut conn, "paymentTierType"), 3);
}

#[test]
fn fresh_database_has_canonical_roles() {
    let db = TempDb::create("roles");
    let schema = define_schema().unwrap();
    let mut conn = db.connect();
    ensure_schema(&mut conn, &schema).unwrap();
    seed_reference_data(&mut conn).unwrap();

    let mut roles: Vec<(String, Option<String>)> = role_type::table
        .select(RoleTypeRow::as_select())
        .load(&mut conn)
        .unwrap()
        .into_iter()
        .map(|row| (row.name, row.description))
        .collect();
    roles.sort();

    assert_eq!(
        roles,
        vec![
            (
                "Admin".to_string(),
                Some("Admin account with all privilege".to_string())
            ),
            (
                "Employee".to_string(),
                Some("Employee account with some elevated privileges and benefits".to_string())
            ),
            (
                "User".to_string(),
                Some("Regular user account".to_string())
            ),
        ]
    );
}

#[test]
fn conflicting_role_fails_and_changes_nothing() {
    let db = TempDb::create("role-conflict");
    let schema = define_schema().unwrap();
    let mut conn = db.connect();
    ensure_schema(&mut conn, &schema).unwrap();
    diesel::sql_query(
        "INSERT INTO \"roleType\" (\"Name\", \"Description\") VALUES ('Admin', 'Root access')",
    )
    .execute(&mut conn)
    .unwrap();
    let before = catalog(&mut conn);

    let err = seed_reference_data(&mut conn).unwrap_err();
    match err {
        Error::Seed(SeedError::Conflict { table, key, .. }) => {
            assert_eq!(table, "roleType");
            assert_eq!(key, "Admin");
        }
        other => panic!("expected seed conflict, got {other}"),
    }

    // States are seeded before roles; their inserts were rolled back too.
    assert_eq!(count(&mut conn, "state"), 0);
    assert_eq!(count(&mut conn, "roleType"), 1);
    assert_eq!(catalog(&mut conn), before);
}

#[test]
fn bootstrap_through_port_reaches_ready() {
    let db = TempDb::create("port");
    let schema = define_schema().unwrap();
    let bootstrapper = SqliteBootstrap::new(db.pool());

    let before = bootstrapper.inspect(&schema).unwrap();
    assert_eq!(before.state, BootstrapState::Uninitialized);

    let first = bootstrapper.bootstrap(&schema).unwrap();
    assert_eq!(first.schema.created.len(), 7);
    assert_eq!(first.seed.inserted(), 56);

    let second = bootstrapper.bootstrap(&schema).unwrap();
    assert!(second.schema.created.is_empty());
    assert_eq!(second.seed.inserted(), 0);

    let after = bootstrapper.inspect(&schema).unwrap();
    assert_eq!(after.state, BootstrapState::Ready);
    assert!(after.missing_tables.is_empty());
}

#[test]
fn separate_steps_through_port_reach_ready() {
    let db = TempDb::create("steps");
    let schema = define_schema().unwrap();
    let bootstrapper = SqliteBootstrap::new(db.pool());

    bootstrapper.ensure_schema(&schema).unwrap();
    let seeded = bootstrapper.seed_reference_data().unwrap();
    assert_eq!(seeded.table("paymentTierType").unwrap().inserted, 3);
    assert_eq!(
        bootstrapper.inspect(&schema).unwrap().state,
        BootstrapState::Ready
    );
}

#[test]
fn removed_seed_row_is_restored() {
    let db = TempDb::create("restore");
    let schema = define_schema().unwrap();
    let bootstrapper = SqliteBootstrap::new(db.pool());
    bootstrapper.bootstrap(&schema).unwrap();

    let mut conn = db.connect();
    diesel::sql_query("DELETE FROM \"state\" WHERE \"Abbreviation\" = 'WY'")
        .execute(&mut conn)
        .unwrap();
    let status = bootstrapper.inspect(&schema).unwrap();
    assert_eq!(status.state, BootstrapState::Uninitialized);
    assert_eq!(status.missing_seed_rows, 1);

    let report = bootstrapper.bootstrap(&schema).unwrap();
    assert_eq!(report.seed.table("state").unwrap().inserted, 1);
    assert_eq!(count(&mut conn, "state"), 50);
}

#[test]
fn concurrent_runners_converge() {
    let db = TempDb::create("concurrent");
    let url = db.url();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let url = url.clone();
            thread::spawn(move || {
                let schema = define_schema().unwrap();
                let pool = userdb::adapter::outbound::sqlite::database::connection::create_pool(
                    &url,
                    Default::default(),
                )
                .unwrap();
                SqliteBootstrap::new(pool).bootstrap(&schema)
            })
        })
        .collect();

    let reports: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("runner panicked").expect("bootstrap"))
        .collect();

    let created: usize = reports.iter().map(|r| r.schema.created.len()).sum();
    let inserted: usize = reports.iter().map(|r| r.seed.inserted()).sum();
    assert_eq!(created, 7);
    assert_eq!(inserted, 56);

    let mut conn = db.connect();
    assert_eq!(count(&mut conn, "state"), 50);
    assert_eq!(count(&mut conn, "roleType"), 3);
    assert_eq!(count(&mut conn, "paymentTierType"), 3);
}

#[test]
fn separate_steps_converge_under_contention() {
    const RUNNERS: usize = 6;

    for round in 0..5 {
        let db = TempDb::create(&format!("steps-{round}"));
        let barrier = Arc::new(Barrier::new(RUNNERS));

        let handles: Vec<_> = (0..RUNNERS)
            .map(|_| {
                let url = db.url();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let schema = define_schema().unwrap();
                    let pool = userdb::adapter::outbound::sqlite::database::connection::create_pool(
                        &url,
                        Default::default(),
                    )
                    .unwrap();
                    let bootstrapper = SqliteBootstrap::new(pool);
                    barrier.wait();
                    let schema_report = bootstrapper.ensure_schema(&schema)?;
                    let seed_report = bootstrapper.seed_reference_data()?;
                    Ok::<_, Error>((schema_report, seed_report))
                })
            })
            .collect();

        let mut created = 0;
        let mut inserted = 0;
        for handle in handles {
            let (schema_report, seed_report) = handle
                .join()
                .expect("runner panicked")
                .unwrap_or_else(|err| panic!("round {round}: {err}"));
            created += schema_report.created.len();
            inserted += seed_report.inserted();
        }
        assert_eq!(created, 7, "round {round}");
        assert_eq!(inserted, 56, "round {round}");

        let mut conn = db.connect();
        assert_eq!(count(&mut conn, "state"), 50);
        assert_eq!(count(&mut conn, "roleType"), 3);
        assert_eq!(count(&mut conn, "paymentTierType"), 3);
    }
}
