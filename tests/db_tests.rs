use healthlog::db::DbPool;
use healthlog::db::migrate::ensure_schema;
use healthlog::models::{DayWindow, Entry};
use healthlog::store::EntryStore;
use rusqlite::Connection;

mod common;
use common::setup_test_db;

#[test]
fn schema_setup_is_idempotent() {
    let conn = Connection::open_in_memory().expect("db");
    ensure_schema(&conn).expect("create");
    conn.execute(
        "INSERT INTO entries (ts, food, sugar_g) VALUES ('2025-03-01T08:00:00.000000', 'Toast', 4)",
        [],
    )
    .expect("insert");

    ensure_schema(&conn).expect("run again");

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name IN ('entries', 'settings', 'log')",
            [],
            |r| r.get(0),
        )
        .expect("tables");
    assert_eq!(tables, 3);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .expect("rows");
    assert_eq!(rows, 1);
}

#[test]
fn schema_rejects_blank_food() {
    let pool = DbPool::in_memory().expect("db");
    let res = pool.conn.execute(
        "INSERT INTO entries (ts, food) VALUES ('2025-03-01T08:00:00.000000', '  ')",
        [],
    );
    assert!(res.is_err());
}

#[test]
fn settings_table_holds_a_single_row() {
    let mut pool = DbPool::in_memory().expect("db");
    pool.set_sugar_limit(30.0).expect("insert");
    pool.set_sugar_limit(45.0).expect("update");

    let rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM settings", [], |r| r.get(0))
        .expect("count");
    assert_eq!(rows, 1);

    let other_id = pool.conn.execute(
        "INSERT INTO settings (id, daily_sugar_limit) VALUES (2, 10)",
        [],
    );
    assert!(other_id.is_err());
}

#[test]
fn entries_survive_reopening_the_file() {
    let db_path = setup_test_db("db_reopen");
    let day = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
    let ts = day.and_hms_opt(9, 15, 30).expect("time");

    {
        let mut pool = DbPool::open(&db_path).expect("open");
        pool.add_entry(&Entry::new(ts, "Banana", 14.0, 0.5, 0.0))
            .expect("insert");
    }

    let mut pool = DbPool::open(&db_path).expect("reopen");
    let entries = pool.entries_in(&DayWindow::for_date(day)).expect("load");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ts, ts);
    assert_eq!(entries[0].food, "Banana");
    assert_eq!(entries[0].water_cups, 0.5);
}
