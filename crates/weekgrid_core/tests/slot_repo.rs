use rusqlite::Connection;
use weekgrid_core::db::migrations::latest_version;
use weekgrid_core::db::{open_db, open_db_in_memory, DbError};
use weekgrid_core::repo::{read_snapshot_file, write_snapshot_file};
use weekgrid_core::{RepoError, SlotRepository, SqliteSlotRepository, DEFAULT_SLOT_KEY};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_slots");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekgrid.sqlite3");

    let conn_first = open_db(&path).unwrap();
    SqliteSlotRepository::new(&conn_first).save("{}").unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let repo = SqliteSlotRepository::new(&conn_second);
    assert_eq!(repo.load().unwrap().as_deref(), Some("{}"));
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_slot_loads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);
    assert_eq!(repo.key(), DEFAULT_SLOT_KEY);
    assert_eq!(repo.load().unwrap(), None);
}

#[test]
fn save_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSlotRepository::new(&conn);

    repo.save("first").unwrap();
    repo.save("second").unwrap();
    assert_eq!(repo.load().unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn slots_are_isolated_by_key() {
    let conn = open_db_in_memory().unwrap();
    let main = SqliteSlotRepository::new(&conn);
    let scratch = SqliteSlotRepository::with_key(&conn, "scratch").unwrap();

    main.save("main").unwrap();
    assert_eq!(scratch.load().unwrap(), None);
    scratch.save("scratch").unwrap();
    assert_eq!(main.load().unwrap().as_deref(), Some("main"));
}

#[test]
fn blank_slot_key_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    assert!(matches!(
        SqliteSlotRepository::with_key(&conn, "  "),
        Err(RepoError::InvalidKey(_))
    ));
}

#[test]
fn snapshot_files_round_trip_text_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");

    write_snapshot_file(&path, "{\n    \"wakeUpAt\": 20\n}").unwrap();
    assert_eq!(
        read_snapshot_file(&path).unwrap(),
        "{\n    \"wakeUpAt\": 20\n}"
    );

    let missing = read_snapshot_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, RepoError::Io { .. }));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
