use rusqlite::{Connection, OptionalExtension, Result};
use tracing::debug;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `entries` table with the current schema.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            ts             TEXT NOT NULL,
            food           TEXT NOT NULL CHECK(length(trim(food)) > 0),
            sugar_g        REAL NOT NULL DEFAULT 0,
            water_cups     REAL NOT NULL DEFAULT 0,
            insulin_units  REAL NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_entries_ts ON entries(ts);
        "#,
    )?;
    Ok(())
}

/// Create the singleton `settings` table.
fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id                 INTEGER PRIMARY KEY CHECK(id = 1),
            daily_sugar_limit  REAL NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create whatever part of the schema is missing.
///
/// Called by `DbPool::open`. Safe to run on every open.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "entries")? {
        create_entries_table(conn)?;
        debug!("created entries table");
    } else {
        conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_entries_ts ON entries(ts);")?;
    }

    if !table_exists(conn, "settings")? {
        create_settings_table(conn)?;
        debug!("created settings table");
    }

    Ok(())
}
