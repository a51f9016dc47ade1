use crate::errors::{AppError, AppResult};
use crate::models::entry::parse_ts;
use crate::models::{DayWindow, Entry, SETTINGS_ID};
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

pub fn map_row(row: &Row) -> Result<Entry> {
    let ts_str: String = row.get("ts")?;

    let ts = parse_ts(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        ts,
        food: row.get("food")?,
        sugar_g: row.get("sugar_g")?,
        water_cups: row.get("water_cups")?,
        insulin_units: row.get("insulin_units")?,
    })
}

/// Insert an entry and return its new row id.
pub fn insert_entry(conn: &Connection, entry: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (ts, food, sugar_g, water_cups, insulin_units)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.ts_str(),
            entry.food,
            entry.sugar_g,
            entry.water_cups,
            entry.insulin_units,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Entries of the window, newest first (ties: highest id first).
pub fn load_entries_in_window(conn: &Connection, window: &DayWindow) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, ts, food, sugar_g, water_cups, insulin_units
         FROM entries
         WHERE ts >= ?1 AND ts < ?2
         ORDER BY ts DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![window.start_str(), window.end_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries between two windows (inclusive of both days), oldest first.
pub fn load_entries_between(
    conn: &Connection,
    first: &DayWindow,
    last: &DayWindow,
) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, ts, food, sugar_g, water_cups, insulin_units
         FROM entries
         WHERE ts >= ?1 AND ts < ?2
         ORDER BY ts ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![first.start_str(), last.end_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
    Ok(n)
}

pub fn delete_entries_in_window(conn: &Connection, window: &DayWindow) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM entries WHERE ts >= ?1 AND ts < ?2",
        params![window.start_str(), window.end_str()],
    )?;
    Ok(n)
}

pub fn load_sugar_limit(conn: &Connection) -> AppResult<Option<f64>> {
    let limit = conn
        .query_row(
            "SELECT daily_sugar_limit FROM settings WHERE id = ?1",
            params![SETTINGS_ID],
            |row| row.get::<_, f64>(0),
        )
        .optional()?;
    Ok(limit)
}

pub fn upsert_sugar_limit(conn: &Connection, value: f64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (id, daily_sugar_limit) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET daily_sugar_limit = excluded.daily_sugar_limit",
        params![SETTINGS_ID, value],
    )?;
    Ok(())
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT date, operation, IFNULL(target, ''), message
         FROM log
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
