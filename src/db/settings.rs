//! Key/value preference store backed by the `settings` table.
//!
//! The only value the application persists is the birthdate, stored as a
//! `YYYY-MM-DD` string under [`BIRTHDATE_KEY`].

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::birthdate::BirthDate;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub const BIRTHDATE_KEY: &str = "birthdate";

pub fn get_setting(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Insert or overwrite `key`.
pub fn set_setting(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    pool.conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

/// Returns true when a row was removed.
pub fn delete_setting(pool: &DbPool, key: &str) -> AppResult<bool> {
    let n = pool
        .conn
        .execute("DELETE FROM settings WHERE key = ?1", [key])?;
    Ok(n > 0)
}

/// Raw stored birthdate, unvalidated. Absence is a normal state.
pub fn load_birthdate(pool: &DbPool) -> AppResult<Option<String>> {
    get_setting(pool, BIRTHDATE_KEY)
}

pub fn save_birthdate(pool: &DbPool, birthdate: &BirthDate) -> AppResult<()> {
    set_setting(pool, BIRTHDATE_KEY, &birthdate.to_storage())
}

pub fn clear_birthdate(pool: &DbPool) -> AppResult<bool> {
    delete_setting(pool, BIRTHDATE_KEY)
}
