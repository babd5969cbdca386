//! Key-value persistence of the entry collection.
//!
//! The whole ledger lives under a single key as a JSON array, in the same
//! shape used by `import` files.

use crate::core::ledger::Ledger;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Read the raw value stored under `key`.
pub fn load_raw(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Load the entry collection stored under `key`.
///
/// A missing key or a value that is not a valid entry array yields an empty
/// collection.
pub fn load_entries(pool: &DbPool, key: &str) -> AppResult<Vec<Entry>> {
    let Some(raw) = load_raw(pool, key)? else {
        return Ok(Vec::new());
    };

    Ok(decode_entries(&raw, key))
}

pub fn load_ledger(pool: &DbPool, key: &str) -> AppResult<Ledger> {
    Ok(Ledger::new(load_entries(pool, key)?))
}

/// Decode a stored blob, treating any parse failure as an empty ledger.
pub fn decode_entries(raw: &str, key: &str) -> Vec<Entry> {
    match serde_json::from_str::<Vec<Entry>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored ledger is unreadable, starting empty");
            Vec::new()
        }
    }
}

/// Replace the collection stored under `key`.
pub fn save_entries(pool: &DbPool, key: &str, entries: &[Entry]) -> AppResult<()> {
    let storage_error = |reason: String| AppError::StorageWrite {
        key: key.to_string(),
        reason,
    };

    let json = serde_json::to_string(entries).map_err(|e| storage_error(e.to_string()))?;

    pool.conn
        .execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, json, Local::now().to_rfc3339()],
        )
        .map_err(|e| storage_error(e.to_string()))?;

    tracing::debug!(key, entries = entries.len(), "ledger saved");
    Ok(())
}

pub fn save_ledger(pool: &DbPool, key: &str, ledger: &Ledger) -> AppResult<()> {
    save_entries(pool, key, ledger.entries())
}
