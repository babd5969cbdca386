use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::{load_ledger, save_ledger};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Result of a delete-day request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(usize),
    Cancelled,
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove every entry of `date` once `confirm` agrees.
    ///
    /// `confirm` receives the question to ask; nothing is written when it
    /// answers no.
    pub fn apply<F>(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        confirm: F,
    ) -> AppResult<DeleteOutcome>
    where
        F: FnOnce(&str) -> AppResult<bool>,
    {
        let date_str = date.format("%Y-%m-%d").to_string();
        let ledger = load_ledger(pool, &cfg.storage_key)?;

        if !ledger.has_day(date) {
            return Err(AppError::NoEntriesForDate(date_str));
        }

        if !confirm(&format!("Delete all entries of {}?", date_str))? {
            return Ok(DeleteOutcome::Cancelled);
        }

        let (updated, removed) = ledger.without_day(date);
        save_ledger(pool, &cfg.storage_key, &updated)?;

        ttlog_quiet(
            &pool.conn,
            "del",
            &date_str,
            &format!("Deleted {} entries", removed),
        );

        Ok(DeleteOutcome::Deleted(removed))
    }
}
