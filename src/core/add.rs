use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::{load_ledger, save_ledger};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append one entry for `today` and persist the new ledger.
    ///
    /// Returns `None` (and stores nothing) when both amounts resolve to 0.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        today: NaiveDate,
        intake: &str,
        burn: &str,
    ) -> AppResult<Option<Entry>> {
        let ledger = load_ledger(pool, &cfg.storage_key)?;

        let Some(updated) = ledger.append_raw(intake, burn, today) else {
            tracing::debug!(intake, burn, "nothing to record");
            return Ok(None);
        };

        save_ledger(pool, &cfg.storage_key, &updated)?;

        let entry = updated.entries()[0].clone();

        ttlog_quiet(
            &pool.conn,
            "add",
            &entry.date_str(),
            &format!("intake={} burn={} id={}", entry.intake, entry.burn, entry.id),
        );

        Ok(Some(entry))
    }
}
