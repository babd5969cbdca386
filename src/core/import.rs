use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::{load_ledger, save_ledger};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use std::fs;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Import a JSON array of entries.
    ///
    /// With `replace` the stored ledger is overwritten; otherwise entries are
    /// merged. Either way an id already seen is skipped. Returns the number of
    /// entries added. Unlike the stored blob, an unreadable import file is an
    /// error.
    pub fn apply(pool: &mut DbPool, cfg: &Config, file: &Path, replace: bool) -> AppResult<usize> {
        let content = fs::read_to_string(file)?;
        let incoming: Vec<Entry> = serde_json::from_str(&content)?;

        let base = if replace {
            Ledger::default()
        } else {
            load_ledger(pool, &cfg.storage_key)?
        };
        let (updated, added) = base.merged(incoming);

        save_ledger(pool, &cfg.storage_key, &updated)?;

        ttlog_quiet(
            &pool.conn,
            "import",
            &file.to_string_lossy(),
            &format!(
                "{} entries {}",
                added,
                if replace { "(replace)" } else { "(merge)" }
            ),
        );

        Ok(added)
    }
}
