use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, replace } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        let added = ImportLogic::apply(&mut pool, cfg, Path::new(file), *replace)?;
        success(format!("Imported {} entries from {}", added, file));
    }

    Ok(())
}
