use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        ExportLogic::export(
            &mut pool,
            cfg,
            today,
            *format,
            *what,
            file,
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
