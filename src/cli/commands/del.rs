use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, DeleteOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::ui::prompt::confirm;
use crate::utils::date;

/// Delete every entry of a day, after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, yes } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut pool = DbPool::open_ready(&cfg.database)?;

        let outcome = DeleteLogic::apply(&mut pool, cfg, d, |question| {
            if *yes { Ok(true) } else { confirm(question) }
        })?;

        match outcome {
            DeleteOutcome::Deleted(n) => success(format!("Deleted {} entries for {}", n, d)),
            DeleteOutcome::Cancelled => warning("Deletion cancelled."),
        }
    }

    Ok(())
}
