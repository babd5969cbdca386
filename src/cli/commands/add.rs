use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::store::load_entries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::{format_grams, format_kcal_signed};
use chrono::NaiveDate;

/// Record one intake/burn entry for today.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Add { intake, burn } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let recorded = AddLogic::apply(
            &mut pool,
            cfg,
            today,
            intake.as_deref().unwrap_or(""),
            burn.as_deref().unwrap_or(""),
        )?;

        let Some(entry) = recorded else {
            info("Nothing to record: intake and burn are both 0.");
            return Ok(());
        };

        success(format!(
            "Recorded {}: in {} kcal, out {} kcal",
            entry.date_str(),
            entry.intake,
            entry.burn
        ));

        let entries = load_entries(&pool, &cfg.storage_key)?;
        let view = Core::build_view(&entries, today);

        if let Some(day) = view
            .summaries
            .descending
            .iter()
            .find(|d| d.date == entry.date)
        {
            println!(
                "   Day total: {} - {} = {} kcal",
                day.total_intake,
                day.total_burn,
                format_kcal_signed(day.balance)
            );
        }
        println!(
            "   🔥 {} day streak | {} burned",
            view.progression.streak_days,
            format_grams(view.progression.estimated_fat_loss_grams)
        );
    }

    Ok(())
}
