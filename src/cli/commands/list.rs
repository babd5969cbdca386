use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::build_summaries;
use crate::db::pool::DbPool;
use crate::db::store::load_entries;
use crate::errors::AppResult;
use crate::models::daily_summary::DailySummary;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_balance;
use crate::utils::format_kcal_signed;
use crate::utils::range::{in_bounds, parse_optional_range};
use crate::utils::table::Table;

/// Daily report: one row per logged day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, asc } = cmd {
        let bounds = parse_optional_range(period.as_deref())?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let entries = load_entries(&pool, &cfg.storage_key)?;
        let summaries = build_summaries(&entries);

        let ordered = if *asc {
            &summaries.ascending
        } else {
            &summaries.descending
        };

        let days: Vec<&DailySummary> = ordered.iter().filter(|d| in_bounds(d.date, bounds)).collect();

        if days.is_empty() {
            info("No entries recorded.");
            return Ok(());
        }

        header("Daily report");
        print!("{}", render_days(&days));
    }

    Ok(())
}

fn render_days(days: &[&DailySummary]) -> String {
    let mut table = Table::new(vec!["Date", "In", "Out", "Balance"]);

    for d in days {
        table.add_row(vec![
            d.date_str(),
            d.total_intake.to_string(),
            d.total_burn.to_string(),
            colorize_balance(d.balance, &format!("{} kcal", format_kcal_signed(d.balance))),
        ]);
    }

    table.render()
}
