use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::store::load_entries;
use crate::errors::AppResult;
use crate::models::chart_point::ChartPoint;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_balance;
use crate::utils::formatting::scaled_bar;
use crate::utils::range::{in_bounds, parse_optional_range};
use crate::utils::{format_grams, format_kcal_signed};
use chrono::NaiveDate;

/// Text chart: one line per day, oldest first.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Chart { period } = cmd {
        let bounds = parse_optional_range(period.as_deref())?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let entries = load_entries(&pool, &cfg.storage_key)?;
        let view = Core::build_view(&entries, today);

        let points: Vec<&ChartPoint> = view
            .chart
            .iter()
            .filter(|p| in_bounds(p.date, bounds))
            .collect();

        if points.is_empty() {
            info("No data to chart.");
            return Ok(());
        }

        header("Balance trend");
        print!("{}", render_chart(&points, cfg.chart_width));
    }

    Ok(())
}

pub fn render_chart(points: &[&ChartPoint], width: usize) -> String {
    let max = points
        .iter()
        .map(|p| p.balance.unsigned_abs())
        .max()
        .unwrap_or(0);

    let kcal_w = points
        .iter()
        .map(|p| format_kcal_signed(p.balance).len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for p in points {
        let bar = format!(
            "{:<width$}",
            scaled_bar(p.balance.unsigned_abs(), max, width),
            width = width
        );
        let kcal = format!("{:>kcal_w$}", format_kcal_signed(p.balance), kcal_w = kcal_w);

        out.push_str(&format!(
            "{} {} kcal {} {}\n",
            p.date_label,
            colorize_balance(p.balance, &kcal),
            colorize_balance(p.balance, &bar),
            format_grams(p.cumulative_fat_loss_grams),
        ));
    }
    out
}
