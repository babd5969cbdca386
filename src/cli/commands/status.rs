use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::store::load_entries;
use crate::errors::AppResult;
use crate::models::progression::ProgressionState;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, YELLOW};
use crate::utils::formatting::{bold, progress_bar};
use crate::utils::{format_grams, format_kcal_signed};
use chrono::NaiveDate;

const PROGRESS_WIDTH: usize = 24;

/// Home screen: streak, burned fat and milestone progress.
pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let pool = DbPool::open_ready(&cfg.database)?;
    let entries = load_entries(&pool, &cfg.storage_key)?;
    let view = Core::build_view(&entries, today);

    header("🔥 Fat burn tracker");
    print!("{}", render_status(&view.progression));

    Ok(())
}

pub fn render_status(p: &ProgressionState) -> String {
    let mut out = String::new();

    out.push_str(&format!("🔥 Streak: {} days\n", p.streak_days));
    out.push_str(&format!(
        "Total burned fat (est.): {}\n",
        bold(&format_grams(p.estimated_fat_loss_grams))
    ));
    out.push_str(&format!(
        "Net balance: {} kcal\n\n",
        format_kcal_signed(p.cumulative_balance)
    ));

    let (cur_icon, cur_label) = p
        .current_milestone
        .map(|m| (m.icon, m.label))
        .unwrap_or(("🥚", "Start"));
    let (next_icon, next_label) = p
        .next_milestone
        .map(|m| (m.icon, m.label))
        .unwrap_or(("👑", "Complete"));

    out.push_str(&format!(
        "{}Achieved:{} {} {}   ▶   {}NEXT:{} {} {}\n",
        CYAN, RESET, cur_icon, cur_label, YELLOW, RESET, next_icon, next_label
    ));
    out.push_str(&format!(
        "{} {:.1}%\n",
        progress_bar(p.progress_percent, PROGRESS_WIDTH),
        p.progress_percent
    ));
    out.push_str(&format!("{:.0} g to next\n", p.grams_to_next()));

    out
}
