use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::store::load_entries;
use crate::errors::AppResult;
use crate::models::milestone::MilestoneStatus;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, YELLOW};
use crate::utils::format_grams;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Milestone collection with unlock flags.
pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let pool = DbPool::open_ready(&cfg.database)?;
    let entries = load_entries(&pool, &cfg.storage_key)?;
    let view = Core::build_view(&entries, today);

    header("Milestone collection");
    println!(
        "Total burned fat: {}\n",
        format_grams(view.progression.estimated_fat_loss_grams)
    );
    print!("{}", render_gallery(&view.gallery));

    let unlocked = view.gallery.iter().filter(|s| s.unlocked).count();
    println!("\n{}/{} unlocked", unlocked, view.gallery.len());

    Ok(())
}

pub fn render_gallery(items: &[MilestoneStatus]) -> String {
    let mut table = Table::new(vec!["", "Milestone", "Grams", "Description", ""]);

    for s in items {
        let m = s.milestone;
        if s.unlocked {
            table.add_row(vec![
                m.icon.to_string(),
                m.label.to_string(),
                format!("{}g", m.threshold_grams),
                m.description.to_string(),
                format!("{YELLOW}GET{RESET}"),
            ]);
        } else {
            table.add_row(vec![
                m.icon.to_string(),
                format!("{GREY}{}{RESET}", m.label),
                format!("{GREY}{}g{RESET}", m.threshold_grams),
                "？？？".to_string(),
                String::new(),
            ]);
        }
    }

    table.render()
}
