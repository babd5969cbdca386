//! Progression: cumulative balance, fat-loss estimate, streak and milestones.

use super::kcal_to_fat_grams;
use crate::models::daily_summary::DailySummary;
use crate::models::milestone::{Milestone, current_milestone, next_milestone};
use crate::models::progression::ProgressionState;
use chrono::NaiveDate;

/// Build the progression state from summaries sorted most-recent-first.
pub fn calculate_progression(
    descending: &[DailySummary],
    today: NaiveDate,
    table: &[Milestone],
) -> ProgressionState {
    let cumulative_balance: i64 = descending.iter().map(|d| d.balance).sum();
    let grams = estimated_fat_loss_grams(cumulative_balance);

    let current = current_milestone(table, grams);
    let next = next_milestone(table, grams);

    ProgressionState {
        cumulative_balance,
        estimated_fat_loss_grams: grams,
        streak_days: streak_days(descending, today),
        current_milestone: current,
        next_milestone: next,
        progress_percent: progress_percent(grams, current.as_ref(), next.as_ref()),
    }
}

/// Fat loss implied by the net balance, clamped at zero for a net surplus.
pub fn estimated_fat_loss_grams(cumulative_balance: i64) -> f64 {
    let grams = kcal_to_fat_grams(-(cumulative_balance as f64));
    if grams > 0.0 { grams } else { 0.0 }
}

/// Consecutive deficit days counted back from the latest summary.
///
/// Returns 0 unless the latest summary is at most one day before `today`.
/// Calendar days without entries have no summary and are skipped, so only a
/// day with a non-negative balance ends the count.
pub fn streak_days(descending: &[DailySummary], today: NaiveDate) -> u32 {
    let Some(latest) = descending.first() else {
        return 0;
    };

    if (today - latest.date).num_days() > 1 {
        return 0;
    }

    descending.iter().take_while(|d| d.is_deficit()).count() as u32
}

/// Percentage between the previous threshold (or 0) and the next one.
pub fn progress_percent(grams: f64, current: Option<&Milestone>, next: Option<&Milestone>) -> f64 {
    let Some(next) = next else {
        return 100.0;
    };

    let prev = current.map(|m| f64::from(m.threshold_grams)).unwrap_or(0.0);
    let range = f64::from(next.threshold_grams) - prev;

    ((grams - prev) / range * 100.0).clamp(0.0, 100.0)
}
