//! Chart series: one point per day with a running fat-loss total.

use super::kcal_to_fat_grams;
use crate::models::chart_point::ChartPoint;
use crate::models::daily_summary::DailySummary;

/// Project summaries sorted oldest-first into chart points.
///
/// Only the deficit part of each day is accumulated, so surplus days leave
/// the running total unchanged. This is not the same figure as the net
/// estimate in the progression state.
pub fn project_series(ascending: &[DailySummary]) -> Vec<ChartPoint> {
    let mut deficit_kcal: u64 = 0;

    ascending
        .iter()
        .map(|day| {
            deficit_kcal += day.balance.min(0).unsigned_abs();

            ChartPoint {
                date: day.date,
                date_label: day.date.format("%m-%d").to_string(),
                balance: day.balance,
                cumulative_fat_loss_grams: kcal_to_fat_grams(deficit_kcal as f64),
            }
        })
        .collect()
}
