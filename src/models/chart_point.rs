use chrono::NaiveDate;
use serde::Serialize;

/// One point of the balance / fat-loss time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// Day and month only (`MM-DD`).
    pub date_label: String,
    pub balance: i64,
    /// Running total of per-day deficits, in grams. Never decreases.
    pub cumulative_fat_loss_grams: f64,
}
