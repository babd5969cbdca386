use super::milestone::Milestone;
use serde::Serialize;

/// Global progression derived from the whole ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionState {
    /// Signed sum of all daily balances (positive = surplus).
    pub cumulative_balance: i64,
    pub estimated_fat_loss_grams: f64,
    pub streak_days: u32,
    pub current_milestone: Option<Milestone>,
    pub next_milestone: Option<Milestone>,
    /// 0–100 toward `next_milestone`; 100 when every milestone is unlocked.
    pub progress_percent: f64,
}

impl ProgressionState {
    /// Grams still missing to reach the next milestone (0 when complete).
    pub fn grams_to_next(&self) -> f64 {
        self.next_milestone
            .map(|m| f64::from(m.threshold_grams) - self.estimated_fat_loss_grams)
            .unwrap_or(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.next_milestone.is_none()
    }
}
