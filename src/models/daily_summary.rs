use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated intake/burn for one calendar day. Always derived from entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_intake: u64,
    pub total_burn: u64,
    /// total_intake − total_burn; negative means deficit.
    pub balance: i64,
}

impl DailySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_intake: 0,
            total_burn: 0,
            balance: 0,
        }
    }

    pub fn is_deficit(&self) -> bool {
        self.balance < 0
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
