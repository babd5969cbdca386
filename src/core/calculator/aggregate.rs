//! Day aggregation: folds raw entries into one summary per calendar day.

use crate::models::daily_summary::DailySummary;
use crate::models::entry::Entry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// The same set of daily summaries in both orders used downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySummaries {
    /// Most recent day first (history, progression).
    pub descending: Vec<DailySummary>,
    /// Oldest day first (time series).
    pub ascending: Vec<DailySummary>,
}

impl DaySummaries {
    pub fn is_empty(&self) -> bool {
        self.ascending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ascending.len()
    }

    pub fn latest(&self) -> Option<&DailySummary> {
        self.descending.first()
    }
}

/// Group entries by date. `NaiveDate` orders exactly like its ISO
/// `YYYY-MM-DD` rendering, so the map iterates in ascending ISO order.
pub fn aggregate_by_day(entries: &[Entry]) -> BTreeMap<NaiveDate, DailySummary> {
    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for entry in entries {
        let day = days
            .entry(entry.date)
            .or_insert_with(|| DailySummary::empty(entry.date));

        day.total_intake += u64::from(entry.intake);
        day.total_burn += u64::from(entry.burn);
        day.balance = day.total_intake as i64 - day.total_burn as i64;
    }

    days
}

pub fn build_summaries(entries: &[Entry]) -> DaySummaries {
    let ascending: Vec<DailySummary> = aggregate_by_day(entries).into_values().collect();
    let descending: Vec<DailySummary> = ascending.iter().rev().cloned().collect();

    tracing::debug!(
        entries = entries.len(),
        days = ascending.len(),
        "aggregated ledger"
    );

    DaySummaries {
        descending,
        ascending,
    }
}
