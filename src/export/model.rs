// src/export/model.rs

use crate::models::chart_point::ChartPoint;
use crate::models::daily_summary::DailySummary;
use crate::models::entry::Entry;
use serde::Serialize;

/// A flat record that can be written as a table row.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    pub intake: u32,
    pub burn: u32,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date_str(),
            intake: e.intake,
            burn: e.burn,
        }
    }
}

impl ExportRow for EntryExport {
    fn headers() -> Vec<&'static str> {
        vec!["id", "date", "intake", "burn"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.intake.to_string(),
            self.burn.to_string(),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub total_intake: u64,
    pub total_burn: u64,
    pub balance: i64,
}

impl From<&DailySummary> for DayExport {
    fn from(d: &DailySummary) -> Self {
        Self {
            date: d.date_str(),
            total_intake: d.total_intake,
            total_burn: d.total_burn,
            balance: d.balance,
        }
    }
}

impl ExportRow for DayExport {
    fn headers() -> Vec<&'static str> {
        vec!["date", "total_intake", "total_burn", "balance"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.total_intake.to_string(),
            self.total_burn.to_string(),
            self.balance.to_string(),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ChartExport {
    pub date: String,
    pub date_label: String,
    pub balance: i64,
    pub cumulative_fat_loss_grams: f64,
}

impl From<&ChartPoint> for ChartExport {
    fn from(p: &ChartPoint) -> Self {
        Self {
            date: p.date.format("%Y-%m-%d").to_string(),
            date_label: p.date_label.clone(),
            balance: p.balance,
            cumulative_fat_loss_grams: p.cumulative_fat_loss_grams,
        }
    }
}

impl ExportRow for ChartExport {
    fn headers() -> Vec<&'static str> {
        vec!["date", "date_label", "balance", "cumulative_fat_loss_grams"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.date_label.clone(),
            self.balance.to_string(),
            self.cumulative_fat_loss_grams.to_string(),
        ]
    }
}
