use crate::core::calculator::aggregate::{DaySummaries, build_summaries};
use crate::core::calculator::progression::calculate_progression;
use crate::core::calculator::series::project_series;
use crate::models::chart_point::ChartPoint;
use crate::models::entry::Entry;
use crate::models::milestone::{MILESTONES, MilestoneStatus, gallery};
use crate::models::progression::ProgressionState;
use chrono::NaiveDate;

/// Everything the presentation layer needs, derived from one snapshot.
#[derive(Debug, Clone)]
pub struct LedgerView {
    pub summaries: DaySummaries,
    pub progression: ProgressionState,
    pub chart: Vec<ChartPoint>,
    pub gallery: Vec<MilestoneStatus>,
}

pub struct Core;

impl Core {
    pub fn build_view(entries: &[Entry], today: NaiveDate) -> LedgerView {
        let summaries = build_summaries(entries);
        let progression = calculate_progression(&summaries.descending, today, &MILESTONES);
        let chart = project_series(&summaries.ascending);
        let gallery = gallery(&MILESTONES, progression.estimated_fat_loss_grams);

        LedgerView {
            summaries,
            progression,
            chart,
            gallery,
        }
    }
}
