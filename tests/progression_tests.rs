mod common;
use common::{approx, d, entry};
use rfattracker::core::calculator::aggregate::build_summaries;
use rfattracker::core::calculator::progression::{
    calculate_progression, estimated_fat_loss_grams, progress_percent, streak_days,
};
use rfattracker::cli::commands::chart::render_chart;
use rfattracker::core::calculator::series::project_series;
use rfattracker::export::model::{ChartExport, ExportRow};
use rfattracker::models::chart_point::ChartPoint;
use rfattracker::core::logic::Core;
use rfattracker::models::milestone::{MILESTONES, current_milestone, next_milestone};

#[test]
fn test_fat_loss_is_clamped_on_surplus() {
    assert_eq!(estimated_fat_loss_grams(5000), 0.0);
    assert_eq!(estimated_fat_loss_grams(0), 0.0);
    assert!(approx(estimated_fat_loss_grams(-7200), 1000.0));

    let entries = vec![entry("1", "2025-09-01", 4000, 1000)];
    let view = Core::build_view(&entries, d("2025-09-01"));
    assert_eq!(view.progression.cumulative_balance, 3000);
    assert_eq!(view.progression.estimated_fat_loss_grams, 0.0);
}

#[test]
fn test_exact_threshold_unlocks_milestone() {
    // 1440 kcal deficit = 200 g
    let entries = vec![entry("1", "2025-09-01", 0, 1440)];
    let view = Core::build_view(&entries, d("2025-09-01"));
    let p = &view.progression;

    assert!(approx(p.estimated_fat_loss_grams, 200.0));
    assert_eq!(p.current_milestone.map(|m| m.label), Some("バター1箱"));
    assert_eq!(p.next_milestone.map(|m| m.threshold_grams), Some(450));
    assert_eq!(p.progress_percent, 0.0);
    assert!(approx(p.grams_to_next(), 250.0));
}

#[test]
fn test_progress_between_milestones() {
    // 2340 kcal deficit = 325 g, halfway between 200 and 450
    let entries = vec![entry("1", "2025-09-01", 0, 2340)];
    let view = Core::build_view(&entries, d("2025-09-01"));
    assert!(approx(view.progression.progress_percent, 50.0));

    // 720 kcal = 100 g, halfway to the first milestone
    let entries = vec![entry("1", "2025-09-01", 0, 720)];
    let view = Core::build_view(&entries, d("2025-09-01"));
    assert!(view.progression.current_milestone.is_none());
    assert!(approx(view.progression.progress_percent, 50.0));
}

#[test]
fn test_all_milestones_unlocked() {
    // 108000 kcal = 15000 g
    let entries = vec![entry("1", "2025-09-01", 0, 108_000)];
    let view = Core::build_view(&entries, d("2025-09-01"));
    let p = &view.progression;

    assert_eq!(p.current_milestone.map(|m| m.label), Some("一斗缶"));
    assert!(p.next_milestone.is_none());
    assert!(p.is_complete());
    assert_eq!(p.progress_percent, 100.0);
    assert_eq!(p.grams_to_next(), 0.0);
    assert!(view.gallery.iter().all(|s| s.unlocked));
}

#[test]
fn test_milestone_lookup() {
    assert!(current_milestone(&MILESTONES, 0.0).is_none());
    assert_eq!(next_milestone(&MILESTONES, 0.0).map(|m| m.threshold_grams), Some(200));
    assert_eq!(current_milestone(&MILESTONES, 999.9).map(|m| m.threshold_grams), Some(700));
    assert_eq!(next_milestone(&MILESTONES, 999.9).map(|m| m.threshold_grams), Some(1000));
    assert_eq!(current_milestone(&MILESTONES, 1000.0).map(|m| m.threshold_grams), Some(1000));
    assert_eq!(next_milestone(&MILESTONES, 1000.0).map(|m| m.threshold_grams), Some(1500));
}

#[test]
fn test_milestone_table_is_strictly_increasing() {
    assert!(
        MILESTONES
            .windows(2)
            .all(|w| w[0].threshold_grams < w[1].threshold_grams)
    );
}

#[test]
fn test_progress_percent_without_next_is_full() {
    assert_eq!(progress_percent(123.0, None, None), 100.0);
    assert_eq!(progress_percent(0.0, None, Some(&MILESTONES[0])), 0.0);
}

#[test]
fn test_gallery_flags_follow_estimate() {
    // 3600 kcal = 500 g
    let entries = vec![entry("1", "2025-09-01", 0, 3600)];
    let view = Core::build_view(&entries, d("2025-09-01"));

    let unlocked: Vec<u32> = view
        .gallery
        .iter()
        .filter(|s| s.unlocked)
        .map(|s| s.milestone.threshold_grams)
        .collect();
    assert_eq!(unlocked, [200, 450]);
    assert_eq!(view.gallery.len(), MILESTONES.len());
}

#[test]
fn test_streak_counts_recent_deficit_days() {
    let entries = vec![
        entry("1", "2025-09-05", 1500, 2000),
        entry("2", "2025-09-04", 1500, 2000),
        entry("3", "2025-09-03", 2500, 2000),
        entry("4", "2025-09-02", 1500, 2000),
    ];
    let summaries = build_summaries(&entries);

    assert_eq!(streak_days(&summaries.descending, d("2025-09-05")), 2);
    // yesterday's entry still counts
    assert_eq!(streak_days(&summaries.descending, d("2025-09-06")), 2);
}

#[test]
fn test_stale_ledger_has_no_streak() {
    let entries = vec![
        entry("1", "2025-09-05", 1500, 2000),
        entry("2", "2025-09-04", 1500, 2000),
    ];
    let summaries = build_summaries(&entries);

    assert_eq!(streak_days(&summaries.descending, d("2025-09-07")), 0);
    assert_eq!(streak_days(&summaries.descending, d("2025-09-08")), 0);
}

#[test]
fn test_missing_days_do_not_break_streak() {
    let entries = vec![
        entry("1", "2025-09-10", 1500, 2000),
        entry("2", "2025-09-07", 1500, 2000),
        entry("3", "2025-09-01", 1500, 2000),
    ];
    let summaries = build_summaries(&entries);
    assert_eq!(streak_days(&summaries.descending, d("2025-09-10")), 3);
}

#[test]
fn test_zero_balance_day_breaks_streak() {
    let entries = vec![
        entry("1", "2025-09-10", 1500, 2000),
        entry("2", "2025-09-09", 2000, 2000),
        entry("3", "2025-09-08", 1500, 2000),
    ];
    let summaries = build_summaries(&entries);
    assert_eq!(streak_days(&summaries.descending, d("2025-09-10")), 1);
}

#[test]
fn test_surplus_latest_day_means_no_streak() {
    let entries = vec![
        entry("1", "2025-09-10", 2500, 2000),
        entry("2", "2025-09-09", 1500, 2000),
    ];
    let summaries = build_summaries(&entries);
    let p = calculate_progression(&summaries.descending, d("2025-09-10"), &MILESTONES);
    assert_eq!(p.streak_days, 0);
}

#[test]
fn test_empty_ledger_progression() {
    let p = calculate_progression(&[], d("2025-09-10"), &MILESTONES);
    assert_eq!(p.cumulative_balance, 0);
    assert_eq!(p.estimated_fat_loss_grams, 0.0);
    assert_eq!(p.streak_days, 0);
    assert!(p.current_milestone.is_none());
    assert_eq!(p.next_milestone, Some(MILESTONES[0]));
    assert_eq!(p.progress_percent, 0.0);
}

#[test]
fn test_series_running_total_ignores_surplus_days() {
    let entries = vec![
        entry("1", "2025-09-01", 0, 720),   // -720 → 100 g
        entry("2", "2025-09-02", 720, 0),   // +720
        entry("3", "2025-09-03", 1000, 1360), // -360 → 50 g
    ];
    let view = Core::build_view(&entries, d("2025-09-03"));

    let labels: Vec<&str> = view.chart.iter().map(|p| p.date_label.as_str()).collect();
    assert_eq!(labels, ["09-01", "09-02", "09-03"]);

    let grams: Vec<f64> = view
        .chart
        .iter()
        .map(|p| p.cumulative_fat_loss_grams)
        .collect();
    assert!(approx(grams[0], 100.0));
    assert!(approx(grams[1], 100.0));
    assert!(approx(grams[2], 150.0));

    // the headline estimate nets the surplus out
    assert!(approx(view.progression.estimated_fat_loss_grams, 50.0));
}

#[test]
fn test_series_is_non_decreasing() {
    let entries = vec![
        entry("1", "2025-01-05", 3000, 100),
        entry("2", "2025-01-01", 100, 2500),
        entry("3", "2025-01-03", 2200, 2200),
        entry("4", "2025-01-02", 900, 2900),
        entry("5", "2025-01-04", 1800, 1200),
    ];
    let summaries = build_summaries(&entries);
    let points = project_series(&summaries.ascending);

    assert_eq!(points.len(), 5);
    assert!(
        points
            .windows(2)
            .all(|w| w[0].cumulative_fat_loss_grams <= w[1].cumulative_fat_loss_grams)
    );
    assert_eq!(points[0].balance, -2400);
}

#[test]
fn test_future_dated_latest_day_keeps_streak() {
    let entries = vec![
        entry("1", "2025-09-11", 1500, 2000),
        entry("2", "2025-09-10", 1500, 2000),
    ];
    let summaries = build_summaries(&entries);
    assert_eq!(streak_days(&summaries.descending, d("2025-09-10")), 2);
}

#[test]
fn test_render_chart_with_zero_width() {
    let entries = vec![
        entry("1", "2025-09-01", 0, 720),
        entry("2", "2025-09-02", 720, 0),
    ];
    let view = Core::build_view(&entries, d("2025-09-02"));
    let points: Vec<&ChartPoint> = view.chart.iter().collect();

    let out = render_chart(&points, 0);
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("09-01"));
    assert!(out.contains("100.0 g"));
    assert!(!out.contains('█'));
}

#[test]
fn test_render_chart_scales_bars() {
    let entries = vec![
        entry("1", "2025-09-01", 0, 720),
        entry("2", "2025-09-02", 0, 360),
    ];
    let view = Core::build_view(&entries, d("2025-09-02"));
    let points: Vec<&ChartPoint> = view.chart.iter().collect();

    let out = render_chart(&points, 10);
    let bars: Vec<usize> = out.lines().map(|l| l.matches('█').count()).collect();
    assert_eq!(bars, [10, 5]);
}

#[test]
fn test_chart_export_keeps_full_precision() {
    let entries = vec![entry("1", "2025-09-01", 2000, 2400)];
    let view = Core::build_view(&entries, d("2025-09-01"));
    let row = ChartExport::from(&view.chart[0]);

    let expected = 400.0 / 7200.0 * 1000.0;
    assert!(approx(row.cumulative_fat_loss_grams, expected));
    assert_eq!(row.to_row()[3], expected.to_string());
}
