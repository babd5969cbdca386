pub mod chart_point;
pub mod daily_summary;
pub mod entry;
pub mod milestone;
pub mod progression;
