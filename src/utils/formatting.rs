//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// kcal with an explicit `+` for surpluses (e.g. `+250`, `-400`, `0`).
pub fn format_kcal_signed(kcal: i64) -> String {
    if kcal > 0 {
        format!("+{}", kcal)
    } else {
        kcal.to_string()
    }
}

/// Grams with one decimal, as shown in the status header.
pub fn format_grams(grams: f64) -> String {
    format!("{:.1} g", grams)
}

/// Horizontal bar filled to `percent` (0–100) over `width` cells.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar proportional to `value / max`, at least one cell for non-zero values.
pub fn scaled_bar(value: u64, max: u64, width: usize) -> String {
    if value == 0 || max == 0 || width == 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}
