use crate::core::calculator::aggregate::build_summaries;
use crate::db::pool::DbPool;
use crate::db::store::{load_entries, load_raw};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, key: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED LEDGER
    //
    let raw_len = load_raw(pool, key)?.map(|v| v.len()).unwrap_or(0);
    let entries = load_entries(pool, key)?;
    let summaries = build_summaries(&entries);

    println!("{}• Storage key:{} {} ({} bytes)", CYAN, RESET, key, raw_len);
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );
    println!(
        "{}• Logged days:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        summaries.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let fmt_first = summaries
        .ascending
        .first()
        .map(|d| d.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = summaries
        .descending
        .first()
        .map(|d| d.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/DAY
    //
    if !summaries.is_empty() {
        let avg = entries.len() as f64 / summaries.len() as f64;
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
