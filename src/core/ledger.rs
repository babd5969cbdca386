//! The entry collection and the only two operations allowed to change it.
//!
//! Every operation returns a new `Ledger`; the receiver is never modified.

use crate::models::entry::Entry;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_day(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date == date)
    }

    /// Append an entry for `today`, parsing raw user input.
    ///
    /// Returns `None` when both amounts resolve to 0.
    pub fn append_raw(&self, intake: &str, burn: &str, today: NaiveDate) -> Option<Ledger> {
        self.append(parse_kcal(intake), parse_kcal(burn), today)
    }

    /// Prepend a new entry stamped with `today`.
    ///
    /// Returns `None` when both amounts are 0.
    pub fn append(&self, intake: u32, burn: u32, today: NaiveDate) -> Option<Ledger> {
        if intake == 0 && burn == 0 {
            return None;
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(Entry::new(today, intake, burn));
        entries.extend(self.entries.iter().cloned());

        Some(Ledger { entries })
    }

    /// Drop every entry of `date`. Returns the new ledger and how many
    /// entries were removed.
    pub fn without_day(&self, date: NaiveDate) -> (Ledger, usize) {
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| e.date != date)
            .cloned()
            .collect();
        let removed = self.entries.len() - entries.len();

        (Ledger { entries }, removed)
    }

    /// Add `incoming` entries whose id is not already present.
    /// Returns the new ledger and how many entries were added.
    pub fn merged(&self, incoming: Vec<Entry>) -> (Ledger, usize) {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| e.id.clone()).collect();
        let mut entries = self.entries.clone();
        let mut added = 0;

        for entry in incoming {
            if seen.insert(entry.id.clone()) {
                entries.push(entry);
                added += 1;
            }
        }

        (Ledger { entries }, added)
    }
}

/// Parse a kcal amount typed by the user.
///
/// Leading whitespace and a `+` sign are accepted and parsing stops at the
/// first non-digit (`"1200kcal"` → 1200, `"12.5"` → 12). Empty, negative,
/// non-numeric or out-of-range input yields 0.
pub fn parse_kcal(raw: &str) -> u32 {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);

    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    s[..digits_end].parse::<u32>().unwrap_or(0)
}
