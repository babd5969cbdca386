use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged intake/burn record.
///
/// The serialized shape (`id`, `date`, `intake`, `burn`) is the storage
/// format of the ledger blob and of `import` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    pub intake: u32,     // kcal
    pub burn: u32,       // kcal
}

impl Entry {
    /// Build a new entry with a fresh UUID v4 id.
    pub fn new(date: NaiveDate, intake: u32, burn: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            intake,
            burn,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// intake − burn for this single entry.
    pub fn balance(&self) -> i64 {
        i64::from(self.intake) - i64::from(self.burn)
    }
}
