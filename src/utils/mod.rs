pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod range;
pub mod table;

pub use formatting::{format_grams, format_kcal_signed};
