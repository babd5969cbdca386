//! Pure derivations over the entry collection: day aggregation,
//! progression and the chart series.

pub mod aggregate;
pub mod progression;
pub mod series;

/// kcal of energy per kilogram of body fat.
pub const ENERGY_DENSITY_KCAL_PER_KG: f64 = 7200.0;

/// Convert an amount of energy (kcal) to grams of fat.
pub fn kcal_to_fat_grams(kcal: f64) -> f64 {
    kcal / ENERGY_DENSITY_KCAL_PER_KG * 1000.0
}
