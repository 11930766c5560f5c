use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::row::{fields, Dataset, Row};

const DEFAULT_ROWS: usize = 500;

/// Seed used when no seed is given, so the sample catalog is reproducible.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Phone models used by the generated catalog and its model list.
pub const SAMPLE_PHONE_MODELS: [&str; 12] = [
    "iPhone 12",
    "iPhone 12 Mini",
    "iPhone 13",
    "iPhone 14 Pro",
    "iPhone 15 Pro Max",
    "Galaxy S22",
    "Galaxy S23 Ultra",
    "Galaxy A54",
    "Pixel 7",
    "Pixel 8 Pro",
    "OnePlus 11",
    "Xperia 1 V",
];

const COLORS: [&str; 8] = ["Black", "Clear", "Midnight Blue", "Red", "Forest Green", "Lavender", "Sand", "White"];
const CASES: [&str; 5] = ["Silicone", "Leather Wallet", "Rugged", "Slim TPU", "MagSafe Clear"];
const ADJECTIVES: [&str; 6] = ["Classic", "Armored", "Featherweight", "Eco", "Studio", "Travel"];

/// Generates a synthetic catalog.
///
/// The same seed always yields the same catalog. Some rows deliberately
/// leave out PHONE, IMAGES or the title so every fallback is exercised.
pub struct SampleCatalogReader {
    rows: usize,
    seed: u64,
}

impl SampleCatalogReader {
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SAMPLE_SEED,
        }
    }

    pub fn with_config(rows: usize, seed: u64) -> Self {
        Self { rows, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the catalog.
    pub fn generate(&self) -> Dataset {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let columns: Vec<Arc<str>> = fields::ALL.iter().map(|c| Arc::from(*c)).collect();

        let rows = (0..self.rows)
            .map(|index| generate_row(&mut rng, &columns, index))
            .collect();

        Dataset::new(columns, rows)
    }
}

impl Default for SampleCatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

/// The phone model list that accompanies generated catalogs.
pub fn sample_phone_models() -> Vec<String> {
    SAMPLE_PHONE_MODELS.iter().map(|m| m.to_string()).collect()
}

fn generate_row(rng: &mut StdRng, columns: &[Arc<str>], index: usize) -> Row {
    let phone = *SAMPLE_PHONE_MODELS.choose(rng).unwrap_or(&"iPhone 12");
    let color = *COLORS.choose(rng).unwrap_or(&"Black");
    let case = *CASES.choose(rng).unwrap_or(&"Silicone");
    let adjective = *ADJECTIVES.choose(rng).unwrap_or(&"Classic");
    let sku = format!("SKU-{:05}", index + 1);

    let title = if rng.gen_ratio(1, 25) {
        String::new()
    } else {
        format!("{} {} Case for {}", adjective, case, phone)
    };
    let phone = if rng.gen_ratio(1, 20) { "" } else { phone };

    let image_count = rng.gen_range(0..=3);
    let images = (0..image_count)
        .map(|n| format!("https://picsum.photos/seed/{}-{}/240/240", sku, n))
        .collect::<Vec<_>>()
        .join(" | ");

    let rrp = format!("{}.99", rng.gen_range(9..60));
    let description = format!(
        "{} {} case in {}. Raised edges protect the camera and screen; fits the {} exactly.",
        adjective,
        case.to_lowercase(),
        color.to_lowercase(),
        if phone.is_empty() { "listed model" } else { phone }
    );

    let values = [title.as_str(), sku.as_str(), images.as_str(), color, phone, case, rrp.as_str(), description.as_str()];

    let mut row = Row::new();
    for (column, value) in columns.iter().zip(values) {
        row.insert(Arc::clone(column), value.to_string());
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        let a = SampleCatalogReader::with_config(50, 7).generate();
        let b = SampleCatalogReader::with_config(50, 7).generate();
        assert_eq!(a.len(), 50);
        assert!(a.rows().iter().zip(b.rows()).all(|(x, y)| x == y));
    }

    #[test]
    fn test_sample_rows_are_never_blank() {
        let data = SampleCatalogReader::new().generate();
        assert_eq!(data.len(), DEFAULT_ROWS);
        assert!(data.rows().iter().all(|r| !r.is_blank()));
        assert!(data.rows().iter().all(|r| r.get(fields::PRODUCT_SKU).is_some()));
    }
}
