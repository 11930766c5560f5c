//! Product card content generated from a catalog row.

use crate::row::{fields, Row};

/// Title shown when a row has no PRODUCT_TITLE.
pub const UNNAMED_ITEM: &str = "Unnamed Item";

/// Placeholder for empty info fields.
pub const MISSING_VALUE: &str = "-";

/// Alternative text attached to every gallery image.
pub const IMAGE_ALT_TEXT: &str = "Item Image";

/// A labelled value in the card's info block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

/// Everything a product card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    /// Copy target of the SKU control; empty when the row has no SKU.
    pub sku: String,
    /// Gallery image URLs as written in the row (unresolved).
    pub images: Vec<String>,
    /// Color, Phone, Case and RRP, in that order.
    pub info: [InfoField; 4],
    pub description: String,
}

impl Card {
    pub fn from_row(row: &Row) -> Self {
        let info_value = |key: &str| row.get_non_empty(key).unwrap_or(MISSING_VALUE).to_string();

        Card {
            title: row
                .get_non_empty(fields::PRODUCT_TITLE)
                .unwrap_or(UNNAMED_ITEM)
                .to_string(),
            sku: row.get(fields::PRODUCT_SKU).unwrap_or_default().to_string(),
            images: split_image_urls(row.get(fields::IMAGES).unwrap_or_default()),
            info: [
                InfoField { label: "Color", value: info_value(fields::COLOR) },
                InfoField { label: "Phone", value: info_value(fields::PHONE) },
                InfoField { label: "Case", value: info_value(fields::CASE) },
                InfoField { label: "RRP", value: info_value(fields::RRP) },
            ],
            description: row
                .get(fields::PRODUCT_DESCRIPTION)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// The gallery is only shown when at least one image URL survives.
    pub fn has_gallery(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Splits an IMAGES cell on `|`, trimming each entry and dropping empty ones.
pub fn split_image_urls(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
