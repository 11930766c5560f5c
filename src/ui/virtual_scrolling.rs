//! Virtual scrolling geometry for the catalog list.
//!
//! Every placeholder occupies one fixed-height slot, so slot positions and
//! the total content height follow directly from the index and the count.

/// Height of a card (or its placeholder) in points
pub const CARD_HEIGHT: f32 = 288.0;

/// Vertical gap between consecutive cards
pub const CARD_SPACING: f32 = 12.0;

/// Distance between the tops of consecutive slots
pub const SLOT_HEIGHT: f32 = CARD_HEIGHT + CARD_SPACING;

/// Cards never grow wider than this
pub const CARD_MAX_WIDTH: f32 = 760.0;

/// Side length of a gallery thumbnail
pub const THUMBNAIL_SIZE: f32 = 112.0;

/// Total scrollable height for `count` slots.
pub fn content_height(count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        count as f32 * SLOT_HEIGHT - CARD_SPACING
    }
}

/// Offset of slot `index` from the top of the content.
pub fn slot_top(index: usize) -> f32 {
    index as f32 * SLOT_HEIGHT
}
