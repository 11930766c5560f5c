//! Viewport intersection for lazily filled catalog slots.
//!
//! Every placeholder occupies one fixed-height slot in a vertical list. A
//! slot counts as visible once enough of it overlaps the viewport grown by
//! a margin on the top and bottom, so cards are built slightly before they
//! scroll into view.

use std::ops::Range;

/// Extra space above and below the viewport that already counts as visible.
pub const ROOT_MARGIN: f32 = 200.0;

/// Fraction of a slot's height that must overlap the grown viewport.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// Decides which placeholders are close enough to the viewport to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityWatcher {
    root_margin: f32,
    threshold: f32,
}

impl Default for VisibilityWatcher {
    fn default() -> Self {
        Self::new(ROOT_MARGIN, VISIBILITY_THRESHOLD)
    }
}

impl VisibilityWatcher {
    pub fn new(root_margin: f32, threshold: f32) -> Self {
        Self {
            root_margin: root_margin.max(0.0),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Whether an item spanning `item_top..item_bottom` intersects the
    /// viewport `viewport_top..viewport_bottom` grown by the root margin.
    pub fn is_intersecting(
        &self,
        item_top: f32,
        item_bottom: f32,
        viewport_top: f32,
        viewport_bottom: f32,
    ) -> bool {
        let item_height = item_bottom - item_top;
        if item_height <= 0.0 {
            return false;
        }
        let root_top = viewport_top - self.root_margin;
        let root_bottom = viewport_bottom + self.root_margin;

        let overlap = item_bottom.min(root_bottom) - item_top.max(root_top);
        if overlap <= 0.0 {
            return false;
        }
        overlap / item_height >= self.threshold
    }

    /// Indices of the slots that intersect the viewport.
    ///
    /// Slot `i` starts at `i * slot_height` and its item is `item_height`
    /// tall. The result is empty when nothing intersects.
    pub fn intersecting_range(
        &self,
        viewport_top: f32,
        viewport_bottom: f32,
        slot_height: f32,
        item_height: f32,
        count: usize,
    ) -> Range<usize> {
        if count == 0 || slot_height <= 0.0 || viewport_bottom < viewport_top {
            return 0..0;
        }
        let root_top = viewport_top - self.root_margin;
        let root_bottom = viewport_bottom + self.root_margin;

        let first_candidate = ((root_top - item_height) / slot_height).floor().max(0.0) as usize;
        let last_candidate = ((root_bottom / slot_height).ceil().max(0.0) as usize).min(count);

        let mut visible = (first_candidate..last_candidate).filter(|&index| {
            let top = index as f32 * slot_height;
            self.is_intersecting(top, top + item_height, viewport_top, viewport_bottom)
        });

        match visible.next() {
            Some(start) => {
                let end = visible.last().unwrap_or(start) + 1;
                start..end
            }
            None => 0..0,
        }
    }
}
