//! Catalog scroll position state.
//!
//! Tracks the vertical offset of the catalog list and pending requests to
//! jump back to the top.

/// Scroll offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0;

/// State related to the catalog scroll area.
///
/// Responsibilities:
/// - Remembering the last observed scroll offset
/// - Deciding when the back-to-top button is visible
/// - Carrying one-shot scroll-to-top and jump-to-top requests to the next frame
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Vertical scroll offset in points
    offset: f32,
    /// Set when the next frame should scroll (animated) to the top
    scroll_to_top_requested: bool,
    /// Set when the next frame must start at the top without animating
    jump_to_top_requested: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the back-to-top button should be shown.
    pub fn back_to_top_visible(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }

    // ===== Mutations =====

    /// Records the scroll offset observed this frame.
    pub fn observe(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    pub fn request_scroll_to_top(&mut self) {
        self.scroll_to_top_requested = true;
    }

    /// Consumes a pending scroll-to-top request.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top_requested)
    }

    /// Consumes a pending jump-to-top request.
    pub fn take_jump_to_top(&mut self) -> bool {
        std::mem::take(&mut self.jump_to_top_requested)
    }

    /// Forgets the offset; a new view is laid out from the top on its first
    /// frame, so no slot below the first screen gets filled on the way up.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.scroll_to_top_requested = false;
        self.jump_to_top_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_threshold() {
        let mut state = ScrollState::new();
        state.observe(300.0);
        assert!(!state.back_to_top_visible());
        state.observe(301.0);
        assert!(state.back_to_top_visible());
    }

    #[test]
    fn test_scroll_to_top_request_is_one_shot() {
        let mut state = ScrollState::new();
        state.request_scroll_to_top();
        assert!(state.take_scroll_to_top());
        assert!(!state.take_scroll_to_top());
    }

    #[test]
    fn test_reset_jumps_without_animation() {
        let mut state = ScrollState::new();
        state.observe(5000.0);
        state.request_scroll_to_top();
        state.reset();
        assert_eq!(state.offset(), 0.0);
        assert!(!state.back_to_top_visible());
        assert!(!state.take_scroll_to_top());
        assert!(state.take_jump_to_top());
        assert!(!state.take_jump_to_top());
    }
}
