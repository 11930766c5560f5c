//! Shared bookkeeping for background loads.

/// Holds the state of the background loading operations.
///
/// Only progress flags are shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` so loader threads can clear
/// their flag when they finish.
pub struct LoadingState {
    /// True while a catalog load is in progress
    pub catalog_in_progress: bool,
    /// Generation of the most recent catalog load; older loads are stale
    pub catalog_generation: u64,
}

impl LoadingState {
    /// Creates a loading state with nothing in progress.
    pub fn new() -> Self {
        Self {
            catalog_in_progress: false,
            catalog_generation: 0,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
