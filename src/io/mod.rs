//! I/O modules for background resource loading.

pub mod loading_state;
pub mod async_loader;

// Re-export commonly used types
pub use loading_state::LoadingState;
pub use async_loader::{AsyncLoader, LoadResult};
