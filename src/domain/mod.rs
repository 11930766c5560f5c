//! Domain logic modules for the catalog browser.
//!
//! - Visibility (viewport intersection for lazy card filling)

pub mod visibility;
