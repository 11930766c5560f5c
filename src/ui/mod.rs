//! UI panel rendering subsystem
//!
//! - Header panel (search box, suggestions, catalog and export controls, theme selector)
//! - Catalog panel (virtually scrolled card list with lazy filling)
//! - Card renderer (single product card or placeholder)
//! - Status bar (memory, catalog source and counts)
//! - Overlays (loading bar, back-to-top button, toasts)
//! - Virtual scrolling (slot geometry)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod catalog_panel;
pub mod card_renderer;
pub mod status_bar;
pub mod overlays;
pub mod virtual_scrolling;
pub mod panel_manager;
