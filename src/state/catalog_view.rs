//! The rendered catalog: placeholders over one ordered sequence of rows.
//!
//! A view is built from the sequence handed to a render call and owns it.
//! Placeholders resolve their index against that sequence only, so a
//! filtered view can never show rows from outside the filter. Re-rendering
//! replaces the whole view, dropping every placeholder of the previous one.

use once_cell::sync::OnceCell;
use rcatalog::{Card, Row};
use std::sync::Arc;

/// Stand-in for a card that has not been built yet.
///
/// The card slot is written at most once; after that the placeholder always
/// shows the same card.
#[derive(Debug)]
pub struct Placeholder {
    index: usize,
    card: OnceCell<Card>,
}

impl Placeholder {
    fn new(index: usize) -> Self {
        Self {
            index,
            card: OnceCell::new(),
        }
    }

    /// Position of this placeholder in its view.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The card, if the placeholder has been filled.
    pub fn card(&self) -> Option<&Card> {
        self.card.get()
    }

    pub fn is_filled(&self) -> bool {
        self.card.get().is_some()
    }
}

/// Placeholders for one render call.
#[derive(Debug, Default)]
pub struct CatalogView {
    rows: Vec<Arc<Row>>,
    placeholders: Vec<Placeholder>,
}

impl CatalogView {
    /// Creates one placeholder per row, in order.
    pub fn render(rows: Vec<Arc<Row>>) -> Self {
        let placeholders = (0..rows.len()).map(Placeholder::new).collect();
        Self { rows, placeholders }
    }

    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Rows this view was rendered from.
    pub fn rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    /// Fills the placeholder at `index` with a card built from this view's
    /// row at the same index. Returns the card; a placeholder that is already
    /// filled keeps its card. Out-of-range indices yield `None`.
    pub fn fill(&self, index: usize) -> Option<&Card> {
        let placeholder = self.placeholders.get(index)?;
        let row = self.rows.get(placeholder.index)?;
        Some(placeholder.card.get_or_init(|| Card::from_row(row)))
    }

    /// Number of placeholders that have been turned into cards.
    pub fn filled_count(&self) -> usize {
        self.placeholders.iter().filter(|p| p.is_filled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(titles: &[&str]) -> Vec<Arc<Row>> {
        titles
            .iter()
            .map(|t| Arc::new(Row::from_pairs([("PRODUCT_TITLE", *t)])))
            .collect()
    }

    #[test]
    fn test_one_placeholder_per_row() {
        let view = CatalogView::render(rows(&["A", "B", "C"]));
        assert_eq!(view.len(), 3);
        let indices: Vec<_> = view.placeholders().iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(view.filled_count(), 0);
    }

    #[test]
    fn test_fill_is_one_shot() {
        let view = CatalogView::render(rows(&["A", "B"]));
        let first = view.fill(1).unwrap() as *const Card;
        let second = view.fill(1).unwrap() as *const Card;
        assert_eq!(first, second);
        assert_eq!(view.placeholders()[1].card().unwrap().title, "B");
        assert!(!view.placeholders()[0].is_filled());
        assert_eq!(view.filled_count(), 1);
    }

    #[test]
    fn test_fill_uses_own_rows() {
        let all = rows(&["A", "B", "C"]);
        let filtered = vec![Arc::clone(&all[2])];
        let view = CatalogView::render(filtered);
        assert_eq!(view.fill(0).unwrap().title, "C");
        assert!(view.fill(1).is_none());
    }
}
