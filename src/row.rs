//! Catalog rows and the loaded dataset.
//!
//! A [`Row`] is one catalog record keyed by column name. Column names come from
//! the CSV header and are shared between all rows of a dataset through `Arc<str>`,
//! so a large catalog only stores each header string once.

use std::sync::Arc;

/// Column names the catalog knows how to render.
pub mod fields {
    pub const PRODUCT_TITLE: &str = "PRODUCT_TITLE";
    pub const PRODUCT_SKU: &str = "PRODUCT_SKU";
    pub const IMAGES: &str = "IMAGES";
    pub const COLOR: &str = "COLOR";
    pub const PHONE: &str = "PHONE";
    pub const CASE: &str = "CASE";
    pub const RRP: &str = "rrp";
    pub const PRODUCT_DESCRIPTION: &str = "PRODUCT_DESCRIPTION";

    /// Recognized columns in the order the generator writes them.
    pub const ALL: [&str; 8] = [
        PRODUCT_TITLE,
        PRODUCT_SKU,
        IMAGES,
        COLOR,
        PHONE,
        CASE,
        RRP,
        PRODUCT_DESCRIPTION,
    ];
}

/// One catalog record: an ordered list of `(column, value)` pairs.
///
/// Fields keep the order of the CSV header. A column missing from a short CSV
/// record is simply absent from the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(Arc<str>, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builds a row from borrowed pairs. Convenient for tests and generators.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = Row::new();
        for (key, value) in pairs {
            row.insert(Arc::from(key), value.to_string());
        }
        row
    }

    /// Sets a field, replacing an existing value for the same column.
    pub fn insert(&mut self, key: Arc<str>, value: String) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| **k == *key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Returns the raw value of a column, if the column is present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of a column only when it is present and non-empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// True when every field is the empty string (or the row has no fields).
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (&**k, v.as_str()))
    }
}

/// The full set of rows loaded from one catalog resource.
///
/// Rows are reference counted so filtered views can share them with the
/// dataset without copying field data.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Arc<str>>,
    rows: Vec<Arc<Row>>,
}

impl Dataset {
    pub fn new(columns: Vec<Arc<str>>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows: rows.into_iter().map(Arc::new).collect(),
        }
    }

    /// Header columns in file order.
    pub fn columns(&self) -> &[Arc<str>] {
        &self.columns
    }

    pub fn rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
