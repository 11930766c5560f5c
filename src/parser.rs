use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::resource::{fetch_text, ResourceLocation};
use crate::row::{Dataset, Row};
use crate::traits::{CatalogReader, ResourceFetcher};

/// Parses catalog CSV text. The first record is the header.
///
/// Parsing is lenient: records shorter than the header leave the missing
/// columns absent, surplus cells are ignored, and a malformed record is
/// logged and skipped instead of failing the whole catalog. Rows whose cells
/// are all empty are dropped.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<Arc<str>> = csv_reader
        .headers()
        .context("Failed to read catalog header")?
        .iter()
        .map(|name| Arc::from(name.trim_start_matches('\u{feff}')))
        .collect();

    let mut rows = Vec::new();
    let mut skipped_blank = 0usize;

    for (line, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::warn!("Skipping malformed catalog record {}: {}", line + 1, err);
                continue;
            }
        };

        let mut row = Row::new();
        for (column, value) in columns.iter().zip(record.iter()) {
            row.insert(Arc::clone(column), value.to_string());
        }

        if row.is_blank() {
            skipped_blank += 1;
            continue;
        }
        rows.push(row);
    }

    log::debug!(
        "Parsed catalog: {} columns, {} rows, {} blank rows dropped",
        columns.len(),
        rows.len(),
        skipped_blank
    );

    Ok(Dataset::new(columns, rows))
}

/// Parses catalog CSV from a string.
pub fn parse_catalog_str(text: &str) -> Result<Dataset> {
    parse_catalog(text.as_bytes())
}

/// Splits a phone model list into entries: one per line, blank lines skipped,
/// surrounding whitespace removed, file order kept.
pub fn parse_phone_models(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fetches and parses a phone model list.
pub fn read_phone_models(
    fetcher: &dyn ResourceFetcher,
    location: &ResourceLocation,
) -> Result<Vec<String>> {
    let text = fetch_text(fetcher, location)
        .with_context(|| format!("Failed to fetch phone models from {}", location))?;
    Ok(parse_phone_models(&text))
}

/// Reads catalogs from CSV resources through a [`ResourceFetcher`].
pub struct CsvCatalogReader<F: ResourceFetcher> {
    fetcher: F,
}

impl<F: ResourceFetcher> CsvCatalogReader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

impl<F: ResourceFetcher> CatalogReader for CsvCatalogReader<F> {
    fn read(&self, location: &ResourceLocation) -> Result<Dataset> {
        let text = fetch_text(&self.fetcher, location)
            .with_context(|| format!("Failed to fetch catalog from {}", location))?;
        parse_catalog_str(&text).with_context(|| format!("Failed to parse catalog {}", location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryFetcher;
    use crate::row::fields;

    #[test]
    fn test_blank_rows_are_dropped() {
        let data = parse_catalog_str("PRODUCT_TITLE,PRODUCT_SKU,PHONE\nWidget,SKU1,iPhone 12\n,,\n").unwrap();
        assert_eq!(data.len(), 1);

        let row = &data.rows()[0];
        assert_eq!(row.get(fields::PRODUCT_TITLE), Some("Widget"));
        assert_eq!(row.get(fields::PRODUCT_SKU), Some("SKU1"));
        assert_eq!(row.get(fields::PHONE), Some("iPhone 12"));
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let data = parse_catalog_str("PRODUCT_TITLE,PHONE\n\nA,P1\n\n\nB,P2\n").unwrap();
        let titles: Vec<_> = data
            .rows()
            .iter()
            .map(|r| r.get(fields::PRODUCT_TITLE).unwrap())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_short_and_long_records() {
        let data = parse_catalog_str("PRODUCT_TITLE,PHONE,COLOR\nShort,Pixel\nLong,iPhone,Red,extra\n").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.rows()[0].get(fields::COLOR), None);
        assert_eq!(data.rows()[1].get(fields::COLOR), Some("Red"));
        assert_eq!(data.rows()[1].len(), 3);
    }

    #[test]
    fn test_quoted_fields_and_pipes() {
        let csv = "PRODUCT_TITLE,IMAGES,PRODUCT_DESCRIPTION\n\"Case, slim\",\" a.jpg | b.jpg |\",\"Line one\nLine two\"\n";
        let data = parse_catalog_str(csv).unwrap();
        let row = &data.rows()[0];
        assert_eq!(row.get(fields::PRODUCT_TITLE), Some("Case, slim"));
        assert_eq!(row.get(fields::IMAGES), Some(" a.jpg | b.jpg |"));
        assert_eq!(row.get(fields::PRODUCT_DESCRIPTION), Some("Line one\nLine two"));
    }

    #[test]
    fn test_columns_in_header_order() {
        let data = parse_catalog_str("rrp,PHONE\n9.99,Pixel\n").unwrap();
        let columns: Vec<&str> = data.columns().iter().map(|c| &**c).collect();
        assert_eq!(columns, vec!["rrp", "PHONE"]);
    }

    #[test]
    fn test_parse_phone_models() {
        let models = parse_phone_models("iPhone 12\r\n\n  \nGalaxy S23\nPixel 7");
        assert_eq!(models, vec!["iPhone 12", "Galaxy S23", "Pixel 7"]);
    }

    #[test]
    fn test_reader_reports_missing_resource() {
        let reader = CsvCatalogReader::new(MemoryFetcher::new());
        let err = reader.read(&ResourceLocation::parse("CLASSIFY.csv")).unwrap_err();
        assert!(format!("{:#}", err).contains("CLASSIFY.csv"));
    }

    #[test]
    fn test_reader_parses_fetched_catalog() {
        let fetcher = MemoryFetcher::new().with_resource("CLASSIFY.csv", "PRODUCT_TITLE,PHONE\nA,Pixel\n");
        let reader = CsvCatalogReader::new(fetcher);
        let data = reader.read(&ResourceLocation::parse("CLASSIFY.csv")).unwrap();
        assert_eq!(data.len(), 1);
    }
}
