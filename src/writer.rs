use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;

use crate::row::Row;

/// Opens an output file, enabling Brotli compression when the path ends with `.br`.
///
/// Brotli compression uses quality level 6 (balanced speed/ratio).
fn open_output(file_path: &str) -> Result<Box<dyn Write>> {
    let file = File::create(file_path)
        .with_context(|| format!("Failed to create file: {}", file_path))?;

    let writer: Box<dyn Write> = if file_path.ends_with(".br") {
        let buf_writer = BufWriter::new(file);
        let params = BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        };
        Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
    } else {
        Box::new(BufWriter::new(file))
    };
    Ok(writer)
}

/// Writes catalog CSV files readable by [`crate::parse_catalog`].
///
/// # Examples
///
/// ```no_run
/// # use rcatalog::{CatalogWriter, Row};
/// # fn main() -> anyhow::Result<()> {
/// let mut writer = CatalogWriter::new("CLASSIFY.csv", &["PRODUCT_TITLE", "PHONE"])?;
/// writer.write_row(&Row::from_pairs([("PRODUCT_TITLE", "Widget"), ("PHONE", "iPhone 12")]))?;
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
pub struct CatalogWriter {
    writer: csv::Writer<Box<dyn Write>>,
    columns: Vec<Arc<str>>,
    row_count: usize,
}

impl CatalogWriter {
    /// Creates the file and writes the header row.
    pub fn new(file_path: &str, columns: &[&str]) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(open_output(file_path)?);
        writer
            .write_record(columns)
            .context("Failed to write catalog header")?;

        Ok(CatalogWriter {
            writer,
            columns: columns.iter().map(|c| Arc::from(*c)).collect(),
            row_count: 0,
        })
    }

    /// Writes one row; columns the row lacks are written as empty cells.
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        let record: Vec<&str> = self
            .columns
            .iter()
            .map(|column| row.get(column).unwrap_or_default())
            .collect();

        self.writer
            .write_record(&record)
            .context("Failed to write catalog row")?;
        self.row_count += 1;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Flushes all pending output and closes the file. Returns the row count.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().context("Failed to flush catalog")?;
        let inner = self
            .writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("Failed to finish catalog: {}", err.error()))?;
        // Dropping the compressor writes the final Brotli block.
        drop(inner);
        Ok(self.row_count)
    }
}

/// Writes a phone model list, one model per line.
pub fn write_phone_models(file_path: &str, models: &[String]) -> Result<()> {
    let mut writer = open_output(file_path)?;
    for model in models {
        writeln!(writer, "{}", model).context("Failed to write phone model")?;
    }
    writer.flush().context("Failed to flush phone models")?;
    Ok(())
}
