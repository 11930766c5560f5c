//! Synthetic catalog generator.
//!
//! Writes a catalog CSV and the matching phone model list so the browser can
//! be exercised without production data.

use anyhow::Result;
use rcatalog::{fields, sample_phone_models, write_phone_models, CatalogWriter, SampleCatalogReader, DEFAULT_SAMPLE_SEED};
use std::env;

struct Config {
    rows: usize,
    seed: u64,
    output_file: Option<String>,
    models_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 500,
            seed: DEFAULT_SAMPLE_SEED,
            output_file: None,
            models_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-rows" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-rows requires an argument");
                }
                config.rows = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-models" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-models requires a file path argument");
                }
                config.models_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                log::warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Product Catalog Generator");
    println!("Usage: catalog-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -rows <N>              Number of catalog rows (default: 500)");
    println!("  -seed <N>              Random seed (default: {})", DEFAULT_SAMPLE_SEED);
    println!("  -out <FILE>            Catalog output path (default: CLASSIFY.csv)");
    println!("  -models <FILE>         Phone model list path (default: phone_model_dict.txt)");
    println!("  -brotli                Write Brotli-compressed files (*.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn with_brotli_suffix(path: &str, use_brotli: bool) -> String {
    if use_brotli && !path.ends_with(".br") {
        format!("{}.br", path)
    } else {
        path.to_string()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args()?;

    let output_path = with_brotli_suffix(
        config.output_file.as_deref().unwrap_or(rcatalog::DEFAULT_CATALOG_RESOURCE),
        config.use_brotli,
    );
    let models_path = with_brotli_suffix(
        config.models_file.as_deref().unwrap_or(rcatalog::DEFAULT_PHONE_MODELS_RESOURCE),
        config.use_brotli,
    );

    let dataset = SampleCatalogReader::with_config(config.rows, config.seed).generate();

    let mut writer = CatalogWriter::new(&output_path, &fields::ALL)?;
    for row in dataset.rows() {
        writer.write_row(row)?;
    }
    let written = writer.finish()?;
    log::info!("Catalog written to {} ({} rows)", output_path, written);

    write_phone_models(&models_path, &sample_phone_models())?;
    log::info!("Phone models written to {}", models_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brotli_suffix() {
        assert_eq!(with_brotli_suffix("CLASSIFY.csv", true), "CLASSIFY.csv.br");
        assert_eq!(with_brotli_suffix("CLASSIFY.csv.br", true), "CLASSIFY.csv.br");
        assert_eq!(with_brotli_suffix("CLASSIFY.csv", false), "CLASSIFY.csv");
    }
}
