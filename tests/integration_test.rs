use rcatalog::{
    card_html, catalog_page_html, fetch_text, fields, parse_catalog_str, read_phone_models, search,
    write_phone_models, Card, CatalogReader, CatalogWriter, CsvCatalogReader, DefaultFetcher, MarkupMode,
    MemoryFetcher, ResourceLocation, Row, SampleCatalogReader,
};
use anyhow::Result;

const SCENARIO_CSV: &str = "PRODUCT_TITLE,PRODUCT_SKU,PHONE\nWidget,SKU1,iPhone 12\n,,\n";

#[test]
fn test_scenario_catalog_search() -> Result<()> {
    let dataset = parse_catalog_str(SCENARIO_CSV)?;
    assert_eq!(dataset.len(), 1);

    let found = search(dataset.rows(), "iphone");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get(fields::PRODUCT_TITLE), Some("Widget"));

    let card = Card::from_row(&found[0]);
    assert_eq!(card.sku, "SKU1");
    assert!(!card.has_gallery());
    assert_eq!(card.info[1].value, "iPhone 12");
    assert_eq!(card.info[0].value, "-");
    Ok(())
}

#[test]
fn test_write_and_read_catalog_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let csv_path = dir.path().join("CLASSIFY.csv");
    let csv_path = csv_path.to_str().unwrap();

    {
        let mut writer = CatalogWriter::new(csv_path, &fields::ALL)?;
        writer.write_row(&Row::from_pairs([
            (fields::PRODUCT_TITLE, "Armored Case"),
            (fields::PRODUCT_SKU, "AC-1"),
            (fields::IMAGES, " a.jpg | b.jpg |"),
            (fields::PHONE, "Pixel 7"),
            (fields::RRP, "19.99"),
        ]))?;
        writer.write_row(&Row::from_pairs([(fields::PRODUCT_TITLE, "No Phone")]))?;
        assert_eq!(writer.finish()?, 2);
    }

    let reader = CsvCatalogReader::new(DefaultFetcher::new());
    let dataset = reader.read(&ResourceLocation::parse(csv_path))?;
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.columns().len(), fields::ALL.len());

    let card = Card::from_row(&dataset.rows()[0]);
    assert_eq!(card.images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(card.info[3].value, "19.99");

    // Rows without PHONE never match, even the empty query
    assert_eq!(search(dataset.rows(), "").len(), 1);
    assert_eq!(search(dataset.rows(), "no phone").len(), 0);
    Ok(())
}

#[test]
fn test_brotli_catalog_roundtrip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let csv_path = dir.path().join("CLASSIFY.csv.br");
    let csv_path = csv_path.to_str().unwrap();
    let models_path = dir.path().join("phone_model_dict.txt.br");
    let models_path = models_path.to_str().unwrap();

    let sample = SampleCatalogReader::with_config(40, 7).generate();
    let mut writer = CatalogWriter::new(csv_path, &fields::ALL)?;
    for row in sample.rows() {
        writer.write_row(row)?;
    }
    writer.finish()?;
    write_phone_models(models_path, &["iPhone 12".to_string(), "Pixel 7".to_string()])?;

    let fetcher = DefaultFetcher::new();
    let location = ResourceLocation::parse(csv_path);
    assert!(location.is_brotli());
    let text = fetch_text(&fetcher, &location)?;
    assert!(text.starts_with("PRODUCT_TITLE"));

    let dataset = CsvCatalogReader::new(DefaultFetcher::new()).read(&location)?;
    assert_eq!(dataset.len(), sample.len());

    let models = read_phone_models(&fetcher, &ResourceLocation::parse(models_path))?;
    assert_eq!(models, vec!["iPhone 12", "Pixel 7"]);
    Ok(())
}

#[test]
fn test_phone_models_trimmed_and_ordered() -> Result<()> {
    let fetcher = MemoryFetcher::new().with_resource("phone_model_dict.txt", "iPhone 12\r\n\n  \nPixel 7\r\nGalaxy S23\n");
    let models = read_phone_models(&fetcher, &ResourceLocation::parse("phone_model_dict.txt"))?;
    assert_eq!(models, vec!["iPhone 12", "Pixel 7", "Galaxy S23"]);
    Ok(())
}

#[test]
fn test_card_markup_gallery_and_escaping() -> Result<()> {
    let dataset = parse_catalog_str(
        "PRODUCT_TITLE,PRODUCT_SKU,IMAGES,PHONE,PRODUCT_DESCRIPTION\n\
         Case <One>,S1,img/a.jpg|https://cdn.example/b.jpg,iPhone 12,\"Tough & light\"\n\
         Case Two,S2,,Pixel 7,\n",
    )?;
    let base = ResourceLocation::parse("https://shop.example/data/CLASSIFY.csv");
    let resolve = |reference: &str| base.resolve_reference(reference);

    let first = Card::from_row(&dataset.rows()[0]);
    let html = card_html(&first, MarkupMode::Escaped, resolve);
    assert!(html.contains("Case &lt;One&gt;"));
    assert!(html.contains("Tough &amp; light"));
    assert!(html.contains("src=\"https://shop.example/data/img/a.jpg\""));
    assert!(html.contains("src=\"https://cdn.example/b.jpg\""));
    assert_eq!(html.matches("alt=\"Item Image\"").count(), 2);

    let second = Card::from_row(&dataset.rows()[1]);
    let html = card_html(&second, MarkupMode::Escaped, resolve);
    assert!(!html.contains("imagesDiv"));

    let cards = [first, second];
    let page = catalog_page_html("Product Catalog", &cards, MarkupMode::Raw, resolve);
    assert_eq!(page.matches("class=\"productCard\"").count(), 2);
    assert!(page.contains("Case <One>"));
    Ok(())
}

#[test]
fn test_missing_catalog_is_an_error() {
    let reader = CsvCatalogReader::new(MemoryFetcher::new());
    let result = reader.read(&ResourceLocation::parse("CLASSIFY.csv"));
    assert!(result.is_err());
}
