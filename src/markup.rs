//! HTML markup for product cards and exported catalog pages.
//!
//! Field values are escaped unless the caller opts into [`MarkupMode::Raw`],
//! which interpolates them verbatim for catalogs whose descriptions carry
//! trusted HTML.

use std::borrow::Cow;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::card::{Card, IMAGE_ALT_TEXT};

/// How field values are placed into generated markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupMode {
    /// Every value is HTML-escaped.
    #[default]
    Escaped,
    /// Values are interpolated verbatim.
    Raw,
}

impl MarkupMode {
    pub fn label(self) -> &'static str {
        match self {
            MarkupMode::Escaped => "Escaped",
            MarkupMode::Raw => "Raw HTML",
        }
    }

    fn apply(self, value: &str) -> Cow<'_, str> {
        match self {
            MarkupMode::Escaped => escape_html(value),
            MarkupMode::Raw => Cow::Borrowed(value),
        }
    }
}

/// Escapes `& < > " '` so the value is inert inside element content and
/// quoted attributes.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Inner markup of one product card.
///
/// `resolve_image` maps an image entry from the row to the `src` written out.
pub fn card_html(card: &Card, mode: MarkupMode, resolve_image: impl Fn(&str) -> String) -> String {
    let mut html = String::with_capacity(512);

    html.push_str("<div class=\"identifierDiv\">");
    let _ = write!(html, "<div class=\"title\">{}</div>", mode.apply(&card.title));
    let _ = write!(html, "<div class=\"sku\">{}</div>", mode.apply(&card.sku));
    html.push_str("</div>");

    if card.has_gallery() {
        html.push_str("<div class=\"imagesDiv\">");
        for url in &card.images {
            let src = resolve_image(url.as_str());
            let _ = write!(
                html,
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                mode.apply(&src),
                IMAGE_ALT_TEXT
            );
        }
        html.push_str("</div>");
    }

    html.push_str("<div class=\"infoDiv\">");
    for field in &card.info {
        let _ = write!(
            html,
            "<div><strong>{}:</strong> {}</div>",
            field.label,
            mode.apply(&field.value)
        );
    }
    html.push_str("</div>");

    let _ = write!(html, "<div class=\"descDiv\">{}</div>", mode.apply(&card.description));
    html
}

/// A standalone HTML page listing `cards` in order.
pub fn catalog_page_html<'a, I>(
    title: &str,
    cards: I,
    mode: MarkupMode,
    resolve_image: impl Fn(&str) -> String,
) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    html.push_str(PAGE_STYLE);
    html.push_str("</head>\n<body>\n<div id=\"catalog\">\n");
    for card in cards {
        let _ = writeln!(
            html,
            "<div class=\"productCard\">{}</div>",
            card_html(card, mode, &resolve_image)
        );
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

const PAGE_STYLE: &str = "<style>\n\
body { font-family: sans-serif; margin: 16px; }\n\
.productCard { border: 1px solid #ccc; border-radius: 6px; padding: 12px; margin-bottom: 12px; }\n\
.title { font-weight: bold; font-size: 1.1em; }\n\
.sku { color: #666; }\n\
.imagesDiv img { max-height: 120px; margin: 4px; }\n\
</style>\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;

    fn identity(url: &str) -> String {
        url.to_string()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert!(matches!(escape_html("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape_html("<b>\"A&B\"</b> 'x'"),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn test_gallery_has_one_image_per_url() {
        let card = Card::from_row(&Row::from_pairs([("IMAGES", " a.jpg | b.jpg |")]));
        let html = card_html(&card, MarkupMode::Escaped, identity);
        assert_eq!(html.matches("<img ").count(), 2);
        let a = html.find("src=\"a.jpg\"").unwrap();
        let b = html.find("src=\"b.jpg\"").unwrap();
        assert!(a < b);
        assert!(html.contains("alt=\"Item Image\""));
    }

    #[test]
    fn test_no_gallery_without_images() {
        let card = Card::from_row(&Row::from_pairs([("PRODUCT_TITLE", "X")]));
        let html = card_html(&card, MarkupMode::Escaped, identity);
        assert!(!html.contains("imagesDiv"));
        assert!(html.contains("<div class=\"title\">X</div>"));
        assert!(html.contains("<div><strong>RRP:</strong> -</div>"));
    }

    #[test]
    fn test_escaped_by_default_raw_on_request() {
        let row = Row::from_pairs([("PRODUCT_DESCRIPTION", "<script>alert(1)</script>")]);
        let card = Card::from_row(&row);

        let escaped = card_html(&card, MarkupMode::default(), identity);
        assert!(!escaped.contains("<script>"));
        assert!(escaped.contains("&lt;script&gt;"));

        let raw = card_html(&card, MarkupMode::Raw, identity);
        assert!(raw.contains("<div class=\"descDiv\"><script>alert(1)</script></div>"));
    }

    #[test]
    fn test_page_lists_cards_in_order() {
        let cards: Vec<Card> = ["First", "Second"]
            .iter()
            .map(|t| Card::from_row(&Row::from_pairs([("PRODUCT_TITLE", *t)])))
            .collect();
        let page = catalog_page_html("Catalog <export>", &cards, MarkupMode::Escaped, identity);
        assert_eq!(page.matches("class=\"productCard\"").count(), 2);
        assert!(page.find("First").unwrap() < page.find("Second").unwrap());
        assert!(page.contains("<title>Catalog &lt;export&gt;</title>"));
    }
}
