//! HTML anchor extraction
//!
//! A thin adapter over the scraper crate: parse the page, enumerate every
//! `<a>` element in document order, and hand back the raw href values.
//! Resolution and host filtering belong to the crawler, not this module.

use scraper::{Html, Selector};

/// Extracts the href value of every anchor in the document, in encounter
/// order. Anchors without an href attribute are skipped; nothing else is
/// filtered here, and duplicates are kept.
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_anchors() {
        let html = r#"<html><body><p>No links here</p></body></html>"#;
        assert!(anchor_hrefs(html).is_empty());
    }

    #[test]
    fn test_single_anchor() {
        let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
        assert_eq!(anchor_hrefs(html), vec!["/page"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <html><body>
                <a href="/first">1</a>
                <a href="/second">2</a>
                <a href="/third">3</a>
            </body></html>
        "#;
        assert_eq!(anchor_hrefs(html), vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let html = r#"<html><body><a href="/page">A</a><a href="/page">B</a></body></html>"#;
        assert_eq!(anchor_hrefs(html), vec!["/page", "/page"]);
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="top">Anchor</a><a href="/page">Link</a></body></html>"#;
        assert_eq!(anchor_hrefs(html), vec!["/page"]);
    }

    #[test]
    fn test_raw_values_untouched() {
        // Absolute, relative, and garbage hrefs all come back as written;
        // the crawler decides what resolves.
        let html = r#"
            <html><body>
                <a href="https://other.com/page">off-site</a>
                <a href="relative">relative</a>
                <a href="http://[not-a-url">broken</a>
            </body></html>
        "#;
        assert_eq!(
            anchor_hrefs(html),
            vec!["https://other.com/page", "relative", "http://[not-a-url"]
        );
    }

    #[test]
    fn test_tolerates_malformed_html() {
        let html = r#"<html><body><a href="/page">unclosed<div><a href="/other""#;
        let hrefs = anchor_hrefs(html);
        assert!(hrefs.contains(&"/page".to_string()));
    }
}
