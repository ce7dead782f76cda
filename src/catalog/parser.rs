//! HTML extraction for catalog pages.

use scraper::{Html, Selector};

use crate::catalog::link::AssetLink;
use crate::error::{Error, Result};

/// Pagination footer, e.g. "Page 1 / 12".
const PAGING_SELECTOR: &str = r#"div[class^="style_pagingCarrier"]"#;

/// Icon images on collection and search pages.
const ASSET_SELECTOR: &str = r#"div[class^="style_NodeImage_"] img[itemprop="contentUrl"]"#;

/// Collection links on collections index pages.
const COLLECTION_SELECTOR: &str = r#"div[class^="style_Collection__"] a"#;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Total page count advertised by the pagination footer.
///
/// Takes the text after the last `/` that is followed by whitespace and reads its
/// leading integer. Returns `None` when the footer is missing or holds no number.
pub fn extract_page_count(html: &str) -> Result<Option<u32>> {
    let document = Html::parse_document(html);
    let paging = selector(PAGING_SELECTOR)?;

    let Some(footer) = document.select(&paging).next() else {
        return Ok(None);
    };
    let text: String = footer.text().collect();

    let remainder = text
        .match_indices('/')
        .rev()
        .find_map(|(i, _)| {
            let rest = &text[i + 1..];
            rest.starts_with(char::is_whitespace).then_some(rest)
        })
        .unwrap_or(&text);

    let digits: String = remainder
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    Ok(digits.parse().ok())
}

/// Asset links on a page, in document order. An empty result marks the end of results.
pub fn extract_asset_links(html: &str) -> Result<Vec<AssetLink>> {
    let document = Html::parse_document(html);
    let images = selector(ASSET_SELECTOR)?;

    Ok(document
        .select(&images)
        .filter_map(|img| img.value().attr("src"))
        .map(AssetLink::from)
        .collect())
}

/// Collection hrefs on a collections index page, in document order.
pub fn extract_collection_links(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchors = selector(COLLECTION_SELECTOR)?;

    Ok(document
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect())
}
