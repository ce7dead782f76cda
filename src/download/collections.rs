//! Collections index listing.

use std::io::Write;

use url::Url;

use crate::api::SvgRepoClient;
use crate::catalog::{extract_collection_links, extract_page_count, SourceUrl};
use crate::error::{Error, Result};

/// Index URL of a collections category, e.g. `https://www.svgrepo.com/collections/all/`.
pub fn collections_index_url(base_url: &str, category: &str) -> String {
    format!(
        "{}/collections/{}/",
        base_url.trim_end_matches('/'),
        category.trim_matches('/')
    )
}

/// List the collections of a category, one absolute URL per line on `out`.
///
/// Every page advertised by the footer is visited. Returns the URLs written.
pub async fn list_collections(
    client: &SvgRepoClient,
    base_url: &str,
    category: &str,
    out: &mut dyn Write,
) -> Result<Vec<String>> {
    let index = SourceUrl::parse(&collections_index_url(base_url, category))?;

    let root = client.fetch_page(index.as_str()).await?;
    let total_pages = extract_page_count(&root)?.ok_or_else(|| Error::PageCount {
        url: index.to_string(),
    })?;

    let mut collections = Vec::new();
    for page in 1..=total_pages {
        tracing::info!("Collections page {}/{}", page, total_pages);

        let page_url = index.page_url(page);
        let base = Url::parse(&page_url)?;
        let html = client.fetch_page(&page_url).await?;

        for href in extract_collection_links(&html)? {
            let absolute = base.join(&href)?.to_string();
            writeln!(out, "{}", absolute)?;
            collections.push(absolute);
        }
    }

    Ok(collections)
}
