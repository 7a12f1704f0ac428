use scraper::{Html, Selector};
use tracing::info;
use url::Url;

use crate::config::LinkOptions;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;

/// Resolves the `href` of every anchor matching `selector` against `base`,
/// in document order. An anchor without `href` fails the whole page; an
/// `href` that cannot be resolved is kept as written.
pub fn extract_links(document: &Html, selector: &Selector, base: &Url) -> Result<Vec<String>> {
    document
        .select(selector)
        .enumerate()
        .map(|(index, anchor)| {
            let href = anchor
                .value()
                .attr("href")
                .ok_or(Error::MissingHref { index })?;
            Ok(base
                .join(href)
                .map_or_else(|_| href.to_string(), String::from))
        })
        .collect()
}

#[derive(Debug)]
pub struct LinkExtractor {
    fetcher: Fetcher,
    selector: Selector,
}

impl LinkExtractor {
    pub fn new(fetcher: Fetcher, options: &LinkOptions) -> Result<Self> {
        let selector =
            Selector::parse(&options.selector).map_err(|e| Error::selector(&options.selector, e))?;
        Ok(Self { fetcher, selector })
    }

    pub fn extract(&self, url: &str) -> Result<Vec<String>> {
        let page = self.fetcher.fetch(url)?;
        let document = Html::parse_document(&page.body);
        let links = extract_links(&document, &self.selector, &page.url)?;
        info!(url = %page.url, count = links.len(), "links extracted");
        Ok(links)
    }
}
