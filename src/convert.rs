use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::boilerplate::remove_boilerplate;
use crate::config::ConvertOptions;
use crate::content::locate_content;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::placeholder::prepare;
use crate::render::{MarkdownRenderer, Render};

/// Fetches a page and turns its article body into Markdown.
pub struct Converter {
    fetcher: Fetcher,
    options: ConvertOptions,
    renderer: Box<dyn Render>,
}

impl Converter {
    pub fn new(fetcher: Fetcher, options: ConvertOptions) -> Self {
        Self::with_renderer(fetcher, options, Box::new(MarkdownRenderer::default()))
    }

    pub fn with_renderer(fetcher: Fetcher, options: ConvertOptions, renderer: Box<dyn Render>) -> Self {
        Self {
            fetcher,
            options,
            renderer,
        }
    }

    pub fn convert(&self, url: &str) -> Result<String> {
        let page = self.fetcher.fetch(url)?;
        let markdown = self.convert_html(&page.body, &page.url);
        info!(url = %page.url, chars = markdown.chars().count(), "converted");
        Ok(markdown)
    }

    /// The offline half of [`Converter::convert`]: `base` is the page's URL.
    pub fn convert_html(&self, html: &str, base: &Url) -> String {
        let mut document = Html::parse_document(html);

        let removed = remove_boilerplate(&mut document, &self.options.unwanted_phrases);
        debug!(removed, "boilerplate removed");

        let content = locate_content(&document, &self.options.content_selectors);
        let prepared = prepare(content);
        debug!(
            tables = prepared.placeholders.table_count(),
            images = prepared.placeholders.image_count(),
            "placeholders inserted"
        );

        let rendered = self.renderer.render(&prepared.html);
        let restored = prepared.placeholders.restore(&rendered, base);

        let mut markdown = restored.trim();
        if let Some(marker) = &self.options.trailing_marker {
            if let Some(index) = markdown.find(marker.as_str()) {
                markdown = markdown[..index].trim();
            }
        }
        markdown.to_string()
    }
}
