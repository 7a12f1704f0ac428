use std::collections::HashMap;

use html2md::{Handle, StructuredPrinter, TagHandler, TagHandlerFactory};

/// Turns prepared HTML into Markdown text.
pub trait Render {
    fn render(&self, html: &str) -> String;
}

/// `html2md` with links kept, no wrapping, and tables, images and
/// non-content tags silenced.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    skipped_tags: Vec<&'static str>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            skipped_tags: vec!["table", "img", "head", "script", "style", "noscript"],
        }
    }
}

impl Render for MarkdownRenderer {
    fn render(&self, html: &str) -> String {
        let mut tag_map: HashMap<String, Box<dyn TagHandlerFactory>> = HashMap::new();
        for tag in &self.skipped_tags {
            tag_map.insert((*tag).to_string(), Box::new(SkipTagFactory));
        }
        html2md::parse_html_custom(html, &tag_map)
    }
}

struct SkipTag;

impl TagHandler for SkipTag {
    fn handle(&mut self, _tag: &Handle, _printer: &mut StructuredPrinter) {}

    fn after_handle(&mut self, _printer: &mut StructuredPrinter) {}

    fn skip_descendants(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
struct SkipTagFactory;

impl TagHandlerFactory for SkipTagFactory {
    fn instantiate(&self) -> Box<dyn TagHandler> {
        Box::new(SkipTag)
    }
}
