//! Table and image placeholders.
//!
//! The content subtree is serialized back to HTML with every `<table>` and
//! `<img>` swapped for a sentinel comment string. The generic renderer only
//! ever sees those sentinels; afterwards each one is replaced, once, with the
//! Markdown for the element it stands for.
//!
//! Tables and images nested in a table are numbered like any other. Their
//! sentinels end up inside the enclosing table's cell text and are filled in
//! by the same restore pass.

use ego_tree::{NodeId, NodeRef};
use regex::{NoExpand, Regex};
use scraper::{ElementRef, Node};
use url::Url;

use crate::table::table_to_markdown_with;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Parents that only take phrasing content. A `<p>` emitted inside one of
/// these gets split apart when the intermediate HTML is parsed again.
const PHRASING_PARENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "h1", "h2", "h3", "h4",
    "h5", "h6", "i", "kbd", "label", "mark", "p", "pre", "q", "s", "samp", "small", "span",
    "strong", "sub", "sup", "time", "u", "var",
];

pub fn table_sentinel(index: usize) -> String {
    format!("<!-- TABLE_PLACEHOLDER_{index} -->")
}

pub fn image_sentinel(index: usize) -> String {
    format!("<!-- IMAGE_PLACEHOLDER_{index} -->")
}

/// Elements pulled out of the content subtree; the position in each list is
/// the placeholder index.
#[derive(Debug, Default)]
pub struct Placeholders<'a> {
    tables: Vec<ElementRef<'a>>,
    images: Vec<ElementRef<'a>>,
}

/// Intermediate HTML for the renderer plus the elements it no longer contains.
#[derive(Debug)]
pub struct Prepared<'a> {
    pub html: String,
    pub placeholders: Placeholders<'a>,
}

/// Serializes `content` (including its own tag) with tables and images
/// replaced by sentinels, numbered in document order.
pub fn prepare(content: ElementRef<'_>) -> Prepared<'_> {
    let mut placeholders = Placeholders::default();
    for element in content.descendants().filter_map(ElementRef::wrap) {
        match element.value().name() {
            "table" => placeholders.tables.push(element),
            "img" => placeholders.images.push(element),
            _ => {}
        }
    }

    let mut html = String::new();
    placeholders.write_node(*content, &mut html);
    Prepared { html, placeholders }
}

impl<'a> Placeholders<'a> {
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Substitutes the first occurrence of each sentinel in `rendered`: all
    /// tables first, then all images. Image sources are resolved against `base`.
    pub fn restore(&self, rendered: &str, base: &Url) -> String {
        let mut markdown = rendered.to_string();

        for (index, table) in self.tables.iter().enumerate() {
            let table_markdown = table_to_markdown_with(*table, |cell| self.cell_text(*cell));
            markdown = replace_first(&markdown, &table_sentinel(index), &table_markdown);
        }

        for (index, image) in self.images.iter().enumerate() {
            markdown = replace_first(&markdown, &image_sentinel(index), &image_markdown(*image, base));
        }

        markdown
    }

    fn sentinel_for(&self, id: NodeId) -> Option<String> {
        if let Some(index) = self.tables.iter().position(|table| table.id() == id) {
            return Some(table_sentinel(index));
        }
        self.images
            .iter()
            .position(|image| image.id() == id)
            .map(image_sentinel)
    }

    /// Text of a table cell with nested tables and images left as sentinels.
    fn cell_text(&self, cell: NodeRef<'_, Node>) -> String {
        let mut text = String::new();
        for child in cell.children() {
            match child.value() {
                Node::Text(fragment) => text.push_str(fragment),
                Node::Element(_) => match self.sentinel_for(child.id()) {
                    Some(sentinel) => text.push_str(&sentinel),
                    None => text.push_str(&self.cell_text(child)),
                },
                _ => {}
            }
        }
        text
    }

    fn write_node(&self, node: NodeRef<'a, Node>, out: &mut String) {
        match node.value() {
            Node::Text(text) => {
                if parent_is_raw_text(node) {
                    out.push_str(text);
                } else {
                    out.push_str(&html_escape::encode_text(&**text));
                }
            }
            Node::Element(element) => {
                if let Some(sentinel) = self.sentinel_for(node.id()) {
                    if parent_takes_phrasing_only(node) {
                        out.push_str(&html_escape::encode_text(&sentinel));
                    } else {
                        write_paragraph(&sentinel, out);
                    }
                    return;
                }

                let name = element.name();
                out.push('<');
                out.push_str(name);
                for (attr, value) in element.attrs() {
                    out.push(' ');
                    out.push_str(attr);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&name) {
                    return;
                }
                for child in node.children() {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Node::Document | Node::Fragment => {
                for child in node.children() {
                    self.write_node(child, out);
                }
            }
            // comments, doctype, processing instructions
            _ => {}
        }
    }
}

fn write_paragraph(text: &str, out: &mut String) {
    out.push_str("<p>");
    out.push_str(&html_escape::encode_text(text));
    out.push_str("</p>");
}

fn parent_is_raw_text(node: NodeRef<'_, Node>) -> bool {
    parent_name_in(node, RAW_TEXT_ELEMENTS)
}

fn parent_takes_phrasing_only(node: NodeRef<'_, Node>) -> bool {
    parent_name_in(node, PHRASING_PARENTS)
}

fn parent_name_in(node: NodeRef<'_, Node>, names: &[&str]) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .is_some_and(|element| names.contains(&element.name()))
}

fn image_markdown(image: ElementRef<'_>, base: &Url) -> String {
    let alt = image.value().attr("alt").unwrap_or_default();
    let src = image.value().attr("src").unwrap_or_default();
    let src = if src.is_empty() {
        String::new()
    } else {
        base.join(src).map_or_else(|_| src.to_string(), |resolved| resolved.to_string())
    };
    format!("![{alt}]({src})")
}

/// Matches `sentinel` literally, also when a renderer has backslash-escaped
/// its punctuation (`\<!-- TABLE\_PLACEHOLDER\_0 --\>`) or re-encoded the
/// angle brackets as entities.
fn sentinel_pattern(sentinel: &str) -> Regex {
    let mut pattern = String::with_capacity(sentinel.len() * 4);
    for ch in sentinel.chars() {
        let literal = regex::escape(ch.encode_utf8(&mut [0; 4]));
        match ch {
            '<' => pattern.push_str(r"(?:\\?<|&lt;)"),
            '>' => pattern.push_str(r"(?:\\?>|&gt;)"),
            _ if ch.is_ascii_punctuation() => {
                pattern.push_str(r"\\?");
                pattern.push_str(&literal);
            }
            _ => pattern.push_str(&literal),
        }
    }
    Regex::new(&pattern).expect("BUG: escaped sentinel pattern is always valid")
}

fn replace_first(haystack: &str, sentinel: &str, replacement: &str) -> String {
    sentinel_pattern(sentinel)
        .replacen(haystack, 1, NoExpand(replacement))
        .into_owned()
}
