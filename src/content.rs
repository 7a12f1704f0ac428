use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("BUG: hardcoded selector 'body' is invalid"));

/// Picks the article body: the first element matching one of `selectors`
/// (tried in order), else `<body>`, else the document's root element.
pub fn locate_content<'a>(document: &'a Html, selectors: &[String]) -> ElementRef<'a> {
    for main_sel in selectors {
        let selector = match Selector::parse(main_sel) {
            Ok(selector) => selector,
            Err(e) => {
                warn!(selector = %main_sel, error = %e, "ignoring invalid content selector");
                continue;
            }
        };
        if let Some(main_element) = document.select(&selector).next() {
            debug!(selector = %main_sel, "content container found");
            return main_element;
        }
    }

    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        debug!("no content container, using <body>");
        return body;
    }

    document.root_element()
}
