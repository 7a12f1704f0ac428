use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Node};
use tracing::{debug, warn};

use crate::error::{Error, Result};

const CONTAINER_TAG: &str = "div";

/// Removes every text or comment node containing one of `phrases`, together with its
/// nearest `div` ancestor when there is one. Phrases are applied in order,
/// each one against the document as left by the previous phrases.
///
/// Returns the number of nodes detached.
pub fn remove_boilerplate(document: &mut Html, phrases: &[String]) -> usize {
    let mut removed = 0;

    for phrase in phrases {
        let matches = find_matching_nodes(document, phrase);
        if matches.is_empty() {
            continue;
        }
        debug!(phrase = %phrase, count = matches.len(), "boilerplate matches");

        for id in matches {
            match remove_match(document, id) {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => warn!(phrase = %phrase, error = %e, "skipping boilerplate match"),
            }
        }
    }

    removed
}

fn find_matching_nodes(document: &Html, phrase: &str) -> Vec<NodeId> {
    document
        .tree
        .root()
        .descendants()
        .filter(|node| match node.value() {
            Node::Text(text) => text.contains(phrase),
            Node::Comment(comment) => comment.contains(phrase),
            _ => false,
        })
        .map(|node| node.id())
        .collect()
}

/// Detaches the container of one matched text node. `Ok(false)` means an
/// earlier removal already took the node out of the document.
fn remove_match(document: &mut Html, id: NodeId) -> Result<bool> {
    let root = document.tree.root().id();
    let node = document.tree.get(id).ok_or(Error::UnreachableNode(id))?;

    if !is_attached(node, root) {
        return Ok(false);
    }

    let target = node
        .ancestors()
        .find(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| element.name() == CONTAINER_TAG)
        })
        .map_or(id, |container| container.id());

    let mut target = document.tree.get_mut(target).ok_or(Error::UnreachableNode(target))?;
    target.detach();
    Ok(true)
}

fn is_attached(node: NodeRef<'_, Node>, root: NodeId) -> bool {
    node.ancestors().last().is_some_and(|top| top.id() == root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn body_text(document: &Html) -> String {
        document.root_element().text().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_removes_nearest_div() {
        let mut document = Html::parse_document(
            "<html><body>\
             <div id=\"outer\"><p>Keep me</p>\
             <div id=\"inner\"><h3>Categories:</h3><a href=\"/x\">Cloud</a></div>\
             </div></body></html>",
        );

        let removed = remove_boilerplate(&mut document, &phrases(&["Categories:"]));

        assert_eq!(removed, 1);
        let text = body_text(&document);
        assert!(text.contains("Keep me"));
        assert!(!text.contains("Categories:"));
        assert!(!text.contains("Cloud"));
    }

    #[test]
    fn test_without_div_only_text_is_removed() {
        let mut document = Html::parse_document(
            "<html><body><section><p>Intro</p><p><span>Follow</span> us</p></section></body></html>",
        );

        let removed = remove_boilerplate(&mut document, &phrases(&["Follow"]));

        assert_eq!(removed, 1);
        let text = body_text(&document);
        assert!(text.contains("Intro"));
        assert!(text.contains("us"));
        assert!(!text.contains("Follow"));
    }

    #[test]
    fn test_substring_match() {
        let mut document = Html::parse_document(
            "<html><body><div><p>Read the Terms and Conditions</p></div><p>Body</p></body></html>",
        );

        remove_boilerplate(&mut document, &phrases(&["Terms"]));

        assert!(!body_text(&document).contains("Conditions"));
        assert!(body_text(&document).contains("Body"));
    }

    #[test]
    fn test_matches_inside_removed_container_are_skipped() {
        let mut document = Html::parse_document(
            "<html><body><div><p>Connect one</p><p>Connect two</p></div><p>Rest</p></body></html>",
        );

        let removed = remove_boilerplate(&mut document, &phrases(&["Connect"]));

        assert_eq!(removed, 1);
        assert_eq!(body_text(&document).trim(), "Rest");
    }

    #[test]
    fn test_later_phrases_see_earlier_removals() {
        let mut document = Html::parse_document(
            "<html><body>\
             <div><p>Related posts:</p><p>Find Answers here</p></div>\
             <div><p>Find Answers again</p></div>\
             <p>Article</p></body></html>",
        );

        let removed = remove_boilerplate(&mut document, &phrases(&["Related posts:", "Find Answers"]));

        assert_eq!(removed, 2);
        assert_eq!(body_text(&document).trim(), "Article");
    }

    #[test]
    fn test_comments_match_too() {
        let mut document = Html::parse_document(
            "<html><body><div><!-- Follow --><p>Share widget</p></div><p>Body</p></body></html>",
        );

        let removed = remove_boilerplate(&mut document, &phrases(&["Follow"]));

        assert_eq!(removed, 1);
        assert_eq!(body_text(&document).trim(), "Body");
    }

    #[test]
    fn test_default_phrases_leave_clean_page_alone() {
        let html = "<html><body><article><p>Plain article text.</p></article></body></html>";
        let mut document = Html::parse_document(html);

        let removed = remove_boilerplate(&mut document, &crate::ConvertOptions::default().unwanted_phrases);

        assert_eq!(removed, 0);
        assert_eq!(document.html(), Html::parse_document(html).html());
    }
}
