use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Subtrees that never hold page content.
const NON_CONTENT_TAGS: [&str; 9] = [
    "script", "style", "nav", "header", "footer", "aside", "menu", "noscript", "iframe",
];

static NON_CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(&NON_CONTENT_TAGS.join(", ")).unwrap());

/// Detach scripts, styles, navigation, headers, footers, sidebars and
/// embedded frames from `document`. Callers pass a working copy.
pub fn strip_non_content(document: &mut Html) {
    let ids: Vec<_> = document
        .root_element()
        .select(&NON_CONTENT_SELECTOR)
        .map(|element| element.id())
        .collect();

    for id in ids {
        // A node nested in an already detached subtree is detached again
        // harmlessly.
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}
