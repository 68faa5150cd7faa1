//! Link extraction, arrow-glyph handling, and URL rewriting.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use serde::{Deserialize, Serialize};

use super::selectors::LINKS;

/// Glyphs that mark an action as a plain text link.
pub const ARROW_GLYPHS: &[char] = &['→', '➔', '➜', '⟶'];

static AEM_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]+\.aem\.(?:page|live)(/.*)?$").expect("valid regex")
});

/// A hyperlink found in authored content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link target
    pub href: String,
    /// Trimmed visible text
    pub text: String,
}

/// Collect every `a[href]` in document order.
pub fn extract_links(html: &str) -> Vec<Link> {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&LINKS)
        .filter_map(|a| {
            let href = a.value().attr("href")?.trim();
            if href.is_empty() {
                return None;
            }
            Some(Link {
                href: href.to_string(),
                text: a.text().collect::<String>().trim().to_string(),
            })
        })
        .collect()
}

/// Check for any arrow glyph.
pub fn contains_arrow(text: &str) -> bool {
    text.contains(ARROW_GLYPHS)
}

/// Remove arrow glyphs and tidy the remaining whitespace.
pub fn strip_arrows(text: &str) -> String {
    text.chars()
        .filter(|c| !ARROW_GLYPHS.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite a preview/live site URL to its path.
///
/// `https://main--site--org.aem.page/services` becomes `/services`; any
/// other href is returned unchanged.
pub fn relativize_href(href: &str) -> Cow<'_, str> {
    match AEM_URL_RE.captures(href) {
        Some(caps) => {
            let path = caps.get(1).map(|m| m.as_str()).unwrap_or("/");
            Cow::Owned(path.to_string())
        }
        None => Cow::Borrowed(href),
    }
}
