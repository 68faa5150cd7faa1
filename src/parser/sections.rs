//! Splitting header and footer fragments into keyed sections.

use std::borrow::Cow;

use scraper::{ElementRef, Html};

use crate::model::{section_key, SectionMap};
use crate::render::rewrite::{rewrite_element, Edit};

use super::links::relativize_href;
use super::selectors::text_of;
use super::ParseOptions;

/// Split a fragment document at every heading of `level`.
///
/// Each heading's key is its normalized text; its content is every following
/// sibling element up to the next heading of the same level. A repeated key
/// keeps the later section.
pub fn split_by_headings(html: &str, level: u8) -> SectionMap {
    split(html, level, false)
}

/// Split a fragment using parse options.
pub fn split_fragment(html: &str, options: &ParseOptions) -> SectionMap {
    split(html, options.section_level, options.relativize_links)
}

fn split(html: &str, level: u8, relativize: bool) -> SectionMap {
    let tag = format!("h{}", level.clamp(1, 6));
    let document = Html::parse_document(html);
    let mut sections = SectionMap::new();

    let headings = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == tag);

    for heading in headings {
        let key = section_key(&text_of(heading));
        if key.is_empty() {
            continue;
        }
        let nodes: Vec<String> = heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .take_while(|el| el.value().name() != tag)
            .map(|el| {
                if relativize {
                    rewrite_element(el, relative_href)
                } else {
                    el.html()
                }
            })
            .collect();
        log::debug!("section {:?}: {} nodes", key, nodes.len());
        sections.insert(key, nodes);
    }

    sections
}

fn relative_href(element: ElementRef<'_>) -> Edit {
    let Some(href) = element.value().attr("href") else {
        return Edit::Keep;
    };
    match relativize_href(href.trim()) {
        Cow::Owned(path) => Edit::SetAttr {
            name: "href".to_string(),
            value: path,
        },
        Cow::Borrowed(_) => Edit::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
        <div>
          <h1>Header</h1>
          <h2>Brand</h2>
          <p><a href="/">Constituent Health Agency</a></p>
          <h2>Sections</h2>
          <ul><li><a href="/">Home</a></li></ul>
          <p>extra</p>
          <h2>Tools</h2>
          <ul><li><a href="/search">Search</a></li></ul>
        </div>"#;

    #[test]
    fn test_split_sections() {
        let sections = split_by_headings(HEADER, 2);
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["brand", "sections", "tools"]);
        assert_eq!(sections.get("brand").map(|n| n.len()), Some(1));
        assert_eq!(sections.get("sections").map(|n| n.len()), Some(2));
        assert!(sections.html("tools").unwrap().contains("/search"));
    }

    #[test]
    fn test_split_relativizes_links() {
        let html = r#"<h2>Legal</h2><p><a href="https://main--a--b.aem.page/privacy">Privacy</a></p>"#;
        let sections = split_fragment(html, &ParseOptions::default());
        assert!(sections.html("legal").unwrap().contains(r#"href="/privacy""#));

        let sections = split_fragment(html, &ParseOptions::new().with_relative_links(false));
        assert!(sections.html("legal").unwrap().contains("aem.page"));
    }

    #[test]
    fn test_split_relativizes_any_quoting() {
        let html = concat!(
            "<h2>Legal</h2><ul>",
            "<li><a href='https://main--a--b.aem.page/privacy'>Privacy</a></li>",
            "<li><a HREF=https://main--a--b.aem.live/foia>FOIA</a></li>",
            "<li><a href=\"https://www.usa.gov/\">USA.gov</a></li>",
            "</ul>"
        );
        let legal = split_fragment(html, &ParseOptions::default()).html("legal").unwrap();
        assert!(legal.contains(r#"<a href="/privacy">Privacy</a>"#));
        assert!(legal.contains(r#"<a href="/foia">FOIA</a>"#));
        assert!(legal.contains(r#"<a href="https://www.usa.gov/">USA.gov</a>"#));
        assert!(!legal.contains("aem."));
    }

    #[test]
    fn test_no_headings() {
        assert!(split_by_headings("<p>just text</p>", 2).is_empty());
        assert!(split_by_headings("", 2).is_empty());
    }
}
