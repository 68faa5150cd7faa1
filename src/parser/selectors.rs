//! Shared CSS selectors and element helpers.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

fn compile(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

pub(crate) static HEADINGS: LazyLock<Selector> = LazyLock::new(|| compile("h1, h2, h3, h4, h5, h6"));
pub(crate) static TITLE_HEADINGS: LazyLock<Selector> = LazyLock::new(|| compile("h1, h2, h3"));
pub(crate) static IMAGES: LazyLock<Selector> = LazyLock::new(|| compile("img"));
pub(crate) static LINKS: LazyLock<Selector> = LazyLock::new(|| compile("a[href]"));
pub(crate) static PARAGRAPHS: LazyLock<Selector> = LazyLock::new(|| compile("p"));
pub(crate) static LISTS: LazyLock<Selector> = LazyLock::new(|| compile("ul"));
pub(crate) static TABLE_ROWS: LazyLock<Selector> = LazyLock::new(|| compile("tr"));
pub(crate) static META: LazyLock<Selector> = LazyLock::new(|| compile("meta"));

/// Direct element children, skipping text and comments.
pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Direct element children with the given tag name.
pub(crate) fn children_named<'a>(
    element: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> {
    child_elements(element).filter(move |el| el.value().name() == name)
}

/// Concatenated, trimmed text content.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
