//! USWDS big footer built from a footer fragment.

use chrono::Datelike;
use scraper::{ElementRef, Html, Node as DomNode};

use super::markup::{Element, Node};
use super::RenderOptions;
use crate::model::SectionMap;
use crate::parser::{extract_links, Link};

/// Section keys that may hold the legal links, in priority order.
pub const LEGAL_KEYS: &[&str] = &["privacy-links", "legal-links", "legal"];

/// Platforms with a dedicated social icon.
const SOCIAL_PLATFORMS: &[&str] = &["facebook", "twitter", "youtube", "instagram", "linkedin"];

const COLUMN_CLASSES: &str = "mobile-lg:grid-col-6 desktop:grid-col-3";
const PRIMARY_CONTENT: &str = "usa-footer__primary-content usa-footer__primary-content--collapsible";

/// Build the footer from split sections.
pub fn build_footer(sections: &SectionMap, options: &RenderOptions) -> Element {
    let mut columns = Element::new("div").class("grid-row grid-gap");
    for (key, heading) in &options.footer_columns {
        if let Some(nodes) = sections.get(key) {
            columns.push(nav_column(heading, nodes));
        }
    }
    if let Some(nodes) = sections.get("connect-with-us") {
        columns.push(
            Element::new("div")
                .class(COLUMN_CLASSES)
                .child(social_column(nodes, options)),
        );
    }

    let primary = Element::new("div").class("usa-footer__primary-section").child(
        Element::new("div").class("grid-container").child(
            Element::new("div").class("grid-row grid-gap").child(
                Element::new("nav")
                    .class("usa-footer__nav")
                    .attr("aria-label", "Footer navigation")
                    .child(columns),
            ),
        ),
    );

    Element::new("footer")
        .class("usa-footer usa-footer--big")
        .child(primary)
        .child_opt(
            sections
                .first_of(LEGAL_KEYS)
                .map(|legal| secondary_section(legal, sections.get("copyright"), options)),
        )
        .child_opt(sections.get("identifier").map(|nodes| identifier(nodes, options)))
}

/// Copyright line: authored when it reads like one, else generated.
pub fn copyright_text(authored: Option<&[String]>, options: &RenderOptions) -> String {
    let authored = authored
        .and_then(|nodes| nodes.first())
        .map(|node| node_text(node))
        .filter(|text| text.contains('©') || text.to_lowercase().contains("copyright"));

    authored.unwrap_or_else(|| {
        let year = options
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year());
        format!("© {} {}", year, options.site_name)
    })
}

/// Icon name for a social link.
///
/// The last platform named in the text or href wins; unknown links get a
/// generic icon.
pub fn social_icon(link: &Link) -> &'static str {
    let text = link.text.to_lowercase();
    SOCIAL_PLATFORMS
        .iter()
        .rev()
        .find(|platform| text.contains(*platform) || link.href.contains(*platform))
        .copied()
        .unwrap_or("link")
}

fn nav_column(heading: &str, nodes: &[String]) -> Element {
    let links = section_links(nodes).into_iter().map(|link| {
        Element::new("li")
            .class("usa-footer__secondary-link")
            .child(Element::new("a").attr("href", link.href).text(link.text))
    });

    Element::new("div").class(COLUMN_CLASSES).child(
        Element::new("section")
            .class(PRIMARY_CONTENT)
            .child(Element::new("h4").class("usa-footer__primary-link").text(heading))
            .child(Element::new("ul").class("usa-list usa-list--unstyled").children(links)),
    )
}

fn social_column(nodes: &[String], options: &RenderOptions) -> Element {
    let mut column = Element::new("div")
        .class(PRIMARY_CONTENT)
        .child(Element::new("h4").class("usa-footer__primary-link").text("Connect With Us"));

    for node in nodes {
        let description = description_text(node);
        if !description.is_empty() {
            column.push(
                Element::new("ul").class("usa-list usa-list--unstyled").child(
                    Element::new("li")
                        .class("usa-footer__secondary-link")
                        .text(description),
                ),
            );
        }
    }

    let icons = section_links(nodes).into_iter().map(|link| {
        let icon = options.icon_url(social_icon(&link));
        Element::new("div").class("grid-col-auto").child(
            Element::new("a")
                .class("usa-social-link")
                .attr("href", link.href.as_str())
                .attr("aria-label", link.text.as_str())
                .child(
                    Element::new("img")
                        .class("usa-social-link__icon")
                        .attr("src", icon)
                        .attr("alt", link.text.as_str()),
                ),
        )
    });

    column.child(
        Element::new("div")
            .class("usa-footer__social-links grid-row grid-gap-1")
            .children(icons),
    )
}

fn secondary_section(legal: &[String], copyright: Option<&[String]>, options: &RenderOptions) -> Element {
    let links = section_links(legal).into_iter().map(|link| {
        Element::new("li").class("grid-col-auto mobile-lg:grid-col-auto").child(
            Element::new("a")
                .class("usa-footer__secondary-link")
                .attr("href", link.href)
                .text(link.text),
        )
    });

    let links_col = Element::new("div")
        .class("usa-footer__contact-links mobile-lg:grid-col-8")
        .child(
            Element::new("nav")
                .class("usa-footer__nav")
                .attr("aria-label", "Footer legal links")
                .child(
                    Element::new("ul")
                        .class("usa-list usa-list--unstyled grid-row grid-gap")
                        .children(links),
                ),
        );

    let copyright_col = Element::new("div")
        .class("usa-footer__logo grid-row mobile-lg:grid-col-4")
        .child(
            Element::new("p")
                .class("usa-footer__logo-heading")
                .text(copyright_text(copyright, options)),
        );

    Element::new("div").class("usa-footer__secondary-section").child(
        Element::new("div")
            .class("grid-container")
            .child(Element::new("div").class("grid-row grid-gap").child(links_col).child(copyright_col)),
    )
}

fn identifier(nodes: &[String], options: &RenderOptions) -> Element {
    let defaults = &options.identifier;

    let domain = nodes
        .first()
        .map(|node| node_text(node))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| defaults.domain.clone());
    let disclaimer = nodes
        .get(1)
        .map(|node| node_inner_html(node))
        .unwrap_or_else(|| defaults.disclaimer_html.clone());

    let mut required = section_links(nodes.get(2..).unwrap_or_default());
    if required.is_empty() {
        required = defaults.required_links.clone();
    }

    let logos = Element::new("div").class("usa-identifier__logos").child(
        Element::new("a")
            .attr("href", defaults.logo_href.as_str())
            .class("usa-identifier__logo")
            .child(
                Element::new("img")
                    .class("usa-identifier__logo-img")
                    .attr("src", options.icon_url(&defaults.logo_icon))
                    .attr("alt", defaults.logo_alt.as_str())
                    .attr("role", "img"),
            ),
    );

    let identity = Element::new("div")
        .class("usa-identifier__identity")
        .child(Element::new("p").class("usa-identifier__identity-domain").text(domain))
        .child(
            Element::new("p")
                .class("usa-identifier__identity-disclaimer")
                .child(Node::raw(disclaimer)),
        );

    let masthead = Element::new("div")
        .class("usa-identifier__section--masthead usa-identifier__section--usagov")
        .child(logos)
        .child(identity);

    let links = required.into_iter().map(|link| {
        Element::new("li").class("usa-identifier__required-links-item").child(
            Element::new("a")
                .attr("href", link.href)
                .class("usa-identifier__required-link")
                .text(link.text),
        )
    });

    let required_links = Element::new("div")
        .class("usa-identifier__section--required-links")
        .child(
            Element::new("nav")
                .class("usa-identifier__required-links")
                .attr("aria-label", "Important links")
                .child(
                    Element::new("ul")
                        .class("usa-identifier__required-links-list")
                        .children(links),
                ),
        );

    Element::new("div").class("usa-identifier").child(
        Element::new("div").class("usa-identifier__container").child(
            Element::new("section")
                .class("usa-identifier__section")
                .attr("aria-label", "Agency identifier")
                .child(masthead)
                .child(required_links),
        ),
    )
}

fn section_links(nodes: &[String]) -> Vec<Link> {
    nodes.iter().flat_map(|node| extract_links(node)).collect()
}

fn node_text(node: &str) -> String {
    Html::parse_fragment(node)
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Inner markup of a single-element node, or the node itself.
fn node_inner_html(node: &str) -> String {
    let fragment = Html::parse_fragment(node);
    let mut elements = fragment.root_element().children().filter_map(ElementRef::wrap);
    match (elements.next(), elements.next()) {
        (Some(only), None) => only.inner_html().trim().to_string(),
        _ => node.trim().to_string(),
    }
}

/// Text outside of any link, whitespace-collapsed.
fn description_text(node: &str) -> String {
    let fragment = Html::parse_fragment(node);
    let mut buf = String::new();
    collect_unlinked_text(fragment.root_element(), &mut buf);
    buf.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_unlinked_text(element: ElementRef<'_>, buf: &mut String) {
    for child in element.children() {
        match child.value() {
            DomNode::Text(text) => buf.push_str(text),
            DomNode::Element(el) if el.name() != "a" => {
                if let Some(child) = ElementRef::wrap(child) {
                    buf.push(' ');
                    collect_unlinked_text(child, buf);
                }
            }
            _ => {}
        }
    }
}
