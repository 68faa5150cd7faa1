//! USWDS extended header built from a header fragment.
//!
//! The fragment is split into `brand`, `sections`, and `tools` sections.
//! [`HeaderContent`] holds what was read from them; rendering takes the
//! current [`MobileNav`] and submenu [`Accordion`] state so the emitted
//! attributes match the interaction state.

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

use super::markup::{Element, Node};
use super::RenderOptions;
use crate::model::SectionMap;
use crate::nav::{Accordion, MobileNav};
use crate::parser::selectors::{child_elements, children_named, text_of, IMAGES, LINKS, LISTS};
use crate::parser::Link;

/// Id of the primary navigation element.
pub const NAV_ID: &str = "basic-nav-section";

/// Brand area of the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Logo image source and alt text
    pub logo: Option<(String, String)>,
    /// Brand link, if one was authored
    pub link: Option<Link>,
    /// Brand text when no link was authored
    pub text: String,
}

/// One item in the primary navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    /// A plain link
    Link {
        /// Target and label
        link: Link,
    },
    /// A submenu behind an accordion button
    Menu {
        /// Button label
        label: String,
        /// Inner markup of each submenu item
        items: Vec<String>,
    },
    /// Anything else, kept as authored
    Plain {
        /// Inner markup
        html: String,
    },
}

/// Content read from a header fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderContent {
    /// Brand area
    pub brand: Option<Brand>,
    /// Utility links
    pub tools: Vec<Link>,
    /// Primary navigation items
    pub items: Vec<NavItem>,
}

impl HeaderContent {
    /// Read header content from split sections.
    ///
    /// Returns `None` when both the brand and the navigation sections are
    /// missing.
    pub fn from_sections(sections: &SectionMap) -> Option<Self> {
        let brand_html = non_empty_section(sections, "brand");
        let nav_html = non_empty_section(sections, "sections");
        if brand_html.is_none() && nav_html.is_none() {
            return None;
        }

        Some(Self {
            brand: brand_html.as_deref().map(parse_brand),
            tools: non_empty_section(sections, "tools")
                .map(|html| parse_tools(&html))
                .unwrap_or_default(),
            items: nav_html.map(|html| parse_nav(&html)).unwrap_or_default(),
        })
    }

    /// A collapsed accordion sized to the navigation items.
    pub fn accordion(&self) -> Accordion {
        Accordion::new(self.items.len())
    }

    /// Render the overlay and header.
    pub fn render(&self, options: &RenderOptions, nav: &MobileNav, submenus: &Accordion) -> Vec<Node> {
        let attrs = nav.attributes();
        let visible = |base: &str| match attrs.visible_class {
            Some(class) => format!("{} {}", base, class),
            None => base.to_string(),
        };

        let menu_button = Element::new("button")
            .class("usa-menu-btn")
            .attr("type", "button")
            .attr("aria-expanded", attrs.aria_expanded.to_string())
            .attr("aria-controls", NAV_ID)
            .text("Menu");

        let navbar = Element::new("div")
            .class("usa-navbar")
            .child(self.logo())
            .child(self.secondary(options))
            .child(menu_button);

        let close = Element::new("button")
            .class("usa-nav__close")
            .attr("type", "button")
            .child(
                Element::new("img")
                    .attr("src", format!("{}/usa-icons/close.svg", options.icons_base))
                    .attr("role", "img")
                    .attr("alt", "Close"),
            );

        let mut inner = Element::new("div").class("usa-nav__inner").child(close);
        if !self.items.is_empty() {
            inner.push(self.primary(submenus));
        }

        let nav_el = Element::new("nav")
            .class(visible("usa-nav"))
            .attr("id", NAV_ID)
            .attr("aria-label", "Primary navigation")
            .child(inner);

        let header = Element::new("header")
            .class("usa-header usa-header--extended")
            .child(navbar)
            .child(nav_el);

        vec![
            Element::new("div").class(visible("usa-overlay")).into(),
            header.into(),
        ]
    }

    fn logo(&self) -> Element {
        let mut logo = Element::new("div").class("usa-logo").attr("id", "extended-logo");
        let home = |text: &str| Element::new("a").attr("href", "/").attr("title", "Home").text(text);

        let text = match &self.brand {
            Some(brand) => {
                if let Some((src, alt)) = &brand.logo {
                    logo.push(
                        Element::new("img")
                            .attr("src", src.as_str())
                            .attr("alt", alt.as_str())
                            .class("usa-logo__img"),
                    );
                }
                match &brand.link {
                    Some(link) => Element::new("a")
                        .attr("href", link.href.as_str())
                        .attr("title", link.text.as_str())
                        .text(link.text.as_str()),
                    None => home(&brand.text),
                }
            }
            None => home("Home"),
        };

        logo.child(Element::new("em").class("usa-logo__text").child(text))
    }

    fn secondary(&self, options: &RenderOptions) -> Element {
        let secondary = Element::new("div").class("usa-nav__secondary");
        if self.tools.is_empty() {
            return secondary;
        }

        let items = self.tools.iter().map(|tool| {
            let link = Element::new("a")
                .attr("href", tool.href.as_str())
                .child_opt(tool_icon(&tool.text).map(|icon| {
                    Element::new("img")
                        .attr("src", options.icon_url(icon))
                        .attr("alt", "")
                        .class("usa-nav__secondary-icon")
                        .attr("aria-hidden", "true")
                }))
                .text(tool.text.as_str());
            Element::new("li").class("usa-nav__secondary-item").child(link)
        });

        secondary.child(Element::new("ul").class("usa-nav__secondary-links").children(items))
    }

    fn primary(&self, submenus: &Accordion) -> Element {
        let items = self.items.iter().enumerate().map(|(index, item)| {
            let li = Element::new("li").class("usa-nav__primary-item");
            match item {
                NavItem::Link { link } => li.child(
                    Element::new("a")
                        .class("usa-nav__link")
                        .attr("href", link.href.as_str())
                        .child(Element::new("span").text(link.text.as_str())),
                ),
                NavItem::Menu { label, items } => {
                    let id = format!("extended-nav-section-{}", index);
                    let expanded = submenus.is_expanded(index);
                    let button = Element::new("button")
                        .class("usa-accordion__button usa-nav__link")
                        .attr("type", "button")
                        .attr("aria-expanded", expanded.to_string())
                        .attr("aria-controls", id.as_str())
                        .child(Element::new("span").text(label.as_str()));
                    let submenu = Element::new("ul")
                        .class("usa-nav__submenu")
                        .attr("id", id)
                        .flag_if("hidden", !expanded)
                        .children(items.iter().map(|html| {
                            Element::new("li").class("usa-nav__submenu-item").raw(html.as_str())
                        }));
                    li.child(button).child(submenu)
                }
                NavItem::Plain { html } => li.raw(html.as_str()),
            }
        });

        Element::new("ul").class("usa-nav__primary usa-accordion").children(items)
    }
}

/// Icon shown before a utility link, chosen from its text.
pub fn tool_icon(text: &str) -> Option<&'static str> {
    let text = text.trim().to_lowercase();
    if text.contains("search") {
        Some("search")
    } else if text.contains("login") || text == "sign in" {
        Some("user")
    } else {
        None
    }
}

fn non_empty_section(sections: &SectionMap, key: &str) -> Option<String> {
    sections
        .get(key)
        .filter(|nodes| !nodes.is_empty())
        .map(|nodes| nodes.concat())
}

fn parse_brand(html: &str) -> Brand {
    let fragment = Html::parse_fragment(html);
    let logo = fragment.select(&IMAGES).next().and_then(|img| {
        let src = img.value().attr("src")?.trim();
        if src.is_empty() {
            return None;
        }
        let alt = img.value().attr("alt").unwrap_or_default().to_string();
        Some((src.to_string(), alt))
    });
    let link = fragment.select(&LINKS).next().map(|a| Link {
        href: a.value().attr("href").unwrap_or("/").to_string(),
        text: text_of(a),
    });

    Brand {
        logo,
        link,
        text: text_of(fragment.root_element()),
    }
}

fn parse_tools(html: &str) -> Vec<Link> {
    let fragment = Html::parse_fragment(html);
    let Some(list) = fragment.select(&LISTS).next() else {
        return Vec::new();
    };
    children_named(list, "li")
        .filter_map(|li| {
            let a = li.select(&LINKS).next()?;
            Some(Link {
                href: a.value().attr("href").unwrap_or_default().to_string(),
                text: text_of(a),
            })
        })
        .collect()
}

fn parse_nav(html: &str) -> Vec<NavItem> {
    let fragment = Html::parse_fragment(html);
    let Some(list) = fragment.select(&LISTS).next() else {
        return Vec::new();
    };
    children_named(list, "li").map(nav_item).collect()
}

fn nav_item(li: ElementRef<'_>) -> NavItem {
    let link = children_named(li, "a").next();
    let submenu = child_elements(li).find(|el| matches!(el.value().name(), "ul" | "ol"));

    match (link, submenu) {
        (link, Some(submenu)) => {
            let label = match link {
                Some(a) => text_of(a),
                None => li
                    .children()
                    .filter_map(|node| node.value().as_text().map(|t| t.trim().to_string()))
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" "),
            };
            NavItem::Menu {
                label,
                items: children_named(submenu, "li").map(|item| item.inner_html()).collect(),
            }
        }
        (Some(a), None) => NavItem::Link {
            link: Link {
                href: a.value().attr("href").unwrap_or_default().to_string(),
                text: text_of(a),
            },
        },
        (None, None) => NavItem::Plain {
            html: li.inner_html().trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavEvent;
    use crate::parser::split_by_headings;

    const FRAGMENT: &str = r#"
        <h1>Header</h1>
        <h2>Brand</h2>
        <p><img src="/logo.png" alt="Agency"><a href="/">Constituent Health Agency</a></p>
        <h2>Sections</h2>
        <ul>
          <li><a href="/">Home</a></li>
          <li><a href="/services">Health Services</a>
            <ul><li><a href="/primary">Primary Care</a></li><li><a href="/specialty">Specialty Care</a></li></ul>
          </li>
        </ul>
        <h2>Tools</h2>
        <ul><li><a href="/search">Search</a></li><li><a href="/login">Login</a></li><li><a href="/help">Help</a></li></ul>
    "#;

    fn content() -> HeaderContent {
        HeaderContent::from_sections(&split_by_headings(FRAGMENT, 2)).unwrap()
    }

    #[test]
    fn test_reads_sections() {
        let header = content();
        let brand = header.brand.as_ref().unwrap();
        assert_eq!(brand.logo, Some(("/logo.png".to_string(), "Agency".to_string())));
        assert_eq!(brand.link.as_ref().unwrap().text, "Constituent Health Agency");
        assert_eq!(header.tools.len(), 3);
        assert_eq!(header.items.len(), 2);
        assert!(matches!(&header.items[1], NavItem::Menu { label, items } if label == "Health Services" && items.len() == 2));
    }

    #[test]
    fn test_render_closed() {
        let header = content();
        let html = super::super::markup::to_html(&header.render(
            &RenderOptions::default(),
            &MobileNav::new(),
            &header.accordion(),
        ));

        assert!(html.starts_with(r#"<div class="usa-overlay"></div><header class="usa-header usa-header--extended">"#));
        assert!(html.contains(r#"<button class="usa-menu-btn" type="button" aria-expanded="false" aria-controls="basic-nav-section">Menu</button>"#));
        assert!(html.contains(r#"<a href="/" title="Constituent Health Agency">Constituent Health Agency</a>"#));
        assert!(html.contains(r#"<img src="/icons/search.svg""#));
        assert!(html.contains(r#"<img src="/icons/user.svg""#));
        assert!(html.contains(r#"aria-controls="extended-nav-section-1""#));
        assert!(html.contains(r#"<ul class="usa-nav__submenu" id="extended-nav-section-1" hidden>"#));
        assert!(html.contains(r#"<a class="usa-nav__link" href="/"><span>Home</span></a>"#));
    }

    #[test]
    fn test_render_open_with_submenu() {
        let header = content();
        let mut nav = MobileNav::new();
        nav.dispatch(NavEvent::MenuButton);
        let mut submenus = header.accordion();
        submenus.toggle(1);

        let html = super::super::markup::to_html(&header.render(&RenderOptions::default(), &nav, &submenus));
        assert!(html.contains(r#"<div class="usa-overlay is-visible"></div>"#));
        assert!(html.contains(r#"<nav class="usa-nav is-visible""#));
        assert!(html.contains(r#"aria-expanded="true" aria-controls="extended-nav-section-1""#));
        assert!(html.contains(r#"<ul class="usa-nav__submenu" id="extended-nav-section-1">"#));
    }

    #[test]
    fn test_brand_or_sections_required() {
        let sections = split_by_headings("<h2>Tools</h2><ul><li><a href='/s'>Search</a></li></ul>", 2);
        assert!(HeaderContent::from_sections(&sections).is_none());

        let sections = split_by_headings("<h2>Brand</h2><p>Plain Agency</p>", 2);
        let header = HeaderContent::from_sections(&sections).unwrap();
        let html = super::super::markup::to_html(&header.render(
            &RenderOptions::default(),
            &MobileNav::new(),
            &header.accordion(),
        ));
        assert!(html.contains(r#"<a href="/" title="Home">Plain Agency</a>"#));
        assert!(!html.contains("usa-nav__primary"));
    }

    #[test]
    fn test_tool_icons() {
        assert_eq!(tool_icon("Site Search"), Some("search"));
        assert_eq!(tool_icon("Sign in"), Some("user"));
        assert_eq!(tool_icon("Help"), None);
    }
}
