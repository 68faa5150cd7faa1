//! Re-serializing parsed HTML with per-element edits.
//!
//! `scraper` trees are read-only, so edits are applied while writing the
//! tree back out: each element is offered to an edit function that may add
//! classes or swap its content.

use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Html, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// What to do with one element while serializing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Edit {
    /// Write the element unchanged
    #[default]
    Keep,
    /// Append class tokens
    AddClasses(Vec<String>),
    /// Append class tokens and replace the element's content
    Replace {
        /// Classes to append
        classes: Vec<String>,
        /// New inner markup
        inner_html: String,
    },
    /// Insert markup before the element's existing content
    Prepend(String),
    /// Set one attribute, replacing any authored value
    SetAttr {
        /// Attribute name
        name: String,
        /// New value
        value: String,
    },
}

/// Rewrite an HTML fragment.
pub fn rewrite_fragment<F>(html: &str, mut edit: F) -> String
where
    F: FnMut(ElementRef<'_>) -> Edit,
{
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.root_element(), &mut edit, &mut out);
    out
}

/// Rewrite a full HTML document, emitting an HTML5 doctype.
pub fn rewrite_document<F>(html: &str, mut edit: F) -> String
where
    F: FnMut(ElementRef<'_>) -> Edit,
{
    let document = Html::parse_document(html);
    let mut out = String::with_capacity(html.len() + 64);
    out.push_str("<!DOCTYPE html>\n");
    write_element(document.root_element(), &mut edit, &mut out);
    out
}

/// Serialize one element and its subtree.
pub fn rewrite_element<F>(element: ElementRef<'_>, mut edit: F) -> String
where
    F: FnMut(ElementRef<'_>) -> Edit,
{
    let mut out = String::new();
    write_element(element, &mut edit, &mut out);
    out
}

/// Merge extra class tokens into an existing class attribute.
pub fn merge_classes(existing: &str, extra: &[String]) -> String {
    let mut tokens: Vec<&str> = existing.split_whitespace().collect();
    for class in extra.iter().flat_map(|c| c.split_whitespace()) {
        if !tokens.contains(&class) {
            tokens.push(class);
        }
    }
    tokens.join(" ")
}

fn write_element<F>(element: ElementRef<'_>, edit: &mut F, out: &mut String)
where
    F: FnMut(ElementRef<'_>) -> Edit,
{
    let edit_result = edit(element);
    let mut set_attr = None;
    let (classes, inner, prefix) = match &edit_result {
        Edit::Keep => (&[][..], None, None),
        Edit::AddClasses(classes) => (&classes[..], None, None),
        Edit::Replace {
            classes,
            inner_html,
        } => (&classes[..], Some(inner_html.as_str()), None),
        Edit::Prepend(html) => (&[][..], None, Some(html.as_str())),
        Edit::SetAttr { name, value } => {
            set_attr = Some((name.as_str(), value.as_str()));
            (&[][..], None, None)
        }
    };

    let name = element.value().name();
    out.push('<');
    out.push_str(name);

    let mut has_class = false;
    for (attr, value) in element.value().attrs() {
        let value = match set_attr {
            Some((name, new_value)) if name == attr => {
                set_attr = None;
                new_value.to_string()
            }
            _ if attr == "class" => {
                has_class = true;
                merge_classes(value, classes)
            }
            _ => value.to_string(),
        };
        write_attr(out, attr, &value);
    }
    if !has_class && !classes.is_empty() {
        write_attr(out, "class", &merge_classes("", classes));
    }
    if let Some((name, value)) = set_attr {
        write_attr(out, name, value);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    if let Some(html) = prefix {
        out.push_str(html);
    }
    match inner {
        Some(html) => out.push_str(html),
        None => write_children(element, edit, out),
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_children<F>(element: ElementRef<'_>, edit: &mut F, out: &mut String)
where
    F: FnMut(ElementRef<'_>) -> Edit,
{
    let raw_text = matches!(element.value().name(), "script" | "style");
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if raw_text {
                    out.push_str(&**text);
                } else {
                    out.push_str(&encode_text(&**text));
                }
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(&**comment);
                out.push_str("-->");
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_element(child, edit, out);
                }
            }
            _ => {}
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_round_trips_simple_markup() {
        let html = r#"<p class="lead">Hi &amp; <a href="/x">there</a></p><!-- note --><br>"#;
        assert_eq!(rewrite_fragment(html, |_| Edit::Keep), html);
    }

    #[test]
    fn test_add_classes() {
        let out = rewrite_fragment(r#"<p>One</p><p class="a">Two</p>"#, |el| {
            if el.value().name() == "p" {
                Edit::AddClasses(vec!["usa-prose".to_string(), "a".to_string()])
            } else {
                Edit::Keep
            }
        });
        assert_eq!(
            out,
            r#"<p class="usa-prose a">One</p><p class="a usa-prose">Two</p>"#
        );
    }

    #[test]
    fn test_replace() {
        let out = rewrite_fragment(r#"<div class="hero"><p>old</p></div><span>kept</span>"#, |el| {
            match el.value().name() {
                "div" => Edit::Replace {
                    classes: vec!["decorated".to_string()],
                    inner_html: "<b>new</b>".to_string(),
                },
                _ => Edit::Keep,
            }
        });
        assert_eq!(out, r#"<div class="hero decorated"><b>new</b></div><span>kept</span>"#);
    }

    #[test]
    fn test_prepend() {
        let out = rewrite_fragment("<section><p>body</p></section>", |el| {
            if el.value().name() == "section" {
                Edit::Prepend("<div>first</div>".to_string())
            } else {
                Edit::Keep
            }
        });
        assert_eq!(out, "<section><div>first</div><p>body</p></section>");
    }

    #[test]
    fn test_set_attr() {
        let out = rewrite_fragment(r#"<a href='/old' title="t">x</a><img src="/a.png">"#, |el| {
            match el.value().name() {
                "a" => Edit::SetAttr {
                    name: "href".to_string(),
                    value: "/new".to_string(),
                },
                _ => Edit::SetAttr {
                    name: "alt".to_string(),
                    value: "".to_string(),
                },
            }
        });
        assert_eq!(out, r#"<a href="/new" title="t">x</a><img src="/a.png" alt="">"#);
    }

    #[test]
    fn test_document_doctype() {
        let out = rewrite_document("<html><head></head><body><main></main></body></html>", |_| Edit::Keep);
        assert!(out.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(out.contains("<body><main></main></body>"));
    }
}
