//! Typography blocks: styled paragraphs and section titles.

use scraper::Html;

use super::markup::Element;
use super::rewrite::{rewrite_fragment, Edit};
use crate::parser::selectors::{PARAGRAPHS, TITLE_HEADINGS};

/// Alignment and size flags shared by the typography blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Center-aligned
    pub centered: bool,
    /// Larger intro paragraph
    pub intro: bool,
}

impl TextStyle {
    /// Classes added to each paragraph.
    pub fn paragraph_classes(self) -> Vec<String> {
        let mut classes = vec!["usa-prose".to_string()];
        if self.intro {
            classes.push("usa-intro".to_string());
        }
        if self.centered {
            classes.push("text-center".to_string());
        }
        classes
    }

    /// Classes added to the block element.
    pub fn block_classes(self) -> Vec<String> {
        let mut classes = Vec::new();
        if self.centered {
            classes.push("text-center".to_string());
        }
        if self.intro {
            classes.push("intro".to_string());
        }
        classes
    }
}

/// Style every paragraph in a text block.
///
/// Returns `None` when the content has no paragraphs.
pub fn build_text(inner_html: &str, style: TextStyle) -> Option<String> {
    let fragment = Html::parse_fragment(inner_html);
    if fragment.select(&PARAGRAPHS).next().is_none() {
        return None;
    }

    let classes = style.paragraph_classes();
    Some(rewrite_fragment(inner_html, |el| {
        if el.value().name() == "p" {
            Edit::AddClasses(classes.clone())
        } else {
            Edit::Keep
        }
    }))
}

/// Keep only the first `h1`-`h3`, restyled as a title.
///
/// Returns `None` when the content has no such heading.
pub fn build_title(inner_html: &str, centered: bool) -> Option<Element> {
    let fragment = Html::parse_fragment(inner_html);
    let heading = fragment.select(&TITLE_HEADINGS).next()?;
    let tag = heading.value().name();

    let mut class = String::from("usa-prose");
    if centered {
        class.push_str(" text-center");
    }
    class.push_str(" title-");
    class.push_str(tag);

    let title = heading
        .value()
        .attrs()
        .filter(|(name, _)| *name != "class")
        .fold(Element::new(tag), |title, (name, value)| title.attr(name, value));
    Some(title.class(class).raw(heading.inner_html()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_paragraphs() {
        let style = TextStyle {
            centered: true,
            intro: true,
        };
        let html = build_text("<div><p>One</p><p>Two</p></div>", style).unwrap();
        assert_eq!(
            html,
            r#"<div><p class="usa-prose usa-intro text-center">One</p><p class="usa-prose usa-intro text-center">Two</p></div>"#
        );
        assert_eq!(style.block_classes(), vec!["text-center", "intro"]);
    }

    #[test]
    fn test_text_without_paragraphs() {
        assert!(build_text("<div>loose text</div>", TextStyle::default()).is_none());
    }

    #[test]
    fn test_title() {
        let html = build_title(r#"<div><p>x</p><h2 id="more">More <em>tasks</em></h2><h1>Later</h1></div>"#, true)
            .unwrap()
            .to_html();
        assert_eq!(
            html,
            r#"<h2 id="more" class="usa-prose text-center title-h2">More <em>tasks</em></h2>"#
        );
    }

    #[test]
    fn test_title_keeps_authored_attributes() {
        let html = build_title(r#"<h2 id="x" class="old" data-track="t" lang="es">Servicios</h2>"#, false)
            .unwrap()
            .to_html();
        assert_eq!(
            html,
            r#"<h2 id="x" data-track="t" lang="es" class="usa-prose title-h2">Servicios</h2>"#
        );
    }

    #[test]
    fn test_title_requires_heading() {
        assert!(build_title("<p>No heading</p>", false).is_none());
        assert!(build_title("<h4>Too small</h4>", false).is_none());
    }
}
