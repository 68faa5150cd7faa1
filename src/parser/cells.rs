//! Per-cell extraction functions.
//!
//! Every parser here is total: an empty or malformed cell yields `None` (or
//! an empty list), never an error.

use crate::model::{Action, ActionStyle, Cell, Media};

use super::links::{contains_arrow, strip_arrows};
use super::selectors::{text_of, HEADINGS, IMAGES, LINKS};

/// Heading text: the first `h1`-`h6` if present, else all of the cell's text.
pub fn parse_heading(cell: &Cell) -> Option<String> {
    let fragment = cell.fragment();
    let text = match fragment.select(&HEADINGS).next() {
        Some(heading) => text_of(heading),
        None => text_of(fragment.root_element()),
    };
    non_empty(text)
}

/// Body markup, trimmed and otherwise passed through verbatim.
pub fn parse_body(cell: &Cell) -> Option<String> {
    if cell.is_blank() {
        return None;
    }
    non_empty(cell.inner_html().trim().to_string())
}

/// Plain trimmed text (callouts, tags).
pub fn parse_text(cell: &Cell) -> Option<String> {
    non_empty(cell.text().trim().to_string())
}

/// Time badge text; the format is left to the author.
pub fn parse_time(cell: &Cell) -> Option<String> {
    parse_text(cell)
}

/// Image or icon, disambiguated from the same column.
pub fn parse_media(cell: &Cell) -> Option<Media> {
    let fragment = cell.fragment();
    if let Some(img) = fragment.select(&IMAGES).next() {
        let src = img.value().attr("src").map(str::trim).unwrap_or_default();
        if !src.is_empty() {
            let alt = img
                .value()
                .attr("alt")
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string);
            return Some(Media::Image {
                src: src.to_string(),
                alt,
            });
        }
    }
    classify_media_text(text_of(fragment.root_element()).as_str())
}

/// Classify authored text as an image path or an icon keyword.
///
/// Text beginning with `http://`, `https://`, or `/` is an image; any other
/// non-empty text is an icon name; empty text is absent.
pub fn classify_media_text(text: &str) -> Option<Media> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else if text.starts_with("http://") || text.starts_with("https://") || text.starts_with('/') {
        Some(Media::image(text))
    } else {
        Some(Media::icon(text))
    }
}

/// Calls to action from hyperlinks, or from `url|label` lines when the cell
/// holds no hyperlink.
///
/// `default_text` labels a bare URL line.
pub fn parse_actions(cell: &Cell, default_text: &str) -> Vec<Action> {
    let fragment = cell.fragment();
    let anchors: Vec<Action> = fragment
        .select(&LINKS)
        .filter_map(|a| {
            let href = a.value().attr("href")?.trim();
            if href.is_empty() {
                return None;
            }
            let label: String = a.text().collect();
            Some(labeled_action(href, &label, default_text))
        })
        .collect();

    if !anchors.is_empty() {
        return anchors;
    }

    cell.lines()
        .iter()
        .filter_map(|line| parse_action_line(line, default_text))
        .collect()
}

/// Parse one `url` or `url|label` line.
pub fn parse_action_line(line: &str, default_text: &str) -> Option<Action> {
    let (url, label) = match line.split_once('|') {
        Some((url, label)) => (url, label),
        None => (line, ""),
    };
    let url = strip_arrows(url);
    if url.is_empty() {
        return None;
    }
    let mut action = labeled_action(&url, label, default_text);
    if contains_arrow(line) {
        action.style = ActionStyle::Link;
    }
    Some(action)
}

fn labeled_action(href: &str, label: &str, default_text: &str) -> Action {
    let style = if contains_arrow(label) {
        ActionStyle::Link
    } else {
        ActionStyle::Button
    };
    let text = strip_arrows(label);
    Action {
        href: href.to_string(),
        text: if text.is_empty() {
            default_text.to_string()
        } else {
            text
        },
        style,
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_prefers_heading_element() {
        let cell = Cell::new("<h3> Primary care </h3><p>Visit us</p>");
        assert_eq!(parse_heading(&cell).as_deref(), Some("Primary care"));

        let cell = Cell::new("  Plain heading ");
        assert_eq!(parse_heading(&cell).as_deref(), Some("Plain heading"));
    }

    #[test]
    fn test_body_passes_markup_through() {
        let cell = Cell::new("  <p>Book <strong>today</strong></p>  ");
        assert_eq!(
            parse_body(&cell).as_deref(),
            Some("<p>Book <strong>today</strong></p>")
        );
        assert_eq!(parse_body(&Cell::new("<p> </p>")), None);
    }

    #[test]
    fn test_media_from_img() {
        let cell = Cell::new(r#"<picture><img src="/media_1.png" alt="Clinic"></picture>"#);
        assert_eq!(
            parse_media(&cell),
            Some(Media::Image {
                src: "/media_1.png".to_string(),
                alt: Some("Clinic".to_string()),
            })
        );
    }

    #[test]
    fn test_media_from_text() {
        assert_eq!(
            parse_media(&Cell::new("https://example.com/a.jpg")),
            Some(Media::image("https://example.com/a.jpg"))
        );
        assert_eq!(
            parse_media(&Cell::new("<p>local_hospital</p>")),
            Some(Media::icon("local_hospital"))
        );
        assert_eq!(parse_media(&Cell::new("")), None);
    }

    #[test]
    fn test_actions_from_anchors() {
        let cell = Cell::new(r#"<p><a href="/apply">Apply</a></p><p><a href="/more">More →</a></p>"#);
        let actions = parse_actions(&cell, "Learn More");
        assert_eq!(
            actions,
            vec![Action::button("/apply", "Apply"), Action::link("/more", "More")]
        );
    }

    #[test]
    fn test_actions_from_lines() {
        let cell = Cell::new("<p>/apply</p><p>/visit|Visit a clinic</p><p>/all|See all →</p>");
        let actions = parse_actions(&cell, "Learn More");
        assert_eq!(
            actions,
            vec![
                Action::button("/apply", "Learn More"),
                Action::button("/visit", "Visit a clinic"),
                Action::link("/all", "See all"),
            ]
        );
    }

    #[test]
    fn test_empty_cell_is_total() {
        let cell = Cell::default();
        assert_eq!(parse_heading(&cell), None);
        assert_eq!(parse_body(&cell), None);
        assert_eq!(parse_text(&cell), None);
        assert_eq!(parse_time(&cell), None);
        assert_eq!(parse_media(&cell), None);
        assert!(parse_actions(&cell, "Learn More").is_empty());
    }
}
