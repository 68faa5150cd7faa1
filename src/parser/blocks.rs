//! Reading authored block markup into a [`Container`].
//!
//! Two shapes are accepted:
//!
//! - the decorated-div form: `<div class="cards featured">` whose child
//!   `div`s are rows and whose grandchild `div`s are cells;
//! - the raw table form exported from a document, whose first row holds a
//!   single cell naming the block, e.g. `Cards (Featured, Flag)`.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::error::{Error, Result};
use crate::model::{Cell, Container, ContentRow};

use super::selectors::{child_elements, text_of, TABLE_ROWS};

/// Class added by the host page to every block element.
const BLOCK_MARKER_CLASS: &str = "block";

static BLOCK_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^(]+?)\s*(?:\(([^)]*)\))?\s*$").expect("valid regex"));

/// Parse a single block from HTML.
pub fn parse_block(html: &str) -> Result<Container> {
    let fragment = Html::parse_fragment(html);
    let root = child_elements(fragment.root_element())
        .next()
        .ok_or_else(|| Error::InvalidBlock("no block element".into()))?;

    match root.value().name() {
        "table" => container_from_table(root),
        _ => container_from_element(root),
    }
}

/// Build a container from a decorated block element.
pub fn container_from_element(element: ElementRef<'_>) -> Result<Container> {
    let mut classes = element
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace();
    let name = classes
        .next()
        .ok_or_else(|| Error::InvalidBlock(format!("<{}> has no block class", element.value().name())))?;

    let mut container = Container::new(name);
    for class in classes.filter(|c| *c != BLOCK_MARKER_CLASS) {
        container.add_class(class);
    }

    for row in child_elements(element) {
        let cells: Vec<Cell> = child_elements(row).map(|cell| Cell::new(cell.inner_html())).collect();
        let cells = if cells.is_empty() {
            vec![Cell::new(row.inner_html())]
        } else {
            cells
        };
        container.rows.push(ContentRow::new(cells));
    }

    Ok(container)
}

/// Build a container from an authored table.
pub fn container_from_table(table: ElementRef<'_>) -> Result<Container> {
    let mut rows = table.select(&TABLE_ROWS).map(|tr| {
        child_elements(tr)
            .filter(|c| matches!(c.value().name(), "td" | "th"))
            .collect::<Vec<_>>()
    });

    let header = rows
        .next()
        .ok_or_else(|| Error::InvalidBlock("table has no rows".into()))?;
    let label = match header.as_slice() {
        [cell] => text_of(*cell),
        _ => return Err(Error::InvalidBlock("table has no block name row".into())),
    };

    let (name, classes) = parse_block_label(&label)
        .ok_or_else(|| Error::InvalidBlock(format!("unreadable block name: {:?}", label)))?;

    let mut container = Container::new(name);
    for class in classes {
        container.add_class(class);
    }
    for cells in rows {
        container.rows.push(ContentRow::new(
            cells.into_iter().map(|c| Cell::new(c.inner_html())).collect(),
        ));
    }

    Ok(container)
}

/// Split an authored block label into a name and class tokens.
///
/// `"Cards (Featured, Flag Right)"` yields `("cards", ["featured",
/// "flag-right"])`.
pub fn parse_block_label(label: &str) -> Option<(String, Vec<String>)> {
    let caps = BLOCK_LABEL_RE.captures(label)?;
    let name = to_class_name(caps.get(1)?.as_str());
    if name.is_empty() {
        return None;
    }
    let classes = caps
        .get(2)
        .map(|m| {
            m.as_str()
                .split(',')
                .map(to_class_name)
                .filter(|c| !c.is_empty())
                .collect()
        })
        .unwrap_or_default();
    Some((name, classes))
}

fn to_class_name(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_div_block() {
        let html = r#"<div class="cards featured block">
            <div><div><h3>One</h3></div><div>two</div></div>
            <div><div>three</div></div>
        </div>"#;
        let container = parse_block(html).unwrap();

        assert_eq!(container.name, "cards");
        assert_eq!(container.classes, vec!["featured"]);
        assert_eq!(container.row_count(), 2);
        assert_eq!(container.rows[0].column_count(), 2);
        assert_eq!(container.rows[0].cells[0].inner_html(), "<h3>One</h3>");
    }

    #[test]
    fn test_parse_table_block() {
        let html = r#"<table>
            <tr><td>Cards (Flag, Right)</td></tr>
            <tr><td>Heading</td><td>/img.png</td><td>Body</td><td>/go</td></tr>
        </table>"#;
        let container = parse_block(html).unwrap();

        assert_eq!(container.name, "cards");
        assert_eq!(container.classes, vec!["flag", "right"]);
        assert_eq!(container.row_count(), 1);
        assert_eq!(container.rows[0].column_count(), 4);
    }

    #[test]
    fn test_block_label() {
        assert_eq!(
            parse_block_label("Text (Center, Intro)"),
            Some(("text".to_string(), vec!["center".to_string(), "intro".to_string()]))
        );
        assert_eq!(parse_block_label("Hero"), Some(("hero".to_string(), vec![])));
        assert_eq!(
            parse_block_label("Cards (Flag Right)").map(|(_, c)| c),
            Some(vec!["flag-right".to_string()])
        );
        assert_eq!(parse_block_label("   "), None);
    }

    #[test]
    fn test_invalid_blocks() {
        assert!(matches!(parse_block(""), Err(Error::InvalidBlock(_))));
        assert!(matches!(parse_block("<div>no class</div>"), Err(Error::InvalidBlock(_))));
        assert!(matches!(
            parse_block("<table><tr><td>a</td><td>b</td></tr></table>"),
            Err(Error::InvalidBlock(_))
        ));
    }
}
