//! Container, row, and cell types.

use scraper::{ElementRef, Html, Node};
use serde::{Deserialize, Serialize};

/// Tags that break a cell's text into separate lines.
const LINE_BREAKING_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "blockquote", "pre",
];

/// One authored block: a name, its variant classes, and its rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    /// Block name, lowercased (e.g. "cards")
    pub name: String,

    /// Class tokens, lowercased, excluding the block name itself
    pub classes: Vec<String>,

    /// Authored rows in document order
    pub rows: Vec<ContentRow>,
}

impl Container {
    /// Create an empty container for the named block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_lowercase(),
            classes: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Add a class token.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Add a row.
    pub fn with_row(mut self, row: ContentRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Add a class token, ignoring duplicates and the block's own name.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into().trim().to_lowercase();
        if class.is_empty() || class == self.name || self.classes.contains(&class) {
            return;
        }
        self.classes.push(class);
    }

    /// Check for a class token (case-insensitive).
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.eq_ignore_ascii_case(class))
    }

    /// The label word authors put in a header row (the block name).
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the container has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One authored row: an ordered sequence of cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRow {
    /// Cells in column order
    pub cells: Vec<Cell>,
}

impl ContentRow {
    /// Create a row from cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Create a row from raw cell HTML strings.
    pub fn from_html<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Cell::new).collect(),
        }
    }

    /// Get a cell by column index.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get the number of columns in this row.
    pub fn column_count(&self) -> usize {
        self.cells.len()
    }
}

/// An opaque, read-only cell holding authored inner HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell {
    html: String,
}

impl Cell {
    /// Create a cell from its inner HTML.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The cell's inner HTML as authored.
    pub fn inner_html(&self) -> &str {
        &self.html
    }

    /// Parse the cell into a fragment for querying.
    pub fn fragment(&self) -> Html {
        Html::parse_fragment(&self.html)
    }

    /// Concatenated text content (untrimmed).
    pub fn text(&self) -> String {
        self.fragment().root_element().text().collect()
    }

    /// Check if the cell has no visible text and no embedded image.
    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty() && !self.html.contains("<img")
    }

    /// Text split into trimmed, non-empty lines.
    ///
    /// Paragraphs, list items, and `<br>` each start a new line.
    pub fn lines(&self) -> Vec<String> {
        let fragment = self.fragment();
        let mut buf = String::new();
        collect_lines(fragment.root_element(), &mut buf);
        buf.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn collect_lines(element: ElementRef<'_>, buf: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buf.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if name == "br" {
                    buf.push('\n');
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    let breaks = LINE_BREAKING_TAGS.contains(&name);
                    if breaks {
                        buf.push('\n');
                    }
                    collect_lines(child_el, buf);
                    if breaks {
                        buf.push('\n');
                    }
                }
            }
            _ => {}
        }
    }
}
