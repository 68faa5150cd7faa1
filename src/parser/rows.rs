//! Row classification.

use serde::{Deserialize, Serialize};

use crate::model::{Container, ContentRow, ParsedRecord};

use super::cells::{parse_actions, parse_body, parse_heading, parse_media, parse_text, parse_time};

/// Semantic role of one column in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Heading text
    Heading,
    /// Body markup
    Body,
    /// Image or icon
    Media,
    /// Time badge
    Time,
    /// Tag label
    Tag,
    /// Callout text
    Callout,
    /// Call-to-action list
    Actions,
    /// Column not rendered
    Ignore,
}

/// Check whether a row is the authored label row.
///
/// A label row's first cell starts with the block's label word
/// (case-insensitive), e.g. "Cards (Featured)".
pub fn is_label_row(row: &ContentRow, label: &str) -> bool {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return false;
    }
    row.cell(0)
        .map(|cell| cell.text().trim().to_lowercase().starts_with(&label))
        .unwrap_or(false)
}

/// Rows that carry content.
///
/// A leading label row is skipped only when more rows follow it, so a single
/// row whose text happens to begin with the label word still renders.
pub fn data_rows(container: &Container) -> &[ContentRow] {
    match container.rows.split_first() {
        Some((first, rest)) if !rest.is_empty() && is_label_row(first, container.label()) => rest,
        _ => &container.rows,
    }
}

/// The first row that carries content.
pub fn first_data_row(container: &Container) -> Option<&ContentRow> {
    data_rows(container).first()
}

/// Classify a row under a column layout.
///
/// Extra cells beyond the layout are ignored; missing cells leave their
/// fields empty.
pub fn classify_row(row: &ContentRow, layout: &[ColumnRole], default_action_text: &str) -> ParsedRecord {
    let mut record = ParsedRecord::new();
    for (cell, role) in row.cells.iter().zip(layout) {
        match role {
            ColumnRole::Heading => record.heading = parse_heading(cell),
            ColumnRole::Body => record.body = parse_body(cell),
            ColumnRole::Media => record.media = parse_media(cell),
            ColumnRole::Time => record.time = parse_time(cell),
            ColumnRole::Tag => record.tag = parse_text(cell),
            ColumnRole::Callout => record.callout = parse_text(cell),
            ColumnRole::Actions => record.actions = parse_actions(cell, default_action_text),
            ColumnRole::Ignore => {}
        }
    }
    log::debug!(
        "classified row with {} cells: heading={:?} actions={}",
        row.column_count(),
        record.heading,
        record.actions.len()
    );
    record
}
