//! Block and fragment parsing module.

mod blocks;
mod cells;
mod links;
mod options;
mod rows;
mod sections;
pub(crate) mod selectors;

pub use blocks::{container_from_element, container_from_table, parse_block, parse_block_label};
pub use cells::{
    classify_media_text, parse_action_line, parse_actions, parse_body, parse_heading, parse_media,
    parse_text, parse_time,
};
pub use links::{
    contains_arrow, extract_links, relativize_href, strip_arrows, Link,
    ARROW_GLYPHS,
};
pub use options::{ParseOptions, DEFAULT_SECTION_LEVEL};
pub use rows::{classify_row, data_rows, first_data_row, is_label_row, ColumnRole};
pub use sections::{split_by_headings, split_fragment};
