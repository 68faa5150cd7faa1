//! Layout variant detection.
//!
//! A variant is chosen once per container and applies to every row in it.
//! Explicit class names always win; the column count of the first data row
//! is only consulted when no class matches.

use crate::model::Container;
use crate::parser::{first_data_row, ColumnRole};
use serde::{Deserialize, Serialize};

/// Column count that selects [`Variant::Featured`] automatically.
pub const FEATURED_COLUMNS: usize = 6;

/// Column count that selects [`Variant::Compact`] automatically.
pub const COMPACT_COLUMNS: usize = 3;

/// Named layout variant for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Standard card
    #[default]
    Default,
    /// Six-column card with tag and time badge
    Featured,
    /// Three-column card with icon, heading, and link
    Compact,
    /// Media beside the content
    Flag,
    /// Media beside the content, on the right
    FlagRight,
    /// Media inset within the card border
    Inset,
    /// Media extending past the card border
    Exdent,
}

impl Variant {
    /// Variant name as authors write it.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Featured => "featured",
            Variant::Compact => "compact",
            Variant::Flag => "flag",
            Variant::FlagRight => "flag-right",
            Variant::Inset => "inset",
            Variant::Exdent => "exdent",
        }
    }

    /// Column roles for rows rendered under this variant.
    pub fn layout(self) -> &'static [ColumnRole] {
        use ColumnRole::*;
        match self {
            Variant::Featured => &[Media, Tag, Heading, Time, Body, Actions],
            Variant::Compact => &[Media, Heading, Actions],
            _ => &[Heading, Media, Body, Actions],
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the variant for a container.
pub fn detect_variant(container: &Container) -> Variant {
    if let Some(variant) = variant_from_classes(container) {
        log::debug!("{}: variant {} from class list", container.name, variant);
        return variant;
    }

    let columns = first_data_row(container)
        .map(|row| row.column_count())
        .unwrap_or(0);
    let variant = variant_from_columns(columns);
    log::debug!(
        "{}: variant {} from {} columns",
        container.name,
        variant,
        columns
    );
    variant
}

/// Check the class list in fixed precedence order.
pub fn variant_from_classes(container: &Container) -> Option<Variant> {
    if container.has_class("featured") {
        Some(Variant::Featured)
    } else if container.has_class("compact") {
        Some(Variant::Compact)
    } else if container.has_class("flag-right")
        || (container.has_class("flag") && container.has_class("right"))
    {
        Some(Variant::FlagRight)
    } else if container.has_class("flag") {
        Some(Variant::Flag)
    } else if container.has_class("inset") {
        Some(Variant::Inset)
    } else if container.has_class("exdent") {
        Some(Variant::Exdent)
    } else {
        None
    }
}

/// Map a first-data-row column count to a variant.
pub fn variant_from_columns(columns: usize) -> Variant {
    match columns {
        FEATURED_COLUMNS => Variant::Featured,
        COMPACT_COLUMNS => Variant::Compact,
        _ => Variant::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentRow;

    fn cards(columns: usize) -> Container {
        Container::new("cards").with_row(ContentRow::from_html(
            (0..columns).map(|i| format!("cell {}", i)),
        ))
    }

    #[test]
    fn test_column_count_detection() {
        assert_eq!(detect_variant(&cards(6)), Variant::Featured);
        assert_eq!(detect_variant(&cards(3)), Variant::Compact);
        assert_eq!(detect_variant(&cards(4)), Variant::Default);
        assert_eq!(detect_variant(&Container::new("cards")), Variant::Default);
    }

    #[test]
    fn test_classes_beat_column_count() {
        let container = cards(6).with_class("compact");
        assert_eq!(detect_variant(&container), Variant::Compact);

        let container = cards(3).with_class("flag").with_class("right");
        assert_eq!(detect_variant(&container), Variant::FlagRight);

        let container = cards(3).with_class("inset").with_class("exdent");
        assert_eq!(detect_variant(&container), Variant::Inset);
    }

    #[test]
    fn test_label_row_is_skipped() {
        let container = Container::new("cards")
            .with_row(ContentRow::from_html(["Cards"]))
            .with_row(ContentRow::from_html(["a", "b", "c"]));
        assert_eq!(detect_variant(&container), Variant::Compact);
    }

    #[test]
    fn test_layouts() {
        assert_eq!(Variant::Featured.layout().len(), FEATURED_COLUMNS);
        assert_eq!(Variant::Compact.layout().len(), COMPACT_COLUMNS);
        assert_eq!(Variant::Flag.layout(), Variant::Default.layout());
        assert_eq!(Variant::FlagRight.to_string(), "flag-right");
    }
}
