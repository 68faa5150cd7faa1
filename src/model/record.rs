//! Parsed row records and the values extracted from cells.

use serde::{Deserialize, Serialize};

/// The semantic result of classifying one row.
///
/// Every field is optional: absence means "not authored" and the matching
/// output fragment is simply omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Heading text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Body markup, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Image or icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,

    /// Time badge text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Short tag label shown above the heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Callout text shown before the heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callout: Option<String>,

    /// Calls to action in authored order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl ParsedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
            && self.body.is_none()
            && self.media.is_none()
            && self.time.is_none()
            && self.tag.is_none()
            && self.callout.is_none()
            && self.actions.is_empty()
    }

    /// The first action, if any.
    pub fn primary_action(&self) -> Option<&Action> {
        self.actions.first()
    }
}

/// Media extracted from a cell that may hold either an image or an icon name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Media {
    /// A real image reference
    Image {
        /// Image URL or site path
        src: String,
        /// Authored alternative text
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },

    /// A short icon keyword (e.g. "local_hospital")
    Icon {
        /// Icon name as authored
        name: String,
    },
}

impl Media {
    /// Create an image with no alt text.
    pub fn image(src: impl Into<String>) -> Self {
        Media::Image {
            src: src.into(),
            alt: None,
        }
    }

    /// Create an icon.
    pub fn icon(name: impl Into<String>) -> Self {
        Media::Icon { name: name.into() }
    }

    /// Check if this is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Media::Image { .. })
    }

    /// Check if this is an icon.
    pub fn is_icon(&self) -> bool {
        matches!(self, Media::Icon { .. })
    }
}

/// A single call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Link target
    pub href: String,
    /// Visible text, with any arrow glyph removed
    pub text: String,
    /// Authored style
    pub style: ActionStyle,
}

impl Action {
    /// Create a button-styled action.
    pub fn button(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            style: ActionStyle::Button,
        }
    }

    /// Create a link-styled action.
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            style: ActionStyle::Link,
        }
    }
}

/// Authored action style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    /// Rendered as a button
    #[default]
    Button,
    /// Rendered as a plain text link
    Link,
}

/// Visual treatment of an action once its position is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRole {
    /// Solid primary button
    Primary,
    /// Outlined secondary button
    Secondary,
    /// Plain text link
    Text,
}

impl ActionRole {
    /// CSS classes for an anchor in this role.
    pub fn class_name(self) -> &'static str {
        match self {
            ActionRole::Primary => "usa-button",
            ActionRole::Secondary => "usa-button usa-button--outline",
            ActionRole::Text => "usa-link",
        }
    }
}
