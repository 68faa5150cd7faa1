//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

use super::image::ImageWidth;
use crate::parser::Link;

/// Label for a bare card action URL.
pub const DEFAULT_CARD_CTA: &str = "Learn More";

/// Label for a bare hero action URL.
pub const DEFAULT_HERO_CTA: &str = "Call to action";

/// Options for building component markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Width hints for card images
    pub card_image_widths: Vec<ImageWidth>,

    /// Heading level (1-6) used for card headings
    pub card_heading_level: u8,

    /// Path of the icon sprite sheet
    pub icon_sprite: String,

    /// Directory holding standalone icon files
    pub icons_base: String,

    /// Label for a bare card action URL
    pub card_cta_text: String,

    /// Label for a bare hero action URL
    pub hero_cta_text: String,

    /// Site name used in the default copyright line
    pub site_name: String,

    /// Year shown in the default copyright line (current year when unset)
    pub copyright_year: Option<i32>,

    /// Footer navigation columns as (section key, column heading)
    pub footer_columns: Vec<(String, String)>,

    /// Identifier defaults used when the footer fragment omits them
    pub identifier: IdentifierDefaults,

    /// Prepend a government banner to the page body
    pub auto_banner: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set card image width hints.
    pub fn with_card_image_widths(mut self, widths: Vec<ImageWidth>) -> Self {
        self.card_image_widths = widths;
        self
    }

    /// Set the card heading level.
    pub fn with_card_heading_level(mut self, level: u8) -> Self {
        self.card_heading_level = level.clamp(1, 6);
        self
    }

    /// Set the icon sprite path.
    pub fn with_icon_sprite(mut self, path: impl Into<String>) -> Self {
        self.icon_sprite = path.into();
        self
    }

    /// Set the icons directory.
    pub fn with_icons_base(mut self, path: impl Into<String>) -> Self {
        self.icons_base = path.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the default card action label.
    pub fn with_card_cta(mut self, text: impl Into<String>) -> Self {
        self.card_cta_text = text.into();
        self
    }

    /// Set the default hero action label.
    pub fn with_hero_cta(mut self, text: impl Into<String>) -> Self {
        self.hero_cta_text = text.into();
        self
    }

    /// Set the site name.
    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    /// Pin the copyright year.
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    /// Replace the footer column list.
    pub fn with_footer_columns<K, H>(mut self, columns: impl IntoIterator<Item = (K, H)>) -> Self
    where
        K: Into<String>,
        H: Into<String>,
    {
        self.footer_columns = columns
            .into_iter()
            .map(|(key, heading)| (key.into(), heading.into()))
            .collect();
        self
    }

    /// Set identifier defaults.
    pub fn with_identifier(mut self, identifier: IdentifierDefaults) -> Self {
        self.identifier = identifier;
        self
    }

    /// Enable or disable the automatic banner.
    pub fn with_auto_banner(mut self, enabled: bool) -> Self {
        self.auto_banner = enabled;
        self
    }

    /// URL of a standalone icon file.
    pub fn icon_url(&self, name: &str) -> String {
        format!("{}/{}.svg", self.icons_base, name)
    }

    /// Sprite reference for a named icon.
    pub fn sprite_href(&self, name: &str) -> String {
        format!("{}#{}", self.icon_sprite, name)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            card_image_widths: vec![ImageWidth::new(750)],
            card_heading_level: 4,
            icon_sprite: "/assets/img/sprite.svg".to_string(),
            icons_base: "/icons".to_string(),
            card_cta_text: DEFAULT_CARD_CTA.to_string(),
            hero_cta_text: DEFAULT_HERO_CTA.to_string(),
            site_name: "Community Health Clinic".to_string(),
            copyright_year: None,
            footer_columns: vec![
                ("about-mhs".to_string(), "About MHS".to_string()),
                ("services".to_string(), "Services".to_string()),
                ("resources".to_string(), "Resources".to_string()),
            ],
            identifier: IdentifierDefaults::default(),
            auto_banner: false,
        }
    }
}

/// Fallback content for the footer identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierDefaults {
    /// Domain line
    pub domain: String,

    /// Disclaimer markup (may contain links)
    pub disclaimer_html: String,

    /// Required links shown when the fragment lists none
    pub required_links: Vec<Link>,

    /// Agency logo target
    pub logo_href: String,

    /// Agency logo image, relative to the icons directory
    pub logo_icon: String,

    /// Agency logo alt text
    pub logo_alt: String,
}

impl Default for IdentifierDefaults {
    fn default() -> Self {
        let link = |text: &str, href: &str| Link {
            href: href.to_string(),
            text: text.to_string(),
        };
        Self {
            domain: "Community Health Clinic".to_string(),
            disclaimer_html:
                r#"An official website of the <a href="https://www.defense.gov">Department of War</a>"#
                    .to_string(),
            required_links: vec![
                link("About DoD", "https://www.defense.gov/About/"),
                link("Accessibility", "/accessibility"),
                link("FOIA Requests", "/foia"),
            ],
            logo_href: "https://www.defense.gov".to_string(),
            logo_icon: "shield".to_string(),
            logo_alt: "Department of War logo".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_card_heading_level(0)
            .with_icons_base("/static/icons/")
            .with_copyright_year(2024)
            .with_footer_columns([("services", "Services")]);

        assert_eq!(options.card_heading_level, 1);
        assert_eq!(options.icon_url("search"), "/static/icons/search.svg");
        assert_eq!(options.copyright_year, Some(2024));
        assert_eq!(options.footer_columns.len(), 1);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.card_heading_level, 4);
        assert_eq!(options.card_cta_text, "Learn More");
        assert_eq!(options.hero_cta_text, "Call to action");
        assert_eq!(options.sprite_href("star"), "/assets/img/sprite.svg#star");
        assert_eq!(options.identifier.required_links.len(), 3);
        assert!(!options.auto_banner);
    }
}
