//! Parsing options and configuration.

/// Heading level that opens a section in header and footer fragments.
pub const DEFAULT_SECTION_LEVEL: u8 = 2;

/// Options for parsing blocks and fragments.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Heading level (1-6) at which fragments are split into sections
    pub section_level: u8,

    /// Rewrite absolute preview/live URLs in fragments to site paths
    pub relativize_links: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section heading level.
    pub fn with_section_level(mut self, level: u8) -> Self {
        self.section_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable link relativizing.
    pub fn with_relative_links(mut self, relativize: bool) -> Self {
        self.relativize_links = relativize;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            section_level: DEFAULT_SECTION_LEVEL,
            relativize_links: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_section_level(9)
            .with_relative_links(false);

        assert_eq!(options.section_level, 6);
        assert!(!options.relativize_links);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.section_level, 2);
        assert!(options.relativize_links);
    }
}
