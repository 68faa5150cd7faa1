//! # uswds-blocks
//!
//! Decorates authored content blocks into U.S. Web Design System markup.
//!
//! Authors build pages from blocks: tables whose first cell names the block
//! (`Cards (Featured)`) and whose rows hold content. The host delivers them
//! as `<div class="cards featured">` elements with one child `div` per row
//! and one grandchild `div` per cell. This crate reads those rows, picks a
//! layout variant, and replaces the block with the matching USWDS component.
//!
//! ## Quick Start
//!
//! ```
//! use uswds_blocks::Decorator;
//!
//! let block = r#"<div class="hero"><div>
//!     <div>Welcome</div><div>Community Health Clinic</div>
//!     <div><p>Care close to home.</p></div>
//!     <div><a href="/appointments">Book a visit</a></div>
//! </div></div>"#;
//!
//! let decorated = Decorator::new().decorate_block(block)?.unwrap();
//! assert!(decorated.html.contains(r#"<h1 class="usa-hero__heading">"#));
//! # Ok::<(), uswds_blocks::Error>(())
//! ```
//!
//! ## Blocks
//!
//! - **banner**: the official government website banner
//! - **cards**: card groups in seven layout variants
//! - **footer**: the big footer, built from a footer fragment
//! - **header**: the extended header, built from a header fragment
//! - **hero**: an introduction section with callout and actions
//! - **text**: prose paragraphs, optionally centered or intro-sized
//! - **title**: a section title from the first heading

pub mod decorate;
pub mod detect;
pub mod error;
pub mod fragment;
pub mod model;
pub mod nav;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use decorate::{
    BlockDecorator, BlockRegistry, BlockReport, DecorateContext, Decorated,
};
pub use detect::{detect_variant, Variant};
pub use error::{Error, Result};
pub use fragment::{DirectoryLoader, FragmentLoader, MemoryLoader, NoFragments, PageMetadata};
pub use model::{
    Action, ActionRole, ActionStyle, Cell, Container, ContentRow, Media, ParsedRecord, SectionMap,
};
pub use nav::{Accordion, MobileNav, NavEffect, NavEvent, NavState};
pub use parser::{parse_block, split_by_headings, ColumnRole, ParseOptions};
pub use render::{
    DecorateResult, DecorateStats, ImageBuilder, JsonFormat, OptimizedPicture, RenderOptions,
};

use std::path::Path;
use std::sync::Arc;

/// Decorate every block on a page with default options.
///
/// Header and footer stay untouched since no fragment loader is configured.
///
/// # Example
///
/// ```
/// let page = r#"<html><body><main><div>
///   <div class="title"><div><div><h2>Services</h2></div></div></div>
/// </div></main></body></html>"#;
///
/// let html = uswds_blocks::decorate_page(page);
/// assert!(html.contains("title-h2"));
/// ```
pub fn decorate_page(html: &str) -> String {
    Decorator::new().decorate_page(html)
}

/// Decorate a page file, loading header and footer fragments from the
/// file's directory.
///
/// # Example
///
/// ```no_run
/// let html = uswds_blocks::decorate_file("site/index.html")?;
/// std::fs::write("out/index.html", html)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decorate_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    Decorator::new()
        .with_loader(DirectoryLoader::new(root))
        .decorate_file(path)
}

/// Decorate one block element with default options.
pub fn decorate_block(html: &str) -> Result<Option<Decorated>> {
    Decorator::new().decorate_block(html)
}

/// Split a header or footer fragment into sections with default options.
pub fn split_sections(html: &str) -> SectionMap {
    Decorator::new().split_sections(html)
}

/// Builder for decorating blocks and pages.
///
/// # Example
///
/// ```
/// use uswds_blocks::{Decorator, MemoryLoader, RenderOptions};
///
/// let loader = MemoryLoader::new().with_fragment(
///     "/footer",
///     "<h2>Legal</h2><ul><li><a href=\"/privacy\">Privacy Policy</a></li></ul>",
/// );
/// let decorator = Decorator::new()
///     .with_loader(loader)
///     .with_options(RenderOptions::new().with_site_name("Example Agency"));
///
/// let result = decorator.decorate_page_with_stats("<html><body><footer></footer></body></html>");
/// assert_eq!(result.stats.decorated, 1);
/// assert!(result.html.contains("usa-footer__secondary-link"));
/// ```
pub struct Decorator {
    registry: BlockRegistry,
    loader: Arc<dyn FragmentLoader>,
    images: Arc<dyn ImageBuilder>,
    options: RenderOptions,
    parse_options: ParseOptions,
}

impl Decorator {
    /// Create a decorator with every built-in block and no fragment loader.
    pub fn new() -> Self {
        Self {
            registry: BlockRegistry::with_defaults(),
            loader: Arc::new(NoFragments),
            images: Arc::new(OptimizedPicture),
            options: RenderOptions::default(),
            parse_options: ParseOptions::default(),
        }
    }

    /// Use a custom block registry.
    pub fn with_registry(mut self, registry: BlockRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an additional decorator.
    pub fn with_decorator(mut self, decorator: Arc<dyn BlockDecorator>) -> Self {
        self.registry.register(decorator);
        self
    }

    /// Set the fragment loader for header and footer.
    pub fn with_loader(mut self, loader: impl FragmentLoader + 'static) -> Self {
        self.loader = Arc::new(loader);
        self
    }

    /// Set the responsive image builder.
    pub fn with_images(mut self, images: impl ImageBuilder + 'static) -> Self {
        self.images = Arc::new(images);
        self
    }

    /// Set render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// The block registry.
    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn context<'a>(&'a self, metadata: &'a PageMetadata, loader: &'a dyn FragmentLoader) -> DecorateContext<'a> {
        DecorateContext {
            options: &self.options,
            parse_options: &self.parse_options,
            images: self.images.as_ref(),
            loader,
            metadata,
        }
    }

    /// Decorate one block element.
    ///
    /// `Ok(None)` means the block lacked required content and was left as
    /// authored.
    pub fn decorate_block(&self, html: &str) -> Result<Option<Decorated>> {
        let container = parse_block(html)?;
        let metadata = PageMetadata::new();
        self.registry
            .decorate(&container, &self.context(&metadata, self.loader.as_ref()))
    }

    /// Decorate one block and return the whole block element.
    ///
    /// Undecorated blocks come back unchanged.
    pub fn decorate_block_html(&self, html: &str) -> Result<String> {
        let container = parse_block(html)?;
        let metadata = PageMetadata::new();
        let decorated = self
            .registry
            .decorate(&container, &self.context(&metadata, self.loader.as_ref()))?;
        Ok(match decorated {
            Some(decorated) => decorated.to_block_html(&container),
            None => html.to_string(),
        })
    }

    /// Parse one block and report the records its decorator reads.
    pub fn inspect_block(&self, html: &str) -> Result<BlockReport> {
        let container = parse_block(html)?;
        let metadata = PageMetadata::new();
        self.registry
            .inspect(&container, &self.context(&metadata, self.loader.as_ref()))
    }

    /// Decorate every block on a page.
    pub fn decorate_page(&self, html: &str) -> String {
        self.decorate_page_with_stats(html).html
    }

    /// Decorate every block on a page and report statistics.
    pub fn decorate_page_with_stats(&self, html: &str) -> DecorateResult {
        self.decorate_with_loader(html, self.loader.as_ref())
    }

    fn decorate_with_loader(&self, html: &str, loader: &dyn FragmentLoader) -> DecorateResult {
        let metadata = PageMetadata::from_html(html);
        decorate::decorate_document(html, &self.registry, &self.context(&metadata, loader))
    }

    /// Read and decorate a page file.
    pub fn decorate_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let html = std::fs::read_to_string(path)?;
        Ok(self.decorate_page(&html))
    }

    /// Split a header or footer fragment into keyed sections.
    pub fn split_sections(&self, html: &str) -> SectionMap {
        parser::split_fragment(html, &self.parse_options)
    }

    /// Decorate a page, reading header and footer fragments without
    /// blocking.
    ///
    /// The fragments named by the page metadata are read first; decoration
    /// itself stays synchronous.
    #[cfg(feature = "async")]
    pub async fn decorate_page_async(&self, html: &str, loader: &DirectoryLoader) -> DecorateResult {
        let metadata = PageMetadata::from_html(html);
        let mut fragments = MemoryLoader::new();
        for key in ["header", "footer"] {
            let path = metadata.fragment_path(key);
            match loader.read_async(&path).await {
                Ok(fragment) => fragments.insert(&path, fragment),
                Err(e) => log::warn!("fragment {}: {}", path, e),
            }
        }
        self.decorate_with_loader(html, &fragments)
    }
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = r#"<div class="cards"><div>
        <div>Primary Care</div>
        <div><picture><img src="/media_1.png" alt="Doctor"></picture></div>
        <div><p>Checkups and screenings.</p></div>
        <div><a href="/primary-care">Learn More</a></div>
    </div></div>"#;

    #[test]
    fn test_decorator_defaults() {
        let decorator = Decorator::default();
        assert!(decorator.registry().supports("cards"));
        assert_eq!(decorator.options().card_cta_text, "Learn More");
    }

    #[test]
    fn test_decorate_block() {
        let decorated = decorate_block(CARDS).unwrap().unwrap();
        assert!(decorated.html.starts_with(r#"<ul class="usa-card-group">"#));
        assert_eq!(decorated.rows, 1);
    }

    #[test]
    fn test_decorate_block_html_wraps_block() {
        let html = Decorator::new().decorate_block_html(CARDS).unwrap();
        assert!(html.starts_with(r#"<div class="cards"><ul class="usa-card-group">"#));
    }

    #[test]
    fn test_undecorated_block_is_returned_unchanged() {
        let block = r#"<div class="hero"><div><div>Alt only</div></div></div>"#;
        assert_eq!(Decorator::new().decorate_block_html(block).unwrap(), block);
    }

    #[test]
    fn test_unknown_block_is_error() {
        let result = decorate_block(r#"<div class="carousel"><div><div>x</div></div></div>"#);
        assert!(matches!(result, Err(Error::UnknownBlock(_))));
    }

    #[test]
    fn test_inspect_block() {
        let report = Decorator::new().inspect_block(CARDS).unwrap();
        assert_eq!(report.variant, Some(Variant::Default));
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].heading.as_deref(), Some("Primary Care"));
    }

    #[test]
    fn test_decorate_file_missing() {
        let result = decorate_file("/nonexistent/index.html");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_split_sections() {
        let sections = split_sections("<h2>Brand</h2><p><a href=\"/\">Clinic</a></p><h2>Tools</h2><ul></ul>");
        assert_eq!(sections.keys().collect::<Vec<_>>(), vec!["brand", "tools"]);
    }
}
