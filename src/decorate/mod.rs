//! Block decorators with a registry keyed by block name.
//!
//! Each block name has one [`BlockDecorator`]. The registry dispatches a
//! parsed [`Container`] to the matching decorator, and the page driver runs
//! every block found in a page through it.
//!
//! # Example
//!
//! ```
//! use uswds_blocks::decorate::{BlockRegistry, DecorateContext};
//! use uswds_blocks::parser::parse_block;
//!
//! fn main() -> uswds_blocks::Result<()> {
//!     let registry = BlockRegistry::with_defaults();
//!     let container = parse_block(r#"<div class="title"><div><div><h2>Services</h2></div></div></div>"#)?;
//!
//!     let decorated = registry.decorate(&container, &DecorateContext::default())?;
//!     assert!(decorated.unwrap().html.contains("title-h2"));
//!     Ok(())
//! }
//! ```

mod blocks;
mod page;

pub use blocks::{
    BannerDecorator, CardsDecorator, FooterDecorator, HeaderDecorator, HeroDecorator,
    TextDecorator, TitleDecorator, HERO_LAYOUT,
};
pub use page::{decorate_document, is_block_candidate};

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::detect::Variant;
use crate::error::{Error, Result};
use crate::fragment::{FragmentLoader, NoFragments, PageMetadata};
use crate::model::{Container, ParsedRecord};
use crate::parser::ParseOptions;
use crate::render::{ImageBuilder, OptimizedPicture, RenderOptions};

/// Everything a decorator may consult besides the container itself.
pub struct DecorateContext<'a> {
    /// Rendering options
    pub options: &'a RenderOptions,
    /// Parsing options for fragments
    pub parse_options: &'a ParseOptions,
    /// Responsive image builder
    pub images: &'a dyn ImageBuilder,
    /// Fragment source for header and footer
    pub loader: &'a dyn FragmentLoader,
    /// Page metadata naming fragment paths
    pub metadata: &'a PageMetadata,
}

static DEFAULT_RENDER: std::sync::LazyLock<RenderOptions> = std::sync::LazyLock::new(RenderOptions::default);
static DEFAULT_PARSE: std::sync::LazyLock<ParseOptions> = std::sync::LazyLock::new(ParseOptions::default);
static DEFAULT_METADATA: std::sync::LazyLock<PageMetadata> = std::sync::LazyLock::new(PageMetadata::default);

impl Default for DecorateContext<'static> {
    fn default() -> Self {
        Self {
            options: &DEFAULT_RENDER,
            parse_options: &DEFAULT_PARSE,
            images: &OptimizedPicture,
            loader: &NoFragments,
            metadata: &DEFAULT_METADATA,
        }
    }
}

/// Replacement markup for one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorated {
    /// New inner markup of the block element
    pub html: String,
    /// Classes to add to the block element
    pub classes: Vec<String>,
    /// Rows classified while decorating
    pub rows: usize,
}

impl Decorated {
    /// Create a result from inner markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Default::default()
        }
    }

    /// Add classes for the block element.
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    /// Record how many rows were classified.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Wrap the markup in the block element it replaces.
    pub fn to_block_html(&self, container: &Container) -> String {
        let mut classes = vec![container.name.clone()];
        classes.extend(container.classes.iter().cloned());
        for class in &self.classes {
            if !classes.contains(class) {
                classes.push(class.clone());
            }
        }
        format!(
            "<div class=\"{}\">{}</div>",
            html_escape::encode_double_quoted_attribute(&classes.join(" ")),
            self.html
        )
    }
}

/// What a decorator read from a block, for inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockReport {
    /// The parsed container
    pub container: Container,
    /// Selected layout variant, for blocks that have one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    /// One record per data row
    pub records: Vec<ParsedRecord>,
}

impl BlockReport {
    /// A report with no records.
    pub fn empty(container: &Container) -> Self {
        Self {
            container: container.clone(),
            variant: None,
            records: Vec::new(),
        }
    }
}

/// Trait for block decorators.
///
/// Implement this trait to add support for a new block.
pub trait BlockDecorator: Send + Sync {
    /// Block name this decorator handles (lowercase).
    fn name(&self) -> &str;

    /// Decorate a block.
    ///
    /// `Ok(None)` means required content was missing and the block should be
    /// left untouched.
    fn decorate(&self, container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>>;

    /// Report what the decorator reads from a block without rendering.
    fn inspect(&self, container: &Container, _ctx: &DecorateContext<'_>) -> BlockReport {
        BlockReport::empty(container)
    }
}

/// Registry for block decorators.
pub struct BlockRegistry {
    decorators: HashMap<String, Arc<dyn BlockDecorator>>,
}

impl BlockRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            decorators: HashMap::new(),
        }
    }

    /// Create a registry with every built-in block.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(BannerDecorator));
        registry.register(Arc::new(CardsDecorator));
        registry.register(Arc::new(FooterDecorator));
        registry.register(Arc::new(HeaderDecorator));
        registry.register(Arc::new(HeroDecorator));
        registry.register(Arc::new(TextDecorator));
        registry.register(Arc::new(TitleDecorator));
        registry
    }

    /// Register a decorator, replacing any with the same name.
    pub fn register(&mut self, decorator: Arc<dyn BlockDecorator>) {
        self.decorators
            .insert(decorator.name().to_lowercase(), decorator);
    }

    /// Get a decorator by block name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn BlockDecorator>> {
        self.decorators.get(&name.to_lowercase()).cloned()
    }

    /// Check if a block name is registered.
    pub fn supports(&self, name: &str) -> bool {
        self.decorators.contains_key(&name.to_lowercase())
    }

    /// Registered block names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.decorators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Decorate a container with its registered decorator.
    pub fn decorate(&self, container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let decorator = self
            .get(&container.name)
            .ok_or_else(|| Error::UnknownBlock(container.name.clone()))?;
        decorator.decorate(container, ctx)
    }

    /// Inspect a container with its registered decorator.
    pub fn inspect(&self, container: &Container, ctx: &DecorateContext<'_>) -> Result<BlockReport> {
        let decorator = self
            .get(&container.name)
            .ok_or_else(|| Error::UnknownBlock(container.name.clone()))?;
        Ok(decorator.inspect(container, ctx))
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
