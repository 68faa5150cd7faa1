//! Integration tests for the decorator registry.

use std::sync::Arc;

use uswds_blocks::decorate::{CardsDecorator, HeroDecorator};
use uswds_blocks::error::Result;
use uswds_blocks::{
    BlockDecorator, BlockRegistry, Container, DecorateContext, Decorated, Decorator, Error,
};

/// Mock decorator for testing.
struct MockDecorator {
    name: &'static str,
    fail: bool,
}

impl MockDecorator {
    fn new(name: &'static str) -> Self {
        Self { name, fail: false }
    }

    fn failing(name: &'static str) -> Self {
        Self { name, fail: true }
    }
}

impl BlockDecorator for MockDecorator {
    fn name(&self) -> &str {
        self.name
    }

    fn decorate(&self, container: &Container, _ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        if self.fail {
            return Err(Error::Render(format!("{} exploded", self.name)));
        }
        Ok(Some(
            Decorated::new(format!("<p>Decorated by {} ({} rows)</p>", self.name, container.row_count()))
                .with_classes(vec!["mocked".to_string()]),
        ))
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = BlockRegistry::new();
    assert!(registry.names().is_empty());
    assert!(registry.get("cards").is_none());
}

#[test]
fn test_registry_register_and_get() {
    let mut registry = BlockRegistry::new();
    registry.register(Arc::new(CardsDecorator));
    registry.register(Arc::new(HeroDecorator));

    assert!(registry.supports("cards"));
    assert!(registry.supports("HERO"));
    assert_eq!(registry.get("hero").unwrap().name(), "hero");
    assert_eq!(registry.names(), vec!["cards", "hero"]);
}

#[test]
fn test_registry_replaces_by_name() {
    let mut registry = BlockRegistry::with_defaults();
    registry.register(Arc::new(MockDecorator::new("cards")));

    let container = Container::new("cards");
    let decorated = registry
        .decorate(&container, &DecorateContext::default())
        .unwrap()
        .unwrap();
    assert_eq!(decorated.html, "<p>Decorated by cards (0 rows)</p>");
    assert_eq!(registry.names().len(), 7);
}

#[test]
fn test_registry_default_matches_with_defaults() {
    assert_eq!(BlockRegistry::default().names(), BlockRegistry::with_defaults().names());
}

#[test]
fn test_custom_block_on_page() {
    let decorator = Decorator::new().with_decorator(Arc::new(MockDecorator::new("quote")));
    let page = r#"<html><body><main><div><div class="quote"><div><div>Great care.</div></div></div></div></main></body></html>"#;

    let result = decorator.decorate_page_with_stats(page);
    assert!(result
        .html
        .contains(r#"<div class="quote mocked"><p>Decorated by quote (1 rows)</p></div>"#));
    assert_eq!(result.stats.decorated, 1);
    assert!(result.stats.unknown.is_empty());
}

#[test]
fn test_failing_block_keeps_markup() {
    let decorator = Decorator::new().with_decorator(Arc::new(MockDecorator::failing("quote")));
    let page = r#"<html><body><main><div>
        <div class="quote"><div><div>Great care.</div></div></div>
        <div class="title"><div><div><h1>Welcome</h1></div></div></div>
    </div></main></body></html>"#;

    let result = decorator.decorate_page_with_stats(page);
    assert!(result.html.contains(r#"<div class="quote"><div><div>Great care.</div></div></div>"#));
    assert!(result.html.contains("title-h1"));
    assert_eq!(result.stats.failed, 1);
    assert_eq!(result.stats.decorated, 1);
}

#[test]
fn test_decorate_block_with_failing_decorator() {
    let decorator = Decorator::new().with_decorator(Arc::new(MockDecorator::failing("quote")));
    let result = decorator.decorate_block(r#"<div class="quote"><div><div>x</div></div></div>"#);
    assert!(matches!(result, Err(Error::Render(_))));
}
