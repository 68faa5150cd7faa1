//! Built-in decorators, one per block.

use crate::detect::detect_variant;
use crate::error::Result;
use crate::model::{Container, ParsedRecord, SectionMap};
use crate::nav::{Accordion, MobileNav};
use crate::parser::{classify_row, data_rows, first_data_row, split_fragment, ColumnRole};
use crate::render::markup::to_html;
use crate::render::{
    build_banner, build_footer, build_hero, build_text, build_title, CardBuilder, HeaderContent,
    TextStyle,
};

use super::{BlockDecorator, BlockReport, DecorateContext, Decorated};

/// Column roles of the hero's content row.
pub const HERO_LAYOUT: &[ColumnRole] = &[
    ColumnRole::Callout,
    ColumnRole::Heading,
    ColumnRole::Body,
    ColumnRole::Actions,
];

/// Card group with variant detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardsDecorator;

impl CardsDecorator {
    fn records(container: &Container, ctx: &DecorateContext<'_>) -> Vec<ParsedRecord> {
        let variant = detect_variant(container);
        data_rows(container)
            .iter()
            .map(|row| classify_row(row, variant.layout(), &ctx.options.card_cta_text))
            .collect()
    }
}

impl BlockDecorator for CardsDecorator {
    fn name(&self) -> &str {
        "cards"
    }

    fn decorate(&self, container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let records = Self::records(container, ctx);
        if records.is_empty() {
            log::warn!("cards block has no rows");
            return Ok(None);
        }

        let variant = detect_variant(container);
        let group = CardBuilder::new(variant, ctx.options, ctx.images).build_group(&records);
        Ok(Some(Decorated::new(group.to_html()).with_rows(records.len())))
    }

    fn inspect(&self, container: &Container, ctx: &DecorateContext<'_>) -> BlockReport {
        BlockReport {
            container: container.clone(),
            variant: Some(detect_variant(container)),
            records: Self::records(container, ctx),
        }
    }
}

/// Hero section from the first content row.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroDecorator;

impl HeroDecorator {
    fn record(container: &Container, ctx: &DecorateContext<'_>) -> Option<ParsedRecord> {
        first_data_row(container).map(|row| classify_row(row, HERO_LAYOUT, &ctx.options.hero_cta_text))
    }
}

impl BlockDecorator for HeroDecorator {
    fn name(&self) -> &str {
        "hero"
    }

    fn decorate(&self, container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let Some(record) = Self::record(container, ctx) else {
            log::warn!("hero block has no rows");
            return Ok(None);
        };
        match build_hero(&record) {
            Some(hero) => Ok(Some(Decorated::new(hero.to_html()).with_rows(1))),
            None => {
                log::warn!("hero block has no heading");
                Ok(None)
            }
        }
    }

    fn inspect(&self, container: &Container, ctx: &DecorateContext<'_>) -> BlockReport {
        BlockReport {
            container: container.clone(),
            variant: None,
            records: Self::record(container, ctx).into_iter().collect(),
        }
    }
}

/// Government banner; authored content is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerDecorator;

impl BlockDecorator for BannerDecorator {
    fn name(&self) -> &str {
        "banner"
    }

    fn decorate(&self, _container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let banner = build_banner(&Accordion::new(1), ctx.options);
        Ok(Some(Decorated::new(banner.to_html())))
    }
}

/// Prose paragraphs with optional centering and intro sizing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecorator;

impl BlockDecorator for TextDecorator {
    fn name(&self) -> &str {
        "text"
    }

    fn decorate(&self, container: &Container, _ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let style = TextStyle {
            centered: container.has_class("center"),
            intro: container.has_class("intro"),
        };
        match build_text(&rows_html(container), style) {
            Some(html) => Ok(Some(
                Decorated::new(html)
                    .with_classes(style.block_classes())
                    .with_rows(container.row_count()),
            )),
            None => {
                log::warn!("text block has no paragraphs");
                Ok(None)
            }
        }
    }
}

/// Section title from the first `h1`-`h3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleDecorator;

impl BlockDecorator for TitleDecorator {
    fn name(&self) -> &str {
        "title"
    }

    fn decorate(&self, container: &Container, _ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let centered = container.has_class("center");
        let Some(title) = build_title(&rows_html(container), centered) else {
            log::warn!("title block has no heading");
            return Ok(None);
        };

        let classes = if centered {
            vec!["text-center".to_string()]
        } else {
            Vec::new()
        };
        Ok(Some(Decorated::new(title.to_html()).with_classes(classes)))
    }
}

/// Extended header built from the header fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecorator;

impl BlockDecorator for HeaderDecorator {
    fn name(&self) -> &str {
        "header"
    }

    fn decorate(&self, _container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let Some(sections) = load_sections("header", ctx) else {
            return Ok(None);
        };
        let Some(content) = HeaderContent::from_sections(&sections) else {
            log::warn!("header fragment has neither brand nor sections");
            return Ok(None);
        };

        let nodes = content.render(ctx.options, &MobileNav::new(), &content.accordion());
        Ok(Some(Decorated::new(to_html(&nodes)).with_rows(sections.len())))
    }
}

/// Big footer built from the footer fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterDecorator;

impl BlockDecorator for FooterDecorator {
    fn name(&self) -> &str {
        "footer"
    }

    fn decorate(&self, _container: &Container, ctx: &DecorateContext<'_>) -> Result<Option<Decorated>> {
        let Some(sections) = load_sections("footer", ctx) else {
            return Ok(None);
        };
        let footer = build_footer(&sections, ctx.options);
        Ok(Some(Decorated::new(footer.to_html()).with_rows(sections.len())))
    }
}

fn load_sections(key: &str, ctx: &DecorateContext<'_>) -> Option<SectionMap> {
    let path = ctx.metadata.fragment_path(key);
    let html = ctx.loader.load(&path)?;
    let sections = split_fragment(&html, ctx.parse_options);
    if sections.is_empty() {
        log::warn!("{} fragment {} has no sections", key, path);
        return None;
    }
    log::debug!("{} fragment {}: {} sections", key, path, sections.len());
    Some(sections)
}

/// Authored block content, one `div` per row and per cell.
fn rows_html(container: &Container) -> String {
    let mut html = String::new();
    for row in &container.rows {
        html.push_str("<div>");
        for cell in &row.cells {
            html.push_str("<div>");
            html.push_str(cell.inner_html());
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{MemoryLoader, PageMetadata};
    use crate::model::ContentRow;
    use crate::parser::ParseOptions;
    use crate::render::{OptimizedPicture, RenderOptions};

    fn text_container(classes: &[&str], cells: &[&str]) -> Container {
        let mut container = Container::new("text");
        for class in classes {
            container.add_class(*class);
        }
        container.with_row(ContentRow::from_html(cells.iter().copied()))
    }

    #[test]
    fn test_text_intro_centered() {
        let container = text_container(&["center", "intro"], &["<p>Welcome</p>"]);
        let decorated = TextDecorator
            .decorate(&container, &DecorateContext::default())
            .unwrap()
            .unwrap();
        assert!(decorated
            .html
            .contains(r#"<p class="usa-prose usa-intro text-center">Welcome</p>"#));
        assert_eq!(decorated.classes, vec!["text-center", "intro"]);
    }

    #[test]
    fn test_text_without_paragraphs_is_skipped() {
        let container = text_container(&[], &["just text"]);
        let result = TextDecorator.decorate(&container, &DecorateContext::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_title_centered() {
        let container = Container::new("title")
            .with_class("center")
            .with_row(ContentRow::from_html(["<h2 id=\"our-services\">Our Services</h2><p>x</p>"]));
        let decorated = TitleDecorator
            .decorate(&container, &DecorateContext::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            decorated.html,
            r#"<h2 id="our-services" class="usa-prose text-center title-h2">Our Services</h2>"#
        );
        assert_eq!(decorated.classes, vec!["text-center"]);
    }

    #[test]
    fn test_hero_without_heading_is_skipped() {
        let container = Container::new("hero").with_row(ContentRow::from_html(["Alt", "", "<p>Body</p>"]));
        let result = HeroDecorator.decorate(&container, &DecorateContext::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_cards_inspect_reports_variant() {
        let container = Container::new("cards").with_class("flag").with_row(ContentRow::from_html([
            "Title",
            "",
            "<p>Body</p>",
            "",
        ]));
        let report = CardsDecorator.inspect(&container, &DecorateContext::default());
        assert_eq!(report.variant, Some(crate::detect::Variant::Flag));
        assert_eq!(report.records[0].heading.as_deref(), Some("Title"));
    }

    #[test]
    fn test_footer_from_loader() {
        let loader = MemoryLoader::new().with_fragment(
            "/nav/footer",
            "<h2>Services</h2><ul><li><a href=\"/care\">Care</a></li></ul><h2>Legal</h2><ul><li><a href=\"/privacy\">Privacy</a></li></ul>",
        );
        let metadata = PageMetadata::new().with("footer", "/nav/footer");
        let options = RenderOptions::default().with_copyright_year(2025);
        let parse_options = ParseOptions::default();
        let ctx = DecorateContext {
            options: &options,
            parse_options: &parse_options,
            images: &OptimizedPicture,
            loader: &loader,
            metadata: &metadata,
        };

        let decorated = FooterDecorator
            .decorate(&Container::new("footer"), &ctx)
            .unwrap()
            .unwrap();
        assert!(decorated.html.starts_with(r#"<footer class="usa-footer usa-footer--big">"#));
        assert!(decorated.html.contains("Care"));
        assert!(decorated.html.contains("© 2025 Community Health Clinic"));
    }

    #[test]
    fn test_header_without_fragment_is_skipped() {
        let result = HeaderDecorator
            .decorate(&Container::new("header"), &DecorateContext::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_rows_html() {
        let container = Container::new("text").with_row(ContentRow::from_html(["<p>a</p>", "b"]));
        assert_eq!(rows_html(&container), "<div><div><p>a</p></div><div>b</div></div>");
    }
}
