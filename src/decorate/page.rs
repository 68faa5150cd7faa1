//! Page-level driver: finds every block on a page and decorates it.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::model::Container;
use crate::nav::Accordion;
use crate::parser::container_from_element;
use crate::render::rewrite::{rewrite_document, Edit};
use crate::render::{build_banner, DecorateResult, DecorateStats};

use super::{BlockRegistry, DecorateContext, Decorated};

static BANNER_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.banner").expect("valid selector"));

/// Class suffixes the host adds to section wrappers.
const WRAPPER_SUFFIXES: &[&str] = &["-wrapper", "-container"];

/// Check whether an element sits where authored blocks live.
///
/// Blocks are `div`s with a class inside a section `div` that is a direct
/// child of `main`, optionally wrapped in a `<name>-wrapper` `div`.
pub fn is_block_candidate(element: ElementRef<'_>) -> bool {
    if element.value().name() != "div" {
        return false;
    }
    let Some(name) = block_name(element) else {
        return false;
    };
    if is_wrapper_name(name) {
        return false;
    }

    let mut parent = element.parent().and_then(ElementRef::wrap);
    if let Some(wrapper) = parent.filter(|p| block_name(*p).is_some_and(is_wrapper_name)) {
        parent = wrapper.parent().and_then(ElementRef::wrap);
    }
    let Some(section) = parent else {
        return false;
    };
    section.value().name() == "div"
        && section
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|main| main.value().name() == "main")
}

fn is_wrapper_name(name: &str) -> bool {
    WRAPPER_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn block_name(element: ElementRef<'_>) -> Option<&str> {
    element.value().attr("class")?.split_whitespace().next()
}

fn is_inside_main(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().name() == "main")
}

/// Decorate every block on a page.
///
/// One block failing never fails the page: its markup is kept and the
/// failure is counted.
pub fn decorate_document(html: &str, registry: &BlockRegistry, ctx: &DecorateContext<'_>) -> DecorateResult {
    let mut stats = DecorateStats::new();
    let needs_banner = ctx.options.auto_banner
        && registry.supports("banner")
        && Html::parse_document(html).select(&BANNER_BLOCK).next().is_none();

    let output = rewrite_document(html, |element| {
        let tag = element.value().name();

        if needs_banner && tag == "body" {
            let banner = build_banner(&Accordion::new(1), ctx.options);
            return Edit::Prepend(format!("<div class=\"banner\">{}</div>", banner.to_html()));
        }

        if matches!(tag, "header" | "footer") && !is_inside_main(element) {
            return page_region(tag, registry, ctx, &mut stats);
        }

        if !is_block_candidate(element) {
            return Edit::Keep;
        }
        let Some(name) = block_name(element) else {
            return Edit::Keep;
        };
        if !registry.supports(name) {
            log::debug!("no decorator for block {:?}", name);
            stats.add_unknown(name);
            return Edit::Keep;
        }

        match container_from_element(element) {
            Ok(container) => apply(&container, registry, ctx, &mut stats),
            Err(e) => {
                log::warn!("block {:?}: {}", name, e);
                stats.add_failed();
                Edit::Keep
            }
        }
    });

    log::debug!(
        "decorated {} of {} blocks ({} skipped, {} failed)",
        stats.decorated,
        stats.block_count,
        stats.skipped,
        stats.failed
    );
    DecorateResult::new(output, stats)
}

fn page_region(
    tag: &str,
    registry: &BlockRegistry,
    ctx: &DecorateContext<'_>,
    stats: &mut DecorateStats,
) -> Edit {
    if !registry.supports(tag) {
        return Edit::Keep;
    }
    apply(&Container::new(tag), registry, ctx, stats)
}

fn apply(
    container: &Container,
    registry: &BlockRegistry,
    ctx: &DecorateContext<'_>,
    stats: &mut DecorateStats,
) -> Edit {
    match registry.decorate(container, ctx) {
        Ok(Some(Decorated { html, classes, rows })) => {
            stats.add_decorated();
            stats.add_rows(rows);
            Edit::Replace {
                classes,
                inner_html: html,
            }
        }
        Ok(None) => {
            stats.add_skipped();
            Edit::Keep
        }
        Err(e) => {
            log::warn!("block {:?} failed: {}", container.name, e);
            stats.add_failed();
            Edit::Keep
        }
    }
}
