//! USWDS hero markup.

use super::actions::{render_actions, RolePolicy};
use super::markup::Element;
use crate::model::ParsedRecord;

/// Build a hero section.
///
/// Returns `None` when the record has no heading.
pub fn build_hero(record: &ParsedRecord) -> Option<Element> {
    let heading = record.heading.as_deref()?;

    let h1 = Element::new("h1")
        .class("usa-hero__heading")
        .child_opt(
            record
                .callout
                .as_deref()
                .map(|callout| Element::new("span").class("usa-hero__heading--alt").text(callout)),
        )
        .text(heading);

    let callout = Element::new("div")
        .class("usa-hero__callout")
        .child(h1)
        .child_opt(record.body.as_deref().map(|body| Element::new("p").raw(body)))
        .children(render_actions(&record.actions, RolePolicy::StyleAware));

    Some(
        Element::new("section")
            .class("usa-hero")
            .attr("aria-label", "Introduction")
            .child(Element::new("div").class("grid-container").child(callout)),
    )
}
