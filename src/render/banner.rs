//! The official government website banner.

use super::markup::{Element, Node};
use super::RenderOptions;
use crate::nav::Accordion;

/// Id tying the disclosure button to its content.
pub const BANNER_CONTENT_ID: &str = "gov-banner-default";

const LOCK_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="52" height="64" viewBox="0 0 52 64" "#,
    r#"class="usa-banner__lock-image" role="img" aria-labelledby="banner-lock-description" focusable="false">"#,
    r#"<title id="banner-lock-description">Lock</title><desc>Locked padlock icon</desc>"#,
    r##"<path fill="#000000" fill-rule="evenodd" d="M26 0c10.493 0 19 8.507 19 19v9h3a4 4 0 0 1 4 4v28a4 4 0 0 1-4 4H4a4 4 0 0 1-4-4V32a4 4 0 0 1 4-4h3v-9C7 8.507 15.507 0 26 0zm0 8c-5.979 0-10.843 4.77-10.996 10.712L15 19v9h22v-9c0-6.075-4.925-11-11-11z"/></svg>"##
);

/// Build the banner with its disclosure in the given state.
///
/// The disclosure is a one-item [`Accordion`]; item 0 expanded shows the
/// guidance.
pub fn build_banner(disclosure: &Accordion, options: &RenderOptions) -> Element {
    let expanded = disclosure.is_expanded(0);

    let flag = Element::new("div")
        .class("usa-banner__header-flag grid-col-auto")
        .child(
            Element::new("img")
                .class("usa-banner__header-flag-img")
                .attr("src", options.icon_url("us_flag"))
                .attr("alt", "U.S. flag")
                .attr("aria-hidden", "true"),
        );

    let text = Element::new("div")
        .class("usa-banner__header-text grid-col-fill tablet:grid-col-auto")
        .attr("aria-hidden", "true")
        .text("An official website of the United States government");

    let button = Element::new("button")
        .attr("type", "button")
        .class("usa-accordion__button usa-banner__button")
        .attr("aria-expanded", expanded.to_string())
        .attr("aria-controls", BANNER_CONTENT_ID)
        .child(
            Element::new("span")
                .class("usa-banner__button-text")
                .text("Here's how you know"),
        );

    let header = Element::new("div").class("usa-banner__header").child(
        Element::new("div").class("usa-banner__inner").child(
            Element::new("div")
                .class("grid-row grid-gap-sm")
                .child(flag)
                .child(text)
                .child(Element::new("div").class("usa-banner__header-action grid-col-auto").child(button)),
        ),
    );

    let dot_gov = guidance(
        &options.icon_url("icon-dot-gov"),
        Element::new("p")
            .child(Element::new("strong").text("Official websites use .gov"))
            .child(Element::new("br"))
            .text("A ")
            .child(Element::new("strong").text(".gov"))
            .text(" website belongs to an official government organization in the United States."),
    );

    let https = guidance(
        &options.icon_url("icon-https"),
        Element::new("p")
            .child(Element::new("strong").text("Secure .gov websites use HTTPS"))
            .child(Element::new("br"))
            .text("A ")
            .child(Element::new("strong").text("lock"))
            .text(" (")
            .child(Element::new("span").class("icon-lock").child(Node::raw(LOCK_SVG)))
            .text(") or ")
            .child(Element::new("strong").text("https://"))
            .text(" means you've safely connected to the .gov website. Share sensitive information only on official, secure websites."),
    );

    let content = Element::new("div")
        .class("usa-banner__content usa-accordion__content")
        .attr("id", BANNER_CONTENT_ID)
        .flag_if("hidden", !expanded)
        .child(Element::new("div").class("grid-row grid-gap-lg").child(dot_gov).child(https));

    Element::new("section")
        .class("usa-banner")
        .attr("aria-label", "Official website of the United States government")
        .child(header)
        .child(content)
}

fn guidance(icon: &str, text: Element) -> Element {
    Element::new("div")
        .class("usa-banner__guidance tablet:grid-col-6")
        .child(
            Element::new("img")
                .class("usa-banner__icon usa-media-block__img")
                .attr("src", icon)
                .attr("role", "img")
                .attr("alt", "")
                .attr("aria-hidden", "true"),
        )
        .child(Element::new("div").class("usa-media-block__body").child(text))
}
