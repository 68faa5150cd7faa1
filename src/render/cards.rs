//! USWDS card markup.

use super::actions::{render_actions, RolePolicy};
use super::image::ImageBuilder;
use super::markup::Element;
use super::RenderOptions;
use crate::detect::Variant;
use crate::model::{Media, ParsedRecord};

/// Grid classes every card carries.
const CARD_CLASSES: &str = "usa-card tablet-lg:grid-col-6 widescreen:grid-col-4";

/// Builds card markup for one variant.
pub struct CardBuilder<'a> {
    variant: Variant,
    options: &'a RenderOptions,
    images: &'a dyn ImageBuilder,
}

impl<'a> CardBuilder<'a> {
    /// Create a builder.
    pub fn new(variant: Variant, options: &'a RenderOptions, images: &'a dyn ImageBuilder) -> Self {
        Self {
            variant,
            options,
            images,
        }
    }

    /// Build the card group for a set of records.
    pub fn build_group(&self, records: &[ParsedRecord]) -> Element {
        Element::new("ul")
            .class("usa-card-group")
            .children(records.iter().map(|record| self.build_card(record)))
    }

    /// Build one card: header, media, body, then footer, omitting empty parts.
    pub fn build_card(&self, record: &ParsedRecord) -> Element {
        let container = Element::new("div")
            .class("usa-card__container")
            .child_opt(self.header(record))
            .child_opt(self.media(record))
            .child_opt(body(record))
            .child_opt(footer(record));

        Element::new("li").class(card_classes(self.variant)).child(container)
    }

    fn header(&self, record: &ParsedRecord) -> Option<Element> {
        let featured = self.variant == Variant::Featured;
        let tag = record.tag.as_deref().filter(|_| featured);
        let time = record.time.as_deref().filter(|_| featured);
        if record.heading.is_none() && tag.is_none() && time.is_none() {
            return None;
        }

        let mut header = Element::new("div").class("usa-card__header");
        if let Some(tag) = tag {
            header.push(Element::new("span").class("usa-tag").text(tag));
        }
        if let Some(heading) = &record.heading {
            let level = self.options.card_heading_level.clamp(1, 6);
            header.push(
                Element::new(format!("h{}", level))
                    .class("usa-card__heading")
                    .text(heading.as_str()),
            );
        }
        if let Some(time) = time {
            header.push(
                Element::new("span")
                    .class("usa-card__badge")
                    .child(Element::new("time").text(time)),
            );
        }
        Some(header)
    }

    fn media(&self, record: &ParsedRecord) -> Option<Element> {
        let media = record.media.as_ref()?;
        let class = match self.variant {
            Variant::Inset => "usa-card__media usa-card__media--inset",
            Variant::Exdent => "usa-card__media usa-card__media--exdent",
            _ => "usa-card__media",
        };

        let content = match media {
            Media::Image { src, alt } => {
                let alt = alt
                    .as_deref()
                    .or(record.heading.as_deref())
                    .unwrap_or("Card image");
                Element::new("div").class("usa-card__img").child(self.images.build(
                    src,
                    alt,
                    false,
                    &self.options.card_image_widths,
                ))
            }
            Media::Icon { name } => Element::new("div")
                .class("usa-card__img usa-card__icon")
                .child(sprite_icon(&self.options.sprite_href(name))),
        };

        Some(Element::new("div").class(class).child(content))
    }
}

fn body(record: &ParsedRecord) -> Option<Element> {
    let body = record.body.as_deref()?;
    Some(Element::new("div").class("usa-card__body").raw(body))
}

fn footer(record: &ParsedRecord) -> Option<Element> {
    if record.actions.is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .class("usa-card__footer")
            .children(render_actions(&record.actions, RolePolicy::Positional)),
    )
}

/// Classes for the card list item.
pub fn card_classes(variant: Variant) -> String {
    let modifier = match variant {
        Variant::Featured => "usa-card--featured",
        Variant::Compact => "usa-card--compact",
        Variant::Flag => "usa-card--flag",
        Variant::FlagRight => "usa-card--flag usa-card--media-right",
        Variant::Default | Variant::Inset | Variant::Exdent => return CARD_CLASSES.to_string(),
    };
    format!("{} {}", CARD_CLASSES, modifier)
}

/// An icon drawn from the sprite sheet.
pub fn sprite_icon(href: &str) -> Element {
    Element::new("svg")
        .class("usa-icon usa-icon--size-5")
        .attr("aria-hidden", "true")
        .attr("focusable", "false")
        .attr("role", "img")
        .child(Element::new("use").attr("href", href))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Action;
    use crate::render::OptimizedPicture;

    fn record() -> ParsedRecord {
        ParsedRecord {
            heading: Some("Primary Care".to_string()),
            body: Some("<p>Routine visits</p>".to_string()),
            media: Some(Media::image("/media/care.jpg")),
            actions: vec![Action::button("/care", "Learn More")],
            ..Default::default()
        }
    }

    #[test]
    fn test_fragment_order() {
        let options = RenderOptions::default();
        let html = CardBuilder::new(Variant::Default, &options, &OptimizedPicture)
            .build_card(&record())
            .to_html();

        let header = html.find("usa-card__header").unwrap();
        let media = html.find("usa-card__media").unwrap();
        let body = html.find("usa-card__body").unwrap();
        let footer = html.find("usa-card__footer").unwrap();
        assert!(header < media && media < body && body < footer);
        assert!(html.contains(r#"<h4 class="usa-card__heading">Primary Care</h4>"#));
        assert!(html.contains(r#"alt="Primary Care""#));
    }

    #[test]
    fn test_empty_parts_omitted() {
        let options = RenderOptions::default();
        let html = CardBuilder::new(Variant::Default, &options, &OptimizedPicture)
            .build_card(&ParsedRecord::default())
            .to_html();
        assert_eq!(
            html,
            format!(r#"<li class="{}"><div class="usa-card__container"></div></li>"#, CARD_CLASSES)
        );
    }

    #[test]
    fn test_variant_classes() {
        assert!(card_classes(Variant::FlagRight).ends_with("usa-card--flag usa-card--media-right"));
        assert_eq!(card_classes(Variant::Inset), CARD_CLASSES);

        let options = RenderOptions::default();
        let html = CardBuilder::new(Variant::Exdent, &options, &OptimizedPicture)
            .build_card(&record())
            .to_html();
        assert!(html.contains("usa-card__media usa-card__media--exdent"));
    }

    #[test]
    fn test_featured_header_and_icon() {
        let options = RenderOptions::default();
        let record = ParsedRecord {
            heading: Some("Flu Clinic".to_string()),
            tag: Some("New".to_string()),
            time: Some("Oct 1".to_string()),
            media: Some(Media::icon("local_hospital")),
            ..Default::default()
        };
        let html = CardBuilder::new(Variant::Featured, &options, &OptimizedPicture)
            .build_card(&record)
            .to_html();

        assert!(html.contains(r#"<span class="usa-tag">New</span>"#));
        assert!(html.contains(r#"<span class="usa-card__badge"><time>Oct 1</time></span>"#));
        assert!(html.contains(r#"<use href="/assets/img/sprite.svg#local_hospital"></use>"#));
    }

    #[test]
    fn test_tag_ignored_outside_featured() {
        let options = RenderOptions::default();
        let record = ParsedRecord {
            tag: Some("New".to_string()),
            ..Default::default()
        };
        let html = CardBuilder::new(Variant::Default, &options, &OptimizedPicture)
            .build_card(&record)
            .to_html();
        assert!(!html.contains("usa-card__header"));
    }
}
