//! Responsive image building.
//!
//! The host platform normally owns image optimization; decorators only ask
//! an [`ImageBuilder`] for a `<picture>` and place it where it belongs.

use serde::{Deserialize, Serialize};

use super::markup::{Element, Node};
use crate::parser::relativize_href;

/// One breakpoint hint for a responsive image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageWidth {
    /// Media query the source applies to (last hint has none)
    pub media: Option<String>,
    /// Requested width in pixels
    pub width: u32,
}

impl ImageWidth {
    /// A width with no media query.
    pub fn new(width: u32) -> Self {
        Self { media: None, width }
    }

    /// A width applying from a minimum viewport width.
    pub fn min_width(viewport: &str, width: u32) -> Self {
        Self {
            media: Some(format!("(min-width: {})", viewport)),
            width,
        }
    }

    /// The platform's default hints: 2000px on wide screens, 750px otherwise.
    pub fn defaults() -> Vec<ImageWidth> {
        vec![ImageWidth::min_width("600px", 2000), ImageWidth::new(750)]
    }
}

/// Builds responsive image markup from a raw image reference.
pub trait ImageBuilder: Send + Sync {
    /// Build markup for `src` with the given alt text and width hints.
    fn build(&self, src: &str, alt: &str, eager: bool, widths: &[ImageWidth]) -> Node;
}

/// Emits `<picture>` markup using the platform's query-string resizing.
#[derive(Debug, Clone, Default)]
pub struct OptimizedPicture;

impl OptimizedPicture {
    /// Create the builder.
    pub fn new() -> Self {
        Self
    }
}

impl ImageBuilder for OptimizedPicture {
    fn build(&self, src: &str, alt: &str, eager: bool, widths: &[ImageWidth]) -> Node {
        let path = image_path(src);
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
            .unwrap_or("jpeg");

        let default_widths;
        let widths = if widths.is_empty() {
            default_widths = ImageWidth::defaults();
            &default_widths[..]
        } else {
            widths
        };

        let mut picture = Element::new("picture");

        for hint in widths {
            let source = Element::new("source")
                .attr("type", "image/webp")
                .attr("srcset", variant_url(&path, hint.width, "webply"));
            picture.push(with_media(source, hint));
        }

        let (last, rest) = match widths.split_last() {
            Some(split) => split,
            None => return picture.into(),
        };
        for hint in rest {
            let source = Element::new("source").attr("srcset", variant_url(&path, hint.width, ext));
            picture.push(with_media(source, hint));
        }
        picture.push(
            Element::new("img")
                .attr("loading", if eager { "eager" } else { "lazy" })
                .attr("alt", alt)
                .attr("src", variant_url(&path, last.width, ext)),
        );

        picture.into()
    }
}

fn with_media(source: Element, hint: &ImageWidth) -> Element {
    match &hint.media {
        Some(media) => source.attr("media", media.as_str()),
        None => source,
    }
}

fn variant_url(path: &str, width: u32, format: &str) -> String {
    format!("{}?width={}&format={}&optimize=medium", path, width, format)
}

/// Strip the query and fragment; preview/live URLs become site paths.
fn image_path(src: &str) -> String {
    let src = src.trim();
    let end = src.find(['?', '#']).unwrap_or(src.len());
    relativize_href(&src[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimized_picture() {
        let html = OptimizedPicture::new()
            .build("./media_123.png?width=100", "Clinic", false, &ImageWidth::defaults())
            .to_html();

        assert!(html.starts_with("<picture>"));
        assert!(html.contains(r#"<source type="image/webp" srcset="./media_123.png?width=2000&amp;format=webply&amp;optimize=medium" media="(min-width: 600px)">"#));
        assert!(html.contains(r#"<source srcset="./media_123.png?width=2000&amp;format=png&amp;optimize=medium" media="(min-width: 600px)">"#));
        assert!(html.contains(r#"<img loading="lazy" alt="Clinic" src="./media_123.png?width=750&amp;format=png&amp;optimize=medium">"#));
    }

    #[test]
    fn test_eager_single_width() {
        let html = OptimizedPicture::new()
            .build("https://main--a--b.aem.live/hero.jpg", "", true, &[ImageWidth::new(750)])
            .to_html();
        assert!(html.contains(r#"loading="eager""#));
        assert!(html.contains(r#"src="/hero.jpg?width=750&amp;format=jpg&amp;optimize=medium""#));
    }

    #[test]
    fn test_empty_widths_use_defaults() {
        let html = OptimizedPicture::new().build("/a.webp", "", false, &[]).to_html();
        assert!(html.contains("width=2000"));
        assert!(html.contains("width=750"));
    }
}
