//! Rendering module for building design-system markup.

mod actions;
mod banner;
mod cards;
mod footer;
mod header;
mod hero;
mod image;
mod json;
pub mod markup;
mod options;
mod result;
pub mod rewrite;
mod text;

pub use actions::{action_role, assign_roles, render_actions, RolePolicy};
pub use banner::{build_banner, BANNER_CONTENT_ID};
pub use cards::{card_classes, sprite_icon, CardBuilder};
pub use footer::{build_footer, copyright_text, social_icon, LEGAL_KEYS};
pub use header::{tool_icon, Brand, HeaderContent, NavItem, NAV_ID};
pub use hero::build_hero;
pub use image::{ImageBuilder, ImageWidth, OptimizedPicture};
pub use json::{to_json, JsonFormat};
pub use markup::{Element, Node};
pub use options::{IdentifierDefaults, RenderOptions, DEFAULT_CARD_CTA, DEFAULT_HERO_CTA};
pub use result::{DecorateResult, DecorateStats};
pub use text::{build_text, build_title, TextStyle};
