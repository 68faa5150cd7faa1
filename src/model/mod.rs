//! Block content model.
//!
//! This module defines the transient types that bridge authored block markup
//! and rendered design-system markup. Everything here is created and
//! discarded within a single decoration pass.

mod container;
mod record;
mod section;

pub use container::{Cell, Container, ContentRow};
pub use record::{Action, ActionRole, ActionStyle, Media, ParsedRecord};
pub use section::{section_key, SectionMap};
