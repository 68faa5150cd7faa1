//! Interaction state for the header navigation and disclosures.
//!
//! Toggle state lives in explicit values with pure transition functions.
//! Builders read the state to render `aria-expanded`, `hidden`, and
//! visibility classes; side effects are returned to the caller instead of
//! being applied here.

use serde::{Deserialize, Serialize};

/// Mobile navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavState {
    /// Menu hidden
    #[default]
    Closed,
    /// Menu shown over the page
    Open,
}

/// Inputs the mobile navigation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    /// The menu button was activated
    MenuButton,
    /// The close button was activated
    CloseButton,
    /// The overlay behind the menu was activated
    Overlay,
    /// Escape was pressed
    Escape,
    /// The viewport crossed the desktop breakpoint
    Breakpoint {
        /// Whether the viewport is now desktop width
        desktop: bool,
    },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEffect {
    /// Suppress page scrolling
    LockScroll,
    /// Restore page scrolling
    RestoreScroll,
    /// Move focus to the close button
    FocusCloseButton,
}

/// Attribute values derived from a navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAttributes {
    /// `aria-expanded` on the menu button
    pub aria_expanded: bool,
    /// Class added to the nav and overlay
    pub visible_class: Option<&'static str>,
    /// Inline `overflow` on the body
    pub body_overflow: Option<&'static str>,
}

/// Compute the next state and its effects.
pub fn transition(state: NavState, event: NavEvent) -> (NavState, Vec<NavEffect>) {
    use NavEvent::*;
    match (state, event) {
        (NavState::Closed, MenuButton) => (
            NavState::Open,
            vec![NavEffect::LockScroll, NavEffect::FocusCloseButton],
        ),
        (NavState::Open, MenuButton | CloseButton | Overlay | Escape | Breakpoint { desktop: true }) => {
            (NavState::Closed, vec![NavEffect::RestoreScroll])
        }
        (state, _) => (state, Vec::new()),
    }
}

/// The header's mobile navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    state: NavState,
}

impl MobileNav {
    /// Create a closed navigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Check if the menu is open.
    pub fn is_open(&self) -> bool {
        self.state == NavState::Open
    }

    /// Apply an event, returning the effects to perform.
    pub fn dispatch(&mut self, event: NavEvent) -> Vec<NavEffect> {
        let (next, effects) = transition(self.state, event);
        if next != self.state {
            log::debug!("mobile nav {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        effects
    }

    /// Project the state onto attributes.
    pub fn attributes(&self) -> NavAttributes {
        match self.state {
            NavState::Open => NavAttributes {
                aria_expanded: true,
                visible_class: Some("is-visible"),
                body_overflow: Some("hidden"),
            },
            NavState::Closed => NavAttributes {
                aria_expanded: false,
                visible_class: None,
                body_overflow: None,
            },
        }
    }
}

/// A group of disclosure items with at most one expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    /// Create an accordion of `len` collapsed items.
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the expanded item.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Check whether item `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle item `index`, collapsing any other.
    ///
    /// Returns false when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    /// Collapse every item.
    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }
}
