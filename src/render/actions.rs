//! Call-to-action rendering.

use serde::{Deserialize, Serialize};

use super::markup::Element;
use crate::model::{Action, ActionRole, ActionStyle};

/// How actions map to visual roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// Position alone decides: primary, secondary, then text links
    #[default]
    Positional,
    /// The first action is always primary; later link-styled actions are
    /// text links and the rest follow position
    StyleAware,
}

/// Role for the action at `index` under `policy`.
pub fn action_role(policy: RolePolicy, index: usize, style: ActionStyle) -> ActionRole {
    match (policy, index, style) {
        (_, 0, _) => ActionRole::Primary,
        (RolePolicy::StyleAware, _, ActionStyle::Link) => ActionRole::Text,
        (_, 1, _) => ActionRole::Secondary,
        _ => ActionRole::Text,
    }
}

/// Assign a role to every action in order.
pub fn assign_roles(actions: &[Action], policy: RolePolicy) -> Vec<ActionRole> {
    actions
        .iter()
        .enumerate()
        .map(|(index, action)| action_role(policy, index, action.style))
        .collect()
}

/// Render actions as anchors carrying their role classes.
pub fn render_actions(actions: &[Action], policy: RolePolicy) -> Vec<Element> {
    actions
        .iter()
        .zip(assign_roles(actions, policy))
        .map(|(action, role)| {
            Element::new("a")
                .class(role.class_name())
                .attr("href", action.href.as_str())
                .text(action.text.as_str())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_roles_ignore_style() {
        let actions = vec![
            Action::link("/a", "A"),
            Action::button("/b", "B"),
            Action::button("/c", "C"),
            Action::button("/d", "D"),
        ];
        assert_eq!(
            assign_roles(&actions, RolePolicy::Positional),
            vec![
                ActionRole::Primary,
                ActionRole::Secondary,
                ActionRole::Text,
                ActionRole::Text
            ]
        );
    }

    #[test]
    fn test_style_aware_roles() {
        let actions = vec![
            Action::link("/a", "A"),
            Action::button("/b", "B"),
            Action::link("/c", "C"),
        ];
        assert_eq!(
            assign_roles(&actions, RolePolicy::StyleAware),
            vec![ActionRole::Primary, ActionRole::Secondary, ActionRole::Text]
        );

        let actions = vec![Action::button("/a", "A"), Action::link("/b", "B")];
        assert_eq!(
            assign_roles(&actions, RolePolicy::StyleAware),
            vec![ActionRole::Primary, ActionRole::Text]
        );
    }

    #[test]
    fn test_render_actions() {
        let html: Vec<String> = render_actions(
            &[Action::button("/go", "Go"), Action::button("/more", "More")],
            RolePolicy::Positional,
        )
        .iter()
        .map(Element::to_html)
        .collect();
        assert_eq!(html[0], r#"<a class="usa-button" href="/go">Go</a>"#);
        assert_eq!(html[1], r#"<a class="usa-button usa-button--outline" href="/more">More</a>"#);
    }
}
