//! Accessibility semantics.
//!
//! A widget exposes a [`Semantics`] node describing its role and state. Hosts
//! feed it to the platform accessibility tree; tests locate widgets by
//! `test_tag` and assert on `enabled` / `has_click_action`.

use serde::{Deserialize, Serialize};

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// On/off switch
    Switch,
}

impl AccessibleRole {
    /// ARIA role name, if the role maps to one.
    #[must_use]
    pub const fn aria_role(self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Switch => Some("switch"),
        }
    }
}

/// Semantics node for a single widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Semantics {
    /// Role
    pub role: AccessibleRole,
    /// Stable identifier used by test automation
    pub test_tag: Option<String>,
    /// Accessible label
    pub label: Option<String>,
    /// Whether the widget responds to input
    pub enabled: bool,
    /// Whether a click action is available
    pub has_click_action: bool,
    /// Whether the widget can take keyboard focus
    pub focusable: bool,
    /// Toggle state for two-state controls
    pub toggled: Option<bool>,
}

impl Semantics {
    /// Render as ARIA attribute pairs, in a stable order.
    #[must_use]
    pub fn aria_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(role) = self.role.aria_role() {
            attrs.push(("role", role.to_string()));
        }
        if let Some(label) = &self.label {
            attrs.push(("aria-label", label.clone()));
        }
        if let Some(toggled) = self.toggled {
            attrs.push(("aria-checked", toggled.to_string()));
        }
        if !self.enabled && self.role != AccessibleRole::Generic {
            attrs.push(("aria-disabled", "true".to_string()));
        }
        if let Some(tag) = &self.test_tag {
            attrs.push(("data-testid", tag.clone()));
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_role() {
        assert_eq!(AccessibleRole::Generic.aria_role(), None);
        assert_eq!(AccessibleRole::Switch.aria_role(), Some("switch"));
    }

    #[test]
    fn test_aria_attributes_for_disabled_switch() {
        let s = Semantics {
            role: AccessibleRole::Switch,
            test_tag: Some("Switch".into()),
            toggled: Some(true),
            ..Semantics::default()
        };
        assert_eq!(
            s.aria_attributes(),
            vec![
                ("role", "switch".to_string()),
                ("aria-checked", "true".to_string()),
                ("aria-disabled", "true".to_string()),
                ("data-testid", "Switch".to_string()),
            ]
        );
    }

    #[test]
    fn test_generic_never_reports_disabled() {
        let s = Semantics::default();
        assert!(s.aria_attributes().is_empty());
    }
}
