//! Component identities and their built-in default style.

use std::fmt;
use std::str::FromStr;

use design_tokens::{ColorFamily, Size, Variant};

use crate::config::{ComponentDefaults, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Every styled component the library renders. Keys the style table and the
/// theme's per-component defaults.
pub enum ComponentKind {
    /// Action button.
    Button,
    /// Square icon-only button.
    IconButton,
    /// Two-state pressed button.
    Toggle,
    /// Single-line text field.
    Input,
    /// Inline status label.
    Badge,
    /// Generic surface container.
    Sheet,
    /// Framed content container.
    Card,
    /// Vertical item list container.
    List,
    /// Row inside a list.
    ListItem,
    /// Horizontal or vertical rule.
    Separator,
    /// Root of a dialog family.
    Dialog,
    /// Dialog content surface.
    DialogPopup,
    /// Root of a menu family.
    Menu,
    /// Menu surface listing items.
    MenuPopup,
    /// Selectable menu row.
    MenuItem,
    /// Root of a tabs family.
    Tabs,
    /// Strip holding the tab triggers.
    TabsList,
    /// Single tab trigger.
    TabsTab,
}

impl ComponentKind {
    /// Every component kind in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Button,
        Self::IconButton,
        Self::Toggle,
        Self::Input,
        Self::Badge,
        Self::Sheet,
        Self::Card,
        Self::List,
        Self::ListItem,
        Self::Separator,
        Self::Dialog,
        Self::DialogPopup,
        Self::Menu,
        Self::MenuPopup,
        Self::MenuItem,
        Self::Tabs,
        Self::TabsList,
        Self::TabsTab,
    ];

    /// Stable kebab-case token used in `data-ui-kind` and theme tables.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::IconButton => "icon-button",
            Self::Toggle => "toggle",
            Self::Input => "input",
            Self::Badge => "badge",
            Self::Sheet => "sheet",
            Self::Card => "card",
            Self::List => "list",
            Self::ListItem => "list-item",
            Self::Separator => "separator",
            Self::Dialog => "dialog",
            Self::DialogPopup => "dialog-popup",
            Self::Menu => "menu",
            Self::MenuPopup => "menu-popup",
            Self::MenuItem => "menu-item",
            Self::Tabs => "tabs",
            Self::TabsList => "tabs-list",
            Self::TabsTab => "tabs-tab",
        }
    }

    /// Style used when neither the caller, a container, nor the theme says otherwise.
    pub fn builtin_defaults(self) -> ComponentDefaults {
        use ColorFamily::{Neutral, Primary};
        use Variant::{Outlined, Plain, Solid, Soft};

        let (color, variant, size) = match self {
            Self::Button => (Primary, Solid, Size::Md),
            Self::IconButton => (Primary, Plain, Size::Md),
            Self::Toggle => (Neutral, Outlined, Size::Md),
            Self::Input => (Neutral, Outlined, Size::Md),
            Self::Badge => (Primary, Soft, Size::Sm),
            Self::Sheet => (Neutral, Plain, Size::Md),
            Self::Card => (Neutral, Outlined, Size::Md),
            Self::List => (Neutral, Plain, Size::Md),
            Self::ListItem => (Neutral, Plain, Size::Md),
            Self::Separator => (Neutral, Plain, Size::Md),
            Self::Dialog | Self::Menu | Self::Tabs => (Neutral, Plain, Size::Md),
            Self::DialogPopup | Self::MenuPopup => (Neutral, Outlined, Size::Md),
            Self::MenuItem => (Neutral, Plain, Size::Md),
            Self::TabsList => (Neutral, Soft, Size::Md),
            Self::TabsTab => (Neutral, Plain, Size::Md),
        };
        ComponentDefaults {
            color,
            variant,
            size,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ComponentKind {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == raw)
            .ok_or_else(|| ConfigError::UnknownComponent(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_are_unique_and_parse_back() {
        let mut seen = std::collections::BTreeSet::new();
        for kind in ComponentKind::ALL {
            assert!(seen.insert(kind.token()), "duplicate token {kind}");
            assert_eq!(kind.token().parse::<ComponentKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn unknown_kind_is_a_config_error() {
        let err = "carousel".parse::<ComponentKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown component `carousel` in theme");
    }

    #[test]
    fn compound_roots_are_quiet_by_default() {
        for kind in [ComponentKind::Dialog, ComponentKind::Menu, ComponentKind::Tabs] {
            assert_eq!(kind.builtin_defaults().variant, Variant::Plain);
        }
    }
}
