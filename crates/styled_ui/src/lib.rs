//! Token-driven styled components for Leptos.
//!
//! Components take three style axes from [`design_tokens`] (color family,
//! variant, size). A caller may set any of them explicitly; anything left unset
//! is inherited from the nearest enclosing container, and finally from the
//! component's theme defaults. A component nested inside a solid container
//! degrades its default variant (see [`invert`]) to stay legible.
//!
//! The resolved style is turned into a class string by [`class_names`] and
//! mirrored into `data-ui-kind`, `data-ui-color`, `data-ui-variant`, and
//! `data-ui-size` attributes for host CSS and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod component;
mod config;
mod primitives;
mod resolve;
mod scope;
mod variants;

pub use classes::merge_classes;
pub use component::ComponentKind;
pub use config::{
    use_component_defaults, AxisOverrides, ComponentDefaults, ConfigError, ThemeConfig,
    ThemeProvider,
};
pub use design_tokens::{ColorFamily, Size, TokenParseError, Variant};
pub use primitives::{
    focus_within_misuse, Badge, Button, Card, DialogClose, DialogDescription, DialogPopup,
    DialogRoot, DialogTitle, DialogTrigger, IconButton, Input, List, ListItem, MenuItem,
    MenuPopup, MenuRoot, MenuSeparator, MenuTrigger, Separator, Sheet, TabsList, TabsPanel,
    TabsRoot, TabsTab, Toggle,
};
pub use resolve::{invert, resolve_color_props, resolve_size, ResolvedStyle};
pub use scope::{
    use_color_scope, use_resolved_color_props, use_resolved_size_props, use_size_scope,
    ColorScope, SizeScope, StyleScope,
};
pub use variants::{class_names, StyleFlags, StyleRequest};

/// Convenience imports for application crates.
pub mod prelude {
    pub use crate::{
        Badge, Button, Card, ColorFamily, DialogClose, DialogDescription, DialogPopup,
        DialogRoot, DialogTitle, DialogTrigger, IconButton, Input, List, ListItem, MenuItem,
        MenuPopup, MenuRoot, MenuSeparator, MenuTrigger, Separator, Sheet, Size, StyleScope,
        TabsList, TabsPanel, TabsRoot, TabsTab, ThemeConfig, ThemeProvider, Toggle, Variant,
    };
}
