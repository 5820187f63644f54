//! Theme configuration: per-component default color, variant, and size.
//!
//! A theme is a TOML document with an optional global `[defaults]` table and
//! one `[components.<kind>]` table per overridden component:
//!
//! ```toml
//! [defaults]
//! size = "sm"
//!
//! [components.button]
//! variant = "soft"
//! color = "neutral"
//! ```
//!
//! Overrides only replace component *defaults*. Explicit props and ambient
//! container scopes still take precedence during resolution.

use std::collections::BTreeMap;
use std::rc::Rc;

use design_tokens::{ColorFamily, Size, Variant};
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::ComponentKind;

#[derive(Debug, Error)]
/// Errors produced while loading a theme.
pub enum ConfigError {
    /// The document is not valid TOML or a value is not a known token.
    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
    /// A `[components.*]` table names a component that does not exist.
    #[error("unknown component `{0}` in theme")]
    UnknownComponent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fully specified fallback style for one component.
pub struct ComponentDefaults {
    /// Default color family.
    pub color: ColorFamily,
    /// Default variant, subject to inversion inside solid containers.
    pub variant: Variant,
    /// Default size.
    pub size: Size,
}

impl ComponentDefaults {
    fn apply(mut self, overrides: &AxisOverrides) -> Self {
        if let Some(color) = overrides.color {
            self.color = color;
        }
        if let Some(variant) = overrides.variant {
            self.variant = variant;
        }
        if let Some(size) = overrides.size {
            self.size = size;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Partial override of a component's defaults.
pub struct AxisOverrides {
    /// Replacement default color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorFamily>,
    /// Replacement default variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    /// Replacement default size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTheme {
    #[serde(default)]
    defaults: AxisOverrides,
    #[serde(default)]
    components: BTreeMap<String, AxisOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Validated theme configuration.
pub struct ThemeConfig {
    defaults: AxisOverrides,
    components: BTreeMap<ComponentKind, AxisOverrides>,
}

impl ThemeConfig {
    /// Parses a theme from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown fields, or unknown
    /// token strings, and [`ConfigError::UnknownComponent`] for an unrecognized
    /// `[components.*]` key.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawTheme = toml::from_str(raw)?;
        let components = raw
            .components
            .into_iter()
            .map(|(key, overrides)| -> Result<_, ConfigError> {
                Ok((key.parse::<ComponentKind>()?, overrides))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self {
            defaults: raw.defaults,
            components,
        })
    }

    /// Sets the global override applied to every component.
    pub fn with_defaults(mut self, overrides: AxisOverrides) -> Self {
        self.defaults = overrides;
        self
    }

    /// Sets the override for one component, replacing any previous one.
    pub fn with_component(mut self, kind: ComponentKind, overrides: AxisOverrides) -> Self {
        self.components.insert(kind, overrides);
        self
    }

    /// Effective defaults for `kind`: built-in, then global, then per-component.
    pub fn defaults_for(&self, kind: ComponentKind) -> ComponentDefaults {
        let defaults = kind.builtin_defaults().apply(&self.defaults);
        match self.components.get(&kind) {
            Some(overrides) => defaults.apply(overrides),
            None => defaults,
        }
    }
}

#[derive(Clone)]
struct ThemeContext(Rc<ThemeConfig>);

#[component]
/// Makes a [`ThemeConfig`] visible to every styled component below it.
pub fn ThemeProvider(config: ThemeConfig, children: Children) -> impl IntoView {
    run_as_child(move || {
        provide_context(ThemeContext(Rc::new(config)));
        children()
    })
}

/// Effective defaults for `kind` under the nearest [`ThemeProvider`], or the
/// built-in defaults when there is none.
pub fn use_component_defaults(kind: ComponentKind) -> ComponentDefaults {
    match use_context::<ThemeContext>() {
        Some(ThemeContext(config)) => config.defaults_for(kind),
        None => kind.builtin_defaults(),
    }
}
