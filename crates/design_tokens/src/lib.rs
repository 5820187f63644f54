//! Closed design-token enumerations consumed by the styled component crates.
//!
//! Each axis is a closed enum with a stable lowercase string token. The tokens
//! are what appear in `data-ui-*` attributes, theme configuration files, and
//! generated class names, so they must never change once published.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Returned when a string does not name a known token on the requested axis.
#[error("unknown {axis} token `{value}`")]
pub struct TokenParseError {
    /// Axis that was being parsed (`color`, `variant`, or `size`).
    pub axis: &'static str,
    /// Rejected input.
    pub value: String,
}

impl TokenParseError {
    fn new(axis: &'static str, value: &str) -> Self {
        Self {
            axis,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic color intent of a surface.
pub enum ColorFamily {
    /// Brand/accent intent.
    Primary,
    /// Low-intent grey scale.
    Neutral,
    /// Positive outcome.
    Success,
    /// Caution.
    Warning,
    /// Destructive or failing.
    Danger,
}

impl Default for ColorFamily {
    fn default() -> Self {
        Self::Primary
    }
}

impl ColorFamily {
    /// Every color family in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Neutral,
        Self::Success,
        Self::Warning,
        Self::Danger,
    ];

    /// Stable string token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ColorFamily {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.token() == raw)
            .ok_or_else(|| TokenParseError::new("color", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual emphasis of a surface, from most to least prominent.
pub enum Variant {
    /// Filled with the color family's strongest shade.
    Solid,
    /// Tinted fill.
    Soft,
    /// Border only.
    Outlined,
    /// Text only.
    Plain,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Solid
    }
}

impl Variant {
    /// Every variant in declaration order.
    pub const ALL: [Self; 4] = [Self::Solid, Self::Soft, Self::Outlined, Self::Plain];

    /// Stable string token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Soft => "soft",
            Self::Outlined => "outlined",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Variant {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw)
            .ok_or_else(|| TokenParseError::new("variant", raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Size bucket. Only meaningful as a lookup key into per-component tables.
pub enum Size {
    /// Dense.
    Sm,
    /// Default.
    Md,
    /// Spacious.
    Lg,
}

impl Default for Size {
    fn default() -> Self {
        Self::Md
    }
}

impl Size {
    /// Every size in ascending order.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    /// Stable string token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Size {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| TokenParseError::new("size", raw))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_parse_back_to_the_same_value() {
        for color in ColorFamily::ALL {
            assert_eq!(color.token().parse::<ColorFamily>(), Ok(color));
        }
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        for size in Size::ALL {
            assert_eq!(size.token().parse::<Size>(), Ok(size));
        }
    }

    #[test]
    fn unknown_token_reports_axis_and_value() {
        let err = "ghost".parse::<Variant>().unwrap_err();
        assert_eq!(err.axis, "variant");
        assert_eq!(err.to_string(), "unknown variant token `ghost`");

        let err = "xl".parse::<Size>().unwrap_err();
        assert_eq!(err.to_string(), "unknown size token `xl`");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Primary".parse::<ColorFamily>().is_err());
    }

    #[test]
    fn serde_uses_the_string_tokens() {
        assert_eq!(
            serde_json::to_string(&ColorFamily::Danger).expect("serialize"),
            "\"danger\""
        );
        let variant: Variant = serde_json::from_str("\"outlined\"").expect("deserialize");
        assert_eq!(variant, Variant::Outlined);
        assert!(serde_json::from_str::<Size>("\"huge\"").is_err());
    }

    #[test]
    fn defaults_match_the_component_baseline() {
        assert_eq!(ColorFamily::default(), ColorFamily::Primary);
        assert_eq!(Variant::default(), Variant::Solid);
        assert_eq!(Size::default(), Size::Md);
    }
}
