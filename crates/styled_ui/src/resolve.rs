//! Pure color/variant and size resolution.
//!
//! Every styled component computes its effective look from three sources, in
//! order of precedence: what the caller passed explicitly, what the nearest
//! enclosing container published, and the component's own defaults. Nothing in
//! this module reads the reactive tree; the Leptos glue in [`crate::scope`]
//! only looks the ambient scopes up and forwards them here.

use design_tokens::{ColorFamily, Size, Variant};

use crate::scope::{ColorScope, SizeScope};

/// Maps a default variant to the variant it becomes inside a solid container.
///
/// Filled variants collapse to [`Variant::Plain`] so they do not collide with
/// the solid fill underneath; an outline stays visible on any background and is
/// kept.
pub fn invert(variant: Variant) -> Variant {
    match variant {
        Variant::Solid | Variant::Soft | Variant::Plain => Variant::Plain,
        Variant::Outlined => Variant::Outlined,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Effective color and variant of one component for the current render.
pub struct ResolvedStyle {
    /// Resolved color family.
    pub color: ColorFamily,
    /// Resolved variant, after inversion.
    pub variant: Variant,
    /// Whether the nearest container is solid. Passed through from the scope.
    pub inside_solid: bool,
}

/// Resolves color and variant for one component.
///
/// `variant` being `Some` means the caller asked for it, even when it equals
/// `default_variant`; an explicit variant is never inverted.
pub fn resolve_color_props(
    ambient: Option<ColorScope>,
    color: Option<ColorFamily>,
    variant: Option<Variant>,
    default_color: ColorFamily,
    default_variant: Variant,
) -> ResolvedStyle {
    let inside_solid = ambient.is_some_and(|scope| scope.inside_solid);
    let color = color
        .or(ambient.map(|scope| scope.color))
        .unwrap_or(default_color);
    let variant = match variant {
        Some(variant) => variant,
        None if inside_solid => invert(default_variant),
        None => default_variant,
    };

    ResolvedStyle {
        color,
        variant,
        inside_solid,
    }
}

/// Resolves size: explicit, then the nearest published size, then the default.
pub fn resolve_size(ambient: Option<SizeScope>, size: Option<Size>, default_size: Size) -> Size {
    size.or(ambient.map(|scope| scope.size))
        .unwrap_or(default_size)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn solid_scope(color: ColorFamily) -> ColorScope {
        ColorScope {
            color,
            inside_solid: true,
            parent_variant: Variant::Solid,
        }
    }

    #[test]
    fn inversion_table() {
        assert_eq!(invert(Variant::Solid), Variant::Plain);
        assert_eq!(invert(Variant::Soft), Variant::Plain);
        assert_eq!(invert(Variant::Outlined), Variant::Outlined);
        assert_eq!(invert(Variant::Plain), Variant::Plain);
    }

    #[test]
    fn inversion_is_stable_once_applied() {
        for variant in Variant::ALL {
            assert_eq!(invert(invert(variant)), invert(variant));
        }
        assert_ne!(invert(Variant::Solid), Variant::Solid);
    }

    #[test]
    fn no_scope_falls_back_to_defaults() {
        for color in ColorFamily::ALL {
            for variant in Variant::ALL {
                assert_eq!(
                    resolve_color_props(None, None, None, color, variant),
                    ResolvedStyle {
                        color,
                        variant,
                        inside_solid: false,
                    }
                );
            }
        }
    }

    #[test]
    fn explicit_props_win_over_scope_and_defaults() {
        let scopes = [
            None,
            Some(solid_scope(ColorFamily::Warning)),
            Some(ColorScope {
                color: ColorFamily::Neutral,
                inside_solid: false,
                parent_variant: Variant::Outlined,
            }),
        ];
        for ambient in scopes {
            for color in ColorFamily::ALL {
                for variant in Variant::ALL {
                    let resolved = resolve_color_props(
                        ambient,
                        Some(color),
                        Some(variant),
                        ColorFamily::Primary,
                        Variant::Solid,
                    );
                    assert_eq!(resolved.color, color);
                    assert_eq!(resolved.variant, variant);
                }
            }
        }
    }

    #[test]
    fn color_is_inherited_without_inversion_outside_solid() {
        let ambient = ColorScope {
            color: ColorFamily::Danger,
            inside_solid: false,
            parent_variant: Variant::Soft,
        };
        let resolved = resolve_color_props(
            Some(ambient),
            None,
            None,
            ColorFamily::Primary,
            Variant::Solid,
        );
        assert_eq!(resolved.color, ColorFamily::Danger);
        assert_eq!(resolved.variant, Variant::Solid);
        assert!(!resolved.inside_solid);
    }

    #[test]
    fn default_variant_inverts_inside_solid() {
        let ambient = Some(solid_scope(ColorFamily::Primary));
        let resolved =
            resolve_color_props(ambient, None, None, ColorFamily::Neutral, Variant::Solid);
        assert_eq!(resolved.variant, Variant::Plain);
        assert!(resolved.inside_solid);

        let outlined = resolve_color_props(
            ambient,
            None,
            Some(Variant::Outlined),
            ColorFamily::Neutral,
            Variant::Solid,
        );
        assert_eq!(outlined.variant, Variant::Outlined);
    }

    #[test]
    fn explicit_variant_equal_to_default_is_not_inverted() {
        let resolved = resolve_color_props(
            Some(solid_scope(ColorFamily::Primary)),
            None,
            Some(Variant::Solid),
            ColorFamily::Primary,
            Variant::Solid,
        );
        assert_eq!(resolved.variant, Variant::Solid);
        assert!(resolved.inside_solid);
    }

    #[test]
    fn size_prefers_explicit_then_scope_then_default() {
        let ambient = Some(SizeScope { size: Size::Lg });
        assert_eq!(resolve_size(ambient, Some(Size::Sm), Size::Md), Size::Sm);
        assert_eq!(resolve_size(ambient, None, Size::Md), Size::Lg);
        assert_eq!(resolve_size(None, None, Size::Md), Size::Md);
    }

    #[test]
    fn layoutless_root_in_a_solid_container_resets_inside_solid() {
        let root = resolve_color_props(
            Some(solid_scope(ColorFamily::Primary)),
            None,
            None,
            ColorFamily::Neutral,
            Variant::Plain,
        );
        assert_eq!(root.variant, Variant::Plain);
        assert!(root.inside_solid);

        let trigger = resolve_color_props(
            Some(ColorScope::for_container(root)),
            None,
            None,
            ColorFamily::Primary,
            Variant::Solid,
        );
        assert_eq!(
            trigger,
            ResolvedStyle {
                color: ColorFamily::Primary,
                variant: Variant::Solid,
                inside_solid: false,
            }
        );
    }
}
