//! Ambient color and size scopes and their Leptos context wiring.
//!
//! A container publishes a fresh, immutable scope for its subtree by rendering
//! its children inside a child reactive owner. Descendants see the nearest
//! owner's scope; siblings and ancestors never do, and nothing is merged with
//! an outer scope.

use design_tokens::{ColorFamily, Size, Variant};
use leptos::*;

use crate::config::ComponentDefaults;
use crate::resolve::{resolve_color_props, resolve_size, ResolvedStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color state published by the nearest styled container.
pub struct ColorScope {
    /// Container's resolved color.
    pub color: ColorFamily,
    /// Whether the container itself resolved to [`Variant::Solid`].
    pub inside_solid: bool,
    /// Container's resolved variant.
    pub parent_variant: Variant,
}

impl ColorScope {
    /// Scope a container publishes after resolving its own style.
    pub fn for_container(style: ResolvedStyle) -> Self {
        Self {
            color: style.color,
            inside_solid: style.variant == Variant::Solid,
            parent_variant: style.variant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Size published by the nearest container that was given an explicit size.
pub struct SizeScope {
    /// Published size.
    pub size: Size,
}

impl SizeScope {
    /// Scope a container publishes for its subtree.
    ///
    /// Returns `None` unless the container was sized explicitly, which keeps
    /// the ancestor's size visible to descendants.
    pub fn publish(explicit: Option<Size>) -> Option<Self> {
        explicit.map(|size| Self { size })
    }
}

/// Returns the nearest published [`ColorScope`], if any container is above.
pub fn use_color_scope() -> Option<ColorScope> {
    use_context::<ColorScope>()
}

/// Returns the nearest published [`SizeScope`], if any container is above.
pub fn use_size_scope() -> Option<SizeScope> {
    use_context::<SizeScope>()
}

/// Resolves color and variant against the current color scope.
pub fn use_resolved_color_props(
    color: Option<ColorFamily>,
    variant: Option<Variant>,
    defaults: ComponentDefaults,
) -> ResolvedStyle {
    resolve_color_props(
        use_color_scope(),
        color,
        variant,
        defaults.color,
        defaults.variant,
    )
}

/// Resolves size against the current size scope.
pub fn use_resolved_size_props(size: Option<Size>, defaults: ComponentDefaults) -> Size {
    resolve_size(use_size_scope(), size, defaults.size)
}

/// Renders `children` under a child owner carrying the given scopes.
///
/// A `None` size scope leaves the inherited one in place.
pub(crate) fn with_scopes(
    color: ColorScope,
    size: Option<SizeScope>,
    children: impl FnOnce() -> Fragment + 'static,
) -> Fragment {
    run_as_child(move || {
        provide_context(color);
        if let Some(size) = size {
            provide_context(size);
        }
        children()
    })
}

#[component]
/// Publishes an explicit color and size scope without rendering any element.
///
/// Useful when a subtree sits visually on a surface the library does not
/// render itself, such as a solid app header drawn by host CSS.
pub fn StyleScope(
    color: ColorFamily,
    #[prop(default = Variant::Plain)] variant: Variant,
    #[prop(optional)] size: Option<Size>,
    children: Children,
) -> impl IntoView {
    let scope = ColorScope::for_container(ResolvedStyle {
        color,
        variant,
        inside_solid: false,
    });
    with_scopes(scope, SizeScope::publish(size), children)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    const BUTTON: ComponentDefaults = ComponentDefaults {
        color: ColorFamily::Primary,
        variant: Variant::Solid,
        size: Size::Md,
    };

    const BUTTON_UNSCOPED: ResolvedStyle = ResolvedStyle {
        color: ColorFamily::Primary,
        variant: Variant::Solid,
        inside_solid: false,
    };

    /// Runs `body` under a child owner that is disposed before returning, so
    /// owners nested by `run_as_child` are released while the runtime is alive.
    pub(crate) fn with_disposed_owner<U>(body: impl Fn() -> U) -> U {
        let _ = create_runtime();
        let (value, disposer) = as_child_of_current_owner(move |()| body())(());
        drop(disposer);
        value
    }

    fn captured<T: Copy + 'static>() -> (Rc<Cell<Option<T>>>, Rc<Cell<Option<T>>>) {
        let cell = Rc::new(Cell::new(None));
        (Rc::clone(&cell), cell)
    }

    fn publish(color: ColorFamily, variant: Variant) {
        provide_context(ColorScope::for_container(ResolvedStyle {
            color,
            variant,
            inside_solid: false,
        }));
    }

    #[test]
    fn only_a_solid_container_marks_descendants_inside_solid() {
        for variant in Variant::ALL {
            let scope = ColorScope::for_container(ResolvedStyle {
                color: ColorFamily::Success,
                variant,
                inside_solid: false,
            });
            assert_eq!(scope.inside_solid, variant == Variant::Solid);
            assert_eq!(scope.parent_variant, variant);
            assert_eq!(scope.color, ColorFamily::Success);
        }
    }

    #[test]
    fn unsized_container_publishes_nothing() {
        assert_eq!(SizeScope::publish(None), None);
        assert_eq!(
            SizeScope::publish(Some(Size::Sm)),
            Some(SizeScope { size: Size::Sm })
        );
    }

    #[test]
    fn resolution_without_any_provider_uses_defaults() {
        let (color, size) = with_disposed_owner(|| {
            (
                use_resolved_color_props(None, None, BUTTON),
                use_resolved_size_props(None, BUTTON),
            )
        });
        assert_eq!(
            color,
            ResolvedStyle {
                color: ColorFamily::Primary,
                variant: Variant::Solid,
                inside_solid: false,
            }
        );
        assert_eq!(size, Size::Md);
    }

    #[test]
    fn default_button_inside_solid_primary_sheet_turns_plain() {
        let (implicit, explicit) = with_disposed_owner(|| {
            publish(ColorFamily::Primary, Variant::Solid);
            (
                use_resolved_color_props(None, None, BUTTON),
                use_resolved_color_props(Some(ColorFamily::Success), Some(Variant::Soft), BUTTON),
            )
        });

        assert_eq!(
            implicit,
            ResolvedStyle {
                color: ColorFamily::Primary,
                variant: Variant::Plain,
                inside_solid: true,
            }
        );
        assert_eq!(explicit.color, ColorFamily::Success);
        assert_eq!(explicit.variant, Variant::Soft);
    }

    #[test]
    fn size_passes_through_an_unsized_container() {
        let (child, sibling) = with_disposed_owner(|| {
            let (record, seen) = captured();
            let _ = with_scopes(
                ColorScope::for_container(ResolvedStyle {
                    color: ColorFamily::Neutral,
                    variant: Variant::Plain,
                    inside_solid: false,
                }),
                SizeScope::publish(Some(Size::Lg)),
                move || {
                    let unsized_container = with_scopes(
                        ColorScope::for_container(ResolvedStyle {
                            color: ColorFamily::Neutral,
                            variant: Variant::Outlined,
                            inside_solid: false,
                        }),
                        SizeScope::publish(None),
                        move || {
                            record.set(Some(use_resolved_size_props(None, BUTTON)));
                            Fragment::new(Vec::new())
                        },
                    );
                    Fragment::new(vec![unsized_container.into_view()])
                },
            );
            (seen.get(), use_size_scope())
        });

        assert_eq!(child, Some(Size::Lg));
        assert_eq!(sibling, None);
    }

    #[test]
    fn nested_container_shadows_the_outer_scope() {
        let (inner, sibling, sibling_scope) = with_disposed_owner(|| {
            let (record, seen) = captured();
            let _ = with_scopes(
                ColorScope::for_container(ResolvedStyle {
                    color: ColorFamily::Primary,
                    variant: Variant::Solid,
                    inside_solid: false,
                }),
                None,
                move || {
                    let nested = with_scopes(
                        ColorScope::for_container(ResolvedStyle {
                            color: ColorFamily::Danger,
                            variant: Variant::Outlined,
                            inside_solid: true,
                        }),
                        None,
                        move || {
                            record.set(Some(use_resolved_color_props(None, None, BUTTON)));
                            Fragment::new(Vec::new())
                        },
                    );
                    Fragment::new(vec![nested.into_view()])
                },
            );
            (
                seen.get(),
                use_resolved_color_props(None, None, BUTTON),
                use_color_scope(),
            )
        });

        assert_eq!(
            inner,
            Some(ResolvedStyle {
                color: ColorFamily::Danger,
                variant: Variant::Solid,
                inside_solid: false,
            })
        );
        assert_eq!(sibling, BUTTON_UNSCOPED);
        assert_eq!(sibling_scope, None);
    }

    #[test]
    fn style_scope_inverts_a_nested_default_button() {
        let (inside, size, after) = with_disposed_owner(|| {
            let (record, seen) = captured();
            let _ = StyleScope(
                StyleScopeProps::builder()
                    .color(ColorFamily::Primary)
                    .variant(Variant::Solid)
                    .size(Size::Sm)
                    .children(Box::new(move || {
                        record.set(Some((
                            use_resolved_color_props(None, None, BUTTON),
                            use_resolved_size_props(None, BUTTON),
                        )));
                        Fragment::new(Vec::new())
                    }))
                    .build(),
            )
            .into_view();
            let (inside, size) = seen.get().unzip();
            (inside, size, use_resolved_color_props(None, None, BUTTON))
        });

        assert_eq!(
            inside,
            Some(ResolvedStyle {
                color: ColorFamily::Primary,
                variant: Variant::Plain,
                inside_solid: true,
            })
        );
        assert_eq!(size, Some(Size::Sm));
        assert_eq!(after, BUTTON_UNSCOPED);
    }
}
