//! Styled control, surface, overlay, and navigation components.

use design_tokens::{ColorFamily, Size, Variant};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::classes::{bool_token, merge_layout_class};
use crate::component::ComponentKind;
use crate::config::use_component_defaults;
use crate::resolve::ResolvedStyle;
use crate::scope::{
    use_resolved_color_props, use_resolved_size_props, with_scopes, ColorScope, SizeScope,
};
use crate::variants::{class_names, StyleFlags, StyleRequest};

mod controls;
mod navigation;
mod overlays;
mod surfaces;

pub use controls::{Button, IconButton, Input, Toggle};
pub use navigation::{TabsList, TabsPanel, TabsRoot, TabsTab};
pub use overlays::{
    DialogClose, DialogDescription, DialogPopup, DialogRoot, DialogTitle, DialogTrigger,
    MenuItem, MenuPopup, MenuRoot, MenuSeparator, MenuTrigger,
};
pub use surfaces::{focus_within_misuse, Badge, Card, List, ListItem, Separator, Sheet};

/// One component's resolved style for the current render.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Styled {
    kind: ComponentKind,
    style: ResolvedStyle,
    size: Size,
}

impl Styled {
    /// Resolves explicit props against the ambient scopes and theme defaults.
    pub(crate) fn resolve(
        kind: ComponentKind,
        color: Option<ColorFamily>,
        variant: Option<Variant>,
        size: Option<Size>,
    ) -> Self {
        let defaults = use_component_defaults(kind);
        Self {
            kind,
            style: use_resolved_color_props(color, variant, defaults),
            size: use_resolved_size_props(size, defaults),
        }
    }

    pub(crate) fn class(self, flags: StyleFlags, layout_class: Option<&'static str>) -> String {
        let request = StyleRequest::new(self.style, self.size).flags(flags);
        merge_layout_class(class_names(self.kind, request), layout_class)
    }

    pub(crate) fn kind_token(self) -> &'static str {
        self.kind.token()
    }

    pub(crate) fn color_token(self) -> &'static str {
        self.style.color.token()
    }

    pub(crate) fn variant_token(self) -> &'static str {
        self.style.variant.token()
    }

    pub(crate) fn size_token(self) -> &'static str {
        self.size.token()
    }

    /// Renders `children` with this component published as their container.
    ///
    /// Only an explicit `size` is republished; otherwise the inherited size
    /// scope stays in effect.
    pub(crate) fn provide(
        self,
        explicit_size: Option<Size>,
        children: impl FnOnce() -> Fragment + 'static,
    ) -> Fragment {
        with_scopes(
            ColorScope::for_container(self.style),
            SizeScope::publish(explicit_size),
            children,
        )
    }
}

/// Looks up the state of the enclosing compound family.
///
/// A part rendered outside its root renders inert and logs a warning instead
/// of panicking.
pub(crate) fn family_context<T: Clone + 'static>(
    part: &'static str,
    root: &'static str,
) -> Option<T> {
    let context = use_context::<T>();
    if context.is_none() {
        logging::warn!("{part} rendered outside {root}; it has nothing to control");
    }
    context
}

pub(crate) fn part_id(id: StoredValue<String>, part: &str) -> String {
    id.with_value(|id| format!("{id}-{part}"))
}

pub(crate) const INTERACTIVE: StyleFlags = StyleFlags {
    interactive: true,
    selected: false,
    disabled: false,
    focus_within: false,
};

pub(crate) fn open_state_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}
