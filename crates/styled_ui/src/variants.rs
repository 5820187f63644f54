//! Style variant table: `(kind, variant, color, size, flags)` to class names.
//!
//! One table covers every component. Each [`ComponentKind`] contributes a base
//! class list, one class list per size, a paint mode selecting how the shared
//! color palette applies, and a short list of compound rules that fire on
//! specific axis combinations. The output is a pure function of the request.

use design_tokens::{ColorFamily, Size, Variant};

use crate::classes::merge_classes;
use crate::component::ComponentKind;
use crate::resolve::ResolvedStyle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-render state flags that alter styling.
pub struct StyleFlags {
    /// Receives hover/active treatment.
    pub interactive: bool,
    /// Currently selected or pressed.
    pub selected: bool,
    /// Disabled; suppresses interactive treatment.
    pub disabled: bool,
    /// Shows a focus ring when any descendant has focus.
    pub focus_within: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Complete input of the style table.
pub struct StyleRequest {
    /// Resolved variant.
    pub variant: Variant,
    /// Resolved color family.
    pub color: ColorFamily,
    /// Resolved size.
    pub size: Size,
    /// Whether the nearest container is solid.
    pub inside_solid: bool,
    /// State flags.
    pub flags: StyleFlags,
}

impl StyleRequest {
    /// Builds a request from resolved color props and size.
    pub fn new(style: ResolvedStyle, size: Size) -> Self {
        Self {
            variant: style.variant,
            color: style.color,
            size,
            inside_solid: style.inside_solid,
            flags: StyleFlags::default(),
        }
    }

    /// Replaces the state flags.
    pub fn flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    /// Variant palette: fill, border, and text color.
    Surface,
    /// A single divider fill.
    Divider,
    /// Nothing color related; the element is a structural wrapper.
    None,
}

#[derive(Debug, Clone, Copy)]
struct Condition {
    variant: Option<Variant>,
    size: Option<Size>,
    selected: Option<bool>,
    inside_solid: Option<bool>,
}

impl Condition {
    const ANY: Self = Self {
        variant: None,
        size: None,
        selected: None,
        inside_solid: None,
    };

    const fn variant(self, variant: Variant) -> Self {
        Self {
            variant: Some(variant),
            ..self
        }
    }

    const fn size(self, size: Size) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    const fn selected(self) -> Self {
        Self {
            selected: Some(true),
            ..self
        }
    }

    const fn inside_solid(self) -> Self {
        Self {
            inside_solid: Some(true),
            ..self
        }
    }

    fn matches(&self, request: &StyleRequest) -> bool {
        self.variant.map_or(true, |v| v == request.variant)
            && self.size.map_or(true, |s| s == request.size)
            && self.selected.map_or(true, |s| s == request.flags.selected)
            && self.inside_solid.map_or(true, |s| s == request.inside_solid)
    }
}

#[derive(Debug, Clone, Copy)]
struct Compound {
    when: Condition,
    class: &'static str,
}

const fn when(when: Condition, class: &'static str) -> Compound {
    Compound { when, class }
}

#[derive(Debug, Clone, Copy)]
struct ComponentStyle {
    base: &'static str,
    /// Indexed by [`Size`] in ascending order.
    sizes: [&'static str; 3],
    paint: Paint,
    compounds: &'static [Compound],
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
     select-none transition-colors focus-visible:outline-2 focus-visible:outline-offset-2";
const ROW_BASE: &str = "flex w-full items-center gap-2 rounded-md text-left select-none";

const ANY: Condition = Condition::ANY;

const BUTTON_COMPOUNDS: &[Compound] = &[
    when(ANY.variant(Variant::Solid), "shadow-sm"),
    when(ANY.variant(Variant::Plain).size(Size::Sm), "px-2"),
];
const ICON_BUTTON_COMPOUNDS: &[Compound] = &[when(ANY.variant(Variant::Solid), "shadow-sm")];
const TOGGLE_COMPOUNDS: &[Compound] = &[
    when(ANY.selected(), "ring-2 ring-inset ring-current"),
    when(ANY.selected().inside_solid(), "bg-white/20"),
];
const INPUT_COMPOUNDS: &[Compound] = &[when(ANY.variant(Variant::Plain), "px-0")];
const CARD_COMPOUNDS: &[Compound] = &[
    when(ANY.variant(Variant::Solid), "shadow-md"),
    when(ANY.variant(Variant::Soft), "shadow-sm"),
];
const ROW_COMPOUNDS: &[Compound] = &[when(ANY.selected(), "font-semibold")];
const TAB_COMPOUNDS: &[Compound] = &[
    when(ANY.selected(), "font-semibold shadow-sm"),
    when(ANY.selected().variant(Variant::Plain), "underline underline-offset-8"),
];

fn component_style(kind: ComponentKind) -> ComponentStyle {
    match kind {
        ComponentKind::Button => ComponentStyle {
            base: BUTTON_BASE,
            sizes: ["h-8 px-3 text-sm", "h-10 px-4 text-sm", "h-12 px-6 text-base"],
            paint: Paint::Surface,
            compounds: BUTTON_COMPOUNDS,
        },
        ComponentKind::IconButton => ComponentStyle {
            base: BUTTON_BASE,
            sizes: ["size-8", "size-10", "size-12"],
            paint: Paint::Surface,
            compounds: ICON_BUTTON_COMPOUNDS,
        },
        ComponentKind::Toggle => ComponentStyle {
            base: BUTTON_BASE,
            sizes: ["h-8 px-3 text-sm", "h-10 px-4 text-sm", "h-12 px-6 text-base"],
            paint: Paint::Surface,
            compounds: TOGGLE_COMPOUNDS,
        },
        ComponentKind::Input => ComponentStyle {
            base: "flex items-center gap-2 rounded-md bg-transparent",
            sizes: ["h-8 px-2 text-sm", "h-10 px-3 text-sm", "h-12 px-4 text-base"],
            paint: Paint::Surface,
            compounds: INPUT_COMPOUNDS,
        },
        ComponentKind::Badge => ComponentStyle {
            base: "inline-flex items-center rounded-full font-medium whitespace-nowrap",
            sizes: ["px-1.5 text-xs", "px-2 text-sm", "px-2.5 text-base"],
            paint: Paint::Surface,
            compounds: &[],
        },
        ComponentKind::Sheet => ComponentStyle {
            base: "block rounded-lg",
            sizes: ["p-2", "p-4", "p-6"],
            paint: Paint::Surface,
            compounds: &[],
        },
        ComponentKind::Card => ComponentStyle {
            base: "flex flex-col rounded-xl",
            sizes: ["gap-2 p-3", "gap-3 p-4", "gap-4 p-6"],
            paint: Paint::Surface,
            compounds: CARD_COMPOUNDS,
        },
        ComponentKind::List => ComponentStyle {
            base: "flex flex-col rounded-lg",
            sizes: ["gap-0.5 p-1 text-sm", "gap-1 p-1.5 text-sm", "gap-1.5 p-2 text-base"],
            paint: Paint::Surface,
            compounds: &[],
        },
        ComponentKind::ListItem => ComponentStyle {
            base: ROW_BASE,
            sizes: ["min-h-8 px-2", "min-h-9 px-3", "min-h-11 px-4"],
            paint: Paint::Surface,
            compounds: ROW_COMPOUNDS,
        },
        ComponentKind::Separator => ComponentStyle {
            base: "shrink-0 border-0",
            sizes: ["my-1 h-px", "my-2 h-px", "my-3 h-0.5"],
            paint: Paint::Divider,
            compounds: &[],
        },
        ComponentKind::Dialog | ComponentKind::Tabs => ComponentStyle {
            base: "contents",
            sizes: ["", "", ""],
            paint: Paint::None,
            compounds: &[],
        },
        ComponentKind::Menu => ComponentStyle {
            base: "relative inline-block",
            sizes: ["", "", ""],
            paint: Paint::None,
            compounds: &[],
        },
        ComponentKind::DialogPopup => ComponentStyle {
            base: "fixed inset-x-0 top-24 z-50 mx-auto flex flex-col rounded-xl bg-white shadow-xl",
            sizes: ["max-w-sm gap-2 p-4", "max-w-md gap-3 p-6", "max-w-lg gap-4 p-8"],
            paint: Paint::Surface,
            compounds: &[],
        },
        ComponentKind::MenuPopup => ComponentStyle {
            base: "absolute left-0 z-40 mt-1 flex min-w-40 flex-col rounded-lg bg-white shadow-lg",
            sizes: ["p-1 text-sm", "p-1.5 text-sm", "p-2 text-base"],
            paint: Paint::Surface,
            compounds: &[],
        },
        ComponentKind::MenuItem => ComponentStyle {
            base: ROW_BASE,
            sizes: ["min-h-7 px-2", "min-h-9 px-3", "min-h-11 px-4"],
            paint: Paint::Surface,
            compounds: ROW_COMPOUNDS,
        },
        ComponentKind::TabsList => ComponentStyle {
            base: "inline-flex items-center gap-1 rounded-lg",
            sizes: ["p-0.5", "p-1", "p-1.5"],
            paint: Paint::Surface,
            compounds: &[],
        },
        ComponentKind::TabsTab => ComponentStyle {
            base: "inline-flex items-center justify-center rounded-md font-medium select-none",
            sizes: ["h-7 px-2 text-xs", "h-9 px-3 text-sm", "h-11 px-4 text-base"],
            paint: Paint::Surface,
            compounds: TAB_COMPOUNDS,
        },
    }
}

fn size_index(size: Size) -> usize {
    match size {
        Size::Sm => 0,
        Size::Md => 1,
        Size::Lg => 2,
    }
}

/// Fill, border, and text colors for a variant.
///
/// Inside a solid container every non-solid variant takes its text color from
/// the container and uses translucent white for fills and borders, so it stays
/// legible regardless of the container's color family.
fn surface_palette(variant: Variant, color: ColorFamily, inside_solid: bool) -> String {
    let c = color.token();
    match (variant, inside_solid) {
        (Variant::Solid, _) => format!("bg-{c}-500 text-white"),
        (Variant::Soft, false) => format!("bg-{c}-100 text-{c}-800"),
        (Variant::Soft, true) => "bg-white/15 text-inherit".to_string(),
        (Variant::Outlined, false) => format!("border border-{c}-300 text-{c}-700"),
        (Variant::Outlined, true) => "border border-white/40 text-inherit".to_string(),
        (Variant::Plain, false) => format!("text-{c}-700"),
        (Variant::Plain, true) => "text-inherit".to_string(),
    }
}

fn interaction_palette(variant: Variant, color: ColorFamily, inside_solid: bool) -> String {
    let c = color.token();
    match (variant, inside_solid) {
        (Variant::Solid, _) => format!("cursor-pointer hover:bg-{c}-600 active:bg-{c}-700"),
        (Variant::Soft, false) => format!("cursor-pointer hover:bg-{c}-200 active:bg-{c}-300"),
        (Variant::Outlined, false) => format!("cursor-pointer hover:bg-{c}-50 active:bg-{c}-100"),
        (Variant::Plain, false) => format!("cursor-pointer hover:bg-{c}-100 active:bg-{c}-200"),
        (_, true) => "cursor-pointer hover:bg-white/10 active:bg-white/20".to_string(),
    }
}

fn focus_ring(color: ColorFamily) -> String {
    format!("focus-within:ring-2 focus-within:ring-{}-500", color.token())
}

const DISABLED: &str = "pointer-events-none opacity-50";

/// Class names for `kind` rendered with `request`.
pub fn class_names(kind: ComponentKind, request: StyleRequest) -> String {
    let style = component_style(kind);
    let flags = request.flags;

    let paint = match style.paint {
        Paint::Surface => surface_palette(request.variant, request.color, request.inside_solid),
        Paint::Divider if request.inside_solid => "bg-white/30".to_string(),
        Paint::Divider => format!("bg-{}-200", request.color.token()),
        Paint::None => String::new(),
    };
    let interaction = if flags.interactive && !flags.disabled && style.paint == Paint::Surface {
        interaction_palette(request.variant, request.color, request.inside_solid)
    } else {
        String::new()
    };
    let focus = if flags.focus_within {
        focus_ring(request.color)
    } else {
        String::new()
    };
    let disabled = if flags.disabled { DISABLED } else { "" };

    let compounds = style
        .compounds
        .iter()
        .filter(|compound| compound.when.matches(&request))
        .map(|compound| compound.class);

    merge_classes(
        [
            style.base,
            style.sizes[size_index(request.size)],
            paint.as_str(),
            interaction.as_str(),
            focus.as_str(),
            disabled,
        ]
        .into_iter()
        .chain(compounds),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(variant: Variant, color: ColorFamily, size: Size) -> StyleRequest {
        StyleRequest {
            variant,
            color,
            size,
            inside_solid: false,
            flags: StyleFlags::default(),
        }
    }

    fn classes(out: &str) -> Vec<&str> {
        out.split(' ').collect()
    }

    #[test]
    fn full_cross_product_is_deterministic_and_duplicate_free() {
        for kind in ComponentKind::ALL {
            for variant in Variant::ALL {
                for color in ColorFamily::ALL {
                    for size in Size::ALL {
                        let req = request(variant, color, size);
                        let first = class_names(kind, req);
                        assert_eq!(first, class_names(kind, req));
                        assert!(!first.is_empty(), "{kind} rendered no classes");
                        assert!(!first.contains("  "));

                        let list = classes(&first);
                        let mut unique = list.clone();
                        unique.sort_unstable();
                        unique.dedup();
                        assert_eq!(unique.len(), list.len(), "duplicates in {first}");
                    }
                }
            }
        }
    }

    #[test]
    fn size_picks_the_matching_class_list() {
        let sm = class_names(
            ComponentKind::Button,
            request(Variant::Solid, ColorFamily::Primary, Size::Sm),
        );
        let lg = class_names(
            ComponentKind::Button,
            request(Variant::Solid, ColorFamily::Primary, Size::Lg),
        );
        assert!(classes(&sm).contains(&"h-8"));
        assert!(classes(&lg).contains(&"h-12"));
        assert!(!classes(&lg).contains(&"h-8"));
    }

    #[test]
    fn solid_primary_button() {
        let out = class_names(
            ComponentKind::Button,
            request(Variant::Solid, ColorFamily::Primary, Size::Md).flags(StyleFlags {
                interactive: true,
                ..StyleFlags::default()
            }),
        );
        assert_eq!(
            out,
            "inline-flex items-center justify-center gap-2 rounded-md font-medium select-none \
             transition-colors focus-visible:outline-2 focus-visible:outline-offset-2 h-10 px-4 \
             text-sm bg-primary-500 text-white cursor-pointer hover:bg-primary-600 \
             active:bg-primary-700 shadow-sm"
        );
    }

    #[test]
    fn every_variant_and_color_gets_a_distinct_palette() {
        let mut seen = std::collections::BTreeSet::new();
        for variant in Variant::ALL {
            for color in ColorFamily::ALL {
                assert!(seen.insert(surface_palette(variant, color, false)));
            }
        }
    }

    #[test]
    fn inside_solid_replaces_family_colors() {
        let mut req = request(Variant::Plain, ColorFamily::Danger, Size::Md);
        req.inside_solid = true;
        req.flags.interactive = true;
        let out = class_names(ComponentKind::Button, req);
        let list = classes(&out);
        assert!(list.contains(&"text-inherit"));
        assert!(list.contains(&"hover:bg-white/10"));
        assert!(!out.contains("danger"));
    }

    #[test]
    fn explicit_solid_inside_solid_keeps_its_fill() {
        let mut req = request(Variant::Solid, ColorFamily::Success, Size::Md);
        req.inside_solid = true;
        let out = class_names(ComponentKind::Badge, req);
        assert!(classes(&out).contains(&"bg-success-500"));
    }

    #[test]
    fn disabled_suppresses_interaction() {
        let req = request(Variant::Soft, ColorFamily::Primary, Size::Md).flags(StyleFlags {
            interactive: true,
            disabled: true,
            ..StyleFlags::default()
        });
        let out = class_names(ComponentKind::Button, req);
        assert!(!out.contains("hover:"));
        assert!(out.ends_with("pointer-events-none opacity-50"));
    }

    #[test]
    fn selected_compounds_only_fire_when_selected() {
        let idle = request(Variant::Plain, ColorFamily::Neutral, Size::Md);
        let selected = idle.flags(StyleFlags {
            selected: true,
            ..StyleFlags::default()
        });

        let idle_out = class_names(ComponentKind::TabsTab, idle);
        let selected_out = class_names(ComponentKind::TabsTab, selected);
        assert!(!idle_out.contains("underline"));
        assert!(classes(&selected_out).contains(&"underline"));
        assert!(classes(&class_names(ComponentKind::Toggle, selected)).contains(&"ring-2"));
    }

    #[test]
    fn focus_within_adds_a_color_ring() {
        let req = request(Variant::Outlined, ColorFamily::Warning, Size::Md).flags(StyleFlags {
            focus_within: true,
            ..StyleFlags::default()
        });
        let out = class_names(ComponentKind::Input, req);
        assert!(classes(&out).contains(&"focus-within:ring-warning-500"));
    }

    #[test]
    fn structural_roots_carry_no_palette() {
        let out = class_names(
            ComponentKind::Dialog,
            request(Variant::Solid, ColorFamily::Danger, Size::Lg).flags(StyleFlags {
                interactive: true,
                ..StyleFlags::default()
            }),
        );
        assert_eq!(out, "contents");
    }
}
