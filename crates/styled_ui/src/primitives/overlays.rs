use super::*;

#[derive(Clone, Copy)]
struct DialogContext {
    open: RwSignal<bool>,
    id: StoredValue<String>,
    on_open_change: StoredValue<Option<Callback<bool>>>,
}

impl DialogContext {
    fn set_open(self, open: bool) {
        self.open.set(open);
        self.on_open_change.with_value(|on_open_change| {
            if let Some(on_open_change) = on_open_change.as_ref() {
                on_open_change.call(open);
            }
        });
    }
}

fn title_class(size: Size) -> &'static str {
    match size {
        Size::Sm => "text-base font-semibold",
        Size::Md => "text-lg font-semibold",
        Size::Lg => "text-xl font-semibold",
    }
}

#[component]
/// Root of a dialog family. Owns the open state and publishes its style to the
/// trigger, popup, and everything inside them.
pub fn DialogRoot(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    /// Externally owned open state. A local signal is created when omitted.
    #[prop(optional)] open: Option<RwSignal<bool>>,
    #[prop(optional)] default_open: bool,
    /// Prefix for the generated popup, title, and description ids.
    #[prop(into, default = "dialog".to_string())]
    id: String,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Dialog, color, variant, size);
    let open = open.unwrap_or_else(|| create_rw_signal(default_open));
    let dialog = DialogContext {
        open,
        id: store_value(id),
        on_open_change: store_value(on_open_change),
    };
    let body = run_as_child(move || {
        provide_context(dialog);
        styled.provide(size, children)
    });

    view! {
        <div
            class=styled.class(StyleFlags::default(), layout_class)
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-state=move || open_state_token(open.get())
        >
            {body}
        </div>
    }
}

#[component]
/// Button that opens the enclosing dialog.
pub fn DialogTrigger(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Button, color, variant, size);
    let dialog = family_context::<DialogContext>("DialogTrigger", "DialogRoot");

    view! {
        <button
            type="button"
            class=styled.class(INTERACTIVE, layout_class)
            aria-haspopup="dialog"
            aria-controls=dialog.map(|dialog| part_id(dialog.id, "popup"))
            aria-expanded=move || dialog.map(|dialog| dialog.open.get().to_string())
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-slot="dialog-trigger"
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            on:click=move |_| {
                if let Some(dialog) = dialog {
                    dialog.set_open(true);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Dialog content surface, rendered while the dialog is open. Escape and a
/// backdrop click close it.
pub fn DialogPopup(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = true)] dismiss_on_backdrop: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::DialogPopup, color, variant, size);
    let dialog = family_context::<DialogContext>("DialogPopup", "DialogRoot");
    let class = styled.class(StyleFlags::default(), layout_class);
    let aria_label = store_value(aria_label);
    let is_open = move || dialog.is_some_and(|dialog| dialog.open.get());
    let close = move || {
        if let Some(dialog) = dialog {
            dialog.set_open(false);
        }
    };

    view! {
        <Show when=is_open fallback=|| ()>
            <div
                class="fixed inset-0 z-40 bg-black/40"
                aria-hidden="true"
                data-ui-slot="backdrop"
                on:click=move |_| {
                    if dismiss_on_backdrop {
                        close();
                    }
                }
            ></div>
            <div
                class=class.clone()
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                id=dialog.map(|dialog| part_id(dialog.id, "popup"))
                aria-labelledby=dialog.map(|dialog| part_id(dialog.id, "title"))
                aria-describedby=dialog.map(|dialog| part_id(dialog.id, "description"))
                aria-label=aria_label.get_value()
                data-ui-primitive="true"
                data-ui-kind=styled.kind_token()
                data-ui-color=styled.color_token()
                data-ui-variant=styled.variant_token()
                data-ui-size=styled.size_token()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
            >
                {
                    let children = children.clone();
                    styled.provide(size, move || children())
                }
            </div>
        </Show>
    }
}

#[component]
/// Dialog heading, sized from the nearest size scope.
pub fn DialogTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let dialog = family_context::<DialogContext>("DialogTitle", "DialogRoot");
    let size = use_resolved_size_props(None, use_component_defaults(ComponentKind::DialogPopup));

    view! {
        <h2
            class=merge_layout_class(title_class(size).to_string(), layout_class)
            id=dialog.map(|dialog| part_id(dialog.id, "title"))
            data-ui-slot="title"
            data-ui-size=size.token()
        >
            {children()}
        </h2>
    }
}

#[component]
/// Supporting dialog text.
pub fn DialogDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let dialog = family_context::<DialogContext>("DialogDescription", "DialogRoot");

    view! {
        <p
            class=merge_layout_class("text-sm opacity-80".to_string(), layout_class)
            id=dialog.map(|dialog| part_id(dialog.id, "description"))
            data-ui-slot="description"
        >
            {children()}
        </p>
    }
}

#[component]
/// Button that closes the enclosing dialog.
pub fn DialogClose(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Button, color, variant, size);
    let dialog = family_context::<DialogContext>("DialogClose", "DialogRoot");

    view! {
        <button
            type="button"
            class=styled.class(INTERACTIVE, layout_class)
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-slot="dialog-close"
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            on:click=move |_| {
                if let Some(dialog) = dialog {
                    dialog.set_open(false);
                }
            }
        >
            {children()}
        </button>
    }
}

#[derive(Clone, Copy)]
struct MenuContext {
    open: RwSignal<bool>,
    id: StoredValue<String>,
}

#[component]
/// Root of a menu family. Owns the open state and anchors the popup.
pub fn MenuRoot(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] open: Option<RwSignal<bool>>,
    #[prop(into, default = "menu".to_string())] id: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Menu, color, variant, size);
    let open = open.unwrap_or_else(|| create_rw_signal(false));
    let menu = MenuContext {
        open,
        id: store_value(id),
    };
    let body = run_as_child(move || {
        provide_context(menu);
        styled.provide(size, children)
    });

    view! {
        <div
            class=styled.class(StyleFlags::default(), layout_class)
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-state=move || open_state_token(open.get())
        >
            {body}
        </div>
    }
}

#[component]
/// Button that toggles the enclosing menu.
pub fn MenuTrigger(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] trailing_glyph: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Button, color, variant, size);
    let menu = family_context::<MenuContext>("MenuTrigger", "MenuRoot");

    view! {
        <button
            type="button"
            class=styled.class(INTERACTIVE, layout_class)
            aria-haspopup="menu"
            aria-controls=menu.map(|menu| part_id(menu.id, "popup"))
            aria-expanded=move || menu.map(|menu| menu.open.get().to_string())
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-slot="menu-trigger"
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            on:click=move |_| {
                if let Some(menu) = menu {
                    menu.open.update(|open| *open = !*open);
                }
            }
        >
            {children()}
            {trailing_glyph.map(|glyph| view! { <span data-ui-slot="trailing" aria-hidden="true">{glyph}</span> })}
        </button>
    }
}

#[component]
/// Menu surface, rendered while the menu is open. Escape closes it.
pub fn MenuPopup(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::MenuPopup, color, variant, size);
    let menu = family_context::<MenuContext>("MenuPopup", "MenuRoot");
    let class = styled.class(StyleFlags::default(), layout_class);
    let aria_label = store_value(aria_label);

    view! {
        <Show when=move || menu.is_some_and(|menu| menu.open.get()) fallback=|| ()>
            <div
                class=class.clone()
                role="menu"
                id=menu.map(|menu| part_id(menu.id, "popup"))
                aria-label=aria_label.get_value()
                data-ui-primitive="true"
                data-ui-kind=styled.kind_token()
                data-ui-color=styled.color_token()
                data-ui-variant=styled.variant_token()
                data-ui-size=styled.size_token()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        if let Some(menu) = menu {
                            menu.open.set(false);
                        }
                    }
                }
            >
                {
                    let children = children.clone();
                    styled.provide(size, move || children())
                }
            </div>
        </Show>
    }
}

#[component]
/// Selectable menu row. Closes the menu after `on_select` unless told not to.
pub fn MenuItem(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] close_on_select: bool,
    #[prop(optional)] on_select: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::MenuItem, color, variant, size);
    let menu = family_context::<MenuContext>("MenuItem", "MenuRoot");
    let class = move || {
        styled.class(
            StyleFlags {
                interactive: true,
                selected: selected.get(),
                disabled: disabled.get(),
                focus_within: false,
            },
            layout_class,
        )
    };

    view! {
        <button
            type="button"
            class=class
            role="menuitem"
            tabindex="-1"
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(ev);
                }
                if close_on_select {
                    if let Some(menu) = menu {
                        menu.open.set(false);
                    }
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Divider between menu item groups.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Separator, None, None, None);

    view! {
        <div
            class=styled.class(StyleFlags::default(), layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}
