use super::*;

/// Describes why a sheet's flag combination is pointless, if it is.
///
/// The focus-within ring only appears when something inside the sheet can take
/// focus, which a non-interactive sheet does not promise.
pub fn focus_within_misuse(interactive: bool, focus_within: bool) -> Option<&'static str> {
    (focus_within && !interactive).then_some(
        "Sheet: `focus_within` has no effect on a non-interactive sheet; set `interactive` too",
    )
}

#[component]
/// Generic styled surface. Publishes its resolved color, variant, and any
/// explicit size to its children.
pub fn Sheet(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] focus_within: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    if cfg!(debug_assertions) {
        if let Some(message) = focus_within_misuse(interactive, focus_within) {
            logging::warn!("{message}");
        }
    }

    let styled = Styled::resolve(ComponentKind::Sheet, color, variant, size);
    let class = styled.class(
        StyleFlags {
            interactive,
            focus_within: focus_within && interactive,
            ..StyleFlags::default()
        },
        layout_class,
    );

    view! {
        <div
            class=class
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-slot=ui_slot
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-interactive=bool_token(interactive)
        >
            {styled.provide(size, children)}
        </div>
    }
}

#[component]
/// Framed content container.
pub fn Card(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Card, color, variant, size);

    view! {
        <article
            class=styled.class(StyleFlags::default(), layout_class)
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-slot=ui_slot
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
        >
            {styled.provide(size, children)}
        </article>
    }
}

#[component]
/// Vertical list of [`ListItem`]s.
pub fn List(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::List, color, variant, size);

    view! {
        <ul
            class=styled.class(StyleFlags::default(), layout_class)
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
        >
            {styled.provide(size, children)}
        </ul>
    }
}

#[component]
/// Row inside a [`List`]. Becomes interactive when `on_click` is set.
pub fn ListItem(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::ListItem, color, variant, size);
    let interactive = on_click.is_some();
    let class = move || {
        styled.class(
            StyleFlags {
                interactive,
                selected: selected.get(),
                disabled: disabled.get(),
                focus_within: false,
            },
            layout_class,
        )
    };

    view! {
        <li
            class=class
            tabindex=interactive.then_some(0)
            aria-selected=move || interactive.then(|| selected.get().to_string())
            aria-disabled=move || disabled.get().then_some("true")
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </li>
    }
}

#[component]
/// Inline status label.
pub fn Badge(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Badge, color, variant, size);

    view! {
        <span
            class=styled.class(StyleFlags::default(), layout_class)
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Horizontal rule tinted with the container's color.
pub fn Separator(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Separator, color, None, size);

    view! {
        <div
            class=styled.class(StyleFlags::default(), layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn focus_within_on_a_static_sheet_is_flagged() {
        assert!(focus_within_misuse(false, true).is_some());
    }

    #[test]
    fn other_flag_combinations_are_fine() {
        assert_eq!(focus_within_misuse(true, true), None);
        assert_eq!(focus_within_misuse(true, false), None);
        assert_eq!(focus_within_misuse(false, false), None);
    }
}
