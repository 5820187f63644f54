use super::*;

#[component]
/// Styled action button.
///
/// Without an explicit `color` the button takes its container's color; without
/// an explicit `variant` it uses its default, inverted inside solid containers.
pub fn Button(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_glyph: Option<&'static str>,
    #[prop(optional)] trailing_glyph: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Button, color, variant, size);
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
            type=button_type
            class=class
            id=id
            role=role
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {leading_glyph.map(|glyph| view! { <span data-ui-slot="leading" aria-hidden="true">{glyph}</span> })}
            {children()}
            {trailing_glyph.map(|glyph| view! { <span data-ui-slot="trailing" aria-hidden="true">{glyph}</span> })}
        </button>
    }
}

#[component]
/// Square icon-only button. `aria_label` is required since there is no text.
pub fn IconButton(
    #[prop(into)] aria_label: String,
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::IconButton, color, variant, size);
    let class = move || {
        styled.class(
            StyleFlags {
                interactive: true,
                disabled: disabled.get(),
                ..StyleFlags::default()
            },
            layout_class,
        )
    };

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span aria-hidden="true">{children()}</span>
        </button>
    }
}

#[component]
/// Two-state button exposing `aria-pressed`.
pub fn Toggle(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_pressed_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Toggle, color, variant, size);
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_pressed_change) = on_pressed_change.as_ref() {
            on_pressed_change.call(!pressed.get_untracked());
        }
    };
    let class = move || {
        styled.class(
            StyleFlags {
                interactive: true,
                selected: pressed.get(),
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
            aria-label=aria_label
            aria-pressed=move || pressed.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
        >
            {children()}
        </button>
    }
}

#[component]
/// Single-line text field with a focus-within ring on its frame.
pub fn Input(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Input, color, variant, size);
    let class = move || {
        styled.class(
            StyleFlags {
                focus_within: true,
                disabled: disabled.get(),
                ..StyleFlags::default()
            },
            layout_class,
        )
    };

    view! {
        <div
            class=class
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <input
                class="min-w-0 flex-1 bg-transparent outline-none placeholder:opacity-60"
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
