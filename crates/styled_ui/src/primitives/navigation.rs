use super::*;

#[derive(Clone, Copy)]
struct TabsContext {
    selected: RwSignal<String>,
    id: StoredValue<String>,
    on_value_change: StoredValue<Option<Callback<String>>>,
}

impl TabsContext {
    fn select(self, value: String) {
        if self.selected.with_untracked(|selected| *selected == value) {
            return;
        }
        self.selected.set(value.clone());
        self.on_value_change.with_value(|on_value_change| {
            if let Some(on_value_change) = on_value_change.as_ref() {
                on_value_change.call(value);
            }
        });
    }

    fn is_selected(self, value: StoredValue<String>) -> bool {
        self.selected
            .with(|selected| value.with_value(|value| selected == value))
    }
}

fn tab_id(tabs: TabsContext, value: StoredValue<String>) -> String {
    value.with_value(|value| part_id(tabs.id, &format!("tab-{value}")))
}

fn panel_id(tabs: TabsContext, value: StoredValue<String>) -> String {
    value.with_value(|value| part_id(tabs.id, &format!("panel-{value}")))
}

#[component]
/// Root of a tabs family. Owns the selected value.
pub fn TabsRoot(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    /// Externally owned selection. A local signal seeded from `default_value`
    /// is created when omitted.
    #[prop(optional)] value: Option<RwSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(into, default = "tabs".to_string())] id: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::Tabs, color, variant, size);
    let tabs = TabsContext {
        selected: value.unwrap_or_else(|| create_rw_signal(default_value)),
        id: store_value(id),
        on_value_change: store_value(on_value_change),
    };
    let body = run_as_child(move || {
        provide_context(tabs);
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
        >
            {body}
        </div>
    }
}

#[component]
/// Strip of [`TabsTab`] triggers.
pub fn TabsList(
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::TabsList, color, variant, size);

    view! {
        <div
            class=styled.class(StyleFlags::default(), layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
        >
            {styled.provide(size, children)}
        </div>
    }
}

#[component]
/// Tab trigger selecting `value`.
pub fn TabsTab(
    #[prop(into)] value: String,
    #[prop(optional)] color: Option<ColorFamily>,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let styled = Styled::resolve(ComponentKind::TabsTab, color, variant, size);
    let tabs = family_context::<TabsContext>("TabsTab", "TabsRoot");
    let value = store_value(value);
    let selected = move || tabs.is_some_and(|tabs| tabs.is_selected(value));
    let class = move || {
        styled.class(
            StyleFlags {
                interactive: true,
                selected: selected(),
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
            role="tab"
            id=tabs.map(|tabs| tab_id(tabs, value))
            aria-controls=tabs.map(|tabs| panel_id(tabs, value))
            aria-selected=move || selected().to_string()
            tabindex=move || if selected() { 0 } else { -1 }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind=styled.kind_token()
            data-ui-color=styled.color_token()
            data-ui-variant=styled.variant_token()
            data-ui-size=styled.size_token()
            data-ui-selected=move || bool_token(selected())
            on:click=move |_| {
                if let Some(tabs) = tabs {
                    tabs.select(value.get_value());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Content shown while `value` is the selected tab.
pub fn TabsPanel(
    #[prop(into)] value: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = family_context::<TabsContext>("TabsPanel", "TabsRoot");
    let value = store_value(value);
    let class = merge_layout_class("outline-none".to_string(), layout_class);

    view! {
        <Show when=move || tabs.is_some_and(|tabs| tabs.is_selected(value)) fallback=|| ()>
            <div
                class=class.clone()
                role="tabpanel"
                tabindex="0"
                id=tabs.map(|tabs| panel_id(tabs, value))
                aria-labelledby=tabs.map(|tabs| tab_id(tabs, value))
                data-ui-primitive="true"
                data-ui-kind="tabs-panel"
            >
                {children()}
            </div>
        </Show>
    }
}
