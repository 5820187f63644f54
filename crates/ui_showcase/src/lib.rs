//! Component showcase for `styled_ui`.
//!
//! Renders every component family on plain, soft, and solid containers so the
//! inherited color, inverted variants, and size scopes can be reviewed side by
//! side in a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use styled_ui::prelude::*;

const THEME_TOML: &str = include_str!("../theme.toml");

/// Loads the embedded showcase theme, falling back to built-in defaults.
pub fn load_theme() -> ThemeConfig {
    match ThemeConfig::from_toml_str(THEME_TOML) {
        Ok(theme) => theme,
        Err(err) => {
            logging::warn!("showcase theme load failed: {err}");
            ThemeConfig::default()
        }
    }
}

#[component]
fn ButtonRow() -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <Button>"Default"</Button>
            <Button variant=Variant::Soft>"Soft"</Button>
            <Button variant=Variant::Outlined>"Outlined"</Button>
            <Button variant=Variant::Plain>"Plain"</Button>
            <Button color=ColorFamily::Danger variant=Variant::Solid>"Explicit danger"</Button>
            <IconButton aria_label="Settings">"⚙"</IconButton>
            <Badge>"badge"</Badge>
        </div>
    }
}

#[component]
fn ContainersSection() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold">"Inheritance"</h2>
            <Sheet variant=Variant::Outlined>
                <ButtonRow />
            </Sheet>
            <Sheet color=ColorFamily::Success variant=Variant::Soft>
                <ButtonRow />
            </Sheet>
            <Sheet color=ColorFamily::Primary variant=Variant::Solid>
                <ButtonRow />
                <Separator />
                <Sheet color=ColorFamily::Warning variant=Variant::Soft size=Size::Sm>
                    "Nested soft sheet shadows the solid one: "
                    <ButtonRow />
                </Sheet>
            </Sheet>
            <Card size=Size::Lg>
                "Card sized large; children inherit the size."
                <Sheet>
                    <ButtonRow />
                </Sheet>
            </Card>
            <Sheet interactive=true focus_within=true variant=Variant::Outlined>
                <Input placeholder="Focus me" aria_label="Focus demo" />
            </Sheet>
        </section>
    }
}

#[component]
fn ControlsSection() -> impl IntoView {
    let pressed = create_rw_signal(false);
    let text = create_rw_signal(String::new());

    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold">"Controls"</h2>
            <div class="flex flex-wrap items-center gap-2">
                <Toggle
                    pressed=pressed
                    on_pressed_change=Callback::new(move |next| pressed.set(next))
                >
                    {move || if pressed.get() { "Pinned" } else { "Pin" }}
                </Toggle>
                <Input
                    placeholder="Type something"
                    aria_label="Free text"
                    value=text
                    on_input=Callback::new(move |next| text.set(next))
                />
                <Button disabled=true>"Disabled"</Button>
            </div>
            <List aria_label="Sample list">
                <ListItem>"Static row"</ListItem>
                <ListItem selected=true on_click=Callback::new(|_| ())>"Selected row"</ListItem>
                <ListItem disabled=true on_click=Callback::new(|_| ())>"Disabled row"</ListItem>
            </List>
        </section>
    }
}

#[component]
fn OverlaysSection() -> impl IntoView {
    let last_action = create_rw_signal("none".to_string());

    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold">"Overlays"</h2>
            <div class="flex flex-wrap items-start gap-2">
                <DialogRoot id="confirm-dialog">
                    <DialogTrigger>"Open dialog"</DialogTrigger>
                    <DialogPopup>
                        <DialogTitle>"Discard draft?"</DialogTitle>
                        <DialogDescription>"The draft cannot be recovered."</DialogDescription>
                        <div class="flex justify-end gap-2">
                            <DialogClose variant=Variant::Plain>"Cancel"</DialogClose>
                            <DialogClose color=ColorFamily::Danger>"Discard"</DialogClose>
                        </div>
                    </DialogPopup>
                </DialogRoot>

                <DialogRoot id="solid-dialog" color=ColorFamily::Primary>
                    <DialogTrigger variant=Variant::Outlined>"Open solid dialog"</DialogTrigger>
                    <DialogPopup variant=Variant::Solid>
                        <DialogTitle>"Inverted content"</DialogTitle>
                        <DialogDescription>"Default buttons turn plain on this surface."</DialogDescription>
                        <DialogClose>"Close"</DialogClose>
                    </DialogPopup>
                </DialogRoot>

                <MenuRoot id="actions-menu">
                    <MenuTrigger variant=Variant::Outlined trailing_glyph="▾">"Actions"</MenuTrigger>
                    <MenuPopup aria_label="Actions">
                        <MenuItem on_select=Callback::new(move |_| last_action.set("rename".to_string()))>
                            "Rename"
                        </MenuItem>
                        <MenuItem on_select=Callback::new(move |_| last_action.set("duplicate".to_string()))>
                            "Duplicate"
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem
                            color=ColorFamily::Danger
                            on_select=Callback::new(move |_| last_action.set("delete".to_string()))
                        >
                            "Delete"
                        </MenuItem>
                    </MenuPopup>
                </MenuRoot>
            </div>
            <p class="text-sm">{move || format!("Last menu action: {}", last_action.get())}</p>
        </section>
    }
}

#[component]
fn TabsSection() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold">"Tabs"</h2>
            <TabsRoot id="showcase-tabs" default_value="overview" size=Size::Sm>
                <TabsList aria_label="Showcase sections">
                    <TabsTab value="overview">"Overview"</TabsTab>
                    <TabsTab value="usage">"Usage"</TabsTab>
                    <TabsTab value="disabled" disabled=true>"Disabled"</TabsTab>
                </TabsList>
                <TabsPanel value="overview">
                    <p>"Tabs root is sized small; the list and tabs inherit it."</p>
                </TabsPanel>
                <TabsPanel value="usage">
                    <Sheet color=ColorFamily::Neutral variant=Variant::Solid>
                        <Button>"Inverted inside a solid neutral sheet"</Button>
                    </Sheet>
                </TabsPanel>
            </TabsRoot>
        </section>
    }
}

#[component]
/// Root showcase view.
pub fn ShowcaseApp() -> impl IntoView {
    view! {
        <ThemeProvider config=load_theme()>
            <main class="mx-auto flex max-w-4xl flex-col gap-8 p-8">
                <h1 class="text-2xl font-bold">"styled_ui showcase"</h1>
                <ContainersSection />
                <ControlsSection />
                <OverlaysSection />
                <TabsSection />
            </main>
        </ThemeProvider>
    }
}

/// Mounts [`ShowcaseApp`] into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use styled_ui::{ComponentKind, Variant};

    use super::*;

    #[test]
    fn embedded_theme_parses() {
        let theme = ThemeConfig::from_toml_str(THEME_TOML).expect("embedded theme");
        assert_eq!(
            theme.defaults_for(ComponentKind::TabsList).variant,
            Variant::Plain
        );
        assert_eq!(theme.defaults_for(ComponentKind::MenuItem).size, Size::Sm);
    }

    #[test]
    fn load_theme_matches_direct_parse() {
        let parsed = ThemeConfig::from_toml_str(THEME_TOML).expect("embedded theme");
        assert_eq!(load_theme(), parsed);
    }
}
