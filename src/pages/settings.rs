use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::theme::{Theme, ThemeContext};

const SIZING_RULES_KEY: &str = "sizing_rules_path";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    let (rules_path, set_rules_path) = signal(String::new());
    let (path_status, set_path_status) = signal::<Option<String>>(None);

    // Load existing sizing rules path on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_preference(SIZING_RULES_KEY).await {
                Ok(Some(path)) => set_rules_path.set(path),
                Ok(None) => {}
                Err(e) => {
                    set_path_status.set(Some(format!("Failed to load preference: {}", e)));
                }
            }
        });
    });

    let change_theme = move |ev: leptos::ev::Event| {
        let selected = Theme::from_pref(&event_target_value(&ev));
        set_theme.set(selected);
        spawn_local(async move {
            let _ = commands::set_preference("theme", selected.as_pref()).await;
        });
    };

    let save_rules_path = move |_| {
        let path = rules_path.get();
        spawn_local(async move {
            match commands::set_preference(SIZING_RULES_KEY, path.trim()).await {
                Ok(()) if path.trim().is_empty() => {
                    set_path_status.set(Some("Using built-in sizing rules".to_string()));
                }
                Ok(()) => set_path_status.set(Some("Sizing rules saved".to_string())),
                Err(e) => set_path_status.set(Some(format!("Failed to save: {}", e))),
            }
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="form-group">
                    <label for="theme">"Theme"</label>
                    <select
                        id="theme"
                        class="input"
                        prop:value=move || theme.get().as_pref()
                        on:change=change_theme
                    >
                        {Theme::ALL.into_iter().map(|t| view! {
                            <option value=t.as_pref()>{t.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Sizing Rules"</h3>
                <p class="section-description">
                    "Path to a TOML file with breaker and cable tables. Leave empty to use the built-in rules."
                </p>

                <div class="form-group">
                    <label for="rules-path">"Sizing Rules File"</label>
                    <div class="input-row">
                        <input
                            id="rules-path"
                            type="text"
                            placeholder="/path/to/sizing_rules.toml"
                            class="input"
                            prop:value=move || rules_path.get()
                            on:input=move |ev| {
                                set_rules_path.set(event_target_value(&ev));
                            }
                        />
                        <button class="btn btn-save" on:click=save_rules_path>"Save"</button>
                    </div>
                    <Show when=move || path_status.get().is_some()>
                        <span class="status-text">{move || path_status.get().unwrap_or_default()}</span>
                    </Show>
                </div>
            </section>
        </div>
    }
}
