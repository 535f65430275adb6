//! Project settings panel.
//!
//! Edits are applied to the local signal immediately and persisted through
//! `on_update`; the name is persisted when the input loses focus.

use leptos::prelude::*;

use crate::commands::{Project, ProjectUpdate};

const BUILDING_TYPES: [(&str, &str); 3] = [
    ("apartment", "Apartment"),
    ("house", "House"),
    ("commercial", "Commercial"),
];

const PHASES: [&str; 2] = ["1 phase", "3 phases"];

#[component]
pub fn ProjectPanel(
    project: RwSignal<Option<Project>>,
    on_update: Callback<ProjectUpdate>,
    on_add_line: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&Project) -> String| {
        move || project.get().map(|p| read(&p)).unwrap_or_default()
    };

    let persist_name = move |_: leptos::ev::Event| {
        if let Some(p) = project.get_untracked() {
            on_update.run(ProjectUpdate {
                name: Some(p.name),
                ..Default::default()
            });
        }
    };

    let set_building_type = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        project.update(|p| {
            if let Some(p) = p {
                p.building_type = value.clone();
            }
        });
        on_update.run(ProjectUpdate {
            building_type: Some(value),
            ..Default::default()
        });
    };

    let set_wooden = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        project.update(|p| {
            if let Some(p) = p {
                p.wooden_construction = checked;
            }
        });
        on_update.run(ProjectUpdate {
            wooden_construction: Some(checked),
            ..Default::default()
        });
    };

    view! {
        <aside class="panel project-panel">
            <h2 class="panel-title">"Project Parameters"</h2>

            <div class="form-group">
                <label for="project-name">"Project Name"</label>
                <input
                    id="project-name"
                    type="text"
                    class="input"
                    prop:value=field(|p| p.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        project.update(|p| {
                            if let Some(p) = p {
                                p.name = value;
                            }
                        });
                    }
                    on:change=persist_name
                />
            </div>

            <div class="form-group">
                <label for="building-type">"Building Type"</label>
                <select
                    id="building-type"
                    class="input"
                    prop:value=field(|p| p.building_type.clone())
                    on:change=set_building_type
                >
                    {BUILDING_TYPES.into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div class="form-group">
                <label>"Phase"</label>
                {PHASES.into_iter().map(|phase| view! {
                    <label class="radio-row">
                        <input
                            type="radio"
                            name="project-phase"
                            value=phase
                            prop:checked=move || project.get().is_some_and(|p| p.phase == phase)
                            on:change=move |_| {
                                project.update(|p| {
                                    if let Some(p) = p {
                                        p.phase = phase.to_string();
                                    }
                                });
                                on_update.run(ProjectUpdate {
                                    phase: Some(phase.to_string()),
                                    ..Default::default()
                                });
                            }
                        />
                        <span>{phase}</span>
                    </label>
                }).collect::<Vec<_>>()}
            </div>

            <div class="form-group">
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || project.get().is_some_and(|p| p.wooden_construction)
                        on:change=set_wooden
                    />
                    <span>"Wooden construction?"</span>
                </label>
            </div>

            <button class="btn btn-primary btn-block" on:click=move |_| on_add_line.run(())>
                "+ Add line"
            </button>
        </aside>
    }
}

fn event_target_checked(ev: &leptos::ev::Event) -> bool {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|e| e.checked())
        .unwrap_or(false)
}
