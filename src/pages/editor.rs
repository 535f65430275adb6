//! Load-schedule editor: project parameters, power lines and results.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, LoadSummary, PowerLine, Project, ProjectUpdate};
use crate::components::add_line_modal::AddLineModal;
use crate::components::line_list::LineList;
use crate::components::project_panel::ProjectPanel;
use crate::components::results_panel::ResultsPanel;

#[component]
pub fn EditorPage() -> impl IntoView {
    let project = RwSignal::new(None::<Project>);
    let lines = RwSignal::new(Vec::<PowerLine>::new());
    let summary = RwSignal::new(None::<LoadSummary>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (modal_open, set_modal_open) = signal(false);

    let refresh_summary = move |project_id: i64| {
        spawn_local(async move {
            match commands::get_load_summary(project_id).await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => set_error.set(Some(format!("Failed to compute summary: {}", e))),
            }
        });
    };

    // Load (or create) the project on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_project().await {
                Ok(snapshot) => {
                    let id = snapshot.project.id;
                    project.set(Some(snapshot.project));
                    lines.set(snapshot.lines);
                    refresh_summary(id);
                }
                Err(e) => set_error.set(Some(format!("Failed to load project: {}", e))),
            }
            set_loading.set(false);
        });
    });

    let on_update = Callback::new(move |update: ProjectUpdate| {
        let Some(id) = project.get_untracked().map(|p| p.id) else {
            return;
        };
        spawn_local(async move {
            match commands::update_project(id, update).await {
                Ok(saved) => {
                    project.set(Some(saved));
                    refresh_summary(id);
                }
                Err(e) => set_error.set(Some(format!("Failed to save project: {}", e))),
            }
        });
    });

    let on_added = Callback::new(move |line: PowerLine| {
        let id = line.project_id;
        lines.update(|l| l.push(line));
        refresh_summary(id);
    });

    view! {
        <div class="page editor-page">
            <style>{include_str!("editor.css")}</style>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn-icon" on:click=move |_| set_error.set(None)>"×"</button>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading-text">"Loading project..."</p> }
            >
                <div class="editor-grid">
                    <ProjectPanel
                        project=project
                        on_update=on_update
                        on_add_line=Callback::new(move |_| set_modal_open.set(true))
                    />
                    <LineList lines=lines />
                    <ResultsPanel summary=summary />
                </div>
            </Show>

            {move || {
                let id = project.get().map(|p| p.id)?;
                modal_open.get().then(|| view! {
                    <AddLineModal
                        project_id=id
                        on_added=on_added
                        on_close=Callback::new(move |_| set_modal_open.set(false))
                    />
                })
            }}
        </div>
    }
}
