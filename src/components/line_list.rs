use leptos::prelude::*;

use crate::commands::PowerLine;
use crate::components::power_line_card::PowerLineCard;

#[component]
pub fn LineList(#[prop(into)] lines: Signal<Vec<PowerLine>>) -> impl IntoView {
    view! {
        <section class="panel line-list">
            <h2 class="panel-title">
                "Power Lines"
                <span class="line-count">{move || format!("({})", lines.get().len())}</span>
            </h2>

            <Show
                when=move || !lines.get().is_empty()
                fallback=|| view! {
                    <p class="line-list-empty">"No power lines yet. Click \"Add line\" to get started."</p>
                }
            >
                <div class="line-list-items">
                    <For
                        each=move || lines.get()
                        key=|line| line.id
                        children=move |line| view! { <PowerLineCard line=line /> }
                    />
                </div>
            </Show>
        </section>
    }
}
