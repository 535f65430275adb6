use leptos::prelude::*;

use crate::commands::LoadSummary;
use crate::format;

/// Main supply proposal, total power and installation notes.
#[component]
pub fn ResultsPanel(#[prop(into)] summary: Signal<Option<LoadSummary>>) -> impl IntoView {
    let main_field = move |pick: fn(&crate::commands::MainRecommendation) -> String| {
        move || {
            summary
                .get()
                .and_then(|s| s.main.as_ref().map(pick))
                .unwrap_or_else(|| "--".to_string())
        }
    };

    let total = move || {
        format::kw(summary.get().map(|s| s.total_power_kw).unwrap_or(0.0))
    };

    let notes = move || summary.get().map(|s| s.notes).unwrap_or_default();

    view! {
        <aside class="panel results-panel">
            <h2 class="panel-title">"Results"</h2>

            <div class="result-tile">
                <div class="result-label">"Main Breaker"</div>
                <div class="result-value">{main_field(|m| m.breaker_rating.clone())}</div>
            </div>
            <div class="result-tile">
                <div class="result-label">"Input Cable"</div>
                <div class="result-value">{main_field(|m| m.cable_spec.clone())}</div>
            </div>
            <div class="result-tile">
                <div class="result-label">"Total Power"</div>
                <div class="result-value">{total}</div>
            </div>

            <div class="result-notes">
                <h3>"Specifications"</h3>
                <ul>
                    {move || notes().into_iter().map(|note| view! {
                        <li class="result-note">{note}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>

            <div class="result-actions">
                <button class="btn btn-secondary" disabled=true title="Not available yet">
                    "Export PDF"
                </button>
                <button class="btn btn-secondary" disabled=true title="Not available yet">
                    "Single-line diagram"
                </button>
            </div>
        </aside>
    }
}
