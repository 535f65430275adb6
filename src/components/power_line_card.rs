use leptos::prelude::*;

use crate::commands::PowerLine;
use crate::format;

/// Glyph shown next to a line, keyed by its load kind tag.
fn icon_for(tag: &str) -> &'static str {
    match tag {
        "lamp" => "\u{1F4A1}",
        "stove" => "\u{1F525}",
        "pump" | "pump_fecal" => "\u{1F4A7}",
        "sauna" => "\u{1F30A}",
        _ => "\u{1F50C}",
    }
}

#[component]
pub fn PowerLineCard(line: PowerLine) -> impl IntoView {
    let fields = [
        ("Power", format::kw_exact(line.power_kw)),
        ("Length", format::metres(line.length_m)),
        ("Breaker", line.breaker.clone()),
        ("Cable", line.cable.clone()),
        ("RCD", line.rcd.clone()),
        ("AFDD", format::yes_no(line.afdd).to_string()),
    ];

    view! {
        <div class="line-card">
            <div class="line-card-icon">{icon_for(&line.icon)}</div>
            <div class="line-card-body">
                <h3 class="line-card-name">{line.name.clone()}</h3>
                <div class="line-card-grid">
                    {fields.into_iter().map(|(label, value)| view! {
                        <div class="line-card-field">
                            {label}": "<span class="line-card-value">{value}</span>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
