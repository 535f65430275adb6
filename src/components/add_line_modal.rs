//! Dialog for adding a power line.
//!
//! The line is sized on "Calculate"; any later edit discards the preview, and
//! a response that arrives after an edit is dropped, so only a recommendation
//! matching the current inputs is shown.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, DeviceRecommendation, LineDraft, LoadKindInfo, PowerLine};
use crate::format::{self, round_tenth};

const MIN_POWER_KW: f64 = 0.1;
const MIN_LENGTH_M: f64 = 0.1;
/// Power for a tag missing from the load kind list.
const FALLBACK_POWER_KW: f64 = 2.0;

const INITIAL_KIND: &str = "socket";
/// Default power of `INITIAL_KIND`, used until the kind list arrives.
const INITIAL_POWER_KW: f64 = 3.5;

const INSTALL_METHODS: [(&str, &str); 4] = [
    ("in_chase", "In chase"),
    ("in_trunking", "In trunking"),
    ("open", "Open"),
    ("underground", "Underground"),
];

fn default_power_for(kinds: &[LoadKindInfo], tag: &str) -> f64 {
    kinds
        .iter()
        .find(|k| k.tag == tag)
        .map(|k| k.default_power_kw)
        .unwrap_or(FALLBACK_POWER_KW)
}

/// Parse the power field; unparsable or too small entries become the minimum.
fn parse_power(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => round_tenth(value.max(MIN_POWER_KW)),
        _ => MIN_POWER_KW,
    }
}

/// Counter identifying the inputs a preview request was made for.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PreviewSeq(u32);

impl PreviewSeq {
    fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    fn accepts(self, ticket: PreviewSeq) -> bool {
        self == ticket
    }
}

/// Split kinds into `(group label, kinds)` keeping first-seen order.
fn group_kinds(kinds: Vec<LoadKindInfo>) -> Vec<(String, Vec<LoadKindInfo>)> {
    let mut groups: Vec<(String, Vec<LoadKindInfo>)> = Vec::new();
    for kind in kinds {
        match groups.iter_mut().find(|(label, _)| *label == kind.group_label) {
            Some((_, members)) => members.push(kind),
            None => groups.push((kind.group_label.clone(), vec![kind])),
        }
    }
    groups
}

#[component]
pub fn AddLineModal(
    project_id: i64,
    on_added: Callback<PowerLine>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (kinds, set_kinds) = signal(Vec::<LoadKindInfo>::new());
    let (name, set_name) = signal(String::new());
    let (kind, set_kind) = signal(String::from(INITIAL_KIND));
    let (power_kw, set_power_kw) = signal(INITIAL_POWER_KW);
    let (power_touched, set_power_touched) = signal(false);
    let (length_m, set_length_m) = signal(10.0_f64);
    let (phase_count, set_phase_count) = signal(String::from("1 phase"));
    let (install_method, set_install_method) = signal(String::from("in_chase"));
    let (preview, set_preview) = signal::<Option<DeviceRecommendation>>(None);
    let (seq, set_seq) = signal(PreviewSeq::default());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_load_kinds().await {
                Ok(list) => {
                    if !power_touched.get_untracked() {
                        set_power_kw.set(default_power_for(&list, &kind.get_untracked()));
                    }
                    set_kinds.set(list);
                }
                Err(e) => set_error.set(Some(format!("Failed to load load types: {}", e))),
            }
        });
    });

    // Inputs changed; the old recommendation no longer applies
    let invalidate = move || {
        set_seq.update(|s| s.bump());
        set_preview.set(None);
        set_error.set(None);
    };

    let length_valid = move || length_m.get() >= MIN_LENGTH_M;
    let can_calculate = move || !name.get().trim().is_empty() && length_valid() && !busy.get();

    let draft = move || LineDraft {
        name: name.get_untracked(),
        kind: kind.get_untracked(),
        power_kw: power_kw.get_untracked(),
        length_m: length_m.get_untracked(),
        phase_count: phase_count.get_untracked(),
        install_method: install_method.get_untracked(),
    };

    let choose_kind = move |ev: leptos::ev::Event| {
        let tag = event_target_value(&ev);
        let default_kw = kinds.with_untracked(|list| default_power_for(list, &tag));
        set_kind.set(tag);
        set_power_kw.set(default_kw);
        set_power_touched.set(true);
        invalidate();
    };

    let step_power = move |delta: f64| {
        set_power_kw.update(|p| *p = round_tenth((*p + delta).max(MIN_POWER_KW)));
        set_power_touched.set(true);
        invalidate();
    };

    let set_power = move |ev: leptos::ev::Event| {
        set_power_kw.set(parse_power(&event_target_value(&ev)));
        set_power_touched.set(true);
        invalidate();
    };

    let set_length = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
        set_length_m.set(value);
        invalidate();
    };

    let calculate = move |_: leptos::ev::MouseEvent| {
        let draft = draft();
        let ticket = seq.get_untracked();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = commands::preview_power_line(&draft).await;
            set_busy.set(false);
            if !seq.get_untracked().accepts(ticket) {
                return;
            }
            match result {
                Ok(rec) => set_preview.set(Some(rec)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let add = move |_: leptos::ev::MouseEvent| {
        let draft = draft();
        set_busy.set(true);
        spawn_local(async move {
            match commands::add_power_line(project_id, &draft).await {
                Ok(line) => {
                    on_added.run(line);
                    on_close.run(());
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="add-line-overlay">
            <style>{include_str!("add_line_modal.css")}</style>
            <div class="add-line-dialog">
                <div class="dialog-header">
                    <h3>"Add line"</h3>
                    <button class="btn-icon" title="Close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="form-group">
                    <label for="line-name">"Line name"</label>
                    <input
                        id="line-name"
                        type="text"
                        class="input"
                        placeholder="Kitchen sockets"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            set_name.set(event_target_value(&ev));
                            invalidate();
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="line-kind">"Load type"</label>
                    <select
                        id="line-kind"
                        class="input"
                        prop:value=move || kind.get()
                        on:change=choose_kind
                    >
                        {move || group_kinds(kinds.get()).into_iter().map(|(label, members)| view! {
                            <optgroup label=label>
                                {members.into_iter().map(|k| view! {
                                    <option value=k.tag.clone()>{k.label.clone()}</option>
                                }).collect::<Vec<_>>()}
                            </optgroup>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Power"</label>
                    <div class="stepper">
                        <button class="btn btn-secondary" on:click=move |_| step_power(-0.1)>"−"</button>
                        <input
                            type="number"
                            class="input input-short stepper-value"
                            min="0.1"
                            step="0.1"
                            prop:value=move || power_kw.get().to_string()
                            on:change=set_power
                        />
                        <span class="unit">"kW"</span>
                        <button class="btn btn-secondary" on:click=move |_| step_power(0.1)>"+"</button>
                    </div>
                </div>

                <div class="form-group">
                    <label for="line-length">"Line length, m"</label>
                    <div class="input-row">
                        <input
                            type="range"
                            min="0"
                            max="100"
                            step="0.1"
                            prop:value=move || length_m.get().to_string()
                            on:input=set_length
                        />
                        <input
                            id="line-length"
                            type="number"
                            class="input input-short"
                            min="0"
                            step="0.1"
                            prop:value=move || length_m.get().to_string()
                            on:input=set_length
                        />
                    </div>
                    <Show when=move || !length_valid()>
                        <span class="field-error">"Line length cannot be less than 0.1 m"</span>
                    </Show>
                </div>

                <div class="form-group">
                    <label>"Phases"</label>
                    {["1 phase", "3 phases"].into_iter().map(|phase| view! {
                        <label class="radio-row">
                            <input
                                type="radio"
                                name="line-phase"
                                value=phase
                                prop:checked=move || phase_count.get() == phase
                                on:change=move |_| {
                                    set_phase_count.set(phase.to_string());
                                    invalidate();
                                }
                            />
                            <span>{phase}</span>
                        </label>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="form-group">
                    <label for="install-method">"Installation method"</label>
                    <select
                        id="install-method"
                        class="input"
                        prop:value=move || install_method.get()
                        on:change=move |ev| {
                            set_install_method.set(event_target_value(&ev));
                            invalidate();
                        }
                    >
                        {INSTALL_METHODS.into_iter().map(|(value, label)| view! {
                            <option value=value>{label}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <button
                    class="btn btn-primary btn-block"
                    disabled=move || !can_calculate()
                    on:click=calculate
                >
                    {move || if busy.get() { "Calculating..." } else { "Calculate" }}
                </button>

                <Show when=move || error.get().is_some()>
                    <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                </Show>

                {move || preview.get().map(|rec| view! {
                    <div class="line-preview">
                        <h4>"Recommendation"</h4>
                        <dl>
                            <dt>"Breaker"</dt><dd>{rec.breaker_rating}</dd>
                            <dt>"Cable"</dt><dd>{rec.cable_spec}</dd>
                            <dt>"RCD"</dt><dd>{rec.rcd_rating}</dd>
                            <dt>"AFDD"</dt><dd>{format::yes_no(rec.afdd_present)}</dd>
                        </dl>
                        <button class="btn btn-primary btn-block" disabled=move || busy.get() on:click=add>
                            "Add line"
                        </button>
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tag: &str, group_label: &str) -> LoadKindInfo {
        LoadKindInfo {
            tag: tag.to_string(),
            label: tag.to_string(),
            group: group_label.to_lowercase(),
            group_label: group_label.to_string(),
            default_power_kw: 1.0,
            category: "generic".to_string(),
        }
    }

    #[test]
    fn test_initial_power_matches_initial_kind() {
        let kinds = vec![LoadKindInfo {
            default_power_kw: 3.5,
            ..info(INITIAL_KIND, "Basic")
        }];
        assert_eq!(default_power_for(&kinds, INITIAL_KIND), INITIAL_POWER_KW);
        assert_eq!(default_power_for(&kinds, "unknown"), FALLBACK_POWER_KW);
    }

    #[test]
    fn test_parse_power_clamps_and_falls_back() {
        assert_eq!(parse_power("25"), 25.0);
        assert_eq!(parse_power(" 7.04 "), 7.0);
        assert_eq!(parse_power("0"), MIN_POWER_KW);
        assert_eq!(parse_power("-3"), MIN_POWER_KW);
        assert_eq!(parse_power("abc"), MIN_POWER_KW);
        assert_eq!(parse_power(""), MIN_POWER_KW);
        assert_eq!(parse_power("NaN"), MIN_POWER_KW);
    }

    #[test]
    fn test_preview_seq_rejects_responses_after_edit() {
        let mut seq = PreviewSeq::default();
        let ticket = seq;
        assert!(seq.accepts(ticket));

        seq.bump();
        assert!(!seq.accepts(ticket), "Response for old inputs must be dropped");
        assert!(seq.accepts(seq));
    }

    #[test]
    fn test_group_kinds_keeps_order() {
        let groups = group_kinds(vec![
            info("socket", "Basic"),
            info("pump", "Private house"),
            info("lamp", "Basic"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Basic");
        let tags: Vec<_> = groups[0].1.iter().map(|k| k.tag.as_str()).collect();
        assert_eq!(tags, ["socket", "lamp"]);
        assert_eq!(groups[1].1[0].tag, "pump");
    }
}
