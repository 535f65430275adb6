//! Project operations over an injected store.
//!
//! Each function is a single request/response step: it receives the store
//! and engine it needs, does its work, and returns plain data.

use tracing::info;

use super::store::ProjectStore;
use super::types::*;
use crate::error::SmartCircuitError;
use crate::sizing::{DeviceRecommendation, LoadSpecification, SizingEngine};

/// Shortest cable run the editor accepts, in metres.
pub const MIN_LENGTH_M: f64 = 0.1;

/// Return the current project and its lines, creating and seeding a
/// default project on first run.
pub fn initialize_project<S: ProjectStore>(store: &S) -> Result<ProjectSnapshot, SmartCircuitError> {
    let project = match store.latest_project()? {
        Some(project) => project,
        None => {
            let project =
                store.create_project_with_lines(&ProjectSettings::default(), &example_lines())?;
            info!("Seeded project {} with example lines", project.id);
            project
        }
    };

    let lines = store.list_lines(project.id)?;
    Ok(ProjectSnapshot { project, lines })
}

pub fn update_project<S: ProjectStore>(
    store: &S,
    project_id: i64,
    update: &ProjectUpdate,
) -> Result<Project, SmartCircuitError> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(SmartCircuitError::Validation(
                "Project name cannot be empty".to_string(),
            ));
        }
    }
    Ok(store.update_project(project_id, update)?)
}

/// Size a draft line without storing it.
pub fn preview_line(
    engine: &SizingEngine,
    draft: &LineDraft,
) -> Result<DeviceRecommendation, SmartCircuitError> {
    validate_draft(draft)?;

    let spec = LoadSpecification::new(draft.power_kw, draft.kind.category())
        .with_phases(draft.phase_count);
    Ok(engine.recommend(&spec)?)
}

/// Size a draft line and append it after the project's last line.
pub fn add_line<S: ProjectStore>(
    store: &S,
    engine: &SizingEngine,
    project_id: i64,
    draft: &LineDraft,
) -> Result<PowerLine, SmartCircuitError> {
    let rec = preview_line(engine, draft)?;

    let line = NewPowerLine {
        name: draft.name.trim().to_string(),
        icon: draft.kind.tag().to_string(),
        power_kw: draft.power_kw,
        length_m: draft.length_m,
        breaker: rec.breaker_rating,
        cable: rec.cable_spec,
        rcd: rec.rcd_rating,
        afdd: rec.afdd_present,
    };

    Ok(store.insert_line(project_id, &line)?)
}

/// Aggregate the lines of a project into the results-panel summary.
pub fn summarize(
    engine: &SizingEngine,
    project: &Project,
    lines: &[PowerLine],
) -> Result<LoadSummary, SmartCircuitError> {
    let total_power_kw: f64 = lines.iter().map(|l| l.power_kw).sum();

    let main = if total_power_kw > 0.0 {
        Some(engine.recommend_main(total_power_kw)?)
    } else {
        None
    };

    let mut notes = vec![
        "RCD type A required for socket circuits".to_string(),
        "AFDD recommended for final circuits".to_string(),
    ];
    if project.wooden_construction {
        notes.push("AFDD required: wooden construction".to_string());
    }

    Ok(LoadSummary {
        line_count: lines.len(),
        total_power_kw,
        main,
        notes,
    })
}

fn validate_draft(draft: &LineDraft) -> Result<(), SmartCircuitError> {
    if draft.name.trim().is_empty() {
        return Err(SmartCircuitError::Validation(
            "Line name is required".to_string(),
        ));
    }
    if draft.length_m.is_nan() || draft.length_m < MIN_LENGTH_M {
        return Err(SmartCircuitError::Validation(format!(
            "Line length cannot be less than {} m",
            MIN_LENGTH_M
        )));
    }
    Ok(())
}

/// Lines stored with a freshly created project. Values are fixed, not sized.
pub fn example_lines() -> Vec<NewPowerLine> {
    let line = |name: &str, icon: &str, power_kw: f64, length_m: f64, breaker: &str, cable: &str, afdd: bool| {
        NewPowerLine {
            name: name.to_string(),
            icon: icon.to_string(),
            power_kw,
            length_m,
            breaker: breaker.to_string(),
            cable: cable.to_string(),
            rcd: "30mA".to_string(),
            afdd,
        }
    };

    vec![
        line("Kitchen sockets", "socket", 3.5, 12.0, "16A C", "3×2.5", true),
        line("Living room lights", "lamp", 0.5, 8.0, "10A C", "3×1.5", false),
        line("Electric stove", "stove", 7.0, 15.0, "32A C", "5×6.0", true),
        line("Water pump", "pump", 1.5, 20.0, "16A C", "3×2.5", true),
        line("Sauna heater", "sauna", 9.0, 25.0, "40A C", "5×10", false),
    ]
}
