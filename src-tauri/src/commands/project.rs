//! Tauri commands for the current project and its power lines.
//!
//! Each command opens the project database, runs one service call on the
//! blocking pool, and returns the result.

use tracing::info;

use super::config::sizing_engine;
use super::database_path;
use crate::project::service;
use crate::project::{
    LineDraft, LoadSummary, PowerLine, Project, ProjectSnapshot, ProjectStore, ProjectUpdate,
    SqliteProjectStore,
};
use crate::sizing::DeviceRecommendation;

/// Load the current project, creating the example project on first run.
#[tauri::command]
pub async fn get_project(app: tauri::AppHandle) -> Result<ProjectSnapshot, String> {
    let db_path = database_path(&app)?;

    let snapshot = tokio::task::spawn_blocking(move || {
        let store = SqliteProjectStore::open(&db_path)?;
        service::initialize_project(&store)
    })
    .await
    .map_err(|e| format!("Task panicked: {}", e))??;

    info!(
        "Loaded project {} with {} lines",
        snapshot.project.id,
        snapshot.lines.len()
    );
    Ok(snapshot)
}

#[tauri::command]
pub async fn update_project(
    app: tauri::AppHandle,
    project_id: i64,
    update: ProjectUpdate,
) -> Result<Project, String> {
    let db_path = database_path(&app)?;

    tokio::task::spawn_blocking(move || {
        let store = SqliteProjectStore::open(&db_path)?;
        service::update_project(&store, project_id, &update)
    })
    .await
    .map_err(|e| format!("Task panicked: {}", e))?
    .map_err(String::from)
}

#[tauri::command]
pub async fn list_power_lines(
    app: tauri::AppHandle,
    project_id: i64,
) -> Result<Vec<PowerLine>, String> {
    let db_path = database_path(&app)?;

    tokio::task::spawn_blocking(move || {
        let store = SqliteProjectStore::open(&db_path).map_err(|e| e.to_string())?;
        store.list_lines(project_id).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task panicked: {}", e))?
}

/// Compute the device selection for a draft line without saving it.
#[tauri::command]
pub fn preview_power_line(
    app: tauri::AppHandle,
    draft: LineDraft,
) -> Result<DeviceRecommendation, String> {
    let rec = service::preview_line(&sizing_engine(&app), &draft)?;
    info!(
        "Previewed '{}': {} / {}",
        draft.name, rec.breaker_rating, rec.cable_spec
    );
    Ok(rec)
}

/// Size a draft line and append it to the project.
#[tauri::command]
pub async fn add_power_line(
    app: tauri::AppHandle,
    project_id: i64,
    draft: LineDraft,
) -> Result<PowerLine, String> {
    let db_path = database_path(&app)?;
    let engine = sizing_engine(&app);

    tokio::task::spawn_blocking(move || {
        let store = SqliteProjectStore::open(&db_path)?;
        service::add_line(&store, &engine, project_id, &draft)
    })
    .await
    .map_err(|e| format!("Task panicked: {}", e))?
    .map_err(String::from)
}

/// Totals and main supply proposal for the results panel.
#[tauri::command]
pub async fn get_load_summary(
    app: tauri::AppHandle,
    project_id: i64,
) -> Result<LoadSummary, String> {
    let db_path = database_path(&app)?;
    let engine = sizing_engine(&app);

    tokio::task::spawn_blocking(move || {
        let store = SqliteProjectStore::open(&db_path)?;
        let project = store.get_project(project_id)?;
        let lines = store.list_lines(project_id)?;
        service::summarize(&engine, &project, &lines)
    })
    .await
    .map_err(|e| format!("Task panicked: {}", e))?
    .map_err(String::from)
}
