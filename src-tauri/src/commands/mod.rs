pub mod config;
pub mod project;
pub mod sizing;

use std::path::PathBuf;

use tauri::Manager;

/// Path of the project database inside the app data directory.
pub(crate) fn database_path(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get data dir: {}", e))?;
    Ok(data_dir.join("smartcircuit.db"))
}
