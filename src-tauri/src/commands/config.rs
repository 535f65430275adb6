use std::path::Path;

use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::error::SmartCircuitError;
use crate::sizing::{load_catalog, SizingEngine};

/// Preference key holding the path of a custom sizing rules file.
pub const SIZING_RULES_KEY: &str = "sizing_rules_path";

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    read_preference(&app, key)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);

    if key == SIZING_RULES_KEY && !value.is_empty() {
        load_catalog(Path::new(value))
            .map_err(|e| SmartCircuitError::Config(format!("{:#}", e)))?;
    }

    let store = app.store("preferences.json").map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}

fn read_preference(app: &AppHandle, key: &str) -> Result<Option<String>, String> {
    let store = app.store("preferences.json").map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    let value = store
        .get(key)
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .filter(|s| !s.is_empty());
    Ok(value)
}

/// Engine for the configured sizing rules, or the embedded defaults.
///
/// A custom file that fails to load is logged and ignored.
pub fn sizing_engine(app: &AppHandle) -> SizingEngine {
    let path = match read_preference(app, SIZING_RULES_KEY) {
        Ok(Some(path)) => path,
        Ok(None) => return SizingEngine::shared().clone(),
        Err(e) => {
            warn!("Falling back to default sizing rules: {}", e);
            return SizingEngine::shared().clone();
        }
    };

    match load_catalog(Path::new(&path)).and_then(|c| SizingEngine::new(c).map_err(anyhow::Error::from)) {
        Ok(engine) => {
            info!("Using custom sizing rules from {}", path);
            engine
        }
        Err(e) => {
            warn!("Failed to load sizing rules from {}: {:#}", path, e);
            SizingEngine::shared().clone()
        }
    }
}
