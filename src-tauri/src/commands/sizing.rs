//! Tauri commands for direct sizing queries.

use tracing::info;

use super::config::sizing_engine;
use crate::error::SmartCircuitError;
use crate::sizing::{
    load_kinds, DeviceRecommendation, LoadKindInfo, LoadSpecification, MainRecommendation,
};

/// List the load types offered by the add-line form, in menu order.
#[tauri::command]
pub fn list_load_kinds() -> Vec<LoadKindInfo> {
    load_kinds()
}

/// Recommend protective devices for one circuit.
#[tauri::command]
pub fn recommend_circuit(
    app: tauri::AppHandle,
    spec: LoadSpecification,
) -> Result<DeviceRecommendation, String> {
    info!(
        "Sizing circuit: {} kW ({:?}, {} phase)",
        spec.power_kw,
        spec.category,
        spec.phase_count.conductors()
    );
    let rec = sizing_engine(&app)
        .recommend(&spec)
        .map_err(SmartCircuitError::from)?;
    Ok(rec)
}

/// Recommend the main breaker and supply cable for a total load.
#[tauri::command]
pub fn recommend_main_supply(
    app: tauri::AppHandle,
    total_kw: f64,
) -> Result<MainRecommendation, String> {
    info!("Sizing main supply for {} kW", total_kw);
    let rec = sizing_engine(&app)
        .recommend_main(total_kw)
        .map_err(SmartCircuitError::from)?;
    Ok(rec)
}
