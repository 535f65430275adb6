use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct GetPreferenceArgs {
    key: String,
}

#[derive(Serialize)]
struct SetPreferenceArgs {
    key: String,
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProjectArgs {
    project_id: i64,
    update: ProjectUpdate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectIdArgs {
    project_id: i64,
}

#[derive(Serialize)]
struct PreviewLineArgs {
    draft: LineDraft,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddLineArgs {
    project_id: i64,
    draft: LineDraft,
}

// -- Types matching backend structs --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// "apartment" | "house" | "commercial"
    pub building_type: String,
    /// "1 phase" | "3 phases"
    pub phase: String,
    pub wooden_construction: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wooden_construction: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PowerLine {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub icon: String,
    pub power_kw: f64,
    pub length_m: f64,
    pub breaker: String,
    pub cable: String,
    pub rcd: String,
    pub afdd: bool,
    pub order_index: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub lines: Vec<PowerLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDraft {
    pub name: String,
    /// Load kind tag, e.g. "socket"
    pub kind: String,
    pub power_kw: f64,
    pub length_m: f64,
    pub phase_count: String,
    pub install_method: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceRecommendation {
    pub breaker_rating: String,
    pub cable_spec: String,
    pub rcd_rating: String,
    pub afdd_present: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainRecommendation {
    pub breaker_rating: String,
    pub cable_spec: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadSummary {
    pub line_count: usize,
    pub total_power_kw: f64,
    pub main: Option<MainRecommendation>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadKindInfo {
    pub tag: String,
    pub label: String,
    pub group: String,
    pub group_label: String,
    pub default_power_kw: f64,
    pub category: String,
}

// -- Typed invoke helpers --

pub async fn get_preference(key: &str) -> Result<Option<String>, String> {
    let args = serde_wasm_bindgen::to_value(&GetPreferenceArgs {
        key: key.to_string(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("get_preference", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_preference(key: &str, value: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetPreferenceArgs {
        key: key.to_string(),
        value: value.to_string(),
    })
    .map_err(|e| e.to_string())?;

    invoke("set_preference", args)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
}

pub async fn get_project() -> Result<ProjectSnapshot, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("get_project", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_project(project_id: i64, update: ProjectUpdate) -> Result<Project, String> {
    let args = serde_wasm_bindgen::to_value(&UpdateProjectArgs { project_id, update })
        .map_err(|e| e.to_string())?;

    let result = invoke("update_project", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_power_lines(project_id: i64) -> Result<Vec<PowerLine>, String> {
    let args = serde_wasm_bindgen::to_value(&ProjectIdArgs { project_id })
        .map_err(|e| e.to_string())?;

    let result = invoke("list_power_lines", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn preview_power_line(draft: &LineDraft) -> Result<DeviceRecommendation, String> {
    let args = serde_wasm_bindgen::to_value(&PreviewLineArgs {
        draft: draft.clone(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("preview_power_line", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_power_line(project_id: i64, draft: &LineDraft) -> Result<PowerLine, String> {
    let args = serde_wasm_bindgen::to_value(&AddLineArgs {
        project_id,
        draft: draft.clone(),
    })
    .map_err(|e| e.to_string())?;

    let result = invoke("add_power_line", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_load_summary(project_id: i64) -> Result<LoadSummary, String> {
    let args = serde_wasm_bindgen::to_value(&ProjectIdArgs { project_id })
        .map_err(|e| e.to_string())?;

    let result = invoke("get_load_summary", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_load_kinds() -> Result<Vec<LoadKindInfo>, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({}))
        .map_err(|e| e.to_string())?;

    let result = invoke("list_load_kinds", args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
