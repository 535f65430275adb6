use serde::{Deserialize, Serialize};

use crate::sizing::{LoadKind, MainRecommendation, PhaseCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    #[default]
    Apartment,
    House,
    Commercial,
}

impl BuildingType {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildingType::Apartment => "apartment",
            BuildingType::House => "house",
            BuildingType::Commercial => "commercial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "apartment" => Some(BuildingType::Apartment),
            "house" => Some(BuildingType::House),
            "commercial" => Some(BuildingType::Commercial),
            _ => None,
        }
    }
}

/// A building project that owns a list of power lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub building_type: BuildingType,
    pub phase: PhaseCount,
    pub wooden_construction: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Settings used to create a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub name: String,
    pub building_type: BuildingType,
    pub phase: PhaseCount,
    pub wooden_construction: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: "Apartment 50m²".to_string(),
            building_type: BuildingType::Apartment,
            phase: PhaseCount::Single,
            wooden_construction: false,
        }
    }
}

/// Partial update of project settings. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub building_type: Option<BuildingType>,
    #[serde(default)]
    pub phase: Option<PhaseCount>,
    #[serde(default)]
    pub wooden_construction: Option<bool>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.building_type.is_none()
            && self.phase.is_none()
            && self.wooden_construction.is_none()
    }
}

/// A stored circuit with its protective-device selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerLine {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    /// Load kind tag, also used to pick the card icon
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

/// A power line that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPowerLine {
    pub name: String,
    pub icon: String,
    pub power_kw: f64,
    pub length_m: f64,
    pub breaker: String,
    pub cable: String,
    pub rcd: String,
    pub afdd: bool,
}

/// How the cable is run. Recorded with the draft only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallMethod {
    #[default]
    InChase,
    InTrunking,
    Open,
    Underground,
}

/// Add-line form contents, before sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDraft {
    pub name: String,
    pub kind: LoadKind,
    pub power_kw: f64,
    pub length_m: f64,
    #[serde(default)]
    pub phase_count: PhaseCount,
    #[serde(default)]
    pub install_method: InstallMethod,
}

/// Totals and main-supply proposal shown in the results panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub line_count: usize,
    pub total_power_kw: f64,
    /// None when there is nothing to size
    pub main: Option<MainRecommendation>,
    pub notes: Vec<String>,
}

/// A project together with its ordered lines.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub lines: Vec<PowerLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_update_deserializes_partial() {
        let update: ProjectUpdate = serde_json::from_str(r#"{"wooden_construction": true}"#).unwrap();
        assert_eq!(update.wooden_construction, Some(true));
        assert!(update.name.is_none());
        assert!(!update.is_empty());
        assert!(ProjectUpdate::default().is_empty());
    }

    #[test]
    fn test_line_draft_deserialize() {
        let json = r#"{
            "name": "Kitchen sockets",
            "kind": "socket",
            "power_kw": 3.5,
            "length_m": 12.0,
            "phase_count": "3 phases",
            "install_method": "in_trunking"
        }"#;
        let draft: LineDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.kind, LoadKind::Socket);
        assert_eq!(draft.phase_count, PhaseCount::Three);
        assert_eq!(draft.install_method, InstallMethod::InTrunking);
    }

    #[test]
    fn test_building_type_parse_matches_serde() {
        for bt in [BuildingType::Apartment, BuildingType::House, BuildingType::Commercial] {
            let json = serde_json::to_string(&bt).unwrap();
            assert_eq!(json, format!("\"{}\"", bt.as_str()));
            assert_eq!(BuildingType::parse(bt.as_str()), Some(bt));
        }
        assert_eq!(BuildingType::parse("castle"), None);
    }
}
