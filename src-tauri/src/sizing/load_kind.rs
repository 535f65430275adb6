//! The fixed menu of load types offered when adding a line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::LoadCategory;

/// Kind of load a power line feeds. Serialized as the line's icon tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    Socket,
    Lamp,
    Stove,
    Washer,
    Dishwasher,
    Boiler,
    Pump,
    PumpFecal,
    Sauna,
    Floor,
    Mixer,
    Welder,
    Ac,
    Ventilation,
}

/// Menu group a load kind is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadGroup {
    Basic,
    PrivateHouse,
    Climate,
}

impl LoadGroup {
    pub fn label(self) -> &'static str {
        match self {
            LoadGroup::Basic => "Basic",
            LoadGroup::PrivateHouse => "Private house",
            LoadGroup::Climate => "Climate",
        }
    }
}

/// Display row for the load-type picker.
#[derive(Debug, Clone, Serialize)]
pub struct LoadKindInfo {
    pub kind: LoadKind,
    pub tag: &'static str,
    pub label: &'static str,
    pub group: LoadGroup,
    pub group_label: &'static str,
    pub default_power_kw: f64,
    pub category: LoadCategory,
}

impl LoadKind {
    pub const ALL: [LoadKind; 14] = [
        LoadKind::Socket,
        LoadKind::Lamp,
        LoadKind::Stove,
        LoadKind::Washer,
        LoadKind::Dishwasher,
        LoadKind::Boiler,
        LoadKind::Pump,
        LoadKind::PumpFecal,
        LoadKind::Sauna,
        LoadKind::Floor,
        LoadKind::Mixer,
        LoadKind::Welder,
        LoadKind::Ac,
        LoadKind::Ventilation,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            LoadKind::Socket => "socket",
            LoadKind::Lamp => "lamp",
            LoadKind::Stove => "stove",
            LoadKind::Washer => "washer",
            LoadKind::Dishwasher => "dishwasher",
            LoadKind::Boiler => "boiler",
            LoadKind::Pump => "pump",
            LoadKind::PumpFecal => "pump_fecal",
            LoadKind::Sauna => "sauna",
            LoadKind::Floor => "floor",
            LoadKind::Mixer => "mixer",
            LoadKind::Welder => "welder",
            LoadKind::Ac => "ac",
            LoadKind::Ventilation => "ventilation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoadKind::Socket => "Sockets",
            LoadKind::Lamp => "Lighting",
            LoadKind::Stove => "Electric stove",
            LoadKind::Washer => "Washing machine",
            LoadKind::Dishwasher => "Dishwasher",
            LoadKind::Boiler => "Water heater",
            LoadKind::Pump => "Well pump",
            LoadKind::PumpFecal => "Sewage pump",
            LoadKind::Sauna => "Sauna",
            LoadKind::Floor => "Underfloor heating",
            LoadKind::Mixer => "Concrete mixer",
            LoadKind::Welder => "Welder",
            LoadKind::Ac => "Air conditioner",
            LoadKind::Ventilation => "Ventilation",
        }
    }

    pub fn group(self) -> LoadGroup {
        match self {
            LoadKind::Socket
            | LoadKind::Lamp
            | LoadKind::Stove
            | LoadKind::Washer
            | LoadKind::Dishwasher
            | LoadKind::Boiler => LoadGroup::Basic,
            LoadKind::Pump
            | LoadKind::PumpFecal
            | LoadKind::Sauna
            | LoadKind::Floor
            | LoadKind::Mixer
            | LoadKind::Welder => LoadGroup::PrivateHouse,
            LoadKind::Ac | LoadKind::Ventilation => LoadGroup::Climate,
        }
    }

    /// Typical draw used to prefill the power field.
    pub fn default_power_kw(self) -> f64 {
        match self {
            LoadKind::Socket => 3.5,
            LoadKind::Lamp => 0.5,
            LoadKind::Stove => 7.0,
            LoadKind::Washer => 2.2,
            LoadKind::Dishwasher => 1.8,
            LoadKind::Boiler => 2.0,
            LoadKind::Pump => 1.5,
            LoadKind::PumpFecal => 0.75,
            LoadKind::Sauna => 9.0,
            LoadKind::Floor => 1.5,
            LoadKind::Mixer => 1.0,
            LoadKind::Welder => 5.5,
            LoadKind::Ac => 2.5,
            LoadKind::Ventilation => 0.5,
        }
    }

    pub fn category(self) -> LoadCategory {
        match self {
            LoadKind::Stove | LoadKind::Welder => LoadCategory::HighDraw,
            _ => LoadCategory::Generic,
        }
    }

    pub fn info(self) -> LoadKindInfo {
        let group = self.group();
        LoadKindInfo {
            kind: self,
            tag: self.tag(),
            label: self.label(),
            group,
            group_label: group.label(),
            default_power_kw: self.default_power_kw(),
            category: self.category(),
        }
    }
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LoadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoadKind::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| format!("Unknown load kind: {}", s))
    }
}

/// Every load kind in menu order.
pub fn load_kinds() -> Vec<LoadKindInfo> {
    LoadKind::ALL.into_iter().map(LoadKind::info).collect()
}
