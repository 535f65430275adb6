//! Type definitions for the circuit sizing engine.
//!
//! Catalog types are deserialized from TOML (the bracket tables); input and
//! output types are serialized as JSON for frontend communication.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CATALOG TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from sizing_rules.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct SizingCatalog {
    /// Per-circuit sizing: category overrides plus the bracket ladder
    pub circuit: CircuitCatalog,
    /// Installation-total sizing for the main breaker and supply cable
    pub main: BracketTable,
}

/// Per-circuit catalog section.
#[derive(Debug, Clone, Deserialize)]
pub struct CircuitCatalog {
    /// RCD rating attached to every circuit recommendation
    pub rcd_rating: String,
    /// Overrides checked before the ladder, in declaration order
    #[serde(default)]
    pub overrides: Vec<CategoryOverride>,
    /// Ascending bracket ladder
    pub ladder: BracketTable,
}

/// An ordered list of half-open power brackets.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketTable {
    pub brackets: Vec<Bracket>,
}

/// One rung of the ladder: applies to power in `(previous upper, upper_kw]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bracket {
    /// Inclusive upper bound in kW (None = unbounded, only valid for the last rung)
    #[serde(default)]
    pub upper_kw: Option<f64>,
    pub breaker: String,
    pub cable: String,
}

/// Fixed device pair returned for a whole load category, regardless of power.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryOverride {
    pub category: LoadCategory,
    pub breaker: String,
    pub cable: String,
}

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Sizing category of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadCategory {
    Generic,
    /// Stoves, welders and similar loads that get a fixed device pair
    HighDraw,
}

/// Number of supply phases feeding a circuit.
///
/// Carried through sizing but not consulted by the current catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhaseCount {
    #[default]
    #[serde(rename = "1 phase")]
    Single,
    #[serde(rename = "3 phases")]
    Three,
}

impl PhaseCount {
    pub fn conductors(self) -> u8 {
        match self {
            PhaseCount::Single => 1,
            PhaseCount::Three => 3,
        }
    }
}

/// A circuit's declared load, built fresh for each evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSpecification {
    /// Nominal power draw in kilowatts (must be > 0)
    pub power_kw: f64,
    pub category: LoadCategory,
    #[serde(default)]
    pub phase_count: PhaseCount,
}

impl LoadSpecification {
    pub fn new(power_kw: f64, category: LoadCategory) -> Self {
        Self {
            power_kw,
            category,
            phase_count: PhaseCount::Single,
        }
    }

    pub fn with_phases(mut self, phase_count: PhaseCount) -> Self {
        self.phase_count = phase_count;
        self
    }
}

// =============================================================================
// OUTPUT TYPES (serialized to frontend)
// =============================================================================

/// Protective devices proposed for a single circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecommendation {
    /// Amperage + trip curve, e.g. "16A C"
    pub breaker_rating: String,
    /// Conductor count × cross-section, e.g. "3×2.5"
    pub cable_spec: String,
    pub rcd_rating: String,
    /// Never set by the engine
    pub afdd_present: bool,
}

/// Main breaker and supply cable for a whole installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainRecommendation {
    pub breaker_rating: String,
    pub cable_spec: String,
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("Invalid input: power must be a positive number of kW, got {value}")]
    InvalidInput { value: f64 },

    #[error("Invalid sizing catalog: {0}")]
    InvalidCatalog(String),
}
