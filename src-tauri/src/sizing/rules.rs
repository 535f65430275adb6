//! TOML catalog loading for the circuit sizing engine.
//!
//! Provides two loading methods:
//! - `default_catalog()` - Loads the catalog compiled into the binary
//! - `load_catalog(path)` - Loads and validates a custom catalog file

use anyhow::{Context, Result};
use std::path::Path;

use super::types::{BracketTable, SizingCatalog, SizingError};

/// Default catalog embedded in the binary at compile time.
/// Loaded from `src-tauri/config/sizing_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/sizing_rules.toml");

/// Load a sizing catalog from a TOML file at the given path.
///
/// The catalog is validated before it is returned, so a file with
/// overlapping or unordered brackets never reaches the engine.
pub fn load_catalog(path: &Path) -> Result<SizingCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sizing rules at {:?}", path))?;
    let catalog: SizingCatalog = toml::from_str(&content)
        .with_context(|| format!("Failed to parse sizing rules at {:?}", path))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Get the default catalog embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug, covered by tests).
pub fn default_catalog() -> SizingCatalog {
    toml::from_str(DEFAULT_RULES).expect("embedded sizing_rules.toml must be valid TOML")
}

impl SizingCatalog {
    /// Check that both ladders are well formed.
    pub fn validate(&self) -> Result<(), SizingError> {
        validate_table("circuit", &self.circuit.ladder)?;
        validate_table("main", &self.main)
    }
}

fn validate_table(name: &str, table: &BracketTable) -> Result<(), SizingError> {
    let Some((last, rungs)) = table.brackets.split_last() else {
        return Err(SizingError::InvalidCatalog(format!(
            "{} ladder has no brackets",
            name
        )));
    };

    if last.upper_kw.is_some() {
        return Err(SizingError::InvalidCatalog(format!(
            "{} ladder must end with an unbounded bracket",
            name
        )));
    }

    let mut previous = 0.0;
    for bracket in rungs {
        let upper = bracket.upper_kw.ok_or_else(|| {
            SizingError::InvalidCatalog(format!(
                "{} ladder has an unbounded bracket ({}) before the last one",
                name, bracket.breaker
            ))
        })?;
        if !upper.is_finite() || upper <= previous {
            return Err(SizingError::InvalidCatalog(format!(
                "{} ladder bounds must be positive and strictly ascending (got {} after {})",
                name, upper, previous
            )));
        }
        previous = upper;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::types::{Bracket, LoadCategory};

    #[test]
    fn test_default_catalog_loads_and_validates() {
        let catalog = default_catalog();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.circuit.rcd_rating, "30mA");
    }

    #[test]
    fn test_default_circuit_ladder_has_six_brackets() {
        let catalog = default_catalog();
        let bounds: Vec<Option<f64>> = catalog
            .circuit
            .ladder
            .brackets
            .iter()
            .map(|b| b.upper_kw)
            .collect();
        assert_eq!(
            bounds,
            vec![Some(1.5), Some(3.5), Some(5.5), Some(7.5), Some(10.0), None]
        );
    }

    #[test]
    fn test_default_main_ladder_has_three_brackets() {
        let catalog = default_catalog();
        assert_eq!(catalog.main.brackets.len(), 3);
        assert_eq!(catalog.main.brackets[0].breaker, "25A 2P");
        assert_eq!(catalog.main.brackets[2].cable, "10.0 mm²");
    }

    #[test]
    fn test_high_draw_override_defined() {
        let catalog = default_catalog();
        let high_draw = catalog
            .circuit
            .overrides
            .iter()
            .find(|o| o.category == LoadCategory::HighDraw)
            .expect("high-draw override should exist");
        assert_eq!(high_draw.breaker, "40A C");
        assert_eq!(high_draw.cable, "5×6.0");
    }

    fn bracket(upper_kw: Option<f64>) -> Bracket {
        Bracket {
            upper_kw,
            breaker: "16A C".to_string(),
            cable: "3×2.5".to_string(),
        }
    }

    #[test]
    fn test_validate_rejects_empty_ladder() {
        let mut catalog = default_catalog();
        catalog.main.brackets.clear();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("no brackets"));
    }

    #[test]
    fn test_validate_rejects_bounded_last_bracket() {
        let mut catalog = default_catalog();
        catalog.main.brackets = vec![bracket(Some(10.0))];
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("unbounded"));
    }

    #[test]
    fn test_validate_rejects_descending_bounds() {
        let mut catalog = default_catalog();
        catalog.circuit.ladder.brackets = vec![bracket(Some(5.0)), bracket(Some(2.0)), bracket(None)];
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, SizingError::InvalidCatalog(_)));
    }

    #[test]
    fn test_validate_rejects_early_unbounded_bracket() {
        let mut catalog = default_catalog();
        catalog.circuit.ladder.brackets = vec![bracket(None), bracket(None)];
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, DEFAULT_RULES).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.circuit.ladder.brackets.len(), 6);
    }

    #[test]
    fn test_load_catalog_rejects_invalid_ladder() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");
        std::fs::write(
            &path,
            r#"
            [circuit]
            rcd_rating = "30mA"

            [[circuit.ladder.brackets]]
            upper_kw = 2.0
            breaker = "10A C"
            cable = "3×1.5"

            [[main.brackets]]
            breaker = "25A 2P"
            cable = "4.0 mm²"
            "#,
        )
        .unwrap();

        assert!(load_catalog(&path).is_err());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read sizing rules"));
    }
}
