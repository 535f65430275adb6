//! Bracket evaluation for circuit and installation sizing.
//!
//! `SizingEngine` holds a validated catalog and answers two questions: which
//! devices protect one circuit, and which main breaker and supply cable serve
//! the whole installation.

use std::sync::OnceLock;

use super::rules::default_catalog;
use super::types::*;

/// Evaluates load specifications against a sizing catalog.
#[derive(Debug, Clone)]
pub struct SizingEngine {
    catalog: SizingCatalog,
}

impl SizingEngine {
    /// Create an engine over the given catalog.
    ///
    /// Fails with `InvalidCatalog` if either ladder is malformed.
    pub fn new(catalog: SizingCatalog) -> Result<Self, SizingError> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    /// Shared engine over the embedded default catalog.
    pub fn shared() -> &'static SizingEngine {
        static DEFAULT: OnceLock<SizingEngine> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            SizingEngine::new(default_catalog())
                .expect("embedded sizing_rules.toml must pass validation")
        })
    }

    /// Recommend protective devices for a single circuit.
    ///
    /// Category overrides win over the power ladder. Power that is not a
    /// positive finite number is rejected rather than bucketed.
    pub fn recommend(&self, spec: &LoadSpecification) -> Result<DeviceRecommendation, SizingError> {
        check_power(spec.power_kw)?;

        let circuit = &self.catalog.circuit;
        let (breaker, cable) = match circuit
            .overrides
            .iter()
            .find(|o| o.category == spec.category)
        {
            Some(o) => (&o.breaker, &o.cable),
            None => {
                let bracket = lookup(&circuit.ladder, spec.power_kw);
                (&bracket.breaker, &bracket.cable)
            }
        };

        Ok(DeviceRecommendation {
            breaker_rating: breaker.clone(),
            cable_spec: cable.clone(),
            rcd_rating: circuit.rcd_rating.clone(),
            afdd_present: false,
        })
    }

    /// Recommend the main breaker and supply cable for a summed load.
    pub fn recommend_main(&self, total_kw: f64) -> Result<MainRecommendation, SizingError> {
        check_power(total_kw)?;

        let bracket = lookup(&self.catalog.main, total_kw);
        Ok(MainRecommendation {
            breaker_rating: bracket.breaker.clone(),
            cable_spec: bracket.cable.clone(),
        })
    }

    pub fn catalog(&self) -> &SizingCatalog {
        &self.catalog
    }
}

/// Recommend circuit devices using the embedded default catalog.
pub fn recommend(spec: &LoadSpecification) -> Result<DeviceRecommendation, SizingError> {
    SizingEngine::shared().recommend(spec)
}

/// Recommend main supply devices using the embedded default catalog.
pub fn recommend_main(total_kw: f64) -> Result<MainRecommendation, SizingError> {
    SizingEngine::shared().recommend_main(total_kw)
}

fn check_power(value: f64) -> Result<(), SizingError> {
    // NaN fails the comparison too
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SizingError::InvalidInput { value })
    }
}

/// First bracket whose inclusive upper bound covers `power_kw`.
///
/// Validation guarantees the last bracket is unbounded, so a match always exists.
fn lookup(table: &BracketTable, power_kw: f64) -> &Bracket {
    table
        .brackets
        .iter()
        .find(|b| b.upper_kw.map_or(true, |upper| power_kw <= upper))
        .unwrap_or_else(|| &table.brackets[table.brackets.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic(power_kw: f64) -> LoadSpecification {
        LoadSpecification::new(power_kw, LoadCategory::Generic)
    }

    fn pair(rec: &DeviceRecommendation) -> (&str, &str) {
        (rec.breaker_rating.as_str(), rec.cable_spec.as_str())
    }

    #[test]
    fn test_bracket_interiors() {
        let engine = SizingEngine::shared();
        let cases = [
            (0.5, ("10A C", "3×1.5")),
            (2.2, ("16A C", "3×2.5")),
            (4.0, ("20A C", "3×4.0")),
            (6.0, ("32A C", "5×6.0")),
            (9.0, ("40A C", "5×10")),
            (12.0, ("50A C", "5×16")),
        ];

        for (power, expected) in cases {
            let rec = engine.recommend(&generic(power)).unwrap();
            assert_eq!(pair(&rec), expected, "Wrong bracket for {} kW", power);
        }
    }

    #[test]
    fn test_boundaries_belong_to_lower_bracket() {
        let engine = SizingEngine::shared();
        let cases = [
            (1.5, "10A C"),
            (3.5, "16A C"),
            (5.5, "20A C"),
            (7.5, "32A C"),
            (10.0, "40A C"),
        ];

        for (power, expected) in cases {
            let rec = engine.recommend(&generic(power)).unwrap();
            assert_eq!(rec.breaker_rating, expected, "Boundary {} kW", power);
        }

        let just_above = engine.recommend(&generic(10.01)).unwrap();
        assert_eq!(just_above.breaker_rating, "50A C");
    }

    #[test]
    fn test_high_draw_override_ignores_power() {
        let engine = SizingEngine::shared();
        for power in [0.2, 7.0, 50.0] {
            let spec = LoadSpecification::new(power, LoadCategory::HighDraw);
            let rec = engine.recommend(&spec).unwrap();
            assert_eq!(pair(&rec), ("40A C", "5×6.0"), "High draw at {} kW", power);
        }
    }

    #[test]
    fn test_rcd_and_afdd_fixed() {
        let rec = recommend(&generic(3.0)).unwrap();
        assert_eq!(rec.rcd_rating, "30mA");
        assert!(!rec.afdd_present);

        let rec = recommend(&LoadSpecification::new(3.0, LoadCategory::HighDraw)).unwrap();
        assert_eq!(rec.rcd_rating, "30mA");
        assert!(!rec.afdd_present);
    }

    #[test]
    fn test_phase_count_does_not_change_result() {
        let single = recommend(&generic(4.5)).unwrap();
        let three = recommend(&generic(4.5).with_phases(PhaseCount::Three)).unwrap();
        assert_eq!(single, three);
    }

    #[test]
    fn test_non_positive_power_rejected() {
        for power in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = recommend(&generic(power));
            assert!(
                matches!(result, Err(SizingError::InvalidInput { .. })),
                "{} kW should be rejected",
                power
            );
        }

        // Overrides do not bypass the check
        let stove = LoadSpecification::new(0.0, LoadCategory::HighDraw);
        assert!(recommend(&stove).is_err());
    }

    #[test]
    fn test_main_boundaries() {
        let cases = [
            (0.1, ("25A 2P", "4.0 mm²")),
            (10.0, ("25A 2P", "4.0 mm²")),
            (10.01, ("32A 2P", "6.0 mm²")),
            (15.0, ("32A 2P", "6.0 mm²")),
            (15.01, ("40A 2P", "10.0 mm²")),
            (120.0, ("40A 2P", "10.0 mm²")),
        ];

        for (total, (breaker, cable)) in cases {
            let rec = recommend_main(total).unwrap();
            assert_eq!(rec.breaker_rating, breaker, "Main breaker for {} kW", total);
            assert_eq!(rec.cable_spec, cable, "Main cable for {} kW", total);
        }
    }

    #[test]
    fn test_main_rejects_non_positive_total() {
        assert_eq!(
            recommend_main(0.0),
            Err(SizingError::InvalidInput { value: 0.0 })
        );
        assert!(recommend_main(-3.0).is_err());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let spec = generic(5.5);
        assert_eq!(recommend(&spec).unwrap(), recommend(&spec).unwrap());
        assert_eq!(recommend_main(21.5).unwrap(), recommend_main(21.5).unwrap());
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = default_catalog();
        catalog.circuit.overrides.clear();
        catalog.circuit.rcd_rating = "10mA".to_string();
        let engine = SizingEngine::new(catalog).unwrap();

        let rec = engine
            .recommend(&LoadSpecification::new(7.0, LoadCategory::HighDraw))
            .unwrap();
        assert_eq!(pair(&rec), ("32A C", "5×6.0"));
        assert_eq!(rec.rcd_rating, "10mA");
    }

    #[test]
    fn test_new_rejects_invalid_catalog() {
        let mut catalog = default_catalog();
        catalog.main.brackets.clear();
        assert!(matches!(
            SizingEngine::new(catalog),
            Err(SizingError::InvalidCatalog(_))
        ));
    }
}
