use smartcircuit_tauri::project::service::{add_line, initialize_project, summarize};
use smartcircuit_tauri::project::{InstallMethod, LineDraft};
use smartcircuit_tauri::sizing::*;
use smartcircuit_tauri::{ProjectStore, SqliteProjectStore};

fn generic(power_kw: f64) -> LoadSpecification {
    LoadSpecification::new(power_kw, LoadCategory::Generic)
}

#[test]
fn test_every_bracket_interior_and_boundary() {
    // (low, high, breaker, cable): interior sampled between bounds, high is inclusive
    let ladder = [
        (0.0, 1.5, "10A C", "3×1.5"),
        (1.5, 3.5, "16A C", "3×2.5"),
        (3.5, 5.5, "20A C", "3×4.0"),
        (5.5, 7.5, "32A C", "5×6.0"),
        (7.5, 10.0, "40A C", "5×10"),
    ];

    for (low, high, breaker, cable) in ladder {
        for power in [low + 0.01, (low + high) / 2.0, high] {
            let rec = recommend(&generic(power)).unwrap();
            assert_eq!(rec.breaker_rating, breaker, "Breaker for {} kW", power);
            assert_eq!(rec.cable_spec, cable, "Cable for {} kW", power);
        }
    }

    for power in [10.001, 25.0, 1000.0] {
        let rec = recommend(&generic(power)).unwrap();
        assert_eq!(rec.breaker_rating, "50A C");
        assert_eq!(rec.cable_spec, "5×16");
    }
}

#[test]
fn test_high_draw_is_fixed_at_any_power() {
    let low = recommend(&LoadSpecification::new(0.2, LoadCategory::HighDraw)).unwrap();
    let high = recommend(&LoadSpecification::new(50.0, LoadCategory::HighDraw)).unwrap();

    assert_eq!(low, high);
    assert_eq!(low.breaker_rating, "40A C");
    assert_eq!(low.cable_spec, "5×6.0");
}

#[test]
fn test_zero_and_negative_power_are_invalid() {
    assert_eq!(
        recommend(&generic(0.0)),
        Err(SizingError::InvalidInput { value: 0.0 })
    );
    assert_eq!(
        recommend(&generic(-1.0)),
        Err(SizingError::InvalidInput { value: -1.0 })
    );
    assert!(recommend_main(0.0).is_err());
    assert!(recommend_main(-1.0).is_err());
}

#[test]
fn test_main_supply_boundaries() {
    let expect = |total: f64, breaker: &str, cable: &str| {
        let rec = recommend_main(total).unwrap();
        assert_eq!(
            (rec.breaker_rating.as_str(), rec.cable_spec.as_str()),
            (breaker, cable),
            "Main supply for {} kW",
            total
        );
    };

    expect(10.0, "25A 2P", "4.0 mm²");
    expect(10.01, "32A 2P", "6.0 mm²");
    expect(15.0, "32A 2P", "6.0 mm²");
    expect(15.01, "40A 2P", "10.0 mm²");
}

#[test]
fn test_five_circuit_installation() {
    let circuits = [
        LoadSpecification::new(3.5, LoadCategory::Generic),
        LoadSpecification::new(0.5, LoadCategory::Generic),
        LoadSpecification::new(7.0, LoadCategory::HighDraw),
        LoadSpecification::new(1.5, LoadCategory::Generic),
        LoadSpecification::new(9.0, LoadCategory::Generic),
    ];

    let total: f64 = circuits.iter().map(|c| c.power_kw).sum();
    assert!((total - 21.5).abs() < 1e-9);

    let main = recommend_main(total).unwrap();
    assert_eq!(main.breaker_rating, "40A 2P");
    assert_eq!(main.cable_spec, "10.0 mm²");

    let stove = recommend(&circuits[2]).unwrap();
    assert_eq!(stove.breaker_rating, "40A C");
    assert_eq!(stove.cable_spec, "5×6.0");
}

#[test]
fn test_engine_is_stateless_across_calls() {
    let specs: Vec<LoadSpecification> = [0.3, 4.4, 8.8, 0.3]
        .into_iter()
        .map(generic)
        .collect();

    let first: Vec<_> = specs.iter().map(|s| recommend(s).unwrap()).collect();
    let second: Vec<_> = specs.iter().map(|s| recommend(s).unwrap()).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], first[3]);
}

#[test]
fn test_project_flow_with_added_welder() {
    let store = SqliteProjectStore::in_memory().unwrap();
    let engine = SizingEngine::shared();
    let snapshot = initialize_project(&store).unwrap();

    let draft = LineDraft {
        name: "Garage welder".to_string(),
        kind: LoadKind::Welder,
        power_kw: LoadKind::Welder.default_power_kw(),
        length_m: 18.0,
        phase_count: PhaseCount::Three,
        install_method: InstallMethod::Open,
    };
    let welder = add_line(&store, engine, snapshot.project.id, &draft).unwrap();
    assert_eq!(welder.breaker, "40A C");
    assert_eq!(welder.cable, "5×6.0");
    assert_eq!(welder.order_index, 5);

    let lines = store.list_lines(snapshot.project.id).unwrap();
    let summary = summarize(engine, &snapshot.project, &lines).unwrap();
    assert_eq!(summary.line_count, 6);
    assert!((summary.total_power_kw - 27.0).abs() < 1e-9);
    assert_eq!(summary.main.unwrap().breaker_rating, "40A 2P");
}
