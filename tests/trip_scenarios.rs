use carbon_trip::core::report::render_text;
use carbon_trip::core::validator::{MSG_DISTANCE_UNKNOWN, MSG_MISSING_FIELDS, MSG_SAME_LOCATION};
use carbon_trip::core::TransportCatalog;
use carbon_trip::{
    compute_detailed_emission_per_person, compute_total_emission, estimate_trees_to_offset,
    format_distance, format_emission, validate_calculation_inputs, CapitalDistanceTable,
    StaticTransportCatalog, TripCalculator, TripInput, TripRequest,
};

const HUMAN: f64 = 0.0083;

fn calculator() -> TripCalculator<CapitalDistanceTable, StaticTransportCatalog> {
    TripCalculator::new(CapitalDistanceTable::default(), StaticTransportCatalog::default())
}

#[test]
fn test_reference_scenario_sao_paulo_to_rio() {
    let breakdown = compute_detailed_emission_per_person(429.0, 0.192, 2, "car", HUMAN);
    assert!((breakdown.transport_per_person - 41.184).abs() < 1e-9);
    assert!((breakdown.human_per_person - 3.5607).abs() < 1e-9);
    assert!((breakdown.total_per_person - 44.7447).abs() < 1e-9);

    let total = compute_total_emission(429.0, 0.192, 2, "car", HUMAN);
    assert!((total - 48.3054).abs() < 1e-9);

    // The group total is not the per-person total times the group size.
    assert!((total - breakdown.total_per_person * 2.0).abs() > 1.0);
}

#[test]
fn test_walking_is_zero_for_any_valid_input() {
    for people in 1..=5 {
        for distance in [1.0, 300.0, 4242.0] {
            assert_eq!(compute_total_emission(distance, 0.0, people, "walking", HUMAN), 0.0);
            let b = compute_detailed_emission_per_person(distance, 0.0, people, "walking", HUMAN);
            assert_eq!(b.total_per_person, 0.0);
            assert_eq!(b.transport_per_person, 0.0);
            assert_eq!(b.human_per_person, 0.0);
        }
    }
}

#[test]
fn test_every_catalog_transport_produces_a_report() {
    let calc = calculator();
    let ids: Vec<String> = calc
        .catalog()
        .transports()
        .iter()
        .map(|t| t.id.clone())
        .collect();

    for id in ids {
        let report = calc
            .calculate(&TripRequest::new("Belo Horizonte", "Brasília", id.as_str(), 3))
            .unwrap();
        assert_eq!(report.distance, "716 km");
        assert_eq!(report.show_detailed, id != "walking");

        let input = TripInput::new(716.0, calc.catalog().emission_factor(&id))
            .with_people(3)
            .with_transport(id.as_str());
        assert_eq!(report.total_kg, input.total_emission());
        assert_eq!(report.breakdown, input.breakdown());
    }
}

#[test]
fn test_formatting_contract() {
    assert_eq!(format_emission(0.0, 2), "0 kg CO₂");
    assert_eq!(format_emission(82.345, 2), "82.35 kg CO₂");
    assert_eq!(format_distance(0.0), "0 km");
    assert_eq!(format_distance(429.0), "429 km");
    assert_eq!(estimate_trees_to_offset(44.0), 2);
    assert_eq!(estimate_trees_to_offset(22.0), 1);
    assert_eq!(estimate_trees_to_offset(23.0), 2);
}

#[test]
fn test_calculation_validation_contract() {
    let missing = validate_calculation_inputs(None, 0.1);
    assert!(!missing.is_valid);
    assert_eq!(missing.message, MSG_DISTANCE_UNKNOWN);

    let same = validate_calculation_inputs(Some(0.0), 0.1);
    assert!(!same.is_valid);
    assert_eq!(same.message, MSG_SAME_LOCATION);

    assert!(validate_calculation_inputs(Some(100.0), 0.0).is_valid);
}

#[test]
fn test_incomplete_requests_are_rejected() {
    let calc = calculator();
    let request = TripRequest {
        origin: Some("Recife".to_string()),
        destination: None,
        transport_id: Some("bus".to_string()),
        people: Some(2),
    };

    assert_eq!(calc.check(&request).message, MSG_MISSING_FIELDS);
    assert!(calc.calculate(&request).is_err());
}

#[test]
fn test_text_panel_for_group_flight() {
    let report = calculator()
        .calculate(&TripRequest::new("Porto Alegre", "Fortaleza", "plane_domestic", 4))
        .unwrap();
    let text = render_text(&report);

    assert!(text.contains("Origin:       Porto Alegre"));
    assert!(text.contains("Transport:    ✈️ Plane (Domestic Flight)"));
    assert!(text.contains("People:       4"));
    assert!(text.contains("Per person"));
    assert!(text.contains(&format!("Total:        {}", report.emission)));
}
