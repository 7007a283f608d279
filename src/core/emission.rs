//! Trip emission arithmetic and display formatting.
//!
//! Every function here is pure. Out-of-range inputs clamp to a zero result
//! instead of failing.

use crate::domain::model::{EmissionBreakdown, TripInput, WALKING_ID};

/// kg CO₂ absorbed by one tree in a year.
pub const CO2_PER_TREE_PER_YEAR_KG: f64 = 22.0;

pub const DEFAULT_DECIMALS: usize = 2;

fn is_out_of_range(distance_km: f64, transport_factor: f64, people_count: u32, human_factor: f64) -> bool {
    distance_km <= 0.0 || people_count < 1 || transport_factor < 0.0 || human_factor < 0.0
}

/// Total CO₂ in kg for the whole group.
///
/// The transport emission is shared by the travelers (divided by
/// `people_count`) while every traveler breathes on their own (multiplied by
/// `people_count`). Walking reports exactly zero.
pub fn compute_total_emission(
    distance_km: f64,
    transport_factor: f64,
    people_count: u32,
    transport_id: &str,
    human_factor: f64,
) -> f64 {
    if is_out_of_range(distance_km, transport_factor, people_count, human_factor) {
        return 0.0;
    }

    if transport_id == WALKING_ID {
        return 0.0;
    }

    let people = f64::from(people_count);
    let transport = (distance_km * transport_factor) / people;
    let human = distance_km * human_factor * people;
    transport + human
}

/// Per-traveler split between the transport share and one person's respiration.
///
/// `human_per_person` is a per-individual rate and is not divided by the group
/// size, so this is not `compute_total_emission / people_count`.
pub fn compute_detailed_emission_per_person(
    distance_km: f64,
    transport_factor: f64,
    people_count: u32,
    transport_id: &str,
    human_factor: f64,
) -> EmissionBreakdown {
    if is_out_of_range(distance_km, transport_factor, people_count, human_factor) {
        return EmissionBreakdown::zero();
    }

    if transport_id == WALKING_ID {
        return EmissionBreakdown::zero();
    }

    let transport_per_person = (distance_km * transport_factor) / f64::from(people_count);
    let human_per_person = distance_km * human_factor;

    EmissionBreakdown {
        transport_per_person,
        human_per_person,
        total_per_person: transport_per_person + human_per_person,
    }
}

impl TripInput {
    pub fn total_emission(&self) -> f64 {
        compute_total_emission(
            self.distance_km,
            self.transport_emission_factor,
            self.people_count,
            &self.transport_id,
            self.human_respiration_factor,
        )
    }

    pub fn breakdown(&self) -> EmissionBreakdown {
        compute_detailed_emission_per_person(
            self.distance_km,
            self.transport_emission_factor,
            self.people_count,
            &self.transport_id,
            self.human_respiration_factor,
        )
    }
}

/// `"82.35 kg CO₂"`, or `"0 kg CO₂"` for an exact zero.
///
/// Halves round away from zero on the value as written (82.345 -> 82.35),
/// rather than on its binary expansion.
pub fn format_emission(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return "0 kg CO₂".to_string();
    }

    format!("{} kg CO₂", round_decimal(value, decimals))
}

/// Fixes `value` to `decimals` places, rounding the shortest decimal form
/// (what `Display` prints) half away from zero.
fn round_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", decimals, value);
    }

    let written = format!("{}", value.abs());
    let (int_part, frac_part) = written.split_once('.').unwrap_or((written.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    digits.extend((0..decimals).map(|i| frac.get(i).copied().unwrap_or(0)));

    if frac.get(decimals).is_some_and(|&next| next >= 5) {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// `"429 km"`; the value is not rounded.
pub fn format_distance(value: f64) -> String {
    if value <= 0.0 {
        return "0 km".to_string();
    }

    format!("{} km", value)
}

/// Trees needed to absorb `emission_kg` in one year. Negative input yields 0.
pub fn estimate_trees_to_offset(emission_kg: f64) -> u64 {
    (emission_kg / CO2_PER_TREE_PER_YEAR_KG).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_HUMAN_RESPIRATION_FACTOR as H;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sao_paulo_rio_by_car_for_two() {
        let breakdown = compute_detailed_emission_per_person(429.0, 0.192, 2, "car", H);
        assert!(close(breakdown.transport_per_person, 41.184));
        assert!(close(breakdown.human_per_person, 3.5607));
        assert!(close(breakdown.total_per_person, 44.7447));

        let total = compute_total_emission(429.0, 0.192, 2, "car", H);
        assert!(close(total, 48.3054));
    }

    #[test]
    fn test_zero_guards() {
        assert_eq!(compute_total_emission(0.0, 0.192, 1, "car", H), 0.0);
        assert_eq!(compute_total_emission(-10.0, 0.192, 1, "car", H), 0.0);
        assert_eq!(compute_total_emission(100.0, 0.192, 0, "car", H), 0.0);
        assert_eq!(compute_total_emission(100.0, -0.1, 1, "car", H), 0.0);
        assert_eq!(compute_total_emission(100.0, 0.192, 1, "car", -0.01), 0.0);
    }

    #[test]
    fn test_detailed_zero_guards() {
        let zero = EmissionBreakdown::zero();
        assert_eq!(compute_detailed_emission_per_person(0.0, 0.192, 1, "car", H), zero);
        assert_eq!(compute_detailed_emission_per_person(-10.0, 0.192, 1, "car", H), zero);
        assert_eq!(compute_detailed_emission_per_person(100.0, 0.192, 0, "car", H), zero);
        assert_eq!(compute_detailed_emission_per_person(100.0, -0.1, 1, "car", H), zero);
        assert_eq!(compute_detailed_emission_per_person(100.0, 0.192, 1, "car", -0.01), zero);
    }

    #[test]
    fn test_walking_reports_nothing() {
        assert_eq!(compute_total_emission(500.0, 0.0, 3, "walking", H), 0.0);
        assert_eq!(compute_total_emission(500.0, 0.192, 1, "walking", H), 0.0);
        assert_eq!(
            compute_detailed_emission_per_person(500.0, 0.0, 3, "walking", H),
            EmissionBreakdown::zero()
        );
    }

    #[test]
    fn test_zero_factor_keeps_respiration_for_other_transports() {
        let total = compute_total_emission(100.0, 0.0, 2, "unknown", H);
        assert!(close(total, 100.0 * H * 2.0));
    }

    #[test]
    fn test_single_traveler_total_matches_breakdown() {
        for &(d, f) in &[(429.0, 0.192), (1015.0, 0.255), (12.5, 0.014)] {
            let total = compute_total_emission(d, f, 1, "car", H);
            let b = compute_detailed_emission_per_person(d, f, 1, "car", H);
            assert!(close(total, b.transport_per_person + b.human_per_person));
        }
    }

    #[test]
    fn test_more_people_share_the_transport_emission() {
        let mut previous = compute_detailed_emission_per_person(800.0, 0.089, 1, "bus", H);
        for people in 2..=10 {
            let current = compute_detailed_emission_per_person(800.0, 0.089, people, "bus", H);
            assert!(current.transport_per_person < previous.transport_per_person);
            assert_eq!(current.human_per_person, previous.human_per_person);
            previous = current;
        }
    }

    #[test]
    fn test_trip_input_defaults() {
        let input = TripInput::new(429.0, 0.192);
        assert_eq!(input.people_count, 1);
        assert_eq!(input.transport_id, "");
        assert_eq!(input.human_respiration_factor, H);
        assert!(close(input.total_emission(), 429.0 * 0.192 + 429.0 * H));
        assert!(!input.is_walking());
        assert_eq!(input.with_transport("walking").total_emission(), 0.0);
    }

    #[test]
    fn test_format_emission() {
        assert_eq!(format_emission(0.0, DEFAULT_DECIMALS), "0 kg CO₂");
        assert_eq!(format_emission(82.345, 2), "82.35 kg CO₂");
        assert_eq!(format_emission(48.3054, 2), "48.31 kg CO₂");
        assert_eq!(format_emission(3.5607, 1), "3.6 kg CO₂");
        assert_eq!(format_emission(41.184, 0), "41 kg CO₂");
        assert_eq!(format_emission(40.0, 1), "40.0 kg CO₂");
    }

    #[test]
    fn test_format_emission_rounds_the_written_value() {
        assert_eq!(format_emission(1.005, 2), "1.01 kg CO₂");
        assert_eq!(format_emission(2.675, 2), "2.68 kg CO₂");
        assert_eq!(format_emission(0.125, 2), "0.13 kg CO₂");
        assert_eq!(format_emission(-3.456, 2), "-3.46 kg CO₂");
        assert_eq!(format_emission(9.995, 2), "10.00 kg CO₂");
        assert_eq!(format_emission(0.5, 0), "1 kg CO₂");
        assert_eq!(format_emission(44.744699999999995, 2), "44.74 kg CO₂");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0 km");
        assert_eq!(format_distance(-5.0), "0 km");
        assert_eq!(format_distance(429.0), "429 km");
        assert_eq!(format_distance(12.5), "12.5 km");
    }

    #[test]
    fn test_trees_round_up() {
        assert_eq!(estimate_trees_to_offset(44.0), 2);
        assert_eq!(estimate_trees_to_offset(22.0), 1);
        assert_eq!(estimate_trees_to_offset(23.0), 2);
        assert_eq!(estimate_trees_to_offset(0.0), 0);
        assert_eq!(estimate_trees_to_offset(-30.0), 0);
    }
}
