use crate::core::WellnessInput;
use crate::core::report::Status;

const SLEEP_WEIGHT: f64 = 8.0;
const STRESS_WEIGHT: f64 = 5.0;
const ACTIVITY_WEIGHT: f64 = 0.5;

pub fn compute_score(input: &WellnessInput) -> u8 {
    let raw = input.sleep_hours * SLEEP_WEIGHT - input.stress_level * STRESS_WEIGHT
        + input.activity_minutes * ACTIVITY_WEIGHT;

    // ties round away from zero, so a raw 99.5 lands on 100.
    raw.clamp(0.0, 100.0).round() as u8
}

pub fn classify(score: i32) -> Status {
    match score {
        80.. => Status::Excellent,
        60..=79 => Status::Good,
        40..=59 => Status::Fair,
        _ => Status::Poor,
    }
}
