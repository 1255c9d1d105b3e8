pub mod advice;
pub mod report;
pub mod score;

use crate::config::LimitsConfig;
use crate::core::report::WellnessResult;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => bail!("unknown gender {other:?} (expected male or female)"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WellnessInput {
    pub sleep_hours: f64,
    pub stress_level: f64,
    pub activity_minutes: f64,
    pub gender: Gender,
}

impl WellnessInput {
    pub fn new(
        sleep_hours: f64,
        stress_level: f64,
        activity_minutes: f64,
        gender: Gender,
        limits: &LimitsConfig,
    ) -> Result<Self> {
        for (name, value) in [
            ("sleep", sleep_hours),
            ("stress", stress_level),
            ("activity", activity_minutes),
        ] {
            if !value.is_finite() {
                bail!("{} must be a finite number, got {}", name, value);
            }
        }

        // the CLI stand-in for bounded sliders: out-of-range values snap to the range.
        Ok(Self {
            sleep_hours: sleep_hours.clamp(0.0, limits.sleep_max),
            stress_level: stress_level.clamp(0.0, limits.stress_max),
            activity_minutes: activity_minutes.clamp(0.0, limits.activity_max),
            gender,
        })
    }
}

pub fn evaluate(input: &WellnessInput) -> WellnessResult {
    let score = score::compute_score(input);
    let status = score::classify(i32::from(score));
    let recommendation = advice::recommend(status, input.gender);

    WellnessResult {
        score,
        status,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(WellnessInput::new(f64::NAN, 5.0, 30.0, Gender::Male, &limits()).is_err());
        assert!(WellnessInput::new(8.0, f64::INFINITY, 30.0, Gender::Male, &limits()).is_err());
        assert!(WellnessInput::new(8.0, 5.0, f64::NEG_INFINITY, Gender::Female, &limits()).is_err());
    }

    #[test]
    fn clamps_inputs_to_configured_ranges() {
        let input = WellnessInput::new(99.0, -3.0, 500.0, Gender::Female, &limits()).unwrap();
        assert_eq!(input.sleep_hours, 12.0);
        assert_eq!(input.stress_level, 0.0);
        assert_eq!(input.activity_minutes, 120.0);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let input = WellnessInput::new(8.0, 2.0, 30.0, Gender::Male, &limits()).unwrap();
        assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn parses_gender_names() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }
}
