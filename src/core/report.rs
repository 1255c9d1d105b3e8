use crate::config::Config;
use crate::core::WellnessInput;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Status {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Excellent => (0, 128, 0),
            Self::Good => (85, 107, 47),
            Self::Fair => (255, 165, 0),
            Self::Poor => (255, 0, 0),
        }
    }

    fn colored(self) -> String {
        let (r, g, b) = self.color();
        self.as_str().truecolor(r, g, b).bold().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WellnessResult {
    pub score: u8,
    pub status: Status,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone)]
pub struct Gate {
    pub ok: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EvalReport {
    pub input: WellnessInput,
    pub result: WellnessResult,
    pub min_score: u8,
    pub gate: Gate,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub input: WellnessInput,
    pub score: u8,
    pub status: Status,
    pub recommendation: &'static str,
    pub min_score: u8,
}

impl From<&EvalReport> for JsonReport {
    fn from(report: &EvalReport) -> Self {
        Self {
            input: report.input,
            score: report.result.score,
            status: report.result.status,
            recommendation: report.result.recommendation,
            min_score: report.min_score,
        }
    }
}

pub fn evaluate_gate(score: u8, cfg: &Config) -> Gate {
    if cfg.general.min_score > 0 && score < cfg.general.min_score {
        Gate {
            ok: false,
            reason: Some(format!(
                "score {} is below min_score {}",
                score, cfg.general.min_score
            )),
        }
    } else {
        Gate {
            ok: true,
            reason: None,
        }
    }
}

pub fn print_human(report: &EvalReport) {
    println!(
        "Wellness Score: {}/100 ({})",
        report.result.score,
        report.result.status.colored()
    );
    println!(
        "inputs: sleep {:.1} h | stress {:.0} | activity {:.0} min | gender {}",
        report.input.sleep_hours,
        report.input.stress_level,
        report.input.activity_minutes,
        report.input.gender
    );
    println!("advice: {}", report.result.recommendation);

    println!();
    match &report.gate.reason {
        None => println!("exit: OK"),
        Some(reason) => println!("exit: FAILED ({})", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_color_table() {
        assert_eq!(Status::Excellent.color(), (0, 128, 0));
        assert_eq!(Status::Good.color(), (85, 107, 47));
        assert_eq!(Status::Fair.color(), (255, 165, 0));
        assert_eq!(Status::Poor.color(), (255, 0, 0));
    }

    #[test]
    fn gate_only_fails_when_enabled_and_below_threshold() {
        let mut cfg = Config::default();
        assert!(evaluate_gate(0, &cfg).ok);

        cfg.general.min_score = 60;
        assert!(evaluate_gate(60, &cfg).ok);

        let gate = evaluate_gate(59, &cfg);
        assert!(!gate.ok);
        assert!(gate.reason.unwrap().contains("below min_score 60"));
    }
}
