//! Threshold screening of a single set of vital-sign readings.
//!
//! Three independent checks run in a fixed order (temperature, pulse,
//! blood pressure). Every applicable check runs regardless of earlier
//! results, and the order only determines the order of the reasons.

use crate::blood_pressure::parse_systolic;
use crate::error::BloodPressureError;

/// Temperature above this value is abnormal.
pub const TEMPERATURE_MAX: f64 = 38.0;
/// Temperature below this value is abnormal.
pub const TEMPERATURE_MIN: f64 = 35.0;
/// Pulse above this value is abnormal.
pub const PULSE_MAX: f64 = 120.0;
/// Pulse below this value is abnormal.
pub const PULSE_MIN: f64 = 40.0;
/// Systolic pressure above this value is abnormal.
pub const SYSTOLIC_MAX: i64 = 180;
/// Systolic pressure below this value is abnormal.
pub const SYSTOLIC_MIN: i64 = 80;

/// A vital sign whose reading fell outside its threshold range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbnormalVital {
    Temperature,
    Pulse,
    BloodPressure,
}

impl AbnormalVital {
    /// Human-readable reason reported to the client.
    pub fn reason(self) -> &'static str {
        match self {
            AbnormalVital::Temperature => "Abnormal temperature",
            AbnormalVital::Pulse => "Abnormal pulse",
            AbnormalVital::BloodPressure => "Abnormal blood pressure",
        }
    }
}

/// Readings for one patient. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsInput {
    pub temperature: Option<f64>,
    pub pulse: Option<f64>,
    /// `"<systolic>/<diastolic>"`, e.g. `"120/80"`. Malformed values are
    /// tolerated and simply not evaluated.
    pub blood_pressure: Option<String>,
}

/// Outcome of screening one [`VitalsInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// `true` iff `reasons` is non-empty.
    pub alert: bool,
    /// One entry per triggered check, in evaluation order.
    pub reasons: Vec<String>,
    /// Why a non-empty blood-pressure reading was left unevaluated, if it was.
    pub blood_pressure_error: Option<BloodPressureError>,
    /// The evaluated input, unmodified.
    pub input: VitalsInput,
}

impl EvaluationResult {
    /// All reasons joined with `", "`; empty when nothing triggered.
    pub fn reason_summary(&self) -> String {
        self.reasons.join(", ")
    }
}

/// Stateless handle on [`evaluate`], passed to whoever needs to screen
/// readings instead of being looked up globally.
#[derive(Debug, Clone, Copy, Default)]
pub struct VitalsEvaluator;

impl VitalsEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, input: VitalsInput) -> EvaluationResult {
        evaluate(input)
    }
}

/// Screen a set of readings against the fixed thresholds.
///
/// Never fails. Absent fields are skipped, and a blood-pressure string
/// whose systolic value cannot be parsed is treated as absent.
pub fn evaluate(input: VitalsInput) -> EvaluationResult {
    let screening = screen(&input);
    let reasons: Vec<String> = screening
        .findings
        .into_iter()
        .map(|vital| vital.reason().to_string())
        .collect();

    EvaluationResult {
        alert: !reasons.is_empty(),
        reasons,
        blood_pressure_error: screening.blood_pressure_error,
        input,
    }
}

/// The triggered checks for `input`, in evaluation order.
pub fn abnormal_vitals(input: &VitalsInput) -> Vec<AbnormalVital> {
    screen(input).findings
}

struct Screening {
    findings: Vec<AbnormalVital>,
    blood_pressure_error: Option<BloodPressureError>,
}

fn screen(input: &VitalsInput) -> Screening {
    let mut findings = Vec::with_capacity(3);
    let mut blood_pressure_error = None;

    if input.temperature.is_some_and(temperature_out_of_range) {
        findings.push(AbnormalVital::Temperature);
    }

    if input.pulse.is_some_and(pulse_out_of_range) {
        findings.push(AbnormalVital::Pulse);
    }

    if let Some(reading) = input.blood_pressure.as_deref().filter(|r| !r.is_empty()) {
        match parse_systolic(reading) {
            Ok(systolic) if systolic_out_of_range(systolic) => {
                findings.push(AbnormalVital::BloodPressure);
            }
            Ok(_) => {}
            Err(err) => blood_pressure_error = Some(err),
        }
    }

    Screening {
        findings,
        blood_pressure_error,
    }
}

fn temperature_out_of_range(temperature: f64) -> bool {
    temperature > TEMPERATURE_MAX || temperature < TEMPERATURE_MIN
}

fn pulse_out_of_range(pulse: f64) -> bool {
    pulse > PULSE_MAX || pulse < PULSE_MIN
}

fn systolic_out_of_range(systolic: i64) -> bool {
    systolic > SYSTOLIC_MAX || systolic < SYSTOLIC_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature(t: f64) -> VitalsInput {
        VitalsInput {
            temperature: Some(t),
            ..Default::default()
        }
    }

    fn pulse(p: f64) -> VitalsInput {
        VitalsInput {
            pulse: Some(p),
            ..Default::default()
        }
    }

    fn bp(reading: &str) -> VitalsInput {
        VitalsInput {
            blood_pressure: Some(reading.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn all_absent_raises_no_alert() {
        let result = evaluate(VitalsInput::default());
        assert!(!result.alert);
        assert!(result.reasons.is_empty());
        assert_eq!(result.reason_summary(), "");
    }

    #[test]
    fn temperature_bounds_are_exclusive() {
        for t in [35.0, 35.5, 36.6, 37.9, 38.0] {
            assert!(!evaluate(temperature(t)).alert, "{t} should be normal");
        }
        for t in [34.9, 30.0, -10.0, 38.1, 39.0, 42.0] {
            let result = evaluate(temperature(t));
            assert!(result.alert, "{t} should be abnormal");
            assert_eq!(result.reasons, vec!["Abnormal temperature"]);
        }
    }

    #[test]
    fn pulse_bounds_are_exclusive() {
        for p in [40.0, 60.0, 100.0, 120.0] {
            assert!(!evaluate(pulse(p)).alert, "{p} should be normal");
        }
        for p in [0.0, 39.0, 39.99, 120.01, 121.0, 200.0] {
            let result = evaluate(pulse(p));
            assert!(result.alert, "{p} should be abnormal");
            assert_eq!(result.reasons, vec!["Abnormal pulse"]);
        }
    }

    #[test]
    fn blood_pressure_checks_systolic_only() {
        assert!(!evaluate(bp("120/80")).alert);
        assert!(!evaluate(bp("80/20")).alert);
        assert!(!evaluate(bp("180/200")).alert);

        let high = evaluate(bp("190/90"));
        assert!(high.alert);
        assert_eq!(high.reasons, vec!["Abnormal blood pressure"]);

        let low = evaluate(bp("70/40"));
        assert!(low.alert);
        assert_eq!(low.reasons, vec!["Abnormal blood pressure"]);
    }

    #[test]
    fn malformed_blood_pressure_is_skipped() {
        for reading in ["abc", "190", "abc/80", "/", "12.5/80", "1__90/80"] {
            let result = evaluate(bp(reading));
            assert!(!result.alert, "{reading:?} should be ignored");
            assert!(result.reasons.is_empty());
            assert!(
                result.blood_pressure_error.is_some(),
                "{reading:?} should report why it was skipped"
            );
        }
    }

    #[test]
    fn empty_blood_pressure_is_absent() {
        let result = evaluate(bp(""));
        assert!(!result.alert);
        assert_eq!(result.blood_pressure_error, None);
    }

    #[test]
    fn parsed_blood_pressure_reports_no_error() {
        assert_eq!(evaluate(bp("120/80")).blood_pressure_error, None);
        assert_eq!(evaluate(bp("190/90")).blood_pressure_error, None);
    }

    #[test]
    fn underscore_grouped_systolic_is_evaluated() {
        let result = evaluate(bp("1_90/80"));
        assert!(result.alert);
        assert_eq!(result.reasons, vec!["Abnormal blood pressure"]);
    }

    #[test]
    fn infinite_readings_are_abnormal() {
        assert!(evaluate(temperature(f64::INFINITY)).alert);
        assert!(evaluate(pulse(f64::NEG_INFINITY)).alert);
    }

    #[test]
    fn reasons_follow_fixed_order() {
        let input = VitalsInput {
            temperature: Some(40.0),
            pulse: Some(130.0),
            blood_pressure: Some("200/100".to_string()),
        };
        let result = evaluate(input);
        assert!(result.alert);
        assert_eq!(
            result.reasons,
            vec!["Abnormal temperature", "Abnormal pulse", "Abnormal blood pressure"]
        );
        assert_eq!(
            result.reason_summary(),
            "Abnormal temperature, Abnormal pulse, Abnormal blood pressure"
        );
    }

    #[test]
    fn later_checks_run_after_earlier_ones_trigger() {
        let input = VitalsInput {
            temperature: Some(34.0),
            pulse: Some(70.0),
            blood_pressure: Some("60/40".to_string()),
        };
        assert_eq!(
            abnormal_vitals(&input),
            vec![AbnormalVital::Temperature, AbnormalVital::BloodPressure]
        );
    }

    #[test]
    fn alert_matches_reasons() {
        let temperatures = [None, Some(36.5), Some(39.0)];
        let pulses = [None, Some(70.0), Some(30.0)];
        let readings = [None, Some("120/80"), Some("190/90"), Some("junk")];

        for t in temperatures {
            for p in pulses {
                for r in readings {
                    let input = VitalsInput {
                        temperature: t,
                        pulse: p,
                        blood_pressure: r.map(str::to_string),
                    };
                    let result = evaluate(input);
                    assert_eq!(result.alert, !result.reasons.is_empty());
                    assert_eq!(result.reasons.len(), abnormal_vitals(&result.input).len());
                }
            }
        }
    }

    #[test]
    fn echoes_input_unchanged() {
        let input = VitalsInput {
            temperature: Some(39.0),
            pulse: Some(70.0),
            blood_pressure: Some("not a reading".to_string()),
        };
        let result = evaluate(input.clone());
        assert_eq!(result.input, input);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = VitalsEvaluator::new();
        let input = VitalsInput {
            temperature: Some(39.0),
            pulse: Some(70.0),
            blood_pressure: Some("120/80".to_string()),
        };
        assert_eq!(evaluator.evaluate(input.clone()), evaluator.evaluate(input));
    }
}
