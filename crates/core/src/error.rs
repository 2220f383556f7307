/// Reasons a blood-pressure reading cannot yield a systolic value.
///
/// The evaluator recovers from every variant locally by skipping the
/// blood-pressure check; these never reach an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BloodPressureError {
    #[error("Blood pressure reading has no '/' separator: {reading:?}")]
    MissingSeparator { reading: String },

    #[error("Systolic value is not an integer: {value:?}")]
    InvalidSystolic { value: String },
}
