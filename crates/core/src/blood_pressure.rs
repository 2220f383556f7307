//! Parsing of `"<systolic>/<diastolic>"` blood-pressure readings.

use std::borrow::Cow;
use std::num::IntErrorKind;

use crate::error::BloodPressureError;

/// Parse the systolic component of a `"<systolic>/<diastolic>"` reading.
///
/// Only the text before the first `/` is inspected; the diastolic part is
/// ignored entirely. Surrounding whitespace is tolerated and a leading sign
/// is accepted, as are single underscores between digits (`"1_90/80"`).
/// An integer too large for `i64` saturates rather than failing, so it
/// still registers as out of range.
pub fn parse_systolic(reading: &str) -> Result<i64, BloodPressureError> {
    let (systolic, _diastolic) =
        reading
            .split_once('/')
            .ok_or_else(|| BloodPressureError::MissingSeparator {
                reading: reading.to_string(),
            })?;

    let systolic = systolic.trim();
    let invalid = || BloodPressureError::InvalidSystolic {
        value: systolic.to_string(),
    };

    let digits = remove_digit_separators(systolic).ok_or_else(invalid)?;
    match digits.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(invalid()),
        },
    }
}

/// Strip `_` digit separators. Each one must sit between two ASCII digits.
fn remove_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }

    let bytes = value.as_bytes();
    let is_digit_at = |i: Option<usize>| {
        i.and_then(|i| bytes.get(i))
            .is_some_and(u8::is_ascii_digit)
    };
    for (i, byte) in bytes.iter().enumerate() {
        if *byte == b'_' && !(is_digit_at(i.checked_sub(1)) && is_digit_at(Some(i + 1))) {
            return None;
        }
    }

    Some(Cow::Owned(value.replace('_', "")))
}
