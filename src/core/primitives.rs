use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_epoch_ms(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Rounds `value` to the nearest multiple of `step`.
///
/// `step` values of zero or non-finite leave `value` untouched so callers
/// can treat "no rounding" as a degenerate step.
#[must_use]
pub fn round_to_multiple(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step == 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Rounds `value` down to the nearest multiple of `step`.
#[must_use]
pub fn floor_to_multiple(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step == 0.0 {
        return value;
    }
    (value / step).floor() * step
}

/// Rounds `value` up to the nearest multiple of `step`.
#[must_use]
pub fn ceil_to_multiple(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step == 0.0 {
        return value;
    }
    (value / step).ceil() * step
}
