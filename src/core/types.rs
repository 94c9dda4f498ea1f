use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_epoch_ms, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Plot area in pixels with symmetric axis paddings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
}

impl ChartDimensions {
    #[must_use]
    pub const fn new(
        width: f64,
        height: f64,
        horizontal_padding: f64,
        vertical_padding: f64,
    ) -> Self {
        Self {
            width,
            height,
            horizontal_padding,
            vertical_padding,
        }
    }

    /// Returns whether the padded plot area has positive extent on both axes.
    ///
    /// Scale construction does not guard against invalid dimensions; callers
    /// that cannot guarantee them should check here first.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.horizontal_padding.is_finite()
            && self.vertical_padding.is_finite()
            && self.horizontal_padding >= 0.0
            && self.vertical_padding >= 0.0
            && self.width > 2.0 * self.horizontal_padding
            && self.height > 2.0 * self.vertical_padding
    }

    /// [`Self::is_valid`] for callers threading `ChartResult`.
    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One observation in a time series.
///
/// `timestamp` is epoch milliseconds. Input data carries whole-millisecond
/// stamps; synthesized zero-crossing points carry fractional stamps, so the
/// field stays `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub timestamp: f64,
    pub value: f64,
}

impl Point {
    #[must_use]
    pub const fn new(timestamp: f64, value: f64) -> Self {
        Self { timestamp, value }
    }

    #[must_use]
    pub fn from_epoch_ms(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp: timestamp_ms as f64,
            value,
        }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            timestamp: datetime_to_epoch_ms(time),
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// Caller-owned series. The geometry core only reads it and never re-sorts;
/// points must be supplied in ascending timestamp order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub points: Vec<Point>,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            label: None,
            points,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Value-axis extent. Invariant: `min <= max`.
///
/// A degenerate domain (`min == max`) is legal; scale construction maps it
/// to a constant output instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }
}
