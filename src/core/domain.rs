use serde::{Deserialize, Serialize};

use crate::core::primitives::{ceil_to_multiple, floor_to_multiple};
use crate::core::types::Domain;

/// Rounding step used for percentage axes when no override is configured.
pub const DEFAULT_ROUND_TO: f64 = 5.0;

/// Axis-rounding method used when nice-scale mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NiceScaleMethod {
    /// Step-ladder adjustment followed by a tick-count-targeted nice pass.
    #[default]
    Auto,
    /// Rounding to explicit multiples of `round_to`.
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NiceScaleConfig {
    #[serde(default)]
    pub method: NiceScaleMethod,
    #[serde(default)]
    pub round_to: Option<f64>,
}

impl NiceScaleConfig {
    /// Step used for percentage-axis rounding: the configured `round_to`
    /// when the method is `Fixed`, otherwise the default of 5.
    #[must_use]
    pub fn percentage_round_to(self) -> f64 {
        match self.method {
            NiceScaleMethod::Fixed => self.round_to.unwrap_or(DEFAULT_ROUND_TO),
            NiceScaleMethod::Auto => DEFAULT_ROUND_TO,
        }
    }
}

/// Derives the value-axis domain from raw series extremes.
///
/// Percentage axes always span zero. With nice scale on, bounds round
/// outward to `round_to` multiples and the result is forced at least one
/// step wide. Non-percentage axes round only under the `Fixed` method with
/// an explicit `round_to`; otherwise the raw extremes pass through.
///
/// Callers must supply `min_value <= max_value`. The precondition is not
/// validated and behavior is unspecified when it is violated.
#[must_use]
pub fn calculate_domain(
    min_value: f64,
    max_value: f64,
    nice_scale: bool,
    config: &NiceScaleConfig,
    is_percentage: bool,
) -> Domain {
    if is_percentage {
        if nice_scale {
            let round_to = config.percentage_round_to();
            let rounded_min = floor_to_multiple(min_value, round_to);
            let rounded_max = ceil_to_multiple(max_value, round_to);
            // Zero stays in the domain and max exceeds min by at least one step.
            let min = rounded_min.min(0.0);
            let max = rounded_max.max(rounded_min + round_to).max(0.0);
            return Domain::new(min, max);
        }

        let min = min_value.min(0.0);
        let max = max_value.max(min).max(0.0);
        return Domain::new(min, max);
    }

    if nice_scale && config.method == NiceScaleMethod::Fixed {
        if let Some(round_to) = config.round_to {
            return Domain::new(
                floor_to_multiple(min_value, round_to),
                ceil_to_multiple(max_value, round_to),
            );
        }
    }

    Domain::new(min_value, max_value)
}
