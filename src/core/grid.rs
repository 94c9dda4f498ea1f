use serde::{Deserialize, Serialize};

use crate::core::path::Path;
use crate::core::primitives::round_to_multiple;
use crate::core::scale::Scales;
use crate::core::types::ChartDimensions;

/// Tick-generation strategy for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridStrategy {
    /// Ticks spread evenly across the axis domain.
    #[default]
    EvenlySpaced,
    /// Zero-centered ticks with per-side steps rounded to `round_to`.
    FixedStep { round_to: f64 },
    /// Zero-centered ticks with unrounded per-side steps.
    AutoStep,
}

/// One horizontal gridline: its tick value, pixel y, and renderable path.
///
/// The tick value rides along so label placement stays a caller concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
    pub path: Path,
}

/// `count` values evenly spaced from `second` (high) down to `first` (low):
/// the value at index `i` is `second - step * i` with
/// `step = (second - first) / (count - 1)`, each optionally rounded to the
/// nearest multiple of `round_to`.
///
/// `count == 0` yields an empty vector and `count == 1` yields just the
/// high endpoint; neither divides by zero.
#[must_use]
pub fn evenly_spaced_steps(
    first: f64,
    second: f64,
    count: usize,
    round_to: Option<f64>,
) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let round = |value: f64| match round_to {
        Some(step) if step != 0.0 => round_to_multiple(value, step),
        _ => value,
    };

    if count == 1 {
        return vec![round(second)];
    }

    let step = (second - first) / (count - 1) as f64;
    (0..count)
        .map(|index| round(second - step * index as f64))
        .collect()
}

/// Zero-centered ticks with per-side steps rounded to `round_to`.
///
/// The tick budget splits into a negative side, the zero tick, and a
/// positive side. When the rounded negative step is at most half the
/// positive step the negative side is visually negligible, and the layout
/// falls back to evenly spaced ticks across the whole domain instead of
/// clustering around zero.
#[must_use]
pub fn fixed_step_values(min: f64, max: f64, tick_count: usize, round_to: f64) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    let (negative_count, positive_count) = split_tick_budget(tick_count);
    let positive_step = side_step(max, positive_count, Some(round_to));
    let negative_step = side_step(min.abs(), negative_count, Some(round_to));

    if negative_step <= positive_step / 2.0 {
        return evenly_spaced_steps(min, max, tick_count, Some(round_to));
    }

    zero_centered_values(negative_step, negative_count, positive_step, positive_count)
}

/// Zero-centered ticks with unrounded per-side steps.
#[must_use]
pub fn auto_step_values(min: f64, max: f64, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }

    let (negative_count, positive_count) = split_tick_budget(tick_count);
    let positive_step = side_step(max, positive_count, None);
    let negative_step = side_step(min.abs(), negative_count, None);

    zero_centered_values(negative_step, negative_count, positive_step, positive_count)
}

/// Computes horizontal gridlines for the current y-axis domain.
///
/// Tick values come from the selected strategy, mapped through the y scale.
/// Non-finite pixel results are filtered out rather than propagated; each
/// surviving tick emits one horizontal path spanning the padded plot width.
/// A tick count of zero yields no gridlines.
#[must_use]
pub fn calculate_grid(
    scales: &Scales,
    dims: ChartDimensions,
    tick_count: usize,
    strategy: GridStrategy,
) -> Vec<GridLine> {
    if tick_count == 0 {
        return Vec::new();
    }

    let (domain_min, domain_max) = scales.y.domain();
    let values = match strategy {
        GridStrategy::EvenlySpaced => {
            evenly_spaced_steps(domain_min, domain_max, tick_count, None)
        }
        GridStrategy::FixedStep { round_to } => {
            fixed_step_values(domain_min, domain_max, tick_count, round_to)
        }
        GridStrategy::AutoStep => auto_step_values(domain_min, domain_max, tick_count),
    };

    let left = dims.horizontal_padding;
    let right = dims.width - dims.horizontal_padding;

    values
        .into_iter()
        .filter_map(|value| {
            let y = scales.y.apply(value);
            if !y.is_finite() {
                return None;
            }
            let mut path = Path::new();
            path.move_to(left, y);
            path.line_to(right, y);
            Some(GridLine { value, y, path })
        })
        .collect()
}

// Splits a tick budget into (negative, positive) side counts, reserving one
// slot for the zero tick. Even budgets give the spare slot to the positive
// side.
fn split_tick_budget(tick_count: usize) -> (usize, usize) {
    let half = tick_count / 2;
    if tick_count % 2 == 0 {
        (half.saturating_sub(1), half)
    } else {
        (half, half)
    }
}

fn side_step(extent: f64, count: usize, round_to: Option<f64>) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let step = extent / count as f64;
    match round_to {
        Some(round) => round_to_multiple(step, round),
        None => step,
    }
}

// Descending: [pos_count * pos_step, ..., pos_step, 0, -neg_step, ...].
fn zero_centered_values(
    negative_step: f64,
    negative_count: usize,
    positive_step: f64,
    positive_count: usize,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(negative_count + positive_count + 1);
    for i in (1..=positive_count).rev() {
        values.push(positive_step * i as f64);
    }
    values.push(0.0);
    for i in 1..=negative_count {
        values.push(-negative_step * i as f64);
    }
    values
}
