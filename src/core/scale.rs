use serde::{Deserialize, Serialize};

use crate::core::domain::{NiceScaleConfig, NiceScaleMethod};
use crate::core::primitives::{ceil_to_multiple, floor_to_multiple};
use crate::core::types::{ChartDimensions, Domain};

/// Pure linear mapping from a value domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// A degenerate domain (`start == end`) maps every input to the middle
    /// of the range instead of dividing by zero.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to a domain value.
    ///
    /// A degenerate range maps every pixel to the middle of the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return (self.domain_start + self.domain_end) / 2.0;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Paired axis scales for one chart frame: value to pixel y, time to pixel x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub y: LinearScale,
    pub x: LinearScale,
}

/// Tick step from the 1/2/5/10 "nice" ladder covering `range`.
///
/// Percentage axes use a coarse two-level ladder. Other axes derive the
/// base step from the order of magnitude of the range, then scale it by
/// how many base steps the range holds. `range` must be positive and finite.
#[must_use]
pub fn nice_step(range: f64, is_percentage: bool) -> f64 {
    if is_percentage {
        return if range > 50.0 { 10.0 } else { 5.0 };
    }

    let base = 10_f64.powf((range.log10() - 1.0).floor());
    let fits = range / base;
    let multiplier = if fits <= 10.0 {
        1.0
    } else if fits <= 20.0 {
        2.0
    } else if fits <= 50.0 {
        5.0
    } else {
        10.0
    };
    base * multiplier
}

/// Expands a domain outward to multiples of the nice tick step.
///
/// Degenerate or non-finite spans pass through unchanged; the resulting
/// constant scale is handled by [`LinearScale::apply`].
#[must_use]
pub fn adjusted_nice_domain(domain: Domain, is_percentage: bool) -> Domain {
    let range = domain.span();
    if !range.is_finite() || range <= 0.0 {
        return domain;
    }

    let step = nice_step(range, is_percentage);
    Domain::new(
        floor_to_multiple(domain.min, step),
        ceil_to_multiple(domain.max, step),
    )
}

/// Axis-library style nice pass: expands the domain to multiples of the
/// tick increment that targets `tick_count` ticks, iterating until the
/// increment stabilizes.
#[must_use]
pub fn nice_domain(domain: Domain, tick_count: usize) -> Domain {
    if tick_count == 0 {
        return domain;
    }

    let (mut start, mut stop) = domain.as_tuple();
    if !(stop > start) || !start.is_finite() || !stop.is_finite() {
        return domain;
    }

    let mut previous_step = 0.0;
    for _ in 0..10 {
        let step = tick_increment(start, stop, tick_count);
        if step == previous_step || !step.is_finite() || step <= 0.0 {
            break;
        }
        start = (start / step).floor() * step;
        stop = (stop / step).ceil() * step;
        previous_step = step;
    }

    Domain::new(start, stop)
}

// Tick increment on the 1/2/5/10 ladder nearest to span / count.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10_f64.powf(power)
}

/// Builds the paired axis scales for a chart frame.
///
/// The y scale maps the (optionally nice-adjusted) value domain to
/// `[height - vertical_padding, vertical_padding]`, inverted so larger
/// values sit higher on screen. The x scale maps the time range to
/// `[horizontal_padding, width - horizontal_padding]`.
///
/// With nice scale on, the manual step-ladder adjustment always runs; the
/// `Auto` method then applies the tick-count-targeted nice pass on top.
/// The two passes interact and are kept as implemented.
///
/// Dimensions where the padding consumes the whole axis produce a zero or
/// negative pixel range; guarding against that is caller responsibility
/// (see [`ChartDimensions::is_valid`]).
#[must_use]
pub fn create_scales(
    domain: Domain,
    time_range: (f64, f64),
    dims: ChartDimensions,
    nice_scale: bool,
    config: &NiceScaleConfig,
    tick_count: usize,
    is_percentage: bool,
) -> Scales {
    let mut y_domain = domain;
    if nice_scale {
        y_domain = adjusted_nice_domain(y_domain, is_percentage);
        if config.method == NiceScaleMethod::Auto {
            y_domain = nice_domain(y_domain, tick_count);
        }
    }

    let y = LinearScale::new(
        y_domain.as_tuple(),
        (
            dims.height - dims.vertical_padding,
            dims.vertical_padding,
        ),
    );
    let x = LinearScale::new(
        time_range,
        (
            dims.horizontal_padding,
            dims.width - dims.horizontal_padding,
        ),
    );

    Scales { y, x }
}
