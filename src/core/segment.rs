use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Sign class of a segment. Zero values group with `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Maximal run of same-signed points.
///
/// Every non-terminal run ends with a synthesized point whose value is
/// exactly `0.0`, and the following run starts with that same point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub sign: Sign,
    pub points: Vec<Point>,
}

impl Segment {
    #[must_use]
    pub fn start_timestamp(&self) -> Option<f64> {
        self.points.first().map(|point| point.timestamp)
    }
}

/// Positive and negative runs of one series, bucketed for independent
/// styling (for example green above zero, red below).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentedSeries {
    pub positive: Vec<Segment>,
    pub negative: Vec<Segment>,
}

impl SegmentedSeries {
    /// All segments merged back into temporal order.
    ///
    /// Both buckets are already ordered internally, so an ordinary merge by
    /// start timestamp restores the original interleaving.
    #[must_use]
    pub fn in_temporal_order(&self) -> Vec<&Segment> {
        let mut merged = Vec::with_capacity(self.positive.len() + self.negative.len());
        let mut positive = self.positive.iter().peekable();
        let mut negative = self.negative.iter().peekable();

        loop {
            let take_positive = match (positive.peek(), negative.peek()) {
                (Some(pos), Some(neg)) => {
                    pos.start_timestamp().unwrap_or(f64::INFINITY)
                        <= neg.start_timestamp().unwrap_or(f64::INFINITY)
                }
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            let next = if take_positive {
                positive.next()
            } else {
                negative.next()
            };
            if let Some(segment) = next {
                merged.push(segment);
            }
        }

        merged
    }
}

/// Splits a point sequence into contiguous same-sign runs.
///
/// A sign change synthesizes a zero-crossing point by linear interpolation;
/// the crossing closes the outgoing run and opens the incoming one, so
/// adjacent runs share that exact boundary point. Adjacent zero values
/// synthesize nothing because zero groups with the positive sign.
/// Empty input yields empty buckets.
#[must_use]
pub fn split_by_sign(points: &[Point]) -> SegmentedSeries {
    let Some(first) = points.first() else {
        return SegmentedSeries::default();
    };

    let mut segments = SegmentedSeries::default();
    let mut current_sign = Sign::of(first.value);
    let mut current = vec![*first];

    for pair in points.windows(2) {
        let (previous, point) = (pair[0], pair[1]);
        let sign = Sign::of(point.value);
        if sign != current_sign {
            let crossing = zero_crossing(previous, point);
            current.push(crossing);
            push_segment(&mut segments, current_sign, current);
            current = vec![crossing];
            current_sign = sign;
        }
        current.push(point);
    }

    push_segment(&mut segments, current_sign, current);
    segments
}

/// Linearly interpolated timestamp where the series crosses zero between
/// two adjacent points of opposite sign. The value is exactly `0.0`.
#[must_use]
pub fn zero_crossing(previous: Point, current: Point) -> Point {
    let ratio = previous.value.abs() / (previous.value.abs() + current.value.abs());
    Point::new(
        previous.timestamp + (current.timestamp - previous.timestamp) * ratio,
        0.0,
    )
}

fn push_segment(segments: &mut SegmentedSeries, sign: Sign, points: Vec<Point>) {
    if points.is_empty() {
        return;
    }
    let segment = Segment { sign, points };
    match sign {
        Sign::Positive => segments.positive.push(segment),
        Sign::Negative => segments.negative.push(segment),
    }
}
