use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::scale::Scales;
use crate::core::types::Point;

/// One drawing command in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

/// Backend-agnostic path: an ordered command list any renderer can replay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo { x1, y1, x2, y2, x, y });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Appends all commands of `other`, in order (additive union).
    pub fn concat(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Replays the command list into a rendering backend.
    pub fn replay<S: PathSink>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { x, y } => sink.move_to(x, y),
                PathCommand::LineTo { x, y } => sink.line_to(x, y),
                PathCommand::CubicTo { x1, y1, x2, y2, x, y } => {
                    sink.cubic_to(x1, y1, x2, y2, x, y);
                }
                PathCommand::Close => sink.close(),
            }
        }
    }
}

/// Rendering seam: backends implement this to build their native path type.
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    fn close(&mut self);
}

/// Interpolation style for line and area paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Straight segments between points.
    Linear,
    /// Global smooth cubic spline; can overshoot.
    Natural,
    /// Local smooth spline with bounded overshoot.
    #[default]
    #[serde(rename = "catmull")]
    CatmullRom,
    /// Smooth and guaranteed non-overshooting for monotonic data.
    Monotone,
    /// Horizontal-then-vertical steps.
    Step,
}

impl FromStr for LineStyle {
    type Err = Infallible;

    /// Unknown names fall back to the default style with a warning rather
    /// than failing; a bad style name is a cosmetic problem, not an error.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "linear" => Self::Linear,
            "natural" => Self::Natural,
            "catmull" => Self::CatmullRom,
            "monotone" => Self::Monotone,
            "step" => Self::Step,
            other => {
                tracing::warn!(style = other, "unknown line style, falling back to catmull");
                Self::default()
            }
        })
    }
}

/// Builds the stroked path for a point run.
///
/// Returns `None` for empty input: nothing to draw, not an error. Points
/// that map to non-finite pixel coordinates are filtered out and the curve
/// is built from the remainder.
#[must_use]
pub fn line_path(points: &[Point], scales: &Scales, style: LineStyle) -> Option<Path> {
    let mapped = map_points(points, scales);
    if mapped.is_empty() {
        return None;
    }

    let mut path = Path::new();
    append_curve(&mut path, &mapped, style);
    Some(path)
}

/// Builds the filled path for a point run, closed against the zero baseline.
///
/// The lower edge sits at `y = scales.y.apply(0.0)` rather than at the
/// domain minimum, so fills stay anchored to zero when the series crosses
/// it. Returns `None` for empty input.
#[must_use]
pub fn area_path(points: &[Point], scales: &Scales, style: LineStyle) -> Option<Path> {
    let mapped = map_points(points, scales);
    if mapped.is_empty() {
        return None;
    }

    let baseline = scales.y.apply(0.0);
    let first = mapped[0];
    let last = mapped[mapped.len() - 1];

    let mut path = Path::new();
    append_curve(&mut path, &mapped, style);
    path.line_to(last.0, baseline);
    path.line_to(first.0, baseline);
    path.close();
    Some(path)
}

/// Additively unions sub-paths in order.
///
/// `None` entries are skipped; when every entry is `None` the result is
/// `None` as well.
#[must_use]
pub fn combine_paths<I>(paths: I) -> Option<Path>
where
    I: IntoIterator<Item = Option<Path>>,
{
    let mut combined: Option<Path> = None;
    for path in paths.into_iter().flatten() {
        combined.get_or_insert_with(Path::new).concat(&path);
    }
    combined
}

fn map_points(points: &[Point], scales: &Scales) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|point| (scales.x.apply(point.timestamp), scales.y.apply(point.value)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

fn append_curve(path: &mut Path, mapped: &[(f64, f64)], style: LineStyle) {
    match style {
        LineStyle::Linear => append_linear(path, mapped),
        LineStyle::Natural => append_natural(path, mapped),
        LineStyle::CatmullRom => append_catmull_rom(path, mapped),
        LineStyle::Monotone => append_monotone(path, mapped),
        LineStyle::Step => append_step(path, mapped),
    }
}

fn append_linear(path: &mut Path, points: &[(f64, f64)]) {
    path.move_to(points[0].0, points[0].1);
    for point in &points[1..] {
        path.line_to(point.0, point.1);
    }
}

fn append_step(path: &mut Path, points: &[(f64, f64)]) {
    path.move_to(points[0].0, points[0].1);
    for pair in points.windows(2) {
        path.line_to(pair[1].0, pair[0].1);
        path.line_to(pair[1].0, pair[1].1);
    }
}

// Uniform Catmull-Rom, expressed as cubic Beziers. Endpoint neighbors are
// clamped to the terminal points.
fn append_catmull_rom(path: &mut Path, points: &[(f64, f64)]) {
    if points.len() < 3 {
        return append_linear(path, points);
    }

    let last = points.len() - 1;
    path.move_to(points[0].0, points[0].1);
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
        path.cubic_to(c1.0, c1.1, c2.0, c2.1, p2.0, p2.1);
    }
}

// Fritsch-Carlson monotone cubic interpolation. Tangents are clamped so the
// curve never overshoots between monotonic samples.
fn append_monotone(path: &mut Path, points: &[(f64, f64)]) {
    if points.len() < 3 {
        return append_linear(path, points);
    }

    let n = points.len();
    let secant = |i: usize| {
        let dx = points[i + 1].0 - points[i].0;
        if dx != 0.0 {
            (points[i + 1].1 - points[i].1) / dx
        } else {
            0.0
        }
    };

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let s0 = secant(i - 1);
        let s1 = secant(i);
        let h0 = points[i].0 - points[i - 1].0;
        let h1 = points[i + 1].0 - points[i].0;
        let weighted = (s0 * h1 + s1 * h0) / (h0 + h1);
        let tangent =
            (sign_of(s0) + sign_of(s1)) * s0.abs().min(s1.abs()).min(0.5 * weighted.abs());
        tangents[i] = if tangent.is_finite() { tangent } else { 0.0 };
    }
    tangents[0] = endpoint_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = endpoint_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    path.move_to(points[0].0, points[0].1);
    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        path.cubic_to(
            x0 + dx,
            y0 + dx * tangents[i],
            x1 - dx,
            y1 - dx * tangents[i + 1],
            x1,
            y1,
        );
    }
}

fn sign_of(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

fn endpoint_tangent(p0: (f64, f64), p1: (f64, f64), inner_tangent: f64) -> f64 {
    let dx = p1.0 - p0.0;
    if dx != 0.0 {
        (3.0 * (p1.1 - p0.1) / dx - inner_tangent) / 2.0
    } else {
        inner_tangent
    }
}

// Natural cubic spline through all points, expressed as cubic Beziers.
// Control points come from the standard tridiagonal system per axis.
fn append_natural(path: &mut Path, points: &[(f64, f64)]) {
    if points.len() < 3 {
        return append_linear(path, points);
    }

    let xs: Vec<f64> = points.iter().map(|point| point.0).collect();
    let ys: Vec<f64> = points.iter().map(|point| point.1).collect();
    let (cx1, cx2) = natural_control_points(&xs);
    let (cy1, cy2) = natural_control_points(&ys);

    path.move_to(points[0].0, points[0].1);
    for i in 0..points.len() - 1 {
        path.cubic_to(
            cx1[i],
            cy1[i],
            cx2[i],
            cy2[i],
            points[i + 1].0,
            points[i + 1].1,
        );
    }
}

// Thomas-algorithm solve for first control points; second control points
// follow from C2 continuity. `values` must hold at least three entries.
fn natural_control_points(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = values.len() - 1;
    let mut first = vec![0.0; n];
    let mut second = vec![0.0; n];
    let mut diagonal = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    diagonal[0] = 2.0;
    rhs[0] = values[0] + 2.0 * values[1];
    for i in 1..n - 1 {
        first[i] = 1.0;
        diagonal[i] = 4.0;
        rhs[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }
    first[n - 1] = 2.0;
    diagonal[n - 1] = 7.0;
    rhs[n - 1] = 8.0 * values[n - 1] + values[n];

    for i in 1..n {
        let factor = first[i] / diagonal[i - 1];
        diagonal[i] -= factor;
        rhs[i] -= factor * rhs[i - 1];
    }

    first[n - 1] = rhs[n - 1] / diagonal[n - 1];
    for i in (0..n - 1).rev() {
        first[i] = (rhs[i] - first[i + 1]) / diagonal[i];
    }

    second[n - 1] = (values[n] + first[n - 1]) / 2.0;
    for i in 0..n - 1 {
        second[i] = 2.0 * values[i + 1] - first[i + 1];
    }

    (first, second)
}
