use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::domain::{NiceScaleConfig, calculate_domain};
use crate::core::grid::{GridLine, GridStrategy, calculate_grid};
use crate::core::path::{LineStyle, Path, area_path, combine_paths, line_path};
use crate::core::scale::{Scales, create_scales};
use crate::core::segment::{Segment, SegmentedSeries, split_by_sign};
use crate::core::types::{ChartDimensions, Point, Series};

/// Frame-level configuration for one chart build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub nice_scale: bool,
    #[serde(default)]
    pub nice_scale_config: NiceScaleConfig,
    pub tick_count: usize,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default)]
    pub grid_strategy: GridStrategy,
    pub is_percentage: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            nice_scale: false,
            nice_scale_config: NiceScaleConfig::default(),
            tick_count: 5,
            line_style: LineStyle::default(),
            grid_strategy: GridStrategy::default(),
            is_percentage: false,
        }
    }
}

/// Complete geometry for one series render.
///
/// Whole-series paths cover the plain single-color case; the per-sign
/// combined paths back split styling above and below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub scales: Scales,
    pub segments: SegmentedSeries,
    pub line: Option<Path>,
    pub area: Option<Path>,
    pub positive_line: Option<Path>,
    pub positive_area: Option<Path>,
    pub negative_line: Option<Path>,
    pub negative_area: Option<Path>,
    pub grid: Vec<GridLine>,
}

/// Runs the full geometry pipeline for one series.
///
/// Domain calculation feeds scale construction, which feeds path and grid
/// building. Everything is recomputed from scratch on every call; the
/// output depends only on the inputs, so any caching belongs to the caller.
/// Returns `None` for an empty series: nothing to draw.
#[must_use]
pub fn build_frame(
    series: &Series,
    config: &ChartConfig,
    dims: ChartDimensions,
) -> Option<ChartFrame> {
    let points = series.points.as_slice();
    let (min_value, max_value) = value_extent(points)?;
    let time_range = time_extent(points)?;

    let domain = calculate_domain(
        min_value,
        max_value,
        config.nice_scale,
        &config.nice_scale_config,
        config.is_percentage,
    );
    let scales = create_scales(
        domain,
        time_range,
        dims,
        config.nice_scale,
        &config.nice_scale_config,
        config.tick_count,
        config.is_percentage,
    );

    let segments = split_by_sign(points);
    let positive_line = combined_segment_paths(&segments.positive, &scales, config, line_path);
    let positive_area = combined_segment_paths(&segments.positive, &scales, config, area_path);
    let negative_line = combined_segment_paths(&segments.negative, &scales, config, line_path);
    let negative_area = combined_segment_paths(&segments.negative, &scales, config, area_path);

    Some(ChartFrame {
        line: line_path(points, &scales, config.line_style),
        area: area_path(points, &scales, config.line_style),
        positive_line,
        positive_area,
        negative_line,
        negative_area,
        grid: calculate_grid(&scales, dims, config.tick_count, config.grid_strategy),
        scales,
        segments,
    })
}

// Typical sparklines cross zero a handful of times, so per-sign path lists
// stay on the stack.
fn combined_segment_paths(
    segments: &[Segment],
    scales: &Scales,
    config: &ChartConfig,
    build: fn(&[Point], &Scales, LineStyle) -> Option<Path>,
) -> Option<Path> {
    let paths: SmallVec<[Option<Path>; 4]> = segments
        .iter()
        .map(|segment| build(&segment.points, scales, config.line_style))
        .collect();
    combine_paths(paths)
}

/// Total-order minimum and maximum of point values.
#[must_use]
pub fn value_extent(points: &[Point]) -> Option<(f64, f64)> {
    let min = points.iter().map(|point| OrderedFloat(point.value)).min()?;
    let max = points.iter().map(|point| OrderedFloat(point.value)).max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// First and last timestamps. Relies on the caller-supplied ascending order.
#[must_use]
pub fn time_extent(points: &[Point]) -> Option<(f64, f64)> {
    Some((points.first()?.timestamp, points.last()?.timestamp))
}
