pub mod domain;
pub mod frame;
pub mod grid;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod segment;
pub mod types;

pub use domain::{NiceScaleConfig, NiceScaleMethod, calculate_domain};
pub use frame::{ChartConfig, ChartFrame, build_frame};
pub use grid::{
    GridLine, GridStrategy, auto_step_values, calculate_grid, evenly_spaced_steps,
    fixed_step_values,
};
pub use path::{
    LineStyle, Path, PathCommand, PathSink, area_path, combine_paths, line_path,
};
pub use scale::{LinearScale, Scales, create_scales};
pub use segment::{Segment, SegmentedSeries, Sign, split_by_sign, zero_crossing};
pub use types::{ChartDimensions, Domain, Point, Series};
