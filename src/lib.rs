//! trendchart: renderer-agnostic geometry engine for live price-trend charts.
//!
//! The crate is pure computation: ordered time-series points go in, and
//! pixel-space scales, drawing-command paths, and gridlines come out.
//! Rendering backends consume [`crate::core::Path`] command lists through
//! the [`crate::core::PathSink`] seam; nothing here rasterizes, blocks, or
//! performs I/O.

pub mod core;
pub mod error;
pub mod refresh;
pub mod telemetry;

pub use crate::core::{ChartConfig, ChartFrame, build_frame};
pub use error::{ChartError, ChartResult};
