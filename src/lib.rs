//! boxstack-rs: layout engine for stacked bar and column series.
//!
//! Given a chart state snapshot (plot area, axes, palette and stacked series
//! data) the crate computes rectangle models per stack segment, optional
//! connector lines between categories, hover responders and tooltip records.
//! Painting is left to a [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BoxSeriesConfig, BoxStackSeries, ChartState, StackSeriesRender};
pub use error::{ChartError, ChartResult};
