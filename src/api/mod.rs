mod box_stack_series;
pub mod chart_state;
mod connector;
pub mod geometry;
mod json_contract;
pub mod palette;
pub mod position;
mod stack_model;
mod tooltip;

pub use box_stack_series::{BoxStackSeries, StackSeriesRender};
pub use chart_state::{Axes, ChartOptions, ChartState, Layout, SeriesOptions, SeriesTheme, Theme};
pub use connector::{CategoryPoints, make_connector_model};
pub use geometry::{AdjustedRect, BoxGeometry, BoxSeriesConfig, is_left_bottom_side};
pub use json_contract::{STACK_SERIES_RENDER_JSON_SCHEMA_V1, StackSeriesRenderJsonContractV1};
pub use palette::PaletteWindow;
pub use position::StackPositionResolver;
pub use stack_model::{SegmentModel, StackModelBuilder, StackSeriesModel};
pub use tooltip::{TooltipData, tooltip_data};
