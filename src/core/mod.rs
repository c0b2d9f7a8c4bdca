pub mod aggregate;
pub mod options;
pub mod ratio;
pub mod stack;
pub mod stack_data;
pub mod types;

pub use aggregate::{calibrate_drawing_value, sum_of_prev_values};
pub use options::{RenderMode, RenderOptions};
pub use ratio::{percent_ratio, value_ratio};
pub use stack::{
    ConnectorLineType, ConnectorStyle, DEFAULT_CONNECTOR_COLOR, DEFAULT_CONNECTOR_WIDTH,
    PercentScaleType, Stack, StackData, StackDataValue, StackDataValues, StackGroupData,
    StackTotal, StackType, StackValues,
};
pub use stack_data::{BoxSeriesData, StackSeriesData};
pub use types::{AxisData, AxisLimit, Orientation, PlotRect, Point, limit_on_axis};
