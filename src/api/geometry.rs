use serde::{Deserialize, Serialize};

use crate::core::ratio::{percent_ratio, value_ratio};
use crate::core::{Orientation, PercentScaleType, PlotRect, RenderOptions, StackTotal};
use crate::error::ChartResult;
use crate::render::ClipRectModel;

/// Per-series drawing configuration.
///
/// Serializable so hosts can persist it next to their chart options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSeriesConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_hover_thickness")]
    pub hover_thickness: f64,
    #[serde(default = "default_axis_thickness")]
    pub axis_thickness: f64,
}

impl Default for BoxSeriesConfig {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl BoxSeriesConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            padding: default_padding(),
            hover_thickness: default_hover_thickness(),
            axis_thickness: default_axis_thickness(),
        }
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(Orientation::Bar)
    }

    #[must_use]
    pub fn column() -> Self {
        Self::new(Orientation::Column)
    }

    /// Sets the gap kept on both sides of each category band.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the stub size used for clipped segments and hover outlines.
    #[must_use]
    pub fn with_hover_thickness(mut self, hover_thickness: f64) -> Self {
        self.hover_thickness = hover_thickness;
        self
    }

    #[must_use]
    pub fn with_axis_thickness(mut self, axis_thickness: f64) -> Self {
        self.axis_thickness = axis_thickness;
        self
    }
}

fn default_padding() -> f64 {
    5.0
}

fn default_hover_thickness() -> f64 {
    4.0
}

fn default_axis_thickness() -> f64 {
    1.0
}

/// Rectangle before a color is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Orientation-aware pixel helpers for one render pass.
///
/// Bars map value length to width and category position to y; columns swap
/// both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub orientation: Orientation,
    pub plot: PlotRect,
    pub padding: f64,
    pub hover_thickness: f64,
    pub axis_thickness: f64,
    pub base_position: f64,
}

impl BoxGeometry {
    /// Builds geometry with the base position at the value axis origin.
    pub fn new(
        config: BoxSeriesConfig,
        plot: PlotRect,
        options: &RenderOptions,
    ) -> ChartResult<Self> {
        plot.validate()?;
        let mut geometry = Self {
            orientation: config.orientation,
            plot,
            padding: config.padding,
            hover_thickness: config.hover_thickness,
            axis_thickness: config.axis_thickness,
            base_position: 0.0,
        };
        geometry.base_position = geometry.compute_base_position(options);
        Ok(geometry)
    }

    #[must_use]
    pub fn is_bar(&self) -> bool {
        self.orientation.is_bar()
    }

    /// Pixel span of the value axis.
    #[must_use]
    pub fn offset_size(&self) -> f64 {
        if self.is_bar() {
            self.plot.width
        } else {
            self.plot.height
        }
    }

    /// Pixel coordinate of value zero, clamped into the plot.
    ///
    /// Diverging layouts grow from the centre line. Otherwise a positive-only
    /// range sits on its min edge and a negative-only range on its max edge.
    #[must_use]
    pub fn compute_base_position(&self, options: &RenderOptions) -> f64 {
        let offset_size = self.offset_size();
        if options.diverging {
            return offset_size / 2.0;
        }

        let span = options.max - options.min;
        let from_min = if span > 0.0 {
            ((0.0 - options.min) / span * offset_size).clamp(0.0, offset_size)
        } else if options.max <= 0.0 {
            offset_size
        } else {
            0.0
        };

        if self.is_bar() {
            from_min
        } else {
            offset_size - from_min
        }
    }

    #[must_use]
    pub fn value_ratio(&self, min: f64, max: f64, diverging: bool) -> f64 {
        value_ratio(self.offset_size(), min, max, diverging)
    }

    #[must_use]
    pub fn percent_ratio(&self, total: StackTotal, scale_type: PercentScaleType) -> f64 {
        percent_ratio(self.offset_size(), total, scale_type)
    }

    /// Ratio for one category: per-category for percent stacks, axis-wide otherwise.
    #[must_use]
    pub fn stack_value_ratio(&self, total: StackTotal, options: &RenderOptions) -> f64 {
        if options.is_percent_stack() {
            self.percent_ratio(total, options.scale_type)
        } else {
            self.value_ratio(options.min, options.max, options.diverging)
        }
    }

    #[must_use]
    pub fn bar_length(&self, value: f64, ratio: f64) -> f64 {
        value.abs() * ratio
    }

    #[must_use]
    pub fn adjusted_rect(
        &self,
        series_position: f64,
        start_position: f64,
        bar_length: f64,
        column_width: f64,
    ) -> AdjustedRect {
        if self.is_bar() {
            AdjustedRect {
                x: start_position,
                y: series_position,
                width: bar_length,
                height: column_width,
            }
        } else {
            AdjustedRect {
                x: series_position,
                y: start_position,
                width: column_width,
                height: bar_length,
            }
        }
    }

    /// Band thickness of one stack; diverging groups share a band.
    #[must_use]
    pub fn stack_column_width(&self, options: &RenderOptions, stack_group_count: usize) -> f64 {
        let divisor = if options.diverging {
            1.0
        } else {
            stack_group_count.max(1) as f64
        };
        (options.tick_distance - self.padding * 2.0) / divisor
    }

    /// Category-axis coordinate of a stack's leading edge.
    #[must_use]
    pub fn series_position(
        &self,
        options: &RenderOptions,
        column_width: f64,
        data_index: usize,
        stack_group_index: usize,
    ) -> f64 {
        let group_index = if options.diverging {
            0
        } else {
            stack_group_index
        };
        data_index as f64 * options.tick_distance
            + self.padding
            + column_width * group_index as f64
            + self.hover_thickness
    }

    /// Clip area covering the plot plus the hover margin on each side.
    #[must_use]
    pub fn clip_rect(&self) -> ClipRectModel {
        ClipRectModel {
            x: 0.0,
            y: 0.0,
            width: self.plot.width + self.hover_thickness * 2.0,
            height: self.plot.height + self.hover_thickness * 2.0,
        }
    }
}

/// Diverging layouts alternate sides: odd stack groups sit on the left/bottom.
#[must_use]
pub fn is_left_bottom_side(stack_group_index: usize) -> bool {
    stack_group_index % 2 == 1
}
