use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisData, Orientation, PlotRect, StackSeriesData};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub plot: PlotRect,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesTheme {
    #[serde(default)]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub series: SeriesTheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axes {
    pub x_axis: AxisData,
    pub y_axis: AxisData,
}

impl Axes {
    /// Returns `(value_axis, label_axis)`: bars measure along x, columns along y.
    #[must_use]
    pub fn value_and_label(&self, orientation: Orientation) -> (&AxisData, &AxisData) {
        if orientation.is_bar() {
            (&self.x_axis, &self.y_axis)
        } else {
            (&self.y_axis, &self.x_axis)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesOptions {
    #[serde(default)]
    pub diverging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub series: SeriesOptions,
}

/// Read-only snapshot of the chart store consumed by one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartState {
    pub layout: Layout,
    #[serde(default)]
    pub theme: Theme,
    pub axes: Axes,
    #[serde(default)]
    pub stack_series: IndexMap<String, StackSeriesData>,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl ChartState {
    #[must_use]
    pub fn new(plot: PlotRect, axes: Axes) -> Self {
        Self {
            layout: Layout { plot },
            theme: Theme::default(),
            axes,
            stack_series: IndexMap::new(),
            options: ChartOptions::default(),
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.theme.series.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_stack_series(mut self, name: impl Into<String>, data: StackSeriesData) -> Self {
        self.stack_series.insert(name.into(), data);
        self
    }

    #[must_use]
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_diverging(mut self, diverging: bool) -> Self {
        self.options.series.diverging = diverging;
        self
    }
}
