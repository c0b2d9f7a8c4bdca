use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Which screen axis carries series values.
///
/// Bars grow along x (value axis = x, label axis = y); columns grow along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Bar,
    #[default]
    Column,
}

impl Orientation {
    #[must_use]
    pub fn is_bar(self) -> bool {
        matches!(self, Self::Bar)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot area in pixels, as laid out by the host chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidPlot {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Already-computed axis snapshot consumed from the axis collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub tick_count: usize,
    #[serde(default)]
    pub tick_distance: f64,
}

impl AxisData {
    #[must_use]
    pub fn new(labels: Vec<String>, tick_count: usize, tick_distance: f64) -> Self {
        Self {
            labels,
            tick_count,
            tick_distance,
        }
    }

    /// Builds a value axis snapshot from numeric tick values.
    #[must_use]
    pub fn from_values(values: &[f64], tick_distance: f64) -> Self {
        Self::new(
            values.iter().map(f64::to_string).collect(),
            values.len(),
            tick_distance,
        )
    }

    /// Parses labels as numbers; labels that are not numeric are skipped.
    #[must_use]
    pub fn label_values(&self) -> Vec<f64> {
        self.labels
            .iter()
            .filter_map(|label| label.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .collect()
    }

    #[must_use]
    pub fn has_positive_only(&self) -> bool {
        self.label_values().iter().all(|value| *value >= 0.0)
    }

    #[must_use]
    pub fn has_negative_only(&self) -> bool {
        self.label_values().iter().all(|value| *value <= 0.0)
    }
}

/// Axis value limits derived from tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimit {
    pub min: f64,
    pub max: f64,
}

/// Returns the `min`/`max` covered by numeric axis labels.
///
/// Diverging layouts measure each side from the centre, so the limit becomes
/// `[0, max(|label|)]`.
pub fn limit_on_axis(labels: &[f64], diverging: bool) -> ChartResult<AxisLimit> {
    if labels.is_empty() {
        return Err(ChartError::InvalidData(
            "value axis must carry at least one numeric label".to_owned(),
        ));
    }

    let min = labels.iter().copied().fold(f64::INFINITY, f64::min);
    let max = labels.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if diverging {
        return Ok(AxisLimit {
            min: 0.0,
            max: min.abs().max(max.abs()),
        });
    }

    Ok(AxisLimit { min, max })
}
