use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

fn validate_finite(fields: &[(&str, f64)], owner: &str) -> ChartResult<()> {
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("{owner} `{name}` must be finite")));
        }
    }
    Ok(())
}

/// Filled rectangle for one stack segment, in plot-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "rect")]
pub struct RectModel {
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectModel {
    #[must_use]
    pub fn new(color: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            color: color.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive point containment.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.color.is_empty() {
            return Err(ChartError::InvalidData("rect color must not be empty".to_owned()));
        }
        validate_finite(
            &[
                ("x", self.x),
                ("y", self.y),
                ("width", self.width),
                ("height", self.height),
            ],
            "rect",
        )?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData("rect size must be >= 0".to_owned()));
        }
        Ok(())
    }
}

/// Connector segment joining one series' stack boundary across two categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "line", rename_all = "camelCase")]
pub struct LineModel {
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub dashed_pattern: Vec<f64>,
    pub stroke_style: String,
    pub line_width: f64,
}

impl LineModel {
    pub fn validate(&self) -> ChartResult<()> {
        validate_finite(
            &[("x", self.x), ("y", self.y), ("x2", self.x2), ("y2", self.y2)],
            "line",
        )?;
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData("line width must be finite and > 0".to_owned()));
        }
        Ok(())
    }
}

/// Clip region covering the series area, relative to the series rect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "clipRectArea")]
pub struct ClipRectModel {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub font: String,
    pub fill_style: String,
    pub text_align: String,
    pub text_baseline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "label")]
pub struct LabelModel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: LabelStyle,
}

/// Everything the painter needs for one box stack series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesModels {
    pub clip_rect: Vec<ClipRectModel>,
    pub series: Vec<RectModel>,
    pub connector: Vec<LineModel>,
}

impl SeriesModels {
    pub fn validate(&self) -> ChartResult<()> {
        for clip in &self.clip_rect {
            validate_finite(
                &[
                    ("x", clip.x),
                    ("y", clip.y),
                    ("width", clip.width),
                    ("height", clip.height),
                ],
                "clip rect",
            )?;
        }
        for rect in &self.series {
            rect.validate()?;
        }
        for line in &self.connector {
            line.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.connector.is_empty()
    }
}
