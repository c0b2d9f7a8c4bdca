use serde::{Deserialize, Serialize};

use crate::render::{LabelModel, LabelStyle, RectModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LabelDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Label options for stack segments.
///
/// `align` accepts `center`, `left`/`start`, `right`/`end` for horizontal
/// labels and `center`, `top`, `bottom` for vertical ones; anything else centres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelOptions {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_align")]
    pub align: String,
    #[serde(default)]
    pub direction: LabelDirection,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            font: default_font(),
            color: default_color(),
            align: default_align(),
            direction: LabelDirection::Horizontal,
        }
    }
}

fn default_font() -> String {
    "normal 11px Arial".to_owned()
}

fn default_color() -> String {
    "#333333".to_owned()
}

fn default_align() -> String {
    "center".to_owned()
}

/// Positions a text label on a stack segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStackSeriesLabel {
    pub model: LabelModel,
}

impl BoxStackSeriesLabel {
    #[must_use]
    pub fn new(rect: &RectModel, text: impl Into<String>, options: &LabelOptions) -> Self {
        let mut x = rect.x + rect.width / 2.0;
        let mut y = rect.y + rect.height / 2.0;
        let mut text_align = "center";
        let mut text_baseline = "middle";
        let align = options.align.as_str();

        match options.direction {
            LabelDirection::Horizontal => match align {
                "left" | "start" => {
                    x = rect.x;
                    text_align = align;
                }
                "right" | "end" => {
                    x = rect.x + rect.width;
                    text_align = align;
                }
                _ => {}
            },
            LabelDirection::Vertical => match align {
                "top" => {
                    y = rect.y;
                    text_baseline = "top";
                }
                "bottom" => {
                    y = rect.y + rect.height;
                    text_baseline = "bottom";
                }
                _ => {}
            },
        }

        Self {
            model: LabelModel {
                text: text.into(),
                x,
                y,
                style: LabelStyle {
                    font: options.font.clone(),
                    fill_style: options.color.clone(),
                    text_align: text_align.to_owned(),
                    text_baseline: text_baseline.to_owned(),
                },
            },
        }
    }
}
