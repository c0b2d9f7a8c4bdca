use serde::{Deserialize, Serialize};

use crate::api::TooltipData;
use crate::render::RectModel;

/// Hover target for one drawn segment, carrying its tooltip payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectResponderModel {
    pub rect: RectModel,
    /// Outline thickness used when the segment is highlighted.
    pub thickness: f64,
    pub shadow_blur: f64,
    pub data: TooltipData,
}

impl RectResponderModel {
    /// Highlight model for `rect`: outline of `hover_thickness`, blur twice that.
    #[must_use]
    pub fn highlight(rect: &RectModel, hover_thickness: f64, data: TooltipData) -> Self {
        Self {
            rect: rect.clone(),
            thickness: hover_thickness,
            shadow_blur: hover_thickness * 2.0,
            data,
        }
    }
}

/// Responders whose rectangle contains `(x, y)`, in layout order.
#[must_use]
pub fn responders_at(
    responders: &[RectResponderModel],
    x: f64,
    y: f64,
) -> Vec<&RectResponderModel> {
    responders
        .iter()
        .filter(|responder| responder.rect.contains(x, y))
        .collect()
}
