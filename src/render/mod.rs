mod baseline;
mod label;
mod null_renderer;
mod primitives;

pub use baseline::DrawBaseline;
pub use label::{BoxStackSeriesLabel, LabelDirection, LabelOptions};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ClipRectModel, LabelModel, LabelStyle, LineModel, RectModel, SeriesModels,
};

use crate::error::ChartResult;

/// Contract implemented by any painting backend.
///
/// Backends receive fully computed geometric models, so painting code stays
/// isolated from stack layout math.
pub trait Renderer {
    fn render(&mut self, models: &SeriesModels) -> ChartResult<()>;
}
