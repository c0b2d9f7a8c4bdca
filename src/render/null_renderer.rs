use crate::error::ChartResult;
use crate::render::{Renderer, SeriesModels};

/// No-op renderer for tests and headless use.
///
/// It still validates models so tests catch invalid geometry without a real
/// painting backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_connector_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, models: &SeriesModels) -> ChartResult<()> {
        models.validate()?;
        self.last_rect_count = models.series.len();
        self.last_connector_count = models.connector.len();
        Ok(())
    }
}
