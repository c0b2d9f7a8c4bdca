use tracing::debug;

use crate::render::SeriesModels;

/// Transition baseline held by the animation side of a host.
///
/// The first set of models observed after the series is mounted becomes the
/// immutable "from" state; later renders never overwrite it until `reset`.
#[derive(Debug, Clone, Default)]
pub struct DrawBaseline {
    captured: Option<SeriesModels>,
}

impl DrawBaseline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `models` if nothing was captured yet. Returns `true` on capture.
    pub fn observe(&mut self, models: &SeriesModels) -> bool {
        if self.captured.is_some() {
            return false;
        }
        debug!(
            rect_count = models.series.len(),
            connector_count = models.connector.len(),
            "captured draw baseline"
        );
        self.captured = Some(models.clone());
        true
    }

    #[must_use]
    pub fn get(&self) -> Option<&SeriesModels> {
        self.captured.as_ref()
    }

    /// Forgets the baseline, e.g. when the series is unmounted.
    pub fn reset(&mut self) {
        self.captured = None;
    }
}
