use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::chart_state::ChartState;
use crate::api::geometry::{BoxGeometry, BoxSeriesConfig};
use crate::api::tooltip::tooltip_data;
use crate::api::StackModelBuilder;
use crate::core::{PercentScaleType, RenderOptions, StackSeriesData, limit_on_axis};
use crate::error::{ChartError, ChartResult};
use crate::interaction::RectResponderModel;
use crate::render::{
    BoxStackSeriesLabel, DrawBaseline, LabelModel, LabelOptions, Renderer, SeriesModels,
};

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSeriesRender {
    pub models: SeriesModels,
    /// Hover targets; responder `i` is the `i`-th drawn segment.
    pub responders: Vec<RectResponderModel>,
}

impl StackSeriesRender {
    /// Value labels for every drawn segment.
    #[must_use]
    pub fn labels(&self, options: &LabelOptions) -> Vec<LabelModel> {
        self.responders
            .iter()
            .map(|responder| {
                let text = responder.data.value.to_string();
                BoxStackSeriesLabel::new(&responder.rect, text, options).model
            })
            .collect()
    }
}

/// Stacked bar/column series component.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStackSeries {
    name: String,
    config: BoxSeriesConfig,
}

impl BoxStackSeries {
    /// `name` selects the `stack_series` entry this component renders.
    #[must_use]
    pub fn new(name: impl Into<String>, config: BoxSeriesConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn config(&self) -> BoxSeriesConfig {
        self.config
    }

    /// Lays out every segment, connector and responder for `state`.
    ///
    /// Returns `Ok(None)` when the state has no stack data for this series.
    pub fn render(&self, state: &ChartState) -> ChartResult<Option<StackSeriesRender>> {
        let Some(series_data) = state.stack_series.get(&self.name) else {
            warn!(series = %self.name, "no stack data for series, skipping render");
            return Ok(None);
        };

        let options = self.render_options(state, series_data)?;
        let geometry = BoxGeometry::new(self.config, state.layout.plot, &options)?;
        let builder = StackModelBuilder::new(&geometry, &options);
        let colors = &state.theme.series.colors;

        let model = builder.render_stack_series_model(series_data, colors)?;
        let tooltips = tooltip_data(series_data, colors, &state.categories)?;
        if tooltips.len() != model.segments.len() {
            return Err(ChartError::InvalidData(format!(
                "tooltip records ({}) do not match stack segments ({})",
                tooltips.len(),
                model.segments.len()
            )));
        }

        let responders = model
            .segments
            .iter()
            .zip(tooltips)
            .filter_map(|(segment, data)| {
                segment.rect.as_ref().map(|rect| {
                    RectResponderModel::highlight(rect, geometry.hover_thickness, data)
                })
            })
            .collect();

        debug!(
            series = %self.name,
            mode = ?builder.resolver.mode(),
            categories = series_data.stack_data.category_count(),
            segments = model.segments.len(),
            omitted = model.omitted_count(),
            connectors = model.connector.len(),
            "rendered box stack series"
        );

        Ok(Some(StackSeriesRender {
            models: SeriesModels {
                clip_rect: vec![geometry.clip_rect()],
                series: model.rects(),
                connector: model.connector,
            },
            responders,
        }))
    }

    /// Renders and hands the models to `renderer`.
    ///
    /// The first drawn models become the transition baseline.
    pub fn draw<R: Renderer>(
        &self,
        state: &ChartState,
        renderer: &mut R,
        baseline: &mut DrawBaseline,
    ) -> ChartResult<Option<StackSeriesRender>> {
        let Some(output) = self.render(state)? else {
            return Ok(None);
        };
        baseline.observe(&output.models);
        renderer.render(&output.models)?;
        Ok(Some(output))
    }

    /// Snapshot of axis/stack settings for one pass.
    ///
    /// The percent scale type follows the state's current diverging flag,
    /// not the one the series data was built with.
    pub fn render_options(
        &self,
        state: &ChartState,
        series_data: &StackSeriesData,
    ) -> ChartResult<RenderOptions> {
        let (value_axis, label_axis) = state.axes.value_and_label(self.config.orientation);
        if !label_axis.tick_distance.is_finite() || label_axis.tick_distance < 0.0 {
            return Err(ChartError::InvalidData(
                "label axis tick distance must be finite and >= 0".to_owned(),
            ));
        }

        let diverging = state.options.series.diverging;
        let limit = limit_on_axis(&value_axis.label_values(), diverging)?;

        Ok(RenderOptions {
            stack: series_data.stack.clone(),
            scale_type: PercentScaleType::resolve(&series_data.stack_data, diverging),
            tick_distance: label_axis.tick_distance,
            min: limit.min,
            max: limit.max,
            diverging,
            has_positive_only: value_axis.has_positive_only(),
            has_negative_only: value_axis.has_negative_only(),
        })
    }
}
