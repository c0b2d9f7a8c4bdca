use tracing::trace;

use crate::api::geometry::{BoxGeometry, is_left_bottom_side};
use crate::api::palette::PaletteWindow;
use crate::api::position::StackPositionResolver;
use crate::core::aggregate::calibrate_drawing_value;
use crate::core::{RenderOptions, StackData, StackDataValues, StackGroupData, StackSeriesData};
use crate::error::{ChartError, ChartResult};
use crate::render::{LineModel, RectModel};

/// One (category, series) slot of a stack.
///
/// `rect` is `None` when the segment lies outside the visible range.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentModel {
    pub stack_group_index: usize,
    pub data_index: usize,
    pub series_index: usize,
    pub rect: Option<RectModel>,
}

/// Segments and connector lines for a flat stack or all groups of a grouped stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackSeriesModel {
    pub segments: Vec<SegmentModel>,
    pub connector: Vec<LineModel>,
}

impl StackSeriesModel {
    /// Drawable rectangles in layout order; omitted segments are skipped.
    #[must_use]
    pub fn rects(&self) -> Vec<RectModel> {
        self.segments
            .iter()
            .filter_map(|segment| segment.rect.clone())
            .collect()
    }

    #[must_use]
    pub fn omitted_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| segment.rect.is_none())
            .count()
    }
}

/// Lays out stacked segments for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct StackModelBuilder<'a> {
    pub(super) geometry: &'a BoxGeometry,
    pub(super) options: &'a RenderOptions,
    pub(super) resolver: StackPositionResolver<'a>,
}

impl<'a> StackModelBuilder<'a> {
    #[must_use]
    pub fn new(geometry: &'a BoxGeometry, options: &'a RenderOptions) -> Self {
        Self {
            geometry,
            options,
            resolver: StackPositionResolver::new(geometry, options),
        }
    }

    /// Dispatches on flat vs grouped stack data.
    pub fn render_stack_series_model(
        &self,
        series_data: &StackSeriesData,
        colors: &[String],
    ) -> ChartResult<StackSeriesModel> {
        match &series_data.stack_data {
            StackData::Flat(stack_data) => {
                let colors = PaletteWindow::new(0, series_data.data.len()).slice(colors)?;
                self.make_stack_series_model(stack_data, colors, 1, 0)
            }
            StackData::Grouped(groups) => {
                self.make_stack_group_series_model(series_data, groups, colors)
            }
        }
    }

    /// Lays out one stack; `colors[i]` paints series `i`.
    ///
    /// Fails with [`ChartError::InvalidData`] when a category holds more
    /// values than there are colors.
    pub fn make_stack_series_model(
        &self,
        stack_data: &StackDataValues,
        colors: &[String],
        stack_group_count: usize,
        stack_group_index: usize,
    ) -> ChartResult<StackSeriesModel> {
        let geometry = self.geometry;
        let column_width = geometry.stack_column_width(self.options, stack_group_count);
        let is_lb_side = self.options.diverging && is_left_bottom_side(stack_group_index);
        let mut segments = Vec::with_capacity(stack_data.iter().map(|d| d.values.len()).sum());

        for (data_index, entry) in stack_data.iter().enumerate() {
            let series_position = geometry.series_position(
                self.options,
                column_width,
                data_index,
                stack_group_index,
            );
            let ratio = geometry.stack_value_ratio(entry.total, self.options);

            for series_index in 0..entry.values.len() {
                let drawing_value =
                    calibrate_drawing_value(&entry.values, series_index, self.options);
                let bar_length = geometry.bar_length(drawing_value, ratio);
                let start = self.resolver.start_position(
                    &entry.values,
                    series_index,
                    ratio,
                    is_lb_side,
                );

                let rect = match start {
                    Some(start) => {
                        let color = colors.get(series_index).ok_or_else(|| {
                            ChartError::InvalidData(format!(
                                "no color for series {series_index} of category {data_index}"
                            ))
                        })?;
                        let adjusted = geometry.adjusted_rect(
                            series_position,
                            start,
                            bar_length,
                            column_width,
                        );
                        Some(RectModel::new(
                            color.clone(),
                            adjusted.x,
                            adjusted.y,
                            adjusted.width,
                            adjusted.height,
                        ))
                    }
                    None => {
                        trace!(
                            data_index,
                            series_index,
                            stack_group_index,
                            "segment outside axis range, omitted"
                        );
                        None
                    }
                };

                segments.push(SegmentModel {
                    stack_group_index,
                    data_index,
                    series_index,
                    rect,
                });
            }
        }

        Ok(StackSeriesModel {
            segments,
            connector: self.make_connector_series_model(
                stack_data,
                stack_group_count,
                stack_group_index,
            ),
        })
    }

    /// Lays out every group side by side (or mirrored when diverging).
    ///
    /// Group `g` reads the palette window following group `g - 1`'s window.
    pub fn make_stack_group_series_model(
        &self,
        series_data: &StackSeriesData,
        groups: &StackGroupData,
        colors: &[String],
    ) -> ChartResult<StackSeriesModel> {
        let group_count = groups.len();
        let mut model = StackSeriesModel::default();

        for (group_index, (group_id, window)) in PaletteWindow::for_groups(series_data, groups)
            .into_iter()
            .enumerate()
        {
            let group_colors = window.slice(colors)?;
            let group_model = self.make_stack_series_model(
                &groups[group_id],
                group_colors,
                group_count,
                group_index,
            )?;

            model.segments.extend(group_model.segments);
            if self.options.stack.connector.is_some() {
                model.connector.extend(group_model.connector);
            }
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::StackModelBuilder;
    use crate::api::geometry::{BoxGeometry, BoxSeriesConfig};
    use crate::core::{
        BoxSeriesData, PlotRect, RenderOptions, Stack, StackData, StackDataValue, StackSeriesData,
    };

    fn colors(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("#c{i}")).collect()
    }

    #[test]
    fn flat_stack_emits_one_rect_per_segment() {
        let options = RenderOptions::new(Stack::normal(), 100.0, 0.0, 10_000.0);
        let geometry = BoxGeometry::new(
            BoxSeriesConfig::bar(),
            PlotRect::new(0.0, 0.0, 500.0, 200.0),
            &options,
        )
        .expect("geometry");
        let builder = StackModelBuilder::new(&geometry, &options);
        let stack_data = vec![StackDataValue::new(vec![3000.0, 4000.0])];

        let model = builder
            .make_stack_series_model(&stack_data, &colors(2), 1, 0)
            .expect("model");
        let rects = model.rects();
        assert_eq!(rects.len(), 2);
        assert_eq!((rects[0].x, rects[0].width), (1.0, 150.0));
        assert_eq!((rects[1].x, rects[1].width), (151.0, 200.0));
        assert_eq!(rects[0].y, 9.0);
        assert_eq!(rects[0].height, 90.0);
        assert_eq!(rects[1].color, "#c1");
        assert!(model.connector.is_empty());
    }

    #[test]
    fn omitted_segments_keep_their_slot() {
        let options = RenderOptions::new(Stack::normal(), 100.0, 0.0, 5000.0);
        let geometry = BoxGeometry::new(
            BoxSeriesConfig::column(),
            PlotRect::new(0.0, 0.0, 300.0, 500.0),
            &options,
        )
        .expect("geometry");
        let builder = StackModelBuilder::new(&geometry, &options);
        let stack_data = vec![StackDataValue::new(vec![6000.0, 1000.0])];

        let model = builder
            .make_stack_series_model(&stack_data, &colors(2), 1, 0)
            .expect("model");
        assert_eq!(model.segments.len(), 2);
        assert_eq!(model.omitted_count(), 1);
        assert!(model.segments[1].rect.is_none());
        assert_eq!(model.rects().len(), 1);
    }

    #[test]
    fn grouped_stack_places_groups_side_by_side() {
        let data = StackSeriesData::new(
            vec![
                BoxSeriesData::new("A", vec![10.0]).with_stack_group("g0"),
                BoxSeriesData::new("B", vec![20.0]).with_stack_group("g0"),
                BoxSeriesData::new("C", vec![30.0]).with_stack_group("g1"),
                BoxSeriesData::new("D", vec![40.0]).with_stack_group("g1"),
            ],
            Stack::normal(),
            false,
        )
        .expect("stack");
        let StackData::Grouped(groups) = &data.stack_data else {
            panic!("expected grouped stack");
        };
        let options = RenderOptions::new(Stack::normal(), 100.0, 0.0, 100.0);
        let geometry = BoxGeometry::new(
            BoxSeriesConfig::column(),
            PlotRect::new(0.0, 0.0, 100.0, 100.0),
            &options,
        )
        .expect("geometry");
        let builder = StackModelBuilder::new(&geometry, &options);

        let model = builder
            .make_stack_group_series_model(&data, groups, &colors(4))
            .expect("model");
        let rects = model.rects();
        let colors: Vec<_> = rects.iter().map(|r| r.color.as_str()).collect();
        assert_eq!(colors, vec!["#c0", "#c1", "#c2", "#c3"]);
        assert_eq!(rects[0].x, 9.0);
        assert_eq!(rects[2].x, 54.0);
        assert_eq!(rects[0].width, 45.0);
    }

    #[test]
    fn short_palette_fails_fast() {
        let data = StackSeriesData::new(
            vec![
                BoxSeriesData::new("A", vec![1.0]),
                BoxSeriesData::new("B", vec![1.0]),
            ],
            Stack::normal(),
            false,
        )
        .expect("stack");
        let options = RenderOptions::new(Stack::normal(), 100.0, 0.0, 10.0);
        let geometry = BoxGeometry::new(
            BoxSeriesConfig::bar(),
            PlotRect::new(0.0, 0.0, 100.0, 100.0),
            &options,
        )
        .expect("geometry");
        let builder = StackModelBuilder::new(&geometry, &options);

        let err = builder
            .render_stack_series_model(&data, &colors(1))
            .expect_err("palette too short");
        assert!(format!("{err}").contains("color palette too short"));
    }

    #[test]
    fn missing_segment_color_is_an_error() {
        let options = RenderOptions::new(Stack::normal(), 100.0, 0.0, 10_000.0);
        let geometry = BoxGeometry::new(
            BoxSeriesConfig::bar(),
            PlotRect::new(0.0, 0.0, 500.0, 200.0),
            &options,
        )
        .expect("geometry");
        let builder = StackModelBuilder::new(&geometry, &options);
        let stack_data = vec![StackDataValue::new(vec![3000.0, 4000.0])];

        let err = builder
            .make_stack_series_model(&stack_data, &colors(1), 1, 0)
            .expect_err("second series has no color");
        assert!(format!("{err}").contains("no color for series 1 of category 0"));
    }
}
