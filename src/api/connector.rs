use smallvec::SmallVec;

use crate::api::geometry::is_left_bottom_side;
use crate::core::{ConnectorStyle, Point, StackDataValues};
use crate::render::LineModel;

use super::StackModelBuilder;

/// Boundary points of one category, one slot per series.
pub type CategoryPoints = SmallVec<[Option<Point>; 8]>;

impl StackModelBuilder<'_> {
    /// Connector lines for one stack; empty unless the stack enables connectors.
    #[must_use]
    pub fn make_connector_series_model(
        &self,
        stack_data: &StackDataValues,
        stack_group_count: usize,
        stack_group_index: usize,
    ) -> Vec<LineModel> {
        let Some(connector) = self.options.stack.connector.as_ref() else {
            return Vec::new();
        };

        let geometry = self.geometry;
        let is_bar = geometry.is_bar();
        let column_width = geometry.stack_column_width(self.options, stack_group_count);
        let is_lb_side = self.options.diverging && is_left_bottom_side(stack_group_index);

        let points: Vec<CategoryPoints> = stack_data
            .iter()
            .enumerate()
            .map(|(data_index, entry)| {
                let series_position = geometry.series_position(
                    self.options,
                    column_width,
                    data_index,
                    stack_group_index,
                );
                let ratio = geometry.stack_value_ratio(entry.total, self.options);

                entry
                    .values
                    .iter()
                    .enumerate()
                    .map(|(series_index, value)| {
                        let bar_length = value * ratio;
                        let start = self.resolver.start_position(
                            &entry.values,
                            series_index,
                            ratio,
                            is_lb_side,
                        )?;
                        let rect = geometry.adjusted_rect(
                            series_position,
                            start,
                            bar_length,
                            column_width,
                        );

                        // Trailing edge along the value axis.
                        let x = if !is_lb_side && is_bar {
                            rect.x + bar_length
                        } else {
                            rect.x
                        };
                        let y = if is_lb_side && !is_bar {
                            rect.y + bar_length
                        } else {
                            rect.y
                        };
                        Some(Point::new(x, y))
                    })
                    .collect()
            })
            .collect();

        make_connector_model(&points, connector, column_width, is_bar)
    }
}

/// Joins each series' boundary points across adjacent categories.
///
/// A pair is skipped when either end belongs to an omitted segment.
#[must_use]
pub fn make_connector_model(
    points: &[CategoryPoints],
    connector: &ConnectorStyle,
    column_width: f64,
    is_bar: bool,
) -> Vec<LineModel> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let dashed_pattern = connector.dashed_pattern();
    let series_count = first.len();
    let mut lines = Vec::new();

    for series_index in 0..series_count {
        for pair in points.windows(2) {
            let from = pair[0].get(series_index).copied().flatten();
            let to = pair[1].get(series_index).copied().flatten();
            let (Some(from), Some(to)) = (from, to) else {
                continue;
            };

            lines.push(LineModel {
                x: if is_bar { from.x } else { from.x + column_width },
                y: if is_bar { from.y + column_width } else { from.y },
                x2: to.x,
                y2: to.y,
                dashed_pattern: dashed_pattern.clone(),
                stroke_style: connector.color.clone(),
                line_width: connector.width,
            });
        }
    }

    lines
}
