//! Start offsets of stack segments along the value axis.
//!
//! Every resolver returns `None` when the segment lies entirely outside the
//! visible range; callers must not emit geometry for it.

use crate::api::geometry::BoxGeometry;
use crate::core::aggregate::sum_of_prev_values;
use crate::core::{RenderMode, RenderOptions};

/// Resolves segment start positions for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct StackPositionResolver<'a> {
    geometry: &'a BoxGeometry,
    options: &'a RenderOptions,
    mode: RenderMode,
}

impl<'a> StackPositionResolver<'a> {
    #[must_use]
    pub fn new(geometry: &'a BoxGeometry, options: &'a RenderOptions) -> Self {
        Self {
            geometry,
            options,
            mode: options.render_mode(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Pixel start of `values[current_index]` along the value axis.
    #[must_use]
    pub fn start_position(
        &self,
        values: &[f64],
        current_index: usize,
        ratio: f64,
        is_left_bottom_side: bool,
    ) -> Option<f64> {
        if current_index >= values.len() {
            return None;
        }

        match self.mode {
            RenderMode::Diverging if is_left_bottom_side => {
                Some(self.left_bottom_side(values, current_index, ratio))
            }
            RenderMode::Diverging => Some(self.diverging(values, current_index, ratio)),
            RenderMode::Percent => self.percent(values, current_index, ratio),
            RenderMode::NegativeOnly if self.geometry.is_bar() => {
                self.negative_only_on_bar(values, current_index, ratio)
            }
            RenderMode::NegativeOnly => self.negative_only_on_column(values, current_index, ratio),
            RenderMode::PositiveOnly if self.geometry.is_bar() => {
                self.positive_only_on_bar(values, current_index, ratio)
            }
            RenderMode::PositiveOnly => self.positive_only_on_column(values, current_index, ratio),
            RenderMode::Mixed => self.mixed(values, current_index, ratio),
        }
    }

    /// Bars accumulate through negative segments, columns through positive ones.
    fn growing_prev_total(&self, values: &[f64], current_index: usize) -> f64 {
        let value = values[current_index];
        let include_current = if self.geometry.is_bar() {
            value < 0.0
        } else {
            value > 0.0
        };
        sum_of_prev_values(values, current_index, include_current)
    }

    fn toward_value(&self, total: f64, ratio: f64) -> f64 {
        let base = self.geometry.base_position;
        if self.geometry.is_bar() {
            total * ratio + base + self.geometry.axis_thickness
        } else {
            base - total * ratio
        }
    }

    fn left_bottom_side(&self, values: &[f64], current_index: usize, ratio: f64) -> f64 {
        let base = self.geometry.base_position;
        let total = sum_of_prev_values(values, current_index, self.geometry.is_bar());

        if self.geometry.is_bar() {
            base - total * ratio + self.geometry.axis_thickness
        } else {
            base + total * ratio
        }
    }

    fn diverging(&self, values: &[f64], current_index: usize, ratio: f64) -> f64 {
        let total = self.growing_prev_total(values, current_index);
        if total > self.options.max {
            return self.geometry.hover_thickness;
        }
        self.toward_value(total, ratio)
    }

    fn percent(&self, values: &[f64], current_index: usize, ratio: f64) -> Option<f64> {
        if current_index == 0 && self.options.min > values[0] {
            return None;
        }
        let total = self.growing_prev_total(values, current_index);
        Some(self.toward_value(total, ratio))
    }

    fn negative_only_on_bar(
        &self,
        values: &[f64],
        current_index: usize,
        ratio: f64,
    ) -> Option<f64> {
        let RenderOptions { min, max, .. } = *self.options;
        let total_of_prev = sum_of_prev_values(values, current_index, false);
        if min > total_of_prev {
            return None;
        }

        let mut total_of_values = sum_of_prev_values(values, current_index, true).max(min);
        if max < 0.0 {
            total_of_values -= max;
        }

        Some(
            self.geometry.base_position - total_of_values.abs() * ratio
                + self.geometry.axis_thickness,
        )
    }

    fn negative_only_on_column(
        &self,
        values: &[f64],
        current_index: usize,
        ratio: f64,
    ) -> Option<f64> {
        let RenderOptions { min, max, .. } = *self.options;
        let total_of_values = sum_of_prev_values(values, current_index, true);
        let total_of_prev = sum_of_prev_values(values, current_index, false);
        let exceed = (current_index == 0 && total_of_values > max)
            || (current_index > 0 && total_of_prev < min);
        if exceed {
            return None;
        }

        // Offset is measured from `max`, the top edge, once past the first segment.
        let mut result = total_of_prev;
        if min < 0.0 && current_index > 0 {
            result = total_of_prev - max;
        }

        if max < total_of_prev {
            return Some(self.geometry.hover_thickness);
        }

        Some(self.geometry.base_position + result.abs() * ratio)
    }

    fn positive_only_on_bar(
        &self,
        values: &[f64],
        current_index: usize,
        ratio: f64,
    ) -> Option<f64> {
        let RenderOptions { min, max, .. } = *self.options;
        let total_of_values = sum_of_prev_values(values, current_index, true);
        let total_of_prev = sum_of_prev_values(values, current_index, false);
        if min > total_of_values || max < total_of_prev {
            return None;
        }

        let mut result = total_of_prev;
        if min > 0.0 && current_index > 0 {
            result = if total_of_prev < min {
                0.0
            } else {
                total_of_prev - min
            };
        }

        Some(result * ratio + self.geometry.base_position + self.geometry.axis_thickness)
    }

    fn positive_only_on_column(
        &self,
        values: &[f64],
        current_index: usize,
        ratio: f64,
    ) -> Option<f64> {
        let RenderOptions { min, max, .. } = *self.options;
        let total_of_values = sum_of_prev_values(values, current_index, true);
        let total_of_prev = sum_of_prev_values(values, current_index, false);
        if min > total_of_values || max < total_of_prev {
            return None;
        }

        let mut result = total_of_values;
        if min > 0.0 {
            result -= min;
        }

        if max < total_of_values {
            return Some(self.geometry.hover_thickness);
        }

        Some(self.geometry.base_position - result * ratio)
    }

    /// Negative segments sit at their raw value from the base; positive bars
    /// start at the base and positive columns at their inclusive total.
    fn mixed(&self, values: &[f64], current_index: usize, ratio: f64) -> Option<f64> {
        let RenderOptions { min, max, .. } = *self.options;
        let total_of_prev = sum_of_prev_values(values, current_index, false);
        let total_of_values = sum_of_prev_values(values, current_index, true);
        let value = values[current_index];
        let base = self.geometry.base_position;
        let is_bar = self.geometry.is_bar();
        let stub = self.geometry.hover_thickness + self.geometry.axis_thickness;

        if value < 0.0 {
            if total_of_prev < min {
                return None;
            }
            if total_of_values < min {
                return Some(if is_bar {
                    stub
                } else {
                    base - total_of_prev * ratio
                });
            }
            return Some(if is_bar { base + value * ratio } else { base });
        }

        if total_of_prev > max {
            return None;
        }
        if total_of_values > max {
            return Some(if is_bar {
                base + total_of_prev * ratio + self.geometry.axis_thickness
            } else {
                stub
            });
        }
        Some(if is_bar {
            base + self.geometry.axis_thickness
        } else {
            base - total_of_values * ratio
        })
    }
}

#[cfg(test)]
mod tests {
    use super::StackPositionResolver;
    use crate::api::geometry::{BoxGeometry, BoxSeriesConfig};
    use crate::core::{PercentScaleType, PlotRect, RenderMode, RenderOptions, Stack};

    const PLOT: PlotRect = PlotRect {
        x: 0.0,
        y: 0.0,
        width: 500.0,
        height: 500.0,
    };

    fn geometry(config: BoxSeriesConfig, options: &RenderOptions) -> BoxGeometry {
        BoxGeometry::new(config, PLOT, options).expect("geometry")
    }

    #[test]
    fn positive_only_bar_stacks_after_previous_segments() {
        let options = RenderOptions::new(Stack::normal(), 50.0, 0.0, 10_000.0);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [3000.0, 4000.0];

        assert_eq!(resolver.mode(), RenderMode::PositiveOnly);
        assert_eq!(resolver.start_position(&values, 0, 0.05, false), Some(1.0));
        assert_eq!(resolver.start_position(&values, 1, 0.05, false), Some(151.0));
    }

    #[test]
    fn positive_only_omits_segments_past_max() {
        let options = RenderOptions::new(Stack::normal(), 50.0, 0.0, 5000.0);
        let geometry = geometry(BoxSeriesConfig::column(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [6000.0, 1000.0];

        assert_eq!(resolver.start_position(&values, 0, 0.1, false), Some(4.0));
        assert_eq!(resolver.start_position(&values, 1, 0.1, false), None);
    }

    #[test]
    fn positive_only_column_grows_up_from_bottom() {
        let options = RenderOptions::new(Stack::normal(), 50.0, 0.0, 10_000.0);
        let geometry = geometry(BoxSeriesConfig::column(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [3000.0, 4000.0];

        assert_eq!(resolver.start_position(&values, 0, 0.05, false), Some(350.0));
        assert_eq!(resolver.start_position(&values, 1, 0.05, false), Some(150.0));
    }

    #[test]
    fn negative_only_bar_grows_left_from_right_edge() {
        let options = RenderOptions::new(Stack::normal(), 50.0, -10_000.0, 0.0);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [-2000.0, -3000.0];

        assert_eq!(resolver.mode(), RenderMode::NegativeOnly);
        assert_eq!(resolver.start_position(&values, 0, 0.05, false), Some(401.0));
        assert_eq!(resolver.start_position(&values, 1, 0.05, false), Some(251.0));
    }

    #[test]
    fn negative_only_column_measures_from_max_edge() {
        let options = RenderOptions::new(Stack::normal(), 50.0, -8000.0, -1000.0);
        let geometry = geometry(BoxSeriesConfig::column(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [-2000.0, -3000.0];
        let ratio = 500.0 / 7000.0;

        assert_eq!(geometry.base_position, 0.0);
        // Zero lies above `max`, so the first segment hugs the top edge.
        assert_eq!(resolver.start_position(&values, 0, ratio, false), Some(4.0));
        let second = resolver
            .start_position(&values, 1, ratio, false)
            .expect("second segment");
        assert!((second - 1000.0 * ratio).abs() <= 1e-9);
    }

    #[test]
    fn negative_only_bar_omits_segments_past_min() {
        let options = RenderOptions::new(Stack::normal(), 50.0, -4000.0, 0.0);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [-5000.0, -1000.0];

        assert_eq!(resolver.start_position(&values, 0, 0.125, false), Some(1.0));
        assert_eq!(resolver.start_position(&values, 1, 0.125, false), None);
    }

    #[test]
    fn percent_stack_places_segments_by_share() {
        let options = RenderOptions::new(Stack::percent(), 50.0, 0.0, 100.0)
            .with_scale_type(PercentScaleType::PercentStack);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [20.0, 30.0];
        let ratio = 500.0 / 50.0;

        assert_eq!(resolver.mode(), RenderMode::Percent);
        assert_eq!(resolver.start_position(&values, 0, ratio, false), Some(1.0));
        assert_eq!(resolver.start_position(&values, 1, ratio, false), Some(201.0));
    }

    #[test]
    fn percent_stack_omits_first_segment_below_min() {
        let options = RenderOptions::new(Stack::percent(), 50.0, 0.0, 100.0);
        let geometry = geometry(BoxSeriesConfig::column(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        assert_eq!(resolver.start_position(&[-10.0, 30.0], 0, 1.0, false), None);
    }

    #[test]
    fn diverging_sides_mirror_around_centre() {
        let options = RenderOptions::new(Stack::normal(), 50.0, 0.0, 100.0).with_diverging(true);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let values = [20.0, 30.0];
        let ratio = geometry.value_ratio(0.0, 100.0, true);

        assert_eq!(resolver.mode(), RenderMode::Diverging);
        assert_eq!(resolver.start_position(&values, 0, ratio, false), Some(251.0));
        assert_eq!(resolver.start_position(&values, 1, ratio, false), Some(301.0));
        assert_eq!(resolver.start_position(&values, 0, ratio, true), Some(201.0));
        assert_eq!(resolver.start_position(&values, 1, ratio, true), Some(126.0));
    }

    #[test]
    fn diverging_segment_past_max_becomes_stub() {
        let options = RenderOptions::new(Stack::normal(), 50.0, 0.0, 100.0).with_diverging(true);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        assert_eq!(resolver.start_position(&[150.0, 30.0], 1, 2.5, false), Some(4.0));
    }

    #[test]
    fn mixed_bar_offsets_negatives_by_raw_value() {
        let options = RenderOptions::new(Stack::normal(), 50.0, -5000.0, 5000.0);
        let geometry = geometry(BoxSeriesConfig::bar(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let ratio = 0.05;

        assert_eq!(resolver.mode(), RenderMode::Mixed);
        let values = [2000.0, -1000.0, 1000.0, -2000.0];
        assert_eq!(resolver.start_position(&values, 0, ratio, false), Some(251.0));
        assert_eq!(resolver.start_position(&values, 1, ratio, false), Some(200.0));
        assert_eq!(resolver.start_position(&values, 2, ratio, false), Some(251.0));
        assert_eq!(resolver.start_position(&values, 3, ratio, false), Some(150.0));

        // Negative segments are not shifted by the ones before them.
        let negatives = [-1000.0, -2000.0];
        assert_eq!(resolver.start_position(&negatives, 0, ratio, false), Some(200.0));
        assert_eq!(resolver.start_position(&negatives, 1, ratio, false), Some(150.0));

        // Positive bars all start at the base line.
        let positives = [1000.0, 2000.0];
        assert_eq!(resolver.start_position(&positives, 0, ratio, false), Some(251.0));
        assert_eq!(resolver.start_position(&positives, 1, ratio, false), Some(251.0));
    }

    #[test]
    fn mixed_column_places_positives_by_inclusive_total() {
        let options = RenderOptions::new(Stack::normal(), 50.0, -5000.0, 5000.0);
        let geometry = geometry(BoxSeriesConfig::column(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let ratio = 0.05;

        assert_eq!(geometry.base_position, 250.0);
        let values = [1000.0, 2000.0, -1000.0];
        assert_eq!(resolver.start_position(&values, 0, ratio, false), Some(200.0));
        assert_eq!(resolver.start_position(&values, 1, ratio, false), Some(100.0));
        assert_eq!(resolver.start_position(&values, 2, ratio, false), Some(250.0));
    }

    #[test]
    fn mixed_stack_stubs_and_omits_at_bounds() {
        let options = RenderOptions::new(Stack::normal(), 50.0, -5000.0, 5000.0);
        let geometry = geometry(BoxSeriesConfig::column(), &options);
        let resolver = StackPositionResolver::new(&geometry, &options);
        let ratio = 0.05;

        // Inclusive total passes max: stub at the top edge.
        assert_eq!(resolver.start_position(&[4000.0, 2000.0], 1, ratio, false), Some(5.0));
        // Prior total already past max: omitted.
        assert_eq!(resolver.start_position(&[6000.0, 2000.0], 1, ratio, false), None);
        // Negative tower below min: omitted.
        assert_eq!(resolver.start_position(&[-6000.0, -1000.0], 1, ratio, false), None);
        // Negative tower crossing min: starts at its prior bottom.
        assert_eq!(
            resolver.start_position(&[-4000.0, -2000.0], 1, ratio, false),
            Some(450.0)
        );
    }
}
