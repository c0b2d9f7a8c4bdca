//! Cumulative sums over one category's stack and range-clamped segment lengths.
//!
//! Accumulation only crosses segments of the same sign, so a category can hold
//! an independent positive tower and negative tower. Zero is compatible with
//! both signs.

use crate::core::options::RenderOptions;

/// Sums the values before `current_index` (or up to it when `include_current`)
/// that share the sign of `values[current_index]`.
#[must_use]
pub fn sum_of_prev_values(values: &[f64], current_index: usize, include_current: bool) -> f64 {
    let Some(current) = values.get(current_index).copied() else {
        return 0.0;
    };

    values
        .iter()
        .enumerate()
        .filter(|(index, value)| {
            let is_prev = if include_current {
                *index <= current_index
            } else {
                *index < current_index
            };
            is_prev && **value * current >= 0.0
        })
        .map(|(_, value)| *value)
        .sum()
}

/// Whether the prior total already lies past the visible edge of a
/// single-signed axis.
#[must_use]
pub fn exceed_edge(options: &RenderOptions, total_of_prev: f64) -> bool {
    (options.has_positive_only && total_of_prev > options.max)
        || (options.has_negative_only && total_of_prev < options.min)
}

/// Re-bases the first segment onto the axis origin when the range excludes zero.
#[must_use]
pub fn calibrate_first_value(value: f64, options: &RenderOptions) -> f64 {
    let mut result = value;

    if options.has_positive_only && options.min > 0.0 {
        result = value - options.min;
    }
    if options.has_negative_only && options.max < 0.0 {
        result = value - options.max;
    }

    result
}

/// Value-space length of `values[series_index]` after clamping to `[min, max]`.
///
/// Percent stacks are returned unchanged. The four range checks run in a fixed
/// order and a later match overrides an earlier one.
#[must_use]
pub fn calibrate_drawing_value(
    values: &[f64],
    series_index: usize,
    options: &RenderOptions,
) -> f64 {
    let Some(value) = values.get(series_index).copied() else {
        return 0.0;
    };

    if options.is_percent_stack() {
        return value;
    }

    let total_of_prev = sum_of_prev_values(values, series_index, false);
    let total_of_values = sum_of_prev_values(values, series_index, true);
    let (min, max) = (options.min, options.max);

    if exceed_edge(options, total_of_prev) {
        return 0.0;
    }

    if series_index == 0 {
        return calibrate_first_value(value, options);
    }

    let mut result = value;

    if total_of_values > max {
        result = max - total_of_prev;
    }
    if total_of_values < min {
        result = min - total_of_prev;
    }
    if total_of_prev < min {
        result = total_of_values - min;
    }
    if total_of_prev > max {
        result = total_of_values - max;
    }

    result
}
