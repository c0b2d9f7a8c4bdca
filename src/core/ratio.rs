use crate::core::stack::{PercentScaleType, StackTotal};

/// Pixels per value unit for a linear axis span.
///
/// Diverging layouts give each side half of `offset_size`. A degenerate span
/// yields `0.0`.
#[must_use]
pub fn value_ratio(offset_size: f64, min: f64, max: f64, diverging: bool) -> f64 {
    let multiple = if diverging { 2.0 } else { 1.0 };
    let span = (max - min) * multiple;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    offset_size / span
}

/// Divisor for percent stacks: the category's absolute total, doubled when
/// each side of the chart maps the total onto half the span.
#[must_use]
pub fn divisor_for_percent(total: StackTotal, scale_type: PercentScaleType) -> f64 {
    let divisor = total.positive + total.negative.abs();
    if scale_type.splits_span() {
        divisor * 2.0
    } else {
        divisor
    }
}

/// Pixels per value unit for one percent-stacked category.
///
/// An all-zero category yields `0.0` so nothing is drawn.
#[must_use]
pub fn percent_ratio(offset_size: f64, total: StackTotal, scale_type: PercentScaleType) -> f64 {
    let divisor = divisor_for_percent(total, scale_type);
    if divisor == 0.0 {
        return 0.0;
    }
    offset_size / divisor
}
