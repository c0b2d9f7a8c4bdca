use serde::{Deserialize, Serialize};

use crate::api::palette::PaletteWindow;
use crate::core::{BoxSeriesData, StackData, StackDataValues, StackSeriesData};
use crate::error::{ChartError, ChartResult};

/// Tooltip record for one stack segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipData {
    pub label: String,
    pub color: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Flattens stack data into tooltip records.
///
/// Order is group, then category, then series: the same order in which
/// segment models are laid out.
pub fn tooltip_data(
    series_data: &StackSeriesData,
    colors: &[String],
    categories: &[String],
) -> ChartResult<Vec<TooltipData>> {
    match &series_data.stack_data {
        StackData::Flat(stack_data) => {
            let series: Vec<&BoxSeriesData> = series_data.data.iter().collect();
            let colors = PaletteWindow::new(0, series.len()).slice(colors)?;
            stack_tooltip_data(&series, stack_data, colors, categories)
        }
        StackData::Grouped(groups) => {
            let mut records = Vec::new();
            for (group_id, window) in PaletteWindow::for_groups(series_data, groups) {
                let series: Vec<&BoxSeriesData> = series_data.series_in_group(group_id).collect();
                let colors = window.slice(colors)?;
                records.extend(stack_tooltip_data(
                    &series,
                    &groups[group_id],
                    colors,
                    categories,
                )?);
            }
            Ok(records)
        }
    }
}

fn stack_tooltip_data(
    series: &[&BoxSeriesData],
    stack_data: &StackDataValues,
    colors: &[String],
    categories: &[String],
) -> ChartResult<Vec<TooltipData>> {
    let mut records = Vec::with_capacity(stack_data.len() * series.len());
    for (data_index, entry) in stack_data.iter().enumerate() {
        for (series_index, value) in entry.values.iter().enumerate() {
            let (Some(member), Some(color)) = (series.get(series_index), colors.get(series_index))
            else {
                return Err(ChartError::InvalidData(format!(
                    "no series or color for value {series_index} of category {data_index}"
                )));
            };
            records.push(TooltipData {
                label: member.name.clone(),
                color: color.clone(),
                value: *value,
                category: categories.get(data_index).cloned(),
            });
        }
    }
    Ok(records)
}
