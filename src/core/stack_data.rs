use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::stack::{PercentScaleType, Stack, StackData, StackDataValue, StackDataValues};
use crate::error::{ChartError, ChartResult};

/// Raw box series as supplied by the host: one value per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSeriesData {
    pub name: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_group: Option<String>,
}

impl BoxSeriesData {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
            stack_group: None,
        }
    }

    #[must_use]
    pub fn with_stack_group(mut self, group: impl Into<String>) -> Self {
        self.stack_group = Some(group.into());
        self
    }
}

/// Stacked view of one box series family (`stackSeries[name]` in chart state).
///
/// Deserialized values are checked against their raw series the same way
/// [`StackSeriesData::new`] builds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawStackSeriesData")]
pub struct StackSeriesData {
    pub data: Vec<BoxSeriesData>,
    pub stack_data: StackData,
    pub stack: Stack,
    pub scale_type: PercentScaleType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStackSeriesData {
    data: Vec<BoxSeriesData>,
    stack_data: StackData,
    stack: Stack,
    scale_type: PercentScaleType,
}

impl StackSeriesData {
    /// Transposes raw series into per-category stacks.
    ///
    /// Invariants:
    /// - every value is finite
    /// - all series have the same number of categories
    /// - either no series or every series names a non-empty `stack_group`
    pub fn new(data: Vec<BoxSeriesData>, stack: Stack, diverging: bool) -> ChartResult<Self> {
        validate_series(&data)?;

        let grouped = data.iter().any(|series| series.stack_group.is_some());
        let stack_data = stack_data_from_series(&data);
        let scale_type = PercentScaleType::resolve(&stack_data, diverging);
        debug!(
            series_count = data.len(),
            grouped,
            ?scale_type,
            "built stack series data"
        );

        Ok(Self {
            data,
            stack_data,
            stack,
            scale_type,
        })
    }

    /// Raw series belonging to `group_id`, in input order.
    pub fn series_in_group<'a>(
        &'a self,
        group_id: &'a str,
    ) -> impl Iterator<Item = &'a BoxSeriesData> + 'a {
        self.data
            .iter()
            .filter(move |series| series.stack_group.as_deref() == Some(group_id))
    }
}

impl TryFrom<RawStackSeriesData> for StackSeriesData {
    type Error = ChartError;

    fn try_from(raw: RawStackSeriesData) -> ChartResult<Self> {
        validate_series(&raw.data)?;

        // Totals are recomputed; only the stacked values must agree.
        let stack_data = stack_data_from_series(&raw.data);
        if !same_values(&stack_data, &raw.stack_data) {
            return Err(ChartError::InvalidData("stack data does not match its series".to_owned()));
        }

        let scale_type = raw.scale_type;
        if scale_type != PercentScaleType::DivergingPercentStack
            && scale_type != PercentScaleType::resolve(&stack_data, false)
        {
            return Err(ChartError::InvalidData(format!(
                "scale type {scale_type:?} does not match the sign of the stack totals"
            )));
        }

        Ok(Self {
            data: raw.data,
            stack_data,
            stack: raw.stack,
            scale_type,
        })
    }
}

fn stack_data_from_series(data: &[BoxSeriesData]) -> StackData {
    if !data.iter().any(|series| series.stack_group.is_some()) {
        return StackData::Flat(transpose(&data.iter().collect::<Vec<_>>()));
    }

    let mut groups: IndexMap<String, Vec<&BoxSeriesData>> = IndexMap::new();
    for series in data {
        let group = series.stack_group.clone().unwrap_or_default();
        groups.entry(group).or_default().push(series);
    }
    StackData::Grouped(
        groups
            .into_iter()
            .map(|(group, members)| (group, transpose(&members)))
            .collect(),
    )
}

fn same_values(expected: &StackData, actual: &StackData) -> bool {
    fn same_stack(a: &StackDataValues, b: &StackDataValues) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.values == b.values)
    }

    match (expected, actual) {
        (StackData::Flat(a), StackData::Flat(b)) => same_stack(a, b),
        (StackData::Grouped(a), StackData::Grouped(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((id_a, a), (id_b, b))| id_a == id_b && same_stack(a, b))
        }
        _ => false,
    }
}

fn validate_series(data: &[BoxSeriesData]) -> ChartResult<()> {
    let Some(first) = data.first() else {
        return Ok(());
    };

    let category_count = first.data.len();
    for series in data {
        if series.data.len() != category_count {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has {} values, expected {category_count}",
                series.name,
                series.data.len()
            )));
        }
        if series.data.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` contains a non-finite value",
                series.name
            )));
        }
    }

    let assigned = data.iter().filter(|s| s.stack_group.is_some()).count();
    if assigned != 0 && assigned != data.len() {
        return Err(ChartError::InvalidData(
            "stack groups must be assigned to every series or to none".to_owned(),
        ));
    }
    if data
        .iter()
        .any(|series| series.stack_group.as_deref().is_some_and(str::is_empty))
    {
        return Err(ChartError::InvalidData("stack group id must not be empty".to_owned()));
    }

    Ok(())
}

fn transpose(series: &[&BoxSeriesData]) -> StackDataValues {
    let category_count = series.first().map_or(0, |s| s.data.len());
    (0..category_count)
        .map(|index| StackDataValue::new(series.iter().map(|s| s.data[index]).collect()))
        .collect()
}
