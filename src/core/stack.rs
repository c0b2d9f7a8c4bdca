use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CONNECTOR_COLOR: &str = "rgba(51, 85, 139, 0.3)";
pub const DEFAULT_CONNECTOR_WIDTH: f64 = 1.0;

/// One value per series for a single category, in stacking order.
pub type StackValues = Vec<f64>;

/// Same-category sums split by sign. Percent stacks divide by these.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StackTotal {
    pub positive: f64,
    pub negative: f64,
}

impl StackTotal {
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        values.iter().fold(Self::default(), |mut total, value| {
            if *value > 0.0 {
                total.positive += value;
            } else {
                total.negative += value;
            }
            total
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDataValue {
    pub values: StackValues,
    pub total: StackTotal,
}

impl StackDataValue {
    #[must_use]
    pub fn new(values: StackValues) -> Self {
        let total = StackTotal::from_values(&values);
        Self { values, total }
    }
}

/// One entry per category.
pub type StackDataValues = Vec<StackDataValue>;

/// Independently stacked groups keyed by group id, in encounter order.
pub type StackGroupData = IndexMap<String, StackDataValues>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StackData {
    Flat(StackDataValues),
    Grouped(StackGroupData),
}

impl StackData {
    #[must_use]
    pub fn is_group_stack(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// Category count; every group shares the same categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Grouped(groups) => groups.values().map(Vec::len).max().unwrap_or(0),
        }
    }

    fn all_values(&self) -> Box<dyn Iterator<Item = &StackDataValue> + '_> {
        match self {
            Self::Flat(values) => Box::new(values.iter()),
            Self::Grouped(groups) => Box::new(groups.values().flatten()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum StackType {
    #[default]
    Normal,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ConnectorLineType {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorStyle {
    #[serde(rename = "type", default)]
    pub line_type: ConnectorLineType,
    #[serde(default = "default_connector_color")]
    pub color: String,
    #[serde(default = "default_connector_width")]
    pub width: f64,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            line_type: ConnectorLineType::Solid,
            color: default_connector_color(),
            width: default_connector_width(),
        }
    }
}

impl ConnectorStyle {
    /// Dash pattern handed to the painter; empty means a solid stroke.
    #[must_use]
    pub fn dashed_pattern(&self) -> Vec<f64> {
        match self.line_type {
            ConnectorLineType::Dashed => vec![5.0, 5.0],
            ConnectorLineType::Solid => Vec::new(),
        }
    }
}

fn default_connector_color() -> String {
    DEFAULT_CONNECTOR_COLOR.to_owned()
}

fn default_connector_width() -> f64 {
    DEFAULT_CONNECTOR_WIDTH
}

/// Resolved `series.stack` option.
///
/// Accepts `true`, `{ "type": "normal" | "percent", "connector": bool | {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(try_from = "StackOption")]
pub struct Stack {
    #[serde(rename = "type")]
    pub stack_type: StackType,
    pub connector: Option<ConnectorStyle>,
}

impl Stack {
    #[must_use]
    pub fn normal() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn percent() -> Self {
        Self {
            stack_type: StackType::Percent,
            connector: None,
        }
    }

    #[must_use]
    pub fn with_connector(mut self, connector: ConnectorStyle) -> Self {
        self.connector = Some(connector);
        self
    }

    #[must_use]
    pub fn is_percent_stack(&self) -> bool {
        self.stack_type == StackType::Percent
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StackOption {
    Enabled(bool),
    Options {
        #[serde(rename = "type", default)]
        stack_type: StackType,
        #[serde(default)]
        connector: Option<ConnectorOption>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConnectorOption {
    Enabled(bool),
    Style(ConnectorStyle),
}

impl TryFrom<StackOption> for Stack {
    type Error = ChartError;

    fn try_from(option: StackOption) -> ChartResult<Self> {
        match option {
            StackOption::Enabled(true) => Ok(Self::normal()),
            StackOption::Enabled(false) => Err(ChartError::InvalidData(
                "stack option `false` does not describe a stacked series".to_owned(),
            )),
            StackOption::Options {
                stack_type,
                connector,
            } => Ok(Self {
                stack_type,
                connector: match connector {
                    Some(ConnectorOption::Enabled(true)) => Some(ConnectorStyle::default()),
                    Some(ConnectorOption::Style(style)) => Some(style),
                    Some(ConnectorOption::Enabled(false)) | None => None,
                },
            }),
        }
    }
}

/// Percent sub-type; selects the percent divisor policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PercentScaleType {
    PercentStack,
    MinusPercentStack,
    DualPercentStack,
    DivergingPercentStack,
}

impl PercentScaleType {
    /// Classifies stacked data by the signs of its per-category totals.
    #[must_use]
    pub fn resolve(stack_data: &StackData, diverging: bool) -> Self {
        if diverging {
            return Self::DivergingPercentStack;
        }

        let mut has_positive = false;
        let mut has_negative = false;
        for value in stack_data.all_values() {
            has_positive |= value.total.positive > 0.0;
            has_negative |= value.total.negative < 0.0;
        }

        match (has_positive, has_negative) {
            (true, true) => Self::DualPercentStack,
            (false, true) => Self::MinusPercentStack,
            _ => Self::PercentStack,
        }
    }

    /// Dual and diverging percent charts map one total onto half of the span.
    #[must_use]
    pub fn splits_span(self) -> bool {
        matches!(self, Self::DualPercentStack | Self::DivergingPercentStack)
    }
}
