use crate::core::{StackGroupData, StackSeriesData};
use crate::error::{ChartError, ChartResult};

/// Read-only range of the theme palette assigned to one stack.
///
/// Groups take consecutive windows, so no color is shared across groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteWindow {
    pub offset: usize,
    pub count: usize,
}

impl PaletteWindow {
    #[must_use]
    pub fn new(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    /// One window per group, in group encounter order.
    #[must_use]
    pub fn for_groups<'a>(
        series_data: &'a StackSeriesData,
        groups: &'a StackGroupData,
    ) -> Vec<(&'a str, Self)> {
        let mut offset = 0;
        groups
            .keys()
            .map(|group_id| {
                let count = series_data.series_in_group(group_id).count();
                let window = Self::new(offset, count);
                offset += count;
                (group_id.as_str(), window)
            })
            .collect()
    }

    pub fn slice<'c>(&self, colors: &'c [String]) -> ChartResult<&'c [String]> {
        let end = self.offset + self.count;
        colors.get(self.offset..end).ok_or(ChartError::PaletteTooShort {
            needed: end,
            available: colors.len(),
        })
    }
}
