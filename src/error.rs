use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot size: width={width}, height={height}")]
    InvalidPlot { width: f64, height: f64 },

    #[error("color palette too short: {needed} colors needed, {available} available")]
    PaletteTooShort { needed: usize, available: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
