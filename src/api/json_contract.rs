use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::StackSeriesRender;

pub const STACK_SERIES_RENDER_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSeriesRenderJsonContractV1 {
    pub schema_version: u32,
    pub render: StackSeriesRender,
}

impl StackSeriesRender {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize stack series render json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = StackSeriesRenderJsonContractV1 {
            schema_version: STACK_SERIES_RENDER_JSON_SCHEMA_V1,
            render: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize stack series render contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare render payload or a versioned contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(render) = serde_json::from_str::<StackSeriesRender>(input) {
            return Ok(render);
        }
        let payload: StackSeriesRenderJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!(
                    "failed to parse stack series render json payload: {e}"
                ))
            })?;
        if payload.schema_version != STACK_SERIES_RENDER_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported stack series render schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.render)
    }
}
