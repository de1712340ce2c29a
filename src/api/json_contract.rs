use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::document::ChartConfiguration;

pub const CHART_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigurationJsonContractV1 {
    pub schema_version: u32,
    pub configuration: ChartConfiguration,
}

impl ChartConfiguration {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart configuration: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart configuration: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigurationJsonContractV1 {
            schema_version: CHART_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!(
                "failed to serialize chart configuration contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare document or a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(configuration) = serde_json::from_str::<ChartConfiguration>(input) {
            return Ok(configuration);
        }
        let payload: ChartConfigurationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::Serialization(format!(
                    "failed to parse chart configuration json payload: {e}"
                ))
            })?;
        if payload.schema_version != CHART_CONFIGURATION_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported chart configuration schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.configuration)
    }
}
