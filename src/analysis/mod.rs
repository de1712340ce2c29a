//! Data-shape analysis: chart-type recommendation and summary reports.

pub mod recommender;

use serde::{Deserialize, Serialize};

use crate::core::{Series, StatisticsSummary};
use crate::error::ChartResult;

pub use recommender::{
    ChartTypeSuggestion, Dimensionality, Intent, StructuralMetadata, recommend,
    suggest_chart_type,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSummary {
    pub has_labels: bool,
    pub label_count: usize,
}

/// Statistics, ranked suggestions and label summary for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub statistics: StatisticsSummary,
    pub suggestions: Vec<ChartTypeSuggestion>,
    pub data_summary: DataSummary,
}

impl AnalysisReport {
    /// Unlike [`suggest_chart_type`], this fails when statistics cannot be
    /// computed since the report would otherwise be incomplete.
    pub fn build(series: &Series, metadata: &StructuralMetadata) -> ChartResult<Self> {
        let statistics = StatisticsSummary::from_series(series)?;
        let label_count = series.labels().count();
        Ok(Self {
            statistics,
            suggestions: recommend(Some(&statistics), metadata),
            data_summary: DataSummary {
                has_labels: label_count > 0,
                label_count,
            },
        })
    }
}
