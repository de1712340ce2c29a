//! Closed operation surface of the engine.
//!
//! Each function is a thin, typed entry point over the module that owns the
//! behavior; request handlers and bindings call these instead of reaching
//! into individual modules.

use tracing::debug;

use crate::analysis::{self, AnalysisReport, ChartTypeSuggestion, StructuralMetadata};
use crate::core::{self, ChartType, Dataset, Series, StatisticsSummary, Transform};
use crate::error::ChartResult;
use crate::style::StyleSelection;

use super::document::ChartConfiguration;
use super::{ComposeOptions, composer, merge};

pub fn compute_statistics(values: &[f64]) -> ChartResult<StatisticsSummary> {
    core::compute_statistics(values)
}

/// Ranked chart-type suggestions; never empty.
pub fn suggest_chart_type(
    series: &Series,
    metadata: &StructuralMetadata,
) -> Vec<ChartTypeSuggestion> {
    analysis::suggest_chart_type(series, metadata)
}

pub fn transform(series: &Series, transform: &Transform) -> ChartResult<Series> {
    transform.apply(series)
}

/// Composes a document for a chart type given by its wire name
/// (`"bar"`, `"polarArea"`, `"gauge"`, ...).
pub fn compose_configuration(
    chart_type: &str,
    datasets: &[Dataset],
    style: &StyleSelection,
    options: &ComposeOptions,
) -> ChartResult<ChartConfiguration> {
    let chart_type: ChartType = chart_type.parse()?;
    debug!(chart_type = %chart_type, "compose operation");
    composer::compose_configuration(chart_type, datasets, style, options)
}

pub fn merge_configurations(configs: &[ChartConfiguration]) -> ChartResult<ChartConfiguration> {
    merge::merge_configurations(configs)
}

/// Statistics, ranked suggestions and a label summary in one report.
pub fn analyze(series: &Series, metadata: &StructuralMetadata) -> ChartResult<AnalysisReport> {
    AnalysisReport::build(series, metadata)
}
