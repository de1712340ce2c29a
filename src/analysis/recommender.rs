use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisKind, ChartType, DataPoint, Series, StatisticsSummary};

/// Number of numeric fields per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensionality {
    One,
    Two,
    Three,
}

/// What the caller wants the chart to emphasize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    #[default]
    Unspecified,
    Comparison,
    Composition,
}

/// Shape facts the recommender reasons about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralMetadata {
    pub series_count: usize,
    pub categorical_labels: bool,
    pub temporal_axis: bool,
    pub dimensions: Dimensionality,
    pub category_count: usize,
    pub value_count: usize,
    pub cyclical: bool,
    pub intent: Intent,
}

impl Default for StructuralMetadata {
    fn default() -> Self {
        Self {
            series_count: 1,
            categorical_labels: false,
            temporal_axis: false,
            dimensions: Dimensionality::One,
            category_count: 0,
            value_count: 0,
            cyclical: false,
            intent: Intent::Unspecified,
        }
    }
}

impl StructuralMetadata {
    /// Derives everything except `cyclical` and `intent` from the series.
    #[must_use]
    pub fn from_series(series: &[Series]) -> Self {
        let linear: Vec<&Series> = series
            .iter()
            .filter(|s| s.axis() == AxisKind::Linear)
            .collect();
        let dimensions = if linear.is_empty() {
            Dimensionality::One
        } else if linear.iter().all(|s| {
            s.points()
                .iter()
                .all(|p| matches!(p, DataPoint::Xy { r: Some(_), .. }))
        }) {
            Dimensionality::Three
        } else {
            Dimensionality::Two
        };

        Self {
            series_count: series.len(),
            categorical_labels: series.iter().any(|s| s.axis() == AxisKind::Category),
            temporal_axis: series.iter().any(|s| s.axis() == AxisKind::Temporal),
            dimensions,
            category_count: series
                .iter()
                .filter(|s| s.axis() == AxisKind::Category)
                .map(Series::len)
                .max()
                .unwrap_or(0),
            value_count: series.iter().map(Series::len).max().unwrap_or(0),
            cyclical: false,
            intent: Intent::Unspecified,
        }
    }

    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    #[must_use]
    pub fn with_cyclical(mut self, cyclical: bool) -> Self {
        self.cyclical = cyclical;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTypeSuggestion {
    pub chart_type: ChartType,
    pub confidence: f64,
    pub rationale: String,
}

/// Declarative predicate a rule fires on.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Signal {
    TemporalSingleSeries,
    UnorderedPlane,
    Volumetric,
    PartsOfWhole { max_categories: usize },
    CompositionIntent,
    ManyCategoriesOrComparison { threshold: usize },
    CategoricalBaseline,
    Cyclical,
    MultiAxisComparison { min_axes: usize },
    HighVariability { min_cv: f64 },
    LongSequence { min_len: usize },
}

impl Signal {
    fn matches(self, meta: &StructuralMetadata, summary: Option<&StatisticsSummary>) -> bool {
        match self {
            Self::TemporalSingleSeries => meta.temporal_axis && meta.series_count == 1,
            Self::UnorderedPlane => meta.dimensions == Dimensionality::Two && !meta.temporal_axis,
            Self::Volumetric => meta.dimensions == Dimensionality::Three,
            Self::PartsOfWhole { max_categories } => {
                meta.categorical_labels
                    && !meta.temporal_axis
                    && meta.series_count == 1
                    && (2..=max_categories).contains(&meta.category_count)
                    && summary.is_some_and(|s| s.min >= 0.0 && s.sum > 0.0)
            }
            Self::CompositionIntent => {
                meta.intent == Intent::Composition
                    && meta.categorical_labels
                    && !meta.temporal_axis
                    && meta.series_count == 1
                    && summary.is_some_and(|s| s.min >= 0.0 && s.sum > 0.0)
            }
            Self::ManyCategoriesOrComparison { threshold } => {
                meta.categorical_labels
                    && (meta.category_count > threshold || meta.intent == Intent::Comparison)
            }
            Self::CategoricalBaseline => meta.categorical_labels,
            Self::Cyclical => meta.categorical_labels && meta.cyclical,
            Self::MultiAxisComparison { min_axes } => {
                meta.categorical_labels
                    && meta.series_count >= 2
                    && meta.category_count >= min_axes
            }
            Self::HighVariability { min_cv } => {
                !meta.categorical_labels
                    && !meta.temporal_axis
                    && summary
                        .and_then(StatisticsSummary::coefficient_of_variation)
                        .is_some_and(|cv| cv > min_cv)
            }
            Self::LongSequence { min_len } => {
                meta.categorical_labels
                    && !meta.temporal_axis
                    && meta.series_count == 1
                    && meta.value_count > min_len
            }
        }
    }
}

struct Rule {
    signal: Signal,
    chart_type: ChartType,
    weight: f64,
    rationale: &'static str,
}

/// Evaluated top to bottom; every matching rule contributes its weight.
static RULES: &[Rule] = &[
    Rule {
        signal: Signal::TemporalSingleSeries,
        chart_type: ChartType::Line,
        weight: 0.9,
        rationale: "single series over a time axis reads best as a line",
    },
    Rule {
        signal: Signal::Volumetric,
        chart_type: ChartType::Bubble,
        weight: 0.85,
        rationale: "three numeric dimensions map to x, y and bubble radius",
    },
    Rule {
        signal: Signal::UnorderedPlane,
        chart_type: ChartType::Scatter,
        weight: 0.7,
        rationale: "two numeric dimensions without ordering suit a scatter plot",
    },
    Rule {
        signal: Signal::PartsOfWhole { max_categories: 8 },
        chart_type: ChartType::Pie,
        weight: 0.5,
        rationale: "few non-negative categories forming a total show proportions",
    },
    Rule {
        signal: Signal::PartsOfWhole { max_categories: 8 },
        chart_type: ChartType::Doughnut,
        weight: 0.3,
        rationale: "parts of a whole also fit a doughnut",
    },
    Rule {
        signal: Signal::CompositionIntent,
        chart_type: ChartType::Pie,
        weight: 0.6,
        rationale: "composition was requested and the values form a total",
    },
    Rule {
        signal: Signal::CompositionIntent,
        chart_type: ChartType::Doughnut,
        weight: 0.3,
        rationale: "a requested composition also reads as a doughnut",
    },
    Rule {
        signal: Signal::ManyCategoriesOrComparison { threshold: 8 },
        chart_type: ChartType::Bar,
        weight: 0.6,
        rationale: "many categories or an explicit comparison favour bars",
    },
    Rule {
        signal: Signal::Cyclical,
        chart_type: ChartType::PolarArea,
        weight: 0.5,
        rationale: "cyclical categories wrap naturally around a polar area",
    },
    Rule {
        signal: Signal::MultiAxisComparison { min_axes: 3 },
        chart_type: ChartType::Radar,
        weight: 0.45,
        rationale: "several series across three or more labeled axes compare on a radar",
    },
    Rule {
        signal: Signal::LongSequence { min_len: 10 },
        chart_type: ChartType::Line,
        weight: 0.3,
        rationale: "long ordered sequences show trends as a line",
    },
    Rule {
        signal: Signal::LongSequence { min_len: 10 },
        chart_type: ChartType::Area,
        weight: 0.15,
        rationale: "an area chart emphasizes cumulative trends",
    },
    Rule {
        signal: Signal::HighVariability { min_cv: 0.5 },
        chart_type: ChartType::Scatter,
        weight: 0.2,
        rationale: "high variability is easier to read as a distribution",
    },
    Rule {
        signal: Signal::CategoricalBaseline,
        chart_type: ChartType::Bar,
        weight: 0.15,
        rationale: "bars always allow direct comparison of categories",
    },
];

const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Ranks chart types for the given shape. Never fails: missing statistics
/// only disable the rules that need them.
#[must_use]
pub fn recommend(
    summary: Option<&StatisticsSummary>,
    metadata: &StructuralMetadata,
) -> Vec<ChartTypeSuggestion> {
    let mut scores: IndexMap<ChartType, (f64, Vec<&'static str>)> = IndexMap::new();
    for rule in RULES.iter().filter(|r| r.signal.matches(metadata, summary)) {
        let entry = scores.entry(rule.chart_type).or_insert((0.0, Vec::new()));
        entry.0 += rule.weight;
        entry.1.push(rule.rationale);
    }

    if scores.is_empty() {
        debug!(?metadata, "no recommendation rule matched, falling back to bar");
        return vec![ChartTypeSuggestion {
            chart_type: ChartType::Bar,
            confidence: FALLBACK_CONFIDENCE,
            rationale: "no strong signal in the data shape; bar is the safest default".to_owned(),
        }];
    }

    let total: f64 = scores.values().map(|(score, _)| score).sum();
    let scale = if total > 1.0 { 1.0 / total } else { 1.0 };

    let mut suggestions: Vec<ChartTypeSuggestion> = scores
        .into_iter()
        .map(|(chart_type, (score, reasons))| ChartTypeSuggestion {
            chart_type,
            confidence: score * scale,
            rationale: reasons.join("; "),
        })
        .collect();
    // Stable sort keeps rule order between equal confidences.
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    debug!(
        top = %suggestions[0].chart_type,
        candidates = suggestions.len(),
        "chart type recommendation"
    );
    suggestions
}

/// Computes statistics for `series` and ranks chart types.
///
/// A series without usable statistics (e.g. containing undefined markers)
/// degrades to shape-only rules instead of failing.
#[must_use]
pub fn suggest_chart_type(
    series: &Series,
    metadata: &StructuralMetadata,
) -> Vec<ChartTypeSuggestion> {
    let summary = StatisticsSummary::from_series(series).ok();
    recommend(summary.as_ref(), metadata)
}
