use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{DataPoint, Dataset, PointShape, Series};
use crate::error::{ChartError, ChartResult};

/// Comparison applied by [`Transform::Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    GreaterThan,
    LessThan,
    EqualTo,
    GreaterOrEqual,
    LessOrEqual,
    NotEqual,
}

impl Comparator {
    pub const ALL: [Self; 6] = [
        Self::GreaterThan,
        Self::LessThan,
        Self::EqualTo,
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::NotEqual,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::EqualTo => "equal_to",
            Self::GreaterOrEqual => "greater_or_equal",
            Self::LessOrEqual => "less_or_equal",
            Self::NotEqual => "not_equal",
        }
    }

    #[must_use]
    pub fn matches(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
            Self::EqualTo => value == threshold,
            Self::GreaterOrEqual => value >= threshold,
            Self::LessOrEqual => value <= threshold,
            Self::NotEqual => value != threshold,
        }
    }
}

impl FromStr for Comparator {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|comparator| comparator.as_str() == input)
            .ok_or_else(|| ChartError::UnknownComparator(input.to_owned()))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate over point values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub comparator: Comparator,
    pub threshold: f64,
}

impl FilterSpec {
    #[must_use]
    pub fn new(comparator: Comparator, threshold: f64) -> Self {
        Self {
            comparator,
            threshold,
        }
    }

    /// Parses the comparator name, rejecting anything outside the known set.
    pub fn parse(comparator: &str, threshold: f64) -> ChartResult<Self> {
        Ok(Self::new(comparator.parse()?, threshold))
    }

    fn accepts(self, value: Option<f64>) -> bool {
        value.is_some_and(|v| self.comparator.matches(v, self.threshold))
    }
}

/// Leading-edge policy of a moving average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowEdge {
    /// Drops the first `window - 1` points.
    #[default]
    Trim,
    /// Keeps the length; leading points carry the undefined marker.
    PadUndefined,
    /// Keeps the length; leading points average the available prefix.
    Partial,
}

/// One stateless series transformation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    Cumulative,
    MovingAverage {
        window: usize,
        #[serde(default)]
        edge: WindowEdge,
    },
    PercentageChange,
    Filter(FilterSpec),
}

impl Transform {
    #[must_use]
    pub fn moving_average(window: usize) -> Self {
        Self::MovingAverage {
            window,
            edge: WindowEdge::Trim,
        }
    }

    pub fn apply(&self, series: &Series) -> ChartResult<Series> {
        if let Some(index) = series
            .points()
            .iter()
            .position(|p| p.shape() == PointShape::Ohlc)
        {
            return Err(ChartError::InvalidData(format!(
                "transforms need scalar values, point {index} is an OHLC bar"
            )));
        }

        let output = match *self {
            Self::Cumulative => cumulative(series)?,
            Self::MovingAverage { window, edge } => moving_average(series, window, edge)?,
            Self::PercentageChange => percentage_change(series),
            Self::Filter(spec) => filter(series, spec),
        };
        trace!(
            transform = ?self,
            input_len = series.len(),
            output_len = output.len(),
            "applied transform"
        );
        Ok(output)
    }
}

/// Ordered list of transforms applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformPipeline {
    steps: SmallVec<[Transform; 4]>,
}

impl TransformPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn then(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends every step of `other` after the current ones.
    #[must_use]
    pub fn chain(mut self, other: &Self) -> Self {
        self.steps.extend(other.steps.iter().copied());
        self
    }

    #[must_use]
    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    pub fn apply(&self, series: &Series) -> ChartResult<Series> {
        let mut current = series.clone();
        for step in &self.steps {
            current = step.apply(&current)?;
        }
        debug!(
            steps = self.steps.len(),
            input_len = series.len(),
            output_len = current.len(),
            "transform pipeline finished"
        );
        Ok(current)
    }
}

/// Outcome of [`filter_aligned`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub datasets: Vec<Dataset>,
    pub filter: FilterSpec,
    pub original_count: usize,
    pub filtered_count: usize,
}

/// Filters datasets that share category labels, keeping the labels whose
/// value in the first dataset passes `filter`.
pub fn filter_aligned(datasets: &[Dataset], filter: FilterSpec) -> ChartResult<FilterReport> {
    let Some(lead) = datasets.first() else {
        return Err(ChartError::EmptyInput);
    };

    let keep: IndexSet<&str> = lead
        .series
        .points()
        .iter()
        .filter(|point| filter.accepts(point.scalar()))
        .filter_map(DataPoint::label)
        .collect();

    let filtered = datasets
        .iter()
        .map(|dataset| {
            let points = dataset
                .series
                .points()
                .iter()
                .filter(|point| point.label().is_some_and(|label| keep.contains(label)))
                .cloned()
                .collect();
            Dataset {
                name: dataset.name.clone(),
                series: dataset.series.derived(points),
                hints: dataset.hints.clone(),
            }
        })
        .collect();

    Ok(FilterReport {
        datasets: filtered,
        filter,
        original_count: lead.series.len(),
        filtered_count: keep.len(),
    })
}

fn with_scalar(point: &DataPoint, value: Option<f64>) -> DataPoint {
    match point {
        DataPoint::Xy { x, r, .. } => DataPoint::Xy {
            x: *x,
            y: value,
            r: *r,
        },
        DataPoint::Value { label, .. } | DataPoint::Ohlc { label, .. } => DataPoint::Value {
            label: label.clone(),
            value,
        },
    }
}

fn cumulative(series: &Series) -> ChartResult<Series> {
    let mut total = 0.0;
    let mut points = Vec::with_capacity(series.len());
    for (index, point) in series.points().iter().enumerate() {
        let value = point.scalar().ok_or_else(|| ChartError::NonNumericInput {
            index,
            found: "undefined".to_owned(),
        })?;
        total += value;
        points.push(with_scalar(point, Some(total)));
    }
    Ok(series.derived(points))
}

fn moving_average(series: &Series, window: usize, edge: WindowEdge) -> ChartResult<Series> {
    let len = series.len();
    if window < 1 || window > len {
        return Err(ChartError::InvalidWindow { window, len });
    }

    let values = series.scalars();
    let mut points = Vec::with_capacity(len);
    for (index, point) in series.points().iter().enumerate() {
        let full = index + 1 >= window;
        let start = match (full, edge) {
            (true, _) => index + 1 - window,
            (false, WindowEdge::Trim) => continue,
            (false, WindowEdge::PadUndefined) => {
                points.push(with_scalar(point, None));
                continue;
            }
            (false, WindowEdge::Partial) => 0,
        };
        let slice = &values[start..=index];
        let average = slice
            .iter()
            .copied()
            .sum::<Option<f64>>()
            .map(|sum| sum / slice.len() as f64);
        points.push(with_scalar(point, average));
    }
    Ok(series.derived(points))
}

fn percentage_change(series: &Series) -> Series {
    let values = series.scalars();
    let points = series
        .points()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let change = index
                .checked_sub(1)
                .and_then(|prev| values[prev])
                .filter(|prev| *prev != 0.0)
                .zip(values[index])
                .map(|(prev, current)| (current - prev) / prev * 100.0);
            with_scalar(point, change)
        })
        .collect();
    series.derived(points)
}

fn filter(series: &Series, spec: FilterSpec) -> Series {
    let points = series
        .points()
        .iter()
        .filter(|point| spec.accepts(point.scalar()))
        .cloned()
        .collect();
    series.derived(points)
}
