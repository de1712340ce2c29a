use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Series;
use crate::error::{ChartError, ChartResult};

/// Descriptive statistics of a non-empty numeric sequence.
///
/// `variance` and `std_dev` use the population formula (divide by `N`, not
/// `N - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub std_dev: f64,
    pub variance: f64,
}

impl StatisticsSummary {
    /// Statistics over the scalar values of a series.
    ///
    /// Undefined markers and OHLC points are rejected with their index.
    pub fn from_series(series: &Series) -> ChartResult<Self> {
        let mut values = Vec::with_capacity(series.len());
        for (index, point) in series.points().iter().enumerate() {
            let value = point.scalar().ok_or_else(|| ChartError::NonNumericInput {
                index,
                found: "undefined".to_owned(),
            })?;
            values.push(value);
        }
        compute_statistics(&values)
    }

    /// `std_dev / |mean|`, or `None` when the mean is zero.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> Option<f64> {
        (self.mean != 0.0).then(|| self.std_dev / self.mean.abs())
    }
}

/// Computes [`StatisticsSummary`] in `O(N log N)`.
pub fn compute_statistics(values: &[f64]) -> ChartResult<StatisticsSummary> {
    if values.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(ChartError::NonNumericInput {
            index,
            found: values[index].to_string(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by_key(|v| OrderedFloat(*v));

    let count = sorted.len();
    let sum: f64 = values.iter().sum();
    let min = sorted[0];
    let max = sorted[count - 1];
    // Rounding in `sum` can push the quotient one ulp outside the data range.
    let mean = (sum / count as f64).clamp(min, max);
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

    Ok(StatisticsSummary {
        count,
        sum,
        mean,
        median,
        min,
        max,
        range: max - min,
        std_dev: variance.sqrt(),
        variance,
    })
}
