use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::ChartType;
use crate::error::{ChartError, ChartResult};

/// How the labels/x values of a series are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Category,
    Temporal,
    Linear,
}

/// A single plotted point.
///
/// A `None` value (or `y`) is the explicit "undefined" marker produced by
/// transforms, serialized as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Ohlc {
        label: String,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },
    Xy {
        x: f64,
        y: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        r: Option<f64>,
    },
    Value {
        label: String,
        value: Option<f64>,
    },
}

/// Structural family of a point, used for shape compatibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointShape {
    Value,
    Xy,
    Ohlc,
}

impl DataPoint {
    #[must_use]
    pub fn value(label: impl Into<String>, value: f64) -> Self {
        Self::Value {
            label: label.into(),
            value: Some(value),
        }
    }

    #[must_use]
    pub fn undefined(label: impl Into<String>) -> Self {
        Self::Value {
            label: label.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::Xy {
            x,
            y: Some(y),
            r: None,
        }
    }

    #[must_use]
    pub fn bubble(x: f64, y: f64, r: f64) -> Self {
        Self::Xy {
            x,
            y: Some(y),
            r: Some(r),
        }
    }

    #[must_use]
    pub fn shape(&self) -> PointShape {
        match self {
            Self::Value { .. } => PointShape::Value,
            Self::Xy { .. } => PointShape::Xy,
            Self::Ohlc { .. } => PointShape::Ohlc,
        }
    }

    /// Category/temporal label, if the point carries one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Value { label, .. } | Self::Ohlc { label, .. } => Some(label),
            Self::Xy { .. } => None,
        }
    }

    /// Scalar value used by statistics and transforms.
    ///
    /// `Ohlc` points have no single scalar and return `None`.
    #[must_use]
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Value { value, .. } => *value,
            Self::Xy { y, .. } => *y,
            Self::Ohlc { .. } => None,
        }
    }

    fn numeric_fields(&self) -> impl Iterator<Item = f64> + '_ {
        let fields: [Option<f64>; 4] = match self {
            Self::Value { value, .. } => [*value, None, None, None],
            Self::Xy { x, y, r } => [Some(*x), *y, *r, None],
            Self::Ohlc {
                open,
                high,
                low,
                close,
                ..
            } => [Some(*open), Some(*high), Some(*low), Some(*close)],
        };
        fields.into_iter().flatten()
    }
}

/// Ordered sequence of points sharing one axis interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesRepr")]
pub struct Series {
    axis: AxisKind,
    points: Vec<DataPoint>,
}

impl Series {
    /// Builds a validated series.
    ///
    /// Invariants:
    /// - every numeric field is finite
    /// - category labels are unique
    /// - temporal labels parse as RFC 3339 and are non-decreasing
    /// - linear series contain only `Xy` points
    pub fn new(axis: AxisKind, points: Vec<DataPoint>) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if let Some(bad) = point.numeric_fields().find(|v| !v.is_finite()) {
                return Err(ChartError::NonNumericInput {
                    index,
                    found: bad.to_string(),
                });
            }
        }

        match axis {
            AxisKind::Category => {
                let mut seen = IndexSet::with_capacity(points.len());
                for point in &points {
                    let Some(label) = point.label() else {
                        return Err(ChartError::InvalidData(
                            "category series points must carry labels".to_owned(),
                        ));
                    };
                    if !seen.insert(label) {
                        return Err(ChartError::DuplicateLabel {
                            label: label.to_owned(),
                        });
                    }
                }
            }
            AxisKind::Temporal => {
                let mut previous: Option<DateTime<Utc>> = None;
                for (index, point) in points.iter().enumerate() {
                    let Some(label) = point.label() else {
                        return Err(ChartError::InvalidData(
                            "temporal series points must carry ISO-8601 labels".to_owned(),
                        ));
                    };
                    let instant = parse_instant(label).ok_or_else(|| {
                        ChartError::InvalidTimestamp {
                            index,
                            value: label.to_owned(),
                        }
                    })?;
                    if previous.is_some_and(|prev| instant < prev) {
                        return Err(ChartError::UnorderedTimeAxis { index });
                    }
                    previous = Some(instant);
                }
            }
            AxisKind::Linear => {
                if points.iter().any(|p| p.shape() != PointShape::Xy) {
                    return Err(ChartError::InvalidData(
                        "linear series accept only x/y points".to_owned(),
                    ));
                }
            }
        }

        Ok(Self { axis, points })
    }

    /// Category series from `(label, value)` pairs.
    pub fn categorical<L, I>(pairs: I) -> ChartResult<Self>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        Self::new(
            AxisKind::Category,
            pairs
                .into_iter()
                .map(|(label, value)| DataPoint::value(label, value))
                .collect(),
        )
    }

    /// Time series from `(ISO-8601 instant, value)` pairs.
    pub fn temporal<L, I>(pairs: I) -> ChartResult<Self>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        Self::new(
            AxisKind::Temporal,
            pairs
                .into_iter()
                .map(|(label, value)| DataPoint::value(label, value))
                .collect(),
        )
    }

    /// Linear series from `x/y[/r]` points.
    pub fn linear(points: Vec<DataPoint>) -> ChartResult<Self> {
        Self::new(AxisKind::Linear, points)
    }

    /// Category series labelled `1..=n` from bare values.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        Self::categorical(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("{}", i + 1), *v)),
        )
    }

    #[must_use]
    pub fn axis(&self) -> AxisKind {
        self.axis
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Labels in point order (empty for linear series).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().filter_map(DataPoint::label)
    }

    /// Scalar values in point order, `None` for undefined markers.
    #[must_use]
    pub fn scalars(&self) -> Vec<Option<f64>> {
        self.points.iter().map(DataPoint::scalar).collect()
    }

    /// Shape shared by all points; `None` for empty or mixed series.
    #[must_use]
    pub fn shape(&self) -> Option<PointShape> {
        let first = self.points.first()?.shape();
        self.points
            .iter()
            .all(|p| p.shape() == first)
            .then_some(first)
    }

    /// Builds a derived series without re-running label validation.
    ///
    /// Callers must only pass points that are a subsequence of (or positionally
    /// aligned with) an already validated series.
    pub(crate) fn derived(&self, points: Vec<DataPoint>) -> Self {
        Self {
            axis: self.axis,
            points,
        }
    }
}

#[derive(Deserialize)]
struct SeriesRepr {
    axis: AxisKind,
    points: Vec<DataPoint>,
}

impl TryFrom<SeriesRepr> for Series {
    type Error = ChartError;

    fn try_from(repr: SeriesRepr) -> ChartResult<Self> {
        Self::new(repr.axis, repr.points)
    }
}

/// Per-dataset styling hints. Colors are palette slots, never free-form
/// strings, so they always resolve against the bound palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleHints {
    pub color_slot: Option<usize>,
    pub gradient_slots: Option<(usize, usize)>,
    pub fill: Option<bool>,
    pub tension: Option<f64>,
    pub render_as: Option<ChartType>,
}

/// A named series plus its styling hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub series: Series,
    #[serde(default)]
    pub hints: StyleHints,
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>, series: Series) -> Self {
        Self {
            name: name.into(),
            series,
            hints: StyleHints::default(),
        }
    }

    #[must_use]
    pub fn with_color_slot(mut self, slot: usize) -> Self {
        self.hints.color_slot = Some(slot);
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, start_slot: usize, end_slot: usize) -> Self {
        self.hints.gradient_slots = Some((start_slot, end_slot));
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.hints.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.hints.tension = Some(tension);
        self
    }

    /// Renders this dataset with a different chart type (mixed charts).
    #[must_use]
    pub fn rendered_as(mut self, chart_type: ChartType) -> Self {
        self.hints.render_as = Some(chart_type);
        self
    }
}

pub(crate) fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_instant_accepts_dates_and_rfc3339() {
        assert!(parse_instant("2024-03-01").is_some());
        assert!(parse_instant("2024-03-01T10:00:00Z").is_some());
        assert!(parse_instant("2024-03-01T10:00:00+02:00").is_some());
        assert!(parse_instant("March 1st").is_none());
    }

    #[test]
    fn untagged_point_decoding_prefers_specific_shapes() {
        let ohlc: DataPoint = serde_json::from_str(
            r#"{"label":"d1","open":1.0,"high":2.0,"low":0.5,"close":1.5}"#,
        )
        .expect("ohlc");
        assert_eq!(ohlc.shape(), PointShape::Ohlc);

        let xy: DataPoint = serde_json::from_str(r#"{"x":1.0,"y":2.0}"#).expect("xy");
        assert_eq!(xy, DataPoint::xy(1.0, 2.0));

        let value: DataPoint =
            serde_json::from_str(r#"{"label":"a","value":null}"#).expect("value");
        assert_eq!(value, DataPoint::undefined("a"));
    }
}
