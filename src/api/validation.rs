use indexmap::IndexSet;

use crate::core::{AxisKind, ChartType, DataPoint, Dataset, WireType};
use crate::error::{ChartError, ChartResult};

use super::{AxisAssignment, GaugeSpec};

const RESERVED_AXIS_IDS: [&str; 2] = ["x", "r"];

pub(super) fn validate_datasets(datasets: &[Dataset]) -> ChartResult<()> {
    if datasets.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    if let Some(empty) = datasets.iter().find(|d| d.series.is_empty()) {
        return Err(ChartError::EmptyDataset {
            dataset: empty.name.clone(),
        });
    }

    let mut kinds = datasets
        .iter()
        .map(|d| d.series.axis())
        .filter(|axis| *axis != AxisKind::Linear);
    if let Some(first) = kinds.next() {
        if kinds.any(|axis| axis != first) {
            return Err(ChartError::InvalidData(
                "category and time series cannot share one label axis".to_owned(),
            ));
        }
    }
    Ok(())
}

pub(super) fn validate_axes(
    chart_type: ChartType,
    axes: &[AxisAssignment],
    datasets: &[Dataset],
) -> ChartResult<()> {
    if axes.is_empty() {
        return Ok(());
    }
    if !matches!(chart_type.wire_type(), WireType::Bar | WireType::Line) {
        return Err(ChartError::InvalidData(format!(
            "{chart_type} charts do not support secondary axes"
        )));
    }

    let mut ids = IndexSet::with_capacity(axes.len());
    let mut assigned = IndexSet::new();
    for axis in axes {
        if RESERVED_AXIS_IDS.contains(&axis.id.as_str()) || !ids.insert(axis.id.as_str()) {
            return Err(ChartError::DuplicateAxis(axis.id.clone()));
        }
        for name in &axis.datasets {
            if !datasets.iter().any(|d| &d.name == name) {
                return Err(ChartError::UnknownAxisDataset {
                    axis: axis.id.clone(),
                    dataset: name.clone(),
                });
            }
            if !assigned.insert(name.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{name}` is assigned to more than one axis"
                )));
            }
        }
    }
    Ok(())
}

/// Checks that every point carries the fields its chart type needs.
pub(super) fn validate_shapes(
    chart_type: ChartType,
    datasets: &[Dataset],
    gauge: Option<&GaugeSpec>,
) -> ChartResult<()> {
    if chart_type == ChartType::Gauge {
        return validate_gauge(datasets, gauge);
    }

    for dataset in datasets {
        let effective = dataset.hints.render_as.unwrap_or(chart_type);
        for (index, point) in dataset.series.points().iter().enumerate() {
            if let Some(field) = missing_field(effective, point) {
                return Err(ChartError::SchemaMismatch {
                    chart_type: effective.as_str(),
                    dataset: dataset.name.clone(),
                    index,
                    field,
                });
            }
        }
    }
    Ok(())
}

fn missing_field(chart_type: ChartType, point: &DataPoint) -> Option<&'static str> {
    match (chart_type, point) {
        (ChartType::Bubble, DataPoint::Xy { r: None, .. }) => Some("r"),
        (ChartType::Bubble | ChartType::Scatter, DataPoint::Xy { .. }) => None,
        (ChartType::Bubble | ChartType::Scatter, _) => Some("x"),
        (ChartType::Candlestick, DataPoint::Ohlc { .. }) => None,
        (ChartType::Candlestick, _) => Some("open"),
        (ChartType::Line | ChartType::Area, DataPoint::Value { .. } | DataPoint::Xy { .. }) => {
            None
        }
        (_, DataPoint::Value { .. }) => None,
        (_, DataPoint::Xy { .. }) => Some("label"),
        (_, DataPoint::Ohlc { .. }) => Some("value"),
    }
}

fn validate_gauge(datasets: &[Dataset], gauge: Option<&GaugeSpec>) -> ChartResult<()> {
    let [dataset] = datasets else {
        return Err(ChartError::InvalidData(
            "gauge charts take exactly one dataset".to_owned(),
        ));
    };
    let mismatch = |index, field| ChartError::SchemaMismatch {
        chart_type: ChartType::Gauge.as_str(),
        dataset: dataset.name.clone(),
        index,
        field,
    };

    let points = dataset.series.points();
    if points.len() != 1 {
        return Err(ChartError::InvalidData(format!(
            "gauge dataset `{}` must hold a single value, found {}",
            dataset.name,
            points.len()
        )));
    }
    let value = match &points[0] {
        DataPoint::Value {
            value: Some(value), ..
        } => *value,
        _ => return Err(mismatch(0, "value")),
    };

    let Some(spec) = gauge else {
        return Err(mismatch(0, "max"));
    };
    if spec.thresholds.is_empty() {
        return Err(mismatch(0, "thresholds"));
    }
    if !spec.max.is_finite() || spec.max <= 0.0 {
        return Err(ChartError::InvalidData(
            "gauge max must be finite and > 0".to_owned(),
        ));
    }
    if !(0.0..=spec.max).contains(&value) {
        return Err(ChartError::InvalidData(format!(
            "gauge value {value} is outside 0..={}",
            spec.max
        )));
    }
    if spec.thresholds.iter().any(|t| !t.below_ratio.is_finite()) {
        return Err(ChartError::InvalidData(
            "gauge threshold ratios must be finite".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_without_radius_names_r() {
        assert_eq!(
            missing_field(ChartType::Bubble, &DataPoint::xy(1.0, 2.0)),
            Some("r")
        );
        assert_eq!(
            missing_field(ChartType::Bubble, &DataPoint::bubble(1.0, 2.0, 3.0)),
            None
        );
    }

    #[test]
    fn category_charts_reject_xy_points() {
        assert_eq!(
            missing_field(ChartType::Pie, &DataPoint::xy(1.0, 2.0)),
            Some("label")
        );
        assert_eq!(
            missing_field(ChartType::Line, &DataPoint::xy(1.0, 2.0)),
            None
        );
        assert_eq!(
            missing_field(ChartType::Candlestick, &DataPoint::value("a", 1.0)),
            Some("open")
        );
    }
}
