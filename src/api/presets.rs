//! Composite chart kinds expressed through the regular composer.
//!
//! - waterfall: floating `[start, end]` bars, increases and decreases colored
//!   from palette slots 0 and 1
//! - funnel: horizontal bars, one color per stage, legend hidden
//! - heatmap: bubble grid on two category scales, radius scaled by value
//! - templates: small sample bar, line, pie and radar documents

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ChartType, DataPoint, Dataset, Series};
use crate::error::{ChartError, ChartResult};
use crate::style::StyleSelection;

use super::composer::{compose_configuration, ensure_palette_covers};
use super::document::{ChartConfiguration, ColorValue, ScaleType};
use super::ComposeOptions;

const HEATMAP_MIN_RADIUS: f64 = 5.0;
const HEATMAP_RADIUS_SPAN: f64 = 20.0;
const FUNNEL_BORDER_WIDTH: f64 = 2.0;

/// Running-total chart from signed per-step changes.
pub fn waterfall(
    name: &str,
    steps: &Series,
    style: &StyleSelection,
    options: &ComposeOptions,
) -> ChartResult<ChartConfiguration> {
    let mut running = 0.0;
    let mut bars = Vec::with_capacity(steps.len());
    for (index, point) in steps.points().iter().enumerate() {
        let (Some(label), Some(delta)) = (point.label(), point.scalar()) else {
            return Err(ChartError::NonNumericInput {
                index,
                found: "undefined or unlabeled step".to_owned(),
            });
        };
        let start = running;
        running += delta;
        bars.push(DataPoint::Ohlc {
            label: label.to_owned(),
            open: start,
            high: start.max(running),
            low: start.min(running),
            close: running,
        });
    }
    let bars = Series::new(steps.axis(), bars)?;
    compose_configuration(
        ChartType::Candlestick,
        &[Dataset::new(name, bars)],
        style,
        options,
    )
}

/// Horizontal bar funnel, one palette color per stage.
pub fn funnel(
    name: &str,
    stages: &Series,
    style: &StyleSelection,
    options: &ComposeOptions,
) -> ChartResult<ChartConfiguration> {
    let options = options.clone().with_horizontal(true).with_hidden_legend();
    let mut config = compose_configuration(
        ChartType::Bar,
        &[Dataset::new(name, stages.clone())],
        style,
        &options,
    )?;

    let values = stages.scalars();
    if values
        .windows(2)
        .any(|pair| matches!(pair, [Some(a), Some(b)] if b > a))
    {
        warn!(funnel = name, "funnel stages are not in descending order");
    }

    let palette = style.palette();
    let stage_count = config.data.labels.len();
    ensure_palette_covers(palette, stage_count, options.cycle_colors)?;
    for dataset in config.data.datasets.iter_mut() {
        dataset.background_color = Some(ColorValue::PerPoint(
            (0..stage_count)
                .map(|slot| palette.cyclic(slot).to_owned())
                .collect(),
        ));
        dataset.border_color = Some(ColorValue::Single(
            style.theme().background_color.to_owned(),
        ));
        dataset.border_width = Some(FUNNEL_BORDER_WIDTH);
    }
    Ok(config)
}

/// Matrix of non-negative values laid out on named rows and columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatmapGrid {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    /// One row per y label, one column per x label.
    pub values: Vec<Vec<f64>>,
}

/// Bubble grid where radius grows linearly with the cell value.
pub fn heatmap(
    name: &str,
    grid: &HeatmapGrid,
    style: &StyleSelection,
    options: &ComposeOptions,
) -> ChartResult<ChartConfiguration> {
    if grid.values.is_empty() || grid.x_labels.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    if grid.values.len() != grid.y_labels.len()
        || grid.values.iter().any(|row| row.len() != grid.x_labels.len())
    {
        return Err(ChartError::InvalidData(format!(
            "heatmap grid must be {} rows by {} columns",
            grid.y_labels.len(),
            grid.x_labels.len()
        )));
    }

    let cells = grid.values.iter().flatten().copied();
    if let Some(index) = cells.clone().position(|v| !v.is_finite()) {
        return Err(ChartError::NonNumericInput {
            index,
            found: "non-finite cell".to_owned(),
        });
    }
    if cells.clone().any(|v| v < 0.0) {
        return Err(ChartError::InvalidData(
            "heatmap values must be non-negative".to_owned(),
        ));
    }
    let max = cells.fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Err(ChartError::InvalidData(
            "heatmap needs at least one positive value".to_owned(),
        ));
    }

    let points = grid
        .values
        .iter()
        .enumerate()
        .flat_map(|(row, values)| {
            values.iter().enumerate().map(move |(column, value)| {
                DataPoint::bubble(
                    column as f64,
                    row as f64,
                    value / max * HEATMAP_RADIUS_SPAN + HEATMAP_MIN_RADIUS,
                )
            })
        })
        .collect();
    let mut config = compose_configuration(
        ChartType::Bubble,
        &[Dataset::new(name, Series::linear(points)?)],
        style,
        options,
    )?;

    for (axis, labels) in [("x", &grid.x_labels), ("y", &grid.y_labels)] {
        let scale = config.options.scales.entry(axis.to_owned()).or_default();
        scale.kind = Some(ScaleType::Category);
        scale.labels = Some(labels.clone());
        scale.offset = Some(true);
        scale.begin_at_zero = None;
    }
    Ok(config)
}

struct Template {
    key: &'static str,
    chart_type: ChartType,
    dataset: &'static str,
    labels: &'static [&'static str],
    values: &'static [f64],
}

static TEMPLATES: &[Template] = &[
    Template {
        key: "bar",
        chart_type: ChartType::Bar,
        dataset: "# of Votes",
        labels: &["Red", "Blue", "Yellow", "Green", "Purple", "Orange"],
        values: &[12.0, 19.0, 3.0, 5.0, 2.0, 3.0],
    },
    Template {
        key: "line",
        chart_type: ChartType::Line,
        dataset: "Monthly Sales",
        labels: &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        values: &[65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
    },
    Template {
        key: "pie",
        chart_type: ChartType::Pie,
        dataset: "Browser Share",
        labels: &["Chrome", "Firefox", "Safari", "Edge", "Other"],
        values: &[60.0, 20.0, 10.0, 5.0, 5.0],
    },
    Template {
        key: "radar",
        chart_type: ChartType::Radar,
        dataset: "Product A",
        labels: &["Speed", "Reliability", "Comfort", "Safety", "Efficiency"],
        values: &[80.0, 90.0, 70.0, 85.0, 75.0],
    },
];

/// Sample documents for the common chart types, keyed by chart name.
///
/// Each one is composed with `style`, so the samples follow the caller's
/// theme and palette. Lines are smoothed.
pub fn templates(
    style: &StyleSelection,
) -> ChartResult<IndexMap<&'static str, ChartConfiguration>> {
    let mut out = IndexMap::with_capacity(TEMPLATES.len());
    for template in TEMPLATES {
        let series = Series::categorical(
            template
                .labels
                .iter()
                .copied()
                .zip(template.values.iter().copied()),
        )?;
        let options = ComposeOptions::new()
            .with_smooth(template.chart_type == ChartType::Line)
            .with_title(template.dataset);
        let config = compose_configuration(
            template.chart_type,
            &[Dataset::new(template.dataset, series)],
            style,
            &options,
        )?;
        out.insert(template.key, config);
    }
    debug!(
        templates = out.len(),
        theme = style.theme().name,
        "composed chart templates"
    );
    Ok(out)
}
