use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace, warn};

use crate::core::types::parse_instant;
use crate::core::{AxisKind, ChartType, DataPoint, Dataset, PointShape, StatisticsSummary, WireType};
use crate::error::{ChartError, ChartResult};
use crate::style::{Palette, StyleSelection};

use super::document::{
    A11yConfig, AnimationConfig, Annotation, AnnotationLabel, AnnotationPlugin, AriaAnnotation,
    AxisLimit, AxisPosition, AxisTitle, BreakpointOverrides, BreakpointPlugins, BreakpointRule,
    ChartConfiguration, ChartData, ColorValue, DataValues, DatasetConfig, FillerConfig, FontSpec,
    GradientColor, GradientKind, GridConfig, IndexAxis, InteractionConfig, LegendConfig,
    LegendLabels, LegendOverride, PanToggle, PointValue, PropertyAnimation, ScaleConfig,
    ScaleType, StyleBinding, TicksConfig, TimeConfig, TitleConfig, TitleOverride, TooltipConfig,
    ZoomPluginConfig, ZoomToggle,
};
use super::validation::{validate_axes, validate_datasets, validate_shapes};
use super::{AnnotationSpec, ComposeOptions, Overlay};

const SMOOTH_TENSION: f64 = 0.4;
const TITLE_FONT_SIZE: u32 = 18;
const GAUGE_CUTOUT_PERCENT: u8 = 75;
const ZOOM_SPEED: f64 = 0.1;
const SLICE_BORDER_WIDTH: f64 = 2.0;
const OVERLAY_BORDER_WIDTH: f64 = 2.0;
const ANNOTATION_BORDER_WIDTH: f64 = 2.0;
const MEAN_DASH: [u32; 2] = [5, 5];
const MEDIAN_DASH: [u32; 2] = [10, 5];
const BAND_DASH: [u32; 2] = [2, 2];

const VALUE_LABEL_CALLBACK: &str =
    "function(context) { return context.dataset.label + ': ' + context.formattedValue; }";
const PERCENT_LABEL_CALLBACK: &str = "function(context) { \
const total = context.dataset.data.reduce((sum, v) => sum + (typeof v === 'number' ? v : 0), 0); \
return total ? '(' + (context.raw / total * 100).toFixed(1) + '%)' : ''; }";

/// Builder front-end over [`compose_configuration`].
#[derive(Debug, Clone)]
pub struct ConfigComposer {
    chart_type: ChartType,
    datasets: Vec<Dataset>,
    options: ComposeOptions,
}

impl ConfigComposer {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            datasets: Vec::new(),
            options: ComposeOptions::default(),
        }
    }

    #[must_use]
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn datasets(mut self, datasets: impl IntoIterator<Item = Dataset>) -> Self {
        self.datasets.extend(datasets);
        self
    }

    #[must_use]
    pub fn options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn compose(&self, style: &StyleSelection) -> ChartResult<ChartConfiguration> {
        compose_configuration(self.chart_type, &self.datasets, style, &self.options)
    }
}

/// Composes a Chart.js document.
///
/// Datasets are validated against the chart type before anything is built.
/// Colors are resolved only after every dataset is attached, so the result
/// never mixes colors from two palettes.
pub fn compose_configuration(
    chart_type: ChartType,
    datasets: &[Dataset],
    style: &StyleSelection,
    options: &ComposeOptions,
) -> ChartResult<ChartConfiguration> {
    validate_datasets(datasets)?;
    validate_axes(chart_type, &options.axes, datasets)?;
    validate_shapes(chart_type, datasets, options.gauge.as_ref())?;
    debug!(
        chart_type = %chart_type,
        datasets = datasets.len(),
        theme = style.theme().name,
        palette = style.palette().name,
        "composing chart configuration"
    );

    let mut config = if chart_type == ChartType::Gauge {
        gauge_document(datasets, style, options)?
    } else {
        let mut config = data_document(chart_type, datasets, options);
        apply_palette(&mut config, chart_type, datasets, style, options.cycle_colors)?;
        apply_scales(&mut config, chart_type, datasets, options);
        apply_axes(&mut config, options);
        config
    };

    apply_layout(&mut config, chart_type, options)?;
    apply_interaction(&mut config, options);
    apply_overlays(&mut config, datasets, style.palette(), options)?;
    apply_annotations(&mut config, style.palette(), options)?;
    apply_animation(&mut config, options);
    apply_theme(&mut config, style);
    apply_accessibility(&mut config, style, options);
    apply_breakpoints(&mut config, style);
    config.max_data_points = options.max_data_points;

    debug!(
        wire_type = %config.kind,
        labels = config.data.labels.len(),
        datasets = config.data.datasets.len(),
        scales = config.options.scales.len(),
        "chart configuration composed"
    );
    Ok(config)
}

pub(super) fn resolve_slot(palette: &Palette, owner: &str, slot: usize) -> ChartResult<&'static str> {
    palette.color(slot).ok_or_else(|| ChartError::UnresolvedColor {
        dataset: owner.to_owned(),
        slot,
        palette: palette.name.to_owned(),
    })
}

pub(super) fn ensure_palette_covers(
    palette: &Palette,
    required: usize,
    cycle_colors: bool,
) -> ChartResult<()> {
    if required <= palette.len() {
        return Ok(());
    }
    if !cycle_colors {
        return Err(ChartError::PaletteExhausted {
            palette: palette.name.to_owned(),
            available: palette.len(),
            required,
        });
    }
    warn!(
        palette = palette.name,
        available = palette.len(),
        required,
        "palette exhausted, reusing colors cyclically"
    );
    Ok(())
}

fn shared_labels(datasets: &[Dataset]) -> Vec<String> {
    let unique: IndexSet<&str> = datasets.iter().flat_map(|d| d.series.labels()).collect();
    let mut labels: Vec<String> = unique.into_iter().map(str::to_owned).collect();
    if datasets
        .iter()
        .any(|d| d.series.axis() == AxisKind::Temporal)
    {
        labels.sort_by_key(|label| parse_instant(label));
    }
    labels
}

/// Values of `dataset` at each shared label, `None` where it has no point.
fn align<T>(
    labels: &[String],
    dataset: &Dataset,
    extract: impl Fn(&DataPoint) -> Option<T>,
) -> Vec<Option<T>> {
    let by_label: IndexMap<&str, &DataPoint> = dataset
        .series
        .points()
        .iter()
        .filter_map(|point| point.label().map(|label| (label, point)))
        .collect();
    labels
        .iter()
        .map(|label| by_label.get(label.as_str()).and_then(|point| extract(point)))
        .collect()
}

fn data_document(
    chart_type: ChartType,
    datasets: &[Dataset],
    options: &ComposeOptions,
) -> ChartConfiguration {
    let labels = shared_labels(datasets);
    let configs = datasets
        .iter()
        .map(|dataset| dataset_config(chart_type, dataset, &labels, options))
        .collect();
    ChartConfiguration::new(
        chart_type.wire_type(),
        ChartData {
            labels,
            datasets: configs,
        },
    )
}

fn dataset_config(
    chart_type: ChartType,
    dataset: &Dataset,
    labels: &[String],
    options: &ComposeOptions,
) -> DatasetConfig {
    let data = match dataset.series.shape() {
        Some(PointShape::Xy) => DataValues::Points(
            dataset
                .series
                .points()
                .iter()
                .filter_map(|point| match point {
                    DataPoint::Xy { x, y, r } => Some(PointValue {
                        x: *x,
                        y: *y,
                        r: *r,
                    }),
                    _ => None,
                })
                .collect(),
        ),
        Some(PointShape::Ohlc) => DataValues::Ranges(align(labels, dataset, |point| match point {
            DataPoint::Ohlc { low, high, .. } => Some([*low, *high]),
            _ => None,
        })),
        _ => DataValues::Scalars(align(labels, dataset, DataPoint::scalar)),
    };

    let effective = dataset.hints.render_as.unwrap_or(chart_type);
    let line_like = matches!(
        effective,
        ChartType::Line | ChartType::Area | ChartType::Radar
    );
    let fill = dataset
        .hints
        .fill
        .or(options.fill.filter(|_| line_like))
        .or((effective == ChartType::Area).then_some(true));
    let tension = dataset
        .hints
        .tension
        .or((options.smooth && line_like).then_some(SMOOTH_TENSION));

    DatasetConfig {
        label: dataset.name.clone(),
        data,
        kind: dataset
            .hints
            .render_as
            .map(ChartType::wire_type)
            .filter(|wire| *wire != chart_type.wire_type()),
        fill,
        tension,
        ..DatasetConfig::default()
    }
}

/// Colors every data series from the bound palette.
///
/// Slice borders take the bound theme's background color instead of a
/// palette slot.
fn apply_palette(
    config: &mut ChartConfiguration,
    chart_type: ChartType,
    datasets: &[Dataset],
    style: &StyleSelection,
    cycle_colors: bool,
) -> ChartResult<()> {
    let palette = style.palette();
    let label_count = config.data.labels.len();
    let per_point = chart_type.colors_per_point();
    let required = if per_point {
        datasets
            .iter()
            .map(|d| d.hints.color_slot.unwrap_or(0) + label_count)
            .max()
            .unwrap_or(0)
    } else if chart_type == ChartType::Candlestick {
        2
    } else {
        datasets.len()
    };
    ensure_palette_covers(palette, required, cycle_colors)?;

    for (index, (dataset, out)) in datasets
        .iter()
        .zip(config.data.datasets.iter_mut())
        .enumerate()
    {
        let resolve = |slot| resolve_slot(palette, &dataset.name, slot);

        if let Some((start, end)) = dataset.hints.gradient_slots {
            let (start, end) = (resolve(start)?, resolve(end)?);
            out.background_color = Some(ColorValue::Gradient(GradientColor {
                kind: GradientKind::Gradient,
                colors: vec![start.to_owned(), end.to_owned()],
            }));
            out.border_color = Some(ColorValue::Single(start.to_owned()));
            continue;
        }

        if per_point {
            let first = match dataset.hints.color_slot {
                Some(slot) => {
                    resolve(slot)?;
                    slot
                }
                None => 0,
            };
            let colors = (0..label_count)
                .map(|offset| palette.cyclic(first + offset).to_owned())
                .collect();
            out.background_color = Some(ColorValue::PerPoint(colors));
            out.border_color = Some(ColorValue::Single(
                style.theme().background_color.to_owned(),
            ));
            out.border_width = Some(SLICE_BORDER_WIDTH);
            continue;
        }

        if chart_type == ChartType::Candlestick && dataset.hints.render_as.is_none() {
            let colors = align(&config.data.labels, dataset, |point| match point {
                DataPoint::Ohlc { open, close, .. } => Some(close >= open),
                _ => None,
            })
            .into_iter()
            .map(|rising| palette.cyclic(usize::from(!rising.unwrap_or(true))).to_owned())
            .collect::<Vec<_>>();
            out.border_color = Some(ColorValue::PerPoint(colors.clone()));
            out.background_color = Some(ColorValue::PerPoint(colors));
            continue;
        }

        let color = match dataset.hints.color_slot {
            Some(slot) => resolve(slot)?,
            None => palette.cyclic(index),
        };
        out.background_color = Some(ColorValue::Single(color.to_owned()));
        out.border_color = Some(ColorValue::Single(color.to_owned()));
    }
    trace!(palette = palette.name, required, "resolved dataset colors");
    Ok(())
}

fn apply_scales(
    config: &mut ChartConfiguration,
    chart_type: ChartType,
    datasets: &[Dataset],
    options: &ComposeOptions,
) {
    let begin_at_zero = options.begin_at_zero.then_some(true);
    let scales = &mut config.options.scales;
    match chart_type.wire_type() {
        WireType::Bar | WireType::Line => {
            let stacked = options.stacked.then_some(true);
            let mut index_scale = ScaleConfig {
                stacked,
                ..ScaleConfig::default()
            };
            if datasets.iter().any(|d| d.series.axis() == AxisKind::Temporal) {
                index_scale.kind = Some(ScaleType::Time);
                index_scale.time = options.time_unit.map(|unit| TimeConfig { unit });
            } else if datasets.iter().all(|d| d.series.axis() == AxisKind::Linear) {
                index_scale.kind = Some(ScaleType::Linear);
            }
            let value_scale = ScaleConfig {
                stacked,
                begin_at_zero: begin_at_zero.filter(|_| chart_type != ChartType::Candlestick),
                ..ScaleConfig::default()
            };
            let (x, y) = if options.horizontal {
                (value_scale, index_scale)
            } else {
                (index_scale, value_scale)
            };
            scales.insert("x".to_owned(), x);
            scales.insert("y".to_owned(), y);
        }
        WireType::Scatter | WireType::Bubble => {
            scales.insert(
                "x".to_owned(),
                ScaleConfig {
                    kind: Some(ScaleType::Linear),
                    position: Some(AxisPosition::Bottom),
                    ..ScaleConfig::default()
                },
            );
            scales.insert(
                "y".to_owned(),
                ScaleConfig {
                    begin_at_zero,
                    ..ScaleConfig::default()
                },
            );
        }
        WireType::Radar => {
            scales.insert(
                "r".to_owned(),
                ScaleConfig {
                    begin_at_zero,
                    ..ScaleConfig::default()
                },
            );
        }
        WireType::Pie | WireType::Doughnut | WireType::PolarArea => {}
    }
}

fn apply_axes(config: &mut ChartConfiguration, options: &ComposeOptions) {
    for axis in &options.axes {
        config.options.scales.insert(
            axis.id.clone(),
            ScaleConfig {
                kind: Some(ScaleType::Linear),
                display: Some(true),
                position: Some(axis.position),
                begin_at_zero: options.begin_at_zero.then_some(true),
                title: axis.title.clone().map(|text| AxisTitle {
                    display: true,
                    text,
                }),
                grid: Some(GridConfig {
                    color: None,
                    draw_on_chart_area: Some(false),
                }),
                ..ScaleConfig::default()
            },
        );
        for dataset in config
            .data
            .datasets
            .iter_mut()
            .filter(|d| axis.datasets.contains(&d.label))
        {
            dataset.y_axis_id = Some(axis.id.clone());
        }
        trace!(axis = %axis.id, datasets = axis.datasets.len(), "bound secondary axis");
    }
}

fn title_config(text: String) -> TitleConfig {
    TitleConfig {
        display: true,
        text,
        color: None,
        font: FontSpec {
            size: TITLE_FONT_SIZE,
        },
    }
}

fn apply_layout(
    config: &mut ChartConfiguration,
    chart_type: ChartType,
    options: &ComposeOptions,
) -> ChartResult<()> {
    let plugins = &mut config.options.plugins;
    if plugins.title.is_none() {
        plugins.title = options.title.clone().map(title_config);
    }
    plugins.legend = match (options.hide_legend, options.legend_position) {
        (true, _) => Some(LegendConfig {
            display: Some(false),
            ..LegendConfig::default()
        }),
        (false, Some(position)) => Some(LegendConfig {
            display: Some(true),
            position: Some(position),
            labels: None,
        }),
        (false, None) if chart_type == ChartType::Gauge => Some(LegendConfig {
            display: Some(false),
            ..LegendConfig::default()
        }),
        (false, None) => None,
    };
    if chart_type == ChartType::Area {
        plugins.filler = Some(FillerConfig { propagate: false });
    }

    if options.horizontal {
        if chart_type.wire_type() != WireType::Bar {
            return Err(ChartError::InvalidData(format!(
                "horizontal layout applies to bar charts, not {chart_type}"
            )));
        }
        config.options.index_axis = Some(IndexAxis::Y);
    }

    config.options.cutout = match (chart_type, options.cutout_percent) {
        (_, Some(percent)) if percent > 100 => {
            return Err(ChartError::InvalidData(format!(
                "cutout percent {percent} exceeds 100"
            )));
        }
        (ChartType::Doughnut | ChartType::Gauge, Some(percent)) => Some(format!("{percent}%")),
        (ChartType::Gauge, None) => Some(format!("{GAUGE_CUTOUT_PERCENT}%")),
        (_, Some(_)) => {
            return Err(ChartError::InvalidData(format!(
                "cutout applies to doughnut and gauge charts, not {chart_type}"
            )));
        }
        (_, None) => None,
    };
    config.options.maintain_aspect_ratio = options.maintain_aspect_ratio;
    Ok(())
}

fn apply_interaction(config: &mut ChartConfiguration, options: &ComposeOptions) {
    if let Some(tooltip) = options.tooltip {
        let mut callbacks = IndexMap::new();
        callbacks.insert("label".to_owned(), VALUE_LABEL_CALLBACK.to_owned());
        if tooltip.show_percentages {
            callbacks.insert("afterLabel".to_owned(), PERCENT_LABEL_CALLBACK.to_owned());
        }
        config.options.plugins.tooltip = Some(TooltipConfig {
            enabled: true,
            mode: Some(tooltip.mode),
            intersect: Some(false),
            callbacks,
        });
        config.options.interaction = Some(InteractionConfig {
            mode: tooltip.mode,
            intersect: false,
        });
    }

    if let Some(zoom) = options.zoom {
        config.options.plugins.zoom = Some(ZoomPluginConfig {
            zoom: ZoomToggle {
                enabled: zoom.zoom,
                mode: zoom.mode,
                speed: ZOOM_SPEED,
            },
            pan: PanToggle {
                enabled: zoom.pan,
                mode: zoom.mode,
            },
            limits: ["x", "y"]
                .into_iter()
                .map(|axis| (axis.to_owned(), AxisLimit::original()))
                .collect(),
        });
    }
}

fn apply_overlays(
    config: &mut ChartConfiguration,
    datasets: &[Dataset],
    palette: &Palette,
    options: &ComposeOptions,
) -> ChartResult<()> {
    if options.overlays.is_empty() {
        return Ok(());
    }
    let Some(lead) = datasets.first() else {
        return Err(ChartError::EmptyInput);
    };
    if !matches!(config.kind, WireType::Bar | WireType::Line) || config.data.labels.is_empty() {
        return Err(ChartError::InvalidData(
            "statistical overlays need a category or time axis".to_owned(),
        ));
    }

    let summary = StatisticsSummary::from_series(&lead.series)?;
    let mut lines: Vec<(&str, f64, [u32; 2])> = Vec::with_capacity(options.overlays.len() + 1);
    for overlay in &options.overlays {
        match overlay {
            Overlay::Mean => lines.push(("Mean", summary.mean, MEAN_DASH)),
            Overlay::Median => lines.push(("Median", summary.median, MEDIAN_DASH)),
            Overlay::StdDevBand => {
                lines.push(("Mean + 1σ", summary.mean + summary.std_dev, BAND_DASH));
                lines.push(("Mean - 1σ", summary.mean - summary.std_dev, BAND_DASH));
            }
        }
    }

    let first_slot = datasets.len();
    ensure_palette_covers(palette, first_slot + lines.len(), options.cycle_colors)?;

    let width = config.data.labels.len();
    for (offset, (label, value, dash)) in lines.into_iter().enumerate() {
        config.data.datasets.push(DatasetConfig {
            label: label.to_owned(),
            data: DataValues::Scalars(vec![Some(value); width]),
            kind: Some(WireType::Line),
            border_color: Some(ColorValue::Single(
                palette.cyclic(first_slot + offset).to_owned(),
            )),
            border_width: Some(OVERLAY_BORDER_WIDTH),
            border_dash: Some(dash.to_vec()),
            fill: Some(false),
            point_radius: Some(0.0),
            ..DatasetConfig::default()
        });
    }
    trace!(
        overlays = options.overlays.len(),
        dataset = %lead.name,
        mean = summary.mean,
        "attached statistical overlays"
    );
    Ok(())
}

fn apply_annotations(
    config: &mut ChartConfiguration,
    palette: &Palette,
    options: &ComposeOptions,
) -> ChartResult<()> {
    if options.annotations.is_empty() {
        return Ok(());
    }

    let mut annotations = IndexMap::with_capacity(options.annotations.len());
    for (index, spec) in options.annotations.iter().enumerate() {
        let key = format!("annotation{index}");
        let annotation = match spec {
            AnnotationSpec::Line {
                axis,
                value,
                label,
                color_slot,
            } => {
                if !config.options.scales.contains_key(axis) {
                    return Err(ChartError::InvalidData(format!(
                        "{key} references unknown scale `{axis}`"
                    )));
                }
                Annotation::Line {
                    scale_id: axis.clone(),
                    value: *value,
                    border_color: resolve_slot(palette, &key, *color_slot)?.to_owned(),
                    border_width: ANNOTATION_BORDER_WIDTH,
                    label: label.clone().map(|content| AnnotationLabel {
                        display: true,
                        content,
                    }),
                }
            }
            AnnotationSpec::Box {
                x_min,
                x_max,
                y_min,
                y_max,
                color_slot,
            } => {
                let color = resolve_slot(palette, &key, *color_slot)?;
                Annotation::Box {
                    x_min: *x_min,
                    x_max: *x_max,
                    y_min: *y_min,
                    y_max: *y_max,
                    background_color: color.to_owned(),
                    border_color: color.to_owned(),
                }
            }
            AnnotationSpec::Label {
                x,
                y,
                content,
                color_slot,
            } => Annotation::Label {
                x_value: *x,
                y_value: *y,
                content: content.clone(),
                color: resolve_slot(palette, &key, *color_slot)?.to_owned(),
            },
        };
        annotations.insert(key, annotation);
    }
    config.options.plugins.annotation = Some(AnnotationPlugin { annotations });
    Ok(())
}

fn apply_animation(config: &mut ChartConfiguration, options: &ComposeOptions) {
    let Some(animation) = options.animation else {
        return;
    };
    config.options.animation = Some(AnimationConfig {
        duration: animation.duration_ms,
        easing: animation.easing,
        delay: 0,
    });
    if matches!(config.kind, WireType::Line | WireType::Radar) {
        config.options.animations.insert(
            "tension".to_owned(),
            PropertyAnimation {
                duration: animation.duration_ms,
                easing: animation.easing,
                from: 1.0,
                to: 0.0,
                repeat: false,
            },
        );
    }
}

fn apply_theme(config: &mut ChartConfiguration, style: &StyleSelection) {
    let theme = style.theme();
    let plugins = &mut config.options.plugins;
    if let Some(title) = plugins.title.as_mut() {
        title.color = Some(theme.text_color.to_owned());
    }
    if let Some(legend) = plugins
        .legend
        .as_mut()
        .filter(|legend| legend.display != Some(false))
    {
        legend.labels = Some(LegendLabels {
            color: theme.text_color.to_owned(),
        });
    }
    for scale in config.options.scales.values_mut() {
        scale.grid.get_or_insert_with(GridConfig::default).color =
            Some(theme.grid_color.to_owned());
        scale.ticks = Some(TicksConfig {
            color: theme.text_color.to_owned(),
        });
    }
    config.style = Some(StyleBinding {
        theme: theme.name.to_owned(),
        palette: style.palette().name.to_owned(),
        background_color: theme.background_color.to_owned(),
        text_color: theme.text_color.to_owned(),
        grid_color: theme.grid_color.to_owned(),
    });
}

fn apply_accessibility(
    config: &mut ChartConfiguration,
    style: &StyleSelection,
    options: &ComposeOptions,
) {
    let Some(preset) = style.accessibility() else {
        return;
    };
    config.options.plugins.a11y = Some(A11yConfig {
        enabled: true,
        keyboard_navigation: preset.keyboard_navigation,
        screen_reader_announcements: preset.screen_reader_announcements,
    });
    config.aria = Some(AriaAnnotation {
        label: options.title.clone().unwrap_or_else(|| "Chart".to_owned()),
        described_by: preset.described_by.to_owned(),
    });
}

fn apply_breakpoints(config: &mut ChartConfiguration, style: &StyleSelection) {
    if style.breakpoints().is_empty() {
        return;
    }
    config.options.responsive = Some(true);
    config.responsive_breakpoints = style
        .breakpoints()
        .iter()
        .map(|tier| {
            let rule = BreakpointRule {
                min_width: tier.min_width,
                max_width: tier.max_width,
                options: BreakpointOverrides {
                    plugins: BreakpointPlugins {
                        legend: LegendOverride {
                            position: tier.legend_position,
                        },
                        title: TitleOverride {
                            font: FontSpec {
                                size: tier.title_font_size,
                            },
                        },
                    },
                },
            };
            (tier.name.to_owned(), rule)
        })
        .collect();
}

/// Half doughnut: the value slice in a palette threshold color plus a
/// remainder slice in the bound theme's grid color. The remainder is track,
/// not data, and takes no palette slot.
fn gauge_document(
    datasets: &[Dataset],
    style: &StyleSelection,
    options: &ComposeOptions,
) -> ChartResult<ChartConfiguration> {
    let Some(dataset) = datasets.first() else {
        return Err(ChartError::EmptyInput);
    };
    let value = dataset
        .series
        .points()
        .first()
        .and_then(DataPoint::scalar)
        .ok_or_else(|| ChartError::InvalidData("gauge value is undefined".to_owned()))?;
    let spec = options
        .gauge
        .as_ref()
        .ok_or_else(|| ChartError::InvalidData("gauge charts need a gauge spec".to_owned()))?;

    let ratio = value / spec.max;
    let slot = spec
        .thresholds
        .iter()
        .find(|threshold| ratio < threshold.below_ratio)
        .or_else(|| spec.thresholds.last())
        .map(|threshold| threshold.color_slot)
        .ok_or_else(|| ChartError::InvalidData("gauge thresholds are empty".to_owned()))?;
    let color = resolve_slot(style.palette(), &dataset.name, slot)?;
    trace!(value, max = spec.max, ratio, slot, "resolved gauge threshold");

    let mut config = ChartConfiguration::new(
        WireType::Doughnut,
        ChartData {
            labels: vec!["Value".to_owned(), "Remaining".to_owned()],
            datasets: vec![DatasetConfig {
                label: dataset.name.clone(),
                data: DataValues::Scalars(vec![Some(value), Some(spec.max - value)]),
                background_color: Some(ColorValue::PerPoint(vec![
                    color.to_owned(),
                    style.theme().grid_color.to_owned(),
                ])),
                border_width: Some(0.0),
                circumference: Some(180.0),
                rotation: Some(270.0),
                ..DatasetConfig::default()
            }],
        },
    );
    config.options.plugins.title = options
        .title
        .as_ref()
        .map(|title| title_config(format!("{title}: {value}/{}", spec.max)));
    Ok(config)
}
