use serde::{Deserialize, Serialize};

use crate::style::LegendPosition;

use super::document::{AxisPosition, Easing, TimeUnit, TooltipMode, ZoomMode};

/// Secondary value axis and the datasets plotted against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisAssignment {
    pub id: String,
    #[serde(default = "default_axis_position")]
    pub position: AxisPosition,
    pub datasets: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl AxisAssignment {
    #[must_use]
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        position: AxisPosition,
        datasets: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            datasets: datasets.into_iter().map(Into::into).collect(),
            title: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TooltipOptions {
    pub mode: TooltipMode,
    #[serde(default)]
    pub show_percentages: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoomOptions {
    #[serde(default = "default_true")]
    pub zoom: bool,
    #[serde(default = "default_true")]
    pub pan: bool,
    #[serde(default = "default_zoom_mode")]
    pub mode: ZoomMode,
}

/// Statistical reference line drawn over the first dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Mean,
    Median,
    /// Two lines at `mean ± std_dev`.
    StdDevBand,
}

/// Annotation request; colors are palette slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationSpec {
    Line {
        #[serde(default = "default_annotation_axis")]
        axis: String,
        value: f64,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        color_slot: usize,
    },
    Box {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        #[serde(default)]
        color_slot: usize,
    },
    Label {
        x: f64,
        y: f64,
        content: String,
        #[serde(default)]
        color_slot: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationOptions {
    pub duration_ms: u32,
    #[serde(default)]
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaugeThreshold {
    /// Applies while `value / max` is below this ratio. The last threshold
    /// also covers every ratio above it.
    pub below_ratio: f64,
    pub color_slot: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GaugeSpec {
    pub max: f64,
    pub thresholds: Vec<GaugeThreshold>,
}

impl GaugeSpec {
    /// Red below 50%, yellow below 80%, green above (vibrant palette slots).
    #[must_use]
    pub fn with_default_thresholds(max: f64) -> Self {
        Self {
            max,
            thresholds: vec![
                GaugeThreshold {
                    below_ratio: 0.5,
                    color_slot: 0,
                },
                GaugeThreshold {
                    below_ratio: 0.8,
                    color_slot: 2,
                },
                GaugeThreshold {
                    below_ratio: 1.0,
                    color_slot: 3,
                },
            ],
        }
    }
}

/// Optional enrichments applied by the composer.
///
/// Every field defaults to "off" so a default-constructed value produces a
/// minimal document. Unknown fields are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeOptions {
    pub title: Option<String>,
    pub legend_position: Option<LegendPosition>,
    pub hide_legend: bool,
    pub stacked: bool,
    pub horizontal: bool,
    pub begin_at_zero: bool,
    pub smooth: bool,
    pub fill: Option<bool>,
    pub cutout_percent: Option<u8>,
    pub maintain_aspect_ratio: Option<bool>,
    pub time_unit: Option<TimeUnit>,
    pub axes: Vec<AxisAssignment>,
    pub tooltip: Option<TooltipOptions>,
    pub zoom: Option<ZoomOptions>,
    pub overlays: Vec<Overlay>,
    pub annotations: Vec<AnnotationSpec>,
    pub animation: Option<AnimationOptions>,
    pub max_data_points: Option<usize>,
    pub gauge: Option<GaugeSpec>,
    pub cycle_colors: bool,
}

impl ComposeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = Some(position);
        self
    }

    #[must_use]
    pub fn with_hidden_legend(mut self) -> Self {
        self.hide_legend = true;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Bars grow along the x axis (`indexAxis: "y"`).
    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = begin_at_zero;
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_cutout_percent(mut self, percent: u8) -> Self {
        self.cutout_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisAssignment) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, mode: TooltipMode, show_percentages: bool) -> Self {
        self.tooltip = Some(TooltipOptions {
            mode,
            show_percentages,
        });
        self
    }

    #[must_use]
    pub fn with_zoom_pan(mut self, zoom: bool, pan: bool, mode: ZoomMode) -> Self {
        self.zoom = Some(ZoomOptions { zoom, pan, mode });
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        if !self.overlays.contains(&overlay) {
            self.overlays.push(overlay);
        }
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, duration_ms: u32, easing: Easing) -> Self {
        self.animation = Some(AnimationOptions {
            duration_ms,
            easing,
        });
        self
    }

    /// Marks the document for streaming consumers that keep a bounded window.
    #[must_use]
    pub fn with_max_data_points(mut self, max: usize) -> Self {
        self.max_data_points = Some(max);
        self
    }

    #[must_use]
    pub fn with_gauge(mut self, gauge: GaugeSpec) -> Self {
        self.gauge = Some(gauge);
        self
    }

    /// Reuse palette colors cyclically instead of failing on exhaustion.
    #[must_use]
    pub fn with_color_cycling(mut self, cycle: bool) -> Self {
        self.cycle_colors = cycle;
        self
    }
}

fn default_axis_position() -> AxisPosition {
    AxisPosition::Right
}

fn default_true() -> bool {
    true
}

fn default_zoom_mode() -> ZoomMode {
    ZoomMode::Xy
}

fn default_annotation_axis() -> String {
    "y".to_owned()
}
