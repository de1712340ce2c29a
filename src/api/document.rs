//! Serde model of the Chart.js configuration document.
//!
//! Field names and nesting follow the Chart.js schema (`type`, `data`,
//! `options.scales`, `options.plugins`, ...). Optional fields are omitted from
//! the output when unset so composed documents stay minimal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::WireType;
use crate::style::LegendPosition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub kind: WireType,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria: Option<AriaAnnotation>,
    #[serde(
        default,
        rename = "responsive_breakpoints",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub responsive_breakpoints: IndexMap<String, BreakpointRule>,
    #[serde(
        default,
        rename = "maxDataPoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_data_points: Option<usize>,
}

impl ChartConfiguration {
    /// Bare document with default options and no style binding.
    #[must_use]
    pub fn new(kind: WireType, data: ChartData) -> Self {
        Self {
            kind,
            data,
            options: ChartOptions::default(),
            style: None,
            aria: None,
            responsive_breakpoints: IndexMap::new(),
            max_data_points: None,
        }
    }

    /// Ids of every y axis referenced by a dataset.
    pub fn referenced_axes(&self) -> impl Iterator<Item = &str> {
        self.data
            .datasets
            .iter()
            .filter_map(|dataset| dataset.y_axis_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetConfig {
    pub label: String,
    pub data: DataValues,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<WireType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circumference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Dataset payload. `null` entries are gaps, never zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValues {
    Scalars(Vec<Option<f64>>),
    /// Floating bars as `[start, end]`.
    Ranges(Vec<Option<[f64; 2]>>),
    Points(Vec<PointValue>),
}

impl Default for DataValues {
    fn default() -> Self {
        Self::Scalars(Vec::new())
    }
}

impl DataValues {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalars(values) => values.len(),
            Self::Ranges(values) => values.len(),
            Self::Points(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointValue {
    pub x: f64,
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    PerPoint(Vec<String>),
    Gradient(GradientColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientColor {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Plugins::is_empty")]
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub scales: IndexMap<String, ScaleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationConfig>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub animations: IndexMap<String, PropertyAnimation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<ZoomPluginConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a11y: Option<A11yConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<AnnotationPlugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler: Option<FillerConfig>,
}

impl Plugins {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.legend.is_none()
            && self.tooltip.is_none()
            && self.zoom.is_none()
            && self.a11y.is_none()
            && self.annotation.is_none()
            && self.filler.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    pub display: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub font: FontSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    Index,
    Dataset,
    Point,
    Nearest,
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TooltipMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub callbacks: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    X,
    Y,
    Xy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomPluginConfig {
    pub zoom: ZoomToggle,
    pub pan: PanToggle,
    pub limits: IndexMap<String, AxisLimit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomToggle {
    pub enabled: bool,
    pub mode: ZoomMode,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanToggle {
    pub enabled: bool,
    pub mode: ZoomMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLimit {
    pub min: String,
    pub max: String,
}

impl AxisLimit {
    /// Limits pinned to the original data range.
    #[must_use]
    pub fn original() -> Self {
        Self {
            min: "original".to_owned(),
            max: "original".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct A11yConfig {
    pub enabled: bool,
    pub keyboard_navigation: bool,
    pub screen_reader_announcements: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPlugin {
    pub annotations: IndexMap<String, Annotation>,
}

/// Entry of the annotation plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Annotation {
    #[serde(rename_all = "camelCase")]
    Line {
        #[serde(rename = "scaleID")]
        scale_id: String,
        value: f64,
        border_color: String,
        border_width: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<AnnotationLabel>,
    },
    #[serde(rename_all = "camelCase")]
    Box {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        background_color: String,
        border_color: String,
    },
    #[serde(rename_all = "camelCase")]
    Label {
        x_value: f64,
        y_value: f64,
        content: String,
        color: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationLabel {
    pub display: bool,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillerConfig {
    pub propagate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
    Category,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ScaleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TicksConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConfig {
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicksConfig {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionConfig {
    pub mode: TooltipMode,
    pub intersect: bool,
}

/// Closed set of supported easing functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    #[default]
    EaseInOutQuart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration: u32,
    pub easing: Easing,
    pub delay: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyAnimation {
    pub duration: u32,
    pub easing: Easing,
    pub from: f64,
    pub to: f64,
    #[serde(rename = "loop")]
    pub repeat: bool,
}

/// Theme and palette the document was composed with.
///
/// Data colors resolve against `palette`. Slice borders and the gauge
/// remainder use the theme colors carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBinding {
    pub theme: String,
    pub palette: String,
    pub background_color: String,
    pub text_color: String,
    pub grid_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaAnnotation {
    pub label: String,
    pub described_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    pub options: BreakpointOverrides,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointOverrides {
    pub plugins: BreakpointPlugins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointPlugins {
    pub legend: LegendOverride,
    pub title: TitleOverride,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOverride {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOverride {
    pub font: FontSpec,
}
