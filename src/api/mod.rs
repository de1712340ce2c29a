mod compose_options;
mod composer;
pub mod document;
mod json_contract;
mod merge;
pub mod operations;
pub mod presets;
mod validation;

pub use compose_options::{
    AnimationOptions, AnnotationSpec, AxisAssignment, ComposeOptions, GaugeSpec, GaugeThreshold,
    Overlay, TooltipOptions, ZoomOptions,
};
pub use composer::{ConfigComposer, compose_configuration};
pub use document::{
    AxisPosition, ChartConfiguration, ColorValue, DataValues, DatasetConfig, Easing, ScaleConfig,
    TimeUnit, TooltipMode, ZoomMode,
};
pub use json_contract::{CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigurationJsonContractV1};
pub use merge::{merge_configurations, merge_datasets};
pub use presets::{HeatmapGrid, funnel, heatmap, templates, waterfall};
