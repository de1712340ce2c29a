use thiserror::Error;

use crate::style::StyleKind;

pub type ChartResult<T> = Result<T, ChartError>;

/// Coarse taxonomy bucket of a [`ChartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InputValidation,
    SchemaMismatch,
    ConfigurationConflict,
    ParameterValidation,
    Serialization,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("input sequence is empty")]
    EmptyInput,

    #[error("element at index {index} is not numeric: {found}")]
    NonNumericInput { index: usize, found: String },

    #[error("dataset `{dataset}` has no points")]
    EmptyDataset { dataset: String },

    #[error("duplicate category label `{label}`")]
    DuplicateLabel { label: String },

    #[error("time axis is not monotonic at index {index}")]
    UnorderedTimeAxis { index: usize },

    #[error("invalid ISO-8601 timestamp at index {index}: `{value}`")]
    InvalidTimestamp { index: usize, value: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported chart type `{0}`")]
    UnsupportedChartType(String),

    #[error(
        "{chart_type} chart: dataset `{dataset}` point {index} is missing required field `{field}`"
    )]
    SchemaMismatch {
        chart_type: &'static str,
        dataset: String,
        index: usize,
        field: &'static str,
    },

    #[error("palette `{palette}` has {available} colors but {required} are required")]
    PaletteExhausted {
        palette: String,
        available: usize,
        required: usize,
    },

    #[error("color slot {slot} for `{dataset}` does not exist in palette `{palette}`")]
    UnresolvedColor {
        dataset: String,
        slot: usize,
        palette: String,
    },

    #[error("cannot merge `{found}` configuration at position {index} into `{expected}`")]
    IncompatibleMerge {
        expected: String,
        found: String,
        index: usize,
    },

    #[error("unknown {kind} key `{key}`")]
    UnknownStyleKey { kind: StyleKind, key: String },

    #[error("axis `{axis}` references unknown dataset `{dataset}`")]
    UnknownAxisDataset { axis: String, dataset: String },

    #[error("axis `{0}` is declared more than once or uses a reserved id")]
    DuplicateAxis(String),

    #[error("invalid moving-average window {window} for series of length {len}")]
    InvalidWindow { window: usize, len: usize },

    #[error("unknown comparator `{0}`")]
    UnknownComparator(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ChartError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput
            | Self::NonNumericInput { .. }
            | Self::EmptyDataset { .. }
            | Self::DuplicateLabel { .. }
            | Self::UnorderedTimeAxis { .. }
            | Self::InvalidTimestamp { .. }
            | Self::InvalidData(_) => ErrorCategory::InputValidation,
            Self::UnsupportedChartType(_) | Self::SchemaMismatch { .. } => {
                ErrorCategory::SchemaMismatch
            }
            Self::PaletteExhausted { .. }
            | Self::UnresolvedColor { .. }
            | Self::IncompatibleMerge { .. }
            | Self::UnknownStyleKey { .. }
            | Self::UnknownAxisDataset { .. }
            | Self::DuplicateAxis(_) => ErrorCategory::ConfigurationConflict,
            Self::InvalidWindow { .. } | Self::UnknownComparator(_) => {
                ErrorCategory::ParameterValidation
            }
            Self::Serialization(_) => ErrorCategory::Serialization,
        }
    }
}
