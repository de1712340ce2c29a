use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart types the composer understands.
///
/// Several types are rendered through a different Chart.js primitive, see
/// [`ChartType::wire_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Bubble,
    Scatter,
    Candlestick,
    Gauge,
}

impl ChartType {
    pub const ALL: [Self; 11] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Pie,
        Self::Doughnut,
        Self::Radar,
        Self::PolarArea,
        Self::Bubble,
        Self::Scatter,
        Self::Candlestick,
        Self::Gauge,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
            Self::Scatter => "scatter",
            Self::Candlestick => "candlestick",
            Self::Gauge => "gauge",
        }
    }

    /// Chart.js `type` the configuration is emitted as.
    #[must_use]
    pub fn wire_type(self) -> WireType {
        match self {
            Self::Bar | Self::Candlestick => WireType::Bar,
            Self::Line | Self::Area => WireType::Line,
            Self::Pie => WireType::Pie,
            Self::Doughnut | Self::Gauge => WireType::Doughnut,
            Self::Radar => WireType::Radar,
            Self::PolarArea => WireType::PolarArea,
            Self::Bubble => WireType::Bubble,
            Self::Scatter => WireType::Scatter,
        }
    }

    /// Charts where every point (slice) receives its own palette color.
    #[must_use]
    pub fn colors_per_point(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut | Self::PolarArea)
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.as_str() == input)
            .ok_or_else(|| ChartError::UnsupportedChartType(input.to_owned()))
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart.js native chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Bubble,
    Scatter,
}

impl WireType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
            Self::Scatter => "scatter",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
