use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{StyleKind, lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Responsive tier with its legend/title policy. Width bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub legend_position: LegendPosition,
    pub title_font_size: u32,
}

impl Breakpoint {
    #[must_use]
    pub fn contains(&self, width_px: u32) -> bool {
        self.min_width.is_none_or(|min| width_px >= min)
            && self.max_width.is_none_or(|max| width_px <= max)
    }
}

pub static BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint {
        name: "mobile",
        min_width: None,
        max_width: Some(480),
        legend_position: LegendPosition::Bottom,
        title_font_size: 14,
    },
    Breakpoint {
        name: "tablet",
        min_width: Some(481),
        max_width: Some(768),
        legend_position: LegendPosition::Top,
        title_font_size: 16,
    },
    Breakpoint {
        name: "desktop",
        min_width: Some(769),
        max_width: None,
        legend_position: LegendPosition::Right,
        title_font_size: 18,
    },
];

pub fn breakpoint(key: &str) -> ChartResult<&'static Breakpoint> {
    lookup(BREAKPOINTS, key, StyleKind::Breakpoint, |b| b.name)
}
