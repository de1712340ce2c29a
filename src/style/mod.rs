//! Static, read-only style catalogue.
//!
//! Every lookup is by exact key. Unknown keys are hard errors so generated
//! configurations stay deterministic.

mod accessibility;
mod breakpoints;
mod palettes;
mod selection;
mod themes;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub use accessibility::{ACCESSIBILITY_PRESETS, AccessibilityPreset, accessibility_preset};
pub use breakpoints::{BREAKPOINTS, Breakpoint, LegendPosition, breakpoint};
pub use palettes::{PALETTES, Palette, palette};
pub use selection::{StyleRequest, StyleSelection};
pub use themes::{THEMES, Theme, theme};

/// Registry section a key was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Theme,
    Palette,
    Accessibility,
    Breakpoint,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Theme => "theme",
            Self::Palette => "palette",
            Self::Accessibility => "accessibility preset",
            Self::Breakpoint => "breakpoint",
        })
    }
}

fn lookup<T>(
    entries: &'static [T],
    key: &str,
    kind: StyleKind,
    name: impl Fn(&T) -> &str,
) -> ChartResult<&'static T> {
    entries
        .iter()
        .find(|entry| name(entry) == key)
        .ok_or_else(|| ChartError::UnknownStyleKey {
            kind,
            key: key.to_owned(),
        })
}
