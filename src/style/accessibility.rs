use crate::error::ChartResult;

use super::{StyleKind, lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityPreset {
    pub name: &'static str,
    pub keyboard_navigation: bool,
    pub screen_reader_announcements: bool,
    /// Id of the element holding the long-form chart description.
    pub described_by: &'static str,
}

pub static ACCESSIBILITY_PRESETS: &[AccessibilityPreset] = &[
    AccessibilityPreset {
        name: "full",
        keyboard_navigation: true,
        screen_reader_announcements: true,
        described_by: "chart-description",
    },
    AccessibilityPreset {
        name: "keyboard_only",
        keyboard_navigation: true,
        screen_reader_announcements: false,
        described_by: "chart-description",
    },
    AccessibilityPreset {
        name: "screen_reader",
        keyboard_navigation: false,
        screen_reader_announcements: true,
        described_by: "chart-description",
    },
];

pub fn accessibility_preset(key: &str) -> ChartResult<&'static AccessibilityPreset> {
    lookup(ACCESSIBILITY_PRESETS, key, StyleKind::Accessibility, |p| {
        p.name
    })
}
