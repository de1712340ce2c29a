use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ChartResult;

use super::{
    AccessibilityPreset, BREAKPOINTS, Breakpoint, Palette, Theme, accessibility_preset,
    breakpoint, palette, theme,
};

/// Resolved theme + palette + optional accessibility/responsive presets.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSelection {
    theme: &'static Theme,
    palette: &'static Palette,
    accessibility: Option<&'static AccessibilityPreset>,
    breakpoints: SmallVec<[&'static Breakpoint; 3]>,
}

impl StyleSelection {
    pub fn resolve(theme_key: &str, palette_key: &str) -> ChartResult<Self> {
        Ok(Self {
            theme: theme(theme_key)?,
            palette: palette(palette_key)?,
            accessibility: None,
            breakpoints: SmallVec::new(),
        })
    }

    /// Theme paired with its default palette.
    pub fn for_theme(theme_key: &str) -> ChartResult<Self> {
        let theme = theme(theme_key)?;
        Self::resolve(theme.name, theme.default_palette)
    }

    pub fn with_accessibility(mut self, preset_key: &str) -> ChartResult<Self> {
        self.accessibility = Some(accessibility_preset(preset_key)?);
        Ok(self)
    }

    /// Binds the named responsive tiers, in registry order, without duplicates.
    pub fn with_breakpoints<S: AsRef<str>>(mut self, keys: &[S]) -> ChartResult<Self> {
        let mut resolved = SmallVec::<[&'static Breakpoint; 3]>::new();
        for key in keys {
            let tier = breakpoint(key.as_ref())?;
            if !resolved.contains(&tier) {
                resolved.push(tier);
            }
        }
        resolved.sort_by_key(|tier| BREAKPOINTS.iter().position(|b| b == *tier));
        self.breakpoints = resolved;
        Ok(self)
    }

    #[must_use]
    pub fn with_all_breakpoints(mut self) -> Self {
        self.breakpoints = BREAKPOINTS.iter().collect();
        self
    }

    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    #[must_use]
    pub fn accessibility(&self) -> Option<&'static AccessibilityPreset> {
        self.accessibility
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[&'static Breakpoint] {
        &self.breakpoints
    }
}

/// Serializable form of a [`StyleSelection`], resolved on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleRequest {
    pub theme: String,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub accessibility: Option<String>,
    #[serde(default)]
    pub breakpoints: Vec<String>,
}

impl StyleRequest {
    #[must_use]
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            palette: None,
            accessibility: None,
            breakpoints: Vec::new(),
        }
    }

    pub fn resolve(&self) -> ChartResult<StyleSelection> {
        let mut selection = match &self.palette {
            Some(palette_key) => StyleSelection::resolve(&self.theme, palette_key)?,
            None => StyleSelection::for_theme(&self.theme)?,
        };
        if let Some(preset) = &self.accessibility {
            selection = selection.with_accessibility(preset)?;
        }
        if !self.breakpoints.is_empty() {
            selection = selection.with_breakpoints(&self.breakpoints)?;
        }
        Ok(selection)
    }
}
