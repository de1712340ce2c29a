use crate::error::ChartResult;

use super::{StyleKind, lookup};

/// Background/text/grid defaults plus the palette a theme pairs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub grid_color: &'static str,
    pub default_palette: &'static str,
}

pub static THEMES: &[Theme] = &[
    Theme {
        name: "dark",
        background_color: "#1a1a1a",
        text_color: "#e0e0e0",
        grid_color: "rgba(255, 255, 255, 0.1)",
        default_palette: "vibrant",
    },
    Theme {
        name: "light",
        background_color: "#ffffff",
        text_color: "#333333",
        grid_color: "rgba(0, 0, 0, 0.1)",
        default_palette: "professional",
    },
    Theme {
        name: "ocean",
        background_color: "#0a1929",
        text_color: "#b2d8ff",
        grid_color: "rgba(178, 216, 255, 0.1)",
        default_palette: "professional",
    },
    Theme {
        name: "sunset",
        background_color: "#2d1b2e",
        text_color: "#ffcccb",
        grid_color: "rgba(255, 204, 203, 0.1)",
        default_palette: "pastel",
    },
    Theme {
        name: "forest",
        background_color: "#1a2f1a",
        text_color: "#c8e6c9",
        grid_color: "rgba(200, 230, 201, 0.1)",
        default_palette: "earth",
    },
    Theme {
        name: "neon",
        background_color: "#000000",
        text_color: "#00ff00",
        grid_color: "rgba(0, 255, 0, 0.2)",
        default_palette: "vibrant",
    },
];

pub fn theme(key: &str) -> ChartResult<&'static Theme> {
    lookup(THEMES, key, StyleKind::Theme, |t| t.name)
}
