//! chart-composer: data analysis and Chart.js configuration composition.
//!
//! The crate turns raw numeric series into complete Chart.js documents:
//! - `core`: series model, statistics and stateless transforms
//! - `analysis`: rule-based chart-type recommendation
//! - `style`: static theme, palette, accessibility and breakpoint registries
//! - `api`: the composer, merge utility, presets and the document model
//! - `export`: CSV and HTML renderings of finished documents
//!
//! Everything is synchronous and free of I/O.

pub mod analysis;
pub mod api;
pub mod core;
pub mod error;
pub mod export;
pub mod style;
pub mod telemetry;

pub use api::{ChartConfiguration, ComposeOptions, ConfigComposer};
pub use core::{ChartType, Dataset, Series};
pub use error::{ChartError, ChartResult, ErrorCategory};
pub use style::{StyleRequest, StyleSelection};
