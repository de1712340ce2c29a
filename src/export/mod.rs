//! Serializations of finished documents for consumers outside the engine.

mod csv_export;
mod html_page;

pub use csv_export::{configuration_csv, dataset_csv};
pub use html_page::{HtmlPage, chart_html, image_html};
