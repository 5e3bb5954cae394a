//! trend-chart: interactive multi-series line charts on host-supplied canvases.
//!
//! The crate keeps a strict split between pure chart math (`core`), frame
//! construction and orchestration (`api`), pointer state (`interaction`),
//! drawing backends (`render`) and the embedding environment (`host`).

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartConfig, ChartSnapshot, DatasetConfig, LineChart, render_legend, render_line_chart,
};
pub use error::{ChartError, ChartResult};
