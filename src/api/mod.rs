mod chart_config;
mod engine;
mod interaction_controller;
mod legend;
mod redraw_scheduler;
mod render_frame_builder;
mod render_style;
mod snapshot_channel;

pub use chart_config::{
    ChartConfig, DEFAULT_DATASET_COLOR, DEFAULT_DATASET_LABEL, DEFAULT_LINE_WIDTH,
    DEFAULT_POINT_RADIUS, DatasetConfig, TooltipConfig, TooltipFormatterFn, ValueFormatterFn,
};
pub use engine::{LineChart, render_line_chart};
pub use interaction_controller::default_tooltip_value;
pub use legend::{LegendEntry, legend_entries, render_legend};
pub use redraw_scheduler::RedrawScheduler;
pub use render_frame_builder::{RenderPass, build_render_pass, render_dataset};
pub use render_style::RenderStyle;
pub use snapshot_channel::{ChartSnapshot, SnapshotCallback, SnapshotChannel, Subscription};
