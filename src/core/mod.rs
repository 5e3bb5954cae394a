pub mod geometry;
pub mod label_thinning;
pub(crate) mod lenient;
pub mod scale;
pub mod series;
pub mod types;

pub use geometry::{CanvasMetrics, PlotRect, map_value_to_y, x_positions};
pub use label_thinning::{MAX_X_LABELS, label_step, thin_label_indices};
pub use scale::{
    DEFAULT_Y_TICKS, YTick, effective_y_tick_count, format_rounded_integer, resolve_y_range,
    y_ticks,
};
pub use series::{
    DataValue, Point, RenderedDataset, coerce_values, display_value, split_sub_paths,
};
pub use types::{Padding, PaddingOverrides, RangeOverride, ValueRange};
