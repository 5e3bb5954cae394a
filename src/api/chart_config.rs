use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::lenient;
use crate::core::{DataValue, PaddingOverrides, Point, RangeOverride, RenderedDataset};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_DATASET_LABEL: &str = "Series";
pub const DEFAULT_DATASET_COLOR: &str = "#0d6efd";
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_POINT_RADIUS: f64 = 3.0;

/// Formatter used for value-axis tick labels.
pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Formatter used for tooltip row values.
pub type TooltipFormatterFn =
    Arc<dyn Fn(&RenderedDataset, &Point) -> String + Send + Sync + 'static>;

/// One configured line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetConfig {
    #[serde(deserialize_with = "lenient::text_or_empty")]
    pub label: String,
    #[serde(deserialize_with = "lenient::text_or_empty")]
    pub color: String,
    #[serde(deserialize_with = "lenient::text_or_empty")]
    pub unit: String,
    #[serde(deserialize_with = "lenient::number_or_none")]
    pub line_width: Option<f64>,
    #[serde(deserialize_with = "lenient::number_or_none")]
    pub point_radius: Option<f64>,
    #[serde(deserialize_with = "lenient::sequence_or_empty")]
    pub data: Vec<DataValue>,
    /// Display values for tooltips, aligned by index with `data`.
    #[serde(deserialize_with = "lenient::sequence_or_none")]
    pub raw: Option<Vec<DataValue>>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_DATASET_LABEL.to_owned(),
            color: DEFAULT_DATASET_COLOR.to_owned(),
            unit: String::new(),
            line_width: None,
            point_radius: None,
            data: Vec::new(),
            raw: None,
        }
    }
}

impl DatasetConfig {
    #[must_use]
    pub fn new<I, V>(label: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        Self {
            label: label.into(),
            data: data.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = Some(point_radius);
        self
    }

    #[must_use]
    pub fn with_raw<I, V>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        self.raw = Some(raw.into_iter().map(Into::into).collect());
        self
    }

    /// Configured line width, or the default when unset, non-finite or <= 0.
    #[must_use]
    pub fn effective_line_width(&self) -> f64 {
        positive_or(self.line_width, DEFAULT_LINE_WIDTH)
    }

    /// Configured point radius, or the default when unset, non-finite or <= 0.
    #[must_use]
    pub fn effective_point_radius(&self) -> f64 {
        positive_or(self.point_radius, DEFAULT_POINT_RADIUS)
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    value
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(fallback)
}

/// Tooltip options.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TooltipConfig {
    #[serde(skip)]
    pub value_formatter: Option<TooltipFormatterFn>,
}

impl fmt::Debug for TooltipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipConfig")
            .field("value_formatter", &self.value_formatter.is_some())
            .finish()
    }
}

/// Chart input.
///
/// The serializable part mirrors the upstream JSON payload (`labels`,
/// `datasets`, `padding`, `yRange`, `yTicks`); formatter hooks are attached
/// with the `with_*` builders.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(deserialize_with = "lenient::texts_or_empty")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "lenient::sequence_or_empty")]
    pub datasets: Vec<DatasetConfig>,
    #[serde(deserialize_with = "lenient::value_or_default")]
    pub padding: PaddingOverrides,
    #[serde(deserialize_with = "lenient::value_or_none")]
    pub y_range: Option<RangeOverride>,
    /// Floored when the payload carries a fractional count.
    #[serde(deserialize_with = "lenient::count_or_none")]
    pub y_ticks: Option<usize>,
    #[serde(skip)]
    pub y_formatter: Option<ValueFormatterFn>,
    #[serde(skip_serializing, deserialize_with = "lenient::value_or_default")]
    pub tooltip: TooltipConfig,
}

impl fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfig")
            .field("labels", &self.labels)
            .field("datasets", &self.datasets)
            .field("padding", &self.padding)
            .field("y_range", &self.y_range)
            .field("y_ticks", &self.y_ticks)
            .field("y_formatter", &self.y_formatter.is_some())
            .field("tooltip", &self.tooltip)
            .finish()
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: DatasetConfig) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingOverrides) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some(RangeOverride::new(min, max));
        self
    }

    #[must_use]
    pub fn with_y_ticks(mut self, y_ticks: usize) -> Self {
        self.y_ticks = Some(y_ticks);
        self
    }

    #[must_use]
    pub fn with_y_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.y_formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_tooltip_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&RenderedDataset, &Point) -> String + Send + Sync + 'static,
    {
        self.tooltip.value_formatter = Some(Arc::new(formatter));
        self
    }

    /// Parses the upstream JSON payload.
    ///
    /// Fields of the wrong shape fall back to their defaults: non-array
    /// `labels`, `datasets` and `data` read as empty, booleans in `data` plot
    /// as 1 or 0, and a fractional `yTicks` is floored. Only malformed JSON or
    /// a non-object payload is an error.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })
    }

    /// Serializes the data part of the config; formatter hooks are not included.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }
}
