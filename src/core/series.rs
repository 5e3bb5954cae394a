use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw dataset entry as delivered by the upstream JSON contract.
///
/// Upstream payloads mix numbers, numeric strings and nulls; coercion into the
/// numeric domain happens once per render pass through [`DataValue::coerce`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    /// Plotted as 1 or 0.
    Bool(bool),
    Text(String),
    #[default]
    Missing,
    /// Arrays, objects and anything else JSON can carry. Always a gap.
    Other(serde_json::Value),
}

impl DataValue {
    /// Numeric value used for plotting, or `None` for a gap.
    #[must_use]
    pub fn coerce(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value).filter(|value| value.is_finite()),
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
            }
            Self::Missing | Self::Other(_) => None,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for DataValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Text(text) => f.write_str(text),
            Self::Missing => Ok(()),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Coerces `values` to exactly `len` entries: extra values are dropped and
/// missing trailing values become gaps.
#[must_use]
pub fn coerce_values(values: &[DataValue], len: usize) -> Vec<Option<f64>> {
    (0..len)
        .map(|index| values.get(index).and_then(DataValue::coerce))
        .collect()
}

/// Display value for category `index`: the parallel raw entry when present,
/// otherwise the numeric value itself.
#[must_use]
pub fn display_value(raw: Option<&[DataValue]>, index: usize, value: f64) -> DataValue {
    raw.and_then(|raw| raw.get(index))
        .cloned()
        .unwrap_or(DataValue::Number(value))
}

/// Self-contained rendered sample, used by hit-testing, tooltips and snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub raw: DataValue,
    pub label: String,
    pub unit: String,
}

/// Result of rendering one configured dataset.
///
/// `data` and `points` always have one entry per category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDataset {
    pub label: String,
    pub color: String,
    pub unit: String,
    pub line_width: f64,
    pub point_radius: f64,
    pub data: Vec<Option<f64>>,
    pub raw: Option<Vec<DataValue>>,
    pub points: Vec<Option<Point>>,
}

impl RenderedDataset {
    #[must_use]
    pub fn point_at(&self, index: usize) -> Option<&Point> {
        self.points.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn has_points(&self) -> bool {
        self.points.iter().any(Option::is_some)
    }

    /// Connected runs of points; a gap ends the current run.
    #[must_use]
    pub fn sub_paths(&self) -> Vec<Vec<(f64, f64)>> {
        split_sub_paths(&self.points)
    }
}

/// Splits an indexed point sequence into disjoint polylines at every gap.
#[must_use]
pub fn split_sub_paths(points: &[Option<Point>]) -> Vec<Vec<(f64, f64)>> {
    let mut sub_paths = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for point in points {
        match point {
            Some(point) => current.push((point.x, point.y)),
            None if !current.is_empty() => sub_paths.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        sub_paths.push(current);
    }
    sub_paths
}
