use serde::{Deserialize, Serialize};

/// Resolved padding, in CSS pixels, between the canvas edge and the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 24.0,
            right: 28.0,
            bottom: 48.0,
            left: 64.0,
        }
    }
}

impl Padding {
    /// Applies per-side overrides on top of `self`.
    ///
    /// Non-finite overrides are ignored and keep the base value.
    #[must_use]
    pub fn with_overrides(self, overrides: PaddingOverrides) -> Self {
        let pick = |override_value: Option<f64>, base: f64| {
            override_value.filter(|value| value.is_finite()).unwrap_or(base)
        };
        Self {
            top: pick(overrides.top, self.top),
            right: pick(overrides.right, self.right),
            bottom: pick(overrides.bottom, self.bottom),
            left: pick(overrides.left, self.left),
        }
    }
}

/// Optional per-side padding supplied by the host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingOverrides {
    #[serde(deserialize_with = "crate::core::lenient::number_or_none")]
    pub top: Option<f64>,
    #[serde(deserialize_with = "crate::core::lenient::number_or_none")]
    pub right: Option<f64>,
    #[serde(deserialize_with = "crate::core::lenient::number_or_none")]
    pub bottom: Option<f64>,
    #[serde(deserialize_with = "crate::core::lenient::number_or_none")]
    pub left: Option<f64>,
}

impl PaddingOverrides {
    #[must_use]
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    #[must_use]
    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }

    #[must_use]
    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }
}

/// Closed vertical value range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Host-provided vertical range. Only used when both bounds are present and finite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOverride {
    #[serde(deserialize_with = "crate::core::lenient::number_or_none")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "crate::core::lenient::number_or_none")]
    pub max: Option<f64>,
}

impl RangeOverride {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns the explicit range when both bounds are finite numbers.
    #[must_use]
    pub fn explicit(self) -> Option<ValueRange> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min.is_finite() && max.is_finite() => {
                Some(ValueRange::new(min, max))
            }
            _ => None,
        }
    }
}
