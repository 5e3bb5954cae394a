use serde::{Deserialize, Serialize};

use crate::core::types::{RangeOverride, ValueRange};

pub const DEFAULT_Y_TICKS: usize = 5;
const MIN_Y_TICKS: usize = 2;
const DEGENERATE_PADDING_RATIO: f64 = 0.1;

/// Resolves the vertical range for one render pass.
///
/// An explicit override with two finite bounds is returned verbatim. Otherwise
/// the range is fitted to every finite value; no finite value at all yields
/// `[0, 1]`, and a single distinct value is widened by 10% of its magnitude
/// (or by 1 when it is zero) on both sides.
#[must_use]
pub fn resolve_y_range<I>(range_override: Option<RangeOverride>, values: I) -> ValueRange
where
    I: IntoIterator<Item = Option<f64>>,
{
    if let Some(explicit) = range_override.and_then(RangeOverride::explicit) {
        return explicit;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.into_iter().flatten() {
        if !value.is_finite() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
    }

    if min == f64::INFINITY || max == f64::NEG_INFINITY {
        return ValueRange::new(0.0, 1.0);
    }
    if min == max {
        let offset = match min.abs() * DEGENERATE_PADDING_RATIO {
            offset if offset == 0.0 => 1.0,
            offset => offset,
        };
        return ValueRange::new((min - offset).max(f64::MIN), (max + offset).min(f64::MAX));
    }
    ValueRange::new(min, max)
}

/// One horizontal grid tick on the value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YTick {
    /// Position from the bottom (0.0) to the top (1.0) of the plot.
    pub ratio: f64,
    pub value: f64,
    pub label: String,
}

/// Effective interval count for a configured tick count.
#[must_use]
pub fn effective_y_tick_count(configured: Option<usize>) -> usize {
    configured.unwrap_or(DEFAULT_Y_TICKS).max(MIN_Y_TICKS)
}

/// Evenly spaced ticks across `range`, both ends included.
///
/// `intervals` is clamped to at least two, producing `intervals + 1` ticks.
/// Values are interpolated between the bounds without forming the span, so
/// extreme ranges keep finite tick values.
pub fn y_ticks<F>(range: ValueRange, intervals: usize, formatter: F) -> Vec<YTick>
where
    F: Fn(f64) -> String,
{
    let intervals = intervals.max(MIN_Y_TICKS);
    (0..=intervals)
        .map(|index| {
            let ratio = index as f64 / intervals as f64;
            let value = range.min * (1.0 - ratio) + range.max * ratio;
            YTick {
                ratio,
                value,
                label: formatter(value),
            }
        })
        .collect()
}

/// Default value-axis formatter: nearest integer, halves rounded up.
#[must_use]
pub fn format_rounded_integer(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    // `-0` would otherwise print with a sign.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
