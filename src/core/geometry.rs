use serde::{Deserialize, Serialize};

use crate::core::types::{Padding, ValueRange};

/// Logical (CSS) canvas size plus the device pixel ratio used for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasMetrics {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl CanvasMetrics {
    /// Builds metrics from the canvas client size.
    ///
    /// Returns `None` while the element is not laid out (zero or non-finite
    /// size); callers skip the render pass in that case. A missing or
    /// nonsensical device pixel ratio falls back to `1.0`.
    #[must_use]
    pub fn from_client_size(
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
    ) -> Option<Self> {
        if !css_width.is_finite()
            || !css_height.is_finite()
            || css_width <= 0.0
            || css_height <= 0.0
        {
            return None;
        }
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Some(Self {
            css_width,
            css_height,
            device_pixel_ratio,
        })
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.css_width.is_finite()
            && self.css_height.is_finite()
            && self.css_width > 0.0
            && self.css_height > 0.0
            && self.device_pixel_ratio.is_finite()
            && self.device_pixel_ratio > 0.0
    }

    /// Pixel buffer size backing the logical area at the current ratio.
    #[must_use]
    pub fn buffer_size(self) -> (u32, u32) {
        let scale = |css: f64| (css * self.device_pixel_ratio).round().max(1.0) as u32;
        (scale(self.css_width), scale(self.css_height))
    }
}

/// Padded drawing area inside the canvas, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    /// Canvas rectangle minus padding. Width and height never drop below 1px.
    #[must_use]
    pub fn from_metrics(metrics: CanvasMetrics, padding: Padding) -> Self {
        Self {
            left: padding.left,
            top: padding.top,
            width: (metrics.css_width - padding.left - padding.right).max(1.0),
            height: (metrics.css_height - padding.top - padding.bottom).max(1.0),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// X pixel position of every category index.
///
/// One category sits at the horizontal center; otherwise the first category is
/// on the left edge and the last one on the right edge.
#[must_use]
pub fn x_positions(plot: PlotRect, category_count: usize) -> Vec<f64> {
    match category_count {
        0 => Vec::new(),
        1 => vec![plot.center_x()],
        n => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|index| plot.left + plot.width * index as f64 / last)
                .collect()
        }
    }
}

/// Maps a value to a Y pixel inside `plot`.
///
/// Values outside `range` are clamped to the plot edges. A degenerate range
/// places every value at mid-height. Non-finite values have no position.
///
/// Differences are taken on halved operands so ranges spanning most of the
/// `f64` domain stay finite.
#[must_use]
pub fn map_value_to_y(value: f64, range: ValueRange, plot: PlotRect) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let ratio = if range.max == range.min {
        0.5
    } else {
        (value / 2.0 - range.min / 2.0) / (range.max / 2.0 - range.min / 2.0)
    };
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.5 };
    Some(plot.top + (1.0 - ratio) * plot.height)
}

#[cfg(test)]
mod tests {
    use super::{CanvasMetrics, PlotRect, map_value_to_y, x_positions};
    use crate::core::types::{Padding, ValueRange};
    use approx::assert_relative_eq;

    fn plot() -> PlotRect {
        let metrics = CanvasMetrics::from_client_size(600.0, 300.0, 2.0).expect("metrics");
        PlotRect::from_metrics(metrics, Padding::default())
    }

    #[test]
    fn zero_sized_canvas_is_not_ready() {
        assert!(CanvasMetrics::from_client_size(0.0, 300.0, 1.0).is_none());
        assert!(CanvasMetrics::from_client_size(300.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn invalid_device_pixel_ratio_falls_back_to_one() {
        let metrics = CanvasMetrics::from_client_size(100.0, 50.0, f64::NAN).expect("metrics");
        assert_eq!(metrics.device_pixel_ratio, 1.0);
        assert_eq!(metrics.buffer_size(), (100, 50));
    }

    #[test]
    fn buffer_size_scales_by_device_pixel_ratio() {
        let metrics = CanvasMetrics::from_client_size(301.0, 150.0, 1.5).expect("metrics");
        assert_eq!(metrics.buffer_size(), (452, 225));
    }

    #[test]
    fn plot_rect_is_floored_at_one_pixel() {
        let metrics = CanvasMetrics::from_client_size(50.0, 40.0, 1.0).expect("metrics");
        let rect = PlotRect::from_metrics(metrics, Padding::default());
        assert_eq!(rect.width, 1.0);
        assert_eq!(rect.height, 1.0);
    }

    #[test]
    fn single_category_is_centered() {
        let rect = plot();
        assert_eq!(x_positions(rect, 1), vec![rect.center_x()]);
    }

    #[test]
    fn categories_span_plot_edges() {
        let rect = plot();
        let xs = x_positions(rect, 5);
        assert_eq!(xs.len(), 5);
        assert_relative_eq!(xs[0], rect.left);
        assert_relative_eq!(xs[4], rect.right());
        assert_relative_eq!(xs[2], rect.center_x());
    }

    #[test]
    fn values_are_clamped_to_plot() {
        let rect = plot();
        let range = ValueRange::new(0.0, 10.0);
        assert_relative_eq!(map_value_to_y(10.0, range, rect).expect("top"), rect.top);
        assert_relative_eq!(
            map_value_to_y(0.0, range, rect).expect("bottom"),
            rect.bottom()
        );
        assert_relative_eq!(map_value_to_y(50.0, range, rect).expect("clamped"), rect.top);
        assert_relative_eq!(
            map_value_to_y(-3.0, range, rect).expect("clamped"),
            rect.bottom()
        );
    }

    #[test]
    fn degenerate_range_maps_to_mid_height() {
        let rect = plot();
        let y = map_value_to_y(7.0, ValueRange::new(7.0, 7.0), rect).expect("y");
        assert_relative_eq!(y, rect.top + rect.height / 2.0);
    }

    #[test]
    fn non_finite_values_have_no_position() {
        let rect = plot();
        assert!(map_value_to_y(f64::NAN, ValueRange::new(0.0, 1.0), rect).is_none());
        assert!(map_value_to_y(f64::INFINITY, ValueRange::new(0.0, 1.0), rect).is_none());
    }

    #[test]
    fn ranges_near_the_float_limits_stay_finite() {
        let rect = plot();
        let range = ValueRange::new(-1.0e308, 1.0e308);

        assert_relative_eq!(map_value_to_y(1.0e308, range, rect).expect("top"), rect.top);
        assert_relative_eq!(
            map_value_to_y(-1.0e308, range, rect).expect("bottom"),
            rect.bottom()
        );
        assert_relative_eq!(
            map_value_to_y(0.0, range, rect).expect("middle"),
            rect.top + rect.height / 2.0
        );

        let extreme = ValueRange::new(f64::MIN, f64::MAX);
        let y = map_value_to_y(f64::MAX, extreme, rect).expect("top");
        assert_relative_eq!(y, rect.top);
    }

    #[test]
    fn non_finite_range_maps_to_mid_height() {
        let rect = plot();
        let y = map_value_to_y(3.0, ValueRange::new(f64::NAN, 10.0), rect).expect("y");
        assert_relative_eq!(y, rect.top + rect.height / 2.0);
    }
}
