use tracing::warn;

use crate::render::{Color, LineStrokeStyle};

/// `#0d6efd`, the default dataset color.
const DEFAULT_SERIES_COLOR: Color = Color::rgba(13.0 / 255.0, 110.0 / 255.0, 253.0 / 255.0, 1.0);

/// Visual constants of the line chart.
///
/// Series colors are per dataset and come from the config; everything else
/// drawn by the engine reads its colors and sizes from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub plot_background_color: Color,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub y_label_color: Color,
    pub x_label_color: Color,
    pub label_font_size_px: f64,
    /// Gap between the plot's left edge and the right end of y labels.
    pub y_label_offset_px: f64,
    /// Gap between the plot's bottom edge and the top of x labels.
    pub x_label_offset_px: f64,
    pub crosshair_line_color: Color,
    pub crosshair_line_width: f64,
    pub crosshair_line_style: LineStrokeStyle,
    pub highlight_halo_color: Color,
    /// Added to the dataset point radius for the outer halo ring.
    pub highlight_outer_extra_radius_px: f64,
    /// Added to the dataset point radius for the inner, series-colored ring.
    pub highlight_inner_extra_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            plot_background_color: Color::rgba8(255, 255, 255, 0.02),
            axis_line_color: Color::rgba8(255, 255, 255, 0.25),
            axis_line_width: 1.0,
            grid_line_color: Color::rgba8(255, 255, 255, 0.08),
            grid_line_width: 1.0,
            y_label_color: Color::rgba8(235, 236, 240, 0.8),
            x_label_color: Color::rgba8(235, 236, 240, 0.85),
            label_font_size_px: 12.0,
            y_label_offset_px: 10.0,
            x_label_offset_px: 10.0,
            crosshair_line_color: Color::rgba8(255, 255, 255, 0.3),
            crosshair_line_width: 1.0,
            crosshair_line_style: LineStrokeStyle::Dashed {
                on_px: 4.0,
                off_px: 4.0,
            },
            highlight_halo_color: Color::rgb(0.0, 0.0, 0.0),
            highlight_outer_extra_radius_px: 3.0,
            highlight_inner_extra_radius_px: 1.5,
        }
    }
}

impl RenderStyle {
    /// Resolves a dataset CSS color, falling back to the default series color.
    #[must_use]
    pub fn series_color(&self, css: &str) -> Color {
        match Color::parse_css(css) {
            Ok(color) => color,
            Err(err) => {
                warn!(color = css, error = %err, "unparsable series color, using default");
                DEFAULT_SERIES_COLOR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderStyle;
    use crate::render::Color;

    #[test]
    fn series_color_parses_css_hex() {
        let style = RenderStyle::default();
        assert_eq!(style.series_color("#ff0000"), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn series_color_accepts_named_colors() {
        let style = RenderStyle::default();
        assert_eq!(style.series_color("orange"), Color::rgba8(255, 165, 0, 1.0));
        assert_ne!(style.series_color("teal"), style.series_color("#0d6efd"));
    }

    #[test]
    fn unparsable_series_color_falls_back_to_default_blue() {
        let style = RenderStyle::default();
        assert_eq!(
            style.series_color("not-a-color"),
            style.series_color("#0d6efd")
        );
    }
}
