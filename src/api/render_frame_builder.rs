use smallvec::SmallVec;

use crate::core::{
    CanvasMetrics, DataValue, MAX_X_LABELS, Padding, PlotRect, Point, RenderedDataset, ValueRange,
    YTick, coerce_values, display_value, effective_y_tick_count, format_rounded_integer,
    map_value_to_y, resolve_y_range, thin_label_indices, x_positions, y_ticks,
};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive, TextVAlign,
};

use super::chart_config::{DEFAULT_DATASET_COLOR, DEFAULT_DATASET_LABEL};
use super::{ChartConfig, DatasetConfig, RenderStyle};

/// Everything one draw pass produced: the frame to paint plus the derived
/// state the engine keeps for hit-testing and snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub frame: RenderFrame,
    pub plot: PlotRect,
    pub x_positions: Vec<f64>,
    pub y_range: ValueRange,
    pub y_ticks: Vec<YTick>,
    pub x_label_indices: SmallVec<[usize; MAX_X_LABELS + 2]>,
    pub datasets: Vec<RenderedDataset>,
}

/// Builds the full frame for `config` on a canvas described by `metrics`.
///
/// `highlighted` adds the crosshair overlay when it refers to an existing
/// category. The function is pure; surface preparation and painting are left
/// to the caller.
#[must_use]
pub fn build_render_pass(
    config: &ChartConfig,
    style: &RenderStyle,
    metrics: CanvasMetrics,
    highlighted: Option<usize>,
) -> RenderPass {
    let padding = Padding::default().with_overrides(config.padding);
    let plot = PlotRect::from_metrics(metrics, padding);
    let y_range = resolve_y_range(
        config.y_range,
        config
            .datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().map(DataValue::coerce)),
    );
    let intervals = effective_y_tick_count(config.y_ticks);
    let ticks = match &config.y_formatter {
        Some(formatter) => y_ticks(y_range, intervals, |value| formatter(value)),
        None => y_ticks(y_range, intervals, format_rounded_integer),
    };
    let xs = x_positions(plot, config.labels.len());
    let x_label_indices = thin_label_indices(config.labels.len());

    let mut frame = RenderFrame::new(metrics);
    frame
        .layer_mut(CanvasLayerKind::Background)
        .rects
        .push(RectPrimitive::new(
            plot.left,
            plot.top,
            plot.width,
            plot.height,
            style.plot_background_color,
        ));

    let grid = frame.layer_mut(CanvasLayerKind::Grid);
    for tick in &ticks {
        let y = plot.top + plot.height - tick.ratio * plot.height;
        grid.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right(),
            y,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }

    let axis = frame.layer_mut(CanvasLayerKind::Axis);
    axis.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        style.axis_line_width,
        style.axis_line_color,
    ));
    axis.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        style.axis_line_width,
        style.axis_line_color,
    ));
    for tick in &ticks {
        if tick.label.is_empty() {
            continue;
        }
        axis.texts.push(TextPrimitive::new(
            tick.label.clone(),
            plot.left - style.y_label_offset_px,
            plot.top + plot.height - tick.ratio * plot.height,
            style.label_font_size_px,
            style.y_label_color,
            TextHAlign::Right,
            TextVAlign::Middle,
        ));
    }
    for &index in &x_label_indices {
        let label = &config.labels[index];
        if label.is_empty() {
            continue;
        }
        axis.texts.push(TextPrimitive::new(
            label.clone(),
            xs[index],
            plot.bottom() + style.x_label_offset_px,
            style.label_font_size_px,
            style.x_label_color,
            TextHAlign::Center,
            TextVAlign::Top,
        ));
    }

    let mut datasets = Vec::with_capacity(config.datasets.len());
    for dataset_config in &config.datasets {
        let dataset = render_dataset(dataset_config, &config.labels, &xs, y_range, plot);
        let color = style.series_color(&dataset.color);
        let layer = frame.push_layer(CanvasLayerKind::Series);
        let sub_paths = dataset.sub_paths();
        if !sub_paths.is_empty() {
            layer
                .paths
                .push(PathPrimitive::new(sub_paths, dataset.line_width, color));
        }
        if dataset.has_points() {
            for point in dataset.points.iter().flatten() {
                layer.circles.push(CirclePrimitive::new(
                    point.x,
                    point.y,
                    dataset.point_radius,
                    color,
                ));
            }
        }
        datasets.push(dataset);
    }

    if let Some(index) = highlighted.filter(|index| *index < xs.len()) {
        let x = xs[index];
        let crosshair = frame.layer_mut(CanvasLayerKind::Crosshair);
        crosshair.lines.push(
            LinePrimitive::new(
                x,
                plot.top,
                x,
                plot.bottom(),
                style.crosshair_line_width,
                style.crosshair_line_color,
            )
            .with_stroke_style(style.crosshair_line_style),
        );
        for dataset in &datasets {
            let Some(point) = dataset.point_at(index) else {
                continue;
            };
            crosshair.circles.push(CirclePrimitive::new(
                point.x,
                point.y,
                dataset.point_radius + style.highlight_outer_extra_radius_px,
                style.highlight_halo_color,
            ));
            crosshair.circles.push(CirclePrimitive::new(
                point.x,
                point.y,
                dataset.point_radius + style.highlight_inner_extra_radius_px,
                style.series_color(&dataset.color),
            ));
        }
    }

    RenderPass {
        frame,
        plot,
        x_positions: xs,
        y_range,
        y_ticks: ticks,
        x_label_indices,
        datasets,
    }
}

/// Coerces one dataset against the category labels and maps its points.
#[must_use]
pub fn render_dataset(
    config: &DatasetConfig,
    labels: &[String],
    xs: &[f64],
    y_range: ValueRange,
    plot: PlotRect,
) -> RenderedDataset {
    let data = coerce_values(&config.data, labels.len());
    let unit = config.unit.clone();
    let points = data
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let value = (*value)?;
            let y = map_value_to_y(value, y_range, plot)?;
            Some(Point {
                x: xs[index],
                y,
                value,
                raw: display_value(config.raw.as_deref(), index, value),
                label: labels[index].clone(),
                unit: unit.clone(),
            })
        })
        .collect();

    RenderedDataset {
        label: non_empty_or(&config.label, DEFAULT_DATASET_LABEL),
        color: non_empty_or(&config.color, DEFAULT_DATASET_COLOR),
        unit,
        line_width: config.effective_line_width(),
        point_radius: config.effective_point_radius(),
        data,
        raw: config.raw.clone(),
        points,
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}
