#![cfg(feature = "cairo-backend")]

use trend_chart::ChartError;
use trend_chart::api::{ChartConfig, DatasetConfig, render_line_chart};
use trend_chart::host::HeadlessHost;
use trend_chart::render::{CairoRenderer, Renderer};

#[test]
fn cairo_renderer_rejects_invalid_client_size() {
    let err = CairoRenderer::new(0.0, 480.0).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));

    let err = CairoRenderer::new(640.0, f64::NAN).expect_err("invalid height must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn cairo_renderer_draws_axes_series_and_labels() {
    let renderer = CairoRenderer::new(400.0, 300.0).expect("renderer");
    let config = ChartConfig::new(["Mon", "Tue", "Wed"])
        .with_dataset(DatasetConfig::new("Load", [1.0, 2.0, 3.0]));
    let mut chart =
        render_line_chart(Some(renderer), HeadlessHost::new(), config).expect("chart init");

    assert!(chart.on_animation_frame().expect("render"));
    let stats = chart.renderer().last_stats();

    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.lines_drawn, 8);
    assert_eq!(stats.paths_drawn, 1);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.texts_drawn, 9);
}

#[test]
fn cairo_surface_follows_device_pixel_ratio() {
    let renderer = CairoRenderer::new(320.0, 200.0).expect("renderer");
    let mut chart = render_line_chart(
        Some(renderer),
        HeadlessHost::new().with_device_pixel_ratio(2.0),
        ChartConfig::new(["a", "b"]).with_dataset(DatasetConfig::new("s", [1.0, 2.0])),
    )
    .expect("chart init");

    chart.on_animation_frame().expect("render");
    assert_eq!(chart.renderer().buffer_size(), (640, 400));
    assert_eq!(chart.renderer().surface().width(), 640);
}

#[test]
fn cairo_highlight_draws_dashed_crosshair_and_halo() {
    let renderer = CairoRenderer::new(400.0, 300.0).expect("renderer");
    let mut chart = render_line_chart(
        Some(renderer),
        HeadlessHost::new(),
        ChartConfig::new(["Mon", "Tue", "Wed"])
            .with_dataset(DatasetConfig::new("Load", [1.0, 2.0, 3.0])),
    )
    .expect("chart init");
    chart.on_animation_frame().expect("first render");

    chart.on_pointer_move(218.0, 120.0);
    chart.on_animation_frame().expect("highlight render");
    let stats = chart.renderer().last_stats();

    assert_eq!(stats.lines_drawn, 9);
    assert_eq!(stats.circles_drawn, 5);
}
