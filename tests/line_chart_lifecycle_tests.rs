use trend_chart::ChartError;
use trend_chart::api::{ChartConfig, DatasetConfig, LineChart, render_line_chart};
use trend_chart::host::{HeadlessHost, HostListener};
use trend_chart::render::NullRenderer;

fn week_config() -> ChartConfig {
    ChartConfig::new(["Mon", "Tue", "Wed"])
        .with_dataset(DatasetConfig::new("Load", [1.0, 2.0, 3.0]))
}

fn chart_with(host: HeadlessHost) -> LineChart<NullRenderer, HeadlessHost> {
    render_line_chart(
        Some(NullRenderer::with_client_size(400.0, 300.0)),
        host,
        week_config(),
    )
    .expect("chart init")
}

#[test]
fn missing_canvas_is_rejected_at_construction() {
    let result =
        render_line_chart::<NullRenderer, _>(None, HeadlessHost::new(), week_config());
    let err = result.err().expect("missing canvas must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn construction_attaches_listeners_and_schedules_first_frame() {
    let chart = chart_with(HeadlessHost::new());

    assert_eq!(
        chart.host().attached_listeners(),
        &[
            HostListener::ResizeObserver,
            HostListener::PointerMove,
            HostListener::PointerLeave,
        ]
    );
    assert!(chart.has_pending_frame());
    assert_eq!(chart.host().frame_request_count(), 1);
    assert!(chart.last_snapshot().is_none());
}

#[test]
fn window_resize_listener_is_used_without_resize_observer() {
    let chart = chart_with(HeadlessHost::new().without_resize_observer());
    assert_eq!(
        chart.attached_listeners().first(),
        Some(&HostListener::WindowResize)
    );
    assert!(
        !chart
            .host()
            .attached_listeners()
            .contains(&HostListener::ResizeObserver)
    );
}

#[test]
fn redraw_requests_coalesce_until_frame_runs() {
    let mut chart = chart_with(HeadlessHost::new());

    assert!(!chart.redraw());
    assert!(!chart.on_resize());
    assert!(!chart.redraw());
    assert_eq!(chart.host().frame_request_count(), 1);

    assert!(chart.on_animation_frame().expect("frame"));
    assert_eq!(chart.renderer().render_calls, 1);
    assert!(!chart.has_pending_frame());

    assert!(chart.redraw());
    assert_eq!(chart.host().frame_request_count(), 2);
}

#[test]
fn stale_animation_frame_does_not_render() {
    let mut chart = chart_with(HeadlessHost::new());
    assert!(chart.on_animation_frame().expect("first frame"));
    assert!(!chart.on_animation_frame().expect("stale frame"));
    assert_eq!(chart.renderer().render_calls, 1);
}

#[test]
fn resize_after_render_schedules_follow_up_frame() {
    let mut chart = chart_with(HeadlessHost::new());
    chart.on_animation_frame().expect("first frame");

    chart.renderer_mut().set_client_size(600.0, 300.0);
    assert!(chart.on_resize());
    assert!(chart.on_animation_frame().expect("resize frame"));

    assert_eq!(chart.renderer().buffer_width, 600);
    assert_eq!(chart.canvas_metrics().map(|m| m.css_width), Some(600.0));
}

#[test]
fn hidden_canvas_skips_render_and_publishes_nothing() {
    let mut chart = render_line_chart(
        Some(NullRenderer::with_client_size(0.0, 300.0)),
        HeadlessHost::new(),
        week_config(),
    )
    .expect("chart init");
    let notified = std::rc::Rc::new(std::cell::Cell::new(0usize));
    let counter = std::rc::Rc::clone(&notified);
    chart.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(!chart.on_animation_frame().expect("frame"));
    assert_eq!(chart.renderer().render_calls, 0);
    assert_eq!(chart.renderer().buffer_resizes, 0);
    assert!(chart.last_snapshot().is_none());
    assert_eq!(notified.get(), 0);

    chart.renderer_mut().set_client_size(320.0, 200.0);
    chart.on_resize();
    assert!(chart.on_animation_frame().expect("frame after layout"));
    assert_eq!(notified.get(), 1);
}

#[test]
fn destroy_detaches_everything_and_is_idempotent() {
    let mut chart = chart_with(HeadlessHost::new());
    let pending = chart.host().last_frame_request().expect("first frame request");

    chart.destroy();
    chart.destroy();

    assert!(chart.is_destroyed());
    assert!(chart.host().attached_listeners().is_empty());
    assert_eq!(chart.host().cancelled_frames(), &[pending]);
    assert!(chart.host().tooltip_state().removed);
    assert!(!chart.has_pending_frame());
}

#[test]
fn callbacks_after_destroy_are_no_ops() {
    let mut chart = chart_with(HeadlessHost::new());
    chart.on_animation_frame().expect("first frame");
    chart.destroy();

    assert!(!chart.redraw());
    assert!(!chart.on_resize());
    assert!(!chart.on_animation_frame().expect("frame after destroy"));
    chart.on_pointer_move(64.0, 100.0);
    chart.on_pointer_leave();

    assert_eq!(chart.renderer().render_calls, 1);
    assert_eq!(chart.highlighted_index(), None);
    assert_eq!(chart.host().frame_request_count(), 1);
}

#[test]
fn into_parts_returns_canvas_and_host() {
    let mut chart = chart_with(HeadlessHost::new());
    chart.on_animation_frame().expect("frame");
    let (renderer, host) = chart.into_parts();

    assert_eq!(renderer.render_calls, 1);
    assert_eq!(host.frame_request_count(), 1);
}
