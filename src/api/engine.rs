use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::{CanvasMetrics, RenderedDataset, ValueRange};
use crate::error::{ChartError, ChartResult};
use crate::host::{ChartHost, HostListener, TooltipView};
use crate::interaction::{InteractionState, TooltipState};
use crate::render::Renderer;

use super::{
    ChartConfig, ChartSnapshot, RedrawScheduler, RenderStyle, SnapshotChannel, Subscription,
    build_render_pass,
};

/// Mutable state of one chart instance.
#[derive(Debug)]
pub(super) struct ChartState {
    pub(super) config: ChartConfig,
    pub(super) style: RenderStyle,
    pub(super) metrics: Option<CanvasMetrics>,
    pub(super) x_positions: Vec<f64>,
    pub(super) y_range: Option<ValueRange>,
    pub(super) datasets: Vec<RenderedDataset>,
    pub(super) interaction: InteractionState,
    pub(super) tooltip: TooltipState,
    pub(super) scheduler: RedrawScheduler,
    pub(super) snapshots: SnapshotChannel,
    pub(super) listeners: Vec<HostListener>,
    pub(super) destroyed: bool,
}

/// Interactive line chart bound to one canvas.
///
/// The host forwards its callbacks (`on_animation_frame`, `on_resize`,
/// `on_pointer_move`, `on_pointer_leave`) until [`LineChart::destroy`]; after
/// that every callback is a no-op.
pub struct LineChart<R: Renderer, H: ChartHost> {
    pub(super) renderer: R,
    pub(super) host: H,
    pub(super) tooltip: H::Tooltip,
    pub(super) state: ChartState,
}

/// Creates a chart on `canvas` and schedules its first frame.
///
/// Fails with [`ChartError::InvalidArgument`] when no canvas is supplied.
pub fn render_line_chart<R, H>(
    canvas: Option<R>,
    host: H,
    config: ChartConfig,
) -> ChartResult<LineChart<R, H>>
where
    R: Renderer,
    H: ChartHost,
{
    let renderer = canvas.ok_or_else(|| {
        ChartError::InvalidArgument("a canvas is required to render a line chart".to_owned())
    })?;
    Ok(LineChart::new(renderer, host, config))
}

impl<R: Renderer, H: ChartHost> LineChart<R, H> {
    pub fn new(renderer: R, mut host: H, config: ChartConfig) -> Self {
        let tooltip = host.create_tooltip();
        let resize_listener = if host.supports_resize_observer() {
            HostListener::ResizeObserver
        } else {
            HostListener::WindowResize
        };
        let listeners = vec![
            resize_listener,
            HostListener::PointerMove,
            HostListener::PointerLeave,
        ];
        for listener in &listeners {
            host.attach_listener(*listener);
        }

        let mut chart = Self {
            renderer,
            host,
            tooltip,
            state: ChartState {
                config,
                style: RenderStyle::default(),
                metrics: None,
                x_positions: Vec::new(),
                y_range: None,
                datasets: Vec::new(),
                interaction: InteractionState::default(),
                tooltip: TooltipState::default(),
                scheduler: RedrawScheduler::default(),
                snapshots: SnapshotChannel::default(),
                listeners,
                destroyed: false,
            },
        };
        debug!(
            labels = chart.state.config.labels.len(),
            datasets = chart.state.config.datasets.len(),
            resize_listener = ?resize_listener,
            "line chart created"
        );
        chart.schedule_redraw();
        chart
    }

    /// Registers a snapshot observer.
    ///
    /// The callback runs immediately when a render already happened, then
    /// after every successful render in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(Rc<ChartSnapshot>) + 'static,
    {
        self.state.snapshots.subscribe(Rc::new(callback))
    }

    /// Requests a coalesced re-render, e.g. after editing [`Self::config_mut`].
    ///
    /// Returns `true` when a new frame was requested.
    pub fn redraw(&mut self) -> bool {
        self.schedule_redraw()
    }

    /// Resize notification from the observer or the window fallback.
    pub fn on_resize(&mut self) -> bool {
        trace!("resize notification");
        self.schedule_redraw()
    }

    /// Animation-frame callback.
    ///
    /// Returns `Ok(true)` when a frame was painted. Stale frames, frames after
    /// `destroy` and passes on a canvas that is not laid out return `Ok(false)`.
    pub fn on_animation_frame(&mut self) -> ChartResult<bool> {
        if self.state.destroyed {
            return Ok(false);
        }
        if self.state.scheduler.take_pending().is_none() {
            trace!("animation frame without pending redraw");
            return Ok(false);
        }
        self.draw()
    }

    /// Tears down listeners, the pending frame and the tooltip node.
    ///
    /// Idempotent.
    pub fn destroy(&mut self) {
        if self.state.destroyed {
            return;
        }
        self.state.scheduler.cancel(&mut self.host);
        for listener in self.state.listeners.drain(..) {
            self.host.detach_listener(listener);
        }
        self.tooltip.remove();
        self.state.tooltip.hide();
        self.state.interaction.on_pointer_leave();
        self.state.snapshots.clear_subscribers();
        self.state.destroyed = true;
        debug!("line chart destroyed");
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.state.config
    }

    /// In-place access to the config; call [`Self::redraw`] afterwards.
    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.state.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.state.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) {
        self.state.style = style;
        self.schedule_redraw();
    }

    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.state.interaction.highlighted_index()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.state.tooltip
    }

    #[must_use]
    pub fn last_snapshot(&self) -> Option<Rc<ChartSnapshot>> {
        self.state.snapshots.last()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.snapshots.subscriber_count()
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.state.scheduler.has_pending()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.state.destroyed
    }

    /// Metrics of the last painted frame.
    #[must_use]
    pub fn canvas_metrics(&self) -> Option<CanvasMetrics> {
        self.state.metrics
    }

    /// X position per category from the last painted frame.
    #[must_use]
    pub fn x_positions(&self) -> &[f64] {
        &self.state.x_positions
    }

    #[must_use]
    pub fn y_range(&self) -> Option<ValueRange> {
        self.state.y_range
    }

    #[must_use]
    pub fn rendered_datasets(&self) -> &[RenderedDataset] {
        &self.state.datasets
    }

    #[must_use]
    pub fn attached_listeners(&self) -> &[HostListener] {
        &self.state.listeners
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_parts(self) -> (R, H) {
        (self.renderer, self.host)
    }

    pub(super) fn schedule_redraw(&mut self) -> bool {
        if self.state.destroyed {
            return false;
        }
        self.state.scheduler.schedule(&mut self.host)
    }

    /// Sizes the pixel buffer for the current layout.
    ///
    /// `None` means the canvas is not laid out and the pass must be skipped.
    fn prepare_surface(&mut self) -> ChartResult<Option<CanvasMetrics>> {
        let (css_width, css_height) = self.renderer.client_size();
        let Some(metrics) = CanvasMetrics::from_client_size(
            css_width,
            css_height,
            self.host.device_pixel_ratio(),
        ) else {
            return Ok(None);
        };

        let target = metrics.buffer_size();
        if self.renderer.buffer_size() != target {
            trace!(width = target.0, height = target.1, "resizing canvas buffer");
            self.renderer.resize_buffer(target.0, target.1)?;
        }
        Ok(Some(metrics))
    }

    fn draw(&mut self) -> ChartResult<bool> {
        let Some(metrics) = self.prepare_surface()? else {
            debug!("canvas not laid out, skipping render pass");
            return Ok(false);
        };

        let label_count = self.state.config.labels.len();
        if self.state.interaction.clamp_to_category_count(label_count) {
            trace!(label_count, "dropped highlight beyond category count");
            self.tooltip.hide();
            self.state.tooltip.hide();
        }

        let pass = build_render_pass(
            &self.state.config,
            &self.state.style,
            metrics,
            self.state.interaction.highlighted_index(),
        );
        self.renderer.render(&pass.frame)?;
        debug!(
            width = metrics.css_width,
            height = metrics.css_height,
            device_pixel_ratio = metrics.device_pixel_ratio,
            datasets = pass.datasets.len(),
            primitives = pass.frame.primitive_count(),
            "rendered line chart"
        );

        let snapshot = ChartSnapshot {
            labels: self.state.config.labels.clone(),
            datasets: pass.datasets.clone(),
        };
        self.state.metrics = Some(metrics);
        self.state.x_positions = pass.x_positions;
        self.state.y_range = Some(pass.y_range);
        self.state.datasets = pass.datasets;
        self.state.snapshots.publish(snapshot);
        Ok(true)
    }
}
