//! Host environment contracts.
//!
//! The chart never talks to a windowing system directly. Frame scheduling,
//! listener registration, the floating tooltip node and the legend container
//! are reached through the traits below so the engine stays testable
//! headlessly and portable across embedders.

mod headless;

pub use headless::{HeadlessHost, HeadlessTooltip, HeadlessTooltipState};

use serde::{Deserialize, Serialize};

use crate::api::LegendEntry;
use crate::interaction::TooltipContent;

/// Opaque token returned by a frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Host notifications the chart subscribes to for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostListener {
    /// Size observer bound to the canvas element.
    ResizeObserver,
    /// Window-level resize fallback when no observer is available.
    WindowResize,
    PointerMove,
    PointerLeave,
}

/// Scheduling and listener surface provided by the embedding environment.
pub trait ChartHost {
    type Tooltip: TooltipView;

    /// Current device pixel ratio. Values that are not finite and positive are
    /// treated as `1.0` by the engine.
    fn device_pixel_ratio(&self) -> f64;

    /// Requests a single callback before the next paint.
    ///
    /// The host later calls [`crate::api::LineChart::on_animation_frame`].
    fn request_animation_frame(&mut self) -> FrameHandle;

    fn cancel_animation_frame(&mut self, handle: FrameHandle);

    fn supports_resize_observer(&self) -> bool;

    fn attach_listener(&mut self, listener: HostListener);

    fn detach_listener(&mut self, listener: HostListener);

    /// Creates the floating tooltip node, initially hidden.
    fn create_tooltip(&mut self) -> Self::Tooltip;
}

/// Floating tooltip node owned by the chart.
pub trait TooltipView {
    /// Replaces the tooltip content and shows it at `(x, y)`, in canvas offsets.
    fn show(&mut self, content: &TooltipContent, x: f64, y: f64);

    fn hide(&mut self);

    /// Detaches the node from the document. Called once on destroy.
    fn remove(&mut self);
}

/// Container receiving legend entries.
pub trait LegendContainer {
    /// Clears the previous entries and appends the new ones in order.
    fn replace_entries(&mut self, entries: Vec<LegendEntry>);
}

impl LegendContainer for Vec<LegendEntry> {
    fn replace_entries(&mut self, entries: Vec<LegendEntry>) {
        *self = entries;
    }
}
