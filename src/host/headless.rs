use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{ChartHost, FrameHandle, HostListener, TooltipView};
use crate::interaction::TooltipContent;

/// Observable state of a [`HeadlessTooltip`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadlessTooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub content: Option<TooltipContent>,
    pub show_count: usize,
    pub removed: bool,
}

/// Tooltip node that records what it was asked to display.
#[derive(Debug, Clone, Default)]
pub struct HeadlessTooltip {
    state: Rc<RefCell<HeadlessTooltipState>>,
}

impl HeadlessTooltip {
    #[must_use]
    pub fn state(&self) -> HeadlessTooltipState {
        self.state.borrow().clone()
    }
}

impl TooltipView for HeadlessTooltip {
    fn show(&mut self, content: &TooltipContent, x: f64, y: f64) {
        let mut state = self.state.borrow_mut();
        state.visible = true;
        state.x = x;
        state.y = y;
        state.content = Some(content.clone());
        state.show_count += 1;
    }

    fn hide(&mut self) {
        self.state.borrow_mut().visible = false;
    }

    fn remove(&mut self) {
        let mut state = self.state.borrow_mut();
        state.visible = false;
        state.removed = true;
    }
}

/// Host without a windowing system.
///
/// Frame requests are only recorded; the caller drives
/// [`crate::api::LineChart::on_animation_frame`] explicitly, which makes frame
/// coalescing observable in tests and lets tools render synchronously.
#[derive(Debug)]
pub struct HeadlessHost {
    device_pixel_ratio: f64,
    resize_observer_supported: bool,
    next_frame: u64,
    frame_requests: Vec<FrameHandle>,
    cancelled_frames: Vec<FrameHandle>,
    listeners: Vec<HostListener>,
    tooltip: Rc<RefCell<HeadlessTooltipState>>,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            resize_observer_supported: true,
            next_frame: 1,
            frame_requests: Vec::new(),
            cancelled_frames: Vec::new(),
            listeners: Vec::new(),
            tooltip: Rc::default(),
        }
    }
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }

    #[must_use]
    pub fn without_resize_observer(mut self) -> Self {
        self.resize_observer_supported = false;
        self
    }

    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: f64) {
        self.device_pixel_ratio = device_pixel_ratio;
    }

    #[must_use]
    pub fn frame_request_count(&self) -> usize {
        self.frame_requests.len()
    }

    #[must_use]
    pub fn last_frame_request(&self) -> Option<FrameHandle> {
        self.frame_requests.last().copied()
    }

    #[must_use]
    pub fn cancelled_frames(&self) -> &[FrameHandle] {
        &self.cancelled_frames
    }

    /// Listeners currently attached, in attach order.
    #[must_use]
    pub fn attached_listeners(&self) -> &[HostListener] {
        &self.listeners
    }

    #[must_use]
    pub fn tooltip_state(&self) -> HeadlessTooltipState {
        self.tooltip.borrow().clone()
    }
}

impl ChartHost for HeadlessHost {
    type Tooltip = HeadlessTooltip;

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn request_animation_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle::new(self.next_frame);
        self.next_frame += 1;
        self.frame_requests.push(handle);
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        self.cancelled_frames.push(handle);
    }

    fn supports_resize_observer(&self) -> bool {
        self.resize_observer_supported
    }

    fn attach_listener(&mut self, listener: HostListener) {
        self.listeners.push(listener);
    }

    fn detach_listener(&mut self, listener: HostListener) {
        self.listeners.retain(|attached| *attached != listener);
    }

    fn create_tooltip(&mut self) -> Self::Tooltip {
        HeadlessTooltip {
            state: Rc::clone(&self.tooltip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HeadlessHost;
    use crate::host::{ChartHost, HostListener, TooltipView};
    use crate::interaction::TooltipContent;

    #[test]
    fn frame_handles_are_unique_and_recorded() {
        let mut host = HeadlessHost::new();
        let first = host.request_animation_frame();
        let second = host.request_animation_frame();
        assert_ne!(first, second);
        assert_eq!(host.frame_request_count(), 2);

        host.cancel_animation_frame(second);
        assert_eq!(host.cancelled_frames(), &[second]);
    }

    #[test]
    fn detach_removes_listener() {
        let mut host = HeadlessHost::new();
        host.attach_listener(HostListener::PointerMove);
        host.attach_listener(HostListener::PointerLeave);
        host.detach_listener(HostListener::PointerMove);
        assert_eq!(host.attached_listeners(), &[HostListener::PointerLeave]);
    }

    #[test]
    fn tooltip_state_is_shared_with_host() {
        let mut host = HeadlessHost::new();
        let mut tooltip = host.create_tooltip();
        let content = TooltipContent {
            heading: "Jan".to_owned(),
            rows: Vec::new(),
        };
        tooltip.show(&content, 10.0, 20.0);

        let state = host.tooltip_state();
        assert!(state.visible);
        assert_eq!(state.content, Some(content));
        assert_eq!(state.show_count, 1);

        tooltip.remove();
        assert!(host.tooltip_state().removed);
        assert!(!host.tooltip_state().visible);
    }
}
