use tracing::trace;

use crate::host::{ChartHost, FrameHandle};

/// Coalesces redraw requests into at most one pending animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedrawScheduler {
    pending: Option<FrameHandle>,
}

impl RedrawScheduler {
    /// Requests a frame unless one is already pending.
    ///
    /// Returns `true` when a new frame was requested.
    pub fn schedule<H: ChartHost>(&mut self, host: &mut H) -> bool {
        if self.pending.is_some() {
            trace!("redraw already pending, coalescing request");
            return false;
        }
        let handle = host.request_animation_frame();
        trace!(frame = handle.raw(), "requested animation frame");
        self.pending = Some(handle);
        true
    }

    /// Clears the pending handle right before the render runs, so the render
    /// itself may schedule a follow-up frame.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Cancels the pending frame, if any.
    pub fn cancel<H: ChartHost>(&mut self, host: &mut H) -> bool {
        match self.pending.take() {
            Some(handle) => {
                host.cancel_animation_frame(handle);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
