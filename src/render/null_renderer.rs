use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless canvas used by tests and tooling.
///
/// It validates every frame, keeps the last one for inspection and counts
/// buffer reallocations so resize behavior can be asserted without a backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub client_width: f64,
    pub client_height: f64,
    pub client_left: f64,
    pub client_top: f64,
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub buffer_resizes: usize,
    pub render_calls: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn with_client_size(width: f64, height: f64) -> Self {
        Self {
            client_width: width,
            client_height: height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_client_origin(mut self, left: f64, top: f64) -> Self {
        self.client_left = left;
        self.client_top = top;
        self
    }

    /// Simulates a layout change of the canvas element.
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.client_width = width;
        self.client_height = height;
    }
}

impl Renderer for NullRenderer {
    fn client_size(&self) -> (f64, f64) {
        (self.client_width, self.client_height)
    }

    fn client_origin(&self) -> (f64, f64) {
        (self.client_left, self.client_top)
    }

    fn buffer_size(&self) -> (u32, u32) {
        (self.buffer_width, self.buffer_height)
    }

    fn resize_buffer(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.buffer_width = width;
        self.buffer_height = height;
        self.buffer_resizes += 1;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_calls += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
