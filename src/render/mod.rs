mod css_colors;
mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use layer_stack::{CanvasLayerKind, LayerPrimitives};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, RectPrimitive,
    TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::ChartResult;

/// Contract implemented by the host canvas.
///
/// The canvas reports its layout (CSS) size, owns a pixel buffer the engine
/// may resize, and paints fully materialized `RenderFrame`s so drawing code
/// stays isolated from chart domain and interaction logic.
pub trait Renderer {
    /// Layout size in CSS pixels; zero while the element is hidden.
    fn client_size(&self) -> (f64, f64);

    /// Top-left corner of the canvas in client coordinates, used to turn
    /// pointer client positions into canvas offsets.
    fn client_origin(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Current pixel buffer size.
    fn buffer_size(&self) -> (u32, u32);

    /// Reallocates the pixel buffer. Only called when the size changes.
    fn resize_buffer(&mut self, width: u32, height: u32) -> ChartResult<()>;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
