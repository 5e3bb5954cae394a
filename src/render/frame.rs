use crate::core::CanvasMetrics;
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, CirclePrimitive, LayerPrimitives, PathPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are CSS pixels. Before painting, backends reset their transform
/// to `scale(metrics.device_pixel_ratio)` and clear
/// `[0, css_width] x [0, css_height]`; layers are then painted in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub metrics: CanvasMetrics,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(metrics: CanvasMetrics) -> Self {
        Self {
            metrics,
            layers: Vec::new(),
        }
    }

    /// Returns the topmost layer of `kind`, appending a new one when the last
    /// layer is of a different kind.
    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let reuse_last = self.layers.last().is_some_and(|layer| layer.kind == kind);
        if !reuse_last {
            self.layers.push(LayerPrimitives::new(kind));
        }
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    /// Always appends a fresh layer, so its content paints above everything
    /// pushed so far.
    pub fn push_layer(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        self.layers.push(LayerPrimitives::new(kind));
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    pub fn layers_of(&self, kind: CanvasLayerKind) -> impl Iterator<Item = &LayerPrimitives> {
        self.layers.iter().filter(move |layer| layer.kind == kind)
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.layers.iter().flat_map(|layer| layer.paths.iter())
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.layers.iter().flat_map(|layer| layer.circles.iter())
    }

    /// Total primitive count across all layers.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| {
                layer.rects.len()
                    + layer.lines.len()
                    + layer.paths.len()
                    + layer.circles.len()
                    + layer.texts.len()
            })
            .sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.metrics.is_valid() {
            return Err(ChartError::InvalidMetrics {
                width: self.metrics.css_width,
                height: self.metrics.css_height,
                device_pixel_ratio: self.metrics.device_pixel_ratio,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
