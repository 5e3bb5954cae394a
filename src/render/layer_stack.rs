use serde::{Deserialize, Serialize};

use super::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};
use crate::error::ChartResult;

/// Paint layers of one chart frame, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Axis,
    Series,
    Crosshair,
}

impl CanvasLayerKind {
    /// Canonical bottom-to-top paint order.
    pub const ORDER: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Axis,
        Self::Series,
        Self::Crosshair,
    ];
}

/// Primitives of one layer.
///
/// Backends paint a layer as rects, lines, paths, circles, then texts, each
/// group in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}
