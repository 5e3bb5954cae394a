mod tooltip;

pub use tooltip::{TooltipContent, TooltipRow, TooltipState};

use serde::{Deserialize, Serialize};

/// Pointer-driven highlight state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Highlighted(usize),
}

/// Last pointer position, as an offset inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: Option<PointerOffset>,
    highlighted_index: Option<usize>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match self.highlighted_index {
            Some(index) => InteractionMode::Highlighted(index),
            None => InteractionMode::Idle,
        }
    }

    #[must_use]
    pub fn pointer(self) -> Option<PointerOffset> {
        self.pointer
    }

    #[must_use]
    pub fn highlighted_index(self) -> Option<usize> {
        self.highlighted_index
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some(PointerOffset { x, y });
    }

    /// Highlights `index`. Returns `true` when the highlighted column changed.
    pub fn highlight(&mut self, index: usize) -> bool {
        let changed = self.highlighted_index != Some(index);
        self.highlighted_index = Some(index);
        changed
    }

    /// Back to idle. Returns `true` when a column was highlighted.
    pub fn clear_highlight(&mut self) -> bool {
        self.highlighted_index.take().is_some()
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.highlighted_index = None;
    }

    /// Drops a highlight that no longer points at a category.
    pub fn clamp_to_category_count(&mut self, category_count: usize) -> bool {
        match self.highlighted_index {
            Some(index) if index >= category_count => {
                self.highlighted_index = None;
                true
            }
            _ => false,
        }
    }
}

/// Index of the x position closest to `offset_x`.
///
/// Linear left-to-right scan with a strict comparison, so when two columns
/// are equally distant the lower index wins. Non-finite positions are skipped.
#[must_use]
pub fn nearest_index(x_positions: &[f64], offset_x: f64) -> Option<usize> {
    if !offset_x.is_finite() {
        return None;
    }
    let mut nearest = None;
    let mut smallest_distance = f64::INFINITY;
    for (index, x) in x_positions.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        let distance = (x - offset_x).abs();
        if distance < smallest_distance {
            smallest_distance = distance;
            nearest = Some(index);
        }
    }
    nearest
}
