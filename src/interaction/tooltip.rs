use serde::{Deserialize, Serialize};

/// One dataset line inside the tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub label: String,
    pub color: String,
    pub value: String,
}

/// Data contract handed to the host tooltip node; styling is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub heading: String,
    pub rows: Vec<TooltipRow>,
}

/// Engine-side view of the tooltip, mirrored into the host node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub content: Option<TooltipContent>,
}

impl TooltipState {
    pub fn show(&mut self, content: TooltipContent, x: f64, y: f64) {
        self.visible = true;
        self.x = x;
        self.y = y;
        self.content = Some(content);
    }

    /// Hides the tooltip; the last content is kept, as the host node keeps
    /// its markup while invisible.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
