use std::sync::Arc;

use tracing::trace;

use crate::core::{DataValue, Point, RenderedDataset};
use crate::host::{ChartHost, TooltipView};
use crate::interaction::{TooltipContent, TooltipRow, nearest_index};
use crate::render::Renderer;

use super::{ChartSnapshot, LineChart};

const MISSING_VALUE_PLACEHOLDER: &str = "\u{2014}";

/// Default tooltip value: the display value plus the dataset unit, or an em
/// dash when the display value is missing.
#[must_use]
pub fn default_tooltip_value(dataset: &RenderedDataset, point: &Point) -> String {
    match &point.raw {
        DataValue::Missing => MISSING_VALUE_PLACEHOLDER.to_owned(),
        raw if dataset.unit.is_empty() => raw.to_string(),
        raw => format!("{raw} {}", dataset.unit),
    }
}

impl<R: Renderer, H: ChartHost> LineChart<R, H> {
    /// Pointer move in client coordinates.
    ///
    /// Ignored until a snapshot with at least one label exists. A nearest
    /// column without any point behaves like [`Self::on_pointer_leave`].
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        if self.state.destroyed {
            return;
        }
        let Some(snapshot) = self
            .state
            .snapshots
            .last()
            .filter(|snapshot| !snapshot.labels.is_empty())
        else {
            return;
        };

        let (origin_x, origin_y) = self.renderer.client_origin();
        let offset_x = client_x - origin_x;
        let offset_y = client_y - origin_y;
        self.state.interaction.on_pointer_move(offset_x, offset_y);

        let nearest = nearest_index(&self.state.x_positions, offset_x).filter(|index| {
            snapshot
                .datasets
                .iter()
                .any(|dataset| dataset.point_at(*index).is_some())
        });
        let Some(index) = nearest else {
            trace!(offset_x, "no data under pointer");
            self.on_pointer_leave();
            return;
        };

        if self.state.interaction.highlight(index) {
            trace!(index, "highlighted column changed");
            self.schedule_redraw();
        }

        let content = self.tooltip_content(&snapshot, index);
        self.tooltip.show(&content, offset_x, offset_y);
        self.state.tooltip.show(content, offset_x, offset_y);
    }

    /// Pointer left the canvas: clears the highlight and hides the tooltip.
    pub fn on_pointer_leave(&mut self) {
        if self.state.destroyed {
            return;
        }
        self.state.interaction.on_pointer_leave();
        self.schedule_redraw();
        self.tooltip.hide();
        self.state.tooltip.hide();
    }

    /// Swaps the tooltip value formatter and requests a redraw.
    pub fn set_tooltip_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&RenderedDataset, &Point) -> String + Send + Sync + 'static,
    {
        self.state.config.tooltip.value_formatter = Some(Arc::new(formatter));
        self.schedule_redraw();
    }

    fn tooltip_content(&self, snapshot: &ChartSnapshot, index: usize) -> TooltipContent {
        let formatter = self.state.config.tooltip.value_formatter.as_ref();
        let rows = snapshot
            .datasets
            .iter()
            .filter_map(|dataset| {
                let point = dataset.point_at(index)?;
                let value = match formatter {
                    Some(formatter) => formatter(dataset, point),
                    None => default_tooltip_value(dataset, point),
                };
                Some(TooltipRow {
                    label: dataset.label.clone(),
                    color: dataset.color.clone(),
                    value,
                })
            })
            .collect();

        TooltipContent {
            heading: snapshot.labels.get(index).cloned().unwrap_or_default(),
            rows,
        }
    }
}
