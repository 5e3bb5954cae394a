use serde::{Deserialize, Serialize};

use crate::core::RenderedDataset;
use crate::host::LegendContainer;

/// One legend row: a color swatch and the dataset label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

#[must_use]
pub fn legend_entries(datasets: &[RenderedDataset]) -> Vec<LegendEntry> {
    datasets
        .iter()
        .map(|dataset| LegendEntry {
            color: dataset.color.clone(),
            label: dataset.label.clone(),
        })
        .collect()
}

/// Replaces the container's entries with one per dataset.
///
/// Stateless; a missing container is a no-op.
pub fn render_legend<C>(container: Option<&mut C>, datasets: &[RenderedDataset])
where
    C: LegendContainer + ?Sized,
{
    if let Some(container) = container {
        container.replace_entries(legend_entries(datasets));
    }
}
