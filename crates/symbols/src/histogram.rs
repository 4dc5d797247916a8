//! Histogram symbol: a [`HistogramChart`] wired to the change contract.
//!
//! The symbol caches the most recent payload so that a bucket-count change
//! arriving on its own can rebin the existing dataset at the new
//! granularity. Dispatch order within one change-set: buckets first, then
//! data, then size, then axis visibility — a combined buckets+data change
//! therefore rebins exactly once.

use vizlet_chart::HistogramChart;
use vizlet_core::{ChangeSet, DataEnvelope, Symbol};
use vizlet_surface::Scene;

#[derive(Debug, Default)]
pub struct HistogramSymbol {
    chart: HistogramChart,
    data: Option<DataEnvelope>,
}

impl HistogramSymbol {
    pub fn new() -> Self {
        Self { chart: HistogramChart::new(), data: None }
    }

    /// The underlying chart, for inspection.
    pub fn chart(&self) -> &HistogramChart {
        &self.chart
    }
}

impl Symbol for HistogramSymbol {
    fn kind(&self) -> &'static str {
        "histogram"
    }

    fn apply_change(&mut self, change: &ChangeSet) {
        if let Some(buckets) = change.buckets {
            self.chart.set_buckets(buckets);
            // no fresh payload in this notification: rebin the cached one
            if change.data.is_none() {
                if let Some(data) = &self.data {
                    self.chart.update(&data.body);
                }
            }
        }
        if let Some(data) = &change.data {
            self.data = Some(data.clone());
            self.chart.update(&data.body);
        }
        if let Some((width, height)) = change.size {
            self.chart.set_size(width, height);
        }
        if let Some(visible) = change.y_axis_visible {
            self.chart.set_y_axis_visible(visible);
        }
    }

    fn scene(&self) -> &Scene {
        self.chart.scene()
    }

    fn size(&self) -> (f32, f32) {
        self.chart.size()
    }
}
