//! Incremental multi-series histogram renderer.
//!
//! One [`HistogramChart`] instance lives as long as its symbol. Every
//! series in the current dataset gets an equal horizontal slice of the
//! plot area, rendered as its own sub-plot (bars, two axes, a title).
//! Updates reconcile the retained scene against the incoming series set
//! keyed by series identity: new series grow a sub-plot, surviving series
//! are mutated in place without losing their nodes, vanished series take
//! their subtree with them.

use tracing::{debug, warn};

use vizlet_core::Series;
use vizlet_surface::{AxisSide, NodeId, Scene, TextAnchor, Tick};

use crate::bin::{bin_series, BinnedSeries};
use crate::scale::LinearScale;

/// Bucket count used until the host configures one.
pub const DEFAULT_BUCKETS: usize = 10;

const DEFAULT_WIDTH: f32 = 400.0;
const DEFAULT_HEIGHT: f32 = 300.0;
/// Margin on all four sides of each sub-plot.
const SUBPLOT_MARGIN: f32 = 30.0;
/// Bars fill this share of their slot; the rest is gutter.
const BAR_WIDTH_FRACTION: f32 = 0.8;
const X_TICKS: usize = 5;
const Y_TICKS: usize = 4;
const TITLE_SIZE: f32 = 12.0;
/// Distance of the title baseline above the plot area.
const TITLE_OFFSET: f32 = 10.0;

/// Retained node handles for one series' sub-plot.
#[derive(Debug)]
struct SubPlot {
    key: String,
    group: NodeId,
    plot: NodeId,
    bars: NodeId,
    bar_nodes: Vec<NodeId>,
    x_axis: NodeId,
    y_axis: NodeId,
    title: NodeId,
}

/// Pixel geometry shared by every sub-plot of one render pass.
#[derive(Debug, Clone, Copy)]
struct Layout {
    slice: f32,
    inner_w: f32,
    inner_h: f32,
}

/// Multi-series histogram over a retained [`Scene`].
#[derive(Debug)]
pub struct HistogramChart {
    width: f32,
    height: f32,
    buckets: usize,
    y_axis_visible: bool,
    formatted: Vec<BinnedSeries>,
    scene: Scene,
    canvas: NodeId,
    subplots: Vec<SubPlot>,
}

impl HistogramChart {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        let canvas = scene.add_group(scene.root(), "histogram");
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            buckets: DEFAULT_BUCKETS,
            y_axis_visible: true,
            formatted: Vec::new(),
            scene,
            canvas,
            subplots: Vec::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }

    pub fn y_axis_visible(&self) -> bool {
        self.y_axis_visible
    }

    /// Derived per-series state from the most recent data pass.
    pub fn formatted(&self) -> &[BinnedSeries] {
        &self.formatted
    }

    /// Identity keys of the currently displayed sub-plots, in order.
    pub fn subplot_keys(&self) -> impl Iterator<Item = &str> {
        self.subplots.iter().map(|sp| sp.key.as_str())
    }

    /// Root node of the sub-plot displaying `key`, if present.
    pub fn subplot_group(&self, key: &str) -> Option<NodeId> {
        self.subplots.iter().find(|sp| sp.key == key).map(|sp| sp.group)
    }

    /// Rebin the dataset and reconcile the scene against it.
    pub fn update(&mut self, series: &[Series]) {
        self.formatted = bin_series(self.buckets, series);
        debug!(series = series.len(), buckets = self.buckets, "rebinned dataset");
        self.render();
    }

    /// Re-run layout for a new container size using the cached derived
    /// series. No rebinning happens here.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.render();
    }

    /// Change the bucket count. Previously derived bins become invalid, so
    /// the cache is dropped; the owner is expected to push the raw dataset
    /// again, which recomputes everything at the new granularity.
    pub fn set_buckets(&mut self, buckets: usize) {
        let buckets = if buckets == 0 {
            warn!("bucket count 0 requested, clamping to 1");
            1
        } else {
            buckets
        };
        if buckets == self.buckets {
            return;
        }
        self.buckets = buckets;
        self.formatted.clear();
    }

    /// Show or hide every sub-plot's vertical axis. Touches visibility
    /// flags only — no rebinning, no layout.
    pub fn set_y_axis_visible(&mut self, visible: bool) {
        self.y_axis_visible = visible;
        for sp in &self.subplots {
            self.scene.set_visible(sp.y_axis, visible);
        }
    }

    fn render(&mut self) {
        let formatted = std::mem::take(&mut self.formatted);
        self.render_series(&formatted);
        self.formatted = formatted;
    }

    fn render_series(&mut self, formatted: &[BinnedSeries]) {
        let n = formatted.len();
        if n == 0 {
            for sp in self.subplots.drain(..) {
                self.scene.remove(sp.group);
            }
            return;
        }

        let layout = Layout {
            slice: self.height / n as f32,
            inner_w: (self.width - 2.0 * SUBPLOT_MARGIN).max(0.0),
            inner_h: (self.height / n as f32 - 2.0 * SUBPLOT_MARGIN).max(0.0),
        };

        // one vertical scale for every sub-plot, so bar heights compare
        // across series
        let tallest = formatted.iter().flat_map(|f| f.counts.iter()).copied().max().unwrap_or(0);
        let y_scale =
            LinearScale::new(0.0, tallest as f64, layout.inner_h, 0.0).nice(Y_TICKS);

        let mut old = std::mem::take(&mut self.subplots);
        let mut next = Vec::with_capacity(n);

        for (index, series) in formatted.iter().enumerate() {
            let mut sp = match old.iter().position(|sp| sp.key == series.key) {
                Some(pos) => old.swap_remove(pos),
                None => {
                    debug!(key = %series.key, "creating sub-plot");
                    self.create_subplot(&series.key)
                }
            };
            self.layout_subplot(&mut sp, index, series, layout, &y_scale);
            next.push(sp);
        }

        for sp in old {
            debug!(key = %sp.key, "removing sub-plot");
            self.scene.remove(sp.group);
        }
        self.subplots = next;
    }

    fn create_subplot(&mut self, key: &str) -> SubPlot {
        let group = self.scene.add_group(self.canvas, "sub-plot");
        let plot = self.scene.add_group(group, "plot");
        let bars = self.scene.add_group(plot, "bars");
        let x_axis = self.scene.add_axis(plot, "x-axis", AxisSide::Bottom);
        let y_axis = self.scene.add_axis(plot, "y-axis", AxisSide::Left);
        self.scene.set_visible(y_axis, self.y_axis_visible);
        let title = self.scene.add_text(plot, "title");
        if let Some(text) = self.scene.text_mut(title) {
            text.anchor = TextAnchor::Middle;
            text.size = TITLE_SIZE;
        }
        SubPlot {
            key: key.to_string(),
            group,
            plot,
            bars,
            bar_nodes: Vec::new(),
            x_axis,
            y_axis,
            title,
        }
    }

    fn layout_subplot(
        &mut self,
        sp: &mut SubPlot,
        index: usize,
        series: &BinnedSeries,
        layout: Layout,
        y_scale: &LinearScale,
    ) {
        self.scene.set_translate(sp.group, 0.0, index as f32 * layout.slice);
        self.scene.set_translate(sp.plot, SUBPLOT_MARGIN, SUBPLOT_MARGIN);

        let x_scale = LinearScale::new(series.x_min, series.x_max, 0.0, layout.inner_w);
        let slot = layout.inner_w / series.bins.len() as f32;
        let bar_w = (slot * BAR_WIDTH_FRACTION).max(0.0);

        // grow or shrink the retained bar set to the bin count
        while sp.bar_nodes.len() > series.bins.len() {
            if let Some(id) = sp.bar_nodes.pop() {
                self.scene.remove(id);
            }
        }
        while sp.bar_nodes.len() < series.bins.len() {
            sp.bar_nodes.push(self.scene.add_rect(sp.bars, "bar"));
        }

        for (bin, &node) in series.bins.iter().zip(sp.bar_nodes.iter()) {
            let x = x_scale.map(bin.x0) + (slot - bar_w) / 2.0;
            let y = y_scale.map(bin.count as f64);
            self.scene.set_translate(node, x, y);
            if let Some(rect) = self.scene.rect_mut(node) {
                rect.width = bar_w;
                rect.height = (layout.inner_h - y).max(0.0);
                rect.fill = series.color;
            }
        }

        self.scene.set_translate(sp.x_axis, 0.0, layout.inner_h);
        if let Some(axis) = self.scene.axis_mut(sp.x_axis) {
            axis.length = layout.inner_w;
            axis.ticks = x_scale
                .ticks(X_TICKS)
                .into_iter()
                .map(|v| Tick { offset: x_scale.map(v), label: format!("{v}") })
                .collect();
        }

        if let Some(axis) = self.scene.axis_mut(sp.y_axis) {
            axis.length = layout.inner_h;
            axis.ticks = y_scale
                .ticks(Y_TICKS)
                .into_iter()
                .map(|v| Tick { offset: y_scale.map(v), label: format!("{v}") })
                .collect();
        }

        self.scene.set_translate(sp.title, layout.inner_w / 2.0, -TITLE_OFFSET);
        if let Some(text) = self.scene.text_mut(sp.title) {
            if text.content != series.title {
                text.content = series.title.clone();
            }
        }
    }
}

impl Default for HistogramChart {
    fn default() -> Self {
        Self::new()
    }
}
