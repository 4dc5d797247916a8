//! Histogram chart core.
//!
//! Three layers, each usable on its own:
//! - [`bin`] — equal-width binning of raw sample values,
//! - [`scale`] — linear domain→pixel mapping with nice bounds and ticks,
//! - [`histogram`] — the incremental renderer reconciling one sub-plot
//!   per series onto a retained scene.

pub mod bin;
pub mod histogram;
pub mod scale;

pub use bin::{bin_series, bin_values, Bin, BinnedSeries};
pub use histogram::{HistogramChart, DEFAULT_BUCKETS};
pub use scale::LinearScale;
