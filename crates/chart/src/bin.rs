//! Equal-width binning over raw sample values.

use vizlet_core::{series_key, Series};
use vizlet_surface::Color;

/// Value interval `[x0, x1)` with the number of samples that fell inside.
///
/// Intervals are half-open except the last bin of a dataset, which also
/// includes its right edge so the maximum sample is never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Domain used when a dataset has no finite values.
const EMPTY_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Partition `values` into `buckets` equal-width bins that together span
/// exactly `[min, max]` of the finite inputs.
///
/// Always returns `buckets` bins (a count of zero is clamped to one).
/// Non-finite values are skipped. No values at all yields all-zero counts
/// over `[0, 1]`; an all-equal dataset yields zero-width bins with every
/// sample in the first one.
pub fn bin_values(buckets: usize, values: impl IntoIterator<Item = f64>) -> Vec<Bin> {
    let buckets = buckets.max(1);
    let finite: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in &finite {
        min = min.min(v);
        max = max.max(v);
    }
    let (min, max) = if finite.is_empty() { EMPTY_DOMAIN } else { (min, max) };

    let span = max - min;
    let width = span / buckets as f64;
    let mut bins: Vec<Bin> = (0..buckets)
        .map(|i| Bin {
            x0: min + width * i as f64,
            // the exact maximum, not min + width * buckets, so the cover
            // never drifts past the data
            x1: if i + 1 == buckets { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &v in &finite {
        let index = if span == 0.0 {
            0
        } else {
            // v == max computes to `buckets`; clamp it into the last bin
            (((v - min) / span) * buckets as f64) as usize
        };
        bins[index.min(buckets - 1)].count += 1;
    }
    bins
}

/// Derived per-series state, rebuilt from scratch on every data pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedSeries {
    /// Reconciliation identity: the series path, or a positional fallback.
    pub key: String,
    /// Display title: the last segment of the path.
    pub title: String,
    pub color: Color,
    pub path: String,
    pub step: f64,
    pub bins: Vec<Bin>,
    /// Bin counts, index-aligned with `bins`.
    pub counts: Vec<usize>,
    /// Leftmost bin edge.
    pub x_min: f64,
    /// Rightmost bin edge.
    pub x_max: f64,
}

/// Bin every series in the payload, attaching identity keys, titles, and
/// palette fallback colours for streams that arrive without one.
pub fn bin_series(buckets: usize, series: &[Series]) -> Vec<BinnedSeries> {
    series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let bins = bin_values(buckets, s.events.iter().map(|e| e.value));
            let counts = bins.iter().map(|b| b.count).collect();
            let x_min = bins.first().map_or(EMPTY_DOMAIN.0, |b| b.x0);
            let x_max = bins.last().map_or(EMPTY_DOMAIN.1, |b| b.x1);
            BinnedSeries {
                key: series_key(&s.path, index),
                title: s.title().to_string(),
                color: Color::from_hex(&s.color).unwrap_or_else(|| Color::palette(index)),
                path: s.path.clone(),
                step: s.step,
                bins,
                counts,
                x_min,
                x_max,
            }
        })
        .collect()
}
