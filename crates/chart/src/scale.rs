//! Linear domain-to-range mapping with tick-friendly bounds.

/// Affine mapping from a numeric data domain onto a pixel range.
///
/// The range may be inverted (pixel coordinates grow downward, so vertical
/// scales map their domain onto `[height, 0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f32, r1: f32) -> Self {
        Self { d0, d1, r0, r1 }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }

    /// Map a domain value to a pixel position.
    ///
    /// A degenerate domain (zero span) maps every value to the middle of
    /// the range; the result is always finite.
    pub fn map(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        if span == 0.0 || !span.is_finite() {
            return (self.r0 + self.r1) / 2.0;
        }
        let t = (v - self.d0) / span;
        (f64::from(self.r0) + t * (f64::from(self.r1) - f64::from(self.r0))) as f32
    }

    /// Round the domain outward to tick-friendly bounds — multiples of 1,
    /// 2, or 5 times a power of ten. `[3, 97]` at ten ticks becomes
    /// `[0, 100]`. Display-only: bin boundaries are never touched by this.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        let step = tick_step(self.d0, self.d1, count);
        if step > 0.0 && step.is_finite() {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    /// Evenly spaced tick values inside the domain, on the same 1-2-5
    /// progression as [`LinearScale::nice`]. A degenerate domain yields a
    /// single tick at the collapsed value.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = tick_step(self.d0, self.d1, count);
        if step <= 0.0 || !step.is_finite() {
            return vec![self.d0];
        }
        let start = (self.d0 / step).ceil() as i64;
        let stop = (self.d1 / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }
}

/// Tick spacing for roughly `count` ticks over `[d0, d1]`.
fn tick_step(d0: f64, d1: f64, count: usize) -> f64 {
    let span = (d1 - d0).abs();
    if span == 0.0 || !span.is_finite() || count == 0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let base = 10f64.powf(raw.log10().floor());
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linearly_between_endpoints() {
        let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0);
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(5.0), 50.0);
        assert_eq!(scale.map(10.0), 100.0);
    }

    #[test]
    fn handles_inverted_pixel_ranges() {
        // vertical scale: larger values sit higher on screen
        let scale = LinearScale::new(0.0, 4.0, 170.0, 0.0);
        assert_eq!(scale.map(0.0), 170.0);
        assert_eq!(scale.map(4.0), 0.0);
        assert_eq!(scale.map(2.0), 85.0);
    }

    #[test]
    fn identical_scales_map_identically() {
        let a = LinearScale::new(1.5, 9.25, 0.0, 340.0);
        let b = LinearScale::new(1.5, 9.25, 0.0, 340.0);
        for v in [1.5, 2.0, 3.7, 9.25] {
            assert_eq!(a.map(v), b.map(v));
        }
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new(5.0, 5.0, 0.0, 340.0);
        assert_eq!(scale.map(5.0), 170.0);
        assert_eq!(scale.map(123.0), 170.0);
        assert!(scale.map(5.0).is_finite());
    }

    #[test]
    fn nice_rounds_outward_to_the_125_progression() {
        let scale = LinearScale::new(3.0, 97.0, 0.0, 100.0).nice(10);
        assert_eq!(scale.domain(), (0.0, 100.0));
    }

    #[test]
    fn nice_keeps_already_round_domains() {
        let scale = LinearScale::new(0.0, 4.0, 0.0, 100.0).nice(4);
        assert_eq!(scale.domain(), (0.0, 4.0));
    }

    #[test]
    fn nice_leaves_degenerate_domains_alone() {
        let scale = LinearScale::new(5.0, 5.0, 0.0, 100.0).nice(10);
        assert_eq!(scale.domain(), (5.0, 5.0));
    }

    #[test]
    fn ticks_land_on_round_values() {
        let scale = LinearScale::new(0.0, 100.0, 0.0, 100.0);
        let ticks = scale.ticks(10);
        assert_eq!(ticks, (0..=10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
    }

    #[test]
    fn ticks_of_a_degenerate_domain_collapse() {
        let scale = LinearScale::new(7.0, 7.0, 0.0, 100.0);
        assert_eq!(scale.ticks(5), vec![7.0]);
    }

    #[test]
    fn ticks_stay_inside_an_unrounded_domain() {
        let scale = LinearScale::new(3.0, 97.0, 0.0, 100.0);
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&90.0));
    }
}
