// File: crates/gapminder-core/src/scale.rs
// Summary: Linear domain -> pixel scale with inverse mapping and tick generation.

use crate::extent::Extent;
use crate::grid;

/// Maps a numeric domain `[d0, d1]` proportionally onto a pixel range `[r0, r1]`.
/// Either pair may be descending (an inverted y axis is `d0 > d1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Ascending extent padded by `pad` on both ends, mapped onto `range`.
    pub fn padded(extent: Extent, pad: f64, range: (f64, f64)) -> Self {
        let e = extent.padded(pad);
        Self::new((e.min, e.max), range)
    }

    /// Descending padded extent (`max + pad` first), so larger values land near `range.0`.
    pub fn padded_inverted(extent: Extent, pad: f64, range: (f64, f64)) -> Self {
        let e = extent.padded(pad);
        Self::new((e.max, e.min), range)
    }

    /// Map a domain value to the range. A degenerate domain maps everything to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    /// Map a range value back to the domain.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    #[inline]
    pub fn map_f32(&self, v: f64) -> f32 {
        self.map(v) as f32
    }

    /// Roughly `count` nice tick values inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing of the ticks returned by [`LinearScale::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        grid::tick_step(self.domain.0, self.domain.1, count)
    }
}
