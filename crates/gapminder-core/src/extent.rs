// File: crates/gapminder-core/src/extent.rs
// Summary: Min/max scans over plotted series (extents and per-chart axis limits).

/// (minimum, maximum) of a data series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Scan `values`, ignoring non-finite entries. `None` when nothing finite was seen.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            if !v.is_finite() { continue; }
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() { Some(Self { min, max }) } else { None }
    }

    /// Widen both ends by `pad`.
    pub fn padded(&self, pad: f64) -> Self {
        Self { min: self.min - pad, max: self.max + pad }
    }
}

/// Extents of the two plotted dimensions of one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub x: Extent,
    pub y: Extent,
}

impl AxisLimits {
    /// Both extents from (x, y) pairs; `None` when either dimension is empty.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let x = Extent::of(points.iter().map(|p| p.0))?;
        let y = Extent::of(points.iter().map(|p| p.1))?;
        Some(Self { x, y })
    }
}
