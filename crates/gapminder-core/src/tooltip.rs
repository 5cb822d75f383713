// File: crates/gapminder-core/src/tooltip.rs
// Summary: Hover tooltip: panel placement, nested line chart, scoped create/release lifecycle and frame composition.

use crate::data::{Dataset, MISSING_MARKER};
use crate::error::Result;
use crate::geometry::{clamp, Rect};
use crate::grid::format_grouped;
use crate::line::{LineChart, LineConfig};
use crate::scatter::{ScatterPlot, ScatterPoint};
use crate::scene::{Node, Scene, TextAnchor, TextNode};
use crate::theme::Theme;
use crate::types::{pt, TOOLTIP_OFFSET_X, TOOLTIP_PADDING, TOOLTIP_TOP};

const HEADING_PX: f32 = 16.0; // 12pt
const HEADING_LINE: f32 = HEADING_PX * 1.4;

/// A tooltip for one hovered country: the floating panel plus its nested line chart.
#[derive(Clone, Debug)]
pub struct Tooltip {
    pub country: String,
    /// Size value of the hovered point, shown in the heading. `None` when the cell was missing.
    pub size: Option<f64>,
    pub year: String,
    pub cursor: (f32, f32),
    pub panel: Rect,
    pub chart: LineChart,
}

impl Tooltip {
    /// Build the panel for `point`, hovered at `cursor`. The chart reads the full dataset.
    /// With `bounds`, the panel is shifted left so it stays inside `(width, height)`.
    pub fn build(
        dataset: &Dataset,
        point: &ScatterPoint,
        year: &str,
        cursor: (f32, f32),
        config: &LineConfig,
        bounds: Option<(f32, f32)>,
    ) -> Result<Self> {
        let chart = LineChart::build(dataset, &point.country, config)?;
        let (w, h) = Self::panel_size(config);
        let mut left = cursor.0 + TOOLTIP_OFFSET_X;
        if let Some((bw, _)) = bounds {
            left = clamp(left, 0.0, (bw - w).max(0.0));
        }
        Ok(Self {
            country: point.country.clone(),
            size: (!point.size_missing).then_some(point.size),
            year: year.to_string(),
            cursor,
            panel: Rect::from_ltwh(left, TOOLTIP_TOP, w, h),
            chart,
        })
    }

    pub fn panel_size(config: &LineConfig) -> (f32, f32) {
        let w = config.width as f32 + TOOLTIP_PADDING * 2.0;
        let h = TOOLTIP_PADDING + HEADING_LINE + config.height as f32 + TOOLTIP_PADDING;
        (w, h)
    }

    /// Top-left corner of the nested chart surface.
    pub fn chart_origin(&self) -> (f32, f32) {
        (self.panel.left + TOOLTIP_PADDING, self.panel.top + TOOLTIP_PADDING + HEADING_LINE)
    }

    /// Append the panel, heading and nested chart to `scene`.
    pub fn draw(&self, scene: &mut Scene, theme: &Theme) {
        scene.push(Node::Rect { rect: self.panel, fill: Some(theme.tooltip_fill), stroke: Some(theme.tooltip_border) });

        let baseline = self.panel.top + TOOLTIP_PADDING + HEADING_PX;
        let size = self.size.map_or_else(|| MISSING_MARKER.to_string(), |v| format_grouped(v, 0));
        scene.text(TextNode::new(
            (self.panel.left + TOOLTIP_PADDING, baseline),
            self.country.clone(),
            HEADING_PX,
            theme.tooltip_text,
        ));
        scene.text(
            TextNode::new(
                (self.panel.right - TOOLTIP_PADDING, baseline),
                format!("{}: {}", self.year, size),
                pt(10.0),
                theme.tooltip_text,
            )
            .anchored(TextAnchor::End),
        );

        let (ox, oy) = self.chart_origin();
        scene.extend_translated(&self.chart.scene(theme), ox, oy);
    }
}

/// `base` with `tooltip` drawn on top. The canvas grows to fit the panel; `base` is untouched.
pub fn compose(base: &Scene, tooltip: Option<&Tooltip>, theme: &Theme) -> Scene {
    let mut frame = base.clone();
    if let Some(t) = tooltip {
        frame.width = frame.width.max(t.panel.right.ceil() as i32 + 1);
        frame.height = frame.height.max(t.panel.bottom.ceil() as i32 + 1);
        t.draw(&mut frame, theme);
    }
    frame
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverChange {
    /// A new tooltip was created for this country (any previous one released).
    Entered(String),
    /// The active tooltip was released.
    Left,
    /// No tooltip could be built for this country (any previous one released).
    Unavailable(String),
    Unchanged,
}

/// Owns at most one tooltip. Hover-in replaces (and so releases) the previous tooltip;
/// hover-out releases it.
#[derive(Debug, Default)]
pub struct TooltipController {
    config: LineConfig,
    bounds: Option<(f32, f32)>,
    active: Option<Tooltip>,
    /// Country whose tooltip last failed to build; not retried until the pointer leaves it.
    failed: Option<String>,
}

impl TooltipController {
    pub fn new(config: LineConfig) -> Self {
        Self { config, bounds: None, active: None, failed: None }
    }

    /// Keep panels inside a `width` x `height` window.
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Some((width, height));
        self
    }

    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }

    pub fn hover_in(&mut self, dataset: &Dataset, point: &ScatterPoint, year: &str, cursor: (f32, f32)) -> Result<&Tooltip> {
        // Release first so a failed build leaves no stale panel behind.
        self.active = None;
        let tooltip = Tooltip::build(dataset, point, year, cursor, &self.config, self.bounds)?;
        tracing::debug!(country = %tooltip.country, "tooltip shown");
        let active: &Tooltip = self.active.insert(tooltip);
        Ok(active)
    }

    /// Release the active tooltip, returning it.
    pub fn hover_out(&mut self) -> Option<Tooltip> {
        self.failed = None;
        let released = self.active.take();
        if let Some(t) = &released {
            tracing::debug!(country = %t.country, "tooltip hidden");
        }
        released
    }

    /// Hit-test `cursor` against `plot` and enter, leave or keep the tooltip accordingly.
    /// The pointer over the active panel keeps it; a failed build is logged and reported as `Unavailable`.
    pub fn pointer_moved(&mut self, plot: &ScatterPlot, dataset: &Dataset, cursor: (f32, f32)) -> HoverChange {
        if self.active.as_ref().is_some_and(|t| t.panel.contains(cursor.0, cursor.1)) {
            return HoverChange::Unchanged;
        }
        match plot.hit_test(cursor.0, cursor.1) {
            Some(p) if self.active.as_ref().is_some_and(|t| t.country == p.country) => HoverChange::Unchanged,
            Some(p) if self.failed.as_deref() == Some(p.country.as_str()) => HoverChange::Unchanged,
            Some(p) => match self.hover_in(dataset, p, &plot.config.year, cursor) {
                Ok(tooltip) => {
                    let country = tooltip.country.clone();
                    self.failed = None;
                    HoverChange::Entered(country)
                }
                Err(e) => {
                    tracing::warn!(country = %p.country, "tooltip unavailable: {e}");
                    self.failed = Some(p.country.clone());
                    HoverChange::Unavailable(p.country.clone())
                }
            },
            None => match self.hover_out() {
                Some(_) => HoverChange::Left,
                None => HoverChange::Unchanged,
            },
        }
    }
}
