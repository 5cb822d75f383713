// File: crates/gapminder-core/src/line.rs
// Summary: Population-over-time line chart for one country, drawn inside the tooltip.

use crate::axis::{Axis, TickFormat};
use crate::data::{is_missing, Dataset, Field};
use crate::error::{Result, VizError};
use crate::extent::AxisLimits;
use crate::scale::LinearScale;
use crate::scene::{Node, Scene, TextNode};
use crate::theme::Theme;
use crate::types::{pt, PlotFrame, TOOLTIP_HEIGHT, TOOLTIP_WIDTH};

#[derive(Clone, Debug)]
pub struct LineConfig {
    pub x_field: Field,
    pub y_field: Field,
    pub x_pad: f64,
    pub y_pad: f64,
    pub frame: PlotFrame,
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub stroke_width: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            x_field: Field::Year,
            y_field: Field::Population,
            x_pad: 0.5,
            y_pad: 5.0,
            frame: PlotFrame::tooltip(),
            width: TOOLTIP_WIDTH,
            height: TOOLTIP_HEIGHT,
            title: "Population over Time".to_string(),
            x_title: "Year".to_string(),
            y_title: "Population".to_string(),
            stroke_width: 1.0,
        }
    }
}

/// `(x, y)` points for `country`: rows with a missing y dropped, sorted by x ascending.
/// Malformed numbers are errors; a missing x also drops the row.
pub fn country_series(dataset: &Dataset, country: &str, x_field: Field, y_field: Field) -> Result<Vec<(f64, f64)>> {
    let mut points = Vec::new();
    for row in dataset.for_country(country) {
        if is_missing(row.raw(y_field)) {
            continue;
        }
        match (row.value(x_field)?, row.value(y_field)?) {
            (Some(x), Some(y)) => points.push((x, y)),
            _ => tracing::debug!(country, line = row.line, "skipping row with missing value"),
        }
    }
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(points)
}

#[derive(Clone, Debug)]
pub struct LineChart {
    pub country: String,
    pub config: LineConfig,
    pub limits: AxisLimits,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    /// Data points, x ascending.
    pub points: Vec<(f64, f64)>,
}

impl LineChart {
    /// Build from the full, unfiltered dataset.
    pub fn build(dataset: &Dataset, country: &str, config: &LineConfig) -> Result<Self> {
        let points = country_series(dataset, country, config.x_field, config.y_field)?;
        let limits = AxisLimits::from_points(&points)
            .ok_or_else(|| VizError::empty(format!("country '{country}'")))?;

        let x_scale = LinearScale::padded(limits.x, config.x_pad, config.frame.x_range);
        let y_scale = LinearScale::padded_inverted(limits.y, config.y_pad, config.frame.y_range);

        tracing::debug!(country, points = points.len(), "built line chart");
        Ok(Self { country: country.to_string(), config: config.clone(), limits, x_scale, y_scale, points })
    }

    pub fn pixel_points(&self) -> Vec<(f32, f32)> {
        self.points
            .iter()
            .map(|&(x, y)| (self.x_scale.map_f32(x), self.y_scale.map_f32(y)))
            .collect()
    }

    pub fn scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(self.config.width, self.config.height, theme.tooltip_fill);
        Axis::bottom(self.x_scale, self.config.frame.x_axis_y)
            .with_format(TickFormat::Plain)
            .draw(&mut scene, theme);
        Axis::left(self.y_scale, self.config.frame.y_axis_x).draw(&mut scene, theme);

        scene.push(Node::Polyline {
            points: self.pixel_points(),
            stroke: theme.line_stroke,
            width: self.config.stroke_width,
        });

        scene.text(TextNode::new((100.0, 30.0), self.config.title.clone(), pt(14.0), theme.title));
        scene.text(TextNode::new((275.0, 490.0), self.config.x_title.clone(), pt(10.0), theme.title));
        scene.text(TextNode::new((15.0, 300.0), self.config.y_title.clone(), pt(10.0), theme.title).rotated(-90.0));
        scene
    }
}
