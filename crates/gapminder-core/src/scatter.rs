// File: crates/gapminder-core/src/scatter.rs
// Summary: Scatter plot builder: year filter, extents, scales, sized circles, labels and hit testing.

use crate::axis::Axis;
use crate::data::{is_missing, Dataset, Field, MissingPolicy};
use crate::error::{Result, VizError};
use crate::extent::{AxisLimits, Extent};
use crate::geometry::circle_contains;
use crate::scale::LinearScale;
use crate::scene::{Node, Scene, TextNode};
use crate::theme::Theme;
use crate::types::{pt, PlotFrame, SCATTER_HEIGHT, SCATTER_WIDTH};

#[derive(Clone, Debug)]
pub struct ScatterConfig {
    /// Only rows whose `year` cell equals this string are plotted.
    pub year: String,
    pub x_field: Field,
    pub y_field: Field,
    pub size_field: Field,
    /// Domain buffer added on both sides of the x extent.
    pub x_pad: f64,
    /// Domain buffer added on both sides of the y extent.
    pub y_pad: f64,
    pub radius_range: (f64, f64),
    /// Circles at or above this size value get a country label.
    pub label_threshold: f64,
    pub label_offset: (f32, f32),
    pub frame: PlotFrame,
    pub width: i32,
    pub height: i32,
    pub missing: MissingPolicy,
    pub x_title: String,
    pub y_title: String,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            year: "1980".to_string(),
            x_field: Field::Fertility,
            y_field: Field::LifeExpectancy,
            size_field: Field::Population,
            x_pad: 0.5,
            y_pad: 5.0,
            radius_range: (3.0, 20.0),
            label_threshold: 100_000_000.0,
            label_offset: (20.0, 5.0),
            frame: PlotFrame::scatter(),
            width: SCATTER_WIDTH,
            height: SCATTER_HEIGHT,
            missing: MissingPolicy::Skip,
            x_title: "Fertility Rates (Avg Children per Woman)".to_string(),
            y_title: "Life Expectancy (years)".to_string(),
        }
    }
}

/// One plotted row, in data and pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// The size cell was missing and `size` was filled in by the missing policy.
    pub size_missing: bool,
    pub px: f32,
    pub py: f32,
    pub radius: f32,
    pub labelled: bool,
}

#[derive(Clone, Debug)]
pub struct ScatterPlot {
    pub config: ScatterConfig,
    pub limits: AxisLimits,
    pub size_extent: Extent,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub size_scale: LinearScale,
    /// Points in draw order (file order of the year's rows).
    pub points: Vec<ScatterPoint>,
}

impl ScatterPlot {
    pub fn build(dataset: &Dataset, config: &ScatterConfig) -> Result<Self> {
        let rows = dataset.for_year(&config.year);

        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            let x = row.resolve(config.x_field, config.missing)?;
            let y = row.resolve(config.y_field, config.missing)?;
            let s = row.resolve(config.size_field, config.missing)?;
            match (x, y, s) {
                (Some(x), Some(y), Some(s)) => {
                    values.push((row.country.as_str(), x, y, s, is_missing(row.raw(config.size_field))))
                }
                _ => tracing::debug!(country = %row.country, line = row.line, "skipping row with missing value"),
            }
        }

        let what = || format!("year {}", config.year);
        let x = Extent::of(values.iter().map(|v| v.1)).ok_or_else(|| VizError::empty(what()))?;
        let y = Extent::of(values.iter().map(|v| v.2)).ok_or_else(|| VizError::empty(what()))?;
        let size_extent = Extent::of(values.iter().map(|v| v.3)).ok_or_else(|| VizError::empty(what()))?;

        let frame = config.frame;
        let x_scale = LinearScale::padded(x, config.x_pad, frame.x_range);
        let y_scale = LinearScale::padded_inverted(y, config.y_pad, frame.y_range);
        let size_scale = LinearScale::new((size_extent.min, size_extent.max), config.radius_range);

        let points = values
            .into_iter()
            .map(|(country, x, y, s, size_missing)| ScatterPoint {
                country: country.to_string(),
                x,
                y,
                size: s,
                size_missing,
                px: x_scale.map_f32(x),
                py: y_scale.map_f32(y),
                radius: size_scale.map_f32(s),
                labelled: s >= config.label_threshold,
            })
            .collect::<Vec<_>>();

        tracing::debug!(year = %config.year, points = points.len(), "built scatter plot");

        Ok(Self {
            config: config.clone(),
            limits: AxisLimits { x, y },
            size_extent,
            x_scale,
            y_scale,
            size_scale,
            points,
        })
    }

    pub fn x_axis(&self) -> Axis {
        Axis::bottom(self.x_scale, self.config.frame.x_axis_y)
    }

    pub fn y_axis(&self) -> Axis {
        Axis::left(self.y_scale, self.config.frame.y_axis_x)
    }

    /// Lay out axes, circles, country labels and axis titles.
    pub fn scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(self.config.width, self.config.height, theme.background);
        self.x_axis().draw(&mut scene, theme);
        self.y_axis().draw(&mut scene, theme);

        for p in &self.points {
            scene.push(Node::Circle { center: (p.px, p.py), radius: p.radius, fill: theme.dot_fill });
        }

        let (ox, oy) = self.config.label_offset;
        for p in self.points.iter().filter(|p| p.labelled) {
            scene.text(TextNode::new((p.px + ox, p.py + oy), p.country.clone(), pt(10.0), theme.dot_label));
        }

        scene.text(TextNode::new((275.0, 490.0), self.config.x_title.clone(), pt(10.0), theme.title));
        scene.text(TextNode::new((15.0, 300.0), self.config.y_title.clone(), pt(10.0), theme.title).rotated(-90.0));
        scene
    }

    /// The topmost (last drawn) point whose circle contains `(x, y)`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&ScatterPoint> {
        self.points.iter().rev().find(|p| circle_contains(p.px, p.py, p.radius, x, y))
    }
}
