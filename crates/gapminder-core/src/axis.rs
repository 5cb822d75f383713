// File: crates/gapminder-core/src/axis.rs
// Summary: Axis model (bottom/left) producing ticks, tick labels and axis line nodes.

use crate::grid::{format_fixed, format_grouped, precision_for_step};
use crate::scale::LinearScale;
use crate::scene::{Scene, TextAnchor, TextNode};
use crate::theme::Theme;
use crate::types::{AXIS_FONT_PX, TICK_COUNT, TICK_LABEL_OFFSET, TICK_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    /// Horizontal axis, ticks hanging below the line.
    Bottom,
    /// Vertical axis, ticks pointing left of the line.
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Thousands separators: `1,200,000`.
    Grouped,
    /// No separators; suits years.
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f32,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub scale: LinearScale,
    pub orient: Orient,
    /// Offset of the axis line: y for a bottom axis, x for a left axis.
    pub position: f32,
    pub format: TickFormat,
    pub tick_count: usize,
}

impl Axis {
    pub fn bottom(scale: LinearScale, y: f32) -> Self {
        Self { scale, orient: Orient::Bottom, position: y, format: TickFormat::Grouped, tick_count: TICK_COUNT }
    }

    pub fn left(scale: LinearScale, x: f32) -> Self {
        Self { scale, orient: Orient::Left, position: x, format: TickFormat::Grouped, tick_count: TICK_COUNT }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ticks(&self) -> Vec<Tick> {
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick { value, px: self.scale.map_f32(value) })
            .collect()
    }

    pub fn tick_label(&self, value: f64) -> String {
        let decimals = precision_for_step(self.scale.tick_step(self.tick_count));
        match self.format {
            TickFormat::Grouped => format_grouped(value, decimals),
            TickFormat::Plain => format_fixed(value, decimals),
        }
    }

    /// Append the axis line, outer ticks, tick marks and tick labels.
    pub fn draw(&self, scene: &mut Scene, theme: &Theme) {
        let (r0, r1) = (self.scale.range.0 as f32, self.scale.range.1 as f32);
        let (lo, hi) = (r0.min(r1), r0.max(r1));
        let p = self.position;
        let stroke = theme.axis_line;

        match self.orient {
            Orient::Bottom => {
                scene.line((lo, p), (hi, p), stroke, 1.0);
                scene.line((lo, p), (lo, p + TICK_SIZE), stroke, 1.0);
                scene.line((hi, p), (hi, p + TICK_SIZE), stroke, 1.0);
                for t in self.ticks() {
                    scene.line((t.px, p), (t.px, p + TICK_SIZE), stroke, 1.0);
                    // 0.71em drops the cap height below the tick
                    let baseline = p + TICK_LABEL_OFFSET + AXIS_FONT_PX * 0.71;
                    scene.text(
                        TextNode::new((t.px, baseline), self.tick_label(t.value), AXIS_FONT_PX, theme.tick_label)
                            .anchored(TextAnchor::Middle),
                    );
                }
            }
            Orient::Left => {
                scene.line((p, lo), (p, hi), stroke, 1.0);
                scene.line((p - TICK_SIZE, lo), (p, lo), stroke, 1.0);
                scene.line((p - TICK_SIZE, hi), (p, hi), stroke, 1.0);
                for t in self.ticks() {
                    scene.line((p - TICK_SIZE, t.px), (p, t.px), stroke, 1.0);
                    let baseline = t.px + AXIS_FONT_PX * 0.32;
                    scene.text(
                        TextNode::new((p - TICK_LABEL_OFFSET, baseline), self.tick_label(t.value), AXIS_FONT_PX, theme.tick_label)
                            .anchored(TextAnchor::End),
                    );
                }
            }
        }
    }
}
