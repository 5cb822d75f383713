// File: crates/gapminder-core/src/types.rs
// Summary: Shared constants (surface sizes, font sizes, tooltip placement) and the plot frame type.

/// Scatter surface width in pixels.
pub const SCATTER_WIDTH: i32 = 750;
/// Scatter surface height in pixels.
pub const SCATTER_HEIGHT: i32 = 500;

/// Nested tooltip chart width in pixels.
pub const TOOLTIP_WIDTH: i32 = 550;
/// Nested tooltip chart height in pixels.
pub const TOOLTIP_HEIGHT: i32 = 550;

/// Horizontal gap between the cursor and the tooltip panel.
pub const TOOLTIP_OFFSET_X: f32 = 20.0;
/// Fixed top edge of the tooltip panel.
pub const TOOLTIP_TOP: f32 = 20.0;
/// Padding inside the tooltip panel around its heading and chart.
pub const TOOLTIP_PADDING: f32 = 8.0;

/// Tick label font size (px).
pub const AXIS_FONT_PX: f32 = 10.0;
/// Tick mark length (px).
pub const TICK_SIZE: f32 = 6.0;
/// Distance from the axis line to tick labels (tick length + 3 px).
pub const TICK_LABEL_OFFSET: f32 = 9.0;
/// Approximate tick count per axis.
pub const TICK_COUNT: usize = 10;

/// Convert typographic points to pixels (96 dpi).
#[inline]
pub fn pt(points: f32) -> f32 {
    points * 4.0 / 3.0
}

/// Where a chart's data lands on its surface, and where its axes sit.
/// Contract: ranges are in surface pixels; `y_range.0` is the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// y coordinate of the bottom axis line.
    pub x_axis_y: f32,
    /// x coordinate of the left axis line.
    pub y_axis_x: f32,
}

impl PlotFrame {
    pub const fn scatter() -> Self {
        Self { x_range: (50.0, 700.0), y_range: (50.0, 450.0), x_axis_y: 450.0, y_axis_x: 50.0 }
    }

    pub const fn tooltip() -> Self {
        Self { x_range: (100.0, 500.0), y_range: (50.0, 450.0), x_axis_y: 450.0, y_axis_x: 100.0 }
    }
}
