// File: crates/gapminder-core/src/theme.rs
// Summary: Light/Dark theming for scatter, line chart and tooltip colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub dot_fill: skia::Color,
    pub dot_label: skia::Color,
    pub line_stroke: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    /// Plain page look: white background, black axes, blue dots, steelblue line.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            dot_fill: skia::Color::from_argb(255, 0x42, 0x86, 0xf4),
            dot_label: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 70, 130, 180), // steelblue
            tooltip_fill: skia::Color::from_argb(230, 255, 255, 255), // 0.9 opacity
            tooltip_border: skia::Color::from_argb(255, 160, 160, 170),
            tooltip_text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            dot_fill: skia::Color::from_argb(255, 64, 160, 255),
            dot_label: skia::Color::from_argb(255, 210, 210, 220),
            line_stroke: skia::Color::from_argb(255, 96, 156, 255),
            tooltip_fill: skia::Color::from_argb(230, 30, 30, 36),
            tooltip_border: skia::Color::from_argb(255, 80, 80, 90),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
