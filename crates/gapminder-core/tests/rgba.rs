// File: crates/gapminder-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape, a few pixels, and render idempotence across hovers.

mod common;

use gapminder_core::{compose, LineConfig, RenderOptions, ScatterConfig, ScatterPlot, Theme, TooltipController};

#[test]
fn render_rgba8_buffer() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let scene = plot.scene(&Theme::light());

    let opts = RenderOptions { draw_labels: false }; // avoid font variance
    let (px, w, h, stride) = scene.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (750, 500));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is the white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Centre of the largest circle carries the dot fill
    let china = plot.points.iter().find(|p| p.country == "China").unwrap();
    let i = china.py.round() as usize * stride + china.px.round() as usize * 4;
    assert_eq!(&px[i..i + 3], &[0x42, 0x86, 0xf4]);
}

#[test]
fn rerender_is_pixel_identical_after_hover() {
    let ds = common::fixture();
    let theme = Theme::light();
    let opts = RenderOptions { draw_labels: false };

    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let first = plot.scene(&theme).render_to_rgba8(&opts).unwrap().0;

    let mut ctl = TooltipController::new(LineConfig::default());
    let india = plot.points.iter().find(|p| p.country == "India").unwrap();
    ctl.pointer_moved(&plot, &ds, (india.px, india.py));
    let hovered = compose(&plot.scene(&theme), ctl.active(), &theme).render_to_rgba8(&opts).unwrap().0;
    assert_ne!(hovered.len(), first.len());
    ctl.hover_out();

    let rebuilt = ScatterPlot::build(&ds, &ScatterConfig::default()).unwrap();
    let second = rebuilt.scene(&theme).render_to_rgba8(&opts).unwrap().0;
    assert_eq!(first, second);
}
