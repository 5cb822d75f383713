// File: crates/gapminder-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the fixture scatter (and a hovered frame) to PNG bytes without text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note; the anchored pixel checks below still run on every render.

mod common;

use gapminder_core::{compose, LineConfig, RenderOptions, ScatterConfig, ScatterPlot, Theme, TooltipController};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

type Rgba = image::RgbaImage;

fn decode(bytes: &[u8]) -> Rgba {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

fn rgb(img: &Rgba, x: f32, y: f32) -> [u8; 3] {
    let p = img.get_pixel(x.floor() as u32, y.floor() as u32).0;
    [p[0], p[1], p[2]]
}

fn snap_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_scatter() {
    let ds = common::fixture();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).expect("build");
    let opts = RenderOptions { draw_labels: false }; // deterministic
    let bytes = plot.scene(&Theme::light()).render_to_png_bytes(&opts).expect("render bytes");

    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (750, 500));
    assert_eq!(rgb(&img, 0.0, 0.0), [255, 255, 255]);
    assert_eq!(rgb(&img, 740.0, 490.0), [255, 255, 255]);
    for p in &plot.points {
        assert_eq!(rgb(&img, p.px, p.py), [0x42, 0x86, 0xf4], "circle centre of {}", p.country);
    }
    // Bottom domain line at y = 450 and left one at x = 50.
    assert!((448..=451).any(|y| img.get_pixel(375, y).0[0] < 160));
    assert!((48..=51).any(|x| img.get_pixel(x, 250).0[0] < 160));

    write_or_compare(&snap_path("scatter_1980.png"), &bytes);
}

#[test]
fn golden_scatter_with_tooltip() {
    let ds = common::fixture();
    let theme = Theme::light();
    let plot = ScatterPlot::build(&ds, &ScatterConfig::default()).expect("build");
    let india = plot.points.iter().find(|p| p.country == "India").expect("india plotted");

    let mut ctl = TooltipController::new(LineConfig::default());
    ctl.hover_in(&ds, india, "1980", (india.px, india.py)).expect("tooltip");
    let base = plot.scene(&theme);
    let frame = compose(&base, ctl.active(), &theme);

    let opts = RenderOptions { draw_labels: false };
    let bytes = frame.render_to_png_bytes(&opts).expect("render bytes");
    let img = decode(&bytes);
    let base_img = decode(&base.render_to_png_bytes(&opts).expect("render base"));

    let tooltip = ctl.active().expect("active tooltip");
    let panel = tooltip.panel;
    assert_eq!(img.dimensions(), (frame.width as u32, frame.height as u32));
    assert!(img.width() as f32 > panel.right && img.height() as f32 > panel.bottom);

    // Away from the panel the frame is the plain scatter, pixel for pixel.
    let near_panel = |x: u32, y: u32| {
        let (x, y) = (x as f32, y as f32);
        x >= panel.left - 2.0 && x <= panel.right + 2.0 && y >= panel.top - 2.0 && y <= panel.bottom + 2.0
    };
    for (x, y, want) in base_img.enumerate_pixels() {
        if !near_panel(x, y) {
            assert_eq!(img.get_pixel(x, y), want, "pixel ({x}, {y}) changed outside the panel");
        }
    }

    // The population line shows up in steelblue near each segment midpoint.
    let (ox, oy) = tooltip.chart_origin();
    for seg in tooltip.chart.pixel_points().windows(2) {
        let (mx, my) = (ox + (seg[0].0 + seg[1].0) / 2.0, oy + (seg[0].1 + seg[1].1) / 2.0);
        let bluish = (-1..=1).flat_map(|dx| (-1..=1).map(move |dy| (dx, dy))).any(|(dx, dy)| {
            let [r, _, b] = rgb(&img, mx + dx as f32, my + dy as f32);
            b as i32 - r as i32 >= 25
        });
        assert!(bluish, "no line stroke near ({mx}, {my})");
    }

    write_or_compare(&snap_path("scatter_1980_india.png"), &bytes);
}
