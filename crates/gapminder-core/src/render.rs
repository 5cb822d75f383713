// File: crates/gapminder-core/src/render.rs
// Summary: Headless scene rendering using Skia CPU raster surfaces (PNG file/bytes, RGBA8 buffer).

use skia_safe as skia;

use crate::error::{Result, VizError};
use crate::scene::{Node, Scene};
use crate::text::TextShaper;

pub struct RenderOptions {
    /// Draw text nodes. Off in pixel tests to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

impl Scene {
    /// Render to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| VizError::render("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| VizError::render("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer. Returns (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width.max(1), self.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| VizError::render("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(VizError::render("read_pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Paint the background and every node, back to front.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(self.background);
        let shaper = opts.draw_labels.then(TextShaper::new);

        for node in &self.nodes {
            match node {
                Node::Line { from, to, stroke, width } => {
                    canvas.draw_line(*from, *to, &stroke_paint(*stroke, *width));
                }
                Node::Circle { center, radius, fill } => {
                    canvas.draw_circle(*center, *radius, &fill_paint(*fill));
                }
                Node::Polyline { points, stroke, width } => {
                    if points.len() < 2 { continue; }
                    let mut path = skia::Path::new();
                    path.move_to(points[0]);
                    for &p in points.iter().skip(1) {
                        path.line_to(p);
                    }
                    canvas.draw_path(&path, &stroke_paint(*stroke, *width));
                }
                Node::Rect { rect, fill, stroke } => {
                    let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                    if let Some(f) = fill { canvas.draw_rect(r, &fill_paint(*f)); }
                    if let Some(s) = stroke { canvas.draw_rect(r, &stroke_paint(*s, 1.0)); }
                }
                Node::Text(t) => {
                    if let Some(shaper) = &shaper { shaper.draw(canvas, t); }
                }
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
