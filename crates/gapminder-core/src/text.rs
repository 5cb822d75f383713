// File: crates/gapminder-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; draws scene text nodes with anchor and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::scene::{TextAnchor, TextNode};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `node` with its baseline at `node.pos`, honouring anchor and rotation.
    pub fn draw(&self, canvas: &skia::Canvas, node: &TextNode) {
        if node.text.is_empty() { return; }
        let p = self.layout(&node.text, node.size, node.color);
        let w = p.longest_line();
        let dx = match node.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -w * 0.5,
            TextAnchor::End => -w,
        };

        canvas.save();
        canvas.translate((node.pos.0, node.pos.1));
        if node.rotation != 0.0 {
            canvas.rotate(node.rotation, None);
        }
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (dx, -node.size * 0.8));
        canvas.restore();
    }
}
