// File: crates/gapminder-core/src/svg.rs
// Summary: SVG serialisation of a scene (same node order and coordinates as the raster path).

use std::fmt::Write as _;

use skia_safe as skia;

use crate::error::Result;
use crate::render::RenderOptions;
use crate::scene::{Node, Scene, TextAnchor};

impl Scene {
    pub fn to_svg_string(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        // write! into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%"{}/>"#, fill_attr(self.background));

        for node in &self.nodes {
            match node {
                Node::Line { from, to, stroke, width } => {
                    let _ = writeln!(
                        out,
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-width="{}"/>"#,
                        num(from.0), num(from.1), num(to.0), num(to.1), stroke_attr(*stroke), num(*width)
                    );
                }
                Node::Circle { center, radius, fill } => {
                    let _ = writeln!(
                        out,
                        r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                        num(center.0), num(center.1), num(*radius), fill_attr(*fill)
                    );
                }
                Node::Polyline { points, stroke, width } => {
                    if points.len() < 2 { continue; }
                    let d = points
                        .iter()
                        .enumerate()
                        .map(|(i, p)| format!("{}{},{}", if i == 0 { "M" } else { "L" }, num(p.0), num(p.1)))
                        .collect::<Vec<_>>()
                        .join("");
                    let _ = writeln!(
                        out,
                        r#"<path d="{}" fill="none"{} stroke-width="{}"/>"#,
                        d, stroke_attr(*stroke), num(*width)
                    );
                }
                Node::Rect { rect, fill, stroke } => {
                    let fill = fill.map(fill_attr).unwrap_or_else(|| r#" fill="none""#.to_string());
                    let stroke = stroke.map(stroke_attr).unwrap_or_default();
                    let _ = writeln!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
                        num(rect.left), num(rect.top), num(rect.width()), num(rect.height()), fill, stroke
                    );
                }
                Node::Text(t) => {
                    if !opts.draw_labels { continue; }
                    let anchor = match t.anchor {
                        TextAnchor::Start => "start",
                        TextAnchor::Middle => "middle",
                        TextAnchor::End => "end",
                    };
                    let transform = if t.rotation != 0.0 {
                        format!(r#" transform="rotate({} {} {})""#, num(t.rotation), num(t.pos.0), num(t.pos.1))
                    } else {
                        String::new()
                    };
                    let _ = writeln!(
                        out,
                        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{}"{}{}>{}</text>"#,
                        num(t.pos.0), num(t.pos.1), num(t.size), anchor, fill_attr(t.color), transform, escape(&t.text)
                    );
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, self.to_svg_string(opts))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

/// Up to two decimals, trailing zeros trimmed.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}

fn opacity(c: skia::Color) -> Option<String> {
    (c.a() < 255).then(|| num(c.a() as f32 / 255.0))
}

fn fill_attr(c: skia::Color) -> String {
    match opacity(c) {
        Some(o) => format!(r#" fill="{}" fill-opacity="{}""#, hex(c), o),
        None => format!(r#" fill="{}""#, hex(c)),
    }
}

fn stroke_attr(c: skia::Color) -> String {
    match opacity(c) {
        Some(o) => format!(r#" stroke="{}" stroke-opacity="{}""#, hex(c), o),
        None => format!(r#" stroke="{}""#, hex(c)),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
