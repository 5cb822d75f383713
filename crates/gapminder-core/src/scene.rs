// File: crates/gapminder-core/src/scene.rs
// Summary: Backend-agnostic display list (lines, circles, polylines, rects, text) for one drawing surface.

use skia_safe as skia;

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// Anchor point; `y` is the baseline.
    pub pos: (f32, f32),
    pub text: String,
    pub size: f32,
    pub color: skia::Color,
    pub anchor: TextAnchor,
    /// Clockwise rotation in degrees about `pos`.
    pub rotation: f32,
}

impl TextNode {
    pub fn new(pos: (f32, f32), text: impl Into<String>, size: f32, color: skia::Color) -> Self {
        Self { pos, text: text.into(), size, color, anchor: TextAnchor::Start, rotation: 0.0 }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Line { from: (f32, f32), to: (f32, f32), stroke: skia::Color, width: f32 },
    Circle { center: (f32, f32), radius: f32, fill: skia::Color },
    Polyline { points: Vec<(f32, f32)>, stroke: skia::Color, width: f32 },
    Rect { rect: Rect, fill: Option<skia::Color>, stroke: Option<skia::Color> },
    Text(TextNode),
}

impl Node {
    pub fn translated(&self, dx: f32, dy: f32) -> Node {
        let mv = |(x, y): (f32, f32)| (x + dx, y + dy);
        match self {
            Node::Line { from, to, stroke, width } => Node::Line { from: mv(*from), to: mv(*to), stroke: *stroke, width: *width },
            Node::Circle { center, radius, fill } => Node::Circle { center: mv(*center), radius: *radius, fill: *fill },
            Node::Polyline { points, stroke, width } => Node::Polyline {
                points: points.iter().copied().map(mv).collect(),
                stroke: *stroke,
                width: *width,
            },
            Node::Rect { rect, fill, stroke } => Node::Rect { rect: rect.translated(dx, dy), fill: *fill, stroke: *stroke },
            Node::Text(t) => Node::Text(TextNode { pos: mv(t.pos), ..t.clone() }),
        }
    }
}

/// Ordered nodes drawn back to front on a `width` x `height` surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: skia::Color) -> Self {
        Self { width, height, background, nodes: Vec::new() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), stroke: skia::Color, width: f32) {
        self.push(Node::Line { from, to, stroke, width });
    }

    pub fn text(&mut self, node: TextNode) {
        self.push(Node::Text(node));
    }

    /// Append every node of `other`, shifted by `(dx, dy)`. `other`'s background is not drawn.
    pub fn extend_translated(&mut self, other: &Scene, dx: f32, dy: f32) {
        self.nodes.extend(other.nodes.iter().map(|n| n.translated(dx, dy)));
    }

    /// `(cx, cy, r)` of every circle, in draw order.
    pub fn circles(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            Node::Circle { center, radius, .. } => Some((center.0, center.1, *radius)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }
}
