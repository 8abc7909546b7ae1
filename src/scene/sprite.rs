use serde::{Deserialize, Serialize};
use crate::math::{Hsl, Vec2};

/// Fill, stroke and opacity of a shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub fill: Option<Hsl>,
    pub stroke: Option<Hsl>,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl Paint {
    pub fn fill(color: Hsl) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    pub fn stroke(color: Hsl, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A single vector primitive in sprite-local coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Ellipse { center: Vec2, radius: Vec2, paint: Paint },
    Circle { center: Vec2, r: f32, paint: Paint },
    Rect { origin: Vec2, size: Vec2, corner: f32, paint: Paint },
    Line { from: Vec2, to: Vec2, paint: Paint },
    /// SVG path data
    Path { d: String, paint: Paint },
    /// Vertical gradient filling the whole view box, top color first
    Gradient { stops: Vec<(f32, Hsl, f32)> },
    /// Text anchored at its baseline start
    Text { origin: Vec2, content: String, size: f32, bold: bool, paint: Paint },
}

impl Shape {
    pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, paint: Paint) -> Self {
        Shape::Ellipse {
            center: Vec2::new(cx, cy),
            radius: Vec2::new(rx, ry),
            paint,
        }
    }

    pub fn circle(cx: f32, cy: f32, r: f32, paint: Paint) -> Self {
        Shape::Circle {
            center: Vec2::new(cx, cy),
            r,
            paint,
        }
    }

    pub fn rect(x: f32, y: f32, w: f32, h: f32, corner: f32, paint: Paint) -> Self {
        Shape::Rect {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
            corner,
            paint,
        }
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, paint: Paint) -> Self {
        Shape::Line {
            from: Vec2::new(x1, y1),
            to: Vec2::new(x2, y2),
            paint,
        }
    }

    pub fn path(d: &str, paint: Paint) -> Self {
        Shape::Path {
            d: d.to_string(),
            paint,
        }
    }

    pub fn text(x: f32, y: f32, content: &str, size: f32, paint: Paint) -> Self {
        Shape::Text {
            origin: Vec2::new(x, y),
            content: content.to_string(),
            size,
            bold: false,
            paint,
        }
    }

    pub fn bold_text(x: f32, y: f32, content: &str, size: f32, paint: Paint) -> Self {
        Shape::Text {
            origin: Vec2::new(x, y),
            content: content.to_string(),
            size,
            bold: true,
            paint,
        }
    }
}

/// Self-contained drawing for one element: a view box plus its shapes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sprite {
    pub view_box: Vec2,
    pub shapes: Vec<Shape>,
    /// Stretch to the element frame instead of keeping the aspect ratio
    pub stretch: bool,
}

impl Sprite {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_box: Vec2::new(width, height),
            shapes: Vec::new(),
            stretch: false,
        }
    }

    pub fn stretched(mut self) -> Self {
        self.stretch = true;
        self
    }

    pub fn with(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
