use std::ops::Add;
use serde::{Serialize, Deserialize};

/// 2D vector for scene coordinates and sizes.
///
/// Scene space has its origin at the top-left corner of the canvas,
/// with `y` growing downward (SVG convention).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(&self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Axis-aligned placement of one element: top-left origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Frame {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Frame whose bottom edge is centered on `anchor`.
    pub fn bottom_centered(anchor: Vec2, size: Vec2) -> Self {
        Self {
            origin: Vec2::new(anchor.x - size.x * 0.5, anchor.y - size.y),
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size.scale(0.5)
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }
}
