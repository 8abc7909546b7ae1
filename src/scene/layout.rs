//! Fixed placement slots and evenly spaced bands
//!
//! Slots are anchored to a canvas edge so the same scene description
//! works for any canvas size the host picks.

use crate::math::{Frame, Vec2};

/// Distance from an edge, absolute or relative to the canvas extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Px(f32),
    Fraction(f32),
}

impl Offset {
    fn resolve(&self, extent: f32) -> f32 {
        match *self {
            Offset::Px(px) => px,
            Offset::Fraction(f) => extent * f,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    Left(Offset),
    Right(Offset),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertical {
    Top(Offset),
    Bottom(Offset),
}

/// A fixed-size box pinned to two canvas edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
    pub size: Vec2,
}

impl Slot {
    pub const fn new(horizontal: Horizontal, vertical: Vertical, width: f32, height: f32) -> Self {
        Self {
            horizontal,
            vertical,
            size: Vec2::new(width, height),
        }
    }

    pub fn resolve(&self, canvas: Vec2) -> Frame {
        let x = match self.horizontal {
            Horizontal::Left(o) => o.resolve(canvas.x),
            Horizontal::Right(o) => canvas.x - o.resolve(canvas.x) - self.size.x,
        };
        let y = match self.vertical {
            Vertical::Top(o) => o.resolve(canvas.y),
            Vertical::Bottom(o) => canvas.y - o.resolve(canvas.y) - self.size.y,
        };
        Frame::new(Vec2::new(x, y), self.size)
    }
}

/// Horizontal row whose items share space evenly around them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Distance of the baseline from the canvas bottom
    pub bottom: f32,
    /// Inset from both side edges
    pub padding: f32,
}

impl Band {
    pub const fn new(bottom: f32, padding: f32) -> Self {
        Self { bottom, padding }
    }

    /// Baseline anchor of item `index` out of `count`.
    ///
    /// Each item gets an equal cell and sits at its center, so the gaps at
    /// the edges are half the gaps between items.
    pub fn anchor(&self, index: u32, count: u32, canvas: Vec2) -> Vec2 {
        let inner = (canvas.x - 2.0 * self.padding).max(0.0);
        let cell = inner / count.max(1) as f32;
        let x = self.padding + cell * (index as f32 + 0.5);
        Vec2::new(x, canvas.y - self.bottom)
    }

    /// Frame for item `index` with its bottom edge on the baseline
    pub fn place(&self, index: u32, count: u32, size: Vec2, canvas: Vec2) -> Frame {
        Frame::bottom_centered(self.anchor(index, count, canvas), size)
    }
}

use Horizontal::{Left, Right};
use Vertical::{Bottom, Top};

pub const SUN: Slot = Slot::new(Right(Offset::Px(48.0)), Top(Offset::Px(32.0)), 64.0, 64.0);

pub const CLOUDS: [Slot; 2] = [
    Slot::new(Left(Offset::Px(32.0)), Top(Offset::Px(48.0)), 96.0, 48.0),
    Slot::new(Left(Offset::Fraction(1.0 / 3.0)), Top(Offset::Px(80.0)), 80.0, 40.0),
];

/// Ground strata occupy a band a quarter of the canvas width tall
pub const GROUND_ASPECT: f32 = 0.25;

pub const WATER: Slot = Slot::new(Left(Offset::Fraction(0.25)), Bottom(Offset::Px(32.0)), 160.0, 64.0);

pub const TREE_BAND: Band = Band::new(48.0, 16.0);

pub const BUSHES: [Slot; 3] = [
    Slot::new(Left(Offset::Px(32.0)), Bottom(Offset::Px(40.0)), 48.0, 32.0),
    Slot::new(Right(Offset::Px(64.0)), Bottom(Offset::Px(48.0)), 48.0, 32.0),
    Slot::new(Left(Offset::Fraction(0.5)), Bottom(Offset::Px(40.0)), 48.0, 32.0),
];

pub const FLOWER_BAND: Band = Band::new(56.0, 48.0);
pub const FLOWER_SIZE: Vec2 = Vec2::new(16.0, 24.0);

pub const BIRDS: [Slot; 2] = [
    Slot::new(Left(Offset::Fraction(1.0 / 3.0)), Top(Offset::Px(96.0)), 24.0, 16.0),
    Slot::new(Right(Offset::Fraction(0.25)), Top(Offset::Px(128.0)), 24.0, 16.0),
];

pub const RABBIT: Slot = Slot::new(Right(Offset::Fraction(0.25)), Bottom(Offset::Px(64.0)), 32.0, 32.0);

pub const DEER: Slot = Slot::new(Left(Offset::Fraction(1.0 / 3.0)), Bottom(Offset::Px(80.0)), 64.0, 80.0);

pub const HUD: Slot = Slot::new(Right(Offset::Px(16.0)), Bottom(Offset::Px(16.0)), 216.0, 36.0);

/// Full-canvas frame
pub fn fill(canvas: Vec2) -> Frame {
    Frame::new(Vec2::ZERO, canvas)
}

/// Frame of the ground band along the canvas bottom, never taller than the canvas
pub fn ground(canvas: Vec2) -> Frame {
    let height = (canvas.x * GROUND_ASPECT).min(canvas.y);
    Frame::new(Vec2::new(0.0, canvas.y - height), Vec2::new(canvas.x, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_slot_left_top() {
        let frame = CLOUDS[0].resolve(CANVAS);
        assert_eq!(frame.origin, Vec2::new(32.0, 48.0));
        assert_eq!(frame.size, Vec2::new(96.0, 48.0));
    }

    #[test]
    fn test_slot_right_bottom() {
        let frame = HUD.resolve(CANVAS);
        assert_eq!(frame.right(), 800.0 - 16.0);
        assert_eq!(frame.bottom(), 600.0 - 16.0);
    }

    #[test]
    fn test_fractional_offset() {
        let frame = WATER.resolve(CANVAS);
        assert_eq!(frame.origin.x, 200.0);
        assert_eq!(frame.bottom(), 568.0);
    }

    #[test]
    fn test_band_spacing_is_even() {
        let band = Band::new(48.0, 16.0);
        let anchors: Vec<_> = (0..4).map(|i| band.anchor(i, 4, CANVAS)).collect();

        // 768 wide inner row, 192 per cell
        assert_eq!(anchors[0].x, 16.0 + 96.0);
        for pair in anchors.windows(2) {
            assert!((pair[1].x - pair[0].x - 192.0).abs() < 0.001);
        }
        assert!(anchors.iter().all(|a| a.y == 552.0));
    }

    #[test]
    fn test_band_single_item_centered() {
        let anchor = TREE_BAND.anchor(0, 1, CANVAS);
        assert_eq!(anchor.x, 400.0);
    }

    #[test]
    fn test_band_place_sits_on_baseline() {
        let frame = FLOWER_BAND.place(0, 2, FLOWER_SIZE, CANVAS);
        assert_eq!(frame.bottom(), 600.0 - 56.0);
    }

    #[test]
    fn test_ground_band() {
        let frame = ground(CANVAS);
        assert_eq!(frame.origin.y, 400.0);
        assert_eq!(frame.size, Vec2::new(800.0, 200.0));
    }

    #[test]
    fn test_ground_band_capped_on_short_canvas() {
        let frame = ground(Vec2::new(800.0, 120.0));
        assert_eq!(frame.origin, Vec2::ZERO);
        assert_eq!(frame.size, Vec2::new(800.0, 120.0));
    }
}
