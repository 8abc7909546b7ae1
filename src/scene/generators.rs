//! Element generators
//!
//! Each generator turns a small parameter tuple into a self-contained
//! sprite. They are pure: identical parameters give identical sprites.

use crate::growth::GrowthLevel;
use crate::math::{Hsl, Vec2};
use super::element::{SizeVariant, Stratum};
use super::sprite::{Paint, Shape, Sprite};

const BARK: Hsl = Hsl::new(30.0, 35.0, 35.0);
const LEAF_DARK: Hsl = Hsl::new(142.0, 45.0, 32.0);
const BUSH_LEAF: Hsl = Hsl::new(142.0, 40.0, 35.0);
const FLOWER_CENTER: Hsl = Hsl::new(45.0, 90.0, 60.0);
const SUN: Hsl = Hsl::new(45.0, 95.0, 60.0);
const SKY_LIGHT: Hsl = Hsl::new(200.0, 80.0, 88.0);
const FUR_LIGHT: Hsl = Hsl::new(30.0, 20.0, 75.0);
const DEER_COAT: Hsl = Hsl::new(30.0, 35.0, 50.0);

/// Rendered `(width, height)` of a tree of the given size step
pub fn tree_dimensions(size: SizeVariant) -> Vec2 {
    let s = size.scale();
    Vec2::new(40.0 + s * 20.0, 60.0 + s * 40.0)
}

/// Drawing units of the tree art before it is fitted to its size step
const TREE_ART: Vec2 = Vec2::new(60.0, 100.0);

/// Tree with a trunk and four stacked foliage layers, drawn at the
/// pixel size of its step.
///
/// The art keeps its proportions: it is scaled to the frame height and
/// centered horizontally. Index and recency only affect the element's
/// animations, not the drawing.
pub fn tree(size: SizeVariant) -> Sprite {
    let dims = tree_dimensions(size);
    let k = (dims.x / TREE_ART.x).min(dims.y / TREE_ART.y);
    let pad = (dims.x - TREE_ART.x * k) * 0.5;
    let foliage = |cx: f32, cy: f32, rx: f32, ry: f32, color: Hsl| {
        Shape::ellipse(pad + cx * k, cy * k, rx * k, ry * k, Paint::fill(color))
    };

    Sprite::new(dims.x, dims.y)
        .with(Shape::rect(pad + 25.0 * k, 60.0 * k, 10.0 * k, 40.0 * k, 2.0 * k, Paint::fill(BARK)))
        .with(foliage(30.0, 50.0, 25.0, 20.0, LEAF_DARK))
        .with(foliage(30.0, 40.0, 22.0, 18.0, Hsl::new(142.0, 40.0, 38.0)))
        .with(foliage(30.0, 32.0, 18.0, 15.0, Hsl::new(142.0, 35.0, 45.0)))
        .with(foliage(30.0, 25.0, 12.0, 12.0, Hsl::new(142.0, 30.0, 50.0)))
}

/// Three-lobed bush
pub fn bush() -> Sprite {
    Sprite::new(50.0, 30.0)
        .with(Shape::ellipse(15.0, 20.0, 12.0, 10.0, Paint::fill(BUSH_LEAF)))
        .with(Shape::ellipse(35.0, 20.0, 12.0, 10.0, Paint::fill(BUSH_LEAF)))
        .with(Shape::ellipse(25.0, 15.0, 15.0, 12.0, Paint::fill(Hsl::new(142.0, 35.0, 42.0))))
}

/// Flower with a stem and a petal disc colored from the palette
pub fn flower(petal: Hsl) -> Sprite {
    Sprite::new(20.0, 30.0)
        .with(Shape::line(10.0, 15.0, 10.0, 30.0, Paint::stroke(BUSH_LEAF, 2.0)))
        .with(Shape::circle(10.0, 10.0, 5.0, Paint::fill(petal)))
        .with(Shape::circle(10.0, 10.0, 2.0, Paint::fill(FLOWER_CENTER)))
}

/// Simple gull-wing stroke
pub fn bird() -> Sprite {
    Sprite::new(30.0, 20.0).with(Shape::path(
        "M5 10 Q10 5 15 10 Q20 5 25 10",
        Paint::stroke(Hsl::new(30.0, 25.0, 25.0), 2.0),
    ))
}

pub fn rabbit() -> Sprite {
    let ear = Paint::fill(Hsl::new(30.0, 25.0, 80.0));
    let eye = Paint::fill(Hsl::new(30.0, 30.0, 20.0));
    Sprite::new(40.0, 40.0)
        .with(Shape::ellipse(20.0, 28.0, 10.0, 8.0, Paint::fill(FUR_LIGHT)))
        .with(Shape::ellipse(20.0, 18.0, 8.0, 7.0, Paint::fill(FUR_LIGHT)))
        .with(Shape::ellipse(15.0, 8.0, 3.0, 8.0, ear))
        .with(Shape::ellipse(25.0, 8.0, 3.0, 8.0, ear))
        .with(Shape::circle(17.0, 17.0, 1.5, eye))
        .with(Shape::circle(23.0, 17.0, 1.5, eye))
}

pub fn deer() -> Sprite {
    let leg = Paint::fill(Hsl::new(30.0, 35.0, 45.0));
    let ear = Paint::fill(Hsl::new(30.0, 30.0, 55.0));
    let antler = Paint::stroke(Hsl::new(30.0, 25.0, 35.0), 2.0);
    let eye = Paint::fill(Hsl::new(30.0, 30.0, 15.0));
    Sprite::new(60.0, 80.0)
        // body and legs
        .with(Shape::ellipse(30.0, 50.0, 18.0, 12.0, Paint::fill(DEER_COAT)))
        .with(Shape::rect(18.0, 55.0, 4.0, 20.0, 2.0, leg))
        .with(Shape::rect(38.0, 55.0, 4.0, 20.0, 2.0, leg))
        // head
        .with(Shape::ellipse(30.0, 32.0, 8.0, 10.0, Paint::fill(DEER_COAT)))
        .with(Shape::ellipse(22.0, 24.0, 3.0, 5.0, ear))
        .with(Shape::ellipse(38.0, 24.0, 3.0, 5.0, ear))
        .with(Shape::path("M24 20 L20 10 M22 14 L18 12", antler))
        .with(Shape::path("M36 20 L40 10 M38 14 L42 12", antler))
        .with(Shape::circle(27.0, 30.0, 1.5, eye))
        .with(Shape::circle(33.0, 30.0, 1.5, eye))
}

/// Sky gradient fading out toward the ground
pub fn sky() -> Sprite {
    Sprite::new(1.0, 1.0).stretched().with(Shape::Gradient {
        stops: vec![(0.0, SKY_LIGHT, 1.0), (0.5, SKY_LIGHT, 1.0), (1.0, SKY_LIGHT, 0.0)],
    })
}

pub fn sun() -> Sprite {
    Sprite::new(64.0, 64.0)
        .with(Shape::circle(32.0, 32.0, 32.0, Paint::fill(SUN).with_opacity(0.3)))
        .with(Shape::circle(32.0, 32.0, 26.0, Paint::fill(SUN)))
}

/// Two cloud shapes; variant 0 is the larger three-puff cloud
pub fn cloud(variant: u8) -> Sprite {
    let puff = |opacity: f32| Paint::fill(Hsl::WHITE).with_opacity(opacity);
    if variant % 2 == 0 {
        Sprite::new(96.0, 48.0)
            .with(Shape::ellipse(40.0, 25.0, 35.0, 15.0, puff(0.8)))
            .with(Shape::ellipse(55.0, 20.0, 25.0, 12.0, puff(0.9)))
            .with(Shape::ellipse(25.0, 22.0, 20.0, 10.0, puff(0.7)))
    } else {
        Sprite::new(80.0, 40.0)
            .with(Shape::ellipse(35.0, 20.0, 30.0, 12.0, puff(0.7)))
            .with(Shape::ellipse(50.0, 15.0, 20.0, 10.0, puff(0.8)))
    }
}

/// One ground band in an 800x200 view box, stretched to the ground frame
pub fn ground(stratum: Stratum) -> Sprite {
    let shape = match stratum {
        Stratum::FarHills => Shape::path(
            "M0 150 Q100 100 200 130 Q350 80 500 120 Q650 70 800 100 L800 200 L0 200 Z",
            Paint::fill(Hsl::new(142.0, 35.0, 50.0)).with_opacity(0.4),
        ),
        Stratum::MiddleHills => Shape::path(
            "M0 160 Q150 120 300 150 Q450 110 600 140 Q750 100 800 130 L800 200 L0 200 Z",
            Paint::fill(Hsl::new(142.0, 40.0, 40.0)).with_opacity(0.6),
        ),
        Stratum::MainGround => Shape::path(
            "M0 170 Q200 150 400 165 Q600 145 800 160 L800 200 L0 200 Z",
            Paint::fill(LEAF_DARK),
        ),
        Stratum::Earth => Shape::path("M0 190 Q400 180 800 190 L800 200 L0 200 Z", Paint::fill(BARK)),
    };
    Sprite::new(800.0, 200.0).stretched().with(shape)
}

/// Pond: outer body, mid highlight and inner sparkle
pub fn water() -> Sprite {
    Sprite::new(160.0, 60.0)
        .with(Shape::ellipse(80.0, 30.0, 75.0, 25.0, Paint::fill(Hsl::new(195.0, 70.0, 50.0)).with_opacity(0.8)))
        .with(Shape::ellipse(80.0, 28.0, 60.0, 18.0, Paint::fill(Hsl::new(195.0, 75.0, 60.0)).with_opacity(0.6)))
        .with(Shape::ellipse(75.0, 25.0, 40.0, 10.0, Paint::fill(Hsl::new(195.0, 80.0, 70.0)).with_opacity(0.4)))
}

/// Caption shown next to the HUD bar
pub const FOREST_HEALTH_LABEL: &str = "Forest Health";

const HUD_BAR_X: f32 = 104.0;
const HUD_BAR_WIDTH: f32 = 64.0;

/// Growth readout: caption, a bar filled to `level` percent, and the number
pub fn hud(level: GrowthLevel) -> Sprite {
    let muted = Hsl::new(140.0, 15.0, 90.0);
    let primary = Hsl::new(142.0, 45.0, 32.0);
    let caption = Hsl::new(150.0, 10.0, 40.0);
    Sprite::new(216.0, 36.0)
        .with(Shape::rect(0.0, 0.0, 216.0, 36.0, 8.0, Paint::fill(Hsl::WHITE).with_opacity(0.9)))
        .with(Shape::text(12.0, 22.0, FOREST_HEALTH_LABEL, 11.0, Paint::fill(caption)))
        .with(Shape::rect(HUD_BAR_X, 14.0, HUD_BAR_WIDTH, 8.0, 4.0, Paint::fill(muted)))
        .with(Shape::rect(HUD_BAR_X, 14.0, HUD_BAR_WIDTH * level.fraction(), 8.0, 4.0, Paint::fill(primary)))
        .with(Shape::bold_text(176.0, 22.0, &level.percent_label(), 11.0, Paint::fill(primary)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_dimensions_scale_linearly() {
        assert_eq!(tree_dimensions(SizeVariant::Large), Vec2::new(60.0, 100.0));

        let small = tree_dimensions(SizeVariant::Small);
        assert!((small.x - 52.0).abs() < 0.001);
        assert!((small.y - 84.0).abs() < 0.001);

        let medium = tree_dimensions(SizeVariant::Medium);
        assert!((medium.x - 56.0).abs() < 0.001);
        assert!((medium.y - 92.0).abs() < 0.001);
    }

    #[test]
    fn test_tree_has_trunk_and_four_layers() {
        let sprite = tree(SizeVariant::Large);
        assert_eq!(sprite.len(), 5);
        assert!(matches!(sprite.shapes[0], Shape::Rect { .. }));
    }

    #[test]
    fn test_tree_drawn_at_size_step() {
        assert_ne!(tree(SizeVariant::Small), tree(SizeVariant::Large));

        for size in [SizeVariant::Small, SizeVariant::Medium, SizeVariant::Large] {
            let sprite = tree(size);
            let dims = tree_dimensions(size);
            assert_eq!(sprite.view_box, dims);
            assert!(!sprite.stretch);

            // Trunk stands on the bottom edge, centered
            match &sprite.shapes[0] {
                Shape::Rect { origin, size: trunk, .. } => {
                    assert!((origin.y + trunk.y - dims.y).abs() < 0.001, "{:?}", size);
                    assert!((origin.x + trunk.x * 0.5 - dims.x * 0.5).abs() < 0.001, "{:?}", size);
                }
                other => panic!("expected trunk rect, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(tree(SizeVariant::Medium), tree(SizeVariant::Medium));
        assert_eq!(bush(), bush());
        assert_eq!(deer(), deer());
        assert_eq!(flower(FLOWER_CENTER), flower(FLOWER_CENTER));
        assert_eq!(cloud(1), cloud(1));
    }

    #[test]
    fn test_flower_uses_petal_color() {
        let petal = Hsl::new(280.0, 60.0, 65.0);
        let sprite = flower(petal);
        match &sprite.shapes[1] {
            Shape::Circle { paint, .. } => assert_eq!(paint.fill, Some(petal)),
            other => panic!("expected petal circle, got {:?}", other),
        }
    }

    #[test]
    fn test_water_has_three_translucent_layers() {
        let sprite = water();
        assert_eq!(sprite.len(), 3);
        let opacities: Vec<f32> = sprite
            .shapes
            .iter()
            .map(|s| match s {
                Shape::Ellipse { paint, .. } => paint.opacity,
                _ => 1.0,
            })
            .collect();
        assert_eq!(opacities, vec![0.8, 0.6, 0.4]);
    }

    #[test]
    fn test_each_stratum_is_distinct() {
        let sprites: Vec<_> = Stratum::ALL.iter().map(|s| ground(*s)).collect();
        for i in 0..sprites.len() {
            for j in (i + 1)..sprites.len() {
                assert_ne!(sprites[i], sprites[j]);
            }
        }
    }

    #[test]
    fn test_hud_bar_width_follows_level() {
        let bar_width = |g: u8| match &hud(GrowthLevel::new(g)).shapes[3] {
            Shape::Rect { size, .. } => size.x,
            other => panic!("expected bar rect, got {:?}", other),
        };
        assert_eq!(bar_width(0), 0.0);
        assert_eq!(bar_width(50), 32.0);
        assert_eq!(bar_width(100), 64.0);
    }

    #[test]
    fn test_hud_shows_percent() {
        let sprite = hud(GrowthLevel::new(0));
        let texts: Vec<_> = sprite
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![FOREST_HEALTH_LABEL, "0%"]);
    }

    #[test]
    fn test_cloud_variants_differ() {
        assert_eq!(cloud(0).len(), 3);
        assert_eq!(cloud(1).len(), 2);
    }
}
