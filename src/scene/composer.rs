use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::animation::{millis, stagger, AnimationKind};
use crate::config::ForestConfig;
use crate::growth::{resolve_features, FeatureSet, GrowthLevel};
use crate::math::Vec2;
use super::element::{ElementKind, Layer, SceneElement, SizeVariant, Stratum};
use super::generators::tree_dimensions;
use super::layout;

const TREE_STAGGER: Duration = millis(300);
const FLOWER_STAGGER: Duration = millis(200);
const CLOUD_DELAYS: [Duration; 2] = [millis(0), millis(1000)];
const BUSH_DELAYS: [Duration; 3] = [millis(200), millis(500), millis(800)];
const BIRD_DELAYS: [Duration; 2] = [millis(0), millis(500)];

/// Caller-owned inputs besides the growth level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Whether the background entrance fade already ran for this viewer
    pub entrance_played: bool,
    /// Tree count of the previous frame, if the caller tracks it.
    ///
    /// `None` flags the last tree as newest on every frame; `Some(prev)`
    /// flags it only when the count went up since `prev`.
    pub previous_tree_count: Option<u32>,
}

/// A fully composed frame, elements ordered back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub growth_level: GrowthLevel,
    pub features: FeatureSet,
    pub canvas: Vec2,
    pub elements: Vec<SceneElement>,
}

impl Scene {
    pub fn iter_kind<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SceneElement> + 'a {
        self.elements.iter().filter(move |e| e.kind_name() == name)
    }

    pub fn count_kind(&self, name: &str) -> usize {
        self.iter_kind(name).count()
    }

    pub fn newest_tree(&self) -> Option<&SceneElement> {
        self.elements.iter().find(|e| e.is_newest())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Compose the scene for a growth level.
///
/// Deterministic and total: the result depends only on the arguments.
pub fn compose_scene(level: GrowthLevel, options: &ComposeOptions, config: &ForestConfig) -> Scene {
    let features = resolve_features(level, config);
    let canvas = config.canvas.size();
    let mut elements = Vec::new();

    push_background(&mut elements, canvas, options.entrance_played);

    if features.has_water {
        elements.push(
            SceneElement::new(Layer::Water, ElementKind::Water, layout::WATER.resolve(canvas))
                .with_animation(AnimationKind::FadeIn, Duration::ZERO),
        );
    }

    push_trees(&mut elements, &features, options, canvas);

    if features.has_bushes {
        for (slot, (place, delay)) in layout::BUSHES.iter().zip(BUSH_DELAYS).enumerate() {
            elements.push(
                SceneElement::new(
                    Layer::Vegetation,
                    ElementKind::Bush { slot: slot as u8 },
                    place.resolve(canvas),
                )
                .with_animation(AnimationKind::FadeIn, delay),
            );
        }
    }

    if features.has_flowers {
        let count = features.flower_count;
        let palette_len = config.flower_palette.len().max(1);
        for i in 0..count {
            let delay = stagger(i, FLOWER_STAGGER);
            elements.push(
                SceneElement::new(
                    Layer::Vegetation,
                    ElementKind::Flower {
                        index: i,
                        color_index: i as usize % palette_len,
                    },
                    layout::FLOWER_BAND.place(i, count, layout::FLOWER_SIZE, canvas),
                )
                .with_animation(AnimationKind::FadeIn, delay)
                .with_animation(AnimationKind::Sway, delay),
            );
        }
    }

    if features.has_birds {
        for (slot, (place, delay)) in layout::BIRDS.iter().zip(BIRD_DELAYS).enumerate() {
            elements.push(
                SceneElement::new(
                    Layer::Fauna,
                    ElementKind::Bird { slot: slot as u8 },
                    place.resolve(canvas),
                )
                .with_animation(AnimationKind::Float, delay),
            );
        }
    }

    if features.has_animals {
        elements.push(
            SceneElement::new(Layer::Fauna, ElementKind::Rabbit, layout::RABBIT.resolve(canvas))
                .with_animation(AnimationKind::FadeIn, Duration::ZERO),
        );
        if features.has_deer {
            elements.push(
                SceneElement::new(Layer::Fauna, ElementKind::Deer, layout::DEER.resolve(canvas))
                    .with_animation(AnimationKind::FadeIn, Duration::ZERO),
            );
        }
    }

    elements.push(SceneElement::new(
        Layer::Overlay,
        ElementKind::Hud { growth_level: level },
        layout::HUD.resolve(canvas),
    ));

    log::debug!(
        "composed forest at growth {}: {} elements, {} trees",
        level,
        elements.len(),
        features.tree_count
    );

    Scene {
        growth_level: level,
        features,
        canvas,
        elements,
    }
}

fn push_background(elements: &mut Vec<SceneElement>, canvas: Vec2, entrance_played: bool) {
    elements.push(SceneElement::new(Layer::Sky, ElementKind::Sky, layout::fill(canvas)));

    let mut sun = SceneElement::new(Layer::Sky, ElementKind::Sun, layout::SUN.resolve(canvas))
        .with_animation(AnimationKind::PulseGlow, Duration::ZERO);
    if !entrance_played {
        sun = sun.with_animation(AnimationKind::FadeIn, Duration::ZERO);
    }
    elements.push(sun);

    for (variant, (place, delay)) in layout::CLOUDS.iter().zip(CLOUD_DELAYS).enumerate() {
        let mut cloud = SceneElement::new(
            Layer::Sky,
            ElementKind::Cloud { variant: variant as u8 },
            place.resolve(canvas),
        )
        .with_animation(AnimationKind::Float, delay);
        if !entrance_played {
            cloud = cloud.with_animation(AnimationKind::FadeIn, Duration::ZERO);
        }
        elements.push(cloud);
    }

    let ground = layout::ground(canvas);
    for stratum in Stratum::ALL {
        elements.push(SceneElement::new(Layer::Ground, ElementKind::Ground { stratum }, ground));
    }
}

fn push_trees(
    elements: &mut Vec<SceneElement>,
    features: &FeatureSet,
    options: &ComposeOptions,
    canvas: Vec2,
) {
    let count = features.tree_count;
    if count == 0 {
        return;
    }

    let grew = options
        .previous_tree_count
        .map_or(true, |prev| count > prev);
    let newest_index = grew.then(|| count - 1);

    for i in 0..count {
        let size = SizeVariant::from_index(i);
        let is_newest = newest_index == Some(i);
        let delay = stagger(i, TREE_STAGGER);

        let mut tree = SceneElement::new(
            Layer::Vegetation,
            ElementKind::Tree { index: i, size, is_newest },
            layout::TREE_BAND.place(i, count, tree_dimensions(size), canvas),
        )
        .with_animation(AnimationKind::Sway, delay);
        if is_newest {
            tree = tree.with_animation(AnimationKind::Grow, delay);
        }
        elements.push(tree);
    }
}
