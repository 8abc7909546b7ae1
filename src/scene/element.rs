use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::animation::{Animation, AnimationKind};
use crate::growth::GrowthLevel;
use crate::math::Frame;

/// Paint order of the scene, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Sky,
    Ground,
    Water,
    Vegetation,
    Fauna,
    Overlay,
}

impl Layer {
    /// Lowercase name, as used in JSON and SVG output
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Sky => "sky",
            Layer::Ground => "ground",
            Layer::Water => "water",
            Layer::Vegetation => "vegetation",
            Layer::Fauna => "fauna",
            Layer::Overlay => "overlay",
        }
    }
}

/// Discrete tree size step, cycling with the tree index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    Small,
    Medium,
    Large,
}

impl SizeVariant {
    pub fn from_index(index: u32) -> Self {
        match index % 3 {
            0 => SizeVariant::Small,
            1 => SizeVariant::Medium,
            _ => SizeVariant::Large,
        }
    }

    pub fn scale(&self) -> f32 {
        match self {
            SizeVariant::Small => 0.6,
            SizeVariant::Medium => 0.8,
            SizeVariant::Large => 1.0,
        }
    }
}

/// Ground bands, farthest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stratum {
    FarHills,
    MiddleHills,
    MainGround,
    Earth,
}

impl Stratum {
    pub const ALL: [Stratum; 4] = [
        Stratum::FarHills,
        Stratum::MiddleHills,
        Stratum::MainGround,
        Stratum::Earth,
    ];
}

/// What an element is, with the parameters its generator needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    Sky,
    Sun,
    Cloud { variant: u8 },
    Ground { stratum: Stratum },
    Water,
    Tree { index: u32, size: SizeVariant, is_newest: bool },
    Bush { slot: u8 },
    Flower { index: u32, color_index: usize },
    Bird { slot: u8 },
    Rabbit,
    Deer,
    Hud { growth_level: GrowthLevel },
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Sky => "sky",
            ElementKind::Sun => "sun",
            ElementKind::Cloud { .. } => "cloud",
            ElementKind::Ground { .. } => "ground",
            ElementKind::Water => "water",
            ElementKind::Tree { .. } => "tree",
            ElementKind::Bush { .. } => "bush",
            ElementKind::Flower { .. } => "flower",
            ElementKind::Bird { .. } => "bird",
            ElementKind::Rabbit => "rabbit",
            ElementKind::Deer => "deer",
            ElementKind::Hud { .. } => "hud",
        }
    }
}

/// One placed primitive of a composed scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneElement {
    pub layer: Layer,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub frame: Frame,
    pub animations: Vec<Animation>,
}

impl SceneElement {
    pub fn new(layer: Layer, kind: ElementKind, frame: Frame) -> Self {
        Self {
            layer,
            kind,
            frame,
            animations: Vec::new(),
        }
    }

    pub fn with_animation(mut self, kind: AnimationKind, delay: Duration) -> Self {
        self.animations.push(Animation::new(kind, delay));
        self
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_newest(&self) -> bool {
        matches!(self.kind, ElementKind::Tree { is_newest: true, .. })
    }

    pub fn size_variant(&self) -> Option<SizeVariant> {
        match self.kind {
            ElementKind::Tree { size, .. } => Some(size),
            _ => None,
        }
    }

    /// Stagger delay of the element (its first animation's delay)
    pub fn delay(&self) -> Duration {
        self.animations
            .first()
            .map(|a| a.delay)
            .unwrap_or(Duration::ZERO)
    }

    pub fn has_animation(&self, kind: AnimationKind) -> bool {
        self.animations.iter().any(|a| a.kind == kind)
    }
}
