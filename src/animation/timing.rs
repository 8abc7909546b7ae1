//! Declarative animation tags with staggered start delays

use std::time::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Animation styles a rendering target can apply to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// One-shot scale up from the ground (newest tree)
    Grow,
    /// Gentle continuous rocking around the base
    Sway,
    /// Slow vertical bobbing (clouds, birds)
    Float,
    /// Opacity ramp on appearance
    FadeIn,
    /// Breathing glow (sun)
    PulseGlow,
}

impl AnimationKind {
    /// CSS class used by the SVG renderer
    pub fn class_name(&self) -> &'static str {
        match self {
            AnimationKind::Grow => "grow",
            AnimationKind::Sway => "sway",
            AnimationKind::Float => "float",
            AnimationKind::FadeIn => "fade-in",
            AnimationKind::PulseGlow => "pulse-glow",
        }
    }
}

/// One animation applied to an element, starting after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub kind: AnimationKind,
    #[serde(serialize_with = "serialize_secs", deserialize_with = "deserialize_secs")]
    pub delay: Duration,
}

impl Animation {
    pub fn new(kind: AnimationKind, delay: Duration) -> Self {
        Self { kind, delay }
    }
}

/// Delay for the `index`-th element of a staggered row
pub fn stagger(index: u32, step: Duration) -> Duration {
    step * index
}

/// Delay from a whole number of milliseconds
pub const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn serialize_secs<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(delay.as_secs_f64())
}

fn deserialize_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(serde::de::Error::custom(format!("invalid delay {}", secs)));
    }
    Ok(Duration::from_secs_f64(secs))
}
