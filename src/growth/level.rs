use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::{Result, SceneError};

/// Forest growth level, always an integer in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthLevel(u8);

impl GrowthLevel {
    pub const MIN: GrowthLevel = GrowthLevel(0);
    pub const MAX: GrowthLevel = GrowthLevel(100);

    /// Build from a raw host value.
    ///
    /// NaN is rejected. Everything else is clamped to `[0, 100]` and floored,
    /// so `-3.0` renders as growth 0 and `250.0` as growth 100.
    pub fn from_raw(raw: f64) -> Result<Self> {
        if raw.is_nan() {
            return Err(SceneError::InvalidGrowthLevel(raw));
        }
        let clamped = raw.clamp(0.0, 100.0);
        if clamped != raw {
            log::warn!("growth level {} out of range, clamped to {}", raw, clamped);
        }
        Ok(Self(clamped.floor() as u8))
    }

    /// Saturating constructor for values already known to be integers.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the HUD bar that is filled (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Apply an approved quest reward, saturating at 100
    pub fn grow_by(self, reward: u8) -> Self {
        Self::new(self.0.saturating_add(reward))
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for GrowthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
