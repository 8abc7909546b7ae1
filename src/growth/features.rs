use serde::{Deserialize, Serialize};
use crate::config::ForestConfig;
use super::level::GrowthLevel;

/// Everything the scene unlocks at a given growth level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Trees actually rendered (capped at `max_trees`)
    pub tree_count: u32,
    /// Trees earned before the render cap
    pub planted_trees: u32,
    pub has_water: bool,
    pub has_bushes: bool,
    pub has_flowers: bool,
    pub flower_count: u32,
    pub has_birds: bool,
    pub has_animals: bool,
    pub has_deer: bool,
}

/// Resolve the feature set for a growth level.
///
/// Pure and total: the same level and config always give the same set, and
/// every threshold comparison is `>=` so unlocks are monotonic in the level.
pub fn resolve_features(level: GrowthLevel, config: &ForestConfig) -> FeatureSet {
    let g = level.value();
    let t = &config.thresholds;

    let planted_trees = (g / config.tree_step.max(1)) as u32;
    let has_flowers = g >= t.flowers;
    let has_animals = g >= t.animals;

    FeatureSet {
        tree_count: planted_trees.min(config.max_trees as u32),
        planted_trees,
        has_water: g >= t.water,
        has_bushes: g >= t.bushes,
        has_flowers,
        flower_count: if has_flowers {
            (g / config.flower_step.max(1)) as u32
        } else {
            0
        },
        has_birds: g >= t.birds,
        has_animals,
        has_deer: has_animals && g >= t.deer,
    }
}
