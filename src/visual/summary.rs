//! Per-kind counts of a composed scene
//!
//! Lets hosts and tests reason about a frame without walking the
//! element list by hand.

use serde::Serialize;
use crate::growth::GrowthLevel;
use crate::scene::{ElementKind, Scene};

/// Counts of each element kind in one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneSummary {
    pub growth_level: GrowthLevel,
    pub total: usize,
    pub trees: u32,
    pub bushes: u32,
    pub flowers: u32,
    pub birds: u32,
    pub rabbits: u32,
    pub deer: u32,
    pub clouds: u32,
    pub ground_strata: u32,
    pub has_water: bool,
    pub has_hud: bool,
    /// Index of the tree flagged as newest, if any
    pub newest_tree: Option<u32>,
}

impl SceneSummary {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut summary = SceneSummary {
            growth_level: scene.growth_level,
            total: scene.elements.len(),
            ..Default::default()
        };

        for element in &scene.elements {
            match element.kind {
                ElementKind::Sky | ElementKind::Sun => {}
                ElementKind::Cloud { .. } => summary.clouds += 1,
                ElementKind::Ground { .. } => summary.ground_strata += 1,
                ElementKind::Water => summary.has_water = true,
                ElementKind::Tree { index, is_newest, .. } => {
                    summary.trees += 1;
                    if is_newest {
                        summary.newest_tree = Some(index);
                    }
                }
                ElementKind::Bush { .. } => summary.bushes += 1,
                ElementKind::Flower { .. } => summary.flowers += 1,
                ElementKind::Bird { .. } => summary.birds += 1,
                ElementKind::Rabbit => summary.rabbits += 1,
                ElementKind::Deer => summary.deer += 1,
                ElementKind::Hud { .. } => summary.has_hud = true,
            }
        }

        summary
    }

    /// Animals of any kind, birds included
    pub fn wildlife(&self) -> u32 {
        self.birds + self.rabbits + self.deer
    }
}
