use serde::{Deserialize, Serialize};
use super::features::FeatureSet;
use super::level::GrowthLevel;

/// Birds added once the birds threshold is reached
const BIRD_COUNT: u32 = 2;

/// Numbers shown next to the forest on the student dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    pub growth_level: GrowthLevel,
    /// Trees earned, not capped by the renderer
    pub trees: u32,
    pub ponds: u32,
    pub flowers: u32,
    pub wildlife: u32,
}

impl ForestStats {
    pub fn from_features(level: GrowthLevel, features: &FeatureSet) -> Self {
        let mut wildlife = 0;
        if features.has_birds {
            wildlife += BIRD_COUNT;
        }
        if features.has_animals {
            wildlife += 1;
        }
        if features.has_deer {
            wildlife += 1;
        }

        Self {
            growth_level: level,
            trees: features.planted_trees,
            ponds: u32::from(features.has_water),
            flowers: features.flower_count,
            wildlife,
        }
    }
}

/// Combined class forest: the floored mean of every student's level.
///
/// An empty class has an empty forest.
pub fn class_growth(levels: &[GrowthLevel]) -> GrowthLevel {
    if levels.is_empty() {
        return GrowthLevel::MIN;
    }
    let total: u32 = levels.iter().map(|l| l.value() as u32).sum();
    GrowthLevel::new((total / levels.len() as u32) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForestConfig;
    use crate::growth::resolve_features;

    fn stats(g: u8) -> ForestStats {
        let level = GrowthLevel::new(g);
        ForestStats::from_features(level, &resolve_features(level, &ForestConfig::default()))
    }

    #[test]
    fn test_dashboard_stats() {
        let s = stats(42);
        assert_eq!(s.trees, 4);
        assert_eq!(s.ponds, 1);
        assert_eq!(s.flowers, 2);
        assert_eq!(s.wildlife, 0);
    }

    #[test]
    fn test_trees_not_capped_in_stats() {
        assert_eq!(stats(100).trees, 10);
        assert_eq!(stats(100).wildlife, 4);
    }

    #[test]
    fn test_no_pond_below_water() {
        assert_eq!(stats(29).ponds, 0);
    }

    #[test]
    fn test_class_growth() {
        let levels: Vec<_> = [72, 65, 58, 45, 38, 82].into_iter().map(GrowthLevel::new).collect();
        assert_eq!(class_growth(&levels).value(), 60);
        assert_eq!(class_growth(&[]), GrowthLevel::MIN);
    }
}
