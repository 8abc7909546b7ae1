//! Scene consistency checks
//!
//! Compares what a composed frame contains with what its feature set
//! says should be there.

use crate::scene::Scene;
use super::summary::SceneSummary;

const BUSH_COUNT: u32 = 3;
const BIRD_COUNT: u32 = 2;
const CLOUD_COUNT: u32 = 2;
const STRATA_COUNT: u32 = 4;

/// Check a scene against its own feature set. Returns one message per mismatch.
pub fn check_scene_consistency(scene: &Scene) -> Vec<String> {
    let summary = SceneSummary::from_scene(scene);
    let f = &scene.features;
    let mut failures = Vec::new();

    let mut expect = |what: &str, actual: u32, expected: u32| {
        if actual != expected {
            failures.push(format!("{}: found {}, expected {}", what, actual, expected));
        }
    };

    expect("trees", summary.trees, f.tree_count);
    expect("bushes", summary.bushes, if f.has_bushes { BUSH_COUNT } else { 0 });
    expect("flowers", summary.flowers, if f.has_flowers { f.flower_count } else { 0 });
    expect("birds", summary.birds, if f.has_birds { BIRD_COUNT } else { 0 });
    expect("rabbits", summary.rabbits, u32::from(f.has_animals));
    expect("deer", summary.deer, u32::from(f.has_deer));
    expect("clouds", summary.clouds, CLOUD_COUNT);
    expect("ground strata", summary.ground_strata, STRATA_COUNT);
    expect("water", u32::from(summary.has_water), u32::from(f.has_water));
    expect("hud", u32::from(summary.has_hud), 1);

    if let Some(newest) = summary.newest_tree {
        if newest + 1 != f.tree_count {
            failures.push(format!(
                "newest tree is #{} but the last tree is #{}",
                newest,
                f.tree_count.saturating_sub(1)
            ));
        }
    }

    failures
}

/// Human-readable report for a scene summary
pub fn generate_scene_report(summary: &SceneSummary) -> String {
    let newest = summary
        .newest_tree
        .map(|i| format!("#{}", i))
        .unwrap_or_else(|| "none".to_string());

    format!(
        r#"Forest Scene Report
===================
Growth Level:  {}%
Elements:      {}
Trees:         {} (newest: {})
Bushes:        {}
Flowers:       {}
Water:         {}
Wildlife:      {} ({} birds, {} rabbits, {} deer)
"#,
        summary.growth_level,
        summary.total,
        summary.trees,
        newest,
        summary.bushes,
        summary.flowers,
        if summary.has_water { "yes" } else { "no" },
        summary.wildlife(),
        summary.birds,
        summary.rabbits,
        summary.deer
    )
}
