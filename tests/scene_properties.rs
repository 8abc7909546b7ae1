use forest_scene::scene::ElementKind;
use forest_scene::visual::{check_scene_consistency, SceneSummary};
use forest_scene::{compose_scene, ComposeOptions, ForestConfig, GrowthLevel, Scene};

fn compose(raw: f64) -> Scene {
    let level = GrowthLevel::from_raw(raw).unwrap();
    compose_scene(level, &ComposeOptions::default(), &ForestConfig::default())
}

fn summary(raw: f64) -> SceneSummary {
    SceneSummary::from_scene(&compose(raw))
}

#[test]
fn empty_forest_at_zero() {
    let s = summary(0.0);
    assert_eq!(s.trees, 0);
    assert!(!s.has_water);
    assert_eq!(s.bushes + s.flowers + s.wildlife(), 0);

    let scene = compose(0.0);
    let hud = scene.elements.last().unwrap();
    assert_eq!(hud.kind, ElementKind::Hud { growth_level: GrowthLevel::new(0) });
}

#[test]
fn water_appears_at_thirty() {
    assert!(!summary(29.0).has_water);
    assert!(summary(30.0).has_water);
}

#[test]
fn animals_appear_in_order() {
    let s = summary(69.0);
    assert_eq!(s.rabbits + s.deer, 0);

    let s = summary(70.0);
    assert_eq!((s.rabbits, s.deer), (1, 0));

    let s = summary(85.0);
    assert_eq!((s.rabbits, s.deer), (1, 1));
}

#[test]
fn full_forest_at_hundred() {
    let s = summary(100.0);
    assert_eq!(s.trees, 8);
    assert!(s.has_water);
    assert_eq!(s.bushes, 3);
    assert_eq!(s.flowers, 5);
    assert_eq!(s.birds, 2);
    assert_eq!(s.rabbits, 1);
    assert_eq!(s.deer, 1);
}

#[test]
fn dashboard_default_scenario() {
    let s = summary(42.0);
    assert_eq!(s.trees, 4);
    assert!(s.has_water);
    assert_eq!(s.bushes, 3);
    assert_eq!(s.flowers, 2);
    assert_eq!(s.birds, 0);
    assert_eq!(s.rabbits + s.deer, 0);
}

#[test]
fn tree_count_formula_and_cap() {
    let mut prev = 0;
    for g in 0..=100 {
        let trees = summary(g as f64).trees;
        assert_eq!(trees, (g / 10).min(8), "g = {}", g);
        assert!(trees >= prev);
        if g >= 80 {
            assert!(trees <= 8);
        }
        prev = trees;
    }
}

#[test]
fn unlocked_features_stay_unlocked() {
    let mut prev = summary(0.0);
    for g in 1..=100 {
        let s = summary(g as f64);
        assert!(s.trees >= prev.trees);
        assert!(s.bushes >= prev.bushes);
        assert!(s.flowers >= prev.flowers);
        assert!(s.birds >= prev.birds);
        assert!(s.rabbits >= prev.rabbits);
        assert!(s.deer >= prev.deer);
        assert!(s.has_water || !prev.has_water);
        prev = s;
    }
}

#[test]
fn identical_input_gives_identical_bytes() {
    let a = serde_json::to_string(&compose(73.0)).unwrap();
    let b = serde_json::to_string(&compose(73.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn no_state_leaks_between_calls() {
    let config = ForestConfig::default();
    let options = ComposeOptions::default();

    let before = compose_scene(GrowthLevel::new(42), &options, &config);
    let _ = compose_scene(GrowthLevel::new(100), &options, &config);
    let _ = compose_scene(GrowthLevel::new(5), &options, &config);
    let after = compose_scene(GrowthLevel::new(42), &options, &config);

    assert_eq!(before, after);
}

#[test]
fn out_of_range_input_degrades_gracefully() {
    assert_eq!(compose(-20.0), compose(0.0));
    assert_eq!(compose(180.0), compose(100.0));
    assert_eq!(compose(42.9), compose(42.0));
    assert!(GrowthLevel::from_raw(f64::NAN).is_err());
}

#[test]
fn every_level_is_self_consistent() {
    for g in 0..=100 {
        let failures = check_scene_consistency(&compose(g as f64));
        assert!(failures.is_empty(), "g = {}: {:?}", g, failures);
    }
}

#[test]
fn ground_stays_inside_short_canvas() {
    let config = ForestConfig::from_yaml("canvas: { width: 800, height: 120 }").unwrap();
    let scene = compose_scene(GrowthLevel::new(42), &ComposeOptions::default(), &config);
    for ground in scene.iter_kind("ground") {
        assert!(ground.frame.origin.y >= 0.0);
        assert!(ground.frame.bottom() <= 120.0);
    }
}
