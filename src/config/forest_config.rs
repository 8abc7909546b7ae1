use serde::{Deserialize, Serialize};
use crate::error::{Result, SceneError};
use crate::math::{Hsl, Vec2};

/// Growth levels at which each feature category unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub water: u8,
    pub bushes: u8,
    pub flowers: u8,
    pub birds: u8,
    pub animals: u8,
    /// Only meaningful once `animals` is unlocked
    pub deer: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            water: 30,
            bushes: 15,
            flowers: 20,
            birds: 50,
            animals: 70,
            deer: 85,
        }
    }
}

/// Logical canvas size of the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Canvas {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Tunable constants of the forest engine.
///
/// These are fixed for the lifetime of a renderer; they are never
/// adjusted while composing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub thresholds: Thresholds,
    /// Growth points per tree
    pub tree_step: u8,
    /// Growth points per flower
    pub flower_step: u8,
    /// Hard cap on rendered trees
    pub max_trees: u8,
    pub canvas: Canvas,
    pub flower_palette: Vec<Hsl>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            tree_step: 10,
            flower_step: 20,
            max_trees: 8,
            canvas: Canvas::default(),
            flower_palette: vec![
                Hsl::new(350.0, 70.0, 60.0),
                Hsl::new(45.0, 90.0, 60.0),
                Hsl::new(280.0, 60.0, 65.0),
            ],
        }
    }
}

impl ForestConfig {
    /// Parse from YAML string. Missing fields fall back to defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ForestConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tree_step == 0 {
            return Err(SceneError::Config("tree_step must be positive".to_string()));
        }
        if self.flower_step == 0 {
            return Err(SceneError::Config("flower_step must be positive".to_string()));
        }
        if self.max_trees == 0 {
            return Err(SceneError::Config("max_trees must be positive".to_string()));
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("water", t.water),
            ("bushes", t.bushes),
            ("flowers", t.flowers),
            ("birds", t.birds),
            ("animals", t.animals),
            ("deer", t.deer),
        ] {
            if value > 100 {
                return Err(SceneError::Config(format!(
                    "threshold '{}' is {}, above the maximum growth of 100",
                    name, value
                )));
            }
        }
        if t.deer < t.animals {
            return Err(SceneError::Config(format!(
                "deer threshold {} is below animals threshold {}",
                t.deer, t.animals
            )));
        }

        if self.flower_palette.is_empty() {
            return Err(SceneError::Config("flower_palette must not be empty".to_string()));
        }
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(SceneError::Config(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = r#"
thresholds:
  water: 25
  birds: 40
tree_step: 12
max_trees: 6
canvas:
  width: 1024
flower_palette:
  - [10, 80, 55]
  - [200, 60, 50]
"#;

    #[test]
    fn test_defaults_are_valid() {
        let config = ForestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thresholds.water, 30);
        assert_eq!(config.max_trees, 8);
        assert_eq!(config.flower_palette.len(), 3);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = ForestConfig::from_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(config.thresholds.water, 25);
        assert_eq!(config.thresholds.birds, 40);
        // Unspecified thresholds keep defaults
        assert_eq!(config.thresholds.deer, 85);
        assert_eq!(config.tree_step, 12);
        assert_eq!(config.flower_step, 20);
        assert_eq!(config.max_trees, 6);
        assert_eq!(config.canvas.width, 1024.0);
        assert_eq!(config.canvas.height, 600.0);
        assert_eq!(config.flower_palette[1], Hsl::new(200.0, 60.0, 50.0));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ForestConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ForestConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ForestConfig::from_yaml("tree_step: [not, a, number]");
        assert!(matches!(result, Err(SceneError::Yaml(_))));
    }

    #[test]
    fn test_zero_step_rejected() {
        let result = ForestConfig::from_yaml("tree_step: 0");
        assert!(matches!(result, Err(SceneError::Config(_))));
    }

    #[test]
    fn test_threshold_above_hundred_rejected() {
        let err = ForestConfig::from_yaml("thresholds: { birds: 120 }").unwrap_err();
        assert!(err.to_string().contains("birds"));
    }

    #[test]
    fn test_deer_below_animals_rejected() {
        let err = ForestConfig::from_yaml("thresholds: { animals: 80, deer: 75 }").unwrap_err();
        assert!(err.to_string().contains("deer"));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = ForestConfig::from_yaml("flower_palette: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_canvas_rejected() {
        let result = ForestConfig::from_yaml("canvas: { width: 0, height: 600 }");
        assert!(result.is_err());
    }
}
