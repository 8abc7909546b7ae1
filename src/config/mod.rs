pub mod forest_config;

pub use forest_config::{Canvas, ForestConfig, Thresholds};
