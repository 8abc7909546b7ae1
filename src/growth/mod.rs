//! Growth-to-feature resolution
//!
//! Maps the single growth level onto the set of unlocked scene features
//! and the dashboard stats derived from it.

mod level;
mod features;
mod stats;

pub use level::GrowthLevel;
pub use features::{FeatureSet, resolve_features};
pub use stats::{ForestStats, class_growth};
