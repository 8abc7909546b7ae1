//! Scene evaluation helpers
//!
//! Summaries and consistency checks over composed frames, so output can
//! be verified without rendering pixels.

pub mod summary;
pub mod checks;

pub use summary::SceneSummary;
pub use checks::{check_scene_consistency, generate_scene_report};
