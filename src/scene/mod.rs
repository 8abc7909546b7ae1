//! Scene composition
//!
//! Turns a growth level into an ordered list of placed elements. Elements
//! are tagged variants; the drawing for each kind comes from `generators`.

pub mod composer;
pub mod element;
pub mod generators;
pub mod layout;
pub mod sprite;

pub use composer::{compose_scene, ComposeOptions, Scene};
pub use element::{ElementKind, Layer, SceneElement, SizeVariant, Stratum};
pub use sprite::{Paint, Shape, Sprite};
