pub mod vec2;
pub mod color;

pub use vec2::{Frame, Vec2};
pub use color::Hsl;
