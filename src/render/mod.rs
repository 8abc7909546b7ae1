pub mod svg;

pub use svg::{render_svg, sprite_for};
