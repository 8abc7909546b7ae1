use std::fmt;
use serde::{Serialize, Deserialize};

/// HSL color: hue in degrees, saturation and lightness in percent.
///
/// Serialized as a `[h, s, l]` triple so palettes stay compact in YAML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub const WHITE: Hsl = Hsl::new(0.0, 0.0, 100.0);
}

impl From<[f32; 3]> for Hsl {
    fn from([h, s, l]: [f32; 3]) -> Self {
        Self { h, s, l }
    }
}

impl From<Hsl> for [f32; 3] {
    fn from(c: Hsl) -> Self {
        [c.h, c.s, c.l]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({} {}% {}%)", self.h, self.s, self.l)
    }
}
