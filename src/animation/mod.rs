//! Animation tags for scene elements
//!
//! Elements carry declarative animation kinds with deterministic start
//! delays; the rendering target decides how each kind looks.

mod timing;
mod entrance;

pub use timing::{Animation, AnimationKind, millis, stagger};
pub use entrance::EntranceLatch;
