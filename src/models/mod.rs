pub mod geometry;
pub mod scene_model;
pub mod sprite_model;

pub use geometry::{Axis, BoundingBox};
pub use scene_model::{AnimationDef, CanvasDef, Scene, SpriteDef};
pub use sprite_model::Direction;
