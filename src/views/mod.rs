// src/views/mod.rs

pub mod canvas;
pub mod style;

pub use canvas::{Canvas, CanvasSprite, Surface};
pub use style::{InlineStyle, Positioning, TimingFunction, TransitionStyle, Translate};
