// src/render/mod.rs
// Drawing the canvas with nannou

pub mod canvas_renderer;

pub use canvas_renderer::{to_window_rect, CanvasRenderer};
