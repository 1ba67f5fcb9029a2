// src/lib.rs

pub mod animation;
pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod render;
pub mod services;
pub mod views;

pub use errors::{CanvasError, CanvasResult};
