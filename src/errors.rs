// src/errors.rs
//
// Error types for the canvas and the animation controller

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanvasError {
    #[error("sprite not found on canvas: {0}")]
    ElementNotFound(String),

    #[error("sprite id already on canvas: {0}")]
    DuplicateElement(String),

    #[error("invalid animation for sprite {id}: {reason}")]
    InvalidAnimation { id: String, reason: String },
}

pub type CanvasResult<T> = Result<T, CanvasError>;
