// src/views/style.rs
//
// Inline style of a sprite: the only contract between the animation
// controller and whatever draws the canvas.

use std::fmt;

use crate::models::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    #[default]
    Linear,
}

/// `transition: <duration>s linear transform`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    pub duration: f32,
    pub timing: TimingFunction,
}

impl TransitionStyle {
    pub fn linear(duration: f32) -> Self {
        Self {
            duration,
            timing: TimingFunction::Linear,
        }
    }

    /// Fraction of the transition completed after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        match self.timing {
            TimingFunction::Linear => (elapsed / self.duration).clamp(0.0, 1.0),
        }
    }
}

/// `transform: translateX(..)` or `translateY(..)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    pub axis: Axis,
    pub offset: f32,
}

impl Translate {
    pub fn new(axis: Axis, offset: f32) -> Self {
        Self { axis, offset }
    }

    /// Offset as (dx, dy)
    pub fn as_delta(&self) -> (f32, f32) {
        match self.axis {
            Axis::X => (self.offset, 0.0),
            Axis::Y => (0.0, self.offset),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub position: Option<Positioning>,
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub width: Option<f32>,
    pub transition: Option<TransitionStyle>,
    pub transform: Option<Translate>,
}

impl InlineStyle {
    /// Absolutely positioned at the given canvas coordinates.
    pub fn positioned(left: f32, top: f32) -> Self {
        Self {
            position: Some(Positioning::Absolute),
            top: Some(top),
            left: Some(left),
            ..Default::default()
        }
    }

    pub fn coordinate(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut decls: Vec<String> = Vec::new();
        if let Some(Positioning::Absolute) = self.position {
            decls.push("position: absolute".to_string());
        }
        if let Some(top) = self.top {
            decls.push(format!("top: {}px", top));
        }
        if let Some(left) = self.left {
            decls.push(format!("left: {}px", left));
        }
        if let Some(width) = self.width {
            decls.push(format!("width: {}px", width));
        }
        if let Some(transition) = &self.transition {
            decls.push(format!("transition: {}s linear transform", transition.duration));
        }
        if let Some(transform) = &self.transform {
            let func = match transform.axis {
                Axis::X => "translateX",
                Axis::Y => "translateY",
            };
            decls.push(format!("transform: {}({}px)", func, transform.offset));
        }
        write!(f, "{}", decls.join("; "))
    }
}
