// src/animation/element.rs
//
// Per-sprite animation record. Lives in the controller, keyed by sprite id,
// so the canvas only ever sees inline styles.

use crate::errors::{CanvasError, CanvasResult};
use crate::models::Direction;
use crate::views::Translate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    // transition set, transform waiting for the settle delay
    Pending,
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedElement {
    id: String,
    direction: Direction,
    total_distance: f32,
    remaining_distance: f32,
    duration: f32,
    start_position: f32,
    movement_start: Option<f32>,
    phase: AnimationPhase,
}

impl AnimatedElement {
    pub fn new(
        id: &str,
        direction: Direction,
        distance: f32,
        duration: f32,
        start_position: f32,
    ) -> CanvasResult<Self> {
        let invalid = |reason: &str| CanvasError::InvalidAnimation {
            id: id.to_string(),
            reason: reason.to_string(),
        };
        if !distance.is_finite() || distance < 0.0 {
            return Err(invalid("distance must be a finite, non-negative number"));
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(invalid("duration must be a finite, non-negative number"));
        }
        if !start_position.is_finite() {
            return Err(invalid("start position must be finite"));
        }

        Ok(Self {
            id: id.to_string(),
            direction,
            total_distance: distance,
            remaining_distance: distance,
            duration,
            start_position,
            movement_start: None,
            phase: AnimationPhase::Idle,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn total_distance(&self) -> f32 {
        self.total_distance
    }

    pub fn remaining_distance(&self) -> f32 {
        self.remaining_distance
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn start_position(&self) -> f32 {
        self.start_position
    }

    pub fn movement_start(&self) -> Option<f32> {
        self.movement_start
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// True between a start/resume and the next pause.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnimationPhase::Pending | AnimationPhase::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_distance <= 0.0
    }

    /// Nothing left to do: either frozen with no distance remaining, or
    /// running for at least its full duration.
    pub fn is_complete(&self, now: f32) -> bool {
        match self.phase {
            AnimationPhase::Running => self
                .movement_start
                .is_some_and(|started| now - started >= self.duration),
            _ => self.is_finished(),
        }
    }

    /// The transform that carries the sprite over its remaining distance.
    pub fn target_transform(&self) -> Translate {
        Translate::new(
            self.direction.axis(),
            self.direction.offset(self.remaining_distance),
        )
    }

    pub(crate) fn begin(&mut self, now: f32) {
        self.movement_start = Some(now);
        self.phase = AnimationPhase::Pending;
    }

    pub(crate) fn mark_running(&mut self, now: f32) {
        self.movement_start = Some(now);
        self.phase = AnimationPhase::Running;
    }

    /// Recompute remaining duration and distance from the frozen position.
    /// `position` is the sprite's coordinate along its axis, relative to the canvas.
    pub(crate) fn freeze(&mut self, position: f32, now: f32) {
        if self.phase == AnimationPhase::Running {
            let elapsed = self
                .movement_start
                .map_or(0.0, |started| (now - started).max(0.0));
            self.duration = (self.duration - elapsed).max(0.0);
        }

        let travelled = self.direction.travelled(self.start_position, position);
        self.remaining_distance = (self.total_distance - travelled).clamp(0.0, self.total_distance);
        self.movement_start = None;
        self.phase = AnimationPhase::Paused;
    }
}
