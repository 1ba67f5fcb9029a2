// src/animation/controller.rs
//
// The AnimationController starts, pauses and resumes the linear movement of
// every sprite it has adopted.
//
// Starting is two-phase: the transition goes on immediately and the transform
// follows after the settle delay, applied from `tick`. Pausing reads each
// sprite's live position, pins it there with absolute top/left, and
// recomputes what is left of its distance and duration so the next start
// continues from where it stopped.

use log::{debug, info, warn};
use std::collections::HashMap;

use super::element::{AnimatedElement, AnimationPhase};
use super::frame_queue::{CancelToken, FrameQueue};
use crate::config::AnimationConfig;
use crate::errors::{CanvasError, CanvasResult};
use crate::models::{Direction, Scene};
use crate::views::{InlineStyle, Surface, TransitionStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Running,
    Paused,
}

pub struct AnimationController {
    elements: Vec<AnimatedElement>,
    tokens: HashMap<String, CancelToken>,
    queue: FrameQueue,
    settle_delay: f32,
}

impl AnimationController {
    pub fn new(settle_delay: f32) -> Self {
        Self {
            elements: Vec::new(),
            tokens: HashMap::new(),
            queue: FrameQueue::new(),
            settle_delay: settle_delay.max(0.0),
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.settle_delay_ms as f32 / 1000.0)
    }

    /************************** Registration ********************************** */

    /// Take control of a sprite already on the surface.
    /// Its start position is read from the sprite's inline left/top.
    pub fn adopt<S: Surface>(
        &mut self,
        surface: &S,
        id: &str,
        direction: Direction,
        distance: f32,
        duration: f32,
    ) -> CanvasResult<()> {
        let style = surface.style(id)?;
        let start_position = style.coordinate(direction.axis()).unwrap_or(0.0);
        let element = AnimatedElement::new(id, direction, distance, duration, start_position)?;

        if let Some(token) = self.tokens.remove(id) {
            token.cancel();
        }
        match self.elements.iter_mut().find(|e| e.id() == id) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
        debug!(
            "Adopted {} moving {} {}px over {}s",
            id, direction, distance, duration
        );
        Ok(())
    }

    /// Adopt every animated sprite of a scene.
    pub fn adopt_scene<S: Surface>(&mut self, surface: &S, scene: &Scene) -> CanvasResult<usize> {
        let mut count = 0;
        for (sprite, anim) in scene.animated_sprites() {
            self.adopt(surface, &sprite.id, anim.direction, anim.distance, anim.duration)?;
            count += 1;
        }
        Ok(count)
    }

    /// Stop controlling a sprite. Any pending transform is cancelled.
    pub fn release(&mut self, id: &str) -> Option<AnimatedElement> {
        if let Some(token) = self.tokens.remove(id) {
            token.cancel();
        }
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    /************************** Start / Pause ********************************** */

    /// Start (or resume) every adopted sprite that isn't already moving.
    /// Returns how many were started.
    pub fn start<S: Surface>(&mut self, surface: &mut S, now: f32) -> CanvasResult<usize> {
        self.ensure_present(surface)?;

        let mut started = 0;
        for element in self.elements.iter_mut() {
            if element.is_running() {
                debug!("{} is already running, skipping start", element.id());
                continue;
            }
            if element.is_finished() {
                debug!("{} has no distance left", element.id());
                continue;
            }

            let mut style = surface.style(element.id())?.clone();
            style.transition = Some(TransitionStyle::linear(element.duration()));
            surface.set_style(element.id(), style, now)?;

            element.begin(now);
            let token = self.queue.schedule(
                element.id(),
                element.target_transform(),
                now + self.settle_delay,
            );
            self.tokens.insert(element.id().to_string(), token);
            started += 1;
        }

        info!("Started {} sprite animation(s) at {:.3}s", started, now);
        Ok(started)
    }

    /// Freeze every moving sprite where it is and record what is left of
    /// its travel. Sprites that are not moving are left alone.
    /// Returns how many were paused.
    pub fn pause<S: Surface>(&mut self, surface: &mut S, now: f32) -> CanvasResult<usize> {
        self.ensure_present(surface)?;

        let container = surface.container();
        let mut paused = 0;
        for element in self.elements.iter_mut() {
            if !element.is_running() {
                continue;
            }
            if let Some(token) = self.tokens.remove(element.id()) {
                token.cancel();
            }

            let frozen = surface.bounding_box(element.id(), now)?.relative_to(&container);
            let width = surface.style(element.id())?.width;

            let mut style = InlineStyle::positioned(frozen.left, frozen.top);
            style.width = width;
            surface.set_style(element.id(), style, now)?;

            element.freeze(frozen.coordinate(element.direction().axis()), now);
            debug!(
                "Paused {} at ({:.1}, {:.1}): {:.1} of {:.1}px left over {:.2}s",
                element.id(),
                frozen.left,
                frozen.top,
                element.remaining_distance(),
                element.total_distance(),
                element.duration()
            );
            paused += 1;
        }

        info!("Paused {} sprite animation(s) at {:.3}s", paused, now);
        Ok(paused)
    }

    /// Apply the transforms whose settle delay has passed. Call once per frame.
    pub fn tick<S: Surface>(&mut self, surface: &mut S, now: f32) -> usize {
        let mut applied = 0;
        for pending in self.queue.take_due(now) {
            self.tokens.remove(&pending.element_id);

            let Some(element) = self
                .elements
                .iter_mut()
                .find(|e| e.id() == pending.element_id)
            else {
                continue;
            };
            if element.phase() != AnimationPhase::Pending {
                continue;
            }

            let result = surface.style(&pending.element_id).cloned().and_then(|mut style| {
                style.transform = Some(pending.transform);
                surface.set_style(&pending.element_id, style, now)
            });
            match result {
                Ok(()) => {
                    element.mark_running(now);
                    applied += 1;
                }
                Err(e) => warn!("Dropping transform for {}: {}", pending.element_id, e),
            }
        }
        applied
    }

    fn ensure_present<S: Surface>(&self, surface: &S) -> CanvasResult<()> {
        match self.elements.iter().find(|e| !surface.contains(e.id())) {
            Some(missing) => Err(CanvasError::ElementNotFound(missing.id().to_string())),
            None => Ok(()),
        }
    }

    /************************** Queries ********************************** */

    pub fn element(&self, id: &str) -> Option<&AnimatedElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn elements(&self) -> &[AnimatedElement] {
        &self.elements
    }

    pub fn state(&self) -> ControllerState {
        if self.elements.iter().any(|e| e.is_running()) {
            ControllerState::Running
        } else if self
            .elements
            .iter()
            .any(|e| e.phase() == AnimationPhase::Paused)
        {
            ControllerState::Paused
        } else {
            ControllerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == ControllerState::Running
    }

    pub fn settle_delay(&self) -> f32 {
        self.settle_delay
    }

    pub fn pending_transforms(&self) -> usize {
        self.queue.len()
    }
}
