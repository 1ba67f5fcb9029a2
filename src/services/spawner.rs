// src/services/spawner.rs
//
// Spawns sprites just outside a random edge of the canvas, each set to
// travel inward across it.

use log::warn;
use rand::Rng;

use crate::animation::AnimatedElement;
use crate::config::SpawnerConfig;
use crate::models::{AnimationDef, CanvasDef, Direction, SpriteDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// Direction that carries a sprite from this edge across the canvas.
    pub fn inward(self) -> Direction {
        match self {
            Edge::Top => Direction::Down,
            Edge::Left => Direction::Right,
            Edge::Bottom => Direction::Up,
            Edge::Right => Direction::Left,
        }
    }
}

const ID_PREFIX: &str = "spawn-";

const PALETTE: [[f32; 3]; 4] = [
    [0.55, 0.75, 0.35],
    [0.35, 0.25, 0.45],
    [0.80, 0.45, 0.20],
    [0.60, 0.15, 0.20],
];

pub struct Spawner {
    config: SpawnerConfig,
    spawned: usize,
    last_spawn: Option<f32>,
}

impl Spawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            spawned: 0,
            last_spawn: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Build a sprite on a random edge of the canvas.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, canvas: &CanvasDef) -> SpriteDef {
        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        self.spawn_at(rng, canvas, edge)
    }

    pub fn spawn_at<R: Rng>(&mut self, rng: &mut R, canvas: &CanvasDef, edge: Edge) -> SpriteDef {
        let margin = self.config.margin;
        let free_x = rng.gen_range(0.0..=canvas.width.max(0.0));
        let free_y = rng.gen_range(0.0..=canvas.height.max(0.0));
        let (x, y) = match edge {
            Edge::Top => (free_x, -margin),
            Edge::Left => (-margin, free_y),
            Edge::Bottom => (free_x, canvas.height + margin),
            Edge::Right => (canvas.width + margin, free_y),
        };

        self.spawned += 1;
        SpriteDef {
            id: format!("{}{}", ID_PREFIX, self.spawned),
            x,
            y,
            width: self.config.size,
            height: None,
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            animation: Some(AnimationDef {
                direction: edge.inward(),
                distance: self.config.distance,
                duration: self.config.duration,
            }),
        }
    }

    /// True once per interval while enabled and playing.
    pub fn due(&mut self, playing: bool, now: f32) -> bool {
        if !self.config.enabled || !playing {
            return false;
        }
        match self.last_spawn {
            Some(last) if now - last < self.config.interval => false,
            _ => {
                self.last_spawn = Some(now);
                true
            }
        }
    }

    /// Forget the last spawn time, e.g. after a pause.
    pub fn reset_timer(&mut self) {
        self.last_spawn = None;
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// How many sprites to actually spawn for a request of `requested`.
    pub fn batch_size(&self, requested: usize) -> usize {
        if requested > self.config.max_batch {
            warn!(
                "Spawn request for {} sprites capped at {}",
                requested, self.config.max_batch
            );
        }
        requested.min(self.config.max_batch)
    }

    pub fn owns(&self, id: &str) -> bool {
        id.starts_with(ID_PREFIX)
    }

    /// Ids of spawned sprites with nothing left to travel.
    pub fn expired(&self, elements: &[AnimatedElement], now: f32) -> Vec<String> {
        elements
            .iter()
            .filter(|e| self.owns(e.id()) && e.is_complete(now))
            .map(|e| e.id().to_string())
            .collect()
    }
}
