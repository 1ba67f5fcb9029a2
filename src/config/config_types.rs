// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub scene_file: String,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub background: [f32; 3],
    pub blackout_alpha: f32,
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    pub settle_delay_ms: u64, // Time between setting the transition and the transform
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SpawnerConfig {
    pub enabled: bool,
    pub interval: f32, // seconds between spawns while running
    pub distance: f32, // how far a spawned sprite travels
    pub duration: f32, // how long that takes
    pub size: f32,     // sprite width and height
    pub margin: f32,   // how far outside the canvas sprites appear
    pub max_batch: usize, // most sprites a single spawn request may add
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: 1.0,
            distance: 1200.0,
            duration: 10.0,
            size: 75.0,
            margin: 100.0,
            max_batch: 32,
        }
    }
}
