// src/models/scene_model.rs
// the JSON-based scene data model

use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::Path;

use super::{BoundingBox, Direction};

/// Time an animation takes when the scene doesn't say.
pub const DEFAULT_ANIMATION_DURATION: f32 = 8.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: CanvasDef,
    #[serde(default)]
    pub sprites: Vec<SpriteDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDef {
    pub width: f32,
    pub height: f32,
    // where the canvas sits in the window
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDef {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default)]
    pub animation: Option<AnimationDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDef {
    pub direction: Direction,
    pub distance: f32,
    #[serde(default = "default_duration")]
    pub duration: f32,
}

fn default_color() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}

fn default_duration() -> f32 {
    DEFAULT_ANIMATION_DURATION
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let scene: Scene = serde_json::from_str(&content)?;
        Ok(scene)
    }

    pub fn animated_sprites(&self) -> impl Iterator<Item = (&SpriteDef, &AnimationDef)> {
        self.sprites
            .iter()
            .filter_map(|sprite| sprite.animation.as_ref().map(|anim| (sprite, anim)))
    }
}

impl CanvasDef {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.left, self.top, self.width, self.height)
    }
}

impl SpriteDef {
    /// Layout box relative to the canvas. Sprites are square unless a height is given.
    pub fn layout(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height.unwrap_or(self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite<'a>(scene: &'a Scene, id: &str) -> Option<&'a SpriteDef> {
        scene.sprites.iter().find(|sprite| sprite.id == id)
    }

    const SCENE: &str = r#"{
        "canvas": { "width": 950, "height": 550 },
        "sprites": [
            { "id": "wizard", "x": 425, "y": 275, "width": 50 },
            { "id": "bat", "x": -100, "y": 300, "width": 75, "height": 40,
              "color": [0.9, 0.1, 0.1],
              "animation": { "direction": "right", "distance": 1200, "duration": 10 } },
            { "id": "zombie", "x": 200, "y": 1000, "width": 75,
              "animation": { "direction": "up", "distance": 1200 } }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene: Scene = serde_json::from_str(SCENE).unwrap();
        assert_eq!(scene.sprites.len(), 3);
        assert_eq!(scene.canvas.left, 0.0);

        let wizard = sprite(&scene, "wizard").unwrap();
        assert!(wizard.animation.is_none());
        assert_eq!(wizard.layout(), BoundingBox::new(425.0, 275.0, 50.0, 50.0));
        assert_eq!(wizard.color, [0.5, 0.5, 0.5]);

        let bat = sprite(&scene, "bat").unwrap();
        assert_eq!(bat.layout().height, 40.0);
        let anim = bat.animation.as_ref().unwrap();
        assert_eq!(anim.direction, Direction::Right);
        assert_eq!(anim.duration, 10.0);
    }

    #[test]
    fn test_default_duration() {
        let scene: Scene = serde_json::from_str(SCENE).unwrap();
        let zombie = sprite(&scene, "zombie").unwrap();
        assert_eq!(
            zombie.animation.as_ref().unwrap().duration,
            DEFAULT_ANIMATION_DURATION
        );
    }

    #[test]
    fn test_animated_sprites_skips_static() {
        let scene: Scene = serde_json::from_str(SCENE).unwrap();
        let ids: Vec<&str> = scene
            .animated_sprites()
            .map(|(sprite, _)| sprite.id.as_str())
            .collect();
        assert_eq!(ids, vec!["bat", "zombie"]);
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let bad = r#"{ "canvas": { "width": 10, "height": 10 },
            "sprites": [ { "id": "a", "x": 0, "y": 0, "width": 1,
            "animation": { "direction": "diagonal", "distance": 5 } } ] }"#;
        assert!(serde_json::from_str::<Scene>(bad).is_err());
    }
}
