// src/views/canvas.rs
//
// The canvas holds the sprites and evaluates their inline styles over time.
//
// It behaves like a page container of absolutely positioned images:
// a change of transform while a transition is set animates linearly from the
// current offset to the new one; without a transition the offset jumps.

use crate::errors::{CanvasError, CanvasResult};
use crate::models::{BoundingBox, Scene, SpriteDef};
use crate::views::style::{InlineStyle, TransitionStyle};

/// The controller's view of the rendering layer.
pub trait Surface {
    /// Container bounds in window coordinates.
    fn container(&self) -> BoundingBox;
    fn contains(&self, id: &str) -> bool;
    fn sprite_ids(&self) -> Vec<String>;
    /// Live rendered bounds of a sprite in window coordinates.
    fn bounding_box(&self, id: &str, now: f32) -> CanvasResult<BoundingBox>;
    fn style(&self, id: &str) -> CanvasResult<&InlineStyle>;
    fn set_style(&mut self, id: &str, style: InlineStyle, now: f32) -> CanvasResult<()>;
}

#[derive(Debug, Clone)]
struct TransformMotion {
    from: (f32, f32),
    to: (f32, f32),
    started_at: f32,
    transition: Option<TransitionStyle>,
}

impl Default for TransformMotion {
    fn default() -> Self {
        Self {
            from: (0.0, 0.0),
            to: (0.0, 0.0),
            started_at: 0.0,
            transition: None,
        }
    }
}

impl TransformMotion {
    fn offset_at(&self, now: f32) -> (f32, f32) {
        match &self.transition {
            None => self.to,
            Some(transition) => {
                let t = transition.progress(now - self.started_at);
                (
                    self.from.0 + (self.to.0 - self.from.0) * t,
                    self.from.1 + (self.to.1 - self.from.1) * t,
                )
            }
        }
    }

    fn is_settled(&self, now: f32) -> bool {
        self.offset_at(now) == self.to
    }
}

#[derive(Debug, Clone)]
pub struct CanvasSprite {
    pub id: String,
    pub layout: BoundingBox,
    pub color: [f32; 3],
    style: InlineStyle,
    motion: TransformMotion,
}

impl CanvasSprite {
    pub fn new(id: &str, layout: BoundingBox, color: [f32; 3]) -> Self {
        let mut style = InlineStyle::positioned(layout.left, layout.top);
        style.width = Some(layout.width);
        Self {
            id: id.to_string(),
            layout,
            color,
            style,
            motion: TransformMotion::default(),
        }
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Bounds relative to the canvas at time `now`.
    pub fn local_box(&self, now: f32) -> BoundingBox {
        let left = self.style.left.unwrap_or(self.layout.left);
        let top = self.style.top.unwrap_or(self.layout.top);
        let width = self.style.width.unwrap_or(self.layout.width);
        // images keep their aspect ratio when only the width is set
        let height = if self.layout.width > 0.0 {
            self.layout.height * width / self.layout.width
        } else {
            self.layout.height
        };
        let (dx, dy) = self.motion.offset_at(now);
        BoundingBox::new(left + dx, top + dy, width, height)
    }

    pub fn is_moving(&self, now: f32) -> bool {
        !self.motion.is_settled(now)
    }

    fn apply_style(&mut self, style: InlineStyle, now: f32) {
        let target = style
            .transform
            .map(|translate| translate.as_delta())
            .unwrap_or((0.0, 0.0));

        if target != self.motion.to {
            let current = self.motion.offset_at(now);
            self.motion = TransformMotion {
                from: current,
                to: target,
                started_at: now,
                transition: style.transition,
            };
        }
        self.style = style;
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    bounds: BoundingBox,
    sprites: Vec<CanvasSprite>,
}

impl Canvas {
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            sprites: Vec::new(),
        }
    }

    pub fn from_scene(scene: &Scene) -> CanvasResult<Self> {
        let mut canvas = Canvas::new(scene.canvas.bounds());
        for def in &scene.sprites {
            canvas.add_sprite_def(def)?;
        }
        Ok(canvas)
    }

    pub fn add_sprite_def(&mut self, def: &SpriteDef) -> CanvasResult<()> {
        self.add_sprite(CanvasSprite::new(&def.id, def.layout(), def.color))
    }

    /// Sprites are drawn in insertion order.
    pub fn add_sprite(&mut self, sprite: CanvasSprite) -> CanvasResult<()> {
        if self.contains(&sprite.id) {
            return Err(CanvasError::DuplicateElement(sprite.id));
        }
        self.sprites.push(sprite);
        Ok(())
    }

    pub fn remove_sprite(&mut self, id: &str) -> Option<CanvasSprite> {
        let index = self.sprites.iter().position(|s| s.id == id)?;
        Some(self.sprites.remove(index))
    }

    pub fn sprite(&self, id: &str) -> Option<&CanvasSprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    pub fn sprites(&self) -> impl Iterator<Item = &CanvasSprite> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn sprite_mut(&mut self, id: &str) -> CanvasResult<&mut CanvasSprite> {
        self.sprites
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CanvasError::ElementNotFound(id.to_string()))
    }

    fn find(&self, id: &str) -> CanvasResult<&CanvasSprite> {
        self.sprite(id)
            .ok_or_else(|| CanvasError::ElementNotFound(id.to_string()))
    }
}

impl Surface for Canvas {
    fn container(&self) -> BoundingBox {
        self.bounds
    }

    fn contains(&self, id: &str) -> bool {
        self.sprites.iter().any(|s| s.id == id)
    }

    fn sprite_ids(&self) -> Vec<String> {
        self.sprites.iter().map(|s| s.id.clone()).collect()
    }

    fn bounding_box(&self, id: &str, now: f32) -> CanvasResult<BoundingBox> {
        let local = self.find(id)?.local_box(now);
        Ok(local.offset(self.bounds.left, self.bounds.top))
    }

    fn style(&self, id: &str) -> CanvasResult<&InlineStyle> {
        Ok(self.find(id)?.style())
    }

    fn set_style(&mut self, id: &str, style: InlineStyle, now: f32) -> CanvasResult<()> {
        self.sprite_mut(id)?.apply_style(style, now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Axis;
    use crate::views::style::Translate;

    fn test_canvas() -> Canvas {
        let mut canvas = Canvas::new(BoundingBox::new(10.0, 20.0, 950.0, 550.0));
        canvas
            .add_sprite(CanvasSprite::new(
                "bat",
                BoundingBox::new(100.0, 50.0, 75.0, 75.0),
                [1.0, 0.0, 0.0],
            ))
            .unwrap();
        canvas
    }

    #[test]
    fn test_bounding_box_includes_container_offset() {
        let canvas = test_canvas();
        let b = canvas.bounding_box("bat", 0.0).unwrap();
        assert_eq!(b, BoundingBox::new(110.0, 70.0, 75.0, 75.0));
    }

    #[test]
    fn test_transform_with_transition_animates_linearly() {
        let mut canvas = test_canvas();
        let mut style = canvas.style("bat").unwrap().clone();
        style.transition = Some(TransitionStyle::linear(4.0));
        canvas.set_style("bat", style.clone(), 0.0).unwrap();

        style.transform = Some(Translate::new(Axis::X, 200.0));
        canvas.set_style("bat", style, 1.0).unwrap();

        let at = |t: f32| canvas.bounding_box("bat", t).unwrap().left;
        assert!((at(1.0) - 110.0).abs() < 1e-4);
        assert!((at(3.0) - 210.0).abs() < 1e-4);
        assert!((at(5.0) - 310.0).abs() < 1e-4);
        assert!((at(9.0) - 310.0).abs() < 1e-4);
        assert!(canvas.sprite("bat").unwrap().is_moving(3.0));
        assert!(!canvas.sprite("bat").unwrap().is_moving(5.0));
    }

    #[test]
    fn test_transform_without_transition_jumps() {
        let mut canvas = test_canvas();
        let mut style = canvas.style("bat").unwrap().clone();
        style.transform = Some(Translate::new(Axis::Y, -30.0));
        canvas.set_style("bat", style, 2.0).unwrap();
        let b = canvas.bounding_box("bat", 2.0).unwrap();
        assert_eq!(b.top, 40.0);
        assert_eq!(b.left, 110.0);
    }

    #[test]
    fn test_clearing_style_snaps_offset() {
        let mut canvas = test_canvas();
        let mut style = canvas.style("bat").unwrap().clone();
        style.transition = Some(TransitionStyle::linear(2.0));
        style.transform = Some(Translate::new(Axis::X, 100.0));
        canvas.set_style("bat", style, 0.0).unwrap();

        canvas
            .set_style("bat", InlineStyle::positioned(150.0, 50.0), 1.0)
            .unwrap();
        let b = canvas.bounding_box("bat", 5.0).unwrap();
        assert_eq!(b.left, 160.0);
    }

    #[test]
    fn test_width_scales_height() {
        let mut canvas = test_canvas();
        let mut style = canvas.style("bat").unwrap().clone();
        style.width = Some(150.0);
        canvas.set_style("bat", style, 0.0).unwrap();
        let b = canvas.bounding_box("bat", 0.0).unwrap();
        assert_eq!(b.width, 150.0);
        assert_eq!(b.height, 150.0);
    }

    #[test]
    fn test_missing_sprite() {
        let mut canvas = test_canvas();
        assert_eq!(
            canvas.bounding_box("ghost", 0.0),
            Err(CanvasError::ElementNotFound("ghost".to_string()))
        );
        assert!(canvas
            .set_style("ghost", InlineStyle::default(), 0.0)
            .is_err());
    }

    #[test]
    fn test_duplicate_and_remove() {
        let mut canvas = test_canvas();
        let dup = CanvasSprite::new("bat", BoundingBox::default(), [0.0, 0.0, 0.0]);
        assert_eq!(
            canvas.add_sprite(dup),
            Err(CanvasError::DuplicateElement("bat".to_string()))
        );
        assert_eq!(canvas.len(), 1);
        assert!(canvas.remove_sprite("bat").is_some());
        assert!(canvas.is_empty());
        assert!(canvas.remove_sprite("bat").is_none());
    }

    #[test]
    fn test_from_scene_keeps_order() {
        let scene: Scene = serde_json::from_str(
            r#"{ "canvas": { "width": 100, "height": 100, "left": 5, "top": 5 },
                 "sprites": [ { "id": "a", "x": 0, "y": 0, "width": 10 },
                              { "id": "b", "x": 20, "y": 0, "width": 10 } ] }"#,
        )
        .unwrap();
        let canvas = Canvas::from_scene(&scene).unwrap();
        assert_eq!(canvas.sprite_ids(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(canvas.style("b").unwrap().left, Some(20.0));
        assert_eq!(canvas.container().left, 5.0);
    }
}
