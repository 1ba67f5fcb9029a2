// src/render/canvas_renderer.rs
// draws the canvas, its sprites and the control overlays with nannou

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::controllers::PageControls;
use crate::models::BoundingBox;
use crate::views::{Canvas, Surface};

pub struct CanvasRenderer {
    background: Rgb<f32>,
    canvas_color: Rgb<f32>,
    blackout_alpha: f32,
}

impl CanvasRenderer {
    pub fn new(style: &StyleConfig) -> Self {
        let [r, g, b] = style.background;
        Self {
            background: rgb(r, g, b),
            canvas_color: rgb(
                (r + 0.08).min(1.0),
                (g + 0.08).min(1.0),
                (b + 0.08).min(1.0),
            ),
            blackout_alpha: style.blackout_alpha.clamp(0.0, 1.0),
        }
    }

    pub fn draw(
        &self,
        draw: &Draw,
        window: Rect,
        canvas: &Canvas,
        controls: &PageControls,
        now: f32,
    ) {
        draw.background().color(self.background);

        let area = to_window_rect(window, &canvas.container());
        draw.rect().xy(area.xy()).wh(area.wh()).color(self.canvas_color);

        for sprite in canvas.sprites() {
            let Ok(bbox) = canvas.bounding_box(&sprite.id, now) else {
                continue;
            };
            let rect = to_window_rect(window, &bbox);
            let [r, g, b] = sprite.color;
            draw.rect().xy(rect.xy()).wh(rect.wh()).rgb(r, g, b);
        }

        self.mask_outside(draw, window, area);

        if controls.blackout() {
            draw.rect()
                .xy(area.xy())
                .wh(area.wh())
                .rgba(0.0, 0.0, 0.0, self.blackout_alpha);
        }

        let label = if controls.muted() { "muted" } else { "sound on" };
        draw.text(label)
            .x_y(window.right() - 60.0, window.top() - 12.0)
            .color(WHITE);
    }

    /// Lists each sprite's inline style, one per line. Moving sprites are marked.
    pub fn draw_debug(&self, draw: &Draw, window: Rect, canvas: &Canvas, now: f32) {
        let mut y = window.top() - 30.0;
        for sprite in canvas.sprites() {
            let marker = if sprite.is_moving(now) { ">" } else { " " };
            let line = format!("{} {}: {}", marker, sprite.id, sprite.style());
            draw.text(&line)
                .left_justify()
                .w(window.w() - 20.0)
                .x_y(window.x(), y)
                .font_size(11)
                .color(YELLOW);
            y -= 14.0;
        }
    }

    // sprites that are outside the canvas are hidden, like overflow: hidden
    fn mask_outside(&self, draw: &Draw, window: Rect, area: Rect) {
        let bands = [
            Rect::from_corners(
                pt2(window.left(), area.top()),
                pt2(window.right(), window.top()),
            ),
            Rect::from_corners(
                pt2(window.left(), window.bottom()),
                pt2(window.right(), area.bottom()),
            ),
            Rect::from_corners(
                pt2(window.left(), area.bottom()),
                pt2(area.left(), area.top()),
            ),
            Rect::from_corners(
                pt2(area.right(), area.bottom()),
                pt2(window.right(), area.top()),
            ),
        ];
        for band in bands.iter() {
            if band.w() > 0.0 && band.h() > 0.0 {
                draw.rect().xy(band.xy()).wh(band.wh()).color(self.background);
            }
        }
    }
}

/// Convert a top-left based box in window pixels into a nannou rect
/// (origin at the window centre, y up).
pub fn to_window_rect(window: Rect, bbox: &BoundingBox) -> Rect {
    let (cx, cy) = bbox.center();
    Rect::from_x_y_w_h(window.left() + cx, window.top() - cy, bbox.width, bbox.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_window_rect() {
        let window = Rect::from_w_h(1000.0, 600.0);

        let top_left = to_window_rect(window, &BoundingBox::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(top_left.left(), -500.0);
        assert_eq!(top_left.top(), 300.0);
        assert_eq!(top_left.w(), 100.0);
        assert_eq!(top_left.h(), 50.0);

        let centre = to_window_rect(window, &BoundingBox::new(450.0, 275.0, 100.0, 50.0));
        assert_eq!(centre.x(), 0.0);
        assert_eq!(centre.y(), 0.0);
    }
}
