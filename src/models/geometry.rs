// src/models/geometry.rs
// Some types for working with sprite geometry
//
// Coordinates follow the page convention: origin at the top-left,
// x grows to the right and y grows downward.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// The position of this box relative to another box's top-left corner.
    pub fn relative_to(&self, origin: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left - origin.left,
            top: self.top - origin.top,
            width: self.width,
            height: self.height,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> BoundingBox {
        BoundingBox {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    pub fn coordinate(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }
}
