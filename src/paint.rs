use crate::geometry::Color;

/// Paint attributes applied to rendered strokes. Plain value type; cloning
/// one is how a stroke pins its appearance against later paint changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
}

impl Paint {
    pub const fn new(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}
