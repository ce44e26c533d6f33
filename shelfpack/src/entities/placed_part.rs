use crate::entities::PartInstance;
use crate::geometry::Rect;

/// A [`PartInstance`] that has been placed on a sheet at a specific position.
/// `width` and `height` equal the instance's dimensions, swapped iff `rotated`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPart {
    /// The instance this placement consumed
    pub instance: PartInstance,
    /// Horizontal offset of the part's left edge within the sheet
    pub x: f32,
    /// Vertical offset of the part's bottom edge within the sheet
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Whether the part was rotated 90° to fit
    pub rotated: bool,
}

impl PlacedPart {
    pub fn new(instance: PartInstance, x: f32, y: f32, rotated: bool) -> Self {
        let (width, height) = instance.placed_dims(rotated);
        PlacedPart {
            instance,
            x,
            y,
            width,
            height,
            rotated,
        }
    }

    /// The rectangle of sheet material this part occupies (kerf margins excluded).
    pub fn rect(&self) -> Rect {
        Rect::from_corner_and_dims(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
