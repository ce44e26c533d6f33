use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    /// Rectangle with its left bottom corner at (x, y) and the given width and height.
    pub fn from_corner_and_dims(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// True iff the interiors of `self` and `other` intersect, within tolerance.
    /// Rectangles that merely share an edge (parts placed edge-to-edge at kerf 0)
    /// do not overlap.
    #[inline(always)]
    pub fn almost_overlaps_with(&self, other: &Rect) -> bool {
        FPA(f32::max(self.x_min, other.x_min)) < FPA(f32::min(self.x_max, other.x_max))
            && FPA(f32::max(self.y_min, other.y_min)) < FPA(f32::min(self.y_max, other.y_max))
    }

    /// True iff `other` lies entirely within `self`, within tolerance.
    #[inline(always)]
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }
}
