/// A distinct part specification to be cut from stock, as supplied by the caller.
/// Immutable once created; `quantity` is expanded into individual [`PartInstance`]s at the start of packing.
#[derive(Clone, Debug, PartialEq)]
pub struct PartRequest {
    pub id: usize,
    pub width: f32,
    pub height: f32,
    /// Number of physical units of this part to cut
    pub quantity: usize,
}

impl PartRequest {
    pub fn new(id: usize, width: f32, height: f32, quantity: usize) -> Self {
        PartRequest {
            id,
            width,
            height,
            quantity,
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// One physical unit to cut, derived from a [`PartRequest`] by expanding its quantity.
/// Consumed (placed or rejected) exactly once; never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartInstance {
    /// Unique identifier across all instances of a packing run
    pub id: usize,
    /// Identifier of the originating [`PartRequest`]
    pub request_id: usize,
    pub width: f32,
    pub height: f32,
}

impl PartInstance {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Placed dimensions for the given orientation: (width, height), swapped iff rotated.
    pub fn placed_dims(&self, rotated: bool) -> (f32, f32) {
        match rotated {
            false => (self.width, self.height),
            true => (self.height, self.width),
        }
    }
}
