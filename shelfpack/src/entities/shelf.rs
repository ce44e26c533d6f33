/// A horizontal packing row within a [`Sheet`](crate::entities::Sheet), at a fixed vertical
/// offset and with a fixed height equal to the placed height of its first part.
/// `current_x` marks the next free horizontal offset (kerf allowances included) and only
/// ever increases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shelf {
    /// Vertical offset of the shelf's bottom edge within the sheet
    pub y: f32,
    /// Fixed for the lifetime of the shelf
    pub height: f32,
    pub current_x: f32,
}
