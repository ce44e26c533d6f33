use crate::entities::{Shelf, StockSheet};
use crate::geometry::Rect;
use crate::util::FPA;

/// Derives the leftover rectangular regions of a sheet once placement on it has finished:
/// one rect per shelf for the trailing horizontal gap at that shelf's row, plus one
/// full-width strip for the remaining vertical space below the last shelf.
/// Only strictly positive regions are emitted.
pub fn compute_waste(
    shelves: &[Shelf],
    next_shelf_y: f32,
    stock: StockSheet,
    kerf: f32,
) -> Vec<Rect> {
    let mut waste = vec![];
    let max_x = stock.width - kerf / 2.0;
    for shelf in shelves {
        if FPA(shelf.current_x) < FPA(max_x) {
            waste.push(Rect {
                x_min: shelf.current_x,
                y_min: shelf.y,
                x_max: max_x,
                y_max: shelf.y + shelf.height,
            });
        }
    }
    let max_y = stock.height - kerf / 2.0;
    if FPA(next_shelf_y) < FPA(max_y) {
        waste.push(Rect {
            x_min: 0.0,
            y_min: next_shelf_y,
            x_max: stock.width,
            y_max: max_y,
        });
    }
    waste
}
