use crate::entities::{PartInstance, PlacedPart, Shelf, StockSheet};
use crate::geometry::Rect;
use crate::pack::compute_waste;
use crate::util::FPA;

/// A stock sheet being filled by the packer. Shelves are stored in creation order,
/// which is also vertical order (monotonically increasing `y`). A sheet remains
/// open (mutable) until the packer commits to a new sheet, at which point it is
/// finalized into an immutable [`SheetLayout`].
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Index of this sheet in the order sheets were opened, starting at 0
    pub id: usize,
    pub shelves: Vec<Shelf>,
    pub placed_parts: Vec<PlacedPart>,
    /// Vertical offset where the next shelf would begin
    pub next_shelf_y: f32,
}

impl Sheet {
    pub fn new(id: usize, kerf: f32) -> Self {
        Sheet {
            id,
            shelves: vec![],
            placed_parts: vec![],
            // leading kerf margin at the bottom of the sheet
            next_shelf_y: kerf,
        }
    }

    /// Searches the existing shelves in creation order for the first one that can
    /// take `instance`, trying the un-rotated orientation before the rotated one.
    /// Returns the shelf index and whether rotation is required.
    /// Greedy by contract: the first feasible (shelf, orientation) wins.
    pub fn find_shelf_placement(
        &self,
        instance: &PartInstance,
        stock: StockSheet,
        kerf: f32,
    ) -> Option<(usize, bool)> {
        let max_x = stock.width - kerf / 2.0;
        self.shelves.iter().enumerate().find_map(|(idx, shelf)| {
            if FPA(instance.height) <= FPA(shelf.height)
                && FPA(shelf.current_x + instance.width) <= FPA(max_x)
            {
                Some((idx, false))
            } else if FPA(instance.width) <= FPA(shelf.height)
                && FPA(shelf.current_x + instance.height) <= FPA(max_x)
            {
                Some((idx, true))
            } else {
                None
            }
        })
    }

    /// Whether a new shelf at `next_shelf_y` can take `instance`, and in which
    /// orientation (un-rotated tried first).
    pub fn find_new_shelf_placement(
        &self,
        instance: &PartInstance,
        stock: StockSheet,
        kerf: f32,
    ) -> Option<bool> {
        let max_x = stock.width - kerf / 2.0;
        let max_y = stock.height - kerf / 2.0;
        for rotated in [false, true] {
            let (w, h) = instance.placed_dims(rotated);
            if FPA(self.next_shelf_y + h) <= FPA(max_y) && FPA(kerf + w) <= FPA(max_x) {
                return Some(rotated);
            }
        }
        None
    }

    /// Places `instance` on an existing shelf and advances that shelf's cursor.
    pub fn place_on_shelf(
        &mut self,
        shelf_idx: usize,
        instance: PartInstance,
        rotated: bool,
        kerf: f32,
    ) -> PlacedPart {
        let shelf = &mut self.shelves[shelf_idx];
        let placed = PlacedPart::new(instance, shelf.current_x, shelf.y, rotated);
        shelf.current_x += placed.width + kerf;
        self.placed_parts.push(placed);
        placed
    }

    /// Opens a new shelf at `next_shelf_y`, sized to the placed height of `instance`,
    /// and places the instance as its first part.
    pub fn place_on_new_shelf(
        &mut self,
        instance: PartInstance,
        rotated: bool,
        kerf: f32,
    ) -> PlacedPart {
        let placed = PlacedPart::new(instance, kerf, self.next_shelf_y, rotated);
        let shelf = Shelf {
            y: self.next_shelf_y,
            height: placed.height,
            // leading margin + part + trailing margin reserved for the next part
            current_x: kerf + placed.width + kerf,
        };
        self.next_shelf_y += shelf.height + kerf;
        self.shelves.push(shelf);
        self.placed_parts.push(placed);
        placed
    }

    /// Closes this sheet: computes its waste regions and freezes it into a [`SheetLayout`].
    pub fn finalize(self, stock: StockSheet, kerf: f32) -> SheetLayout {
        let waste = compute_waste(&self.shelves, self.next_shelf_y, stock, kerf);
        SheetLayout {
            id: self.id,
            shelves: self.shelves,
            placed_parts: self.placed_parts,
            waste,
        }
    }
}

/// A finalized [`Sheet`]: placements are frozen and the unused regions have been derived.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetLayout {
    pub id: usize,
    pub shelves: Vec<Shelf>,
    pub placed_parts: Vec<PlacedPart>,
    /// Derived unused regions, a lower-bound visualization of waste,
    /// not an exhaustive free-rectangle decomposition
    pub waste: Vec<Rect>,
}

impl SheetLayout {
    /// Sum of the area of every part placed on this sheet.
    pub fn used_area(&self) -> f32 {
        self.placed_parts.iter().map(PlacedPart::area).sum()
    }

    /// Fraction of the sheet covered by placed parts.
    pub fn density(&self, stock: StockSheet) -> f32 {
        self.used_area() / stock.area()
    }
}
