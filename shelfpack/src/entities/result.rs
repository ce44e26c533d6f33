use crate::entities::{PartInstance, SheetLayout, StockSheet};

/// The outcome of a packing run: ordered finalized sheets, summary statistics and
/// the instances that failed every placement attempt.
/// Every [`PartInstance`] derived from the input requests appears in exactly one of
/// {some layout's `placed_parts`, `unplaced`}.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingResult {
    pub summary: PackSummary,
    pub layouts: Vec<SheetLayout>,
    /// Instances that fit no sheet in either orientation. A normal outcome, not an error.
    pub unplaced: Vec<PartInstance>,
}

/// Area and utilization statistics folded over all finalized sheets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackSummary {
    pub sheets_needed: usize,
    /// Sum of the placed area of every part, across all sheets
    pub total_area_used: f32,
    /// May dip a hair below zero at exact-fit boundaries under floating-point
    /// rounding; propagated raw, callers clamp for display
    pub total_waste_area: f32,
    /// 0 when no sheets were used
    pub waste_percent: f32,
}

impl PackSummary {
    pub fn new(layouts: &[SheetLayout], stock: StockSheet) -> Self {
        let sheets_needed = layouts.len();
        let total_area_used = layouts.iter().map(SheetLayout::used_area).sum::<f32>();
        let total_sheet_area = sheets_needed as f32 * stock.area();
        let total_waste_area = total_sheet_area - total_area_used;
        let waste_percent = match sheets_needed {
            0 => 0.0,
            _ => total_waste_area / total_sheet_area * 100.0,
        };
        PackSummary {
            sheets_needed,
            total_area_used,
            total_waste_area,
            waste_percent,
        }
    }
}
