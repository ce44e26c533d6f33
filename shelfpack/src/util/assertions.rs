use itertools::Itertools;

use crate::entities::{CutInstance, PackingResult, SheetLayout, StockSheet};
use crate::util::FPA;

/// Every instance derived from the requests ends up in exactly one of
/// {some sheet's placed parts, unplaced}: no duplication, no loss.
pub fn all_instances_accounted_for(instance: &CutInstance, result: &PackingResult) -> bool {
    let n_placed: usize = result.layouts.iter().map(|l| l.placed_parts.len()).sum();
    if n_placed + result.unplaced.len() != instance.total_part_qty() {
        return false;
    }
    let ids = result
        .layouts
        .iter()
        .flat_map(|l| l.placed_parts.iter().map(|pp| pp.instance.id))
        .chain(result.unplaced.iter().map(|inst| inst.id))
        .sorted_unstable()
        .collect_vec();
    ids.iter().tuple_windows().all(|(a, b)| a != b)
}

/// No two parts on the same sheet overlap in their occupied rectangles.
pub fn no_placed_parts_overlap(layout: &SheetLayout) -> bool {
    layout
        .placed_parts
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.rect().almost_overlaps_with(&b.rect()))
}

/// Every placed part lies entirely within the stock sheet, within tolerance.
pub fn placed_parts_within_stock(layout: &SheetLayout, stock: StockSheet) -> bool {
    layout
        .placed_parts
        .iter()
        .all(|pp| stock.rect().almost_contains(&pp.rect()))
}

/// Waste regions lie within the sheet and overlap no placed part.
pub fn waste_is_disjoint(layout: &SheetLayout, stock: StockSheet) -> bool {
    layout.waste.iter().all(|w| {
        stock.rect().almost_contains(w)
            && layout
                .placed_parts
                .iter()
                .all(|pp| !pp.rect().almost_overlaps_with(w))
    })
}

/// used + waste adds up to the total area of the sheets needed, within tolerance.
pub fn summary_is_consistent(result: &PackingResult, stock: StockSheet) -> bool {
    let total_sheet_area = result.summary.sheets_needed as f32 * stock.area();
    let tolerance = f32::max(1.0, total_sheet_area * 1e-5);
    (result.summary.total_area_used + result.summary.total_waste_area - total_sheet_area).abs()
        < tolerance
        && result.summary.sheets_needed == result.layouts.len()
        && FPA(result.summary.total_area_used)
            == FPA(result.layouts.iter().map(SheetLayout::used_area).sum::<f32>())
}
