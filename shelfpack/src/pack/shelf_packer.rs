use std::time::Instant;

use log::{debug, info, warn};
use thousands::Separable;

use crate::entities::{
    CutInstance, PackSummary, PackingResult, PartInstance, Sheet, SheetLayout,
};
use crate::pack::expand_and_order;
use crate::util::assertions;

/// Deterministic shelf (FFDH) packer for a [`CutInstance`].
///
/// Consumes part instances one at a time in FFDH order and commits each one to the
/// first feasible placement: an existing shelf on the open sheet, a new shelf on the
/// open sheet, or the first shelf of a fresh sheet. Instances that fit no sheet in
/// either orientation end up in [`PackingResult::unplaced`].
///
/// Runs to completion from a snapshot of its input and returns one immutable result;
/// no state is shared across invocations.
pub struct ShelfPacker {
    pub instance: CutInstance,
}

impl ShelfPacker {
    pub fn new(instance: CutInstance) -> Self {
        Self { instance }
    }

    pub fn solve(&self) -> PackingResult {
        let start = Instant::now();
        let stock = self.instance.stock;
        let kerf = self.instance.kerf;

        let instances = expand_and_order(&self.instance.requests);
        let n_instances = instances.len();

        let mut layouts: Vec<SheetLayout> = vec![];
        let mut unplaced: Vec<PartInstance> = vec![];
        let mut open_sheet: Option<Sheet> = None;

        for inst in instances {
            let freshly_opened = open_sheet.is_none();
            let sheet = open_sheet.get_or_insert_with(|| Sheet::new(layouts.len(), kerf));
            // the blank-sheet test runs only at the moment a sheet is opened;
            // a rejected instance leaves the empty sheet open for later parts
            if freshly_opened && !self.instance.fits_blank_sheet(inst.width, inst.height) {
                warn!(
                    "[FFDH] part {} ({:.1}x{:.1}) exceeds a blank {:.1}x{:.1} sheet in both orientations",
                    inst.request_id, inst.width, inst.height, stock.width, stock.height
                );
                unplaced.push(inst);
                continue;
            }

            // existing shelves, in creation order, un-rotated before rotated
            if let Some((shelf_idx, rotated)) = sheet.find_shelf_placement(&inst, stock, kerf) {
                let placed = sheet.place_on_shelf(shelf_idx, inst, rotated, kerf);
                debug!(
                    "[FFDH] placed part {} at ({:.1}, {:.1}) on sheet {}, shelf {}{}",
                    inst.request_id,
                    placed.x,
                    placed.y,
                    sheet.id,
                    shelf_idx,
                    if rotated { ", rotated" } else { "" }
                );
                continue;
            }

            // a new shelf on the open sheet
            if let Some(rotated) = sheet.find_new_shelf_placement(&inst, stock, kerf) {
                let placed = sheet.place_on_new_shelf(inst, rotated, kerf);
                debug!(
                    "[FFDH] placed part {} at ({:.1}, {:.1}) on sheet {}, new shelf{}",
                    inst.request_id,
                    placed.x,
                    placed.y,
                    sheet.id,
                    if rotated { ", rotated" } else { "" }
                );
                continue;
            }

            // the open sheet is exhausted for this instance; it needs a fresh sheet
            if !self.instance.fits_blank_sheet(inst.width, inst.height) {
                warn!(
                    "[FFDH] part {} ({:.1}x{:.1}) exceeds a blank {:.1}x{:.1} sheet in both orientations",
                    inst.request_id, inst.width, inst.height, stock.width, stock.height
                );
                unplaced.push(inst);
                continue;
            }
            match open_sheet.take() {
                Some(full) if !full.placed_parts.is_empty() => {
                    debug!(
                        "[FFDH] finalizing sheet {} with {} parts",
                        full.id,
                        full.placed_parts.len()
                    );
                    layouts.push(full.finalize(stock, kerf));
                }
                _ => {} // an empty open sheet is discarded, its index is reused
            }
            let fresh = open_sheet.insert(Sheet::new(layouts.len(), kerf));
            match fresh.find_new_shelf_placement(&inst, stock, kerf) {
                Some(rotated) => {
                    let placed = fresh.place_on_new_shelf(inst, rotated, kerf);
                    debug!(
                        "[FFDH] placed part {} at ({:.1}, {:.1}) on fresh sheet {}{}",
                        inst.request_id,
                        placed.x,
                        placed.y,
                        fresh.id,
                        if rotated { ", rotated" } else { "" }
                    );
                }
                None => {
                    // only reachable when the blank-sheet test and the shelf test
                    // disagree within tolerance of the kerf margins
                    warn!(
                        "[FFDH] part {} passed the blank-sheet test but fits no shelf on a fresh sheet",
                        inst.request_id
                    );
                    unplaced.push(inst);
                }
            }
        }

        // the last open sheet was never closed by a new-sheet transition
        if let Some(last) = open_sheet.take() {
            if !last.placed_parts.is_empty() {
                layouts.push(last.finalize(stock, kerf));
            }
        }

        let summary = PackSummary::new(&layouts, stock);
        let result = PackingResult {
            summary,
            layouts,
            unplaced,
        };

        debug_assert!(assertions::all_instances_accounted_for(
            &self.instance,
            &result
        ));
        debug_assert!(
            result
                .layouts
                .iter()
                .all(|l| assertions::no_placed_parts_overlap(l))
        );
        debug_assert!(
            result
                .layouts
                .iter()
                .all(|l| assertions::placed_parts_within_stock(l, stock))
        );

        info!(
            "[FFDH] packed {} of {} parts onto {} sheet(s) in {:.3}ms",
            n_instances - result.unplaced.len(),
            n_instances,
            result.summary.sheets_needed,
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[FFDH] used area: {}, waste: {} ({:.2}%)",
            (result.summary.total_area_used.round() as i64).separate_with_commas(),
            (result.summary.total_waste_area.round() as i64).separate_with_commas(),
            result.summary.waste_percent
        );

        result
    }
}
