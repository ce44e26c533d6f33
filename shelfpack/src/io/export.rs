use std::time::Instant;

use crate::entities::{CutInstance, PackingResult};
use crate::io::ext_repr::{
    ExtPlacedPart, ExtSheetLayout, ExtSolution, ExtSummary, ExtUnplacedPart, ExtWasteRect,
};

/// Converts a [`PackingResult`] to its external representation.
pub fn export(instance: &CutInstance, result: &PackingResult, epoch: Instant) -> ExtSolution {
    let layouts = result
        .layouts
        .iter()
        .map(|layout| ExtSheetLayout {
            sheet_index: layout.id,
            placed_parts: layout
                .placed_parts
                .iter()
                .map(|pp| ExtPlacedPart {
                    part_id: pp.instance.request_id,
                    x: pp.x,
                    y: pp.y,
                    width: pp.width,
                    height: pp.height,
                    rotated: pp.rotated,
                })
                .collect(),
            waste_rects: layout
                .waste
                .iter()
                .map(|w| ExtWasteRect {
                    x: w.x_min,
                    y: w.y_min,
                    width: w.width(),
                    height: w.height(),
                })
                .collect(),
            density: layout.density(instance.stock),
        })
        .collect();

    ExtSolution {
        summary: ExtSummary {
            sheets_needed: result.summary.sheets_needed,
            total_area_used: result.summary.total_area_used,
            total_waste_area: result.summary.total_waste_area,
            waste_percent: result.summary.waste_percent,
        },
        layouts,
        unplaced_parts: result
            .unplaced
            .iter()
            .map(|inst| ExtUnplacedPart {
                part_id: inst.request_id,
                width: inst.width,
                height: inst.height,
            })
            .collect(),
        run_time_sec: epoch.elapsed().as_secs(),
    }
}
