use anyhow::{Context, Result};
use log::warn;

use crate::entities::{CutInstance, PartRequest, StockSheet};
use crate::io::ext_repr::ExtCutInstance;

/// Builds a validated [`CutInstance`] from its external representation.
/// Part ids are assigned by position in the part list.
pub fn import(ext_instance: &ExtCutInstance) -> Result<CutInstance> {
    let stock = StockSheet {
        width: ext_instance.sheet.width,
        height: ext_instance.sheet.height,
    };
    let requests = ext_instance
        .parts
        .iter()
        .enumerate()
        .map(|(id, part)| PartRequest::new(id, part.width, part.height, part.quantity))
        .collect();

    let instance = CutInstance::try_new(stock, ext_instance.kerf, requests)
        .with_context(|| format!("invalid cutting job '{}'", ext_instance.name))?;

    for req in &instance.requests {
        if !instance.fits_blank_sheet(req.width, req.height) {
            warn!(
                "[IMPORT] part {} ({:.1}x{:.1}) will not fit a blank sheet in either orientation",
                req.id, req.width, req.height
            );
        }
    }

    Ok(instance)
}
