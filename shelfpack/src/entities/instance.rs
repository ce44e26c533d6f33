use anyhow::Result;
use anyhow::ensure;

use crate::entities::PartRequest;
use crate::geometry::Rect;
use crate::util::FPA;

/// The dimensions of the stock sheets available to cut from.
/// All sheets in a cutting job are identical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StockSheet {
    pub width: f32,
    pub height: f32,
}

impl StockSheet {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corner_and_dims(0.0, 0.0, self.width, self.height)
    }
}

/// A complete cutting job: stock sheet dimensions, kerf and the requested parts.
/// All lengths share one implicit linear unit.
#[derive(Clone, Debug)]
pub struct CutInstance {
    pub stock: StockSheet,
    /// Material width removed by the cutting tool, treated as dead space
    /// at sheet margins and between adjacent parts
    pub kerf: f32,
    pub requests: Vec<PartRequest>,
}

impl CutInstance {
    /// Fails fast on contract violations (non-positive dimensions, negative kerf,
    /// zero quantities) instead of producing nonsense geometry.
    pub fn try_new(stock: StockSheet, kerf: f32, requests: Vec<PartRequest>) -> Result<Self> {
        ensure!(
            stock.width > 0.0 && stock.height > 0.0 && stock.width.is_finite() && stock.height.is_finite(),
            "stock sheet must have positive dimensions, got {}x{}",
            stock.width,
            stock.height
        );
        ensure!(
            kerf >= 0.0 && kerf.is_finite(),
            "kerf must be non-negative, got {kerf}"
        );
        for req in &requests {
            ensure!(
                req.width > 0.0 && req.height > 0.0 && req.width.is_finite() && req.height.is_finite(),
                "part {} must have positive dimensions, got {}x{}",
                req.id,
                req.width,
                req.height
            );
            ensure!(
                req.quantity >= 1,
                "part {} must have a quantity of at least 1",
                req.id
            );
        }
        Ok(CutInstance {
            stock,
            kerf,
            requests,
        })
    }

    /// Total number of physical units to cut, across all requests.
    pub fn total_part_qty(&self) -> usize {
        self.requests.iter().map(|r| r.quantity).sum()
    }

    /// Whether a part of the given dimensions fits an empty sheet in either
    /// orientation, with a kerf margin on all four sides.
    pub fn fits_blank_sheet(&self, width: f32, height: f32) -> bool {
        let usable_w = self.stock.width - 2.0 * self.kerf;
        let usable_h = self.stock.height - 2.0 * self.kerf;
        let fits_normal = FPA(width) <= FPA(usable_w) && FPA(height) <= FPA(usable_h);
        let fits_rotated = FPA(height) <= FPA(usable_w) && FPA(width) <= FPA(usable_h);
        fits_normal || fits_rotated
    }
}
