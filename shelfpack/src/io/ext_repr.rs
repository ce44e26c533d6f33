use serde::{Deserialize, Serialize};

/// External representation of a [`CutInstance`](crate::entities::CutInstance).
/// All lengths share one implicit linear unit; converting to and from display
/// units is the caller's responsibility.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtCutInstance {
    /// The name of the cutting job
    pub name: String,
    /// Dimensions of the (identical) stock sheets to cut from
    pub sheet: ExtStockSheet,
    /// Material width removed by the cutting tool
    pub kerf: f32,
    /// The parts to cut
    pub parts: Vec<ExtPart>,
}

/// External representation of a [`StockSheet`](crate::entities::StockSheet).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtStockSheet {
    pub width: f32,
    pub height: f32,
}

/// External representation of a [`PartRequest`](crate::entities::PartRequest).
/// Its id is its index in the part list.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtPart {
    pub width: f32,
    pub height: f32,
    /// Amount of times this part has to be cut
    pub quantity: usize,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    pub summary: ExtSummary,
    /// Finalized sheets, in the order they were opened
    pub layouts: Vec<ExtSheetLayout>,
    /// Parts that fit no sheet in either orientation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unplaced_parts: Vec<ExtUnplacedPart>,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

/// External representation of a [`PackSummary`](crate::entities::PackSummary).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtSummary {
    pub sheets_needed: usize,
    pub total_area_used: f32,
    pub total_waste_area: f32,
    pub waste_percent: f32,
}

/// External representation of a [`SheetLayout`](crate::entities::SheetLayout).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSheetLayout {
    pub sheet_index: usize,
    pub placed_parts: Vec<ExtPlacedPart>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub waste_rects: Vec<ExtWasteRect>,
    /// Fraction of the sheet covered by placed parts
    pub density: f32,
}

/// External representation of a [`PlacedPart`](crate::entities::PlacedPart).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtPlacedPart {
    /// Index of the originating part in the instance's part list
    pub part_id: usize,
    pub x: f32,
    pub y: f32,
    /// Placed width: the part's width, or its height if `rotated`
    pub width: f32,
    /// Placed height: the part's height, or its width if `rotated`
    pub height: f32,
    pub rotated: bool,
}

/// An unused rectangular region of a finalized sheet.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtWasteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A part instance that could not be placed anywhere.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtUnplacedPart {
    /// Index of the originating part in the instance's part list
    pub part_id: usize,
    pub width: f32,
    pub height: f32,
}
