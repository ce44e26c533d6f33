mod instance;
mod part;
mod placed_part;
mod result;
mod sheet;
mod shelf;

#[doc(inline)]
pub use instance::CutInstance;

#[doc(inline)]
pub use instance::StockSheet;

#[doc(inline)]
pub use part::PartInstance;

#[doc(inline)]
pub use part::PartRequest;

#[doc(inline)]
pub use placed_part::PlacedPart;

#[doc(inline)]
pub use result::PackSummary;

#[doc(inline)]
pub use result::PackingResult;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use sheet::SheetLayout;

#[doc(inline)]
pub use shelf::Shelf;
