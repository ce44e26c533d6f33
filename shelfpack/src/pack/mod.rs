mod expand;
mod shelf_packer;
mod waste;

#[doc(inline)]
pub use expand::expand_and_order;

#[doc(inline)]
pub use shelf_packer::ShelfPacker;

#[doc(inline)]
pub use waste::compute_waste;
