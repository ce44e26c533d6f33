//! `shelfpack` computes cutting layouts for rectangular parts on standard
//! rectangular stock sheets, minimizing the number of sheets used while
//! respecting a kerf (blade-width) margin between parts.
//!
//! The heuristic is shelf-based FFDH (First-Fit Decreasing Height): parts are
//! sorted by decreasing height, placed into the first shelf that fits (trying
//! the un-rotated orientation before the 90° rotated one), else onto a new
//! shelf, else onto a new sheet. It favors speed and determinism over packing
//! efficiency: identical inputs always produce identical layouts.
//!
//! The crate is unit-agnostic: it operates on whatever linear unit it is
//! given, consistently. Unit conversion is the caller's concern.

/// Entities to model a cutting job and its resulting layouts
pub mod entities;

/// Geometry helpers
pub mod geometry;

/// Importing cutting jobs into and exporting results out of this library
pub mod io;

/// The shelf-packing algorithm itself
pub mod pack;

/// Helper functions which do not belong to any specific module
pub mod util;
