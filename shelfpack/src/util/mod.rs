mod fpa;

pub mod assertions;

#[doc(inline)]
pub use fpa::FPA;

#[doc(inline)]
pub use fpa::TOLERANCE;
