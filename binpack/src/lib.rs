//! Heuristic solvers for the one-dimensional Bin Packing Problem (BPP)

/// Entities to model the Bin Packing Problem (BPP)
pub mod entities;

/// The packing heuristics themselves
pub mod heuristics;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use error::PackResult;
